use crate::api::{CliArgument, CliOption, GenericCapturable, InvalidConversion};
use crate::model::{Descriptor, Nargs};
use crate::parser::{AnonymousCapturable, Argument};

pub(crate) struct AnonymousCapture<'a, T: 'a> {
    field: Box<dyn GenericCapturable<'a, T> + 'a>,
}

impl<'a, T> AnonymousCapture<'a, T> {
    pub(crate) fn bind(field: impl GenericCapturable<'a, T> + 'a) -> Self {
        Self {
            field: Box::new(field),
        }
    }
}

impl<'a, T> AnonymousCapturable for AnonymousCapture<'a, T> {
    fn matched(&mut self) {
        self.field.matched();
    }

    fn capture(&mut self, token: &str) -> Result<(), InvalidConversion> {
        self.field.capture(token)
    }

    fn nargs(&self) -> Nargs {
        self.field.nargs()
    }
}

pub(super) struct ParameterInner<'a, T> {
    descriptor: Descriptor,
    field: AnonymousCapture<'a, T>,
}

impl<'a, T> std::fmt::Debug for ParameterInner<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let help = match self.descriptor.help() {
            Some(h) => format!(", {h}"),
            None => "".to_string(),
        };

        write!(
            f,
            "{kind:?}[{t}, {nargs}, {name}{help}]",
            kind = self.descriptor.kind(),
            t = std::any::type_name::<T>(),
            nargs = self.field.nargs(),
            name = self.descriptor.name(),
        )
    }
}

impl<'a, T: 'a> From<ParameterInner<'a, T>> for Argument<'a> {
    fn from(value: ParameterInner<'a, T>) -> Self {
        let ParameterInner { descriptor, field } = value;
        Argument::new(descriptor, Box::new(field))
    }
}

/// A declared command line argument: either an option or a positional.
///
/// Add to the parser via [`crate::CommandLineParser::add`].
pub struct Parameter<'a, T>(ParameterInner<'a, T>);

impl<'a, T> Parameter<'a, T> {
    /// Create an option recognized only by its short name, ex: `-S`.
    ///
    /// ### Example
    /// ```
    /// # use targ_builder as targ;
    /// use targ::{Parameter, Switch};
    ///
    /// let mut assembly_out: bool = false;
    /// Parameter::short(Switch::new(&mut assembly_out), 'S')
    ///     .help("Compile but do not assemble.");
    /// ```
    pub fn short(field: impl GenericCapturable<'a, T> + CliOption + 'a, short: char) -> Self {
        Self::build(Descriptor::option(Some(short), None), field)
    }

    /// Create an option recognized only by its long name, ex: `--arch`.
    ///
    /// ### Example
    /// ```
    /// # use targ_builder as targ;
    /// use targ::{Parameter, Scalar};
    ///
    /// let mut arch: String = String::default();
    /// Parameter::long(Scalar::new(&mut arch), "arch");
    /// ```
    pub fn long(
        field: impl GenericCapturable<'a, T> + CliOption + 'a,
        long: impl Into<String>,
    ) -> Self {
        Self::build(Descriptor::option(None, Some(long.into())), field)
    }

    /// Create an option recognized by both its short and long names, ex: `-o` and `--output`.
    ///
    /// ### Example
    /// ```
    /// # use targ_builder as targ;
    /// use targ::{Collection, Parameter};
    ///
    /// let mut multiple: Vec<String> = Vec::default();
    /// Parameter::option(Collection::new(&mut multiple), 'm', "multiple");
    /// ```
    pub fn option(
        field: impl GenericCapturable<'a, T> + CliOption + 'a,
        short: char,
        long: impl Into<String>,
    ) -> Self {
        Self::build(Descriptor::option(Some(short), Some(long.into())), field)
    }

    /// Create a positional, which claims tokens by its place in the declaration order.
    ///
    /// ### Example
    /// ```
    /// # use targ_builder as targ;
    /// use targ::{Parameter, Scalar};
    ///
    /// let mut input: String = String::default();
    /// Parameter::positional(Scalar::new(&mut input), "INPUT");
    /// ```
    pub fn positional(
        field: impl GenericCapturable<'a, T> + CliArgument + 'a,
        name: impl Into<String>,
    ) -> Self {
        Self::build(Descriptor::positional(name), field)
    }

    fn build(descriptor: Descriptor, field: impl GenericCapturable<'a, T> + 'a) -> Self {
        Self(ParameterInner {
            descriptor,
            field: AnonymousCapture::bind(field),
        })
    }

    /// Document the help message for this parameter.
    /// If repeated, only the final message will apply.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.0.descriptor.set_help(description.into());
        self
    }

    pub(super) fn consume(self) -> ParameterInner<'a, T> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Collection, Optional, Scalar, Switch};
    use crate::model::ArgumentKind;

    #[test]
    fn short_option() {
        let mut variable = false;
        let parameter = Parameter::short(Switch::new(&mut variable), 'v').help("Show verbose output");
        let inner = parameter.consume();
        assert_eq!(inner.descriptor.kind(), ArgumentKind::Option);
        assert_eq!(inner.descriptor.short(), Some('v'));
        assert_eq!(inner.descriptor.long(), None);
        assert_eq!(inner.descriptor.help(), Some("Show verbose output"));
        assert_eq!(
            format!("{inner:?}"),
            "Option[bool, Zero, -v, Show verbose output]"
        );
    }

    #[test]
    fn long_option() {
        let mut variable: Option<u32> = None;
        let inner = Parameter::long(Optional::new(&mut variable), "level").consume();
        assert_eq!(inner.descriptor.short(), None);
        assert_eq!(inner.descriptor.long(), Some("level"));
        assert_eq!(format!("{inner:?}"), "Option[u32, ZeroOrOne, --level]");
    }

    #[test]
    fn short_long_option() {
        let mut variable: Vec<String> = Vec::default();
        let inner = Parameter::option(Collection::new(&mut variable), 'm', "multiple").consume();
        assert_eq!(inner.descriptor.short(), Some('m'));
        assert_eq!(inner.descriptor.long(), Some("multiple"));
        assert_eq!(inner.descriptor.name(), "-m/--multiple");
    }

    #[test]
    fn positional() {
        let mut variable: u32 = 0;
        let inner = Parameter::positional(Scalar::new(&mut variable), "COUNT")
            .help("discarded")
            .help("How many.")
            .consume();
        assert_eq!(inner.descriptor.kind(), ArgumentKind::Positional);
        assert_eq!(inner.descriptor.name(), "COUNT");
        assert_eq!(inner.descriptor.help(), Some("How many."));
        assert_eq!(format!("{inner:?}"), "Positional[u32, One, COUNT, How many.]");
    }
}
