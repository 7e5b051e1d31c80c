use crate::convention::{LONG_PREFIX, SHORT_PREFIX};

/// The number of value tokens an argument claims after it has been matched.
///
/// Options count the tokens following their flag; positionals always claim the matched token itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nargs {
    /// No values: the flag alone (a switch).
    Zero,
    /// Precisely one value, which must be present.
    One,
    /// One value if the following token is not option-shaped, otherwise none.
    ZeroOrOne,
    /// Any number of values, up to the next option-shaped token.
    Any,
}

impl std::fmt::Display for Nargs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Discriminates the two families of declared arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentKind {
    /// Recognized by a short or long prefix, ex: `-v` or `--verbose`.
    Option,
    /// Recognized by its position in the token stream.
    Positional,
}

/// The identity of a declared argument.
///
/// An option always carries at least one of a short or long name.
/// A positional carries neither, only its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    kind: ArgumentKind,
    short: Option<char>,
    long: Option<String>,
    name: String,
    help: Option<String>,
}

impl Descriptor {
    pub(crate) fn option(short: Option<char>, long: Option<String>) -> Self {
        assert!(
            short.is_some() || long.is_some(),
            "internal error - an option must have a short or long name"
        );
        let name = option_name(short, long.as_deref(), SHORT_PREFIX, LONG_PREFIX);

        Self {
            kind: ArgumentKind::Option,
            short,
            long,
            name,
            help: None,
        }
    }

    pub(crate) fn positional(name: impl Into<String>) -> Self {
        Self {
            kind: ArgumentKind::Positional,
            short: None,
            long: None,
            name: name.into(),
            help: None,
        }
    }

    /// Re-render the display name of an option with the prefixes of the convention it runs under.
    pub(crate) fn render_prefixes(&mut self, short_prefix: &str, long_prefix: &str) {
        if self.kind == ArgumentKind::Option {
            self.name = option_name(self.short, self.long.as_deref(), short_prefix, long_prefix);
        }
    }

    pub(crate) fn set_help(&mut self, help: String) {
        self.help.replace(help);
    }

    /// The kind of this argument.
    pub fn kind(&self) -> ArgumentKind {
        self.kind
    }

    /// The short name, if any (options only).
    pub fn short(&self) -> Option<char> {
        self.short
    }

    /// The long name, if any (options only).
    pub fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// The display name used in error messages.
    ///
    /// Options are rendered with the prefixes of the parser's convention (ex: `-o/--output`, or `/o///output`), positionals by their declared name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The help text, if documented.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

fn option_name(
    short: Option<char>,
    long: Option<&str>,
    short_prefix: &str,
    long_prefix: &str,
) -> String {
    match (short, long) {
        (Some(s), Some(l)) => format!("{short_prefix}{s}/{long_prefix}{l}"),
        (Some(s), None) => format!("{short_prefix}{s}"),
        (None, Some(l)) => format!("{long_prefix}{l}"),
        (None, None) => String::default(),
    }
}
