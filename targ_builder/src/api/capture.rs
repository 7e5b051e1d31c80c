use thiserror::Error;

use crate::model::Nargs;

/// Marker trait for capturable types that can formulate an option in the Cli.
pub trait CliOption {}

/// Marker trait for capturable types that can formulate a positional in the Cli.
pub trait CliArgument {}

/// Behaviour to capture an explicit generic type T from an input `&str`.
///
/// We use this at the bottom of the parser object graph so the compiler can maintain each field's type.
#[doc(hidden)]
pub trait GenericCapturable<'a, T> {
    /// Declare that the argument has been matched.
    fn matched(&mut self);

    /// Capture a value into the generic type T for this argument.
    fn capture(&mut self, token: &str) -> Result<(), InvalidConversion>;

    /// Get the `Nargs` for this implementation.
    fn nargs(&self) -> Nargs;
}

/// A token which the field's type could not be parsed from.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot convert '{token}' to {type_name}.")]
#[doc(hidden)]
pub struct InvalidConversion {
    pub(crate) token: String,
    pub(crate) type_name: &'static str,
}

impl InvalidConversion {
    pub(crate) fn of<T>(token: &str) -> Self {
        Self {
            token: token.to_string(),
            type_name: std::any::type_name::<T>(),
        }
    }
}
