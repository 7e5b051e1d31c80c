mod base;
mod interface;
mod middleware;

pub(crate) use base::{AnonymousCapturable, Argument, Parser};
pub use base::{ConfigError, ParseError};
pub(crate) use interface::{ConsoleInterface, UserInterface};
pub use interface::ErrorContext;
pub use middleware::GeneralParser;
