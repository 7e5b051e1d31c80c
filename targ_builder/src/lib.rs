//! Builder module for `targ`.
//! See the `targ` crate documentation root for full details.
#![deny(missing_docs)]
mod api;
mod convention;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;

pub use api::*;
pub use convention::*;
pub use model::*;
pub use parser::{ConfigError, ErrorContext, GeneralParser, ParseError};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
