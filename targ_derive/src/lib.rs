//! Derive module for `targ`.
//! See the `targ` crate documentation root for full details.
extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::DeriveParser;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

/// Derive a command line parser from a struct of named fields.
///
/// Each field declares one argument, in field order.
/// The struct must implement [`Default`]; its defaults are the initial values of the arguments.
///
/// Struct attribute:
/// * `#[targ(convention = EXPR)]`: the parsing convention (default `targ::Unix::default()`).
///
/// Field attributes (`#[targ(..)]`):
/// * `short = 'c'`: the short option name.
/// * `long = "name"`: the long option name.
/// * `positional`: declare a positional (named after the field, upper cased).
/// * `help = EXPR`: the help message.
/// * `skip`: leave the field out of the parser.
///
/// Without any of `short`, `long`, or `positional`, the field name (`_` replaced by `-`) is the long name.
///
/// The field type selects the argument's policy:
/// `bool` is a `Switch`, `Option<T>` is an `Optional`, `Vec<T>`/`HashSet<T>` is a `Collection`, and anything else is a `Scalar`.
///
/// Generates `targ_parse_argv(&[&str]) -> Result<Self, targ::ParseError>` and `targ_parse() -> Self`, with the struct's visibility.
#[proc_macro_derive(TargParser, attributes(targ))]
pub fn targ_parser(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);

    match DeriveParser::try_from(derive_input) {
        Ok(derive_parser) => TokenStream2::from(derive_parser).into(),
        Err(error) => error.to_compile_error().into(),
    }
}
