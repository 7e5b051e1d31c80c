//! Derive Api for `targ` configuration.
//!
//! ### Getting Started
//! Use the derive Api by starting with a parameter struct `S` instrumented with `#[derive(TargParser)]`.
//! `S` must implement [`Default`]: its defaults are the initial values of the parameters.
//! This will generate the functions:
//! * `S::targ_parse() -> S`, which parses the Cli [`std::env::args`], exiting on error.
//! * `S::targ_parse_argv(&[&str]) -> Result<S, ParseError>`, which parses the given argument vector.
//!
//! Both functions have the same visibility as `S`.
//! A short, long, or positional name repeated across fields is a compile error.
//!
//! ```
//! use targ::derive::*;
//!
//! #[derive(Debug, Default, TargParser)]
//! struct Parameters {
//!     #[targ(short = 'v')]
//!     verbose: bool,
//!     daikon_root: Option<String>,
//!     #[targ(positional)]
//!     carrots: Vec<u32>,
//! }
//!
//! let parameters = Parameters::targ_parse_argv(&["demo", "-v", "--daikon-root", "/tmp", "1", "2"]).unwrap();
//!
//! assert!(parameters.verbose);
//! assert_eq!(parameters.daikon_root, Some("/tmp".to_string()));
//! assert_eq!(parameters.carrots, vec![1, 2]);
//! ```
//!
//! ### Parser Configuration
//! * `#[targ(convention = EXPR)]` sets the [Convention](../trait.Convention.html) of the parser.
//! Without it, the parser uses `targ::Unix::default()`.
//!
//! ### Parameter Configuration
//! Each named field declares one parameter, in field order.
//! The implicit Cli inference uses the following rules:
//! ```console
//! Type        | Parameter
//! -----------------------------------
//! bool        | Parameter::long(Switch::new(..), ..)
//! Option<T>   | Parameter::long(Optional::new(..), ..)
//! Vec<T>      | Parameter::long(Collection::new(..), ..)
//! HashSet<T>  | Parameter::long(Collection::new(..), ..)
//! T           | Parameter::long(Scalar::new(..), ..)
//! ```
//!
//! The implicit long name is the field name, with `_` replaced by `-`.
//! The following field attributes adjust the inference:
//! * `#[targ(short = C)]` sets the short name; `C` must be a char value (ex: `'c'`).
//! Alone, the parameter has no long name.
//! * `#[targ(long = S)]` sets the long name; `S` must be a non-empty string value.
//! * `#[targ(positional)]` declares a positional named after the upper cased field name.
//! Not applicable to `bool` or `Option<T>` fields, nor together with `short`/`long`.
//! * `#[targ(help = EXPR)]` sets the [help](../struct.Parameter.html#method.help) message.
//! * `#[targ(skip)]` leaves the field out of the parser.
//!
//! A partial example of these rules is provided as follows:
//! ```ignore
//! #[derive(Default, TargParser)]
//! struct Parameters {
//!     #[targ(short = 'f', long = "fox", help = "The fox.")]
//!     quick_fox: usize,
//!     // the above generates:
//!     //  .add(Parameter::option(Scalar::new(&mut target.quick_fox), 'f', "fox").help("The fox."))
//!
//!     brown_dog: Option<usize>,
//!     // the above generates:
//!     //  .add(Parameter::long(Optional::new(&mut target.brown_dog), "brown-dog"))
//!
//!     #[targ(positional)]
//!     jumps: Vec<String>,
//!     // the above generates:
//!     //  .add(Parameter::positional(Collection::new(&mut target.jumps), "JUMPS"))
//! }
//! ```

pub use targ_derive::*;
