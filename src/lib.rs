//! `targ` is a small, convention driven command line parser for Rust.
//!
//! `targ` binds command line arguments directly onto your program's variables.
//! It prioritizes the following design concerns:
//! * *Type safe argument parsing*:
//! The user should not call any `&str -> T` conversion functions directly.
//! * *Pluggable conventions*:
//! How an option looks (`-v`, `--verbose`, `/v`, ..) and how meta tokens (ex: `--`) behave is owned by a [`Convention`], not by the parser.
//! * *Option vs. positional paradigm*:
//! Options are matched by name (`-c`, `--name`).
//! Positionals are matched by order, and claim any token no option wants.
//! * *Basic UX*:
//! `targ` reports the first malformed token with a caret pointing at it.
//! It does not render usage/help; the declared [`Descriptor`]s are available for programs that want to.
//!
//! # Usage
//! via [derive Api](./derive/index.html):
//! ```no_run
//! use targ::derive::*;
//!
//! #[derive(Debug, Default, TargParser)]
//! struct Compiler {
//!     #[targ(short = 'S', help = "Compile only; do not assemble or link.")]
//!     assemble: bool,
//!     #[targ(short = 'x', help = "The input language.")]
//!     language: String,
//!     #[targ(help = "The target architecture.")]
//!     arch: Option<String>,
//!     #[targ(short = 'o', long = "output")]
//!     output: String,
//!     #[targ(short = 'm', long = "multiple")]
//!     multiple: Vec<String>,
//! }
//!
//! let compiler = Compiler::targ_parse();
//! println!("{compiler:?}");
//! ```
//! or equivalently via builder Api (this page):
//! ```no_run
//! use targ::{Collection, CommandLineParser, Optional, Parameter, Scalar, Switch, Unix};
//!
//! let mut assemble: bool = false;
//! let mut language: String = String::default();
//! let mut arch: Option<String> = None;
//! let mut output: String = "a.out".to_string();
//! let mut multiple: Vec<String> = Vec::default();
//!
//! let parser = CommandLineParser::new(Unix::default())
//!     .add(Parameter::short(Switch::new(&mut assemble), 'S').help("Compile only; do not assemble or link."))
//!     .add(Parameter::short(Scalar::new(&mut language), 'x').help("The input language."))
//!     .add(Parameter::long(Optional::new(&mut arch), "arch").help("The target architecture."))
//!     .add(Parameter::option(Scalar::new(&mut output), 'o', "output"))
//!     .add(Parameter::option(Collection::new(&mut multiple), 'm', "multiple"))
//!     .build();
//! parser.parse();
//!
//! println!("{assemble} {language} {arch:?} {output} {multiple:?}");
//! ```
//!
//! Both of these generate the same Cli program:
//! ```console
//! $ compiler -S -x c --arch x86 -o main -m a b
//! true c Some("x86") main ["a", "b"]
//!
//! $ compiler -x
//! Parse error: Option '-x' expects one argument.
//! compiler -x
//!          ^
//!
//! $ compiler what
//! Parse error: unrecognized token 'what'.
//! compiler what
//!          ^
//! ```
//!
//! # Derive Api
//! We recommend using the [derive Api](./derive/index.html) when the program's variables live in one struct.
//! The next section explains the structure and semantics of `targ` using the builder Api, which applies to both builder and derive Apis.
//!
//! # Builder Api
//! Configure `targ` by starting with a [`CommandLineParser`] and `add`ing parameters.
//! There are two classes of parameters: options ([`Parameter::short`], [`Parameter::long`], [`Parameter::option`]) and [`Parameter::positional`].
//!
//! Each parameter takes a *field*, which binds a variable and selects its policy:
//! * [`Switch`]: a `bool` option taking no value; set to `true` when matched.
//! * [`Scalar`]: a single value, converted via [`std::str::FromStr`]; the last occurrence wins.
//! As a positional, it claims exactly one token.
//! * [`Collection`]: many values, each added via [Collectable](./prelude/trait.Collectable.html).
//! As an option, it claims every following token up to the next option shaped token.
//! As a positional, it claims one token at a time, for as long as tokens remain.
//! `targ` provides `Collectable` implementations for `Vec<T>` and `HashSet<T>`.
//! * [`Optional`]: an `Option<T>` option whose value may be omitted.
//! When matched without a value, the variable is reset to `None`.
//!
//! Every `T` is parsed via `std::str::FromStr`; a failed conversion is a [`ParseError::InvalidConversion`].
//!
//! ### Defaults
//! `targ` has no notion of a default value.
//! The defaults of your Cli come from the variable initializations when configuring `targ`.
//! ```
//! // The default for the 'output' parameter is "a.out".
//! let mut output: String = "a.out".to_string();
//! ```
//!
//! A `Collection` is extended, never reset: its initial contents survive the parse.
//!
//! # Conventions
//! A [`Convention`] decides what option shaped tokens look like, and may intercept tokens before any argument sees them.
//! * [`Basic`]: plain prefixes (default `-` and `--`), no meta tokens.
//! * [`Unix`]: `-` and `--`, where a bare `--` stops option parsing.
//! Every token after it goes to the positionals, even `-v`.
//! Each `--` is consumed as the marker itself and never reaches an argument.
//!
//! ```
//! use targ::{Collection, CommandLineParser, Parameter, Switch, Unix};
//!
//! let mut verbose: bool = false;
//! let mut rest: Vec<String> = Vec::default();
//! let parser = CommandLineParser::new(Unix::default())
//!     .add(Parameter::short(Switch::new(&mut verbose), 'v'))
//!     .add(Parameter::positional(Collection::new(&mut rest), "REST"))
//!     .build();
//!
//! parser.parse_argv(&["program", "-v", "--", "-v", "--", "x"]).unwrap();
//!
//! assert!(verbose);
//! assert_eq!(rest, vec!["-v".to_string(), "x".to_string()]);
//! ```
//!
//! # Cli Semantics
//! `targ` parses the Cli tokens according to the following set of rules.
//!
//! * `argv[0]` is the program name; it is returned by the parse and never matched.
//! * Tokens are consumed left to right.
//! For each token, the convention may claim it first (see [`Convention::metaparse`]).
//! Otherwise, the arguments the convention allows are offered the token in declaration order, and the first to consume it wins.
//! * Options match exactly by name: `-c` for a short name, `--name` for a long name.
//! There is no `--name=value` splitting and no `-abc` short bundling.
//! * A `Scalar` option takes the next token as its value, even if that token looks like an option.
//! It is a [`ParseError::MissingValue`] when no token remains.
//! * Positionals take any token no earlier declared argument wants, including option shaped tokens.
//! Declare options before positionals to have the options win.
//! * A token nobody consumes is a [`ParseError::UnrecognizedToken`].
//!
//! # Features
//! * `tracing_debug`: emit `tracing` debug events while parsing.
pub mod derive;
pub use targ_builder::*;
