use std::env;

use crate::model::Descriptor;
use crate::parser::base::*;
use crate::parser::interface::{ErrorContext, UserInterface};

/// The configured command line parser.
/// Built via `CommandLineParser::build` or `CommandLineParser::build_parser`.
///
/// A parser is good for exactly one parse: each parse method consumes it, releasing the borrowed variables.
pub struct GeneralParser<'a> {
    parser: Parser<'a>,
    user_interface: Box<dyn UserInterface>,
}

impl<'a> std::fmt::Debug for GeneralParser<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneralParser")
            .field("parser", &self.parser)
            .finish()
    }
}

impl<'a> GeneralParser<'a> {
    pub(crate) fn new(parser: Parser<'a>, user_interface: Box<dyn UserInterface>) -> Self {
        Self {
            parser,
            user_interface,
        }
    }

    /// The declared arguments, in declaration order.
    ///
    /// `targ` does not generate usage strings; use these to render your own help.
    pub fn descriptors(&self) -> Vec<Descriptor> {
        self.parser.descriptors()
    }

    /// Run the command line parser against an argument vector.
    ///
    /// `argv[0]` is the program name: it is returned verbatim and never matched.
    /// The remaining tokens are consumed left to right, mutating the bound variables as they are matched.
    /// The first malformed token aborts the parse with a [`ParseError`]; variables matched before it keep their new values.
    ///
    /// ### Example
    /// ```
    /// # use targ_builder as targ;
    /// use targ::{CommandLineParser, Parameter, Switch, Unix};
    ///
    /// let mut verbose: bool = false;
    /// let parser = CommandLineParser::new(Unix::default())
    ///     .add(Parameter::option(Switch::new(&mut verbose), 'v', "verbose"))
    ///     .build();
    ///
    /// let program = parser.parse_argv(&["prog", "--verbose"]).unwrap();
    ///
    /// assert_eq!(program, "prog");
    /// assert!(verbose);
    /// ```
    pub fn parse_argv(self, argv: &[&str]) -> Result<String, ParseError> {
        self.parser.consume(argv)
    }

    fn invoke(self, argv: &[&str]) -> Result<String, i32> {
        let GeneralParser {
            parser,
            user_interface,
        } = self;

        parser.consume(argv).map_err(|error| {
            let index = error.index();
            user_interface.print_error(error);

            if let Some(index) = index {
                user_interface.print_error_context(ErrorContext::new(index, argv));
            }

            1
        })
    }

    /// Run the command line parser against the Cli [`env::args`].
    ///
    /// Returns the program name.
    /// If the parser encounters an error (ex: un-matched token, un-convertible value, etc), it prints the error and exits with error code `1` (via [`std::process::exit`]).
    pub fn parse(self) -> String {
        let command_input: Vec<String> = env::args().collect();

        match self.invoke(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(program) => program,
            Err(exit_code) => std::process::exit(exit_code),
        }
    }
}
