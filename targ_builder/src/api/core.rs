use crate::api::Parameter;
use crate::convention::Convention;
use crate::parser::{Argument, ConfigError, ConsoleInterface, GeneralParser, Parser, UserInterface};

/// The command line parser builder.
///
/// Arguments are declared with [`CommandLineParser::add`]; the declaration order is the order in which arguments are offered each token.
///
/// ### Example
/// ```
/// # use targ_builder as targ;
/// use targ::{CommandLineParser, Unix};
///
/// let parser = CommandLineParser::new(Unix::default())
///     // Configure with CommandLineParser::add.
///     .build();
/// parser.parse_argv(&["program"]).unwrap();
/// ```
pub struct CommandLineParser<'a> {
    convention: Box<dyn Convention + 'a>,
    arguments: Vec<Argument<'a>>,
}

impl<'a> CommandLineParser<'a> {
    /// Create a command line parser running under the given convention.
    ///
    /// ### Example
    /// ```
    /// # use targ_builder as targ;
    /// use targ::{Basic, CommandLineParser};
    ///
    /// let parser = CommandLineParser::new(Basic::with_prefixes("/", "//"))
    ///     .build();
    ///
    /// parser.parse_argv(&["program"]).unwrap();
    /// ```
    pub fn new(convention: impl Convention + 'a) -> Self {
        Self {
            convention: Box::new(convention),
            arguments: Vec::default(),
        }
    }

    /// Add an option/positional to the command line parser.
    ///
    /// For each token, arguments are tried in the order they were added, and the first to consume wins.
    /// So a positional added before an option will claim that option's flag as its value.
    ///
    /// ### Example
    /// ```
    /// # use targ_builder as targ;
    /// use targ::{CommandLineParser, Parameter, Scalar, Unix};
    ///
    /// let mut a: u32 = 0;
    /// let mut b: u32 = 0;
    /// let parser = CommandLineParser::new(Unix::default())
    ///     .add(Parameter::positional(Scalar::new(&mut a), "a"))
    ///     .add(Parameter::positional(Scalar::new(&mut b), "b"))
    ///     .build();
    ///
    /// parser.parse_argv(&["program", "1", "2"]).unwrap();
    ///
    /// assert_eq!(a, 1);
    /// assert_eq!(b, 2);
    /// ```
    pub fn add<T: 'a>(mut self, parameter: Parameter<'a, T>) -> Self {
        self.arguments.push(Argument::from(parameter.consume()));
        self
    }

    fn build_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<GeneralParser<'a>, ConfigError> {
        let parser = Parser::new(self.convention, self.arguments)?;
        Ok(GeneralParser::new(parser, user_interface))
    }

    /// Build the command line parser as a Result.
    /// This finalizes the configuration and checks for errors (ex: a repeated option name).
    pub fn build_parser(self) -> Result<GeneralParser<'a>, ConfigError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Build the command line parser.
    /// This finalizes the configuration and checks for errors (ex: a repeated option name).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> GeneralParser<'a> {
        match self.build_parser() {
            Ok(gp) => gp,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Collection, Optional, Scalar, Switch};
    use crate::convention::{Basic, Unix};
    use crate::model::ArgumentKind;
    use crate::parser::ParseError;
    use rstest::rstest;

    #[test]
    fn empty_build() {
        let parser = CommandLineParser::new(Unix::default()).build_parser().unwrap();
        assert!(parser.descriptors().is_empty());
        assert_eq!(parser.parse_argv(&["program"]).unwrap(), "program");
    }

    #[test]
    fn duplicate_build() {
        let mut a = false;
        let mut b: u32 = 0;
        let result = CommandLineParser::new(Unix::default())
            .add(Parameter::short(Switch::new(&mut a), 'a'))
            .add(Parameter::option(Scalar::new(&mut b), 'a', "b"))
            .build_parser();

        assert_matches!(result, Err(ConfigError(_)));
    }

    #[test]
    fn descriptors_with_help() {
        let mut verbose = false;
        let mut input: String = String::default();
        let parser = CommandLineParser::new(Unix::default())
            .add(Parameter::option(Switch::new(&mut verbose), 'v', "verbose").help("Show verbose output"))
            .add(Parameter::positional(Scalar::new(&mut input), "INPUT"))
            .build_parser()
            .unwrap();

        let descriptors = parser.descriptors();

        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].kind(), ArgumentKind::Option);
        assert_eq!(descriptors[0].help(), Some("Show verbose output"));
        assert_eq!(descriptors[1].kind(), ArgumentKind::Positional);
        assert_eq!(descriptors[1].name(), "INPUT");
        assert_eq!(descriptors[1].help(), None);
    }

    #[rstest]
    #[case(vec!["p", "/v", "//level", "2", "/i", "1", "2", "//", "x"], true, Some(2), vec![1, 2])]
    #[case(vec!["p", "//level", "/v"], true, None, vec![])]
    #[case(vec!["p", "/i", "3"], false, Some(0), vec![3])]
    fn custom_prefixes(
        #[case] argv: Vec<&str>,
        #[case] expected_verbose: bool,
        #[case] expected_level: Option<u8>,
        #[case] expected_items: Vec<u32>,
    ) {
        let mut verbose = false;
        let mut level: Option<u8> = Some(0);
        let mut items: Vec<u32> = Vec::default();
        let mut rest: Vec<String> = Vec::default();
        let parser = CommandLineParser::new(Basic::with_prefixes("/", "//"))
            .add(Parameter::short(Switch::new(&mut verbose), 'v'))
            .add(Parameter::long(Optional::new(&mut level), "level"))
            .add(Parameter::short(Collection::new(&mut items), 'i'))
            .add(Parameter::positional(Collection::new(&mut rest), "REST"))
            .build_parser()
            .unwrap();

        parser.parse_argv(argv.as_slice()).unwrap();

        assert_eq!(verbose, expected_verbose);
        assert_eq!(level, expected_level);
        assert_eq!(items, expected_items);
    }

    #[test]
    fn custom_prefixes_reject_unix() {
        let mut verbose = false;
        let parser = CommandLineParser::new(Basic::with_prefixes("/", "//"))
            .add(Parameter::short(Switch::new(&mut verbose), 'v'))
            .build_parser()
            .unwrap();

        assert_matches!(
            parser.parse_argv(&["p", "-v"]),
            Err(ParseError::UnrecognizedToken { index: 1, .. })
        );
    }

    #[test]
    fn parse_is_deterministic() {
        let argv = ["prog", "-x", "cpp", "-m", "a", "b", "--", "-x"];
        let mut results = Vec::default();

        for _ in 0..2 {
            let mut lang: String = String::default();
            let mut multiple: Vec<String> = Vec::default();
            let mut rest: Vec<String> = Vec::default();
            let parser = CommandLineParser::new(Unix::default())
                .add(Parameter::short(Scalar::new(&mut lang), 'x'))
                .add(Parameter::short(Collection::new(&mut multiple), 'm'))
                .add(Parameter::positional(Collection::new(&mut rest), "REST"))
                .build_parser()
                .unwrap();

            parser.parse_argv(&argv).unwrap();
            results.push((lang, multiple, rest));
        }

        assert_eq!(results[0], results[1]);
        assert_eq!(
            results[0],
            (
                "cpp".to_string(),
                vec!["a".to_string(), "b".to_string()],
                vec!["-x".to_string()]
            )
        );
    }
}
