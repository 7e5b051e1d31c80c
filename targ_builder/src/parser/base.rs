use std::collections::HashSet;
use thiserror::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::InvalidConversion;
use crate::convention::Convention;
use crate::model::{ArgumentKind, Descriptor, Nargs};

/// An invalid parser configuration (ex: a repeated option name), detected when building the parser.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// A malformed command line.
///
/// Raised at the first offending token (in left to right order); the parse stops there.
/// Indices refer to positions in the full `argv`, where `0` is the program name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The argument vector did not even contain the program name.
    #[error("Parse error: missing program name.")]
    MissingProgram,

    /// An option was matched, but its required value token is absent.
    #[error("Parse error: Option '{option}' expects one argument.")]
    MissingValue {
        /// The display name of the option.
        option: String,
        /// The index of the option's flag.
        index: usize,
    },

    /// A value token could not be converted to the declared type.
    #[error("Parse error: '{token}' cannot convert to {type_name} for '{parameter}'.")]
    InvalidConversion {
        /// The display name of the option or positional.
        parameter: String,
        /// The offending value token.
        token: String,
        /// The declared type.
        type_name: &'static str,
        /// The index of the value token.
        index: usize,
    },

    /// No meta-argument and no declared argument consumed the token.
    #[error("Parse error: unrecognized token '{token}'.")]
    UnrecognizedToken {
        /// The unclaimed token.
        token: String,
        /// Its index.
        index: usize,
    },
}

impl ParseError {
    /// The `argv` index of the offending token, if there is one.
    pub fn index(&self) -> Option<usize> {
        match self {
            ParseError::MissingProgram => None,
            ParseError::MissingValue { index, .. }
            | ParseError::InvalidConversion { index, .. }
            | ParseError::UnrecognizedToken { index, .. } => Some(*index),
        }
    }

    // Arguments only see the window starting at the cursor, so they report window-relative indices.
    fn shift(self, cursor: usize) -> Self {
        match self {
            ParseError::MissingProgram => ParseError::MissingProgram,
            ParseError::MissingValue { option, index } => ParseError::MissingValue {
                option,
                index: index + cursor,
            },
            ParseError::InvalidConversion {
                parameter,
                token,
                type_name,
                index,
            } => ParseError::InvalidConversion {
                parameter,
                token,
                type_name,
                index: index + cursor,
            },
            ParseError::UnrecognizedToken { token, index } => ParseError::UnrecognizedToken {
                token,
                index: index + cursor,
            },
        }
    }
}

/// Behaviour to capture an implicit generic type T from an input `&str`.
///
/// We use this at the middle/top of the parser object graph so that different types may all be held in a single registry.
pub(crate) trait AnonymousCapturable {
    /// Declare that the argument has been matched.
    fn matched(&mut self);

    /// Capture a value anonymously for this argument.
    fn capture(&mut self, token: &str) -> Result<(), InvalidConversion>;

    /// The consumption policy of the underlying field.
    fn nargs(&self) -> Nargs;
}

/// A registry entry: the descriptor of a declared argument bound to its value slot.
pub(crate) struct Argument<'a> {
    descriptor: Descriptor,
    // We need a (dyn .. [ignoring T] ..) here in order to put all the fields of varying types T under one collection.
    capture: Box<dyn AnonymousCapturable + 'a>,
    exhausted: bool,
}

impl<'a> std::fmt::Debug for Argument<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Argument")
            .field("descriptor", &self.descriptor)
            .field("nargs", &self.capture.nargs())
            .field("exhausted", &self.exhausted)
            .finish()
    }
}

impl<'a> Argument<'a> {
    pub(crate) fn new(descriptor: Descriptor, capture: Box<dyn AnonymousCapturable + 'a>) -> Self {
        Self {
            descriptor,
            capture,
            exhausted: false,
        }
    }

    pub(crate) fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    /// Attempt to consume tokens from the front of `window`.
    ///
    /// Returns the number of tokens consumed, where `0` means the argument did not match.
    pub(crate) fn consume(
        &mut self,
        window: &[&str],
        convention: &(impl Convention + ?Sized),
    ) -> Result<usize, ParseError> {
        match window.split_first() {
            None => Ok(0),
            Some((token, rest)) => match self.descriptor.kind() {
                ArgumentKind::Option => self.consume_option(token, rest, convention),
                ArgumentKind::Positional => self.consume_positional(token),
            },
        }
    }

    fn consume_option(
        &mut self,
        flag: &str,
        rest: &[&str],
        convention: &(impl Convention + ?Sized),
    ) -> Result<usize, ParseError> {
        if !self.matches(flag, convention) {
            return Ok(0);
        }

        self.capture.matched();

        match self.capture.nargs() {
            Nargs::Zero => Ok(1),
            Nargs::One => match rest.first() {
                Some(value) => {
                    self.capture_value(value, 1)?;
                    Ok(2)
                }
                None => Err(ParseError::MissingValue {
                    option: self.descriptor.name().to_string(),
                    index: 0,
                }),
            },
            Nargs::ZeroOrOne => match rest.first() {
                Some(value) if !convention.is_option_shaped(value) => {
                    self.capture_value(value, 1)?;
                    Ok(2)
                }
                _ => Ok(1),
            },
            Nargs::Any => {
                let values = rest
                    .iter()
                    .take_while(|value| !convention.is_option_shaped(value))
                    .count();

                for (i, value) in rest[..values].iter().enumerate() {
                    self.capture_value(value, i + 1)?;
                }

                Ok(1 + values)
            }
        }
    }

    fn consume_positional(&mut self, token: &str) -> Result<usize, ParseError> {
        if self.exhausted {
            return Ok(0);
        }

        self.capture.matched();
        self.capture_value(token, 0)?;

        // A single valued positional gives way to the next one once filled.
        if self.capture.nargs() != Nargs::Any {
            self.exhausted = true;
        }

        Ok(1)
    }

    fn capture_value(&mut self, value: &str, index: usize) -> Result<(), ParseError> {
        self.capture
            .capture(value)
            .map_err(|error| ParseError::InvalidConversion {
                parameter: self.descriptor.name().to_string(),
                token: error.token,
                type_name: error.type_name,
                index,
            })
    }

    fn matches(&self, token: &str, convention: &(impl Convention + ?Sized)) -> bool {
        let short_match = match (self.descriptor.short(), token.strip_prefix(convention.short_prefix())) {
            (Some(short), Some(remainder)) => {
                let mut chars = remainder.chars();
                chars.next() == Some(short) && chars.next().is_none()
            }
            _ => false,
        };
        let long_match = match (self.descriptor.long(), token.strip_prefix(convention.long_prefix())) {
            (Some(long), Some(remainder)) => remainder == long,
            _ => false,
        };

        short_match || long_match
    }
}

/// The registry of declared arguments together with the convention that drives them.
pub(crate) struct Parser<'a> {
    convention: Box<dyn Convention + 'a>,
    arguments: Vec<Argument<'a>>,
}

impl<'a> std::fmt::Debug for Parser<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("arguments", &self.arguments)
            .finish()
    }
}

impl<'a> Parser<'a> {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new(Box::new(crate::convention::Unix::default()), Vec::default()).unwrap()
    }

    pub(crate) fn new(
        convention: Box<dyn Convention + 'a>,
        mut arguments: Vec<Argument<'a>>,
    ) -> Result<Self, ConfigError> {
        if convention.short_prefix().is_empty() || convention.long_prefix().is_empty() {
            return Err(ConfigError(
                "Option prefixes must not be empty.".to_string(),
            ));
        }

        for argument in arguments.iter_mut() {
            argument
                .descriptor
                .render_prefixes(convention.short_prefix(), convention.long_prefix());
        }

        let mut shorts = HashSet::new();
        let mut longs = HashSet::new();
        let mut positionals = HashSet::new();

        for argument in &arguments {
            let descriptor = argument.descriptor();

            if let Some(short) = descriptor.short() {
                if short.is_whitespace() {
                    return Err(ConfigError(format!(
                        "Short option '{}' must not be whitespace.",
                        short.escape_default()
                    )));
                }

                let flag = format!("{}{short}", convention.short_prefix());
                if flag.starts_with(convention.long_prefix()) {
                    return Err(ConfigError(format!(
                        "Short option '{flag}' is indistinguishable from a long option."
                    )));
                }

                if !shorts.insert(short) {
                    return Err(ConfigError(format!(
                        "Cannot duplicate the short option '{short}'."
                    )));
                }
            }

            if let Some(long) = descriptor.long() {
                if long.is_empty() {
                    return Err(ConfigError("Long option must not be empty.".to_string()));
                }

                if !longs.insert(long.to_string()) {
                    return Err(ConfigError(format!(
                        "Cannot duplicate the long option '{long}'."
                    )));
                }
            }

            if descriptor.kind() == ArgumentKind::Positional {
                if descriptor.name().is_empty() {
                    return Err(ConfigError("Positional name must not be empty.".to_string()));
                }

                if !positionals.insert(descriptor.name().to_string()) {
                    return Err(ConfigError(format!(
                        "Cannot duplicate the positional '{}'.",
                        descriptor.name()
                    )));
                }
            }

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Registered {argument:?}.");
            }
        }

        Ok(Self {
            convention,
            arguments,
        })
    }

    pub(crate) fn descriptors(&self) -> Vec<Descriptor> {
        self.arguments
            .iter()
            .map(|argument| argument.descriptor().clone())
            .collect()
    }

    /// Walk `argv` left to right, offering each token to the meta-argument parser and then to the arguments in declaration order.
    /// Returns the program name (`argv[0]`), which is never matched.
    pub(crate) fn consume(self, argv: &[&str]) -> Result<String, ParseError> {
        let Parser {
            mut convention,
            mut arguments,
        } = self;
        let program = argv.first().ok_or(ParseError::MissingProgram)?;
        let mut cursor = 1;

        'tokens: while cursor < argv.len() {
            let token = argv[cursor];

            if convention.metaparse(token) {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Meta-argument '{token}' consumed at {cursor}.");
                }

                cursor += 1;
                continue;
            }

            for argument in arguments.iter_mut() {
                if !convention.should_test(argument.descriptor().kind()) {
                    continue;
                }

                let consumed = argument
                    .consume(&argv[cursor..], convention.as_ref())
                    .map_err(|error| error.shift(cursor))?;

                if consumed > 0 {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!(
                            "Argument '{}' consumed {consumed} token(s) at {cursor}.",
                            argument.descriptor().name()
                        );
                    }

                    cursor += consumed;
                    continue 'tokens;
                }
            }

            return Err(ParseError::UnrecognizedToken {
                token: token.to_string(),
                index: cursor,
            });
        }

        Ok(program.to_string())
    }
}
