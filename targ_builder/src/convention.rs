//! Parsing conventions: the prefix syntax and meta-argument policy a parser runs under.
#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::model::ArgumentKind;

pub(crate) const SHORT_PREFIX: &str = "-";
pub(crate) const LONG_PREFIX: &str = "--";
pub(crate) const STOP_MARKER: &str = "--";

/// The hooks a parser consults while walking the tokens.
///
/// A convention supplies the option prefixes and may intercept *meta-arguments*: tokens which change how the remaining tokens are parsed, rather than supplying a value.
pub trait Convention {
    /// The prefix of a short option, ex: `-` in `-v`.
    fn short_prefix(&self) -> &str;

    /// The prefix of a long option, ex: `--` in `--verbose`.
    fn long_prefix(&self) -> &str;

    /// Offer a token to the meta-argument parser.
    /// Returns `true` if the token was consumed, in which case no argument sees it.
    fn metaparse(&mut self, _token: &str) -> bool {
        false
    }

    /// Whether arguments of `kind` may be tested against the current token.
    fn should_test(&self, _kind: ArgumentKind) -> bool {
        true
    }

    /// Whether the token looks like an option (starts with either prefix).
    fn is_option_shaped(&self, token: &str) -> bool {
        token.starts_with(self.short_prefix()) || token.starts_with(self.long_prefix())
    }
}

/// The plain convention: option prefixes only, no meta-arguments.
///
/// ### Example
/// ```
/// # use targ_builder as targ;
/// use targ::{Basic, Convention};
///
/// let windows = Basic::with_prefixes("/", "//");
/// assert!(windows.is_option_shaped("/v"));
/// assert!(!windows.is_option_shaped("-v"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Basic {
    short_prefix: String,
    long_prefix: String,
}

impl Basic {
    /// Create a basic convention with custom option prefixes.
    pub fn with_prefixes(short_prefix: impl Into<String>, long_prefix: impl Into<String>) -> Self {
        Self {
            short_prefix: short_prefix.into(),
            long_prefix: long_prefix.into(),
        }
    }
}

impl Default for Basic {
    fn default() -> Self {
        Self::with_prefixes(SHORT_PREFIX, LONG_PREFIX)
    }
}

impl Convention for Basic {
    fn short_prefix(&self) -> &str {
        &self.short_prefix
    }

    fn long_prefix(&self) -> &str {
        &self.long_prefix
    }
}

/// The parsing mode of a [`Unix`] convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnixMode {
    /// Options and positionals are both recognized.
    ParsingOptions,
    /// The stop marker `--` has been seen; only positionals are recognized.
    OptionsStopped,
}

/// The Unix convention: `-s` and `--long` options, with `--` to stop parsing options.
///
/// Once `--` is seen, every subsequent token is offered only to positionals, however it is shaped.
/// The transition is one-way, and every `--` is consumed as the marker (it never reaches an argument).
///
/// ### Example
/// ```
/// # use targ_builder as targ;
/// use targ::{ArgumentKind, Convention, Unix, UnixMode};
///
/// let mut unix = Unix::default();
/// assert!(!unix.metaparse("-v"));
/// assert!(unix.metaparse("--"));
/// assert_eq!(unix.mode(), UnixMode::OptionsStopped);
/// assert!(!unix.should_test(ArgumentKind::Option));
/// assert!(unix.should_test(ArgumentKind::Positional));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unix {
    mode: UnixMode,
}

impl Unix {
    /// The current parsing mode.
    pub fn mode(&self) -> UnixMode {
        self.mode
    }
}

impl Default for Unix {
    fn default() -> Self {
        Self {
            mode: UnixMode::ParsingOptions,
        }
    }
}

impl Convention for Unix {
    fn short_prefix(&self) -> &str {
        SHORT_PREFIX
    }

    fn long_prefix(&self) -> &str {
        LONG_PREFIX
    }

    fn metaparse(&mut self, token: &str) -> bool {
        if token != STOP_MARKER {
            return false;
        }

        #[cfg(feature = "tracing_debug")]
        {
            if self.mode == UnixMode::ParsingOptions {
                debug!("Stop marker '{token}' seen; no longer parsing options.");
            }
        }

        self.mode = UnixMode::OptionsStopped;
        true
    }

    fn should_test(&self, kind: ArgumentKind) -> bool {
        match (self.mode, kind) {
            (UnixMode::OptionsStopped, ArgumentKind::Option) => false,
            _ => true,
        }
    }
}
