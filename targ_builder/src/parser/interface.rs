use crate::parser::ParseError;

/// Points at the offending token of a failed parse.
///
/// Displays the tokens on one line, and a caret (`^`) under the offending token on the next.
///
/// ### Example
/// ```
/// # use targ_builder as targ;
/// use targ::ErrorContext;
///
/// let context = ErrorContext::new(2, &["prog", "-o", "x"]);
/// assert_eq!(context.to_string(), "prog -o x\n        ^");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    index: usize,
    tokens: Vec<String>,
}

impl ErrorContext {
    /// Create the context for the token at `index` of `tokens`.
    pub fn new(index: usize, tokens: &[&str]) -> Self {
        Self {
            index,
            tokens: tokens.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let projection = self.tokens.join(" ");
        // Past the end points one beyond the final token.
        let width: usize = self
            .tokens
            .iter()
            .take(self.index)
            .map(|token| token.chars().count() + 1)
            .sum();

        write!(f, "{projection}\n{:width$}^", "")
    }
}

pub(crate) trait UserInterface {
    fn print_error(&self, error: ParseError);
    fn print_error_context(&self, error_context: ErrorContext);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print_error(&self, error: ParseError) {
        eprintln!("{error}");
    }

    fn print_error_context(&self, error_context: ErrorContext) {
        eprintln!("{error_context}");
    }
}

#[cfg(test)]
pub(crate) mod util {
    use crate::parser::{ErrorContext, ParseError, UserInterface};
    use std::cell::RefCell;

    #[derive(Default)]
    pub(crate) struct InMemoryInterface {
        error: RefCell<Option<String>>,
        error_context: RefCell<Option<ErrorContext>>,
    }

    impl UserInterface for InMemoryInterface {
        fn print_error(&self, error: ParseError) {
            // Assumes print_error() is only ever called once.
            self.error.borrow_mut().replace(error.to_string());
        }

        fn print_error_context(&self, error_context: ErrorContext) {
            // Assumes print_error_context() is only ever called once.
            self.error_context.borrow_mut().replace(error_context);
        }
    }

    impl InMemoryInterface {
        pub(crate) fn consume(self) -> (Option<String>, Option<ErrorContext>) {
            let InMemoryInterface {
                error,
                error_context,
            } = self;

            (error.take(), error_context.take())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, vec![], "\n^")]
    #[case(0, vec!["prog"], "prog\n^")]
    #[case(1, vec!["prog"], "prog\n     ^")]
    #[case(1, vec!["prog", "-v", "--"], "prog -v --\n     ^")]
    #[case(2, vec!["prog", "-v", "--"], "prog -v --\n        ^")]
    #[case(1, vec!["prog", "ü", "x"], "prog ü x\n     ^")]
    #[case(2, vec!["prog", "ü", "x"], "prog ü x\n       ^")]
    fn error_context(#[case] index: usize, #[case] tokens: Vec<&str>, #[case] expected: &str) {
        assert_eq!(ErrorContext::new(index, tokens.as_slice()).to_string(), expected);
    }
}
