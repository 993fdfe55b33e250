use std::fmt::Display;

use crate::base::log::{Message, Severity, SourceCodeDisplay};

/// Represents an error that occurred during the lexical analysis of the source code.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    BadToken(#[from] LexError),
    #[error("Failed to read the next source line: {0}")]
    LineSource(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::LineSource(err.to_string())
    }
}

/// Source code contains a fragment that no token pattern matches.
///
/// Lexing does not recover from this error; none of the tokens of the offending line are
/// produced.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
pub struct LexError {
    /// The 1-based number of the offending line.
    pub line: usize,

    /// The 1-based character column of the offending fragment.
    pub column: usize,

    /// Describes what went wrong.
    pub message: String,

    /// The text of the offending line.
    pub source_line: String,
}

impl LexError {
    /// Creates a new [`LexError`] for the fragment of `source_line` starting at byte `offset`.
    #[must_use]
    pub fn new(
        line: usize,
        source_line: &str,
        offset: usize,
        message: impl Into<String>,
    ) -> Self {
        let column = source_line
            .get(..offset)
            .map_or(offset, |prefix| prefix.chars().count())
            + 1;

        Self {
            line,
            column,
            message: message.into(),
            source_line: source_line.to_string(),
        }
    }
}

impl Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(
                Severity::Error,
                format!("bad token at line {}: {}", self.line, self.message)
            ),
            SourceCodeDisplay::new(
                self.line,
                &self.source_line,
                Some(self.column),
                Option::<&str>::None
            )
        )
    }
}

/// A token payload was requested from a token of a different kind.
///
/// This points at a bug in the consumer of the tokens, not at malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
#[error("cannot read a number from the {kind} token at line {line}")]
pub struct InvalidAccess {
    /// The line of the accessed token.
    pub line: usize,

    /// The kind name of the accessed token.
    pub kind: &'static str,
}
