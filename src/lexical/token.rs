//! Contains the [`Token`] struct and its related types.

use std::{borrow::Cow, collections::HashMap, fmt::Display, str::FromStr, sync::OnceLock};

use enum_as_inner::EnumAsInner;
use getset::{CopyGetters, Getters};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::util;

use super::InvalidAccess;

/// Is an enumeration of the operators that are spelled with two characters.
///
/// Compound operators are lexed before single punctuation, so `==` never splits into two `=`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum CompoundOperator {
    Equal,
    LessEqual,
    GreaterEqual,
    And,
    Or,
}

impl Display for CompoundOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Is an error that is returned when a string cannot be parsed into a [`CompoundOperator`] in
/// [`FromStr`] trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, thiserror::Error)]
#[error("invalid string representation of compound operator.")]
pub struct CompoundOperatorParseError;

impl FromStr for CompoundOperator {
    type Err = CompoundOperatorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        static STRING_OPERATOR_MAP: OnceLock<HashMap<&'static str, CompoundOperator>> =
            OnceLock::new();
        let map = STRING_OPERATOR_MAP.get_or_init(|| {
            let mut map = HashMap::new();

            for operator in Self::iter() {
                map.insert(operator.as_str(), operator);
            }

            map
        });

        map.get(s).copied().ok_or(CompoundOperatorParseError)
    }
}

impl CompoundOperator {
    /// Gets the string representation of the operator as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::And => "&&",
            Self::Or => "||",
        }
    }
}

/// Is an enumeration of the kinds of tokens together with their payload.
///
/// Operators and punctuation are [`TokenKind::Identifier`]s spelled like the operator.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner)]
pub enum TokenKind {
    /// An integer literal with its value.
    Number(i32),
    /// An identifier, operator or punctuation with its spelling.
    Identifier(String),
    /// A string literal with its decoded content.
    String(String),
    /// Marks the end of a source line.
    EndOfLine,
    /// Marks the end of the source.
    EndOfStream,
}

impl TokenKind {
    /// Gets a human readable name of the kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Identifier(_) => "identifier",
            Self::String(_) => "string literal",
            Self::EndOfLine => "end of line",
            Self::EndOfStream => "end of stream",
        }
    }
}

/// Is a classified unit of lexical input together with the line it originates from.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, CopyGetters)]
pub struct Token {
    /// Get the 1-based line number the token was read from.
    #[get_copy = "pub"]
    line: usize,
    /// Get the kind of the token.
    #[get = "pub"]
    kind: TokenKind,
}

impl Token {
    /// The text of every end-of-line token.
    pub const END_OF_LINE_TEXT: &'static str = "\\n";

    /// Creates a number token.
    #[must_use]
    pub fn number(line: usize, value: i32) -> Self {
        Self {
            line,
            kind: TokenKind::Number(value),
        }
    }

    /// Creates an identifier token. Operators and punctuation are identifiers as well.
    #[must_use]
    pub fn identifier(line: usize, spelling: impl Into<String>) -> Self {
        Self {
            line,
            kind: TokenKind::Identifier(spelling.into()),
        }
    }

    /// Creates a string literal token from already decoded content.
    #[must_use]
    pub fn string(line: usize, content: impl Into<String>) -> Self {
        Self {
            line,
            kind: TokenKind::String(content.into()),
        }
    }

    /// Creates the end-of-line marker for the given line.
    #[must_use]
    pub const fn end_of_line(line: usize) -> Self {
        Self {
            line,
            kind: TokenKind::EndOfLine,
        }
    }

    /// Creates the end-of-stream marker.
    #[must_use]
    pub const fn end_of_stream(line: usize) -> Self {
        Self {
            line,
            kind: TokenKind::EndOfStream,
        }
    }

    /// Whether the token is a number literal.
    #[must_use]
    pub fn is_number(&self) -> bool {
        self.kind.is_number()
    }

    /// Whether the token is an identifier, operator or punctuation.
    #[must_use]
    pub fn is_identifier(&self) -> bool {
        self.kind.is_identifier()
    }

    /// Whether the token is a string literal.
    #[must_use]
    pub fn is_string(&self) -> bool {
        self.kind.is_string()
    }

    /// Whether the token marks the end of a line.
    #[must_use]
    pub fn is_end_of_line(&self) -> bool {
        self.kind.is_end_of_line()
    }

    /// Whether the token marks the end of the source.
    #[must_use]
    pub fn is_end_of_stream(&self) -> bool {
        self.kind.is_end_of_stream()
    }

    /// Returns the canonical text of the token.
    ///
    /// Numbers are rendered in decimal, string literals yield their decoded content and
    /// identifiers their spelling. End-of-line tokens read [`Self::END_OF_LINE_TEXT`] and the
    /// end-of-stream token is empty.
    #[must_use]
    pub fn text(&self) -> Cow<str> {
        match &self.kind {
            TokenKind::Number(value) => Cow::Owned(value.to_string()),
            TokenKind::Identifier(text) | TokenKind::String(text) => Cow::Borrowed(text),
            TokenKind::EndOfLine => Cow::Borrowed(Self::END_OF_LINE_TEXT),
            TokenKind::EndOfStream => Cow::Borrowed(""),
        }
    }

    /// Returns the value of a number token.
    ///
    /// # Errors
    /// - [`InvalidAccess`] if the token is not a number.
    pub fn number_value(&self) -> Result<i32, InvalidAccess> {
        self.kind.as_number().copied().ok_or_else(|| InvalidAccess {
            line: self.line,
            kind: self.kind.name(),
        })
    }

    /// Returns the operator an identifier token spells, if any.
    #[must_use]
    pub fn compound_operator(&self) -> Option<CompoundOperator> {
        self.kind
            .as_identifier()
            .and_then(|text| text.parse().ok())
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            TokenKind::String(content) => write!(f, "\"{}\"", util::escape_str(content)),
            _ => f.write_str(&self.text()),
        }
    }
}
