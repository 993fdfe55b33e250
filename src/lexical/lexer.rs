//! Contains the [`Lexer`], which turns lines of source text into a stream of [`Token`]s.

use std::{collections::VecDeque, sync::OnceLock};

use itertools::Itertools;
use regex::Regex;
use strum::IntoEnumIterator;

use crate::{base::source_file::LineSource, util};

use super::{
    token::{CompoundOperator, Token},
    Error, LexError,
};

/// Returns the pattern that recognizes one token, preceded by optional whitespace.
///
/// Alternatives are tried in order: line comment, integer, string literal, identifier,
/// compound operator, single ASCII punctuation other than `"`. Whitespace is only consumed
/// together with the token that follows it.
fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let operators = CompoundOperator::iter()
            .map(|operator| regex::escape(operator.as_str()))
            .join("|");

        Regex::new(&format!(
            r#"[[:space:]]*(?:(?P<comment>//.*)|(?P<number>[0-9]+)|(?P<string>"(?:\\"|\\\\|\\n|[^"])*")|(?P<identifier>[A-Za-z][A-Za-z0-9_]*|{operators}|[!#-/:-@\[-`{{-~]))"#
        ))
        .expect("could not compile regex for tokens")
    })
}

/// Splits one line into tokens, followed by the end-of-line token of that line.
///
/// Every match has to start exactly where the previous one ended; text before the scan
/// position stays visible to the pattern but is never matched.
///
/// # Errors
/// - [`LexError`] if a fragment of the line cannot be matched, or an integer literal does not
///   fit into an `i32`.
#[tracing::instrument(level = "trace", skip(line))]
pub fn tokenize_line(line: &str, line_number: usize) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut position = 0;

    while position < line.len() {
        let captures = token_pattern()
            .captures_at(line, position)
            .filter(|captures| {
                captures
                    .get(0)
                    .is_some_and(|found| found.start() == position)
            })
            .ok_or_else(|| {
                let fragment = line[position..].chars().next().unwrap_or_default();
                LexError::new(
                    line_number,
                    line,
                    position,
                    format!("unexpected character {fragment:?}"),
                )
            })?;

        if let Some(number) = captures.name("number") {
            let value = number.as_str().parse::<i32>().map_err(|err| {
                LexError::new(
                    line_number,
                    line,
                    number.start(),
                    format!("integer literal `{}` is invalid: {err}", number.as_str()),
                )
            })?;
            tokens.push(Token::number(line_number, value));
        } else if let Some(string) = captures.name("string") {
            let content = util::unescape_string_literal(string.as_str());
            tokens.push(Token::string(line_number, content));
        } else if let Some(identifier) = captures.name("identifier") {
            tokens.push(Token::identifier(line_number, identifier.as_str()));
        }
        // comments produce nothing

        position = captures.get(0).map_or(line.len(), |found| found.end());
    }

    tokens.push(Token::end_of_line(line_number));

    Ok(tokens)
}

/// Pull-based token stream over a [`LineSource`] with arbitrary lookahead.
///
/// Lines are pulled and tokenized only when a request cannot be served from the tokens
/// already buffered. The lexer is meant to be driven by a single parser.
#[derive(Debug)]
pub struct Lexer<S> {
    source: S,
    buffer: VecDeque<Token>,
    has_more: bool,
    line_number: usize,
    end_of_stream: Token,
    failure: Option<Error>,
}

impl<S: LineSource> Lexer<S> {
    /// Creates a lexer that owns the given line source.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            buffer: VecDeque::new(),
            has_more: true,
            line_number: 0,
            end_of_stream: Token::end_of_stream(0),
            failure: None,
        }
    }

    /// Removes and returns the next token.
    ///
    /// Once the source is exhausted, every call returns the end-of-stream token.
    ///
    /// # Errors
    /// - [`Error::BadToken`] if the next line to be read is malformed.
    /// - [`Error::LineSource`] if the line source fails.
    pub fn read(&mut self) -> Result<Token, Error> {
        self.fill_buffer(0)?;

        Ok(self
            .buffer
            .pop_front()
            .unwrap_or_else(|| self.end_of_stream.clone()))
    }

    /// Returns the token `ahead` positions after the next one without consuming anything.
    ///
    /// `peek(0)` is the token the next [`Self::read`] returns. Looking past the end of the
    /// source yields the end-of-stream token.
    ///
    /// # Errors
    /// - [`Error::BadToken`] if a line that has to be read is malformed.
    /// - [`Error::LineSource`] if the line source fails.
    pub fn peek(&mut self, ahead: usize) -> Result<&Token, Error> {
        self.fill_buffer(ahead)?;

        Ok(self.buffer.get(ahead).unwrap_or(&self.end_of_stream))
    }

    /// Number of lines pulled from the source so far.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Pulls lines until at least `ahead + 1` tokens are buffered.
    ///
    /// Returns whether enough tokens are available, which is `false` only once the source
    /// is exhausted.
    fn fill_buffer(&mut self, ahead: usize) -> Result<bool, Error> {
        while ahead >= self.buffer.len() {
            if let Some(failure) = &self.failure {
                return Err(failure.clone());
            }

            if !self.has_more {
                return Ok(false);
            }

            if let Err(err) = self.read_line() {
                tracing::error!(line = self.line_number, "Fatal lexical error: {err}");
                self.failure = Some(err.clone());
                return Err(err);
            }
        }

        Ok(true)
    }

    /// Pulls one line from the source and buffers its tokens.
    fn read_line(&mut self) -> Result<(), Error> {
        let Some(line) = self.source.next_line()? else {
            tracing::trace!(lines = self.line_number, "Line source exhausted");
            self.has_more = false;
            self.end_of_stream = Token::end_of_stream(self.line_number);
            return Ok(());
        };

        self.line_number += 1;
        let tokens = tokenize_line(&line, self.line_number)?;
        self.buffer.extend(tokens);

        Ok(())
    }
}

impl<S: LineSource> Iterator for Lexer<S> {
    type Item = Result<Token, Error>;

    /// Yields tokens up to, but excluding, the end-of-stream token. Stops after an error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.failure.is_some() && self.buffer.is_empty() {
            return None;
        }

        match self.read() {
            Ok(token) if token.is_end_of_stream() => None,
            item => Some(item),
        }
    }
}
