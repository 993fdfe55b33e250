//! The `Pebble` language front end.
//!
//! `Pebble` is a small scripting language. This crate turns its source text into a stream of
//! classified tokens with arbitrary lookahead, ready to be consumed by a parser.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod base;
pub mod lexical;
pub mod syntax;
pub mod util;

use std::path::Path;

use base::{source_file::SourceFile, Error, FileProvider, Handler, Result};
use lexical::{token::Token, Lexer};

/// Converts the source file at the given path to tokens.
///
/// The returned tokens include the end-of-line token of every line but not the trailing
/// end-of-stream token.
///
/// # Errors
/// - If an error occurs while reading the file.
/// - If the source code contains a malformed token. The lexical error itself is handed to
///   the `handler`.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn tokenize(
    handler: &impl Handler<Error>,
    provider: &impl FileProvider,
    path: &Path,
) -> Result<Vec<Token>> {
    let source_file = SourceFile::load(path, path.display().to_string(), provider)?;

    let tokens = Lexer::new(source_file.lines()).collect::<std::result::Result<Vec<_>, _>>();

    tokens.map_err(|err| {
        handler.receive(Error::from(err));
        Error::Other("An error occurred while tokenizing the source code.")
    })
}
