//! Module for handling source files and the lines they produce.

use std::{
    fmt::Debug,
    io::{self, BufRead},
    ops::Range,
    path::{Path, PathBuf},
    sync::Arc,
};

use getset::Getters;

use super::{file_provider::FileProvider, Error};

/// Represents a source file that contains the source code.
#[derive(Clone, Getters)]
pub struct SourceFile {
    /// Get the path of the source file.
    #[get = "pub"]
    path: PathBuf,
    /// Get the identifier of the source file.
    #[get = "pub"]
    identifier: String,
    /// Get the content of the source file
    #[get = "pub"]
    content: String,
    lines: Vec<Range<usize>>,
}

#[allow(clippy::missing_fields_in_debug)]
impl Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("path", &self.path)
            .field("lines", &self.lines)
            .finish()
    }
}

impl SourceFile {
    /// Create a source file from content that is already in memory.
    #[must_use]
    pub fn from_content(path: PathBuf, identifier: String, content: String) -> Arc<Self> {
        let lines = get_line_byte_positions(&content);

        Arc::new(Self {
            path,
            identifier,
            content,
            lines,
        })
    }

    /// Get the line of the source file at the given line number, without its terminator.
    ///
    /// Numbering starts at 1.
    #[must_use]
    pub fn get_line(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }

        let line = line - 1;
        self.lines
            .get(line)
            .map(|range| &self.content()[range.clone()])
    }

    /// Get the [`SourceLines`] of the source file.
    #[must_use]
    pub fn lines(&self) -> SourceLines<'_> {
        SourceLines {
            source_file: self,
            next_line: 1,
        }
    }

    /// Get the number of lines in the source file.
    #[must_use]
    pub fn line_amount(&self) -> usize {
        self.lines.len()
    }

    /// Load the source file from the given file path.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when reading the file contents.
    pub fn load(
        path: &Path,
        identifier: String,
        provider: &impl FileProvider,
    ) -> Result<Arc<Self>, Error> {
        let source = provider.read_str(path)?;
        Ok(Self::from_content(
            path.to_path_buf(),
            identifier,
            source.into_owned(),
        ))
    }
}

/// Produces source text one line at a time.
///
/// Line numbers are not part of the contract; whoever pulls from the source counts them.
pub trait LineSource {
    /// Returns the next line without its terminator, or `None` once the source is exhausted.
    ///
    /// # Errors
    /// - If the underlying reader fails.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<B: BufRead> LineSource for io::Lines<B> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        self.next().transpose()
    }
}

/// Iterator over the lines of a [`SourceFile`].
#[derive(Debug, Clone, Copy)]
pub struct SourceLines<'a> {
    source_file: &'a SourceFile,
    next_line: usize,
}

impl<'a> Iterator for SourceLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.source_file.get_line(self.next_line)?;
        self.next_line += 1;
        Some(line)
    }
}

impl LineSource for SourceLines<'_> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.next().map(ToOwned::to_owned))
    }
}

/// Get the byte ranges of the lines in the given text, excluding line terminators.
///
/// A trailing terminator does not open another line, so an empty text has no lines.
fn get_line_byte_positions(text: &str) -> Vec<Range<usize>> {
    let mut current_position = 0;
    let mut results = Vec::new();

    let mut skip = false;

    for (byte, char) in text.char_indices() {
        if skip {
            skip = false;
            continue;
        }

        // lf
        if char == '\n' {
            results.push(current_position..byte);

            current_position = byte + 1;
        }

        // crlf
        if char == '\r' {
            results.push(current_position..byte);

            if text.as_bytes().get(byte + 1) == Some(&b'\n') {
                current_position = byte + 2;

                skip = true;
            } else {
                current_position = byte + 1;
            }
        }
    }

    // add the last line
    if current_position < text.len() {
        results.push(current_position..text.len());
    }

    results
}
