//! Module containing structures and implementations for logging messages to the user.

use colored::Colorize;
use std::fmt::Display;

/// Represent the severity of a log message to be printed to the console.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
}

/// Struct implementing [`Display`] that represents a log message to be displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}
impl<T> Message<T> {
    /// Create a new log message with the given severity and message to be displayed.
    pub fn new(severity: Severity, display: T) -> Self {
        Self { severity, display }
    }
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let log_header = (match self.severity {
            Severity::Error => "[error]:".red(),
        })
        .bold();

        let message_part = &self.display.to_string().bold();

        write!(f, "{log_header} {message_part}")
    }
}

/// Structure implementing [`Display`] that prints one line of source code with a marker under
/// the given column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceCodeDisplay<'a, T> {
    /// The 1-based number of the printed line.
    pub line_number: usize,

    /// The text of the line.
    pub line: &'a str,

    /// The 1-based column to mark, if any.
    pub column: Option<usize>,

    /// The help message to be displayed.
    pub help_display: Option<T>,
}

impl<'a, T> SourceCodeDisplay<'a, T> {
    /// Create a new source code display for the given line.
    pub fn new(
        line_number: usize,
        line: &'a str,
        column: Option<usize>,
        help_display: Option<T>,
    ) -> Self {
        Self {
            line_number,
            line,
            column,
            help_display,
        }
    }
}

impl<'a, T: Display> Display for SourceCodeDisplay<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let gutter = self.line_number.to_string();
        let padding = " ".repeat(gutter.len());

        write!(f, "{} {} {}", gutter.blue().bold(), "|".blue().bold(), self.line)?;

        if let Some(column) = self.column {
            write!(
                f,
                "\n{padding} {} {}{}",
                "|".blue().bold(),
                " ".repeat(column.saturating_sub(1)),
                "^".red().bold()
            )?;
        }

        if let Some(help_display) = &self.help_display {
            write!(f, "\n\n{help_display}")?;
        }

        Ok(())
    }
}
