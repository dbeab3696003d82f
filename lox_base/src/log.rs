//! Provides the functions related to logging/printing messages to the console.

use std::fmt::Display;

use derive_new::new;
use formatting::{Color, Paint};

use crate::source_file::Span;

pub mod formatting;

/// Represents the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
    Info,
}

/// Is a struct implementing [`Display`] that represents a log message to be displayed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The message to be displayed.
    pub display: T,
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let header = match self.severity {
            Severity::Error => "[error]:".paint(Color::Red).bold(),
            Severity::Info => "[info]:".paint(Color::Green).bold(),
        };

        write!(f, "{header} {}", (&self.display).bold())
    }
}

fn digits(number: usize) -> usize { number.checked_ilog10().map_or(1, |log| log as usize + 1) }

fn display_width(character: char) -> usize {
    if character == '\t' {
        4
    } else {
        1
    }
}

/// Structure implementing [`Display`] that prints the first line of a span with the spanned
/// characters underlined by carets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct SourceCodeDisplay<'a, T> {
    /// The span of the source code to be printed.
    pub span: &'a Span,

    /// The help message to be displayed next to the carets.
    pub help_display: Option<T>,
}

impl<'a, T: Display> Display for SourceCodeDisplay<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let source_file = self.span.source_file();
        let location = source_file
            .get_location(self.span.start())
            .ok_or(std::fmt::Error)?;
        let line = source_file.get_line(location.line).unwrap_or_default();

        let gutter = digits(location.line);
        let pipe = "|".paint(Color::Cyan).bold();

        writeln!(
            f,
            "{:gutter$}{} {}:{}:{}",
            "",
            "-->".paint(Color::Cyan).bold(),
            source_file.full_path().display(),
            location.line,
            location.column
        )?;
        writeln!(f, "{:gutter$} {pipe}", "")?;

        write!(f, "{} {pipe} ", location.line.paint(Color::Cyan).bold())?;
        for character in line.chars() {
            if character == '\t' {
                f.write_str("    ")?;
            } else {
                write!(f, "{character}")?;
            }
        }
        writeln!(f)?;

        // only the part of the span on its first line is underlined
        let indent: usize = line
            .chars()
            .take(location.column - 1)
            .map(display_width)
            .sum();
        let carets = self
            .span
            .str()
            .chars()
            .take_while(|character| *character != '\n')
            .map(display_width)
            .sum::<usize>()
            .max(1);

        write!(
            f,
            "{:gutter$} {pipe} {:indent$}{}",
            "",
            "",
            "^".repeat(carets).paint(Color::Red).bold()
        )?;
        if let Some(help) = &self.help_display {
            write!(f, " {}: {help}", "help".bold())?;
        }
        writeln!(f)
    }
}
