//! Provides the types that render messages and source excerpts for the console.

use std::fmt::Display;

use derive_new::new;
use formatting::{Attribute, Color, Style};

use crate::source_file::{Location, Span};

pub mod formatting;

/// Represents the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
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
        let log_header = Style::Bold.with(match self.severity {
            Severity::Error => Color::Red.with("[error]:"),
        });

        let message_part = Style::Bold.with(&self.display);

        write!(f, "{log_header} {message_part}")
    }
}

fn get_digit(mut number: usize) -> usize {
    let mut digit = 0;

    while number > 0 {
        number /= 10;
        digit += 1;
    }

    digit
}

/// Structure implementing [`Display`] that prints the lines of source code covered by a span,
/// with the span itself underlined.
///
/// Lines and columns are printed starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct SourceCodeDisplay<'a, T> {
    /// The span of the source code to be printed.
    pub span: &'a Span,

    /// The help message to be displayed.
    pub help_display: Option<T>,
}

impl<'a, T> SourceCodeDisplay<'a, T> {
    /// Writes the line number gutter, or an empty gutter if `line` is [`None`].
    fn write_gutter(
        f: &mut std::fmt::Formatter<'_>,
        line: Option<usize>,
        width: usize,
    ) -> std::fmt::Result {
        match line {
            Some(line) => write!(
                f,
                "{}{:pad$}",
                Style::Bold.with(Color::Cyan.with(line + 1)),
                "",
                pad = width - get_digit(line + 1) + 1
            )?,
            None => write!(f, "{:pad$}", "", pad = width + 1)?,
        }

        write!(f, "{} ", Style::Bold.with(Color::Cyan.with("┃")))
    }

    /// Writes a source line, underlining the characters between `start` and `end`.
    fn write_source_line(
        f: &mut std::fmt::Formatter<'_>,
        line_number: usize,
        line: &str,
        highlight: Option<(Location, Location)>,
    ) -> std::fmt::Result {
        for (column, char) in line.chars().enumerate() {
            if char == '\n' || char == '\r' {
                continue;
            }

            let location = Location {
                line: line_number,
                column,
            };
            let is_in_span =
                highlight.is_some_and(|(start, end)| location >= start && location < end);

            // tabs are printed as 4 spaces
            if char == '\t' {
                write!(f, "    ")?;
            } else if is_in_span {
                write!(
                    f,
                    "{}",
                    Style::Underline.with(Style::Bold.with(Color::Red.with(char)))
                )?;
            } else {
                write!(f, "{char}")?;
            }
        }

        writeln!(f)
    }
}

impl<'a, T: Display> Display for SourceCodeDisplay<'a, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let source_file = self.span.source_file();
        let start = self.span.start_location();
        let mut end = self.span.end_location();

        // an empty span still marks the character it points at
        if end == start {
            end.column += 1;
        }

        // a span ending right after a line terminator doesn't extend onto the next line
        let last_line = if end.line > start.line && end.column == 0 {
            end.line - 1
        } else {
            end.line
        };
        let is_multiline = start.line != last_line;
        let width = get_digit(last_line + 2);

        writeln!(
            f,
            "{:width$}{} {}:{}:{}",
            "",
            Style::Bold.with(Color::Cyan.with("-->")),
            source_file.name(),
            start.line + 1,
            start.column + 1,
        )?;

        Self::write_gutter(f, None, width)?;
        writeln!(f)?;

        if let Some(previous) = start.line.checked_sub(1) {
            if let Some(line) = source_file.get_line(previous) {
                Self::write_gutter(f, Some(previous), width)?;
                Self::write_source_line(f, previous, line, None)?;
            }
        }

        for line_number in start.line..=last_line {
            let Some(line) = source_file.get_line(line_number) else {
                break;
            };

            Self::write_gutter(f, Some(line_number), width)?;
            Self::write_source_line(f, line_number, line, Some((start, end)))?;
        }

        if let (Some(help), false) = (&self.help_display, is_multiline) {
            Self::write_gutter(f, None, width)?;

            // aligns the help message with the start of the span
            if let Some(line) = source_file.get_line(start.line) {
                for char in line.chars().take(start.column) {
                    write!(f, "{}", if char == '\t' { "    " } else { " " })?;
                }
            }

            writeln!(f, "{}: {help}", Style::Bold.with("help"))?;
        }

        if let Some(line) = source_file
            .get_line(last_line + 1)
            .filter(|line| !line.is_empty())
        {
            Self::write_gutter(f, Some(last_line + 1), width)?;
            Self::write_source_line(f, last_line + 1, line, None)?;
        }

        Self::write_gutter(f, None, width)?;
        writeln!(f)?;

        if let (Some(help), true) = (&self.help_display, is_multiline) {
            writeln!(
                f,
                "{:width$} {} {}: {help}",
                "",
                Style::Bold.with(Color::Cyan.with("=")),
                Style::Bold.with("help"),
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
