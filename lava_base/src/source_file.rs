//! Contains the [`SourceFile`] that the lexer scans and the positional types pointing into it.
//!
//! The text of a [`SourceFile`] is normalized to Unicode NFKC once, when the file is created, so
//! that composed and decomposed spellings (or fullwidth and halfwidth punctuation) of the same
//! text are indistinguishable to every later phase.

use std::{cmp::Ordering, fmt::Debug, ops::Range, sync::Arc};

use getset::{CopyGetters, Getters};
use unicode_normalization::UnicodeNormalization;

/// The name given to source files created from an anonymous string.
pub const ANONYMOUS_NAME: &str = "<source>";

/// Represents an immutable, NFKC-normalized source text.
#[derive(Getters)]
pub struct SourceFile {
    /// Gets the name of the source file shown in diagnostics.
    #[get = "pub"]
    name: String,

    content: String,

    /// Byte ranges of every line, terminators included.
    lines: Vec<Range<usize>>,
}

impl Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("lines", &self.lines)
            .finish_non_exhaustive()
    }
}

impl SourceFile {
    /// Creates a new source file named `name` from the given text.
    ///
    /// The text is normalized to NFKC before it is stored.
    #[must_use]
    pub fn new(name: impl Into<String>, text: &str) -> Arc<Self> {
        let content = normalize(text);
        let lines = get_line_byte_positions(&content);

        Arc::new(Self {
            name: name.into(),
            content,
            lines,
        })
    }

    /// Creates a new source file named [`ANONYMOUS_NAME`] from the given text.
    #[must_use]
    pub fn anonymous(text: &str) -> Arc<Self> { Self::new(ANONYMOUS_NAME, text) }

    /// Gets the normalized content of the source file.
    #[must_use]
    pub fn content(&self) -> &str { &self.content }

    /// Gets the line at the given line number, including its terminator.
    ///
    /// The line number starts at 0.
    #[must_use]
    pub fn get_line(&self, line: usize) -> Option<&str> {
        self.lines
            .get(line)
            .map(|range| &self.content[range.clone()])
    }

    /// Gets the number of lines in the source file. An empty file has a single empty line.
    #[must_use]
    pub fn line_count(&self) -> usize { self.lines.len() }

    /// Gets the [`Location`] of the given byte index.
    ///
    /// The byte index equal to the content length is valid and points past the last character.
    /// Returns [`None`] if the index is out of bounds or not on a character boundary.
    #[must_use]
    pub fn get_location(&self, byte_index: ByteIndex) -> Option<Location> {
        if !self.content.is_char_boundary(byte_index) {
            return None;
        }

        let line = if byte_index == self.content.len() {
            self.lines.len() - 1
        } else {
            self.lines
                .binary_search_by(|range| {
                    if range.contains(&byte_index) {
                        Ordering::Equal
                    } else if byte_index < range.start {
                        Ordering::Greater
                    } else {
                        Ordering::Less
                    }
                })
                .ok()?
        };

        let line_start = self.lines[line].start;
        let column = self.content[line_start..byte_index].chars().count();

        Some(Location { line, column })
    }
}

/// Normalizes the given text to Unicode NFKC.
#[must_use]
pub fn normalize(text: &str) -> String { text.nfkc().collect() }

/// Is an unsigned integer that represents a byte index in the source code.
pub type ByteIndex = usize;

/// Represents a range of bytes in a source file.
#[derive(Clone, Getters, CopyGetters)]
pub struct Span {
    /// Gets the start byte index of the span.
    #[get_copy = "pub"]
    start: ByteIndex,

    /// Gets the end byte index of the span (exclusive).
    #[get_copy = "pub"]
    end: ByteIndex,

    /// Gets the source file that the span is located in.
    #[get = "pub"]
    source_file: Arc<SourceFile>,
}

impl Debug for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Span")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("content", &self.str())
            .finish()
    }
}

impl PartialEq for Span {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.source_file, &other.source_file)
            && self.start == other.start
            && self.end == other.end
    }
}

impl Eq for Span {}

impl PartialOrd for Span {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for Span {
    fn cmp(&self, other: &Self) -> Ordering {
        let self_ptr_value = Arc::as_ptr(&self.source_file) as usize;
        let other_ptr_value = Arc::as_ptr(&other.source_file) as usize;

        self_ptr_value
            .cmp(&other_ptr_value)
            .then_with(|| self.start.cmp(&other.start))
            .then_with(|| self.end.cmp(&other.end))
    }
}

impl std::hash::Hash for Span {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
        Arc::as_ptr(&self.source_file).hash(state);
    }
}

/// Is a struct pointing to a particular character in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Location {
    /// The line number of the location (starts at 0).
    pub line: usize,

    /// The column of the location counted in characters (starts at 0).
    pub column: usize,
}

impl Span {
    /// Creates a span from the given start and end byte indices in the source file.
    ///
    /// Returns [`None`] if `start > end`, or either index is out of bounds or not on a character
    /// boundary.
    #[must_use]
    pub fn new(source_file: Arc<SourceFile>, start: ByteIndex, end: ByteIndex) -> Option<Self> {
        let content = source_file.content();

        if start > end || !content.is_char_boundary(start) || !content.is_char_boundary(end) {
            return None;
        }

        Some(Self {
            start,
            end,
            source_file,
        })
    }

    /// Creates a span from the given start byte index to the end of the source file.
    #[must_use]
    pub fn to_end(source_file: Arc<SourceFile>, start: ByteIndex) -> Option<Self> {
        let end = source_file.content().len();
        Self::new(source_file, start, end)
    }

    /// Gets the string slice of the source code that the span represents.
    #[must_use]
    pub fn str(&self) -> &str { &self.source_file.content()[self.start..self.end] }

    /// Gets the [`Location`] of the first character of the span.
    #[must_use]
    pub fn start_location(&self) -> Location {
        self.source_file
            .get_location(self.start)
            .unwrap_or_default()
    }

    /// Gets the [`Location`] just past the last character of the span.
    #[must_use]
    pub fn end_location(&self) -> Location {
        self.source_file.get_location(self.end).unwrap_or_default()
    }

    /// Joins the starting position of this span with the end position of the given span.
    #[must_use]
    pub fn join(&self, end: &Self) -> Option<Self> {
        if !Arc::ptr_eq(&self.source_file, &end.source_file) || self.start > end.end {
            return None;
        }

        Some(Self {
            start: self.start,
            end: end.end,
            source_file: self.source_file.clone(),
        })
    }
}

/// Splits the text into lines. Only `\n` terminates a line, so a `\r\n` pair ends the line it
/// belongs to and a lone `\r` does not.
fn get_line_byte_positions(text: &str) -> Vec<Range<usize>> {
    let mut current_position = 0;
    let mut results = Vec::new();

    for (byte, _) in text.match_indices('\n') {
        #[allow(clippy::range_plus_one)]
        results.push(current_position..byte + 1);

        current_position = byte + 1;
    }

    results.push(current_position..text.len());

    results
}

#[cfg(test)]
mod tests;
