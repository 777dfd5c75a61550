//! Contains the [`Scanner`] that turns a source text into a lazy sequence of [`Token`]s.
//!
//! The scanner walks the source one character at a time. Each character is either skipped
//! (whitespace, or the second half of a two-character operator) or handed to one of four
//! sub-scans: string, operator, numeric, and identifier. A sub-scan decides whether its token is
//! complete by looking at the character that follows; when it isn't, the in-progress spelling is
//! kept as the scan state and the next character continues it.

use std::{iter::FusedIterator, sync::Arc};

use getset::Getters;
use lava_base::source_file::{ByteIndex, Location, SourceFile, Span};

use crate::{
    error::{Error, InvariantViolation, UnterminatedLiteral},
    token::{Token, TokenKind, MULTI_CHARACTER_OPERATORS},
};

/// The position of the next character to be scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Cursor {
    /// Number of characters consumed so far.
    index: usize,
    byte: ByteIndex,
    line: usize,
    column: usize,
}

impl Cursor {
    fn location(self) -> Location {
        Location {
            line: self.line,
            column: self.column,
        }
    }

    /// Moves the cursor past the given character.
    fn advance(&mut self, character: char) {
        self.index += 1;
        self.byte += character.len_utf8();

        if character == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }
}

/// The spelling of a token that is still being scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Scratch {
    start: Cursor,
    buffer: String,
}

impl Scratch {
    fn new(start: Cursor) -> Self {
        Self {
            start,
            buffer: String::new(),
        }
    }
}

/// The sub-scan in progress, if any. At most one scratch buffer exists at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum ScanState {
    #[default]
    Idle,
    InNumber(Scratch),
    InIdentifier(Scratch),
    InString(Scratch),
}

/// Scans a NFKC-normalized source text into [`Token`]s.
///
/// A scanner is single-pass: once [`Scanner::tokens`] has been drained, the scanner is exhausted
/// and yields nothing more.
#[derive(Debug, Getters)]
pub struct Scanner {
    /// Gets the normalized source file being scanned.
    #[get = "pub"]
    source_file: Arc<SourceFile>,

    cursor: Cursor,
    state: ScanState,

    /// Set by the operator sub-scan when it folds the lookahead character into its token.
    skip_next: bool,

    finished: bool,
}

/// Classifies a character as numeric the way the numeric sub-scan does.
fn is_numeric(character: char) -> bool { character.is_numeric() }

/// Classifies a character as continuing an identifier.
fn is_identifier_continue(character: char) -> bool { character.is_alphanumeric() }

impl Scanner {
    /// Creates a scanner over the given text, normalizing it to NFKC.
    #[must_use]
    pub fn new(source: &str) -> Self { Self::with_source_file(SourceFile::anonymous(source)) }

    /// Creates a scanner over an already normalized source file.
    #[must_use]
    pub fn with_source_file(source_file: Arc<SourceFile>) -> Self {
        Self {
            source_file,
            cursor: Cursor::default(),
            state: ScanState::Idle,
            skip_next: false,
            finished: false,
        }
    }

    /// Gets the lazy sequence of tokens.
    ///
    /// The sequence ends when the source is exhausted, or right after the first [`Error`].
    pub fn tokens(&mut self) -> Tokens<'_> { Tokens { scanner: self } }

    /// Gets the number of characters consumed so far.
    #[must_use]
    pub fn consumed_characters(&self) -> usize { self.cursor.index }

    /// Gets the location of the next character to be scanned.
    #[must_use]
    pub fn location(&self) -> Location { self.cursor.location() }

    fn invariant_violation(&self, message: &'static str) -> Error {
        InvariantViolation {
            location: self.cursor.location(),
            message,
        }
        .into()
    }

    /// Scans until a token is made, an error occurs, or the source is exhausted.
    fn next_token(&mut self) -> Option<Result<Token, Error>> {
        while !self.finished {
            let mut chars = self.source_file.content()[self.cursor.byte..].chars();

            let Some(character) = chars.next() else {
                self.finished = true;
                return self.finish().err().map(Err);
            };
            let lookahead = chars.next();

            let result = self.dispatch(character, lookahead);
            self.cursor.advance(character);

            match result {
                Ok(Some(token)) => return Some(Ok(token)),
                Ok(None) => {}
                Err(error) => {
                    self.finished = true;
                    self.state = ScanState::Idle;
                    return Some(Err(error));
                }
            }
        }

        None
    }

    /// Checks the state left behind once the source is exhausted.
    fn finish(&mut self) -> Result<(), Error> {
        match std::mem::take(&mut self.state) {
            ScanState::Idle if !self.skip_next => Ok(()),
            ScanState::InString(scratch) => {
                let span = self.span(scratch.start.byte, scratch.start.byte + '"'.len_utf8())?;
                Err(UnterminatedLiteral { span }.into())
            }
            _ => Err(self.invariant_violation("a token was left incomplete at the end of input")),
        }
    }

    /// Hands the character at the cursor to the sub-scan it belongs to.
    fn dispatch(
        &mut self,
        character: char,
        lookahead: Option<char>,
    ) -> Result<Option<Token>, Error> {
        if self.skip_next {
            self.skip_next = false;
            return if self.state == ScanState::Idle {
                Ok(None)
            } else {
                Err(self.invariant_violation("skipped a character in the middle of a token"))
            };
        }

        match std::mem::take(&mut self.state) {
            ScanState::InString(scratch) => return self.scan_string(scratch, character),
            ScanState::InIdentifier(scratch) => {
                return self.scan_identifier(scratch, character, lookahead)
            }
            ScanState::InNumber(scratch) if is_numeric(character) => {
                return self.scan_numeric(scratch, character, lookahead)
            }
            ScanState::InNumber(_) => {
                return Err(self.invariant_violation("a number was continued by a non-digit"))
            }
            ScanState::Idle => {}
        }

        match character {
            // the cursor moves to the next line on its own
            '\n' => Ok(None),
            character if character.is_whitespace() => Ok(None),
            '"' => {
                self.state = ScanState::InString(Scratch::new(self.cursor));
                Ok(None)
            }
            character if TokenKind::is_operator_start(character) => {
                self.scan_operator(character, lookahead).map(Some)
            }
            character if is_numeric(character) => {
                self.scan_numeric(Scratch::new(self.cursor), character, lookahead)
            }
            character => self.scan_identifier(Scratch::new(self.cursor), character, lookahead),
        }
    }

    fn scan_numeric(
        &mut self,
        mut scratch: Scratch,
        character: char,
        lookahead: Option<char>,
    ) -> Result<Option<Token>, Error> {
        scratch.buffer.push(character);

        if lookahead.is_some_and(is_numeric) {
            self.state = ScanState::InNumber(scratch);
            Ok(None)
        } else {
            self.emit(scratch, TokenKind::Integer, character).map(Some)
        }
    }

    fn scan_identifier(
        &mut self,
        mut scratch: Scratch,
        character: char,
        lookahead: Option<char>,
    ) -> Result<Option<Token>, Error> {
        scratch.buffer.push(character);

        if lookahead.is_some_and(is_identifier_continue) {
            self.state = ScanState::InIdentifier(scratch);
            Ok(None)
        } else {
            self.emit(scratch, TokenKind::Identifier, character).map(Some)
        }
    }

    /// Continues a string opened by a `"`; the closing `"` completes it.
    fn scan_string(&mut self, mut scratch: Scratch, character: char) -> Result<Option<Token>, Error> {
        if character == '"' {
            return self.emit(scratch, TokenKind::String, character).map(Some);
        }

        scratch.buffer.push(character);
        self.state = ScanState::InString(scratch);

        Ok(None)
    }

    fn scan_operator(&mut self, character: char, lookahead: Option<char>) -> Result<Token, Error> {
        let mut lexeme = String::from(character);

        if let Some(lookahead) = lookahead {
            lexeme.push(lookahead);

            if MULTI_CHARACTER_OPERATORS.contains(&lexeme.as_str()) {
                self.skip_next = true;
            } else {
                lexeme.pop();
            }
        }

        let kind = TokenKind::from_operator(&lexeme)
            .ok_or_else(|| self.invariant_violation("an operator is missing from the table"))?;
        let span = self.span(self.cursor.byte, self.cursor.byte + lexeme.len())?;

        Ok(Token::new(kind, lexeme, span, self.cursor.location()))
    }

    /// Makes the token whose last character is the one at the cursor.
    fn emit(&self, scratch: Scratch, kind: TokenKind, last: char) -> Result<Token, Error> {
        let span = self.span(scratch.start.byte, self.cursor.byte + last.len_utf8())?;

        Ok(Token::new(kind, scratch.buffer, span, scratch.start.location()))
    }

    fn span(&self, start: ByteIndex, end: ByteIndex) -> Result<Span, Error> {
        Span::new(self.source_file.clone(), start, end)
            .ok_or_else(|| self.invariant_violation("a token span fell outside the source"))
    }
}

/// Is the lazy sequence of tokens returned by [`Scanner::tokens`].
#[derive(Debug)]
pub struct Tokens<'a> {
    scanner: &'a mut Scanner,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> { self.scanner.next_token() }
}

impl<'a> FusedIterator for Tokens<'a> {}
