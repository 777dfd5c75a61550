//! Contains all kinds of lexical errors that can occur while scanning the source code.

use std::fmt::Display;

use derive_more::From;
use enum_as_inner::EnumAsInner;
use lava_base::{
    log::{Message, Severity, SourceCodeDisplay},
    source_file::{Location, Span},
};

/// The source code contains a string literal whose opening `"` is never closed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnterminatedLiteral {
    /// The span of the opening `"` of the literal.
    pub span: Span,
}

impl Display for UnterminatedLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, "found an unterminated string literal"),
            SourceCodeDisplay::new(
                &self.span,
                Some("this `\"` is not closed before the end of the source")
            )
        )
    }
}

/// The scanner found its own state inconsistent. This is a bug in the scanner, not in the source
/// code being scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InvariantViolation {
    /// The location of the character being scanned when the inconsistency was found.
    pub location: Location,

    /// Describes the violated invariant.
    pub message: &'static str,
}

impl Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            Message::new(
                Severity::Error,
                format!(
                    "internal scanner error at {}:{}: {}",
                    self.location.line + 1,
                    self.location.column + 1,
                    self.message
                )
            )
        )
    }
}

/// Is an enumeration containing all kinds of lexical errors that can occur while scanning the
/// source code.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, From, thiserror::Error,
)]
#[allow(missing_docs)]
pub enum Error {
    #[error("{0}")]
    UnterminatedLiteral(UnterminatedLiteral),

    #[error("{0}")]
    InvariantViolation(InvariantViolation),
}
