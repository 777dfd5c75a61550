//! Is a module containing the [`Token`] type and all of its related types.

use std::{collections::HashMap, fmt::Display, str::FromStr};

use derive_new::new;
use enum_as_inner::EnumAsInner;
use getset::{CopyGetters, Getters};
use lava_base::source_file::{Location, Span};
use lazy_static::lazy_static;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};
use thiserror::Error;

/// Is an enumeration representing keywords in the Lava programming language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum KeywordKind {
    Print,
}

impl Display for KeywordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Is an error that is returned when a string cannot be parsed into a [`KeywordKind`] in
/// [`FromStr`] trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Error)]
#[error("invalid string representation of keyword.")]
pub struct KeywordParseError;

impl FromStr for KeywordKind {
    type Err = KeywordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref STRING_KEYWORD_MAP: HashMap<&'static str, KeywordKind> =
                KeywordKind::iter()
                    .map(|keyword| (keyword.as_str(), keyword))
                    .collect();
        }
        STRING_KEYWORD_MAP.get(s).copied().ok_or(KeywordParseError)
    }
}

impl KeywordKind {
    /// Gets the string representation of the keyword as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Print => "print",
        }
    }
}

/// Is an enumeration containing all kinds of tokens in the Lava programming language.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, IntoStaticStr,
)]
#[allow(missing_docs)]
pub enum TokenKind {
    Identifier,

    Integer,
    /// A floating point literal. Reserved for the parser, the scanner never produces it.
    Point,
    String,

    Equal,
    Plus,
    Dash,
    Star,
    DoubleStar,
    Slash,
    Caret,
    AtSymbol,
    SingleQuote,
    Ampersand,
    Pipe,

    Keyword(KeywordKind),
}

/// Every operator lexeme paired with the kind of token it makes.
const OPERATORS: [(&str, TokenKind); 11] = [
    ("=", TokenKind::Equal),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Dash),
    ("*", TokenKind::Star),
    ("**", TokenKind::DoubleStar),
    ("/", TokenKind::Slash),
    ("^", TokenKind::Caret),
    ("@", TokenKind::AtSymbol),
    ("'", TokenKind::SingleQuote),
    ("&", TokenKind::Ampersand),
    ("|", TokenKind::Pipe),
];

/// The operators spelled with more than one character. Each of them is recognized by folding the
/// lookahead character into the operator that its first character starts.
pub const MULTI_CHARACTER_OPERATORS: [&str; 1] = ["**"];

impl TokenKind {
    /// Gets the operator kind spelled by the given lexeme.
    #[must_use]
    pub fn from_operator(lexeme: &str) -> Option<Self> {
        OPERATORS
            .iter()
            .find(|(operator, _)| *operator == lexeme)
            .map(|(_, kind)| *kind)
    }

    /// Checks if the character is an operator on its own, and thus starts an operator token.
    #[must_use]
    pub fn is_operator_start(character: char) -> bool {
        OPERATORS.iter().any(|(operator, _)| {
            let mut chars = operator.chars();
            chars.next() == Some(character) && chars.next().is_none()
        })
    }

    /// Gets the lexeme of the operator kind, or [`None`] if the kind is not an operator.
    #[must_use]
    pub fn operator_str(self) -> Option<&'static str> {
        OPERATORS
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(operator, _)| *operator)
    }

    /// Gets the name of the kind, e.g. `DoubleStar`.
    #[must_use]
    pub fn name(self) -> &'static str { self.into() }
}

/// Represents a classified unit of the source code.
///
/// A token is never modified once it is made; keyword promotion makes a new token.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, CopyGetters, new)]
pub struct Token {
    /// Gets the kind of the token.
    #[get_copy = "pub"]
    kind: TokenKind,

    value: String,

    /// Gets the span of the source code that the token was made from. For strings, the span
    /// includes both quotes.
    #[get = "pub"]
    span: Span,

    /// Gets the location of the first character of the token.
    #[get_copy = "pub"]
    location: Location,
}

impl Token {
    /// Gets the textual payload of the token: the spelling of an identifier or keyword, the digits
    /// of a number, the content of a string without its quotes, or the lexeme of an operator.
    #[must_use]
    pub fn value(&self) -> &str { &self.value }

    /// Promotes an identifier spelling a keyword to a [`TokenKind::Keyword`] token.
    ///
    /// Any other token is returned unchanged.
    #[must_use]
    pub fn promote_keyword(self) -> Self {
        if !self.kind.is_identifier() {
            return self;
        }

        match KeywordKind::from_str(&self.value) {
            Ok(keyword) => Self {
                kind: TokenKind::Keyword(keyword),
                ..self
            },
            Err(KeywordParseError) => self,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?})", self.kind.name(), self.value)
    }
}
