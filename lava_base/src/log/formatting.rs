//! Contains the ANSI escape code wrappers used to colour and style console messages.

use std::fmt::Display;

/// Is implemented by every kind of ANSI attribute that can be applied to a displayable object.
pub trait Attribute: Copy {
    /// Gets the escape sequence that turns the attribute on.
    fn escape_code(self) -> &'static str;

    /// Applies the attribute to the given displayable object.
    fn with<T>(self, display: T) -> Styled<Self, T> {
        Styled {
            attribute: self,
            display,
        }
    }
}

/// Represents a text style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Style {
    Bold,
    Underline,
}

impl Attribute for Style {
    fn escape_code(self) -> &'static str {
        match self {
            Self::Bold => "\x1B[1m",
            Self::Underline => "\x1B[4m",
        }
    }
}

/// Represents a foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Color {
    Red,
    Cyan,
}

impl Attribute for Color {
    fn escape_code(self) -> &'static str {
        match self {
            Self::Red => "\x1B[31m",
            Self::Cyan => "\x1B[36m",
        }
    }
}

/// Is a struct implementing [`Display`] that prints a displayable object surrounded by the escape
/// code of an [`Attribute`] and the reset code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Styled<A, T> {
    /// The attribute applied to the displayable object.
    pub attribute: A,

    /// The displayable object.
    pub display: T,
}

impl<A: Attribute, T: Display> Display for Styled<A, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}\x1B[0m", self.attribute.escape_code(), self.display)
    }
}
