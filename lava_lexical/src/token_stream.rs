//! Contains the [`TokenStream`] struct.

use std::{ops::Index, sync::Arc};

use derive_more::Deref;
use lava_base::{diagnostic::Handler, source_file::SourceFile};

use crate::{error, scanner::Scanner, token::Token};

/// Is the list of tokens of a whole source file, with keywords already promoted.
///
/// This struct is the final output of the lexical analysis phase and is meant to be used by the
/// next stage of the compilation process.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deref)]
pub struct TokenStream {
    #[deref]
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Tokenizes the given source file.
    ///
    /// The tokens are pulled from a [`Scanner`] until it is exhausted, and every identifier that
    /// spells a keyword is promoted with [`Token::promote_keyword`]. A lexical error is reported to
    /// the `handler`; the stream then holds the tokens scanned before the error.
    #[must_use]
    pub fn tokenize(source_file: &Arc<SourceFile>, handler: &dyn Handler<error::Error>) -> Self {
        let mut scanner = Scanner::with_source_file(source_file.clone());
        let mut tokens = Vec::new();

        for result in scanner.tokens() {
            match result {
                Ok(token) => tokens.push(token.promote_keyword()),
                Err(error) => handler.receive(error),
            }
        }

        Self { tokens }
    }

    /// Dissolves this struct into the list of its tokens.
    #[must_use]
    pub fn dissolve(self) -> Vec<Token> { self.tokens }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Self::Output { &self.tokens[index] }
}

#[cfg(test)]
pub(crate) mod tests;
