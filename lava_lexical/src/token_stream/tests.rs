use std::fmt::Display;

use lava_base::{
    diagnostic::{Counter, Storage},
    source_file::{Location, SourceFile},
};
use lava_test::input::Input;
use proptest::{
    prelude::Arbitrary,
    prop_assert, prop_assert_eq, proptest,
    strategy::{BoxedStrategy, Strategy},
    test_runner::TestCaseResult,
};

use crate::{
    error::Error,
    token::{self, KeywordKind, TokenKind},
};

/// Represents an input for the [`super::TokenStream`]: tokens each followed by white spaces.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenStream {
    /// The tokens and the white spaces that follow each of them.
    pub parts: Vec<(token::tests::Token, token::tests::WhiteSpaces)>,
}

impl Arbitrary for TokenStream {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        proptest::collection::vec(
            (
                token::tests::Token::arbitrary(),
                token::tests::WhiteSpaces::arbitrary(),
            ),
            0..=24,
        )
        .prop_map(|parts| Self { parts })
        .boxed()
    }
}

impl Display for TokenStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (token, white_spaces) in &self.parts {
            Display::fmt(token, f)?;
            Display::fmt(white_spaces, f)?;
        }

        Ok(())
    }
}

impl Input<&super::TokenStream> for &TokenStream {
    fn assert(self, output: &super::TokenStream) -> TestCaseResult {
        let inputs = self
            .parts
            .iter()
            .map(|(token, _)| token.clone())
            .collect::<Vec<_>>();

        inputs.as_slice().assert(output.as_slice())
    }
}

proptest! {
    #[test]
    fn token_stream_test(
        input in TokenStream::arbitrary()
    ) {
        let source = input.to_string();
        let source_file = SourceFile::new("test.lava", &source);

        let storage: Storage<Error> = Storage::new();
        let token_stream = super::TokenStream::tokenize(&source_file, &storage);

        prop_assert!(storage.as_vec().is_empty());
        input.assert(&token_stream)?;

        for token in token_stream.iter() {
            prop_assert_eq!(token.location(), token.span().start_location());
        }
    }
}

#[test]
fn keywords_are_promoted() {
    let source_file = SourceFile::anonymous("print x\nprint \"hi\"");
    let counter = Counter::default();

    let token_stream = super::TokenStream::tokenize(&source_file, &counter);

    assert_eq!(counter.count(), 0);
    assert_eq!(token_stream.len(), 4);
    assert_eq!(token_stream[0].kind(), TokenKind::Keyword(KeywordKind::Print));
    assert_eq!(token_stream[1].kind(), TokenKind::Identifier);
    assert_eq!(token_stream[2].kind(), TokenKind::Keyword(KeywordKind::Print));
    assert_eq!(token_stream[2].location(), Location { line: 1, column: 0 });
    assert_eq!(token_stream[3].kind(), TokenKind::String);
}

#[test]
fn error_is_reported_to_handler() {
    let source_file = SourceFile::new("test.lava", "x = 1\ny = \"abc");
    let storage: Storage<Error> = Storage::new();

    let token_stream = super::TokenStream::tokenize(&source_file, &storage);

    // the tokens before the error are kept
    let values = token_stream
        .dissolve()
        .into_iter()
        .map(|token| token.value().to_owned())
        .collect::<Vec<_>>();
    assert_eq!(values, ["x", "=", "1", "y", "="]);

    let errors = storage.into_vec();
    assert_eq!(errors.len(), 1);

    let error = errors[0].as_unterminated_literal().unwrap();
    assert_eq!(error.span.start_location(), Location { line: 1, column: 4 });

    let rendered = errors[0].to_string();
    assert!(rendered.contains("found an unterminated string literal"));
    assert!(rendered.contains("test.lava:2:5"));
}
