//! This crate implements the lexical analysis phase of the Lava front end. This phase is
//! responsible for turning the source code into a sequence of tokens.
//!
//! The [`scanner::Scanner`] produces tokens lazily; [`token_stream::TokenStream`] collects them,
//! with keywords promoted, for the parser.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod error;
pub mod scanner;
pub mod token;
pub mod token_stream;
