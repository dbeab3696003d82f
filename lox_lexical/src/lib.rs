//! This crate implements the lexical analysis phase of Lox. This phase is responsible for
//! scanning the source code into a sequence of tokens, one token at a time.
//!
//! The parser drives a [`scanner::Scanner`] directly; tools working on whole files can collect
//! the tokens together with their diagnostics into a [`token_stream::TokenStream`].

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
