//! Contains the [`TokenStream`] struct.

use std::sync::Arc;

use derive_more::Deref;
use lox_base::{
    diagnostic::{Dummy, Handler},
    source_file::SourceFile,
};

use crate::{
    error,
    scanner::{ScanEvent, Scanner},
    token::Token,
};

/// Is the list of every token scanned from a source file, ending with the
/// [`crate::token::TokenKind::Eof`] token.
///
/// Error tokens stay in the stream at the position they were found; their structured form is
/// reported to the handler given to [`TokenStream::tokenize`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref)]
pub struct TokenStream<'a> {
    #[deref]
    tokens: Vec<Token<'a>>,
}

impl<'a> TokenStream<'a> {
    /// Scans the whole content of the given source file.
    ///
    /// Every error token found is also sent to `handler` as an [`error::Error`].
    #[must_use]
    pub fn tokenize(source_file: &'a Arc<SourceFile>, handler: &dyn Handler<error::Error>) -> Self {
        Self::tokenize_with_trace(source_file, handler, Dummy)
    }

    /// Same as [`TokenStream::tokenize`], but reports every scanning step to `trace`.
    #[must_use]
    pub fn tokenize_with_trace(
        source_file: &'a Arc<SourceFile>,
        handler: &dyn Handler<error::Error>,
        trace: impl Handler<ScanEvent>,
    ) -> Self {
        let tokens = Scanner::with_handler(source_file.content(), trace)
            .inspect(|token| {
                if let Some(error) = error::Error::from_token(source_file, token) {
                    handler.receive(error);
                }
            })
            .collect();

        Self { tokens }
    }

    /// Dissolves this struct into the underlying list of tokens.
    #[must_use]
    pub fn dissolve(self) -> Vec<Token<'a>> { self.tokens }
}
