//! Contains all kinds of lexical errors that can occur while scanning the source code.

use std::{fmt::Display, sync::Arc};

use derive_more::From;
use derive_new::new;
use enum_as_inner::EnumAsInner;
use lox_base::{
    log::{Message, Severity, SourceCodeDisplay},
    source_file::{SourceFile, Span},
};

use crate::token::{Token, UNEXPECTED_CHARACTER, UNTERMINATED_STRING};

/// The source code contains a character that doesn't start any token.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, new)]
pub struct UnexpectedCharacter {
    /// The span of the offending character.
    pub span: Span,
}

impl Display for UnexpectedCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, "found an unexpected character"),
            SourceCodeDisplay::new(
                &self.span,
                Some("this character is not part of the Lox language")
            )
        )
    }
}

/// The source code contains a string literal without a closing `"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, new)]
pub struct UnterminatedString {
    /// The span from the opening `"` to the end of the source code.
    pub span: Span,
}

impl Display for UnterminatedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, "found an unterminated string literal"),
            SourceCodeDisplay::new(&self.span, Some("this string is never closed by a `\"`"))
        )
    }
}

/// Is an enumeration containing all kinds of lexical errors that can occur while scanning the
/// source code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Error {
    UnexpectedCharacter(UnexpectedCharacter),
    UnterminatedString(UnterminatedString),
}

impl Error {
    /// Creates the lexical error described by an error token scanned from `source_file`.
    ///
    /// Returns [`None`] if the token is not an error token, carries an unknown message or doesn't
    /// lie within the source file.
    #[must_use]
    pub fn from_token(source_file: &Arc<SourceFile>, token: &Token) -> Option<Self> {
        if !token.is_error() {
            return None;
        }

        match token.lexeme {
            // the literal runs until the end of the source code
            UNTERMINATED_STRING => Span::to_end(source_file.clone(), token.start)
                .map(|span| UnterminatedString::new(span).into()),
            UNEXPECTED_CHARACTER => Span::new(source_file.clone(), token.start, token.end)
                .map(|span| UnexpectedCharacter::new(span).into()),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter(err) => write!(f, "{err}"),
            Self::UnterminatedString(err) => write!(f, "{err}"),
        }
    }
}
