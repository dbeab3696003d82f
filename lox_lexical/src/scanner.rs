//! Contains the [`Scanner`], which turns Lox source text into [`Token`]s one at a time.

use std::{fmt::Display, iter::FusedIterator};

use getset::CopyGetters;
use lox_base::{
    diagnostic::{Dummy, Handler},
    source_file::ByteIndex,
};

use crate::token::{Token, TokenKind, UNEXPECTED_CHARACTER, UNTERMINATED_STRING};

/// Is an enumeration of the steps the [`Scanner`] reports to its trace handler.
///
/// Whether the events are consumed or ignored never affects the produced tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScanEvent {
    /// Whitespace or comments were skipped before a token.
    SkippingWhitespace {
        /// Number of bytes skipped.
        length: usize,
    },

    /// A new token is about to be recognized.
    Scanning {
        /// The line the token starts on.
        line: usize,
    },

    /// A token has been produced.
    Emitting {
        /// The kind of the produced token.
        kind: TokenKind,
    },

    /// The character doesn't start any token.
    Unrecognized {
        /// The offending character.
        character: char,
    },
}

impl Display for ScanEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SkippingWhitespace { length } => write!(f, "skipped {length} byte(s) of whitespace"),
            Self::Scanning { line } => write!(f, "scanning token on line {line}"),
            Self::Emitting { kind } => write!(f, "emitting {kind} token"),
            Self::Unrecognized { character } => {
                write!(f, "character {character:?} doesn't start any token")
            }
        }
    }
}

/// Is a cursor over an immutable source buffer that produces one [`Token`] per
/// [`Scanner::next_token`] call.
///
/// The scanner never backtracks and looks at most two bytes past the cursor. Lexical errors don't
/// stop it: they come out as [`TokenKind::Error`] tokens and scanning resumes after the offending
/// text on the next call.
///
/// As an [`Iterator`], the scanner yields every token up to and including the single
/// [`TokenKind::Eof`] token, then stops.
#[derive(Debug, Clone, CopyGetters)]
pub struct Scanner<'a, H = Dummy> {
    /// Gets the source text being scanned.
    #[get_copy = "pub"]
    source: &'a str,

    /// Gets the byte index where the lexeme being recognized begins.
    #[get_copy = "pub"]
    start: ByteIndex,

    /// Gets the byte index of the next unconsumed character.
    #[get_copy = "pub"]
    current: ByteIndex,

    /// Gets the number of the line the cursor is on (starts at 1).
    #[get_copy = "pub"]
    line: usize,

    /// Gets whether the [`TokenKind::Eof`] token has been produced.
    #[get_copy = "pub"]
    finished: bool,

    start_line: usize,
    handler: H,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of `source`, on line 1.
    #[must_use]
    pub fn new(source: &'a str) -> Self { Self::with_handler(source, Dummy) }
}

impl<'a, H: Handler<ScanEvent>> Scanner<'a, H> {
    /// Creates a scanner positioned at the start of `source` that reports every scanning step to
    /// `handler`.
    #[must_use]
    pub fn with_handler(source: &'a str, handler: H) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
            finished: false,
            start_line: 1,
            handler,
        }
    }

    /// Scans the next token.
    ///
    /// Once the end of the source is reached, every call returns a [`TokenKind::Eof`] token with
    /// an empty lexeme.
    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_whitespace();

        self.start = self.current;
        self.start_line = self.line;
        self.handler.receive(ScanEvent::Scanning { line: self.line });

        let Some(character) = self.advance() else {
            self.finished = true;
            return self.make_token(TokenKind::Eof);
        };

        if is_alpha(character) {
            return self.identifier();
        }
        if character.is_ascii_digit() {
            return self.number();
        }

        let kind = match character {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            // comments were consumed along with the whitespace
            '/' => TokenKind::Slash,

            '!' => self.either(TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.either(TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.either(TokenKind::LessEqual, TokenKind::Less),
            '>' => self.either(TokenKind::GreaterEqual, TokenKind::Greater),

            '"' => return self.string(),

            character => {
                self.handler.receive(ScanEvent::Unrecognized { character });
                return self.error_token(UNEXPECTED_CHARACTER);
            }
        };

        self.make_token(kind)
    }

    fn peek(&self) -> Option<u8> { self.source.as_bytes().get(self.current).copied() }

    fn peek_next(&self) -> Option<u8> { self.source.as_bytes().get(self.current + 1).copied() }

    /// Consumes the byte under the cursor. Must only be called after a successful `peek`.
    fn bump(&mut self) { self.current += 1; }

    /// Consumes a whole character, multi-byte ones included.
    fn advance(&mut self) -> Option<char> {
        let character = self.source[self.current..].chars().next()?;
        self.current += character.len_utf8();

        Some(character)
    }

    /// Consumes a trailing `=` if there is one.
    fn either(&mut self, with_equal: TokenKind, without_equal: TokenKind) -> TokenKind {
        if self.peek() == Some(b'=') {
            self.bump();
            with_equal
        } else {
            without_equal
        }
    }

    fn skip_whitespace(&mut self) {
        let before = self.current;

        loop {
            match self.peek() {
                Some(b' ' | b'\r' | b'\t') => self.bump(),
                Some(b'\n') => {
                    self.line += 1;
                    self.bump();
                }
                // the newline ending the comment is left for the next iteration
                Some(b'/') if self.peek_next() == Some(b'/') => {
                    while self.peek().is_some_and(|byte| byte != b'\n') {
                        self.bump();
                    }
                }
                _ => break,
            }
        }

        if self.current > before {
            self.handler.receive(ScanEvent::SkippingWhitespace {
                length: self.current - before,
            });
        }
    }

    fn identifier(&mut self) -> Token<'a> {
        while self
            .peek()
            .is_some_and(|byte| is_alpha(byte.into()) || byte.is_ascii_digit())
        {
            self.bump();
        }

        let kind = TokenKind::keyword(&self.source[self.start..self.current])
            .unwrap_or(TokenKind::Identifier);

        self.make_token(kind)
    }

    fn number(&mut self) -> Token<'a> {
        self.skip_digits();

        // the fractional part needs at least one digit after the dot
        if self.peek() == Some(b'.') && self.peek_next().is_some_and(|byte| byte.is_ascii_digit())
        {
            self.bump();
            self.skip_digits();
        }

        self.make_token(TokenKind::Number)
    }

    fn skip_digits(&mut self) {
        while self.peek().is_some_and(|byte| byte.is_ascii_digit()) {
            self.bump();
        }
    }

    fn string(&mut self) -> Token<'a> {
        while let Some(byte) = self.peek() {
            if byte == b'"' {
                break;
            }
            if byte == b'\n' {
                self.line += 1;
            }

            self.bump();
        }

        if self.peek().is_none() {
            return self.error_token(UNTERMINATED_STRING);
        }

        // the closing quote
        self.bump();
        self.make_token(TokenKind::String)
    }

    fn make_token(&self, kind: TokenKind) -> Token<'a> {
        self.handler.receive(ScanEvent::Emitting { kind });

        Token {
            kind,
            lexeme: &self.source[self.start..self.current],
            line: self.start_line,
            start: self.start,
            end: self.current,
        }
    }

    fn error_token(&self, message: &'static str) -> Token<'a> {
        self.handler.receive(ScanEvent::Emitting {
            kind: TokenKind::Error,
        });

        Token {
            kind: TokenKind::Error,
            lexeme: message,
            line: self.line,
            start: self.start,
            end: self.current,
        }
    }
}

fn is_alpha(character: char) -> bool { character.is_ascii_alphabetic() || character == '_' }

impl<'a, H: Handler<ScanEvent>> Iterator for Scanner<'a, H> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            None
        } else {
            Some(self.next_token())
        }
    }
}

impl<'a, H: Handler<ScanEvent>> FusedIterator for Scanner<'a, H> {}

#[cfg(test)]
mod tests;
