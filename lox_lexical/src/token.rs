//! Is a module containing the [`Token`] type and all of its related types.

use lox_base::source_file::ByteIndex;
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// The message carried by an error token produced for a character that starts no token.
pub const UNEXPECTED_CHARACTER: &str = "Unexpected character.";

/// The message carried by an error token produced for a string literal missing its closing quote.
pub const UNTERMINATED_STRING: &str = "Unterminated string.";

/// Is an enumeration containing all kinds of tokens in the Lox programming language.
///
/// The [`Display`](std::fmt::Display) representation is the upper snake case name of the kind,
/// e.g. `LEFT_PAREN` or `BANG_EQUAL`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, Display, IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum TokenKind {
    // single-character tokens
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Semicolon,
    Comma,
    Dot,
    Plus,
    Minus,
    Slash,
    Star,

    // one or two character tokens
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    // literals
    Identifier,
    String,
    Number,

    // keywords
    And,
    Class,
    Else,
    False,
    For,
    Fun,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    Var,
    While,

    Error,
    Eof,
}

/// Returns `kind` if `word` continues past `offset` with exactly `rest`.
fn check_keyword(word: &str, offset: usize, rest: &str, kind: TokenKind) -> Option<TokenKind> {
    (word.as_bytes().get(offset..) == Some(rest.as_bytes())).then_some(kind)
}

impl TokenKind {
    /// Looks up the keyword spelled exactly by `word`.
    ///
    /// The lookup is case-sensitive and matches full words only: `"or"` is [`TokenKind::Or`] but
    /// `"orchid"` is not a keyword.
    #[must_use]
    pub fn keyword(word: &str) -> Option<Self> {
        let bytes = word.as_bytes();

        match bytes.first()? {
            b'a' => check_keyword(word, 1, "nd", Self::And),
            b'c' => check_keyword(word, 1, "lass", Self::Class),
            b'e' => check_keyword(word, 1, "lse", Self::Else),
            b'f' => match bytes.get(1)? {
                b'a' => check_keyword(word, 2, "lse", Self::False),
                b'o' => check_keyword(word, 2, "r", Self::For),
                b'u' => check_keyword(word, 2, "n", Self::Fun),
                _ => None,
            },
            b'i' => check_keyword(word, 1, "f", Self::If),
            b'n' => check_keyword(word, 1, "il", Self::Nil),
            b'o' => check_keyword(word, 1, "r", Self::Or),
            b'p' => check_keyword(word, 1, "rint", Self::Print),
            b'r' => check_keyword(word, 1, "eturn", Self::Return),
            b's' => check_keyword(word, 1, "uper", Self::Super),
            b'v' => check_keyword(word, 1, "ar", Self::Var),
            b'w' => check_keyword(word, 1, "hile", Self::While),
            _ => None,
        }
    }

    /// Gets the source spelling of the kind if it is a keyword.
    #[must_use]
    pub fn keyword_str(self) -> Option<&'static str> {
        Some(match self {
            Self::And => "and",
            Self::Class => "class",
            Self::Else => "else",
            Self::False => "false",
            Self::For => "for",
            Self::Fun => "fun",
            Self::If => "if",
            Self::Nil => "nil",
            Self::Or => "or",
            Self::Print => "print",
            Self::Return => "return",
            Self::Super => "super",
            Self::Var => "var",
            Self::While => "while",
            _ => return None,
        })
    }

    /// Checks whether the kind is one of the reserved words.
    #[must_use]
    pub fn is_keyword(self) -> bool { self.keyword_str().is_some() }
}

/// Represents a classified unit of source text produced by the [`crate::scanner::Scanner`].
///
/// The lexeme borrows from the scanned source, so a token cannot outlive the buffer it was
/// produced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    /// Is the kind of the token.
    pub kind: TokenKind,

    /// Is the source text of the token.
    ///
    /// For [`TokenKind::Error`] tokens this is one of the static diagnostic messages
    /// ([`UNEXPECTED_CHARACTER`] or [`UNTERMINATED_STRING`]) instead of source text. String
    /// literals keep both of their quotes.
    pub lexeme: &'a str,

    /// Is the line (starting at 1) of the first character of the lexeme. For error tokens it is
    /// the line the scanner was on when the error was detected.
    pub line: usize,

    /// Is the byte index where the token starts.
    pub start: ByteIndex,

    /// Is the byte index right after the token (exclusive). For error tokens, the range
    /// `start..end` covers the offending source text.
    pub end: ByteIndex,
}

impl Token<'_> {
    /// Checks whether the token is a lexical error.
    #[must_use]
    pub fn is_error(&self) -> bool { self.kind == TokenKind::Error }
}
