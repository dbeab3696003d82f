use lox_base::diagnostic::Storage;
use lox_test::input::Input;
use proptest::{
    prelude::Arbitrary, prop_assert, prop_assert_eq, proptest, test_runner::TestCaseResult,
};

use super::{ScanEvent, Scanner};
use crate::token::{
    tests::{Separator, Token},
    TokenKind, UNEXPECTED_CHARACTER, UNTERMINATED_STRING,
};

fn scan(source: &str) -> Vec<crate::token::Token<'_>> { Scanner::new(source).collect() }

fn kinds(source: &str) -> Vec<TokenKind> { scan(source).iter().map(|x| x.kind).collect() }

fn lexemes(source: &str) -> Vec<&str> { scan(source).iter().map(|x| x.lexeme).collect() }

#[test]
fn empty_source() {
    let mut scanner = Scanner::new("");
    let token = scanner.next_token();

    assert_eq!(token.kind, TokenKind::Eof);
    assert_eq!(token.lexeme, "");
    assert_eq!(token.line, 1);
    assert!(scanner.finished());
}

#[test]
fn eof_is_produced_once_by_the_iterator() {
    let mut scanner = Scanner::new("  \n ");

    let eof = scanner.next().unwrap();
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.line, 2);

    assert_eq!(scanner.next(), None);
    assert_eq!(scanner.next(), None);
}

#[test]
fn next_token_keeps_returning_eof() {
    let mut scanner = Scanner::new("x");
    assert_eq!(scanner.next_token().kind, TokenKind::Identifier);

    for _ in 0..3 {
        let token = scanner.next_token();
        assert_eq!(token.kind, TokenKind::Eof);
        assert_eq!((token.start, token.end), (1, 1));
    }
}

#[test]
fn single_character_tokens() {
    assert_eq!(kinds("(){};,.+-*/"), vec![
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::Semicolon,
        TokenKind::Comma,
        TokenKind::Dot,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Eof,
    ]);
}

#[test]
fn compound_operators_use_maximal_munch() {
    assert_eq!(kinds("!="), vec![TokenKind::BangEqual, TokenKind::Eof]);
    assert_eq!(kinds("== <= >="), vec![
        TokenKind::EqualEqual,
        TokenKind::LessEqual,
        TokenKind::GreaterEqual,
        TokenKind::Eof,
    ]);
    assert_eq!(kinds("! = < >"), vec![
        TokenKind::Bang,
        TokenKind::Equal,
        TokenKind::Less,
        TokenKind::Greater,
        TokenKind::Eof,
    ]);
    assert_eq!(kinds("==="), vec![
        TokenKind::EqualEqual,
        TokenKind::Equal,
        TokenKind::Eof
    ]);
    assert_eq!(lexemes("<=<"), vec!["<=", "<", ""]);
}

#[test]
fn keywords_match_whole_words_only() {
    assert_eq!(kinds("or"), vec![TokenKind::Or, TokenKind::Eof]);
    assert_eq!(kinds("orchid"), vec![TokenKind::Identifier, TokenKind::Eof]);
    assert_eq!(kinds("forever"), vec![TokenKind::Identifier, TokenKind::Eof]);
    assert_eq!(kinds("iffy"), vec![TokenKind::Identifier, TokenKind::Eof]);
    assert_eq!(kinds("fun fa f"), vec![
        TokenKind::Fun,
        TokenKind::Identifier,
        TokenKind::Identifier,
        TokenKind::Eof,
    ]);
}

#[test]
fn identifiers() {
    assert_eq!(lexemes("_a1 b_2c x"), vec!["_a1", "b_2c", "x", ""]);
    assert_eq!(kinds("9lives"), vec![
        TokenKind::Number,
        TokenKind::Identifier,
        TokenKind::Eof
    ]);
}

#[test]
fn line_tracking() {
    let tokens = scan("a\nb\nc");

    assert_eq!(
        tokens.iter().map(|x| (x.kind, x.line)).collect::<Vec<_>>(),
        vec![
            (TokenKind::Identifier, 1),
            (TokenKind::Identifier, 2),
            (TokenKind::Identifier, 3),
            (TokenKind::Eof, 3),
        ]
    );
}

#[test]
fn numbers() {
    let tokens = scan("3.14");
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].lexeme, "3.14");
    assert_eq!(tokens.len(), 2);

    let tokens = scan("3.");
    assert_eq!(
        tokens.iter().map(|x| (x.kind, x.lexeme)).collect::<Vec<_>>(),
        vec![
            (TokenKind::Number, "3"),
            (TokenKind::Dot, "."),
            (TokenKind::Eof, "")
        ]
    );

    assert_eq!(lexemes("1.2.3"), vec!["1.2", ".", "3", ""]);
    assert_eq!(lexemes(".5"), vec![".", "5", ""]);
}

#[test]
fn strings_keep_their_quotes() {
    let tokens = scan("\"hi\"");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, "\"hi\"");
}

#[test]
fn multi_line_string() {
    let tokens = scan("\"a\nb\" c");

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, "\"a\nb\"");
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].lexeme, "c");
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn unterminated_string() {
    let tokens = scan("x \"hi\nthere");

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].kind, TokenKind::Error);
    assert_eq!(tokens[1].lexeme, UNTERMINATED_STRING);
    assert_eq!(tokens[1].line, 2);
    assert_eq!((tokens[1].start, tokens[1].end), (2, 11));
    assert_eq!(tokens[2].kind, TokenKind::Eof);

    assert_eq!(kinds("\"hi"), vec![TokenKind::Error, TokenKind::Eof]);
}

#[test]
fn comments_produce_no_tokens() {
    let tokens = scan("// x\n1");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].lexeme, "1");
    assert_eq!(tokens[0].line, 2);

    assert_eq!(kinds("// only a comment"), vec![TokenKind::Eof]);
    assert_eq!(kinds("a / b // c / d"), vec![
        TokenKind::Identifier,
        TokenKind::Slash,
        TokenKind::Identifier,
        TokenKind::Eof,
    ]);
}

#[test]
fn whitespace_is_skipped() {
    let tokens = scan(" \t\r\n  var");

    assert_eq!(tokens[0].kind, TokenKind::Var);
    assert_eq!(tokens[0].line, 2);
    assert_eq!(tokens[0].start, 6);
}

#[test]
fn unexpected_character() {
    let mut scanner = Scanner::new("@");

    let token = scanner.next_token();
    assert_eq!(token.kind, TokenKind::Error);
    assert_eq!(token.lexeme, UNEXPECTED_CHARACTER);
    assert_eq!(token.line, 1);
    assert_eq!(scanner.current(), 1);

    assert_eq!(scanner.next_token().kind, TokenKind::Eof);
}

#[test]
fn scanning_continues_after_errors() {
    assert_eq!(kinds("a # b $ \0 c"), vec![
        TokenKind::Identifier,
        TokenKind::Error,
        TokenKind::Identifier,
        TokenKind::Error,
        TokenKind::Error,
        TokenKind::Identifier,
        TokenKind::Eof,
    ]);
}

#[test]
fn non_ascii_character_is_a_single_error() {
    let tokens = scan("λx");

    assert_eq!(tokens[0].kind, TokenKind::Error);
    assert_eq!((tokens[0].start, tokens[0].end), (0, 2));
    assert_eq!(tokens[1].lexeme, "x");
    assert_eq!(tokens[2].kind, TokenKind::Eof);
}

#[test]
fn statement() {
    let tokens = scan("var greeting = \"hello\";\nprint greeting;");

    assert_eq!(
        tokens
            .iter()
            .map(|x| (x.kind, x.lexeme, x.line))
            .collect::<Vec<_>>(),
        vec![
            (TokenKind::Var, "var", 1),
            (TokenKind::Identifier, "greeting", 1),
            (TokenKind::Equal, "=", 1),
            (TokenKind::String, "\"hello\"", 1),
            (TokenKind::Semicolon, ";", 1),
            (TokenKind::Print, "print", 2),
            (TokenKind::Identifier, "greeting", 2),
            (TokenKind::Semicolon, ";", 2),
            (TokenKind::Eof, "", 2),
        ]
    );
}

#[test]
fn trace_events() {
    let storage: Storage<ScanEvent> = Storage::new();
    let tokens = Scanner::with_handler(" ?", &storage).collect::<Vec<_>>();

    assert_eq!(tokens.len(), 2);
    assert_eq!(storage.into_vec(), vec![
        ScanEvent::SkippingWhitespace { length: 1 },
        ScanEvent::Scanning { line: 1 },
        ScanEvent::Unrecognized { character: '?' },
        ScanEvent::Emitting {
            kind: TokenKind::Error
        },
        ScanEvent::Scanning { line: 1 },
        ScanEvent::Emitting {
            kind: TokenKind::Eof
        },
    ]);
}

fn check_sequence(tokens: &[(Separator, Token)]) -> TestCaseResult {
    let mut source = String::new();
    let mut expected_lines = Vec::new();

    for (separator, token) in tokens {
        source.push_str(&separator.to_string());
        expected_lines.push(source.matches('\n').count() + 1);
        source.push_str(&token.to_string());
    }

    let inputs = tokens.iter().map(|(_, token)| token.clone()).collect::<Vec<_>>();
    let mut outputs = Scanner::new(&source).collect::<Vec<_>>();

    let eof = outputs.pop();
    prop_assert_eq!(eof.map(|x| x.kind), Some(TokenKind::Eof));

    inputs.as_slice().assert(outputs.as_slice())?;
    prop_assert_eq!(
        outputs.iter().map(|x| x.line).collect::<Vec<_>>(),
        expected_lines
    );

    Ok(())
}

proptest! {
    #[test]
    fn token_sequence_test(
        tokens in proptest::collection::vec((Separator::arbitrary(), Token::arbitrary()), 0..16)
    ) {
        check_sequence(&tokens)?;
    }

    #[test]
    fn arbitrary_source_terminates(source in "\\PC*") {
        let mut scanner = Scanner::new(&source);
        let mut previous = (0, 1);
        let mut count = 0;

        loop {
            let token = scanner.next_token();
            count += 1;

            prop_assert!(scanner.start() <= scanner.current());
            prop_assert!(scanner.current() <= source.len());
            prop_assert!(previous.0 <= token.start && token.start <= token.end);
            prop_assert!(previous.1 <= scanner.line());
            previous = (token.end, scanner.line());

            if token.kind == TokenKind::Eof {
                break;
            }

            // every token other than the end of the source consumes something
            prop_assert!(token.end > token.start);
            prop_assert!(count <= source.len());
        }

        prop_assert_eq!(scanner.next(), None);
    }

    #[test]
    fn trace_does_not_alter_tokens(source in "[ -~\\n]*") {
        let storage: Storage<ScanEvent> = Storage::new();

        let traced = Scanner::with_handler(&source, &storage).collect::<Vec<_>>();
        let untraced = Scanner::new(&source).collect::<Vec<_>>();

        prop_assert_eq!(traced, untraced);
    }
}
