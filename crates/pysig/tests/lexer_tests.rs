use pysig::sig::lexer::{Lexer, TokenKind};
use pysig::LexError;

#[test]
fn test_empty_input() {
    let mut lexer = Lexer::new("");
    let tokens = lexer.tokenize().unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
}

#[test]
fn test_def_keyword() {
    let mut lexer = Lexer::new("def");
    let tokens = lexer.tokenize().unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Def);
    assert_eq!(tokens[0].lexeme, "def");
}

#[test]
fn test_async_def_is_one_token() {
    let mut lexer = Lexer::new("async def");
    let tokens = lexer.tokenize().unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::AsyncDef);
    assert_eq!(tokens[0].lexeme, "async def");
}

#[test]
fn test_async_alone_is_identifier() {
    let mut lexer = Lexer::new("async");
    let tokens = lexer.tokenize().unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[0].lexeme, "async");
}

#[test]
fn test_async_not_followed_by_def() {
    let mut lexer = Lexer::new("async foo");
    let tokens = lexer.tokenize().unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[0].lexeme, "async");
    assert_eq!(tokens[1].kind, TokenKind::Ident);
    assert_eq!(tokens[1].lexeme, "foo");
}

#[test]
fn test_full_signature_token_sequence() {
    let mut lexer = Lexer::new("def foo(a: int, b: str) -> None:");
    let tokens = lexer.tokenize().unwrap();
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Def,
            TokenKind::Ident,
            TokenKind::LParen,
            TokenKind::Ident,
            TokenKind::Colon,
            TokenKind::Ident,
            TokenKind::Comma,
            TokenKind::Ident,
            TokenKind::Colon,
            TokenKind::Ident,
            TokenKind::RParen,
            TokenKind::Arrow,
            TokenKind::NoneLiteral,
            TokenKind::Colon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_identifier_with_digits_and_underscores() {
    let mut lexer = Lexer::new("abc123_xyz");
    let tokens = lexer.tokenize().unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[0].lexeme, "abc123_xyz");
}

#[test]
fn test_leading_underscore_identifier() {
    let mut lexer = Lexer::new("_private");
    let tokens = lexer.tokenize().unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[0].lexeme, "_private");
}

#[test]
fn test_star_and_double_star() {
    let mut lexer = Lexer::new("*args, **kwargs");
    let tokens = lexer.tokenize().unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Star);
    assert_eq!(tokens[1].kind, TokenKind::Ident);
    assert_eq!(tokens[2].kind, TokenKind::Comma);
    assert_eq!(tokens[3].kind, TokenKind::StarStar);
    assert_eq!(tokens[4].kind, TokenKind::Ident);
}

#[test]
fn test_double_star_maximal_munch() {
    let mut lexer = Lexer::new("**");
    let tokens = lexer.tokenize().unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::StarStar);
}

#[test]
fn test_brackets() {
    let mut lexer = Lexer::new("list[int]");
    let tokens = lexer.tokenize().unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[1].kind, TokenKind::LBracket);
    assert_eq!(tokens[2].kind, TokenKind::Ident);
    assert_eq!(tokens[3].kind, TokenKind::RBracket);
}

#[test]
fn test_integer_literal() {
    let mut lexer = Lexer::new("42");
    let tokens = lexer.tokenize().unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Number { float: false });
    assert_eq!(tokens[0].lexeme, "42");
}

#[test]
fn test_float_literal() {
    let mut lexer = Lexer::new("4.25");
    let tokens = lexer.tokenize().unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Number { float: true });
    assert_eq!(tokens[0].lexeme, "4.25");
}

#[test]
fn test_float_with_trailing_dot() {
    let mut lexer = Lexer::new("1.");
    let tokens = lexer.tokenize().unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Number { float: true });
    assert_eq!(tokens[0].lexeme, "1.");
}

#[test]
fn test_second_decimal_point_is_rejected() {
    let mut lexer = Lexer::new("1.2.3");
    let err = lexer.tokenize().unwrap_err();
    match err {
        LexError::UnexpectedChar { ch, .. } => assert_eq!(ch, '.'),
        _ => panic!("Expected UnexpectedChar, got {:?}", err),
    }
}

#[test]
fn test_double_quoted_string() {
    let mut lexer = Lexer::new("\"hello\"");
    let tokens = lexer.tokenize().unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Str);
    assert_eq!(tokens[0].lexeme, "hello");
}

#[test]
fn test_single_quoted_string() {
    let mut lexer = Lexer::new("'hello'");
    let tokens = lexer.tokenize().unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Str);
    assert_eq!(tokens[0].lexeme, "hello");
}

#[test]
fn test_string_contents_taken_verbatim() {
    // No escape processing inside the quotes
    let mut lexer = Lexer::new(r#"'a\nb'"#);
    let tokens = lexer.tokenize().unwrap();
    assert_eq!(tokens[0].lexeme, "a\\nb");
}

#[test]
fn test_unterminated_string() {
    let mut lexer = Lexer::new("'oops");
    let err = lexer.tokenize().unwrap_err();
    assert!(matches!(err, LexError::UnterminatedString { .. }));
}

#[test]
fn test_arrow() {
    let mut lexer = Lexer::new("->");
    let tokens = lexer.tokenize().unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Arrow);
}

#[test]
fn test_lone_minus_is_rejected() {
    // Signed defaults are out of scope; a '-' without '>' has no token rule
    let mut lexer = Lexer::new("-1");
    let err = lexer.tokenize().unwrap_err();
    assert!(matches!(err, LexError::UnexpectedChar { ch: '-', .. }));
}

#[test]
fn test_bool_and_none_keywords() {
    let mut lexer = Lexer::new("True False None");
    let tokens = lexer.tokenize().unwrap();
    assert_eq!(tokens[0].kind, TokenKind::True);
    assert_eq!(tokens[1].kind, TokenKind::False);
    assert_eq!(tokens[2].kind, TokenKind::NoneLiteral);
}

#[test]
fn test_keyword_prefix_is_still_identifier() {
    let mut lexer = Lexer::new("define Truer Nonexistent");
    let tokens = lexer.tokenize().unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Ident);
    assert_eq!(tokens[0].lexeme, "define");
    assert_eq!(tokens[1].kind, TokenKind::Ident);
    assert_eq!(tokens[2].kind, TokenKind::Ident);
}

#[test]
fn test_whitespace_is_skipped() {
    let mut lexer = Lexer::new("  a \t b  ");
    let tokens = lexer.tokenize().unwrap();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].lexeme, "a");
    assert_eq!(tokens[1].lexeme, "b");
}

#[test]
fn test_token_positions() {
    let mut lexer = Lexer::new("def foo");
    let tokens = lexer.tokenize().unwrap();
    assert_eq!(tokens[0].pos.column, 1);
    assert_eq!(tokens[0].pos.offset, 0);
    assert_eq!(tokens[1].pos.column, 5);
    assert_eq!(tokens[1].pos.offset, 4);
    assert_eq!(tokens[1].pos.line, 1);
}

#[test]
fn test_unexpected_character() {
    let mut lexer = Lexer::new("def foo(a: int) -> #");
    let err = lexer.tokenize().unwrap_err();
    assert!(matches!(err, LexError::UnexpectedChar { ch: '#', .. }));
}
