//! Unit tests for the lexer module.

use super::{
    lexer::{tokenize, Lexer},
    tokens::{Token, TokenKind, TokenSource},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.cl".to_string()))
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("var return if else fun true false"),
        vec![
            TokenKind::KeywordVar,
            TokenKind::KeywordReturn,
            TokenKind::KeywordIf,
            TokenKind::KeywordElse,
            TokenKind::KeywordFun,
            TokenKind::BooleanTrue,
            TokenKind::BooleanFalse,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar_1 _x variable".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].literal, "foo");
    assert_eq!(tokens[1].literal, "bar_1");
    assert_eq!(tokens[2].literal, "_x");
    // Keywords only match whole words.
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].literal, "variable");
    assert_eq!(tokens[4].kind, TokenKind::EndOfInput);
}

#[test]
fn test_tokenize_integers() {
    let tokens = tokenize("5 10 123456".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::IntegerLiteral);
    assert_eq!(tokens[0].literal, "5");
    assert_eq!(tokens[1].literal, "10");
    assert_eq!(tokens[2].literal, "123456");
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("= + - * / % == != < > !"),
        vec![
            TokenKind::Assign,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Equal,
            TokenKind::NotEqual,
            TokenKind::LessThan,
            TokenKind::GreaterThan,
            TokenKind::Bang,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds(", ; ( ) { }"),
        vec![
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_tokenize_without_whitespace() {
    assert_eq!(
        kinds("x==!y"),
        vec![
            TokenKind::Identifier,
            TokenKind::Equal,
            TokenKind::Bang,
            TokenKind::Identifier,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let tokens = tokenize("var x = 5; // five\nx / 2".to_string(), None);
    let literals = tokens
        .iter()
        .map(|token| token.literal.as_str())
        .collect::<Vec<_>>();

    assert_eq!(literals, vec!["var", "x", "=", "5", ";", "x", "/", "2", ""]);
}

#[test]
fn test_tokenize_illegal_characters() {
    let tokens = tokenize("x @ é".to_string(), None);

    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].literal, "@");
    assert_eq!(tokens[2].kind, TokenKind::Illegal);
    assert_eq!(tokens[2].literal, "é");
    assert_eq!(tokens[3].kind, TokenKind::EndOfInput);
}

#[test]
fn test_spans_are_byte_offsets() {
    let tokens = tokenize("var abc = 10;".to_string(), Some("span.cl".to_string()));

    assert_eq!(tokens[1].span.start.0, 4);
    assert_eq!(tokens[1].span.end.0, 7);
    assert_eq!(tokens[3].span.start.0, 10);
    assert_eq!(tokens[3].span.end.0, 12);
    assert_eq!(tokens[3].span.start.1.as_str(), "span.cl");
    assert_eq!(tokens[5].span.start.0, 13);
}

#[test]
fn test_end_of_input_repeats() {
    let mut lexer = Lexer::new("x".to_string(), None);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        assert_eq!(lexer.next_token().kind, TokenKind::EndOfInput);
    }
}

#[test]
fn test_vec_source_ends_with_end_of_input() {
    let mut source = vec![Token::new(TokenKind::Identifier, "a", crate::Span::null())].into_iter();

    assert_eq!(source.next_token().literal, "a");
    assert_eq!(source.next_token().kind, TokenKind::EndOfInput);
    assert_eq!(source.next_token().kind, TokenKind::EndOfInput);
}

#[test]
fn test_token_kind_display() {
    assert_eq!(TokenKind::RBrace.to_string(), "}");
    assert_eq!(TokenKind::NotEqual.to_string(), "!=");
    assert_eq!(TokenKind::EndOfInput.to_string(), "EOF");
    assert_eq!(TokenKind::Identifier.to_string(), "IDENT");
}
