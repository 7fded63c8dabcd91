use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{Position, Span};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("var", TokenKind::KeywordVar);
        map.insert("return", TokenKind::KeywordReturn);
        map.insert("if", TokenKind::KeywordIf);
        map.insert("else", TokenKind::KeywordElse);
        map.insert("fun", TokenKind::KeywordFun);
        map.insert("true", TokenKind::BooleanTrue);
        map.insert("false", TokenKind::BooleanFalse);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EndOfInput,
    Illegal,

    Identifier,
    IntegerLiteral,
    BooleanTrue,
    BooleanFalse,

    Assign,   // =
    Plus,     // +
    Minus,    // -
    Star,     // *
    Slash,    // /
    Percent,  // %
    Equal,    // ==
    NotEqual, // !=
    LessThan,
    GreaterThan,
    Bang, // !

    Comma,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,

    // Reserved
    KeywordVar,
    KeywordReturn,
    KeywordIf,
    KeywordElse,
    KeywordFun,
}

impl TokenKind {
    /// Number of kinds; sizes the parser's handler tables.
    pub const COUNT: usize = TokenKind::KeywordFun as usize + 1;

    pub fn index(self) -> usize {
        self as usize
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::EndOfInput => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Identifier => "IDENT",
            TokenKind::IntegerLiteral => "INT",
            TokenKind::BooleanTrue => "TRUE",
            TokenKind::BooleanFalse => "FALSE",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Equal => "==",
            TokenKind::NotEqual => "!=",
            TokenKind::LessThan => "<",
            TokenKind::GreaterThan => ">",
            TokenKind::Bang => "!",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::KeywordVar => "VAR",
            TokenKind::KeywordReturn => "RETURN",
            TokenKind::KeywordIf => "IF",
            TokenKind::KeywordElse => "ELSE",
            TokenKind::KeywordFun => "FUN",
        };

        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            literal: literal.into(),
            span,
        }
    }

    /// An end-of-input token sitting at `position`.
    pub fn eof(position: Position) -> Self {
        Token {
            kind: TokenKind::EndOfInput,
            literal: String::new(),
            span: Span {
                start: position.clone(),
                end: position,
            },
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Identifier | TokenKind::IntegerLiteral | TokenKind::Illegal => {
                write!(f, "{} ({})", self.kind, self.literal)
            }
            _ => write!(f, "{}", self.kind),
        }
    }
}

/// Pull-based supply of tokens for the parser.
///
/// Implementations never fail and never block: lexical problems arrive as
/// `Illegal` tokens, and once the input is exhausted every call returns an
/// `EndOfInput` token.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

impl TokenSource for std::vec::IntoIter<Token> {
    fn next_token(&mut self) -> Token {
        self.next().unwrap_or_else(|| Token::eof(Position::null()))
    }
}
