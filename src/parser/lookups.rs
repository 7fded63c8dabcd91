use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::ParseResult,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Binding strength of an operator, lowest first.
///
/// `+`/`-` both bind at `Additive` and `*`, `/`, `%` at `Multiplicative`;
/// `AdditiveMinus`, `Division` and `Modulo` name the sub-tiers of those two
/// levels and are kept so the full ordering can be referred to.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equality,
    Relational,
    Additive,
    AdditiveMinus,
    Multiplicative,
    Division,
    Modulo,
    Prefix,
    Call,
}

pub type StmtHandler = fn(&mut Parser) -> ParseResult<Stmt>;
pub type NUDHandler = fn(&mut Parser) -> ParseResult<Expr>;
pub type LEDHandler = fn(&mut Parser, Expr) -> ParseResult<Expr>;

// Lookup tables are indexed by `TokenKind::index`, one slot per kind
pub type StmtLookup = [Option<StmtHandler>; TokenKind::COUNT];
pub type NUDLookup = [Option<NUDHandler>; TokenKind::COUNT];
pub type LEDLookup = [Option<LEDHandler>; TokenKind::COUNT];
pub type PostfixLookup = [Option<LEDHandler>; TokenKind::COUNT];
pub type BPLookup = [BindingPower; TokenKind::COUNT];

pub fn create_token_lookups(parser: &mut Parser) {
    // Equality and relational
    parser.led(TokenKind::Equal, BindingPower::Equality, parse_infix_expr);
    parser.led(TokenKind::NotEqual, BindingPower::Equality, parse_infix_expr);
    parser.led(TokenKind::LessThan, BindingPower::Relational, parse_infix_expr);
    parser.led(TokenKind::GreaterThan, BindingPower::Relational, parse_infix_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_infix_expr);
    parser.led(TokenKind::Minus, BindingPower::Additive, parse_infix_expr);
    parser.led(TokenKind::Star, BindingPower::Multiplicative, parse_infix_expr);
    parser.led(TokenKind::Slash, BindingPower::Multiplicative, parse_infix_expr);
    parser.led(TokenKind::Percent, BindingPower::Multiplicative, parse_infix_expr);

    parser.led(TokenKind::LParen, BindingPower::Call, parse_call_expr);

    // Literals and symbols
    parser.nud(TokenKind::Identifier, parse_identifier_expr);
    parser.nud(TokenKind::IntegerLiteral, parse_integer_expr);
    parser.nud(TokenKind::BooleanTrue, parse_boolean_expr);
    parser.nud(TokenKind::BooleanFalse, parse_boolean_expr);
    parser.nud(TokenKind::Minus, parse_prefix_expr);
    parser.nud(TokenKind::Bang, parse_prefix_expr);
    parser.nud(TokenKind::LParen, parse_grouping_expr);
    parser.nud(TokenKind::KeywordIf, parse_if_expr);
    parser.nud(TokenKind::KeywordFun, parse_function_expr);

    // Statements
    parser.stmt(TokenKind::KeywordVar, parse_var_stmt);
    parser.stmt(TokenKind::KeywordReturn, parse_return_stmt);
}

/// Binding power of `kind` in `lookup`; unregistered kinds bind at `Lowest`.
pub fn binding_power_of(lookup: &BPLookup, kind: TokenKind) -> BindingPower {
    lookup[kind.index()]
}
