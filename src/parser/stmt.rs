use crate::{
    ast::{
        ast::{Node, Stmt},
        expressions::IdentifierExpr,
        statements::{BlockStmt, ExpressionStmt, ReturnStmt, VarStmt},
    },
    errors::errors::{Error, ErrorImpl, ParseResult},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    if let Some(handler) = parser.get_stmt_handler(parser.current_token_kind()) {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_expression_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Lowest)?;

    // Semicolons terminate statements but are optional
    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(Stmt::Expression(ExpressionStmt {
        span: expression.get_span().clone(),
        token,
        expression,
    }))
}

pub fn parse_var_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    // var <name> = <value>;
    let token = parser.current_token().clone();

    let name_token = parser.expect_peek(TokenKind::Identifier)?;
    let name = IdentifierExpr {
        value: name_token.literal.clone(),
        span: name_token.span.clone(),
        token: name_token,
    };

    parser.expect_peek(TokenKind::Assign)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;

    parser.expect_peek(TokenKind::Semicolon)?;

    Ok(Stmt::Var(VarStmt {
        span: parser.span_from(&token.span.start),
        token,
        name,
        value,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> ParseResult<Stmt> {
    let token = parser.current_token().clone();

    let value = if parser.peek_is(TokenKind::Semicolon)
        || parser.peek_is(TokenKind::RBrace)
        || parser.peek_is(TokenKind::EndOfInput)
    {
        None
    } else {
        parser.advance();
        Some(parse_expr(parser, BindingPower::Lowest)?)
    };

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(Stmt::Return(ReturnStmt {
        span: parser.span_from(&token.span.start),
        token,
        value,
    }))
}

/// Parses `{ ... }` with the current token on the opening brace, leaving the
/// closing brace current.
///
/// Statements that fail are reported and skipped like at the top level.
/// Reaching end of input before `}` fails the whole block. A block counts as
/// one level of nesting.
pub fn parse_block_stmt(parser: &mut Parser) -> ParseResult<BlockStmt> {
    let depth = parser.nesting_depth();
    parser.enter_nesting()?;
    let result = parse_block_body(parser);
    parser.restore_nesting(depth);

    result
}

fn parse_block_body(parser: &mut Parser) -> ParseResult<BlockStmt> {
    let token = parser.advance();
    let mut statements = vec![];

    while !parser.current_is(TokenKind::RBrace) && !parser.current_is(TokenKind::EndOfInput) {
        parser.parse_stmt_into(&mut statements);
        parser.advance();
    }

    if !parser.current_is(TokenKind::RBrace) {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::RBrace,
                found: parser.current_token_kind(),
            },
            parser.get_position(),
        ));
    }

    Ok(BlockStmt {
        span: parser.span_from(&token.span.start),
        token,
        statements,
    })
}
