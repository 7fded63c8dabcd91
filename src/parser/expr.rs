use crate::{
    ast::{
        ast::{Expr, Node},
        expressions::{
            BooleanExpr, CallExpr, FunctionExpr, IdentifierExpr, IfExpr, InfixExpr, IntegerExpr,
            PrefixExpr,
        },
    },
    errors::errors::{Error, ErrorImpl, ParseResult},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block_stmt};

/// Parses an expression whose operators all bind tighter than `bp`.
///
/// On entry the current token starts the expression; on exit it is the
/// expression's last token.
///
/// Levels taken by operators extending the left operand are released on
/// exit along with the expression's own.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> ParseResult<Expr> {
    let depth = parser.nesting_depth();
    parser.enter_nesting()?;
    let result = parse_expr_at(parser, bp);
    parser.restore_nesting(depth);

    result
}

fn parse_expr_at(parser: &mut Parser, bp: BindingPower) -> ParseResult<Expr> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_handler(token_kind) else {
        return Err(Error::new(
            ErrorImpl::MissingPrefixHandler { kind: token_kind },
            parser.get_position(),
        ));
    };

    let mut left = nud(parser)?;

    // Keep extending the lhs while the next operator binds tighter than bp.
    // An operator of equal strength is left for the caller, which is what
    // makes chains associate to the left.
    while !parser.peek_is(TokenKind::Semicolon) && bp < parser.peek_precedence() {
        let token_kind = parser.peek_token_kind();

        if let Some(postfix) = parser.get_postfix_handler(token_kind) {
            // Each extension deepens the left spine by one node
            parser.enter_nesting()?;
            parser.advance();
            left = postfix(parser, left)?;
            continue;
        }

        let Some(led) = parser.get_led_handler(token_kind) else {
            return Ok(left);
        };

        parser.enter_nesting()?;
        parser.advance();
        left = led(parser, left)?;
    }

    Ok(left)
}

pub fn parse_identifier_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let token = parser.current_token().clone();

    Ok(Expr::Identifier(IdentifierExpr {
        value: token.literal.clone(),
        span: token.span.clone(),
        token,
    }))
}

pub fn parse_integer_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let token = parser.current_token().clone();

    let value = token.literal.parse::<i64>().map_err(|_| {
        Error::new(
            ErrorImpl::IntegerParseError {
                literal: token.literal.clone(),
            },
            parser.get_position(),
        )
    })?;

    Ok(Expr::Integer(IntegerExpr {
        value,
        span: token.span.clone(),
        token,
    }))
}

pub fn parse_boolean_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let token = parser.current_token().clone();

    Ok(Expr::Boolean(BooleanExpr {
        value: token.kind == TokenKind::BooleanTrue,
        span: token.span.clone(),
        token,
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> ParseResult<Expr> {
    let operator_token = parser.advance();
    let rhs = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expr::Prefix(PrefixExpr {
        span: Span {
            start: operator_token.span.start.clone(),
            end: rhs.get_span().end.clone(),
        },
        operator: operator_token.literal.clone(),
        token: operator_token,
        right: Box::new(rhs),
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expr) -> ParseResult<Expr> {
    // The rhs is parsed at the operator's own strength, not one above it.
    let bp = parser.current_precedence();
    let operator_token = parser.advance();

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Infix(InfixExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        operator: operator_token.literal.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> ParseResult<Expr> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::RParen)?;

    Ok(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> ParseResult<Expr> {
    // if (<condition>) { <consequence> } [else { <alternative> }]
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::LParen)?;
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::RParen)?;

    parser.expect_peek(TokenKind::LBrace)?;
    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.peek_is(TokenKind::KeywordElse) {
        parser.advance();
        parser.expect_peek(TokenKind::LBrace)?;
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Ok(Expr::If(IfExpr {
        span: parser.span_from(&token.span.start),
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

pub fn parse_function_expr(parser: &mut Parser) -> ParseResult<Expr> {
    // fun(<params>) { <body> }
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::LParen)?;
    let parameters = parse_function_parameters(parser)?;

    parser.expect_peek(TokenKind::LBrace)?;
    let body = parse_block_stmt(parser)?;

    Ok(Expr::Function(FunctionExpr {
        span: parser.span_from(&token.span.start),
        token,
        parameters,
        body,
    }))
}

/// Parses `a, b, c)` with the current token on the opening parenthesis.
pub fn parse_function_parameters(parser: &mut Parser) -> ParseResult<Vec<IdentifierExpr>> {
    let mut parameters = vec![];

    if parser.peek_is(TokenKind::RParen) {
        parser.advance();
        return Ok(parameters);
    }

    loop {
        let token = parser.expect_peek(TokenKind::Identifier)?;
        parameters.push(IdentifierExpr {
            value: token.literal.clone(),
            span: token.span.clone(),
            token,
        });

        if !parser.peek_is(TokenKind::Comma) {
            break;
        }
        parser.advance();
    }

    parser.expect_peek(TokenKind::RParen)?;

    Ok(parameters)
}

pub fn parse_call_expr(parser: &mut Parser, callee: Expr) -> ParseResult<Expr> {
    let token = parser.current_token().clone();
    let arguments = parse_call_arguments(parser)?;

    Ok(Expr::Call(CallExpr {
        span: parser.span_from(&callee.get_span().start),
        token,
        callee: Box::new(callee),
        arguments,
    }))
}

/// Parses `x, f(y), 1 + 2)` with the current token on the opening parenthesis.
pub fn parse_call_arguments(parser: &mut Parser) -> ParseResult<Vec<Expr>> {
    let mut arguments = vec![];

    if parser.peek_is(TokenKind::RParen) {
        parser.advance();
        return Ok(arguments);
    }

    parser.advance();
    arguments.push(parse_expr(parser, BindingPower::Lowest)?);

    while parser.peek_is(TokenKind::Comma) {
        parser.advance();
        parser.advance();
        arguments.push(parse_expr(parser, BindingPower::Lowest)?);
    }

    parser.expect_peek(TokenKind::RParen)?;

    Ok(arguments)
}
