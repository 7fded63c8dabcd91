//! Unit tests for AST rendering.

use crate::{
    lexer::tokens::{Token, TokenKind},
    Span,
};

use super::{
    ast::{Expr, Node, Program, Stmt},
    expressions::{
        BooleanExpr, CallExpr, FunctionExpr, IdentifierExpr, IfExpr, InfixExpr, IntegerExpr,
        PrefixExpr,
    },
    statements::{BlockStmt, ExpressionStmt, ReturnStmt, VarStmt},
};

fn token(kind: TokenKind, literal: &str) -> Token {
    Token::new(kind, literal, Span::null())
}

fn ident(name: &str) -> IdentifierExpr {
    IdentifierExpr {
        token: token(TokenKind::Identifier, name),
        value: name.to_string(),
        span: Span::null(),
    }
}

fn int(value: i64) -> Expr {
    Expr::Integer(IntegerExpr {
        token: token(TokenKind::IntegerLiteral, &value.to_string()),
        value,
        span: Span::null(),
    })
}

fn infix(left: Expr, kind: TokenKind, operator: &str, right: Expr) -> Expr {
    Expr::Infix(InfixExpr {
        token: token(kind, operator),
        left: Box::new(left),
        operator: operator.to_string(),
        right: Box::new(right),
        span: Span::null(),
    })
}

fn expression_stmt(expression: Expr) -> Stmt {
    Stmt::Expression(ExpressionStmt {
        token: token(TokenKind::Identifier, expression.token_literal()),
        expression,
        span: Span::null(),
    })
}

fn block(statements: Vec<Stmt>) -> BlockStmt {
    BlockStmt {
        token: token(TokenKind::LBrace, "{"),
        statements,
        span: Span::null(),
    }
}

#[test]
fn test_var_statement_rendering() {
    let program = Program {
        statements: vec![Stmt::Var(VarStmt {
            token: token(TokenKind::KeywordVar, "var"),
            name: ident("myVar"),
            value: Expr::Identifier(ident("anotherVar")),
            span: Span::null(),
        })],
        span: Span::null(),
    };

    assert_eq!(program.to_string(), "var myVar = anotherVar;");
    assert_eq!(program.token_literal(), "var");
    assert_eq!(program.render(), program.to_string());
}

#[test]
fn test_return_statement_rendering() {
    let with_value = ReturnStmt {
        token: token(TokenKind::KeywordReturn, "return"),
        value: Some(infix(int(1), TokenKind::Plus, "+", int(2))),
        span: Span::null(),
    };
    let bare = ReturnStmt {
        value: None,
        ..with_value.clone()
    };

    assert_eq!(with_value.to_string(), "return (1 + 2);");
    assert_eq!(bare.to_string(), "return;");
}

#[test]
fn test_prefix_and_boolean_rendering() {
    let expr = Expr::Prefix(PrefixExpr {
        token: token(TokenKind::Bang, "!"),
        operator: "!".to_string(),
        right: Box::new(Expr::Boolean(BooleanExpr {
            token: token(TokenKind::BooleanTrue, "true"),
            value: true,
            span: Span::null(),
        })),
        span: Span::null(),
    });

    assert_eq!(expr.to_string(), "(!true)");
    assert_eq!(expr.token_literal(), "!");
}

#[test]
fn test_nested_infix_rendering() {
    let expr = infix(
        infix(int(1), TokenKind::Plus, "+", int(2)),
        TokenKind::Star,
        "*",
        Expr::Identifier(ident("x")),
    );

    assert_eq!(expr.to_string(), "((1 + 2) * x)");
}

#[test]
fn test_if_else_rendering() {
    let expr = Expr::If(IfExpr {
        token: token(TokenKind::KeywordIf, "if"),
        condition: Box::new(infix(
            Expr::Identifier(ident("x")),
            TokenKind::LessThan,
            "<",
            Expr::Identifier(ident("y")),
        )),
        consequence: block(vec![expression_stmt(Expr::Identifier(ident("x")))]),
        alternative: Some(block(vec![expression_stmt(Expr::Identifier(ident("y")))])),
        span: Span::null(),
    });

    assert_eq!(expr.to_string(), "if(x < y) xelse y");
}

#[test]
fn test_function_and_call_rendering() {
    let function = Expr::Function(FunctionExpr {
        token: token(TokenKind::KeywordFun, "fun"),
        parameters: vec![ident("a"), ident("b")],
        body: block(vec![expression_stmt(infix(
            Expr::Identifier(ident("a")),
            TokenKind::Plus,
            "+",
            Expr::Identifier(ident("b")),
        ))]),
        span: Span::null(),
    });
    assert_eq!(function.to_string(), "fun(a, b) (a + b)");

    let call = Expr::Call(CallExpr {
        token: token(TokenKind::LParen, "("),
        callee: Box::new(Expr::Identifier(ident("add"))),
        arguments: vec![int(1), infix(int(2), TokenKind::Star, "*", int(3))],
        span: Span::null(),
    });
    assert_eq!(call.to_string(), "add(1, (2 * 3))");

    let no_arguments = Expr::Call(CallExpr {
        token: token(TokenKind::LParen, "("),
        callee: Box::new(function),
        arguments: vec![],
        span: Span::null(),
    });
    assert_eq!(no_arguments.to_string(), "fun(a, b) (a + b)()");
}

#[test]
fn test_program_concatenates_statements() {
    let program = Program {
        statements: vec![
            expression_stmt(int(1)),
            expression_stmt(Expr::Identifier(ident("x"))),
        ],
        span: Span::null(),
    };

    assert_eq!(program.len(), 2);
    assert_eq!(program.to_string(), "1x");
    assert_eq!(program.token_literal(), "1");
}
