//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parse entry points.
//! The parser pulls tokens on demand and keeps two of them in view: the
//! current token and the one after it (peek).
//!
//! It maintains lookup tables, indexed by token kind, for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Postfix handlers
//! - Binding powers for operator precedence
//!
//! Errors never stop a parse. They are collected in a `Diagnostics` sink
//! and the statement they occurred in is dropped.

use crate::{
    ast::ast::{Program, Stmt},
    errors::{
        diagnostics::Diagnostics,
        errors::{Error, ErrorImpl, ParseResult},
    },
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind, TokenSource},
    },
    Position, Span,
};

use super::{
    lookups::{
        binding_power_of, create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup,
        NUDHandler, NUDLookup, PostfixLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// Default ceiling on expression nesting.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Tunables for a parse pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Deepest expression nesting accepted before reporting `NestingTooDeep`.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParserConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// The main parser structure that maintains parsing state.
///
/// One instance serves one token stream; it is not meant to be shared.
pub struct Parser {
    /// Where tokens come from
    lexer: Box<dyn TokenSource>,
    /// The token being looked at
    current: Token,
    /// The token after `current`
    peek: Token,
    /// Errors reported so far, in order
    diagnostics: Diagnostics,
    config: ParserConfig,
    /// Current expression nesting depth
    depth: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for postfix expression handlers
    postfix_lookup: PostfixLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser reading from `lexer`, with the language's
    /// handlers registered and both lookahead slots filled.
    pub fn new(lexer: impl TokenSource + 'static, config: ParserConfig) -> Self {
        let mut parser = Parser {
            lexer: Box::new(lexer),
            current: Token::eof(Position::null()),
            peek: Token::eof(Position::null()),
            diagnostics: Diagnostics::new(),
            config,
            depth: 0,
            stmt_lookup: [None; TokenKind::COUNT],
            nud_lookup: [None; TokenKind::COUNT],
            led_lookup: [None; TokenKind::COUNT],
            postfix_lookup: [None; TokenKind::COUNT],
            binding_power_lookup: [BindingPower::Lowest; TokenKind::COUNT],
        };

        create_token_lookups(&mut parser);

        parser.advance();
        parser.advance();
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the kind of the peek token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Shifts peek into current, pulls a new peek, and returns the token
    /// that was current before the call.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        let peek = std::mem::replace(&mut self.peek, next);
        std::mem::replace(&mut self.current, peek)
    }

    /// Advances if the peek token is of `expected_kind`, returning the token
    /// that became current.
    ///
    /// On mismatch nothing is consumed and an `UnexpectedToken` error is
    /// returned; callers abandon the construct they were building.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> ParseResult<Token> {
        if self.peek_is(expected_kind) {
            self.advance();
            Ok(self.current.clone())
        } else {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: self.peek.kind,
                },
                self.peek.span.start.clone(),
            ))
        }
    }

    /// Binding power of the peek token.
    pub fn peek_precedence(&self) -> BindingPower {
        binding_power_of(&self.binding_power_lookup, self.peek.kind)
    }

    /// Binding power of the current token.
    pub fn current_precedence(&self) -> BindingPower {
        binding_power_of(&self.binding_power_lookup, self.current.kind)
    }

    /// Returns the statement handler for `kind`, if any.
    pub fn get_stmt_handler(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup[kind.index()]
    }

    /// Returns the NUD (null denotation) handler for `kind`, if any.
    pub fn get_nud_handler(&self, kind: TokenKind) -> Option<NUDHandler> {
        self.nud_lookup[kind.index()]
    }

    /// Returns the LED (left denotation) handler for `kind`, if any.
    pub fn get_led_handler(&self, kind: TokenKind) -> Option<LEDHandler> {
        self.led_lookup[kind.index()]
    }

    /// Returns the postfix handler for `kind`, if any.
    pub fn get_postfix_handler(&self, kind: TokenKind) -> Option<LEDHandler> {
        self.postfix_lookup[kind.index()]
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup[kind.index()] = binding_power;
        self.led_lookup[kind.index()] = Some(led_fn);
    }

    /// Registers a postfix handler: it runs with the completed left operand
    /// and consumes no right operand.
    pub fn postfix(&mut self, kind: TokenKind, binding_power: BindingPower, postfix_fn: LEDHandler) {
        self.binding_power_lookup[kind.index()] = binding_power;
        self.postfix_lookup[kind.index()] = Some(postfix_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup[kind.index()] = Some(nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup[kind.index()] = Some(stmt_fn);
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Span from `start` to the end of the current token.
    pub fn span_from(&self, start: &Position) -> Span {
        Span {
            start: start.clone(),
            end: self.current.span.end.clone(),
        }
    }

    /// Current nesting depth, to hand back to [`Parser::restore_nesting`].
    pub fn nesting_depth(&self) -> usize {
        self.depth
    }

    /// Enters one level of nesting, failing once the configured ceiling is
    /// reached.
    ///
    /// Every level the tree can grow by takes one: a nested expression, a
    /// block, and each operator that extends a left operand.
    pub fn enter_nesting(&mut self) -> ParseResult<()> {
        if self.depth >= self.config.max_depth {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: self.config.max_depth,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    /// Releases every level entered since `depth` was read.
    pub fn restore_nesting(&mut self, depth: usize) {
        self.depth = depth;
    }

    /// Parses one statement and appends it to `body`.
    ///
    /// This is the recovery point: a failed statement is reported to the
    /// diagnostics sink and contributes no node.
    pub fn parse_stmt_into(&mut self, body: &mut Vec<Stmt>) {
        match parse_stmt(self) {
            Ok(stmt) => {
                tracing::trace!(statement = %stmt, "parsed statement");
                body.push(stmt);
            }
            Err(error) => {
                self.diagnostics.push(error);
                // The abandoned statement's terminator goes with it
                if self.peek_is(TokenKind::Semicolon) {
                    self.advance();
                }
            }
        }
    }

    /// Parses statements until end of input.
    ///
    /// Never fails: problems end up in [`Parser::diagnostics`].
    pub fn parse_program(&mut self) -> Program {
        let start = self.current.span.start.clone();
        let mut statements = vec![];

        while !self.current_is(TokenKind::EndOfInput) {
            self.parse_stmt_into(&mut statements);
            self.advance();
        }

        tracing::debug!(
            statements = statements.len(),
            diagnostics = self.diagnostics.len(),
            "parse finished"
        );

        Program {
            statements,
            span: self.span_from(&start),
        }
    }

    /// Errors reported so far.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Diagnostic messages reported so far, in order.
    pub fn errors(&self) -> Vec<String> {
        self.diagnostics.messages()
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }
}

/// Parses a token stream into a Program.
///
/// This is the main entry point. The diagnostics list is empty on a clean
/// parse; a program is returned either way and it is up to the caller to
/// decide whether any diagnostic is fatal.
pub fn parse(tokens: impl TokenSource + 'static) -> (Program, Vec<String>) {
    let mut parser = Parser::new(tokens, ParserConfig::default());
    let program = parser.parse_program();

    (program, parser.errors())
}

/// Lexes and parses `source`, keeping the structured diagnostics.
///
/// # Arguments
///
/// * `source` - The program text
/// * `file` - Name used in positions, `shell` when absent
/// * `config` - Parser tunables
pub fn parse_source(
    source: String,
    file: Option<String>,
    config: ParserConfig,
) -> (Program, Diagnostics) {
    let lexer = Lexer::new(source, file);
    let mut parser = Parser::new(lexer, config);
    let program = parser.parse_program();

    (program, parser.into_diagnostics())
}
