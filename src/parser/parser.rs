//! Parser implementation for building the Abstract Syntax Tree.
//!
//! The parser pulls tokens from a [`Lexer`] two at a time (current and
//! lookahead) and keeps lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Precedences of infix operators
//!
//! Diagnostics are accumulated instead of aborting the parse: a statement
//! that fails is dropped, its error recorded, and parsing resumes at the
//! next token. A broken `let` or `return` is skipped up to its semicolon or
//! the next `let`/`return`, whichever comes first.

use std::{collections::HashMap, mem};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, LEDHandler, LEDLookup, NUDHandler, NUDLookup, Precedence,
        PrecedenceLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// Deepest expression nesting accepted before parsing gives up on a statement.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens
    lexer: Lexer,
    /// Token under examination
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Diagnostics recorded so far, in source order
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for infix operator precedences
    precedence_lookup: PrecedenceLookup,
    /// Number of `parse_expr` calls currently on the stack
    depth: usize,
}

impl Parser {
    /// Creates a parser over `lexer` with every grammar rule registered.
    ///
    /// Reads two tokens so that both the current and lookahead tokens are set.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current,
            peek,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            precedence_lookup: HashMap::new(),
            depth: 0,
        };
        create_token_lookups(&mut parser);

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

    /// Returns the lookahead token.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    /// Shifts the lookahead into the current slot and pulls a new lookahead.
    pub fn advance(&mut self) {
        self.current = mem::replace(&mut self.peek, self.lexer.next_token());
    }

    /// Advances only if the lookahead has the expected kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(()) after advancing, otherwise an `UnexpectedToken` error
    /// pointing at the lookahead. The cursor does not move on failure.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<(), Error> {
        if self.peek_is(expected_kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.peek_error(expected_kind))
        }
    }

    fn peek_error(&self, expected_kind: TokenKind) -> Error {
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: expected_kind,
                actual: self.peek.kind,
            },
            self.peek.span.start.clone(),
        )
    }

    pub fn current_precedence(&self) -> Precedence {
        self.precedence_of(self.current.kind)
    }

    pub fn peek_precedence(&self) -> Precedence {
        self.precedence_of(self.peek.kind)
    }

    fn precedence_of(&self, kind: TokenKind) -> Precedence {
        self.precedence_lookup
            .get(&kind)
            .copied()
            .unwrap_or(Precedence::Lowest)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a left denotation (infix) handler and its precedence.
    pub fn led(&mut self, kind: TokenKind, precedence: Precedence, led_fn: LEDHandler) {
        self.precedence_lookup.insert(kind, precedence);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the start of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Enters one level of expression nesting.
    ///
    /// # Returns
    ///
    /// Returns a `NestingTooDeep` error at the current token once
    /// [`MAX_NESTING_DEPTH`] levels are already open.
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.depth += 1;
        Ok(())
    }

    pub fn exit_nesting(&mut self) {
        self.depth -= 1;
    }

    /// Diagnostics recorded while parsing.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    /// Parses statements until `EOF`.
    ///
    /// Never fails: statements that could not be parsed are left out of the
    /// program and their diagnostics are available through [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_is(TokenKind::EOF) {
            let start_kind = self.current_token_kind();

            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => {
                    let skip_statement = self.stmt_lookup.contains_key(&start_kind)
                        || matches!(error.get_kind(), ErrorImpl::NestingTooDeep { .. });

                    self.errors.push(error);

                    if skip_statement {
                        self.synchronize();
                    } else if self.peek_is(TokenKind::Semicolon) {
                        self.advance();
                    }
                }
            }

            self.advance();
        }

        program
    }

    /// Skips the rest of a broken statement.
    ///
    /// Stops on `;` or `EOF`, or just before a token that opens a new
    /// statement, so the loop's own advance lands on it.
    fn synchronize(&mut self) {
        while !self.current_is(TokenKind::Semicolon)
            && !self.current_is(TokenKind::EOF)
            && !self.stmt_lookup.contains_key(&self.peek.kind)
        {
            self.advance();
        }
    }
}

/// Parses a source string into a program and its diagnostics.
///
/// # Arguments
///
/// * `source` - The source text
/// * `file` - Name used in diagnostic positions; defaults to `shell`
pub fn parse(source: String, file: Option<String>) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source, file));
    let program = parser.parse_program();

    (program, parser.into_errors())
}
