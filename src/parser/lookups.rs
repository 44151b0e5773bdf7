use std::collections::HashMap;

use crate::{
    ast::ast::{Expression, Statement},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// How tightly an operator binds, lowest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Precedence {
    Lowest,
    Equals,      // ==
    LessGreater, // > or <
    Sum,         // +
    Product,     // *
    Prefix,      // -x or !x
    Call,        // my_fn(x)
}

pub type StmtHandler = fn(&mut Parser) -> Result<Statement, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expression, Error>;
pub type LEDHandler = fn(&mut Parser, Expression) -> Result<Expression, Error>;

/// Registers every grammar rule. Adding a rule only touches this function.
pub fn create_token_lookups(parser: &mut Parser) {
    // Equality and relational
    parser.led(TokenKind::Equals, Precedence::Equals, parse_infix_expr);
    parser.led(TokenKind::NotEquals, Precedence::Equals, parse_infix_expr);
    parser.led(TokenKind::Less, Precedence::LessGreater, parse_infix_expr);
    parser.led(TokenKind::Greater, Precedence::LessGreater, parse_infix_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, Precedence::Sum, parse_infix_expr);
    parser.led(TokenKind::Dash, Precedence::Sum, parse_infix_expr);
    parser.led(TokenKind::Star, Precedence::Product, parse_infix_expr);
    parser.led(TokenKind::Slash, Precedence::Product, parse_infix_expr);

    parser.led(TokenKind::OpenParen, Precedence::Call, parse_call_expr);

    // Literals and symbols
    parser.nud(TokenKind::Identifier, parse_primary_expr);
    parser.nud(TokenKind::Int, parse_primary_expr);
    parser.nud(TokenKind::True, parse_primary_expr);
    parser.nud(TokenKind::False, parse_primary_expr);
    parser.nud(TokenKind::Not, parse_prefix_expr);
    parser.nud(TokenKind::Dash, parse_prefix_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);

    // Statements
    parser.stmt(TokenKind::Let, parse_let_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type PrecedenceLookup = HashMap<TokenKind, Precedence>;
