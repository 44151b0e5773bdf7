use crate::{
    ast::{
        ast::Statement,
        expressions::Identifier,
        statements::{ExpressionStatement, LetStatement, ReturnStatement},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::Precedence},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let stmt_fn = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();

    match stmt_fn {
        Some(stmt_fn) => stmt_fn(parser),
        None => parse_expression_stmt(parser),
    }
}

/// Consumes an optional trailing semicolon.
fn skip_semicolon(parser: &mut Parser) {
    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::Identifier)?;

    let name_token = parser.current_token().clone();
    let name = Identifier {
        value: name_token.value.clone(),
        token: name_token,
    };

    parser.expect_peek(TokenKind::Assignment)?;
    parser.advance();

    let value = parse_expr(parser, Precedence::Lowest)?;
    skip_semicolon(parser);

    Ok(Statement::Let(LetStatement { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();
    parser.advance();

    let return_value = parse_expr(parser, Precedence::Lowest)?;
    skip_semicolon(parser);

    Ok(Statement::Return(ReturnStatement { token, return_value }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();

    let expression = parse_expr(parser, Precedence::Lowest)?;
    skip_semicolon(parser);

    Ok(Statement::Expression(ExpressionStatement { token, expression }))
}
