use crate::{
    ast::{
        ast::Expression,
        expressions::{BooleanLiteral, CallExpression, Identifier, InfixExpression, IntegerLiteral, PrefixExpression},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::Precedence, parser::Parser};

/// Parses an expression whose operators all bind tighter than `precedence`.
///
/// On entry the current token starts the expression; on return it is the
/// expression's last token. Nesting is capped at
/// [`MAX_NESTING_DEPTH`](super::parser::MAX_NESTING_DEPTH) levels.
pub fn parse_expr(parser: &mut Parser, precedence: Precedence) -> Result<Expression, Error> {
    parser.enter_nesting()?;
    let result = parse_nested_expr(parser, precedence);
    parser.exit_nesting();

    result
}

fn parse_nested_expr(parser: &mut Parser, precedence: Precedence) -> Result<Expression, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => return Err(no_prefix_error(parser)),
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than the caller's, fold it into lhs
    while !parser.peek_is(TokenKind::Semicolon) && precedence < parser.peek_precedence() {
        let led = match parser.get_led_lookup().get(&parser.peek_token().kind) {
            Some(led) => *led,
            None => return Ok(left),
        };

        parser.advance();
        left = led(parser, left)?;
    }

    Ok(left)
}

fn no_prefix_error(parser: &Parser) -> Error {
    Error::new(
        ErrorImpl::NoPrefixParseFn {
            kind: parser.current_token_kind(),
        },
        parser.get_position(),
    )
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    match token.kind {
        TokenKind::Int => match token.value.parse::<i64>() {
            Ok(value) => Ok(Expression::Integer(IntegerLiteral { token, value })),
            Err(_) => Err(Error::new(
                ErrorImpl::IntegerParseError {
                    literal: token.value.clone(),
                },
                token.span.start.clone(),
            )),
        },
        TokenKind::Identifier => Ok(Expression::Identifier(Identifier {
            value: token.value.clone(),
            token,
        })),
        TokenKind::True | TokenKind::False => Ok(Expression::Boolean(BooleanLiteral {
            value: token.kind == TokenKind::True,
            token,
        })),
        _ => Err(no_prefix_error(parser)),
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, Precedence::Prefix)?;

    Ok(Expression::Prefix(PrefixExpression {
        operator: operator_token.value.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expression) -> Result<Expression, Error> {
    let operator_token = parser.current_token().clone();
    let precedence = parser.current_precedence();
    parser.advance();

    let right = parse_expr(parser, precedence)?;

    Ok(Expression::Infix(InfixExpression {
        operator: operator_token.value.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expression, Error> {
    parser.advance();
    let expr = parse_expr(parser, Precedence::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_call_expr(parser: &mut Parser, function: Expression) -> Result<Expression, Error> {
    let token = parser.current_token().clone();
    let arguments = parse_call_arguments(parser)?;

    Ok(Expression::Call(CallExpression {
        token,
        function: Box::new(function),
        arguments,
    }))
}

fn parse_call_arguments(parser: &mut Parser) -> Result<Vec<Expression>, Error> {
    let mut args = vec![];

    if parser.peek_is(TokenKind::CloseParen) {
        parser.advance();
        return Ok(args);
    }

    parser.advance();
    args.push(parse_expr(parser, Precedence::Lowest)?);

    while parser.peek_is(TokenKind::Comma) {
        parser.advance();
        parser.advance();
        args.push(parse_expr(parser, Precedence::Lowest)?);
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(args)
}
