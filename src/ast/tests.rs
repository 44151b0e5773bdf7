//! Unit tests for AST nodes.

use std::rc::Rc;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

use super::{
    ast::{Expression, Node, Program, Statement},
    expressions::{Identifier, InfixExpression, IntegerLiteral},
    statements::{LetStatement, ReturnStatement},
};

fn token(kind: TokenKind, value: &str) -> Token {
    let file = Rc::new(String::from("test.dojo"));
    MK_TOKEN!(
        kind,
        String::from(value),
        Span {
            start: Position(0, Rc::clone(&file)),
            end: Position(value.len() as u32, file),
        }
    )
}

fn identifier(name: &str) -> Identifier {
    Identifier {
        token: token(TokenKind::Identifier, name),
        value: String::from(name),
    }
}

#[test]
fn test_program_display() {
    let program = Program {
        statements: vec![Statement::Let(LetStatement {
            token: token(TokenKind::Let, "let"),
            name: identifier("myVar"),
            value: Expression::Identifier(identifier("anotherVar")),
        })],
    };

    assert_eq!(program.to_string(), "let myVar = anotherVar;");
    assert_eq!(program.token_literal(), "let");
}

#[test]
fn test_empty_program_token_literal() {
    let program = Program::default();

    assert!(program.is_empty());
    assert_eq!(program.token_literal(), "");
    assert_eq!(program.to_string(), "");
}

#[test]
fn test_nested_expression_display() {
    let sum = Expression::Infix(InfixExpression {
        token: token(TokenKind::Plus, "+"),
        left: Box::new(Expression::Identifier(identifier("a"))),
        operator: String::from("+"),
        right: Box::new(Expression::Integer(IntegerLiteral {
            token: token(TokenKind::Int, "10"),
            value: 10,
        })),
    });

    let stmt = Statement::Return(ReturnStatement {
        token: token(TokenKind::Return, "return"),
        return_value: sum,
    });

    assert_eq!(stmt.to_string(), "return (a + 10);");
    assert_eq!(stmt.token_literal(), "return");

    match &stmt {
        Statement::Return(ret) => {
            assert!(matches!(ret.return_value, Expression::Infix(_)));
            assert_eq!(ret.return_value.token_literal(), "+");
        }
        other => panic!("expected return statement, got {:?}", other),
    }
}
