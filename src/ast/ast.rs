use std::{fmt::{self, Display}, slice::Iter};

use crate::Span;

use super::{
    expressions::{BooleanLiteral, CallExpression, Identifier, InfixExpression, IntegerLiteral, PrefixExpression},
    statements::{ExpressionStatement, LetStatement, ReturnStatement},
};

/// Node Trait
///
/// Implemented by every node in the tree. Each node keeps the token that
/// introduced it, so both methods simply read from that token.
pub trait Node: Display {
    /// Returns the literal text of the token that introduced the node.
    fn token_literal(&self) -> &str;
    /// Returns the span of the introducing token.
    fn get_span(&self) -> &Span;
}

/// Statement
///
/// A closed set of statement kinds; match on it to walk the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
}

impl Statement {
    fn as_node(&self) -> &dyn Node {
        match self {
            Statement::Let(stmt) => stmt,
            Statement::Return(stmt) => stmt,
            Statement::Expression(stmt) => stmt,
        }
    }
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        self.as_node().token_literal()
    }
    fn get_span(&self) -> &Span {
        self.as_node().get_span()
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_node())
    }
}

/// Expression
///
/// Operator and call variants box their operands; the tree owns every child.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Boolean(BooleanLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    Call(CallExpression),
}

impl Expression {
    fn as_node(&self) -> &dyn Node {
        match self {
            Expression::Identifier(expr) => expr,
            Expression::Integer(expr) => expr,
            Expression::Boolean(expr) => expr,
            Expression::Prefix(expr) => expr,
            Expression::Infix(expr) => expr,
            Expression::Call(expr) => expr,
        }
    }
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        self.as_node().token_literal()
    }
    fn get_span(&self) -> &Span {
        self.as_node().get_span()
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_node())
    }
}

/// Program
///
/// Root of every tree the parser produces.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, Statement> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Literal of the first statement, or empty for an empty program.
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map_or("", |stmt| stmt.token_literal())
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
