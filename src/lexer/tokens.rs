use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("return", TokenKind::Return);
        map.insert("fn", TokenKind::Fn);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Illegal,
    Int,
    Identifier,

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    Greater,

    Semicolon,
    Comma,

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    Let,
    Fn,
    Return,
    If,
    Else,
    True,
    False,
}

impl TokenKind {
    /// Canonical upper-case name, used in diagnostics and REPL output.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Int => "INT",
            TokenKind::Identifier => "IDENT",
            TokenKind::OpenCurly => "LBRACE",
            TokenKind::CloseCurly => "RBRACE",
            TokenKind::OpenParen => "LPAREN",
            TokenKind::CloseParen => "RPAREN",
            TokenKind::Assignment => "ASSIGN",
            TokenKind::Equals => "EQ",
            TokenKind::Not => "BANG",
            TokenKind::NotEquals => "NOT_EQ",
            TokenKind::Less => "LT",
            TokenKind::Greater => "GT",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Plus => "PLUS",
            TokenKind::Dash => "MINUS",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "ASTERISK",
            TokenKind::Let => "LET",
            TokenKind::Fn => "FUNCTION",
            TokenKind::Return => "RETURN",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Classifies a maximal identifier run as a reserved word or a plain identifier.
pub fn lookup_identifier(value: &str) -> TokenKind {
    RESERVED_LOOKUP
        .get(value)
        .copied()
        .unwrap_or(TokenKind::Identifier)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{ kind: {}, value: {:?} }}", self.kind, self.value)
    }
}

impl Token {
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}
