//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms the lexer's token stream
//! into a `Program`. It uses recursive descent for statements and a Pratt
//! parser for expressions with operator precedence, and handles:
//!
//! - Statement parsing (`let`, `return`, expression statements)
//! - Expression parsing (literals, prefix and infix operators, calls)
//! - Error recovery: diagnostics are collected and parsing continues
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing, with a precedence table deciding how far an
//! infix operator binds.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
