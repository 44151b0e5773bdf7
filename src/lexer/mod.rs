//! Lexical analysis module.
//!
//! This module contains the lexer that converts Dojo source code into a
//! stream of tokens for parsing. It handles:
//!
//! - Pull-based tokenization with one character of lookahead
//! - Recognition of keywords, identifiers, integer literals and operators
//! - Token span tracking for error reporting
//! - Unrecognised characters, which become `ILLEGAL` tokens

pub mod lexer;
pub mod tokens;
