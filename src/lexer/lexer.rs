use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span, MK_SPAN, MK_TOKEN};

use super::tokens::{lookup_identifier, Token, TokenKind};

pub type RegexHandler = fn(&mut Lexer, &Regex) -> Token;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new("^[ \t\n\r]+").unwrap();
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: number_handler },
    ];
}

/// Pull-based scanner over a single source string.
///
/// Each call to [`Lexer::next_token`] produces one token; once the input is
/// exhausted every further call returns `EOF`.
#[derive(Clone, Debug)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    /// One-character lookahead past [`Lexer::at`].
    pub fn peek(&self) -> Option<char> {
        self.remainder().chars().nth(1)
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        if let Some(matched) = WHITESPACE.find(self.remainder()) {
            let len = matched.end();
            self.advance_n(len);
        }
    }

    /// Emits a token for the next `len` bytes and moves past them.
    fn emit(&mut self, kind: TokenKind, len: usize) -> Token {
        let start = self.pos;
        let value = String::from(&self.source[start..start + len]);
        self.advance_n(len);

        MK_TOKEN!(kind, value, MK_SPAN!(&self.file, start, self.pos))
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let current = match self.at() {
            Some(c) => c,
            None => {
                return MK_TOKEN!(TokenKind::EOF, String::new(), MK_SPAN!(&self.file, self.pos, self.pos));
            }
        };

        for pattern in PATTERNS.iter() {
            if pattern.regex.is_match(self.remainder()) {
                return (pattern.handler)(self, &pattern.regex);
            }
        }

        match (current, self.peek()) {
            ('=', Some('=')) => self.emit(TokenKind::Equals, 2),
            ('!', Some('=')) => self.emit(TokenKind::NotEquals, 2),
            ('=', _) => self.emit(TokenKind::Assignment, 1),
            ('!', _) => self.emit(TokenKind::Not, 1),
            ('+', _) => self.emit(TokenKind::Plus, 1),
            ('-', _) => self.emit(TokenKind::Dash, 1),
            ('*', _) => self.emit(TokenKind::Star, 1),
            ('/', _) => self.emit(TokenKind::Slash, 1),
            ('<', _) => self.emit(TokenKind::Less, 1),
            ('>', _) => self.emit(TokenKind::Greater, 1),
            (',', _) => self.emit(TokenKind::Comma, 1),
            (';', _) => self.emit(TokenKind::Semicolon, 1),
            ('(', _) => self.emit(TokenKind::OpenParen, 1),
            (')', _) => self.emit(TokenKind::CloseParen, 1),
            ('{', _) => self.emit(TokenKind::OpenCurly, 1),
            ('}', _) => self.emit(TokenKind::CloseCurly, 1),
            (other, _) => self.emit(TokenKind::Illegal, other.len_utf8()),
        }
    }
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Token {
    let len = regex.find(lexer.remainder()).map_or(0, |m| m.end());
    lexer.emit(TokenKind::Int, len)
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Token {
    let len = regex.find(lexer.remainder()).map_or(0, |m| m.end());
    let kind = lookup_identifier(&lexer.remainder()[..len]);
    lexer.emit(kind, len)
}

/// Drains a fresh lexer into a vector; the last token is always `EOF`.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.is(TokenKind::EOF);
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
