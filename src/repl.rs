//! Line-oriented interactive loop that prints the tokens of each line.

use std::io::{self, BufRead, Write};

use crate::lexer::{lexer::Lexer, tokens::TokenKind};

pub const PROMPT: &str = ">> ";

/// Reads lines from `input` until it is exhausted, writing every token of
/// each line to `output`.
pub fn start<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    let mut line = String::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let mut lexer = Lexer::new(line.clone(), None);
        loop {
            let token = lexer.next_token();
            if token.is(TokenKind::EOF) {
                break;
            }
            writeln!(output, "{}", token)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::start;

    fn run(input: &str) -> String {
        let mut output = Vec::new();
        start(Cursor::new(input), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_prints_tokens_per_line() {
        let output = run("let x = 5;\n");

        let expected = [
            ">> Token { kind: LET, value: \"let\" }",
            "Token { kind: IDENT, value: \"x\" }",
            "Token { kind: ASSIGN, value: \"=\" }",
            "Token { kind: INT, value: \"5\" }",
            "Token { kind: SEMICOLON, value: \";\" }",
            ">> ",
        ]
        .join("\n");

        assert_eq!(output, expected);
    }

    #[test]
    fn test_each_line_gets_a_fresh_lexer() {
        let output = run("a\n@\n");

        assert_eq!(
            output,
            ">> Token { kind: IDENT, value: \"a\" }\n>> Token { kind: ILLEGAL, value: \"@\" }\n>> "
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(run(""), ">> ");
        assert_eq!(run("\n"), ">> >> ");
    }
}
