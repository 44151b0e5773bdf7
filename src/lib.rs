#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod repl;

#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Resolves a byte offset to `(line number, line text, column)`.
///
/// Offsets at or past the end of the source land at the end of the last line,
/// which is where `EOF` diagnostics point.
pub fn get_line_at_position(source: &str, position: u32) -> (usize, String, usize) {
    let pos = position as usize;

    let mut start = 0;
    let mut line_number = 1;
    let mut last = (1, String::new(), 0);

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return (line_number, line.to_string(), line_pos);
        }

        let text = line.trim_end_matches(&['\n', '\r'][..]);
        last = (line_number, line.to_string(), text.len());

        start = end;
        line_number += 1;
    }

    if source.ends_with('\n') {
        return (line_number, String::new(), 0);
    }

    last
}

/// Renders a diagnostic with the offending source line and a caret under it.
pub fn format_error(error: &Error, source: &str) -> String {
    /*
        Error: UnexpectedToken (expected next token to be ASSIGN, got INT instead)
        -> shell
           |
        1 | let x 5;
           | ------^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", position.1));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.len() - string.trim_start_matches(&[' ', '\t'][..]).len();

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use crate::parser::parser::parse;

    use super::{format_error, get_line_at_position};

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nfoo\nbar\nTesting { }\n";

        let (line_number, line, line_pos) = get_line_at_position(source, 10);
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = get_line_at_position(source, 30);
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_past_end() {
        let (line_number, line, line_pos) = get_line_at_position("let x", 5);
        assert_eq!(line_number, 1);
        assert_eq!(line, "let x");
        assert_eq!(line_pos, 5);

        let (line_number, line, line_pos) = get_line_at_position("", 0);
        assert_eq!(line_number, 1);
        assert_eq!(line, "");
        assert_eq!(line_pos, 0);

        let (line_number, _, line_pos) = get_line_at_position("a;\n", 3);
        assert_eq!(line_number, 2);
        assert_eq!(line_pos, 0);
    }

    #[test]
    fn test_format_error() {
        let source = "let x 5;";
        let (_, errors) = parse(source.to_string(), None);
        assert_eq!(errors.len(), 1);

        let rendered = format_error(&errors[0], source);
        let expected = [
            "Error: UnexpectedToken (expected next token to be ASSIGN, got INT instead)",
            "-> shell",
            "  |",
            "1 | let x 5;",
            "  | ------^",
        ]
        .join("\n");

        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_format_error_indented_line() {
        let source = "let a = 1;\n    let b 2;";
        let (_, errors) = parse(source.to_string(), Some("final.dojo".to_string()));
        assert_eq!(errors.len(), 1);

        let rendered = format_error(&errors[0], source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[1], "-> final.dojo");
        assert_eq!(lines[3], "2 | let b 2;");
        assert_eq!(lines[4], "  | ------^");
    }

    #[test]
    fn test_format_error_without_tip() {
        let source = format!("{}1{};", "(".repeat(300), ")".repeat(300));
        let (_, errors) = parse(source.clone(), None);
        assert_eq!(errors.len(), 1);

        let rendered = format_error(&errors[0], &source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: NestingTooDeep");
        assert_eq!(lines[1], "-> shell");
        assert_eq!(errors[0].get_position().0, 256);
    }
}
