//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPAN!` - Creates a Span over a byte range of the lexer's source

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's literal text
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a Span from `$start` to `$end` in the file the lexer is reading.
#[macro_export]
macro_rules! MK_SPAN {
    ($file:expr, $start:expr, $end:expr) => {
        Span {
            start: Position($start as u32, Rc::clone($file)),
            end: Position($end as u32, Rc::clone($file)),
        }
    };
}
