//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a pattern handler that emits the matched text as one token

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span, false);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr, $newline_before:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
            newline_before: $newline_before,
        }
    };
}

/// Creates a scanner handler that pushes the matched text verbatim as a token of `$kind`.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new(r"^[{}()\[\];,:.]").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Punctuation),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer, matched: &str| {
            let span = lexer.span_for(matched.len());
            let newline_before = lexer.take_newline();
            lexer.push(MK_TOKEN!($kind, String::from(matched), span, newline_before));
            lexer.advance_n(matched.len());
            true
        }
    };
}
