//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords, word operators and identifiers
//! - Numeric, string and regex literals
//! - Operators and punctuation
//! - Comments and line-break tracking
//! - Error cases

use super::{lexer::tokenize, tokens::TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.js".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "var function if else while for return switch case default try catch finally".to_string();
    let tokens = tokenize(source, Some("test.js".to_string())).unwrap();

    assert_eq!(tokens.len(), 14);
    for token in &tokens[..13] {
        assert_eq!(token.kind, TokenKind::Keyword, "{}", token.value);
    }
    assert!(tokens[1].is_keyword("function"));
    assert_eq!(tokens[13].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_word_operators() {
    let source = "new in instanceof typeof void delete".to_string();
    let tokens = tokenize(source, Some("test.js".to_string())).unwrap();

    assert!(tokens[0].is_operator("new"));
    assert!(tokens[1].is_operator("in"));
    assert!(tokens[2].is_operator("instanceof"));
    assert!(tokens[3].is_operator("typeof"));
    assert!(tokens[4].is_operator("void"));
    assert!(tokens[5].is_operator("delete"));
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo $bar baz_123 _underscore CamelCase".to_string();
    let tokens = tokenize(source, Some("test.js".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "$bar");
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].value, "_underscore");
    assert_eq!(tokens[4].value, "CamelCase");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 .5 1e10 0xFF".to_string();
    let tokens = tokenize(source, Some("test.js".to_string())).unwrap();

    let values: Vec<&str> = tokens[..5].iter().map(|t| t.value.as_str()).collect();
    assert_eq!(values, vec!["42", "3.14", ".5", "1e10", "0xFF"]);
    assert!(tokens[..5].iter().all(|t| t.kind == TokenKind::Number));
}

#[test]
fn test_tokenize_strings_with_escapes() {
    let source = r#""a\nb" 'it\'s' "\x41B""#.to_string();
    let tokens = tokenize(source, Some("test.js".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "a\nb");
    assert_eq!(tokens[1].value, "it's");
    assert_eq!(tokens[2].value, "AB");
}

#[test]
fn test_tokenize_operators_longest_match() {
    let source = "a >>>= b === c !== d && e || f ++ --".to_string();
    let tokens = tokenize(source, Some("test.js".to_string())).unwrap();

    assert!(tokens[1].is_operator(">>>="));
    assert!(tokens[3].is_operator("==="));
    assert!(tokens[5].is_operator("!=="));
    assert!(tokens[7].is_operator("&&"));
    assert!(tokens[9].is_operator("||"));
    assert!(tokens[11].is_operator("++"));
    assert!(tokens[12].is_operator("--"));
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("{}()[];,:."),
        vec![TokenKind::Punctuation; 10]
            .into_iter()
            .chain([TokenKind::EOF])
            .collect::<Vec<_>>()
    );
}

#[test]
fn test_regex_versus_division() {
    let tokens = tokenize("x = /ab+c/gi; y = a / b / c;".to_string(), None).unwrap();

    assert_eq!(tokens[2].kind, TokenKind::RegEx);
    assert_eq!(tokens[2].value, "/ab+c/gi");
    assert!(tokens[7].is_operator("/"));
    assert!(tokens[9].is_operator("/"));
}

#[test]
fn test_comments_are_tokens() {
    let tokens = tokenize("// line\n/* block */ x".to_string(), None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::LineComment);
    assert_eq!(tokens[0].value, "// line");
    assert_eq!(tokens[1].kind, TokenKind::BlockComment);
    assert!(tokens[1].newline_before);
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert!(!tokens[2].newline_before);
}

#[test]
fn test_newline_before_tracking() {
    let tokens = tokenize("a\nb c /* x\n */ d".to_string(), None).unwrap();

    assert!(!tokens[0].newline_before);
    assert!(tokens[1].newline_before);
    assert!(!tokens[2].newline_before);
    assert!(tokens[4].newline_before);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("foo  bar".to_string(), None).unwrap();

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 3);
    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(tokens[1].span.end.0, 8);
    assert_eq!(tokens[2].span.start.0, 8);
    assert_eq!(tokens[0].span.start.1.as_str(), "<input>");
}

#[test]
fn test_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
}

#[test]
fn test_unrecognised_character() {
    let error = tokenize("x = #".to_string(), None).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_unterminated_string() {
    let error = tokenize("x = \"abc".to_string(), None).unwrap_err();

    assert_eq!(error.get_error_name(), "UnterminatedLiteral");
}
