use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{errors::errors::Error, Span};

lazy_static! {
    /// Reserved words. Word operators are classified as operators, the rest as keywords.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        for keyword in [
            "break", "case", "catch", "continue", "debugger", "default", "do", "else",
            "finally", "for", "function", "if", "return", "switch", "throw", "try", "var",
            "while", "with", "true", "false", "null", "this",
        ] {
            map.insert(keyword, TokenKind::Keyword);
        }
        for operator in ["new", "in", "instanceof", "typeof", "void", "delete"] {
            map.insert(operator, TokenKind::Operator);
        }
        map
    };
}

/// Keywords that may start an expression; they are read as plain names.
pub const ATOM_KEYWORDS: [&str; 4] = ["true", "false", "null", "this"];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    LineComment,
    BlockComment,
    Operator,
    Keyword,
    Punctuation,
    Number,
    String,
    RegEx,
    Identifier,
    EOF,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Literal payload for names, numbers, strings and regexes; the symbol text otherwise.
    pub value: String,
    pub span: Span,
    /// Set when the whitespace before this token contained a line break.
    pub newline_before: bool,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    pub fn equals(&self, kind: TokenKind, value: &str) -> bool {
        self.kind == kind && self.value == value
    }

    pub fn is_punctuation(&self, value: &str) -> bool {
        self.equals(TokenKind::Punctuation, value)
    }

    pub fn is_keyword(&self, value: &str) -> bool {
        self.equals(TokenKind::Keyword, value)
    }

    pub fn is_operator(&self, value: &str) -> bool {
        self.equals(TokenKind::Operator, value)
    }

    pub fn is_comment(&self) -> bool {
        matches!(self.kind, TokenKind::LineComment | TokenKind::BlockComment)
    }

    /// Builds the syntax failure for this token, positioned at its start.
    pub fn unexpected(&self, reason: Option<&str>) -> Error {
        let token = if self.kind == TokenKind::EOF {
            String::from("end of input")
        } else {
            self.value.clone()
        };

        Error::syntax(token, reason.unwrap_or("unexpected token"), self.span.start.clone())
    }

    /// A copy of this token reclassified as an identifier, e.g. a keyword used as a property name.
    pub fn as_name(&self) -> Token {
        Token {
            kind: TokenKind::Identifier,
            ..self.clone()
        }
    }

    pub fn debug(&self) {
        match self.kind {
            TokenKind::String | TokenKind::Identifier | TokenKind::Number | TokenKind::RegEx => {
                println!("{} ({})", self.kind, self.value)
            }
            _ => println!("{} ()", self.kind),
        }
    }
}
