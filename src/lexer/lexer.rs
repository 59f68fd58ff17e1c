use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, ATOM_KEYWORDS, RESERVED_LOOKUP};

/// Consumes a match at the current position. Returns false to let the next pattern try.
pub type RegexHandler = fn(&mut Lexer, &str) -> bool;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(source: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        regex: Regex::new(source).expect("scanner pattern must compile"),
        handler,
    }
}

lazy_static! {
    // Order matters: comments and regex literals before `/`, longer operators before shorter.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern(r"^\s+", skip_handler),
        pattern(r"^//[^\n\r]*", line_comment_handler),
        pattern(r"^/\*[\s\S]*?\*/", block_comment_handler),
        pattern(r"^/(?:[^/\\\[\n\r]|\\.|\[(?:[^\]\\\n\r]|\\.)*\])+/[A-Za-z]*", regex_handler),
        pattern(r"^(?:0[xX][0-9a-fA-F]+|(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)", number_handler),
        pattern(r#"^(?:"(?:[^"\\\n\r]|\\[\s\S])*"|'(?:[^'\\\n\r]|\\[\s\S])*')"#, string_handler),
        pattern(r"^[A-Za-z_$][A-Za-z0-9_$]*", symbol_handler),
        pattern(r"^[{}()\[\];,:.]", MK_DEFAULT_HANDLER!(TokenKind::Punctuation)),
        pattern(
            r"^(?:>>>=|===|!==|>>>|<<=|>>=|\+\+|--|\+=|-=|\*=|/=|%=|&=|\|=|\^=|&&|\|\||==|!=|<=|>=|<<|>>|[-+*/%&|^!~<>=?])",
            MK_DEFAULT_HANDLER!(TokenKind::Operator),
        ),
    ];
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Arc<String>,
    newline_pending: bool,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = Arc::new(file.unwrap_or_else(|| String::from("<input>")));

        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            file: file_name,
            newline_pending: false,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self, offset: usize) -> Position {
        Position(offset as u32, Arc::clone(&self.file))
    }

    /// Span of a `len`-byte token starting at the current position.
    pub fn span_for(&self, len: usize) -> Span {
        Span {
            start: self.position(self.pos),
            end: self.position(self.pos + len),
        }
    }

    /// Returns and clears the pending line-break flag for the next token.
    pub fn take_newline(&mut self) -> bool {
        std::mem::take(&mut self.newline_pending)
    }

    /// A `/` starts a regex literal only where an expression may begin.
    fn regex_allowed(&self) -> bool {
        let Some(last) = self.tokens.iter().rev().find(|token| !token.is_comment()) else {
            return true;
        };

        match last.kind {
            TokenKind::Identifier | TokenKind::Number | TokenKind::String | TokenKind::RegEx => false,
            TokenKind::Punctuation => !matches!(last.value.as_str(), ")" | "]" | "}"),
            TokenKind::Keyword => !ATOM_KEYWORDS.contains(&last.value.as_str()),
            TokenKind::Operator => !matches!(last.value.as_str(), "++" | "--"),
            _ => true,
        }
    }

    fn push_matched(&mut self, kind: TokenKind, value: String, len: usize) {
        let span = self.span_for(len);
        let newline_before = self.take_newline();
        self.push(MK_TOKEN!(kind, value, span, newline_before));
        self.advance_n(len);
    }
}

fn contains_line_break(text: &str) -> bool {
    text.contains(['\n', '\r', '\u{2028}', '\u{2029}'])
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> bool {
    if contains_line_break(matched) {
        lexer.newline_pending = true;
    }
    lexer.advance_n(matched.len());
    true
}

fn line_comment_handler(lexer: &mut Lexer, matched: &str) -> bool {
    lexer.push_matched(TokenKind::LineComment, String::from(matched), matched.len());
    true
}

fn block_comment_handler(lexer: &mut Lexer, matched: &str) -> bool {
    lexer.push_matched(TokenKind::BlockComment, String::from(matched), matched.len());
    if contains_line_break(matched) {
        lexer.newline_pending = true;
    }
    true
}

fn regex_handler(lexer: &mut Lexer, matched: &str) -> bool {
    if !lexer.regex_allowed() {
        return false;
    }
    lexer.push_matched(TokenKind::RegEx, String::from(matched), matched.len());
    true
}

fn number_handler(lexer: &mut Lexer, matched: &str) -> bool {
    lexer.push_matched(TokenKind::Number, String::from(matched), matched.len());
    true
}

fn string_handler(lexer: &mut Lexer, matched: &str) -> bool {
    let literal = unescape(&matched[1..matched.len() - 1]);
    lexer.push_matched(TokenKind::String, literal, matched.len());
    true
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> bool {
    let kind = RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    lexer.push_matched(kind, String::from(matched), matched.len());
    true
}

fn read_hex(chars: &mut std::iter::Peekable<std::str::Chars>, digits: usize) -> Option<char> {
    let mut hex = String::new();

    for _ in 0..digits {
        match chars.peek() {
            Some(ch) if ch.is_ascii_hexdigit() => {
                hex.push(*ch);
                chars.next();
            }
            _ => break,
        }
    }

    u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32)
}

fn unescape(body: &str) -> String {
    let mut result = String::new();
    let mut chars = body.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        let Some(next_ch) = chars.next() else {
            result.push(ch); // Keep the lone backslash
            break;
        };

        match next_ch {
            'n' => result.push('\n'),
            't' => result.push('\t'),
            'r' => result.push('\r'),
            'b' => result.push('\u{8}'),
            'f' => result.push('\u{c}'),
            'v' => result.push('\u{b}'),
            '0' => result.push('\0'),
            'x' => result.push(read_hex(&mut chars, 2).unwrap_or('x')),
            'u' => result.push(read_hex(&mut chars, 4).unwrap_or('u')),
            // Line continuation
            '\n' | '\u{2028}' | '\u{2029}' => {}
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            other => result.push(other),
        }
    }

    result
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in PATTERNS.iter() {
            let Some(found) = pattern.regex.find(lex.remainder()) else {
                continue;
            };

            let text = found.as_str().to_string();
            if (pattern.handler)(&mut lex, &text) {
                matched = true;
                break;
            }
        }

        if !matched {
            let rest = lex.remainder();
            let position = lex.position(lex.pos);

            let error = if rest.starts_with("/*") || rest.starts_with('"') || rest.starts_with('\'') {
                ErrorImpl::UnterminatedLiteral {
                    token: rest.chars().take(8).collect(),
                }
            } else {
                ErrorImpl::UnrecognisedToken {
                    token: rest.chars().next().map(String::from).unwrap_or_default(),
                }
            };

            return Err(Error::new(error, position));
        }
    }

    let span = lex.span_for(0);
    let newline_before = lex.take_newline();
    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), span, newline_before));
    Ok(lex.tokens)
}
