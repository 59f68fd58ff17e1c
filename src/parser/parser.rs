//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser is a single-pass recursive descent over a token vector with
//! precedence climbing for binary operators (see `expr.rs`) and one handler
//! per statement keyword (see `stmt.rs`). Nodes are allocated into the
//! session-local [`Ast`] the parser owns.

use crate::{
    ast::ast::Ast,
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
    Span,
};

use super::stmt::parse_stmt;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse, always terminated by an EOF token
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Require an explicit `;` after every statement instead of applying ASI
    strict_semicolons: bool,
    /// Arena receiving every node built during this session
    pub ast: Ast,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// An end-of-input token is appended if the stream lacks one.
    pub fn new(mut tokens: Vec<Token>, strict_semicolons: bool) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let span = match tokens.last() {
                Some(last) => Span {
                    start: last.span.end.clone(),
                    end: last.span.end.clone(),
                },
                None => Span::null(),
            };

            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                span,
                newline_before: false,
            });
        }

        Parser {
            tokens,
            pos: 0,
            strict_semicolons,
            ast: Ast::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the token after the current one (EOF at the end).
    pub fn peek(&self) -> &Token {
        &self.tokens[(self.pos + 1).min(self.tokens.len() - 1)]
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// The position never moves past the final EOF token.
    pub fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    pub fn strict_semicolons(&self) -> bool {
        self.strict_semicolons
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Consumes the punctuation `punc` or fails with "expected `punc`".
    pub fn expect_punctuation(&mut self, punc: &str) -> Result<Token, Error> {
        if self.current_token().is_punctuation(punc) {
            Ok(self.advance())
        } else {
            let reason = format!("expected {}", punc);
            Err(self.current_token().unexpected(Some(reason.as_str())))
        }
    }

    /// Consumes the keyword `word` or fails with "expected keyword `word`".
    pub fn expect_keyword(&mut self, word: &str) -> Result<Token, Error> {
        if self.current_token().is_keyword(word) {
            Ok(self.advance())
        } else {
            let reason = format!("expected keyword {}", word);
            Err(self.current_token().unexpected(Some(reason.as_str())))
        }
    }

    /// Consumes an identifier or fails with `reason`.
    pub fn expect_identifier(&mut self, reason: &str) -> Result<Token, Error> {
        if self.current_token_kind() == TokenKind::Identifier {
            Ok(self.advance())
        } else {
            Err(self.current_token().unexpected(Some(reason)))
        }
    }

    /// Ends a statement.
    ///
    /// Returns the consumed `;`, or `None` when a semicolon is inserted: the
    /// next token follows a line break, is end of input, or is `}`. With
    /// `strict_semicolons` a literal `;` is always required. Block comments on
    /// the same line in front of the `;` are skipped.
    pub fn expect_semicolon(&mut self) -> Result<Option<Token>, Error> {
        if self.at_semicolon() {
            while self.current_token_kind() == TokenKind::BlockComment {
                self.advance();
            }
            return Ok(Some(self.advance()));
        }

        if self.strict_semicolons {
            return self.expect_punctuation(";").map(Some);
        }

        if self.at_line_end() {
            return Ok(None);
        }

        Err(self.current_token().unexpected(Some("expected ;")))
    }

    /// True when nothing but block comments separates the cursor from a line
    /// break, end of input, or `}`.
    ///
    /// A line comment always ends its line. Restricted productions such as
    /// `return` use this to decide whether their operand is missing.
    pub fn at_line_end(&self) -> bool {
        match self.next_on_line() {
            Some(token) => token.is_punctuation("}"),
            None => true,
        }
    }

    /// True when the next token on this line, past any block comments, is `;`.
    pub fn at_semicolon(&self) -> bool {
        self.next_on_line().is_some_and(|token| token.is_punctuation(";"))
    }

    /// The first token from the cursor that is not a block comment, or `None`
    /// when a line break, line comment or end of input comes first.
    fn next_on_line(&self) -> Option<&Token> {
        let mut index = self.pos;

        loop {
            let token = &self.tokens[index];

            if token.newline_before || token.kind == TokenKind::EOF || token.kind == TokenKind::LineComment {
                return None;
            }

            if token.kind != TokenKind::BlockComment {
                return Some(token);
            }

            index += 1;
        }
    }

    /// Skips comment tokens, returning the last one skipped.
    pub fn eat_comments(&mut self) -> Option<Token> {
        let mut last = None;

        while self.current_token().is_comment() {
            last = Some(self.advance());
        }

        last
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point. Statements are parsed until end of input
/// and collected under a Root node. The first syntax error aborts the parse.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse
/// * `strict_semicolons` - Require `;` after every statement instead of inserting them
///
/// # Returns
///
/// The completed tree, whose `root()` is the Root node, or the first Error.
pub fn parse(tokens: Vec<Token>, strict_semicolons: bool) -> Result<Ast, Error> {
    let mut parser = Parser::new(tokens, strict_semicolons);

    let mut body = vec![];

    while parser.has_tokens() {
        body.push(parse_stmt(&mut parser, false)?);
    }

    let end_of_input = parser.current_token().clone();
    parser.ast.root_node(body, &end_of_input);

    Ok(parser.ast)
}
