use crate::{
    ast::{
        ast::NodeId,
        statements::{CatchClause, ForInit},
    },
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
};

use super::{
    expr::{parse_expr, parse_parenthesized_expr},
    parser::Parser,
};

/// Parses one statement.
///
/// `allow_case` is only set directly inside a switch body, where `case` and
/// `default` labels are statements of their own.
pub fn parse_stmt(parser: &mut Parser, allow_case: bool) -> Result<NodeId, Error> {
    let token = parser.current_token().clone();

    match token.kind {
        TokenKind::LineComment | TokenKind::BlockComment => {
            parser.advance();
            Ok(parser.ast.comment(token))
        }
        TokenKind::Identifier if parser.peek().is_punctuation(":") => parse_label_stmt(parser),
        TokenKind::Identifier
        | TokenKind::Number
        | TokenKind::String
        | TokenKind::RegEx
        | TokenKind::Operator => parse_expression_stmt(parser),
        TokenKind::Punctuation => match token.value.as_str() {
            "{" => parse_block(parser),
            "(" | "[" => parse_expression_stmt(parser),
            ";" => {
                parser.advance();
                Ok(parser.ast.expression_stmt(None, Some(&token)))
            }
            _ => Err(token.unexpected(None)),
        },
        TokenKind::Keyword => parse_keyword_stmt(parser, allow_case),
        TokenKind::EOF => Err(token.unexpected(Some("unexpected end of input"))),
    }
}

fn parse_keyword_stmt(parser: &mut Parser, allow_case: bool) -> Result<NodeId, Error> {
    let keyword = parser.current_token().value.clone();

    match keyword.as_str() {
        "break" => parse_break_stmt(parser),
        "case" if allow_case => parse_case_clause(parser),
        "continue" => parse_continue_stmt(parser),
        "debugger" => parse_debugger_stmt(parser),
        "default" if allow_case => parse_default_clause(parser),
        "do" => parse_do_stmt(parser),
        "for" => parse_for_stmt(parser),
        "function" => parse_function(parser, false),
        "if" => parse_if_stmt(parser),
        "return" => parse_return_stmt(parser),
        "switch" => parse_switch_stmt(parser),
        "throw" => parse_throw_stmt(parser),
        "try" => parse_try_stmt(parser),
        "var" => parse_var_stmt(parser),
        "while" => parse_while_stmt(parser),
        "with" => parse_with_stmt(parser),
        "true" | "false" | "null" | "this" => parse_expression_stmt(parser),
        _ => Err(parser.current_token().unexpected(None)),
    }
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    let expression = parse_expr(parser, true)?;
    let semicolon = parser.expect_semicolon()?;

    Ok(parser.ast.expression_stmt(Some(expression), semicolon.as_ref()))
}

fn parse_label_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    let label = parser.advance();
    parser.advance();

    let statement = parse_stmt(parser, false)?;

    Ok(parser.ast.label(label, statement))
}

/// Statements between `{` and `}`, plus both braces.
fn parse_block_body(parser: &mut Parser) -> Result<(Token, Vec<NodeId>, Token), Error> {
    let left_brace = parser.expect_punctuation("{")?;

    let mut statements = vec![];
    while !parser.current_token().is_punctuation("}") {
        statements.push(parse_stmt(parser, false)?);
    }

    let right_brace = parser.advance();

    Ok((left_brace, statements, right_brace))
}

pub fn parse_block(parser: &mut Parser) -> Result<NodeId, Error> {
    let (left_brace, statements, right_brace) = parse_block_body(parser)?;

    Ok(parser.ast.block(&left_brace, statements, &right_brace))
}

/// Label of `break`/`continue`. A line break before the name ends the
/// statement unless semicolons are mandatory.
fn parse_jump_label(parser: &mut Parser) -> Option<Token> {
    let token = parser.current_token();

    if token.kind == TokenKind::Identifier && (!token.newline_before || parser.strict_semicolons()) {
        Some(parser.advance())
    } else {
        None
    }
}

fn parse_break_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    let break_token = parser.advance();
    let label = parse_jump_label(parser);
    let semicolon = parser.expect_semicolon()?;

    Ok(parser.ast.break_stmt(&break_token, label, semicolon.as_ref()))
}

fn parse_continue_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    let continue_token = parser.advance();
    let label = parse_jump_label(parser);
    let semicolon = parser.expect_semicolon()?;

    Ok(parser.ast.continue_stmt(&continue_token, label, semicolon.as_ref()))
}

fn parse_case_clause(parser: &mut Parser) -> Result<NodeId, Error> {
    let case_token = parser.advance();
    let test = parse_expr(parser, true)?;
    let colon = parser.expect_punctuation(":")?;

    Ok(parser.ast.case_clause(&case_token, test, &colon))
}

fn parse_default_clause(parser: &mut Parser) -> Result<NodeId, Error> {
    let default_token = parser.advance();
    let colon = parser.expect_punctuation(":")?;

    Ok(parser.ast.default_clause(&default_token, &colon))
}

fn parse_debugger_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    let debugger_token = parser.advance();
    let semicolon = parser.expect_semicolon()?;

    Ok(parser.ast.debugger(&debugger_token, semicolon.as_ref()))
}

fn parse_do_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    let do_token = parser.advance();
    let body = parse_stmt(parser, false)?;
    parser.expect_keyword("while")?;
    let condition = parse_parenthesized_expr(parser)?;
    let semicolon = parser.expect_semicolon()?;

    Ok(parser.ast.do_stmt(&do_token, body, condition, semicolon.as_ref()))
}

/// `for (init; test; step)` or `for ([var] name in object)`.
///
/// The for-in form is chosen when an identifier directly followed by the
/// `in` operator opens the header.
fn parse_for_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    let for_token = parser.advance();
    parser.expect_punctuation("(")?;

    let var_token = if parser.current_token().is_keyword("var") {
        Some(parser.advance())
    } else {
        None
    };

    if parser.current_token_kind() == TokenKind::Identifier && parser.peek().is_operator("in") {
        let variable = parser.advance();
        parser.advance();

        let object = parse_expr(parser, true)?;
        parser.expect_punctuation(")")?;
        let body = parse_stmt(parser, false)?;

        return Ok(parser.ast.for_in_stmt(&for_token, var_token, variable, object, body));
    }

    let init = if parser.current_token().is_punctuation(";") {
        None
    } else if var_token.is_some() {
        Some(ForInit::Declarations(parse_var_defs(parser)?))
    } else {
        Some(ForInit::Expression(parse_expr(parser, true)?))
    };
    parser.expect_punctuation(";")?;

    let test = if parser.current_token().is_punctuation(";") {
        None
    } else {
        Some(parse_expr(parser, true)?)
    };
    parser.expect_punctuation(";")?;

    let step = if parser.current_token().is_punctuation(")") {
        None
    } else {
        Some(parse_expr(parser, true)?)
    };
    parser.expect_punctuation(")")?;

    let body = parse_stmt(parser, false)?;

    Ok(parser.ast.for_stmt(&for_token, var_token, init, test, step, body))
}

/// Parses a function definition, or a function literal when `literal` is set.
///
/// Only literals may omit the name. The body is always a Block node.
pub fn parse_function(parser: &mut Parser, literal: bool) -> Result<NodeId, Error> {
    let function_token = parser.advance();

    let name = if parser.current_token_kind() == TokenKind::Identifier {
        Some(parser.advance())
    } else {
        None
    };

    parser.expect_punctuation("(")?;

    let mut parameters = vec![];
    while !parser.current_token().is_punctuation(")") {
        match parser.current_token_kind() {
            TokenKind::Identifier => parameters.push(parser.advance()),
            TokenKind::EOF => {
                return Err(parser.current_token().unexpected(Some("unterminated lambda list")))
            }
            _ => return Err(parser.current_token().unexpected(Some("expected parameter name"))),
        }

        if parser.current_token().is_punctuation(",") {
            parser.advance();
        } else if !parser.current_token().is_punctuation(")") {
            return Err(parser.current_token().unexpected(Some("expected , or )")));
        }
    }
    parser.advance();

    let body = parse_block(parser)?;

    match name {
        Some(name) if !literal => Ok(parser.ast.function_def(&function_token, name, parameters, body)),
        None if !literal => Err(function_token.unexpected(Some("expected function name"))),
        name => Ok(parser.ast.function_literal(&function_token, name, parameters, body)),
    }
}

fn parse_if_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    let if_token = parser.advance();
    let condition = parse_parenthesized_expr(parser)?;
    let then_branch = parse_stmt(parser, false)?;

    let else_branch = if parser.current_token().is_keyword("else") {
        parser.advance();
        Some(parse_stmt(parser, false)?)
    } else {
        None
    };

    Ok(parser.ast.if_stmt(&if_token, condition, then_branch, else_branch))
}

fn parse_return_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    let return_token = parser.advance();

    if parser.at_semicolon() {
        let semicolon = parser.expect_semicolon()?;
        return Ok(parser.ast.return_stmt(&return_token, None, semicolon.as_ref()));
    }

    if !parser.strict_semicolons() && parser.at_line_end() {
        return Ok(parser.ast.return_stmt(&return_token, None, None));
    }

    let value = parse_expr(parser, true)?;
    let semicolon = parser.expect_semicolon()?;

    Ok(parser.ast.return_stmt(&return_token, Some(value), semicolon.as_ref()))
}

fn parse_switch_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    let switch_token = parser.advance();
    let discriminant = parse_parenthesized_expr(parser)?;
    parser.expect_punctuation("{")?;

    let mut cases = vec![];
    while !parser.current_token().is_punctuation("}") {
        cases.push(parse_stmt(parser, true)?);
    }

    let right_brace = parser.advance();

    Ok(parser.ast.switch_stmt(&switch_token, discriminant, cases, &right_brace))
}

fn parse_throw_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    let throw_token = parser.advance();
    let value = parse_expr(parser, true)?;
    let semicolon = parser.expect_semicolon()?;

    Ok(parser.ast.throw_stmt(&throw_token, value, semicolon.as_ref()))
}

fn parse_try_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    let try_token = parser.advance();
    let body = parse_stmt(parser, false)?;

    let handler = if parser.current_token().is_keyword("catch") {
        parser.advance();
        parser.expect_punctuation("(")?;
        let name = parser.expect_identifier("expected name with catch clause")?;
        parser.expect_punctuation(")")?;
        let body = parse_stmt(parser, false)?;

        Some(CatchClause { name, body })
    } else {
        None
    };

    let finalizer = if parser.current_token().is_keyword("finally") {
        parser.advance();
        Some(parse_stmt(parser, false)?)
    } else {
        None
    };

    if handler.is_none() && finalizer.is_none() {
        return Err(parser.current_token().unexpected(Some("expected catch or finally clause")));
    }

    Ok(parser.ast.try_stmt(&try_token, body, handler, finalizer))
}

fn parse_var_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    let var_token = parser.advance();
    let declarations = parse_var_defs(parser)?;
    let semicolon = parser.expect_semicolon()?;

    Ok(parser.ast.var_stmt(&var_token, declarations, semicolon.as_ref()))
}

/// Comma separated `name [= value]` declarations, one LexicalVariable each.
fn parse_var_defs(parser: &mut Parser) -> Result<Vec<NodeId>, Error> {
    let mut declarations = vec![];

    loop {
        parser.eat_comments();
        let name = parser.expect_identifier("expected identifier")?;

        let initializer = if parser.current_token().is_operator("=") {
            parser.advance();
            Some(parse_expr(parser, false)?)
        } else {
            None
        };

        declarations.push(parser.ast.lexical_variable(name, initializer));

        if !parser.current_token().is_punctuation(",") {
            return Ok(declarations);
        }
        parser.advance();
    }
}

fn parse_while_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    let while_token = parser.advance();
    let condition = parse_parenthesized_expr(parser)?;
    let body = parse_stmt(parser, false)?;

    Ok(parser.ast.while_stmt(&while_token, condition, body))
}

fn parse_with_stmt(parser: &mut Parser) -> Result<NodeId, Error> {
    let with_token = parser.advance();
    let object = parse_parenthesized_expr(parser)?;
    let body = parse_stmt(parser, false)?;

    Ok(parser.ast.with_stmt(&with_token, object, body))
}
