use crate::{
    ast::ast::{Ast, NodeId, NodeKind},
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind, ATOM_KEYWORDS},
};

use super::{
    lookups::{binding_power, is_assignment, is_unary_postfix, is_unary_prefix, BindingPower},
    parser::Parser,
    stmt::parse_function,
};

/// Parses a full expression. With `commas` set, `a, b, c` folds right into
/// nested `,` BinaryOp nodes.
pub fn parse_expr(parser: &mut Parser, commas: bool) -> Result<NodeId, Error> {
    let expr = parse_assignment_expr(parser)?;

    if commas && parser.current_token().is_punctuation(",") {
        let comma = parser.advance();
        let rest = parse_expr(parser, true)?;
        return Ok(parser.ast.binary(expr, comma, rest));
    }

    Ok(expr)
}

/// Names, subscripts and `.` accesses may appear left of an assignment.
pub fn is_assignable(ast: &Ast, id: NodeId) -> bool {
    match ast.kind(id) {
        NodeKind::Name(_) | NodeKind::Subscript(_) => true,
        NodeKind::BinaryOp(binary) => binary.is_member_access(),
        _ => false,
    }
}

fn parse_assignment_expr(parser: &mut Parser) -> Result<NodeId, Error> {
    let left = parse_conditional_expr(parser)?;

    if !is_assignment(parser.current_token()) {
        return Ok(left);
    }

    if !is_assignable(&parser.ast, left) {
        return Err(parser.current_token().unexpected(Some("left-hand-side is not assignable")));
    }

    let operator = parser.advance();
    let right = parse_assignment_expr(parser)?;

    Ok(parser.ast.binary(left, operator, right))
}

fn parse_conditional_expr(parser: &mut Parser) -> Result<NodeId, Error> {
    let atom = parse_atom_expr(parser, true)?;
    let test = parse_binary_expr(parser, atom, BindingPower::Default)?;

    if !parser.current_token().is_operator("?") {
        return Ok(test);
    }

    parser.advance();
    let consequent = parse_assignment_expr(parser)?;
    parser.expect_punctuation(":")?;
    let alternate = parse_assignment_expr(parser)?;

    Ok(parser.ast.conditional(test, consequent, alternate))
}

/// Precedence climbing: folds operators binding tighter than `floor` onto `left`.
fn parse_binary_expr(parser: &mut Parser, left: NodeId, floor: BindingPower) -> Result<NodeId, Error> {
    let mut left = left;

    loop {
        let bp = binding_power(parser.current_token());
        if bp <= floor {
            return Ok(left);
        }

        let operator = parser.advance();
        let atom = parse_atom_expr(parser, true)?;
        let right = parse_binary_expr(parser, atom, bp)?;

        left = parser.ast.binary(left, operator, right);
    }
}

/// Parses an atom followed by its subscripts.
///
/// Comments in front of the atom are skipped; the last one is kept on an
/// object literal that follows it.
pub fn parse_atom_expr(parser: &mut Parser, allow_calls: bool) -> Result<NodeId, Error> {
    let comment = parser.eat_comments();
    let token = parser.current_token().clone();

    match token.kind {
        TokenKind::Operator if token.value == "new" => parse_new_expr(parser),
        TokenKind::Operator if is_unary_prefix(&token) => {
            parser.advance();
            let operand = parse_atom_expr(parser, allow_calls)?;
            Ok(parser.ast.unary_prefix(token, operand))
        }
        TokenKind::Keyword if token.value == "function" => {
            let function = parse_function(parser, true)?;
            parse_subscripts(parser, function, true)
        }
        TokenKind::Keyword if ATOM_KEYWORDS.contains(&token.value.as_str()) => {
            parser.advance();
            let atom = parser.ast.name(token.as_name());
            parse_subscripts(parser, atom, allow_calls)
        }
        TokenKind::Identifier | TokenKind::Number | TokenKind::String | TokenKind::RegEx => {
            parser.advance();
            let atom = match token.kind {
                TokenKind::Identifier => parser.ast.name(token),
                TokenKind::Number => parser.ast.number(token),
                TokenKind::String => parser.ast.string(token),
                _ => parser.ast.regex(token),
            };
            parse_subscripts(parser, atom, allow_calls)
        }
        TokenKind::Punctuation => match token.value.as_str() {
            "(" => {
                let expr = parse_parenthesized_expr(parser)?;
                parse_subscripts(parser, expr, allow_calls)
            }
            "[" => {
                let array = parse_array_expr(parser)?;
                parse_subscripts(parser, array, allow_calls)
            }
            "{" => {
                let object = parse_object_expr(parser, comment)?;
                parse_subscripts(parser, object, allow_calls)
            }
            _ => Err(token.unexpected(Some("expected atom for expression"))),
        },
        _ => Err(token.unexpected(Some("expected atom for expression"))),
    }
}

/// Applies `.name`, `[index]`, calls and postfix `++`/`--` to `expr`.
///
/// Calls and postfix operators are only taken when `allow_calls` is set; a
/// postfix operator on a new line belongs to the next statement.
fn parse_subscripts(parser: &mut Parser, expr: NodeId, allow_calls: bool) -> Result<NodeId, Error> {
    let mut expr = expr;

    loop {
        let token = parser.current_token().clone();

        if token.is_punctuation(".") {
            parser.advance();
            let name = parse_member_name(parser)?;
            expr = parser.ast.binary(expr, token, name);
        } else if token.is_punctuation("[") {
            parser.advance();
            let index = parse_expr(parser, true)?;
            let right_bracket = parser.expect_punctuation("]")?;
            expr = parser.ast.subscript(expr, index, &right_bracket);
        } else if allow_calls && token.is_punctuation("(") {
            parser.advance();
            let arguments = parse_expr_list(parser, ")")?;
            let right_paren = parser.advance();
            expr = parser.ast.application(expr, arguments, &right_paren);
        } else if allow_calls && is_unary_postfix(&token) && !token.newline_before {
            parser.advance();
            return Ok(parser.ast.unary_postfix(expr, token));
        } else {
            return Ok(expr);
        }
    }
}

/// True for operators spelled as words, such as `in` or `delete`.
fn is_word_operator(token: &Token) -> bool {
    token.kind == TokenKind::Operator && token.value.chars().all(|c| c.is_ascii_alphabetic())
}

/// The name after `.`. Keywords and word operators are read as plain names.
fn parse_member_name(parser: &mut Parser) -> Result<NodeId, Error> {
    let token = parser.current_token().clone();

    if token.kind == TokenKind::Identifier || token.kind == TokenKind::Keyword || is_word_operator(&token) {
        parser.advance();
        return Ok(parser.ast.name(token.as_name()));
    }

    Err(token.unexpected(Some("expected name")))
}

/// `new callee [(arguments)]`. The callee stops before any call so the
/// argument list binds to `new`.
fn parse_new_expr(parser: &mut Parser) -> Result<NodeId, Error> {
    let new_token = parser.advance();
    let callee = parse_atom_expr(parser, false)?;

    let arguments = if parser.current_token().is_punctuation("(") {
        let left_paren = parser.advance();
        let expressions = parse_expr_list(parser, ")")?;
        let right_paren = parser.advance();
        Some(parser.ast.expr_list(&left_paren, expressions, &right_paren))
    } else {
        None
    };

    let new = parser.ast.new_expr(&new_token, callee, arguments);
    parse_subscripts(parser, new, true)
}

pub fn parse_parenthesized_expr(parser: &mut Parser) -> Result<NodeId, Error> {
    let left_paren = parser.expect_punctuation("(")?;
    let expr = parse_expr(parser, true)?;
    parser.eat_comments();
    let right_paren = parser.expect_punctuation(")")?;

    Ok(parser.ast.parenthesized(&left_paren, expr, &right_paren))
}

/// Comma separated expressions up to `closing`, which is left as the current
/// token. A trailing comma is accepted.
fn parse_expr_list(parser: &mut Parser, closing: &str) -> Result<Vec<NodeId>, Error> {
    let mut expressions = vec![];

    loop {
        parser.eat_comments();
        if parser.current_token().is_punctuation(closing) {
            return Ok(expressions);
        }

        expressions.push(parse_expr(parser, false)?);
        parser.eat_comments();

        if parser.current_token().is_punctuation(",") {
            parser.advance();
        } else if !parser.current_token().is_punctuation(closing) {
            let reason = format!("expected , or {}", closing);
            return Err(parser.current_token().unexpected(Some(reason.as_str())));
        }
    }
}

fn parse_array_expr(parser: &mut Parser) -> Result<NodeId, Error> {
    let left_bracket = parser.advance();
    let elements = parse_expr_list(parser, "]")?;
    let right_bracket = parser.advance();

    Ok(parser.ast.array(&left_bracket, elements, &right_bracket))
}

/// Property keys may be names, keywords, strings or numbers.
fn parse_property_name(parser: &mut Parser) -> Result<Token, Error> {
    let token = parser.current_token().clone();

    match token.kind {
        TokenKind::Identifier | TokenKind::Keyword | TokenKind::String | TokenKind::Number => {
            parser.advance();
            Ok(token.as_name())
        }
        TokenKind::Operator if is_word_operator(&token) => {
            parser.advance();
            Ok(token.as_name())
        }
        _ => Err(token.unexpected(Some("expected name"))),
    }
}

fn parse_object_expr(parser: &mut Parser, comment: Option<Token>) -> Result<NodeId, Error> {
    let left_brace = parser.advance();

    let mut properties = vec![];
    loop {
        parser.eat_comments();
        if parser.current_token().is_punctuation("}") {
            break;
        }

        let name = parse_property_name(parser)?;
        parser.expect_punctuation(":")?;
        let value = parse_expr(parser, false)?;
        properties.push(parser.ast.property(name, value));

        parser.eat_comments();
        if parser.current_token().is_punctuation(",") {
            parser.advance();
        } else if !parser.current_token().is_punctuation("}") {
            return Err(parser.current_token().unexpected(Some("expected , or }")));
        }
    }

    let right_brace = parser.advance();

    Ok(parser.ast.object(&left_brace, comment, properties, &right_brace))
}
