//! Unit tests for the ast module.
//!
//! This module covers:
//! - Arena ids and parent links
//! - Traversal order and the before/on/after hooks
//! - Skipping and taking over descent
//! - Subtree replacement

use crate::{
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    parser::parser::parse,
    Span,
};

use super::{
    ast::{Ast, NodeId, NodeKind, NodeType},
    visitor::Visitor,
};

fn parse_source(source: &str) -> Ast {
    let tokens = tokenize(source.to_string(), Some("test.js".to_string())).unwrap();
    parse(tokens, false).unwrap()
}

fn identifier(value: &str) -> Token {
    Token {
        kind: TokenKind::Identifier,
        value: value.to_string(),
        span: Span::null(),
        newline_before: false,
    }
}

fn first_of(ast: &Ast, kind: NodeType) -> NodeId {
    ast.iter()
        .find(|node| node.kind.node_type() == kind)
        .map(|node| node.id)
        .unwrap()
}

fn record_name(ast: &Ast, id: NodeId, visitor: &mut Visitor<Vec<String>>) {
    if let NodeKind::Name(token) = ast.kind(id) {
        visitor.state.push(token.value.clone());
    }
}

fn names(ast: &Ast, visitor: Visitor<Vec<String>>) -> Vec<String> {
    let mut visitor = visitor;
    visitor.before(NodeType::Name, record_name);
    ast.traverse(ast.root(), &mut visitor);
    visitor.into_state()
}

#[test]
fn test_ids_start_at_one() {
    let ast = parse_source("a;");

    assert_eq!(ast.iter().next().unwrap().id, NodeId(1));
    assert!(ast.get(NodeId::NULL).is_none());
    assert!(ast.get(NodeId(ast.len() as u32 + 1)).is_none());
    assert_eq!(ast.root(), NodeId(ast.len() as u32));
}

#[test]
fn test_children_get_parent_links() {
    let ast = parse_source("if (a) b(); else c();");
    let root = ast.root();
    let stmt = ast.children(root)[0];

    assert_eq!(ast.parent(stmt), Some(root));
    for child in ast.children(stmt) {
        assert_eq!(ast.parent(child), Some(stmt));
        assert!(ast.is_ancestor(root, child));
        assert!(!ast.is_ancestor(child, root));
    }
}

#[test]
#[should_panic]
fn test_index_null_id_panics() {
    let ast = parse_source("a;");
    let _ = &ast[NodeId::NULL];
}

#[test]
fn test_default_traversal_visits_children_in_order() {
    let ast = parse_source("if (a) b(); else c();");

    assert_eq!(names(&ast, Visitor::new(vec![])), vec!["a", "b", "c"]);
}

#[test]
fn test_default_traversal_covers_optional_children() {
    let ast = parse_source("for (var i = x; i < n; i++) { f(o[k], new C(y)); }");

    assert_eq!(
        names(&ast, Visitor::new(vec![])),
        vec!["x", "i", "n", "i", "f", "o", "k", "C", "y"]
    );
}

#[test]
fn test_before_and_after_hooks_wrap_the_node() {
    let ast = parse_source("if (a) b();");
    let mut visitor: Visitor<Vec<String>> = Visitor::new(vec![]);

    visitor
        .before(NodeType::If, |_, _, visitor| visitor.state.push("before".to_string()))
        .after(NodeType::If, |_, _, visitor| visitor.state.push("after".to_string()));

    assert_eq!(names(&ast, visitor), vec!["before", "a", "b", "after"]);
}

#[test]
fn test_skipped_kind_visits_no_children() {
    let ast = parse_source("if (a) b(); else c();");
    let mut visitor: Visitor<Vec<String>> = Visitor::new(vec![]);

    visitor.skip(NodeType::If);

    assert!(names(&ast, visitor).is_empty());
}

#[test]
fn test_skip_stops_descent_but_keeps_hooks() {
    let ast = parse_source("if (a) b(); else c();");
    let mut visitor: Visitor<Vec<String>> = Visitor::new(vec![]);

    visitor
        .skip(NodeType::Parenthesized)
        .after(NodeType::Parenthesized, |_, _, visitor| visitor.state.push("condition".to_string()));

    assert!(visitor.overrides(NodeType::Parenthesized));
    assert_eq!(names(&ast, visitor), vec!["condition", "b", "c"]);
}

#[test]
fn test_on_hook_takes_over_descent() {
    let ast = parse_source("if (a) b(); else c();");
    let mut visitor: Visitor<Vec<String>> = Visitor::new(vec![]);

    visitor.on(NodeType::If, |ast, id, visitor| {
        if let NodeKind::If(stmt) = ast.kind(id) {
            if let Some(else_branch) = stmt.else_branch {
                ast.traverse(else_branch, visitor);
            }
        }
    });

    assert_eq!(names(&ast, visitor), vec!["c"]);
}

#[test]
fn test_on_hook_can_resume_default_descent() {
    let ast = parse_source("function f(x) { return g(x); }");
    let mut visitor: Visitor<Vec<String>> = Visitor::new(vec![]);

    visitor.on(NodeType::FunctionDef, |ast, id, visitor| {
        visitor.state.push("enter".to_string());
        ast.traverse_children(id, visitor);
    });

    assert_eq!(names(&ast, visitor), vec!["enter", "g", "x"]);
}

#[test]
fn test_reset_restores_default_descent() {
    let ast = parse_source("if (a) b();");
    let mut visitor: Visitor<Vec<String>> = Visitor::new(vec![]);

    visitor.skip(NodeType::If).reset(NodeType::If);

    assert!(!visitor.overrides(NodeType::If));
    assert_eq!(names(&ast, visitor), vec!["a", "b"]);
}

#[test]
fn test_traverse_unknown_id_is_ignored() {
    let ast = parse_source("a;");
    let mut visitor: Visitor<Vec<String>> = Visitor::new(vec![]);
    visitor.before(NodeType::Name, record_name);

    ast.traverse(NodeId::NULL, &mut visitor);

    assert!(visitor.state.is_empty());
}

#[test]
fn test_replace_case_test() {
    let mut ast = parse_source("switch (x) { case 1: a(); case 2: b(); }");
    let case = first_of(&ast, NodeType::Case);
    let NodeKind::Case(clause) = ast.kind(case) else {
        panic!("expected case");
    };
    let old = clause.test;

    let new = ast.name(identifier("y"));
    assert_eq!(ast.replace(old, new), Some(old));

    let NodeKind::Case(clause) = ast.kind(case) else {
        panic!("expected case");
    };
    assert_eq!(clause.test, new);
    assert_eq!(ast.parent(new), Some(case));
    assert_eq!(ast.parent(old), None);

    let second = ast
        .iter()
        .filter(|node| node.kind.node_type() == NodeType::Case)
        .nth(1)
        .unwrap();
    let NodeKind::Case(clause) = &second.kind else {
        panic!("expected case");
    };
    assert!(matches!(ast.kind(clause.test), NodeKind::Number(token) if token.value == "2"));
}

#[test]
fn test_replace_is_visible_to_traversal() {
    let mut ast = parse_source("f(a, b);");
    let target = ast
        .iter()
        .find(|node| matches!(&node.kind, NodeKind::Name(token) if token.value == "b"))
        .map(|node| node.id)
        .unwrap();

    let new = ast.name(identifier("z"));
    ast.replace(target, new);

    assert_eq!(names(&ast, Visitor::new(vec![])), vec!["f", "a", "z"]);
}

#[test]
fn test_replace_rejects_invalid_targets() {
    let mut ast = parse_source("a + b;");
    let root = ast.root();
    let left = first_of(&ast, NodeType::Name);
    let binary = first_of(&ast, NodeType::BinaryOp);
    let detached = ast.name(identifier("z"));

    assert_eq!(ast.replace(root, detached), None);
    assert_eq!(ast.replace(left, left), None);
    assert_eq!(ast.replace(left, binary), None);
    assert_eq!(ast.replace(left, root), None);
    assert_eq!(ast.parent(detached), None);
    assert_eq!(ast.parent(left), Some(binary));
}

fn operator(value: &str) -> Token {
    Token {
        kind: TokenKind::Operator,
        value: value.to_string(),
        span: Span::null(),
        newline_before: false,
    }
}

#[test]
fn test_wrap_attached_node_then_replace() {
    let mut ast = parse_source("x;");
    let stmt = ast.children(ast.root())[0];
    let x = first_of(&ast, NodeType::Name);

    let wrapper = ast.unary_prefix(operator("!"), x);

    assert_eq!(ast.parent(x), Some(stmt));
    assert_eq!(ast.parent(wrapper), None);

    assert_eq!(ast.replace(x, wrapper), Some(x));
    assert_eq!(ast.children(stmt), vec![wrapper]);
    assert_eq!(ast.parent(wrapper), Some(stmt));
    assert_eq!(ast.parent(x), Some(wrapper));

    let mut visitor: Visitor<Vec<String>> = Visitor::new(vec![]);
    visitor.before(NodeType::UnaryPrefix, |_, _, visitor| visitor.state.push("!".to_string()));
    assert_eq!(names(&ast, visitor), vec!["!", "x"]);
}

#[test]
fn test_wrap_nested_node_then_replace() {
    let mut ast = parse_source("f(a);");
    let a = ast
        .iter()
        .find(|node| matches!(&node.kind, NodeKind::Name(token) if token.value == "a"))
        .map(|node| node.id)
        .unwrap();
    let call = ast.parent(a).unwrap();

    let negated = ast.unary_prefix(operator("-"), a);
    let one = ast.name(identifier("one"));
    let sum = ast.binary(negated, operator("+"), one);

    assert_eq!(ast.replace(a, sum), Some(a));
    assert_eq!(ast.parent(sum), Some(call));
    assert_eq!(ast.parent(negated), Some(sum));
    assert_eq!(ast.parent(a), Some(negated));
    assert_eq!(names(&ast, Visitor::new(vec![])), vec!["f", "a", "one"]);
}

#[test]
fn test_replace_rejects_wrapper_around_parent() {
    let mut ast = parse_source("a + b;");
    let left = first_of(&ast, NodeType::Name);
    let binary = first_of(&ast, NodeType::BinaryOp);

    let wrapper = ast.unary_prefix(operator("!"), binary);

    assert_eq!(ast.replace(left, wrapper), None);
    assert_eq!(ast.parent(left), Some(binary));
    assert_eq!(ast.parent(wrapper), None);
}

#[test]
fn test_constructors_accept_foreign_ids() {
    let other = parse_source("a; b; c;");
    let mut ast = parse_source("x;");

    let wrapper = ast.unary_prefix(operator("!"), other.root());

    assert_eq!(ast.span(wrapper).end, Span::null().end);
    assert_eq!(ast.span(other.root()), &Span::null());
}
