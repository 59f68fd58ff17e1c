use crate::{lexer::tokens::Token, Span};

use super::{
    ast::{Ast, NodeId, NodeKind},
    statements::FunctionDecl,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ParenthesizedExpr {
    pub expression: NodeId,
}

/// Conditional Expression
/// `test ? consequent : alternate`
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalExpr {
    pub test: NodeId,
    pub consequent: NodeId,
    pub alternate: NodeId,
}

/// New Expression
/// `arguments` is the ExprList node of `new F(...)`, absent for `new F`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpr {
    pub callee: NodeId,
    pub arguments: Option<NodeId>,
}

/// Prefix or postfix unary operation.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: Token,
    pub operand: NodeId,
}

/// Binary Expression
///
/// Also encodes member access (operator `.`, right side a Name), assignment
/// (`=`, `+=`, ...) and the comma operator.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: NodeId,
    pub operator: Token,
    pub right: NodeId,
}

impl BinaryExpr {
    pub fn is_member_access(&self) -> bool {
        self.operator.is_punctuation(".")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprListExpr {
    pub expressions: Vec<NodeId>,
}

/// Call Expression
/// `callee(arguments...)`
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: NodeId,
    pub arguments: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptExpr {
    pub object: NodeId,
    pub index: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayExpr {
    pub elements: Vec<NodeId>,
}

/// Object Expression
///
/// `comment` is the comment token seen directly before the opening brace, if
/// any. It is recorded for consumers and carries no meaning for parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectExpr {
    pub comment: Option<Token>,
    pub properties: Vec<NodeId>,
}

/// `name: value` inside an object literal. `name` is always an identifier token.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: Token,
    pub value: NodeId,
}

impl Ast {
    pub fn parenthesized(&mut self, left_paren: &Token, expression: NodeId, right_paren: &Token) -> NodeId {
        let span = Span::between(&left_paren.span, &right_paren.span);
        self.alloc(NodeKind::Parenthesized(ParenthesizedExpr { expression }), span)
    }

    pub fn conditional(&mut self, test: NodeId, consequent: NodeId, alternate: NodeId) -> NodeId {
        let span = Span::between(self.span(test), self.span(alternate));
        self.alloc(
            NodeKind::Conditional(ConditionalExpr {
                test,
                consequent,
                alternate,
            }),
            span,
        )
    }

    pub fn new_expr(&mut self, new_token: &Token, callee: NodeId, arguments: Option<NodeId>) -> NodeId {
        let span = Span::between(&new_token.span, self.span(arguments.unwrap_or(callee)));
        self.alloc(NodeKind::New(NewExpr { callee, arguments }), span)
    }

    pub fn unary_prefix(&mut self, operator: Token, operand: NodeId) -> NodeId {
        let span = Span::between(&operator.span, self.span(operand));
        self.alloc(NodeKind::UnaryPrefix(UnaryExpr { operator, operand }), span)
    }

    pub fn unary_postfix(&mut self, operand: NodeId, operator: Token) -> NodeId {
        let span = Span::between(self.span(operand), &operator.span);
        self.alloc(NodeKind::UnaryPostfix(UnaryExpr { operator, operand }), span)
    }

    pub fn binary(&mut self, left: NodeId, operator: Token, right: NodeId) -> NodeId {
        let span = Span::between(self.span(left), self.span(right));
        self.alloc(NodeKind::BinaryOp(BinaryExpr { left, operator, right }), span)
    }

    pub fn expr_list(&mut self, left_paren: &Token, expressions: Vec<NodeId>, right_paren: &Token) -> NodeId {
        let span = Span::between(&left_paren.span, &right_paren.span);
        self.alloc(NodeKind::ExprList(ExprListExpr { expressions }), span)
    }

    pub fn application(&mut self, callee: NodeId, arguments: Vec<NodeId>, right_paren: &Token) -> NodeId {
        let span = Span::between(self.span(callee), &right_paren.span);
        self.alloc(NodeKind::Application(CallExpr { callee, arguments }), span)
    }

    pub fn subscript(&mut self, object: NodeId, index: NodeId, right_bracket: &Token) -> NodeId {
        let span = Span::between(self.span(object), &right_bracket.span);
        self.alloc(NodeKind::Subscript(SubscriptExpr { object, index }), span)
    }

    pub fn array(&mut self, left_bracket: &Token, elements: Vec<NodeId>, right_bracket: &Token) -> NodeId {
        let span = Span::between(&left_bracket.span, &right_bracket.span);
        self.alloc(NodeKind::Array(ArrayExpr { elements }), span)
    }

    pub fn object(&mut self, left_brace: &Token, comment: Option<Token>, properties: Vec<NodeId>, right_brace: &Token) -> NodeId {
        let span = Span::between(&left_brace.span, &right_brace.span);
        self.alloc(NodeKind::Object(ObjectExpr { comment, properties }), span)
    }

    pub fn property(&mut self, name: Token, value: NodeId) -> NodeId {
        let span = Span::between(&name.span, self.span(value));
        self.alloc(NodeKind::Property(Property { name, value }), span)
    }

    pub fn function_literal(&mut self, function_token: &Token, name: Option<Token>, parameters: Vec<Token>, body: NodeId) -> NodeId {
        let span = Span::between(&function_token.span, self.span(body));
        self.alloc(
            NodeKind::FunctionLiteral(FunctionDecl {
                name,
                parameters,
                body,
            }),
            span,
        )
    }

    pub fn name(&mut self, token: Token) -> NodeId {
        let span = token.span.clone();
        self.alloc(NodeKind::Name(token), span)
    }

    pub fn number(&mut self, token: Token) -> NodeId {
        let span = token.span.clone();
        self.alloc(NodeKind::Number(token), span)
    }

    pub fn string(&mut self, token: Token) -> NodeId {
        let span = token.span.clone();
        self.alloc(NodeKind::String(token), span)
    }

    pub fn regex(&mut self, token: Token) -> NodeId {
        let span = token.span.clone();
        self.alloc(NodeKind::RegEx(token), span)
    }
}
