use crate::{lexer::tokens::Token, Span};

use super::ast::{Ast, NodeId, NodeKind};

/// Block Statement
/// Statement list of a `{ ... }` block, a function body, or the Root.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub statements: Vec<NodeId>,
}

/// Label Statement
/// `name: statement`
#[derive(Debug, Clone, PartialEq)]
pub struct LabelStmt {
    pub label: Token,
    pub statement: NodeId,
}

/// Do Statement
/// `do body while (condition)`; `condition` is the Parenthesized node.
#[derive(Debug, Clone, PartialEq)]
pub struct DoStmt {
    pub body: NodeId,
    pub condition: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThrowStmt {
    pub value: NodeId,
}

/// Var Statement
/// Ordered list of LexicalVariable nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct VarStmt {
    pub declarations: Vec<NodeId>,
}

/// One `name [= initializer]` entry of a declaration list.
#[derive(Debug, Clone, PartialEq)]
pub struct LexicalVariable {
    pub name: Token,
    pub initializer: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: NodeId,
    pub body: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WithStmt {
    pub object: NodeId,
    pub body: NodeId,
}

/// Expression Statement
/// `expression` is `None` for the empty statement `;`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Option<NodeId>,
}

/// `break` / `continue` with an optional label.
#[derive(Debug, Clone, PartialEq)]
pub struct JumpStmt {
    pub label: Option<Token>,
}

/// For-In Statement
/// `for ([var] variable in object) body`
#[derive(Debug, Clone, PartialEq)]
pub struct ForInStmt {
    pub var_token: Option<Token>,
    pub variable: Token,
    pub object: NodeId,
    pub body: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ForInit {
    /// `var a = 1, b`: one LexicalVariable node per name.
    Declarations(Vec<NodeId>),
    Expression(NodeId),
}

/// For Statement
/// Classical three-clause loop; every clause is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub var_token: Option<Token>,
    pub init: Option<ForInit>,
    pub test: Option<NodeId>,
    pub step: Option<NodeId>,
    pub body: NodeId,
}

/// Function definition or literal.
///
/// Definitions always carry a name; literals may be anonymous. `body` is a Block node.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: Option<Token>,
    pub parameters: Vec<Token>,
    pub body: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: NodeId,
    pub then_branch: NodeId,
    pub else_branch: Option<NodeId>,
}

/// Switch Statement
/// `cases` holds the body statements in order, Case and Default labels included.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStmt {
    pub discriminant: NodeId,
    pub cases: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseClause {
    pub test: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatchClause {
    pub name: Token,
    pub body: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TryStmt {
    pub body: NodeId,
    pub handler: Option<CatchClause>,
    pub finalizer: Option<NodeId>,
}

// Constructors. Each takes the tokens and sub-nodes consumed by its
// production and spans from the first to the last of them.
impl Ast {
    /// An empty program spans the end-of-input token.
    pub fn root_node(&mut self, statements: Vec<NodeId>, end_of_input: &Token) -> NodeId {
        let span = match (statements.first(), statements.last()) {
            (Some(first), Some(last)) => Span::between(self.span(*first), self.span(*last)),
            _ => end_of_input.span.clone(),
        };

        let id = self.alloc(NodeKind::Root(BlockStmt { statements }), span);
        self.set_root(id);
        id
    }

    pub fn block(&mut self, left_brace: &Token, statements: Vec<NodeId>, right_brace: &Token) -> NodeId {
        let span = Span::between(&left_brace.span, &right_brace.span);
        self.alloc(NodeKind::Block(BlockStmt { statements }), span)
    }

    pub fn comment(&mut self, token: Token) -> NodeId {
        let span = token.span.clone();
        self.alloc(NodeKind::Comment(token), span)
    }

    pub fn label(&mut self, label: Token, statement: NodeId) -> NodeId {
        let span = Span::between(&label.span, self.span(statement));
        self.alloc(NodeKind::Label(LabelStmt { label, statement }), span)
    }

    pub fn debugger(&mut self, debugger_token: &Token, semicolon: Option<&Token>) -> NodeId {
        let span = Span::between(&debugger_token.span, &semicolon.unwrap_or(debugger_token).span);
        self.alloc(NodeKind::Debugger, span)
    }

    pub fn do_stmt(&mut self, do_token: &Token, body: NodeId, condition: NodeId, semicolon: Option<&Token>) -> NodeId {
        let end = match semicolon {
            Some(token) => token.span.clone(),
            None => self.span(condition).clone(),
        };
        let span = Span::between(&do_token.span, &end);
        self.alloc(NodeKind::Do(DoStmt { body, condition }), span)
    }

    pub fn return_stmt(&mut self, return_token: &Token, value: Option<NodeId>, semicolon: Option<&Token>) -> NodeId {
        let end = match (semicolon, value) {
            (Some(token), _) => token.span.clone(),
            (None, Some(value)) => self.span(value).clone(),
            (None, None) => return_token.span.clone(),
        };
        let span = Span::between(&return_token.span, &end);
        self.alloc(NodeKind::Return(ReturnStmt { value }), span)
    }

    pub fn throw_stmt(&mut self, throw_token: &Token, value: NodeId, semicolon: Option<&Token>) -> NodeId {
        let end = match semicolon {
            Some(token) => token.span.clone(),
            None => self.span(value).clone(),
        };
        let span = Span::between(&throw_token.span, &end);
        self.alloc(NodeKind::Throw(ThrowStmt { value }), span)
    }

    pub fn var_stmt(&mut self, var_token: &Token, declarations: Vec<NodeId>, semicolon: Option<&Token>) -> NodeId {
        let end = match (semicolon, declarations.last()) {
            (Some(token), _) => token.span.clone(),
            (None, Some(last)) => self.span(*last).clone(),
            (None, None) => var_token.span.clone(),
        };
        let span = Span::between(&var_token.span, &end);
        self.alloc(NodeKind::Var(VarStmt { declarations }), span)
    }

    pub fn lexical_variable(&mut self, name: Token, initializer: Option<NodeId>) -> NodeId {
        let span = match initializer {
            Some(value) => Span::between(&name.span, self.span(value)),
            None => name.span.clone(),
        };
        self.alloc(NodeKind::LexicalVariable(LexicalVariable { name, initializer }), span)
    }

    pub fn while_stmt(&mut self, while_token: &Token, condition: NodeId, body: NodeId) -> NodeId {
        let span = Span::between(&while_token.span, self.span(body));
        self.alloc(NodeKind::While(WhileStmt { condition, body }), span)
    }

    pub fn with_stmt(&mut self, with_token: &Token, object: NodeId, body: NodeId) -> NodeId {
        let span = Span::between(&with_token.span, self.span(body));
        self.alloc(NodeKind::With(WithStmt { object, body }), span)
    }

    /// Either an expression, a lone `;`, or both.
    pub fn expression_stmt(&mut self, expression: Option<NodeId>, semicolon: Option<&Token>) -> NodeId {
        let span = match (expression, semicolon) {
            (Some(expr), Some(token)) => Span::between(self.span(expr), &token.span),
            (Some(expr), None) => self.span(expr).clone(),
            (None, Some(token)) => token.span.clone(),
            (None, None) => Span::null(),
        };
        self.alloc(NodeKind::ExpressionStatement(ExpressionStmt { expression }), span)
    }

    pub fn break_stmt(&mut self, break_token: &Token, label: Option<Token>, semicolon: Option<&Token>) -> NodeId {
        let span = Span::between(&break_token.span, &semicolon.or(label.as_ref()).unwrap_or(break_token).span);
        self.alloc(NodeKind::Break(JumpStmt { label }), span)
    }

    pub fn continue_stmt(&mut self, continue_token: &Token, label: Option<Token>, semicolon: Option<&Token>) -> NodeId {
        let span = Span::between(&continue_token.span, &semicolon.or(label.as_ref()).unwrap_or(continue_token).span);
        self.alloc(NodeKind::Continue(JumpStmt { label }), span)
    }

    pub fn for_in_stmt(
        &mut self,
        for_token: &Token,
        var_token: Option<Token>,
        variable: Token,
        object: NodeId,
        body: NodeId,
    ) -> NodeId {
        let span = Span::between(&for_token.span, self.span(body));
        self.alloc(
            NodeKind::ForIn(ForInStmt {
                var_token,
                variable,
                object,
                body,
            }),
            span,
        )
    }

    pub fn for_stmt(
        &mut self,
        for_token: &Token,
        var_token: Option<Token>,
        init: Option<ForInit>,
        test: Option<NodeId>,
        step: Option<NodeId>,
        body: NodeId,
    ) -> NodeId {
        let span = Span::between(&for_token.span, self.span(body));
        self.alloc(
            NodeKind::For(ForStmt {
                var_token,
                init,
                test,
                step,
                body,
            }),
            span,
        )
    }

    pub fn function_def(&mut self, function_token: &Token, name: Token, parameters: Vec<Token>, body: NodeId) -> NodeId {
        let span = Span::between(&function_token.span, self.span(body));
        self.alloc(
            NodeKind::FunctionDef(FunctionDecl {
                name: Some(name),
                parameters,
                body,
            }),
            span,
        )
    }

    pub fn if_stmt(&mut self, if_token: &Token, condition: NodeId, then_branch: NodeId, else_branch: Option<NodeId>) -> NodeId {
        let span = Span::between(&if_token.span, self.span(else_branch.unwrap_or(then_branch)));
        self.alloc(
            NodeKind::If(IfStmt {
                condition,
                then_branch,
                else_branch,
            }),
            span,
        )
    }

    pub fn switch_stmt(&mut self, switch_token: &Token, discriminant: NodeId, cases: Vec<NodeId>, right_brace: &Token) -> NodeId {
        let span = Span::between(&switch_token.span, &right_brace.span);
        self.alloc(NodeKind::Switch(SwitchStmt { discriminant, cases }), span)
    }

    pub fn case_clause(&mut self, case_token: &Token, test: NodeId, colon: &Token) -> NodeId {
        let span = Span::between(&case_token.span, &colon.span);
        self.alloc(NodeKind::Case(CaseClause { test }), span)
    }

    pub fn default_clause(&mut self, default_token: &Token, colon: &Token) -> NodeId {
        let span = Span::between(&default_token.span, &colon.span);
        self.alloc(NodeKind::Default, span)
    }

    pub fn try_stmt(&mut self, try_token: &Token, body: NodeId, handler: Option<CatchClause>, finalizer: Option<NodeId>) -> NodeId {
        let last = finalizer
            .or(handler.as_ref().map(|handler| handler.body))
            .unwrap_or(body);
        let span = Span::between(&try_token.span, self.span(last));
        self.alloc(
            NodeKind::Try(TryStmt {
                body,
                handler,
                finalizer,
            }),
            span,
        )
    }
}
