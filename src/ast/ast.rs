use std::{fmt::Display, ops::Index};

use lazy_static::lazy_static;

use crate::{lexer::tokens::Token, Span};

use super::{
    expressions::{
        ArrayExpr, BinaryExpr, CallExpr, ConditionalExpr, ExprListExpr, NewExpr, ObjectExpr,
        ParenthesizedExpr, Property, SubscriptExpr, UnaryExpr,
    },
    statements::{
        BlockStmt, CaseClause, DoStmt, ExpressionStmt, ForInStmt, ForInit, ForStmt, FunctionDecl,
        IfStmt, JumpStmt, LabelStmt, LexicalVariable, ReturnStmt, SwitchStmt, ThrowStmt, TryStmt,
        VarStmt, WhileStmt, WithStmt,
    },
};

lazy_static! {
    static ref NULL_SPAN: Span = Span::null();
}

/// Identity of a node within one parse session.
///
/// Ids start at 1 and follow construction order; `NodeId::NULL` never names a live node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const NULL: NodeId = NodeId(0);

    fn index(self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Node kinds
///
/// The discriminant used by traversal dispatch. Displays as the kind name
/// (`If`, `BinaryOp`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Root,
    Block,
    Comment,
    Label,
    Debugger,
    Do,
    Return,
    Throw,
    Var,
    While,
    With,
    ExpressionStatement,
    Break,
    Continue,
    ForIn,
    For,
    FunctionDef,
    If,
    Switch,
    Case,
    Default,
    Try,
    Parenthesized,
    Conditional,
    New,
    UnaryPrefix,
    UnaryPostfix,
    BinaryOp,
    ExprList,
    Application,
    Subscript,
    Array,
    Object,
    FunctionLiteral,
    Name,
    Number,
    String,
    RegEx,
    LexicalVariable,
    Property,
}

impl NodeType {
    pub const ALL: [NodeType; 40] = [
        NodeType::Root,
        NodeType::Block,
        NodeType::Comment,
        NodeType::Label,
        NodeType::Debugger,
        NodeType::Do,
        NodeType::Return,
        NodeType::Throw,
        NodeType::Var,
        NodeType::While,
        NodeType::With,
        NodeType::ExpressionStatement,
        NodeType::Break,
        NodeType::Continue,
        NodeType::ForIn,
        NodeType::For,
        NodeType::FunctionDef,
        NodeType::If,
        NodeType::Switch,
        NodeType::Case,
        NodeType::Default,
        NodeType::Try,
        NodeType::Parenthesized,
        NodeType::Conditional,
        NodeType::New,
        NodeType::UnaryPrefix,
        NodeType::UnaryPostfix,
        NodeType::BinaryOp,
        NodeType::ExprList,
        NodeType::Application,
        NodeType::Subscript,
        NodeType::Array,
        NodeType::Object,
        NodeType::FunctionLiteral,
        NodeType::Name,
        NodeType::Number,
        NodeType::String,
        NodeType::RegEx,
        NodeType::LexicalVariable,
        NodeType::Property,
    ];
}

impl Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The tagged union of node variants.
///
/// Child links are `NodeId`s into the owning [`Ast`]; tokens are kept where a
/// consumer needs the source text (operators, names, literals).
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Root(BlockStmt),
    Block(BlockStmt),
    Comment(Token),
    Label(LabelStmt),
    Debugger,
    Do(DoStmt),
    Return(ReturnStmt),
    Throw(ThrowStmt),
    Var(VarStmt),
    While(WhileStmt),
    With(WithStmt),
    ExpressionStatement(ExpressionStmt),
    Break(JumpStmt),
    Continue(JumpStmt),
    ForIn(ForInStmt),
    For(ForStmt),
    FunctionDef(FunctionDecl),
    If(IfStmt),
    Switch(SwitchStmt),
    Case(CaseClause),
    Default,
    Try(TryStmt),
    Parenthesized(ParenthesizedExpr),
    Conditional(ConditionalExpr),
    New(NewExpr),
    UnaryPrefix(UnaryExpr),
    UnaryPostfix(UnaryExpr),
    BinaryOp(BinaryExpr),
    ExprList(ExprListExpr),
    Application(CallExpr),
    Subscript(SubscriptExpr),
    Array(ArrayExpr),
    Object(ObjectExpr),
    FunctionLiteral(FunctionDecl),
    Name(Token),
    Number(Token),
    String(Token),
    RegEx(Token),
    LexicalVariable(LexicalVariable),
    Property(Property),
}

impl NodeKind {
    pub fn node_type(&self) -> NodeType {
        match self {
            NodeKind::Root(_) => NodeType::Root,
            NodeKind::Block(_) => NodeType::Block,
            NodeKind::Comment(_) => NodeType::Comment,
            NodeKind::Label(_) => NodeType::Label,
            NodeKind::Debugger => NodeType::Debugger,
            NodeKind::Do(_) => NodeType::Do,
            NodeKind::Return(_) => NodeType::Return,
            NodeKind::Throw(_) => NodeType::Throw,
            NodeKind::Var(_) => NodeType::Var,
            NodeKind::While(_) => NodeType::While,
            NodeKind::With(_) => NodeType::With,
            NodeKind::ExpressionStatement(_) => NodeType::ExpressionStatement,
            NodeKind::Break(_) => NodeType::Break,
            NodeKind::Continue(_) => NodeType::Continue,
            NodeKind::ForIn(_) => NodeType::ForIn,
            NodeKind::For(_) => NodeType::For,
            NodeKind::FunctionDef(_) => NodeType::FunctionDef,
            NodeKind::If(_) => NodeType::If,
            NodeKind::Switch(_) => NodeType::Switch,
            NodeKind::Case(_) => NodeType::Case,
            NodeKind::Default => NodeType::Default,
            NodeKind::Try(_) => NodeType::Try,
            NodeKind::Parenthesized(_) => NodeType::Parenthesized,
            NodeKind::Conditional(_) => NodeType::Conditional,
            NodeKind::New(_) => NodeType::New,
            NodeKind::UnaryPrefix(_) => NodeType::UnaryPrefix,
            NodeKind::UnaryPostfix(_) => NodeType::UnaryPostfix,
            NodeKind::BinaryOp(_) => NodeType::BinaryOp,
            NodeKind::ExprList(_) => NodeType::ExprList,
            NodeKind::Application(_) => NodeType::Application,
            NodeKind::Subscript(_) => NodeType::Subscript,
            NodeKind::Array(_) => NodeType::Array,
            NodeKind::Object(_) => NodeType::Object,
            NodeKind::FunctionLiteral(_) => NodeType::FunctionLiteral,
            NodeKind::Name(_) => NodeType::Name,
            NodeKind::Number(_) => NodeType::Number,
            NodeKind::String(_) => NodeType::String,
            NodeKind::RegEx(_) => NodeType::RegEx,
            NodeKind::LexicalVariable(_) => NodeType::LexicalVariable,
            NodeKind::Property(_) => NodeType::Property,
        }
    }

    /// Direct child nodes in source order. Leaf kinds have none.
    pub fn children(&self) -> Vec<NodeId> {
        let mut out = Vec::new();

        match self {
            NodeKind::Root(block) | NodeKind::Block(block) => out.extend(&block.statements),
            NodeKind::Label(label) => out.push(label.statement),
            NodeKind::Do(stmt) => out.extend([stmt.body, stmt.condition]),
            NodeKind::Return(stmt) => out.extend(stmt.value),
            NodeKind::Throw(stmt) => out.push(stmt.value),
            NodeKind::Var(stmt) => out.extend(&stmt.declarations),
            NodeKind::While(stmt) => out.extend([stmt.condition, stmt.body]),
            NodeKind::With(stmt) => out.extend([stmt.object, stmt.body]),
            NodeKind::ExpressionStatement(stmt) => out.extend(stmt.expression),
            NodeKind::ForIn(stmt) => out.extend([stmt.object, stmt.body]),
            NodeKind::For(stmt) => {
                match &stmt.init {
                    Some(ForInit::Declarations(declarations)) => out.extend(declarations),
                    Some(ForInit::Expression(expr)) => out.push(*expr),
                    None => {}
                }
                out.extend(stmt.test);
                out.extend(stmt.step);
                out.push(stmt.body);
            }
            NodeKind::FunctionDef(decl) | NodeKind::FunctionLiteral(decl) => out.push(decl.body),
            NodeKind::If(stmt) => {
                out.extend([stmt.condition, stmt.then_branch]);
                out.extend(stmt.else_branch);
            }
            NodeKind::Switch(stmt) => {
                out.push(stmt.discriminant);
                out.extend(&stmt.cases);
            }
            NodeKind::Case(clause) => out.push(clause.test),
            NodeKind::Try(stmt) => {
                out.push(stmt.body);
                out.extend(stmt.handler.as_ref().map(|handler| handler.body));
                out.extend(stmt.finalizer);
            }
            NodeKind::Parenthesized(expr) => out.push(expr.expression),
            NodeKind::Conditional(expr) => out.extend([expr.test, expr.consequent, expr.alternate]),
            NodeKind::New(expr) => {
                out.push(expr.callee);
                out.extend(expr.arguments);
            }
            NodeKind::UnaryPrefix(expr) | NodeKind::UnaryPostfix(expr) => out.push(expr.operand),
            NodeKind::BinaryOp(expr) => out.extend([expr.left, expr.right]),
            NodeKind::ExprList(list) => out.extend(&list.expressions),
            NodeKind::Application(call) => {
                out.push(call.callee);
                out.extend(&call.arguments);
            }
            NodeKind::Subscript(expr) => out.extend([expr.object, expr.index]),
            NodeKind::Array(array) => out.extend(&array.elements),
            NodeKind::Object(object) => out.extend(&object.properties),
            NodeKind::LexicalVariable(variable) => out.extend(variable.initializer),
            NodeKind::Property(property) => out.push(property.value),
            NodeKind::Comment(_)
            | NodeKind::Debugger
            | NodeKind::Break(_)
            | NodeKind::Continue(_)
            | NodeKind::Default
            | NodeKind::Name(_)
            | NodeKind::Number(_)
            | NodeKind::String(_)
            | NodeKind::RegEx(_) => {}
        }

        out
    }

    /// Mutable child slots, in the same order as [`NodeKind::children`].
    pub fn children_mut(&mut self) -> Vec<&mut NodeId> {
        let mut out = Vec::new();

        match self {
            NodeKind::Root(block) | NodeKind::Block(block) => out.extend(block.statements.iter_mut()),
            NodeKind::Label(label) => out.push(&mut label.statement),
            NodeKind::Do(stmt) => out.extend([&mut stmt.body, &mut stmt.condition]),
            NodeKind::Return(stmt) => out.extend(stmt.value.as_mut()),
            NodeKind::Throw(stmt) => out.push(&mut stmt.value),
            NodeKind::Var(stmt) => out.extend(stmt.declarations.iter_mut()),
            NodeKind::While(stmt) => out.extend([&mut stmt.condition, &mut stmt.body]),
            NodeKind::With(stmt) => out.extend([&mut stmt.object, &mut stmt.body]),
            NodeKind::ExpressionStatement(stmt) => out.extend(stmt.expression.as_mut()),
            NodeKind::ForIn(stmt) => out.extend([&mut stmt.object, &mut stmt.body]),
            NodeKind::For(stmt) => {
                match &mut stmt.init {
                    Some(ForInit::Declarations(declarations)) => out.extend(declarations.iter_mut()),
                    Some(ForInit::Expression(expr)) => out.push(expr),
                    None => {}
                }
                out.extend(stmt.test.as_mut());
                out.extend(stmt.step.as_mut());
                out.push(&mut stmt.body);
            }
            NodeKind::FunctionDef(decl) | NodeKind::FunctionLiteral(decl) => out.push(&mut decl.body),
            NodeKind::If(stmt) => {
                out.extend([&mut stmt.condition, &mut stmt.then_branch]);
                out.extend(stmt.else_branch.as_mut());
            }
            NodeKind::Switch(stmt) => {
                out.push(&mut stmt.discriminant);
                out.extend(stmt.cases.iter_mut());
            }
            NodeKind::Case(clause) => out.push(&mut clause.test),
            NodeKind::Try(stmt) => {
                out.push(&mut stmt.body);
                out.extend(stmt.handler.as_mut().map(|handler| &mut handler.body));
                out.extend(stmt.finalizer.as_mut());
            }
            NodeKind::Parenthesized(expr) => out.push(&mut expr.expression),
            NodeKind::Conditional(expr) => {
                out.extend([&mut expr.test, &mut expr.consequent, &mut expr.alternate])
            }
            NodeKind::New(expr) => {
                out.push(&mut expr.callee);
                out.extend(expr.arguments.as_mut());
            }
            NodeKind::UnaryPrefix(expr) | NodeKind::UnaryPostfix(expr) => out.push(&mut expr.operand),
            NodeKind::BinaryOp(expr) => out.extend([&mut expr.left, &mut expr.right]),
            NodeKind::ExprList(list) => out.extend(list.expressions.iter_mut()),
            NodeKind::Application(call) => {
                out.push(&mut call.callee);
                out.extend(call.arguments.iter_mut());
            }
            NodeKind::Subscript(expr) => out.extend([&mut expr.object, &mut expr.index]),
            NodeKind::Array(array) => out.extend(array.elements.iter_mut()),
            NodeKind::Object(object) => out.extend(object.properties.iter_mut()),
            NodeKind::LexicalVariable(variable) => out.extend(variable.initializer.as_mut()),
            NodeKind::Property(property) => out.push(&mut property.value),
            NodeKind::Comment(_)
            | NodeKind::Debugger
            | NodeKind::Break(_)
            | NodeKind::Continue(_)
            | NodeKind::Default
            | NodeKind::Name(_)
            | NodeKind::Number(_)
            | NodeKind::String(_)
            | NodeKind::RegEx(_) => {}
        }

        out
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub span: Span,
    /// Weak back-link; `None` for the root and for nodes not yet attached.
    pub parent: Option<NodeId>,
    pub kind: NodeKind,
}

/// Session-local node arena.
///
/// Owns every node built during one parse. Constructors (see `statements.rs`
/// and `expressions.rs`) allocate through it, so ids never collide across
/// sessions and separate sessions share no state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ast {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl Ast {
    pub fn new() -> Self {
        Ast::default()
    }

    /// Stores a node, assigns the next id, and adopts every detached child.
    ///
    /// A child that already has a parent keeps it: the new node refers to it
    /// but does not own it until `replace` splices the new node into that
    /// child's old slot.
    pub(crate) fn alloc(&mut self, kind: NodeKind, span: Span) -> NodeId {
        let id = NodeId(self.nodes.len() as u32 + 1);

        for child in kind.children() {
            if let Some(node) = self.get_mut(child) {
                if node.parent.is_none() {
                    node.parent = Some(id);
                }
            }
        }

        self.nodes.push(Node {
            id,
            span,
            parent: None,
            kind,
        });

        id
    }

    pub(crate) fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    /// The Root node of a completed parse, or `NodeId::NULL` while building.
    pub fn root(&self) -> NodeId {
        self.root.unwrap_or(NodeId::NULL)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index()?)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index()?)
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self[id].kind
    }

    /// Source range of `id`; a null span for ids outside this tree.
    pub fn span(&self, id: NodeId) -> &Span {
        match self.get(id) {
            Some(node) => &node.span,
            None => &*NULL_SPAN,
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|node| node.parent)
    }

    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.get(id)
            .map(|node| node.kind.children())
            .unwrap_or_default()
    }

    /// True when `ancestor` is `id` itself or lies on its parent chain.
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);

        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }

        false
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in id (construction) order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }
}

impl Index<NodeId> for Ast {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        match self.get(id) {
            Some(node) => node,
            None => panic!("node {} is not part of this tree", id),
        }
    }
}
