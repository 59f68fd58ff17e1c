//! Traversal protocol.
//!
//! A [`Visitor`] holds three hook tables keyed by [`NodeType`]: `before`,
//! `on` and `after`. Dispatching a node of kind `K`:
//!
//! 1. runs `before[K]` if registered;
//! 2. if `K` is present in the `on` table, runs its hook (which then owns the
//!    descent into children), or does nothing when the entry was registered
//!    with [`Visitor::skip`]; if `K` is absent, visits the direct children in
//!    source order;
//! 3. runs `after[K]` if registered.
//!
//! Hooks are plain function pointers so a hook can receive the visitor itself
//! and recurse through [`Ast::traverse`]. Per-walk data lives in `state`.

use std::collections::HashMap;

use super::ast::{Ast, NodeId, NodeType};

pub type Hook<S> = fn(&Ast, NodeId, &mut Visitor<S>);

pub struct Visitor<S> {
    pub state: S,
    before: HashMap<NodeType, Hook<S>>,
    on: HashMap<NodeType, Option<Hook<S>>>,
    after: HashMap<NodeType, Hook<S>>,
}

impl<S> Visitor<S> {
    pub fn new(state: S) -> Self {
        Visitor {
            state,
            before: HashMap::new(),
            on: HashMap::new(),
            after: HashMap::new(),
        }
    }

    /// Registers a hook run before a node of `kind` is visited.
    pub fn before(&mut self, kind: NodeType, hook: Hook<S>) -> &mut Self {
        self.before.insert(kind, hook);
        self
    }

    /// Takes over visiting nodes of `kind`. The hook decides whether to descend.
    pub fn on(&mut self, kind: NodeType, hook: Hook<S>) -> &mut Self {
        self.on.insert(kind, Some(hook));
        self
    }

    /// Visits nodes of `kind` but never descends into their children.
    pub fn skip(&mut self, kind: NodeType) -> &mut Self {
        self.on.insert(kind, None);
        self
    }

    /// Registers a hook run after a node of `kind` is visited.
    pub fn after(&mut self, kind: NodeType, hook: Hook<S>) -> &mut Self {
        self.after.insert(kind, hook);
        self
    }

    /// Removes any `on` or `skip` entry for `kind`, restoring default descent.
    pub fn reset(&mut self, kind: NodeType) -> &mut Self {
        self.on.remove(&kind);
        self
    }

    /// True when `kind` has an `on` entry, whether a hook or a skip.
    pub fn overrides(&self, kind: NodeType) -> bool {
        self.on.contains_key(&kind)
    }

    pub fn into_state(self) -> S {
        self.state
    }
}

impl Ast {
    /// Dispatches `visitor` on `id`. Unknown ids are ignored.
    pub fn traverse<S>(&self, id: NodeId, visitor: &mut Visitor<S>) {
        let Some(node) = self.get(id) else {
            return;
        };
        let kind = node.kind.node_type();

        if let Some(hook) = visitor.before.get(&kind).copied() {
            hook(self, id, visitor);
        }

        match visitor.on.get(&kind).copied() {
            Some(Some(hook)) => hook(self, id, visitor),
            Some(None) => {}
            None => self.traverse_children(id, visitor),
        }

        if let Some(hook) = visitor.after.get(&kind).copied() {
            hook(self, id, visitor);
        }
    }

    /// The default descent: dispatches on each direct child in source order.
    pub fn traverse_children<S>(&self, id: NodeId, visitor: &mut Visitor<S>) {
        for child in self.children(id) {
            self.traverse(child, visitor);
        }
    }
}
