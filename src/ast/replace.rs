use super::ast::{Ast, NodeId};

impl Ast {
    /// Splices `new` into the slot `old` occupies in its parent.
    ///
    /// Returns the detached `old` node, or `None` without touching the tree
    /// when `old` has no parent or is not found among the parent's children.
    /// `new` must be detached (no parent, not the root) and must not contain
    /// `old`'s parent, so a node never ends up under two parents and the tree
    /// stays acyclic.
    ///
    /// `new` may contain `old` itself. Wrapping a node, as in
    /// `let wrapper = ast.unary_prefix(op, x); ast.replace(x, wrapper)`, moves
    /// `x` under the wrapper.
    pub fn replace(&mut self, old: NodeId, new: NodeId) -> Option<NodeId> {
        if old == new || new == self.root() || self.get(new)?.parent.is_some() {
            return None;
        }

        let parent = self.get(old)?.parent?;
        if self.holder_of(new, parent).is_some() || self.is_ancestor(new, parent) {
            return None;
        }

        let slot = self
            .get_mut(parent)?
            .kind
            .children_mut()
            .into_iter()
            .find(|slot| **slot == old)?;
        *slot = new;

        let holder = self.holder_of(new, old);

        if let Some(node) = self.get_mut(new) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.get_mut(old) {
            node.parent = holder;
        }

        Some(old)
    }

    /// The node within the subtree of `root` that holds `target` in one of
    /// its child slots.
    fn holder_of(&self, root: NodeId, target: NodeId) -> Option<NodeId> {
        let mut stack = vec![root];

        while let Some(id) = stack.pop() {
            let children = self.children(id);
            if children.contains(&target) {
                return Some(id);
            }
            stack.extend(children);
        }

        None
    }
}
