//! Visitor over the AST
//!
//! Serializers and other consumers implement [`Visitor`] and hand it to [`walk`]. Nodes are
//! visited in pre-order, children in document order; `leave` fires once a node's subtree is done.

use super::node::Node;

pub trait Visitor {
    /// Called before the node's children are visited. `depth` is 0 for the node `walk` starts at.
    fn visit(&mut self, node: &Node, depth: usize);

    /// Called after the node's children have been visited
    fn leave(&mut self, _node: &Node, _depth: usize) {}
}

/// Walk `node` and its whole subtree with `visitor`
pub fn walk<V: Visitor + ?Sized>(node: &Node, visitor: &mut V) {
    walk_at(node, 0, visitor);
}

fn walk_at<V: Visitor + ?Sized>(node: &Node, depth: usize, visitor: &mut V) {
    visitor.visit(node, depth);
    for child in &node.children {
        walk_at(child, depth + 1, visitor);
    }
    visitor.leave(node, depth);
}

impl Node {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        walk(self, visitor);
    }
}
