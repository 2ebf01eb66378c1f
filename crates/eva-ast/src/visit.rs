// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Post-order traversal.
//!
//! Later passes (a code generator, for one) rely on every child being seen
//! before its parent.

use crate::node::Node;

impl Node {
    /// Direct children in field order.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Declaration(_) | Node::Value(_) | Node::Ident(_) => Vec::new(),
            Node::Assignment(n) => vec![n.expr.as_ref()],
            Node::BinaryOp(n) => vec![n.left.as_ref(), n.right.as_ref()],
            Node::UnaryOp(n) => vec![n.operand.as_ref()],
            Node::Return(n) => vec![n.expr.as_ref()],
            Node::CodeBlock(n) => n.statements.iter().collect(),
            Node::While(n) => vec![n.condition.as_ref(), n.body_node()],
            Node::Function(n) => n.params.iter().chain(std::iter::once(n.body_node())).collect(),
            Node::ExternFunction(n) => n.params.iter().collect(),
            Node::FunctionCall(n) => n.args.iter().collect(),
        }
    }

    /// Invoke `visitor` on every node of this subtree, children first.
    pub fn walk<F>(&self, visitor: &mut F)
    where
        F: FnMut(&Node),
    {
        for child in self.children() {
            child.walk(visitor);
        }
        visitor(self);
    }
}
