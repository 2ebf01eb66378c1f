// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Indented tree rendering for AST debugging.
//!
//! This is a dump format, not source syntax; it cannot be parsed back.

use crate::node::*;
use std::fmt;

const INDENT: &str = "  ";

impl fmt::Display for BinaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sym = match self {
            BinaryOperation::Add => "+",
            BinaryOperation::Sub => "-",
            BinaryOperation::Mult => "*",
            BinaryOperation::Div => "/",
            BinaryOperation::Power => "**",
            BinaryOperation::And => "and",
            BinaryOperation::Or => "or",
        };
        write!(f, "{}", sym)
    }
}

impl fmt::Display for UnaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOperation::Print => write!(f, "print"),
            UnaryOperation::Not => write!(f, "not"),
        }
    }
}

impl Node {
    /// Render this node and its subtree, each line prefixed by `depth` indents.
    pub fn display(&self, depth: usize) -> String {
        let mut out = String::new();
        self.render(depth, &mut out);
        out
    }

    fn render(&self, depth: usize, out: &mut String) {
        let pad = INDENT.repeat(depth);
        match self {
            Node::Declaration(n) => {
                out.push_str(&format!("{}var {}\n", pad, n.ident));
            }
            Node::Assignment(n) => {
                out.push_str(&format!("{}var {} =\n", pad, n.ident));
                n.expr.render(depth + 1, out);
            }
            Node::Value(n) => {
                out.push_str(&format!("{}{:?}\n", pad, n.value));
            }
            Node::BinaryOp(n) => {
                out.push_str(&format!("{}{}\n", pad, n.op));
                n.left.render(depth + 1, out);
                n.right.render(depth + 1, out);
            }
            Node::UnaryOp(n) => {
                out.push_str(&format!("{}{}\n", pad, n.op));
                n.operand.render(depth + 1, out);
            }
            Node::Ident(n) => {
                out.push_str(&format!("{}{}\n", pad, n.name));
            }
            Node::Return(n) => {
                out.push_str(&format!("{}return\n", pad));
                n.expr.render(depth + 1, out);
            }
            Node::CodeBlock(n) => {
                out.push_str(&format!("{}block\n", pad));
                for stmt in &n.statements {
                    stmt.render(depth + 1, out);
                }
            }
            Node::While(n) => {
                out.push_str(&format!("{}while\n", pad));
                n.condition.render(depth + 1, out);
                n.body_node().render(depth + 1, out);
            }
            Node::Function(n) => {
                out.push_str(&format!("{}function {}(nargs={})\n", pad, n.name, n.params.len()));
                n.body_node().render(depth + 1, out);
            }
            Node::ExternFunction(n) => {
                out.push_str(&format!("{}extern function {}(nargs={})\n", pad, n.name, n.params.len()));
            }
            Node::FunctionCall(n) => {
                out.push_str(&format!("{}call {}\n", pad, n.name));
                for arg in &n.args {
                    arg.render(depth + 1, out);
                }
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display(0))
    }
}
