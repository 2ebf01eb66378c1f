// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! AST node types.
//!
//! The tree is strictly owned: every child has exactly one parent and nodes
//! are never mutated after the parser builds them.

use crate::Span;

/// A node in the AST.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    /// `var name`
    Declaration(Declaration),
    /// `name = expr`
    Assignment(Assignment),
    /// Numeric literal
    Value(Value),
    /// Binary operation
    BinaryOp(BinaryOp),
    /// Unary operation
    UnaryOp(UnaryOp),
    /// Identifier reference
    Ident(Ident),
    /// `return expr`
    Return(ReturnStatement),
    /// Ordered statement list
    CodeBlock(CodeBlock),
    /// `while cond body`
    While(While),
    /// `fun name(params) { ... }`
    Function(Function),
    /// `extern fun name(params)`
    ExternFunction(ExternFunction),
    /// `name(args)`
    FunctionCall(FunctionCall),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOperation {
    Add,
    Sub,
    Mult,
    Div,
    Power,
    And,
    Or,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOperation {
    Print,
    Not,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Declaration {
    pub span: Span,
    pub ident: String,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pub span: Span,
    pub ident: String,
    pub expr: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Value {
    pub span: Span,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryOp {
    pub span: Span,
    pub left: Box<Node>,
    pub op: BinaryOperation,
    pub right: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnaryOp {
    pub span: Span,
    pub op: UnaryOperation,
    pub operand: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ident {
    pub span: Span,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReturnStatement {
    pub span: Span,
    pub expr: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodeBlock {
    pub span: Span,
    /// Statements in execution order.
    pub statements: Vec<Node>,
}

/// A `while` loop. The body is always a [`CodeBlock`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "WhileFields"))]
pub struct While {
    pub span: Span,
    pub condition: Box<Node>,
    body: Box<Node>,
}

/// A function definition. Parameters are always [`Ident`] nodes and the body
/// is always a [`CodeBlock`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "FunctionFields"))]
pub struct Function {
    pub span: Span,
    pub name: String,
    pub params: Vec<Node>,
    body: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExternFunction {
    pub span: Span,
    pub name: String,
    pub params: Vec<Node>,
}

/// A call. The callee is a bare name, never an arbitrary expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionCall {
    pub span: Span,
    pub name: String,
    pub args: Vec<Node>,
}

impl While {
    pub fn new(span: Span, condition: Node, body: CodeBlock) -> Self {
        Self {
            span,
            condition: Box::new(condition),
            body: Box::new(Node::CodeBlock(body)),
        }
    }

    pub fn body(&self) -> &CodeBlock {
        match self.body.as_ref() {
            Node::CodeBlock(block) => block,
            _ => unreachable!("while body is built from a CodeBlock"),
        }
    }

    /// The body as a node, for traversal.
    pub fn body_node(&self) -> &Node {
        &self.body
    }
}

impl Function {
    pub fn new(span: Span, name: impl Into<String>, params: Vec<Node>, body: CodeBlock) -> Self {
        Self {
            span,
            name: name.into(),
            params,
            body: Box::new(Node::CodeBlock(body)),
        }
    }

    pub fn body(&self) -> &CodeBlock {
        match self.body.as_ref() {
            Node::CodeBlock(block) => block,
            _ => unreachable!("function body is built from a CodeBlock"),
        }
    }

    /// The body as a node, for traversal.
    pub fn body_node(&self) -> &Node {
        &self.body
    }
}

/// Unchecked `While` fields as they appear in serialized trees.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct WhileFields {
    span: Span,
    condition: Box<Node>,
    body: Box<Node>,
}

#[cfg(feature = "serde")]
impl TryFrom<WhileFields> for While {
    type Error = String;

    fn try_from(fields: WhileFields) -> Result<Self, Self::Error> {
        match *fields.body {
            Node::CodeBlock(body) => Ok(While::new(fields.span, *fields.condition, body)),
            other => Err(format!("while body must be a CodeBlock, found {}", other.kind_name())),
        }
    }
}

/// Unchecked `Function` fields as they appear in serialized trees.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct FunctionFields {
    span: Span,
    name: String,
    params: Vec<Node>,
    body: Box<Node>,
}

#[cfg(feature = "serde")]
impl TryFrom<FunctionFields> for Function {
    type Error = String;

    fn try_from(fields: FunctionFields) -> Result<Self, Self::Error> {
        if let Some(param) = fields.params.iter().find(|p| p.as_ident().is_none()) {
            return Err(format!("function parameter must be an Ident, found {}", param.kind_name()));
        }
        match *fields.body {
            Node::CodeBlock(body) => Ok(Function::new(fields.span, fields.name, fields.params, body)),
            other => Err(format!("function body must be a CodeBlock, found {}", other.kind_name())),
        }
    }
}

impl Node {
    pub fn span(&self) -> Span {
        match self {
            Node::Declaration(n) => n.span,
            Node::Assignment(n) => n.span,
            Node::Value(n) => n.span,
            Node::BinaryOp(n) => n.span,
            Node::UnaryOp(n) => n.span,
            Node::Ident(n) => n.span,
            Node::Return(n) => n.span,
            Node::CodeBlock(n) => n.span,
            Node::While(n) => n.span,
            Node::Function(n) => n.span,
            Node::ExternFunction(n) => n.span,
            Node::FunctionCall(n) => n.span,
        }
    }

    /// The identifier name, if this node is a bare [`Ident`].
    pub fn as_ident(&self) -> Option<&str> {
        match self {
            Node::Ident(ident) => Some(&ident.name),
            _ => None,
        }
    }

    pub fn as_code_block(&self) -> Option<&CodeBlock> {
        match self {
            Node::CodeBlock(block) => Some(block),
            _ => None,
        }
    }

    /// Short variant name, used by tools that list nodes.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Declaration(_) => "Declaration",
            Node::Assignment(_) => "Assignment",
            Node::Value(_) => "Value",
            Node::BinaryOp(_) => "BinaryOp",
            Node::UnaryOp(_) => "UnaryOp",
            Node::Ident(_) => "Ident",
            Node::Return(_) => "ReturnStatement",
            Node::CodeBlock(_) => "CodeBlock",
            Node::While(_) => "While",
            Node::Function(_) => "Function",
            Node::ExternFunction(_) => "ExternFunction",
            Node::FunctionCall(_) => "FunctionCall",
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::Position;

    fn span(start: usize, end: usize) -> Span {
        Span::new(Position::new(1, start), Position::new(1, end))
    }

    fn ident(name: &str) -> Node {
        Node::Ident(Ident { span: span(1, 2), name: name.to_string() })
    }

    fn block() -> CodeBlock {
        CodeBlock {
            span: span(3, 5),
            statements: vec![Node::Declaration(Declaration { span: span(3, 4), ident: "y".into() })],
        }
    }

    #[test]
    fn while_round_trips() {
        let node = Node::While(While::new(span(1, 5), ident("x"), block()));
        let json = serde_json::to_string(&node).unwrap();
        let back: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn while_body_must_be_a_block() {
        let node = Node::While(While::new(span(1, 5), ident("x"), block()));
        let mut value = serde_json::to_value(&node).unwrap();
        value["While"]["body"] = serde_json::to_value(ident("z")).unwrap();

        let err = serde_json::from_value::<Node>(value).unwrap_err();
        assert!(err.to_string().contains("while body must be a CodeBlock, found Ident"));
    }

    #[test]
    fn function_body_must_be_a_block() {
        let node = Node::Function(Function::new(span(1, 5), "f", vec![ident("a")], block()));
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(serde_json::from_str::<Node>(&json).unwrap(), node);

        let mut value = serde_json::to_value(&node).unwrap();
        value["Function"]["body"] = serde_json::to_value(ident("z")).unwrap();
        let err = serde_json::from_value::<Node>(value).unwrap_err();
        assert!(err.to_string().contains("function body must be a CodeBlock"));
    }

    #[test]
    fn function_params_must_be_names() {
        let node = Node::Function(Function::new(span(1, 5), "f", vec![ident("a")], block()));
        let mut value = serde_json::to_value(&node).unwrap();
        value["Function"]["params"][0] = serde_json::to_value(Node::CodeBlock(block())).unwrap();

        let err = serde_json::from_value::<Node>(value).unwrap_err();
        assert!(err.to_string().contains("function parameter must be an Ident"));
    }
}
