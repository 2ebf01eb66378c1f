// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! The recursive-descent parser.
//!
//! One function per grammar rule. Expression precedence is encoded by call
//! nesting: outer calls bind looser, inner calls bind tighter.
//!
//! ```text
//! Program         := FunctionOrBlock* EOF
//! FunctionOrBlock := "extern"? "fun" IDENT "(" ArgList ")" CodeBlock?
//!                  | CodeBlockOrSingle
//! CodeBlockOrSingle := "{" Statement* "}" | Declaration
//! CodeBlock       := "{" Statement* "}"
//! Statement       := "return" Expression
//!                  | "while" Expression CodeBlockOrSingle
//!                  | Declaration
//! Declaration     := "var" IDENT | Assignment
//! Assignment      := Expression ("=" Expression)?
//! Expression      := "(" Expression ")" | ExprAdd
//! ExprAdd         := ExprSub ("+" ExprAdd)?
//! ExprSub         := ExprMult ("-" ExprAdd)?
//! ExprMult        := ExprDiv ("*" ExprMult)?
//! ExprDiv         := ExprPower ("/" ExprMult)?
//! ExprPower       := FunctionCall ("**" ExprPower)?
//! FunctionCall    := ExprUnary ("(" ArgList ")")?
//! ExprUnary       := "not" FunctionCall | ParenOrValue
//! ParenOrValue    := "(" Expression ")" | NUMBER | IDENT
//! ArgList         := (Expression ("," Expression)*)?
//! ```
//!
//! The right operand of `-` re-enters `ExprAdd` and the right operand of `/`
//! re-enters `ExprMult`, so `1 - 2 - 3` parses as `1 - (2 - 3)` and
//! `1 - 2 + 3` as `1 - (2 + 3)`.

use eva_ast::node::{
    Assignment, BinaryOp, CodeBlock, Declaration, ExternFunction, Function, FunctionCall, Ident,
    ReturnStatement, UnaryOp, Value, While,
};
use eva_ast::token::{Token, TokenKind};
use eva_ast::{BinaryOperation, Node, Position, Span, UnaryOperation};
use eva_lexer::{LexError, Lexer};
use thiserror::Error;

use crate::hints;

/// The parser for EVA source code.
///
/// Owns its lexer and a single token of lookahead. Parsing stops at the
/// first error; there is no recovery.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    current: Token,
    /// End offset of the last consumed token.
    prev_end: usize,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            lexer: Lexer::new(source),
            // Placeholder until `parse` pulls the first real token.
            current: Token::eof(0),
            prev_end: 0,
        }
    }

    // =========================================================================
    // Token Navigation
    // =========================================================================

    fn peek(&self) -> TokenKind {
        self.current.kind
    }

    fn is_next(&self, kind: TokenKind) -> bool {
        self.peek() == kind
    }

    fn advance(&mut self) -> Result<Token, ParseError> {
        let next = match self.lexer.next() {
            Some(token) => token?,
            None => Token::eof(self.lexer.source().len()),
        };
        let prev = std::mem::replace(&mut self.current, next);
        self.prev_end = prev.end;
        Ok(prev)
    }

    /// Consume a required token or fail.
    fn eat(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.is_next(kind) {
            self.advance()
        } else {
            Err(self.expected(kind))
        }
    }

    /// Consume an optional token.
    fn accept(&mut self, kind: TokenKind) -> Result<bool, ParseError> {
        if self.is_next(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    // =========================================================================
    // Positions and Errors
    // =========================================================================

    /// Start offset of the next node: the lookahead token.
    fn start(&self) -> usize {
        self.current.start
    }

    fn span_from(&self, start: usize) -> Span {
        Span::new(self.lexer.position(start), self.lexer.position(self.prev_end))
    }

    fn cursor(&self) -> Position {
        self.lexer.position(self.prev_end)
    }

    fn error(&self, kind: SyntaxErrorKind, message: String, hint: Option<&str>) -> ParseError {
        let position = self.cursor();
        ParseError::Syntax(SyntaxError {
            kind,
            message,
            line: self.lexer.line_text(position.line).to_string(),
            position,
            hint: hint.map(String::from),
        })
    }

    fn expected(&self, expected: TokenKind) -> ParseError {
        let found = self.peek();
        let message = if found == TokenKind::Eof {
            format!("Unexpected end of file, expecting {}", expected.display_name())
        } else {
            format!(
                "Unexpected token {}, expecting {}",
                found.display_name(),
                expected.display_name()
            )
        };
        self.error(
            SyntaxErrorKind::UnexpectedToken,
            message,
            hints::for_expected(expected, found),
        )
    }

    // =========================================================================
    // Top-Level Parsing
    // =========================================================================

    /// Parse the whole program into its root code block.
    pub fn parse(mut self) -> Result<Node, ParseError> {
        self.advance()?;

        let mut statements = Vec::new();
        while !self.is_next(TokenKind::Eof) {
            statements.push(self.parse_function()?);
        }

        let source = self.lexer.source();
        let span = Span::new(self.lexer.position(0), self.lexer.position(source.len()));
        Ok(Node::CodeBlock(CodeBlock { span, statements }))
    }

    fn parse_function(&mut self) -> Result<Node, ParseError> {
        let start = self.start();
        let is_extern = self.accept(TokenKind::Extern)?;

        if is_extern || self.is_next(TokenKind::Fun) {
            self.eat(TokenKind::Fun)?;
            let name = self.eat(TokenKind::Ident)?.lexeme;
            self.eat(TokenKind::LParen)?;
            let params = self.parse_params()?;
            self.eat(TokenKind::RParen)?;

            if is_extern {
                return Ok(Node::ExternFunction(ExternFunction {
                    span: self.span_from(start),
                    name,
                    params,
                }));
            }
            let body = self.parse_codeblock(true)?;
            return Ok(Node::Function(Function::new(self.span_from(start), name, params, body)));
        }

        Ok(Node::CodeBlock(self.parse_codeblock(false)?))
    }

    fn parse_params(&mut self) -> Result<Vec<Node>, ParseError> {
        let params = self.parse_arg_list()?;
        if params.iter().any(|p| p.as_ident().is_none()) {
            return Err(self.error(
                SyntaxErrorKind::InvalidParameter,
                "Function parameters must be names".to_string(),
                Some(hints::PARAMETER),
            ));
        }
        Ok(params)
    }

    // =========================================================================
    // Blocks and Statements
    // =========================================================================

    /// Parse `{ ... }`. Unless `force` is set, a single declaration without
    /// braces is accepted and wrapped in a one-statement block.
    fn parse_codeblock(&mut self, force: bool) -> Result<CodeBlock, ParseError> {
        let start = self.start();
        let statements = if self.accept(TokenKind::LBrace)? {
            let mut statements = Vec::new();
            while !self.is_next(TokenKind::RBrace) && !self.is_next(TokenKind::Eof) {
                statements.push(self.parse_statement()?);
            }
            self.eat(TokenKind::RBrace)?;
            statements
        } else if force {
            return Err(self.error(
                SyntaxErrorKind::MissingBraces,
                format!("Code block needs braces, found {}", self.peek().display_name()),
                Some(hints::MISSING_BRACES),
            ));
        } else {
            vec![self.parse_declaration()?]
        };

        Ok(CodeBlock { span: self.span_from(start), statements })
    }

    fn parse_statement(&mut self) -> Result<Node, ParseError> {
        let start = self.start();

        if self.accept(TokenKind::Return)? {
            let expr = self.parse_expression()?;
            return Ok(Node::Return(ReturnStatement {
                span: self.span_from(start),
                expr: Box::new(expr),
            }));
        }

        if self.accept(TokenKind::While)? {
            let condition = self.parse_expression()?;
            let body = self.parse_codeblock(false)?;
            return Ok(Node::While(While::new(self.span_from(start), condition, body)));
        }

        self.parse_declaration()
    }

    fn parse_declaration(&mut self) -> Result<Node, ParseError> {
        let start = self.start();
        if self.accept(TokenKind::Var)? {
            let ident = self.eat(TokenKind::Ident)?.lexeme;
            return Ok(Node::Declaration(Declaration { span: self.span_from(start), ident }));
        }
        self.parse_assignment()
    }

    fn parse_assignment(&mut self) -> Result<Node, ParseError> {
        let start = self.start();
        let left = self.parse_expression()?;

        if self.accept(TokenKind::Equals)? {
            let Node::Ident(target) = left else {
                return Err(self.error(
                    SyntaxErrorKind::InvalidAssignmentTarget,
                    "Invalid assignment target".to_string(),
                    Some(hints::ASSIGNMENT_TARGET),
                ));
            };
            let expr = self.parse_expression()?;
            return Ok(Node::Assignment(Assignment {
                span: self.span_from(start),
                ident: target.name,
                expr: Box::new(expr),
            }));
        }

        Ok(left)
    }

    // =========================================================================
    // Expressions (precedence ladder)
    // =========================================================================

    fn parse_expression(&mut self) -> Result<Node, ParseError> {
        if self.accept(TokenKind::LParen)? {
            let expr = self.parse_expression()?;
            self.eat(TokenKind::RParen)?;
            return Ok(expr);
        }
        self.parse_expr_add()
    }

    fn binary(&self, start: usize, left: Node, op: BinaryOperation, right: Node) -> Node {
        Node::BinaryOp(BinaryOp {
            span: self.span_from(start),
            left: Box::new(left),
            op,
            right: Box::new(right),
        })
    }

    fn parse_expr_add(&mut self) -> Result<Node, ParseError> {
        let start = self.start();
        let left = self.parse_expr_sub()?;
        if self.accept(TokenKind::Plus)? {
            let right = self.parse_expr_add()?;
            return Ok(self.binary(start, left, BinaryOperation::Add, right));
        }
        Ok(left)
    }

    fn parse_expr_sub(&mut self) -> Result<Node, ParseError> {
        let start = self.start();
        let left = self.parse_expr_mult()?;
        if self.accept(TokenKind::Minus)? {
            let right = self.parse_expr_add()?;
            return Ok(self.binary(start, left, BinaryOperation::Sub, right));
        }
        Ok(left)
    }

    fn parse_expr_mult(&mut self) -> Result<Node, ParseError> {
        let start = self.start();
        let left = self.parse_expr_div()?;
        if self.accept(TokenKind::Star)? {
            let right = self.parse_expr_mult()?;
            return Ok(self.binary(start, left, BinaryOperation::Mult, right));
        }
        Ok(left)
    }

    fn parse_expr_div(&mut self) -> Result<Node, ParseError> {
        let start = self.start();
        let left = self.parse_expr_power()?;
        if self.accept(TokenKind::Slash)? {
            let right = self.parse_expr_mult()?;
            return Ok(self.binary(start, left, BinaryOperation::Div, right));
        }
        Ok(left)
    }

    fn parse_expr_power(&mut self) -> Result<Node, ParseError> {
        let start = self.start();
        let left = self.parse_function_call()?;
        if self.accept(TokenKind::Power)? {
            let right = self.parse_expr_power()?;
            return Ok(self.binary(start, left, BinaryOperation::Power, right));
        }
        Ok(left)
    }

    fn parse_function_call(&mut self) -> Result<Node, ParseError> {
        let start = self.start();
        let callee = self.parse_expr_unary()?;

        if self.accept(TokenKind::LParen)? {
            let Node::Ident(callee) = callee else {
                return Err(self.error(
                    SyntaxErrorKind::InvalidCallTarget,
                    "Invalid call target".to_string(),
                    Some(hints::CALL_TARGET),
                ));
            };
            let args = self.parse_arg_list()?;
            self.eat(TokenKind::RParen)?;
            return Ok(Node::FunctionCall(FunctionCall {
                span: self.span_from(start),
                name: callee.name,
                args,
            }));
        }

        Ok(callee)
    }

    fn parse_expr_unary(&mut self) -> Result<Node, ParseError> {
        let start = self.start();
        if self.accept(TokenKind::Not)? {
            let operand = self.parse_function_call()?;
            return Ok(Node::UnaryOp(UnaryOp {
                span: self.span_from(start),
                op: UnaryOperation::Not,
                operand: Box::new(operand),
            }));
        }
        self.parse_paren_or_value()
    }

    fn parse_paren_or_value(&mut self) -> Result<Node, ParseError> {
        if self.accept(TokenKind::LParen)? {
            let expr = self.parse_expression()?;
            self.eat(TokenKind::RParen)?;
            return Ok(expr);
        }
        self.parse_value()
    }

    fn parse_value(&mut self) -> Result<Node, ParseError> {
        let start = self.start();
        match self.peek() {
            TokenKind::Number => {
                let lexeme = self.advance()?.lexeme;
                let value = literal_value(&lexeme).ok_or_else(|| {
                    self.error(
                        SyntaxErrorKind::InvalidNumber,
                        format!("Invalid number literal '{}'", lexeme),
                        None,
                    )
                })?;
                Ok(Node::Value(Value { span: self.span_from(start), value }))
            }
            TokenKind::Ident => {
                let name = self.advance()?.lexeme;
                Ok(Node::Ident(Ident { span: self.span_from(start), name }))
            }
            found => Err(self.error(
                SyntaxErrorKind::ExpectedExpression,
                format!("Expected expression, found {}", found.display_name()),
                Some(hints::for_expression(found)),
            )),
        }
    }

    fn parse_arg_list(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut args = Vec::new();
        if self.is_next(TokenKind::RParen) {
            return Ok(args);
        }

        args.push(self.parse_expression()?);
        while self.accept(TokenKind::Comma)? {
            args.push(self.parse_expression()?);
        }
        Ok(args)
    }
}

/// Convert a number literal to its value. Decimal, fractional, hex (`0x`)
/// and octal (`0o`) shapes are all accepted. Values that overflow `f64`
/// are rejected.
fn literal_value(lexeme: &str) -> Option<f64> {
    let value = if let Some(hex) = lexeme.strip_prefix("0x") {
        radix_value(hex, 16)?
    } else if let Some(oct) = lexeme.strip_prefix("0o") {
        radix_value(oct, 8)?
    } else {
        lexeme.parse::<f64>().ok()?
    };
    value.is_finite().then_some(value)
}

fn radix_value(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// Any error that aborts a parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl ParseError {
    pub fn message(&self) -> &str {
        match self {
            ParseError::Lex(e) => &e.message,
            ParseError::Syntax(e) => &e.message,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            ParseError::Lex(e) => e.position,
            ParseError::Syntax(e) => e.position,
        }
    }

    /// Full text of the offending source line.
    pub fn line(&self) -> &str {
        match self {
            ParseError::Lex(e) => &e.line,
            ParseError::Syntax(e) => &e.line,
        }
    }
}

/// The parser found a token it did not expect, or a structural check failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub message: String,
    pub line: String,
    pub position: Position,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxErrorKind {
    /// A specific token (or end of file) was required.
    UnexpectedToken,
    /// A function body without `{`.
    MissingBraces,
    /// The left side of `=` is not a bare name.
    InvalidAssignmentTarget,
    /// The callee of `(...)` is not a bare name.
    InvalidCallTarget,
    /// A function parameter that is not a bare name.
    InvalidParameter,
    /// A number literal whose value cannot be represented.
    InvalidNumber,
    /// A token that cannot start an expression.
    ExpectedExpression,
}

#[cfg(test)]
mod tests {
    use super::literal_value;

    #[test]
    fn literal_values() {
        assert_eq!(literal_value("42"), Some(42.0));
        assert_eq!(literal_value("3.25"), Some(3.25));
        assert_eq!(literal_value("0x1F"), Some(31.0));
        assert_eq!(literal_value("0xff"), Some(255.0));
        assert_eq!(literal_value("0o17"), Some(15.0));
        assert_eq!(literal_value("0o777"), Some(511.0));
    }

    #[test]
    fn wide_literals_match_decimal() {
        assert_eq!(literal_value("0x10000000000000000"), Some(18446744073709551616.0));
        assert_eq!(literal_value("0o2000000000000000000000"), Some(18446744073709551616.0));
        assert_eq!(
            literal_value("0x10000000000000000"),
            literal_value("18446744073709551616")
        );
    }

    #[test]
    fn overflowing_literals_are_rejected() {
        assert_eq!(literal_value(&format!("0x{}", "f".repeat(300))), None);
        assert_eq!(literal_value(&format!("0o{}", "7".repeat(400))), None);
        assert_eq!(literal_value(&"9".repeat(400)), None);
        assert_eq!(literal_value("0x"), None);
    }
}
