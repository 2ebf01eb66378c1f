// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Abstract Syntax Tree types for the EVA front end.
//!
//! This crate defines the source positions, tokens, and AST nodes shared
//! between the lexer, parser, and diagnostics.

pub mod span;
pub mod token;
pub mod node;
mod display;
mod visit;

pub use node::{BinaryOperation, Node, UnaryOperation};
pub use span::{LineMap, Position, Span};
