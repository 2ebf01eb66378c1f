// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Token definitions for the lexer.

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact matched source text.
    pub lexeme: String,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset just past the last character (the consumption offset).
    pub end: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, start: usize, end: usize) -> Self {
        Self { kind, lexeme: lexeme.into(), start, end }
    }

    /// The terminal end-of-input token, positioned at `offset`.
    pub fn eof(offset: usize) -> Self {
        Self::new(TokenKind::Eof, "", offset, offset)
    }
}

/// The kind of token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Unary operator
    Not,

    // Binary operators
    Power,
    Star,
    Slash,
    Plus,
    Minus,

    // Keywords
    Var,
    Fun,
    While,
    Return,
    Extern,

    // Identifier and literal
    Ident,
    Number,

    // Assignment and comparison
    Equals,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    // Delimiters
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,

    // Special
    Eof,
}

impl TokenKind {
    /// Returns a human-readable name for this token kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Not => "'not'",

            TokenKind::Power => "'**'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",

            TokenKind::Var => "'var'",
            TokenKind::Fun => "'fun'",
            TokenKind::While => "'while'",
            TokenKind::Return => "'return'",
            TokenKind::Extern => "'extern'",

            TokenKind::Ident => "a name",
            TokenKind::Number => "a number",

            TokenKind::Equals => "'='",
            TokenKind::Less => "'<'",
            TokenKind::LessEqual => "'<='",
            TokenKind::Greater => "'>'",
            TokenKind::GreaterEqual => "'>='",

            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::Comma => "','",

            TokenKind::Eof => "end of file",
        }
    }
}
