// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! The lexer implementation using logos.

use eva_ast::token::{Token, TokenKind};
use eva_ast::{LineMap, Position};
use logos::Logos;
use thiserror::Error;

/// Raw token type for logos. The derived DFA is the process-wide rule table.
///
/// Identifier-shaped runs are matched maximally and keywords win only on an
/// exact match, so `variable` is one name rather than `var` + `iable`.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[token("not")]
    Not,

    // === Operators ===
    #[token("**")]
    Power,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,

    // === Keywords ===
    #[token("var")]
    Var,
    #[token("fun")]
    Fun,
    #[token("while")]
    While,
    #[token("return")]
    Return,
    #[token("extern")]
    Extern,

    // === Identifier (keywords take priority on equal length) ===
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    // === Numbers: decimal / fractional, hex, octal ===
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    #[regex(r"0x[0-9A-Fa-f]+")]
    #[regex(r"0o[0-7]+")]
    Number,

    #[token("=")]
    Equals,
    #[token("<")]
    Less,
    #[token("<=")]
    LessEqual,
    #[token(">")]
    Greater,
    #[token(">=")]
    GreaterEqual,

    // === Delimiters ===
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
}

impl RawToken {
    fn kind(self) -> TokenKind {
        match self {
            RawToken::Not => TokenKind::Not,
            RawToken::Power => TokenKind::Power,
            RawToken::Star => TokenKind::Star,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Var => TokenKind::Var,
            RawToken::Fun => TokenKind::Fun,
            RawToken::While => TokenKind::While,
            RawToken::Return => TokenKind::Return,
            RawToken::Extern => TokenKind::Extern,
            RawToken::Ident => TokenKind::Ident,
            RawToken::Number => TokenKind::Number,
            RawToken::Equals => TokenKind::Equals,
            RawToken::Less => TokenKind::Less,
            RawToken::LessEqual => TokenKind::LessEqual,
            RawToken::Greater => TokenKind::Greater,
            RawToken::GreaterEqual => TokenKind::GreaterEqual,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::Comma => TokenKind::Comma,
        }
    }
}

/// The lexer for EVA source code.
///
/// A lazy, forward-only token sequence. End of input ends the iteration; the
/// first unmatched character yields one `Err` and the lexer is then exhausted.
pub struct Lexer<'src> {
    source: &'src str,
    line_map: LineMap,
    raw: logos::Lexer<'src, RawToken>,
    failed: bool,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            line_map: LineMap::new(source),
            raw: RawToken::lexer(source),
            failed: false,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn line_map(&self) -> &LineMap {
        &self.line_map
    }

    /// Resolve a byte offset to a line/column position.
    pub fn position(&self, offset: usize) -> Position {
        self.line_map.position(offset)
    }

    /// Text of a 1-based source line (empty if out of range).
    pub fn line_text(&self, line: usize) -> &'src str {
        self.line_map.line_text(self.source, line).unwrap_or("")
    }

    /// Byte offset just past the last token produced so far.
    pub fn consumed(&self) -> usize {
        self.raw.span().end
    }

    /// Tokenize the entire source, stopping at the first error.
    ///
    /// The returned tokens always end with an `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        for token in self.by_ref() {
            tokens.push(token?);
        }
        tokens.push(Token::eof(self.source.len()));
        Ok(tokens)
    }

    fn unmatched(&self, offset: usize) -> LexError {
        let ch = self.source[offset..].chars().next().unwrap_or('?');
        let position = self.position(offset);
        LexError {
            message: format!("Cannot lex input code: unexpected character '{}'", ch),
            line: self.line_text(position.line).to_string(),
            position,
            offset,
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let result = self.raw.next()?;
        let span = self.raw.span();
        match result {
            Ok(raw) => Some(Ok(Token::new(raw.kind(), self.raw.slice(), span.start, span.end))),
            Err(()) => {
                self.failed = true;
                Some(Err(self.unmatched(span.start)))
            }
        }
    }
}

/// No tokenizer rule matches at the current position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LexError {
    pub message: String,
    /// Full text of the offending source line.
    pub line: String,
    pub position: Position,
    /// Byte offset of the unmatched character.
    pub offset: usize,
}
