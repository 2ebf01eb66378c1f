// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Error hints - suggestions for fixing common mistakes.
//!
//! Kept separate from the main parser to avoid clutter.

use eva_ast::token::TokenKind;

/// Get a hint for an "expected X" error based on context.
pub fn for_expected(expected: TokenKind, found: TokenKind) -> Option<&'static str> {
    match (expected, found) {
        // Block hints
        (TokenKind::RBrace, _) => Some("every '{' needs a matching '}'"),

        // Parentheses hints
        (TokenKind::LParen, _) => Some("function names are followed by '(' and a parameter list"),
        (TokenKind::RParen, TokenKind::Eof) => Some("add ')' to close the parenthesis"),
        (TokenKind::RParen, _) => Some("separate arguments with ','"),

        // Name/identifier hints
        (TokenKind::Ident, TokenKind::Number) => Some("names can't start with a number"),
        (TokenKind::Ident, found) if is_keyword(found) => Some("keywords can't be used as names"),
        (TokenKind::Ident, _) => Some("names start with a letter or '_'"),

        // Declaration hints
        (TokenKind::Fun, _) => Some("'extern' must be followed by 'fun' and a function header"),

        _ => None,
    }
}

/// Hint for a token that cannot start an expression.
pub fn for_expression(found: TokenKind) -> &'static str {
    match found {
        TokenKind::Eof => "statement is incomplete",
        TokenKind::Equals => "put the value after '='",
        TokenKind::While | TokenKind::Return => "'while' and 'return' are only allowed inside '{ }'",
        _ => "try a number, a name, or a function call",
    }
}

pub const MISSING_BRACES: &str = "function bodies start with '{'";
pub const ASSIGNMENT_TARGET: &str = "only a plain name can be assigned to";
pub const CALL_TARGET: &str = "only a plain name can be called";
pub const PARAMETER: &str = "parameters are plain names, like 'fun f(a, b)'";

fn is_keyword(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Var
            | TokenKind::Fun
            | TokenKind::While
            | TokenKind::Return
            | TokenKind::Extern
            | TokenKind::Not
    )
}
