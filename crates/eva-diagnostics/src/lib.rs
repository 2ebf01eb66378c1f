// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! EVA front-end diagnostics.
//!
//! Provides a single diagnostic type for every error the front end can raise.
//! Lexer and parser errors are converted to `Diagnostic` via the
//! `ToDiagnostic` trait, keeping those crates free of rendering concerns.

pub mod codes;
pub mod convert;
pub mod formatter;
pub mod json;

pub use formatter::{render_caret, DiagnosticFormatter};

use eva_ast::Position;
use serde::Serialize;

// ============================================================================
// Core Types
// ============================================================================

/// A front-end diagnostic: what went wrong and where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: Option<ErrorCode>,
    pub kind: DiagnosticKind,
    pub message: String,
    pub position: Position,
    /// Full text of the offending source line.
    pub source_line: String,
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
}

/// Which stage rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticKind {
    /// No token rule matched.
    Lex,
    /// The token stream does not fit the grammar.
    Syntax,
}

impl DiagnosticKind {
    pub fn phase(self) -> &'static str {
        match self {
            DiagnosticKind::Lex => "lex",
            DiagnosticKind::Syntax => "parse",
        }
    }
}

/// An error code like E0100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorCode(pub String);

// ============================================================================
// Builder API
// ============================================================================

impl Diagnostic {
    pub fn error(
        kind: DiagnosticKind,
        message: impl Into<String>,
        position: Position,
        source_line: impl Into<String>,
    ) -> Self {
        Self {
            severity: Severity::Error,
            code: None,
            kind,
            message: message.into(),
            position,
            source_line: source_line.into(),
            hint: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(ErrorCode(code.into()));
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// The plain three-line caret rendering, without a trailing newline.
    pub fn render(&self) -> String {
        render_caret(&self.message, &self.source_line, self.position)
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

// ============================================================================
// Conversion Trait
// ============================================================================

/// Convert a front-end error into a diagnostic.
pub trait ToDiagnostic {
    fn to_diagnostic(&self) -> Diagnostic;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let diag = Diagnostic::error(DiagnosticKind::Syntax, "Invalid call target", Position::new(1, 3), "1(2)")
            .with_code("E0103")
            .with_hint("only a plain name can be called");
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.code, Some(ErrorCode("E0103".into())));
        assert_eq!(diag.hint.as_deref(), Some("only a plain name can be called"));
        assert_eq!(diag.kind.phase(), "parse");
    }

    #[test]
    fn display_matches_render() {
        let diag = Diagnostic::error(DiagnosticKind::Lex, "bad", Position::new(1, 2), "a$");
        assert_eq!(diag.to_string(), diag.render());
        assert_eq!(diag.render(), "bad\n1| a$\n   ^");
    }
}
