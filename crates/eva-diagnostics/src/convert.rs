// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Conversions from front-end error types to `Diagnostic`.

use eva_lexer::LexError;
use eva_parser::{ParseError, SyntaxError};

use crate::codes;
use crate::{Diagnostic, DiagnosticKind, ToDiagnostic};

// ============================================================================
// Lex Errors
// ============================================================================

impl ToDiagnostic for LexError {
    fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(DiagnosticKind::Lex, &self.message, self.position, &self.line)
            .with_code(codes::LEX_ERROR)
    }
}

// ============================================================================
// Parse Errors
// ============================================================================

impl ToDiagnostic for SyntaxError {
    fn to_diagnostic(&self) -> Diagnostic {
        let mut diag =
            Diagnostic::error(DiagnosticKind::Syntax, &self.message, self.position, &self.line)
                .with_code(codes::for_syntax(self.kind));

        if let Some(ref hint) = self.hint {
            diag = diag.with_hint(hint.as_str());
        }

        diag
    }
}

impl ToDiagnostic for ParseError {
    fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ParseError::Lex(e) => e.to_diagnostic(),
            ParseError::Syntax(e) => e.to_diagnostic(),
        }
    }
}
