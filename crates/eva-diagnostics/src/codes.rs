// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Error code registry.
//!
//! Maps error codes (E0001, E0100, etc.) to titles and categories.
//! Used for the JSON report and error display.

use std::collections::HashMap;

use eva_parser::SyntaxErrorKind;

/// Code for input no token rule matches.
pub const LEX_ERROR: &str = "E0001";

/// Registry of all known error codes.
pub struct ErrorCodeRegistry {
    codes: HashMap<&'static str, ErrorCodeInfo>,
}

/// Information about a single error code.
#[derive(Debug)]
pub struct ErrorCodeInfo {
    pub code: &'static str,
    pub title: &'static str,
    pub category: ErrorCategory,
}

/// Error category for grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lexical,
    Syntax,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Lexical => write!(f, "Lexical"),
            ErrorCategory::Syntax => write!(f, "Syntax"),
        }
    }
}

macro_rules! register_codes {
    ($($code:expr => ($title:literal, $cat:expr)),* $(,)?) => {{
        let mut map = HashMap::new();
        $(
            map.insert($code, ErrorCodeInfo {
                code: $code,
                title: $title,
                category: $cat,
            });
        )*
        map
    }};
}

impl Default for ErrorCodeRegistry {
    fn default() -> Self {
        use ErrorCategory::*;

        Self {
            codes: register_codes! {
                // Lexer errors (E00xx)
                LEX_ERROR => ("unexpected character", Lexical),

                // Parser errors (E01xx)
                "E0100" => ("unexpected token", Syntax),
                "E0101" => ("code block needs braces", Syntax),
                "E0102" => ("invalid assignment target", Syntax),
                "E0103" => ("invalid call target", Syntax),
                "E0104" => ("invalid function parameter", Syntax),
                "E0105" => ("invalid number literal", Syntax),
                "E0106" => ("expected expression", Syntax),
            },
        }
    }
}

impl ErrorCodeRegistry {
    pub fn get(&self, code: &str) -> Option<&ErrorCodeInfo> {
        self.codes.get(code)
    }

    pub fn all(&self) -> impl Iterator<Item = &ErrorCodeInfo> {
        self.codes.values()
    }
}

/// The code reported for each kind of syntax error.
pub fn for_syntax(kind: SyntaxErrorKind) -> &'static str {
    match kind {
        SyntaxErrorKind::UnexpectedToken => "E0100",
        SyntaxErrorKind::MissingBraces => "E0101",
        SyntaxErrorKind::InvalidAssignmentTarget => "E0102",
        SyntaxErrorKind::InvalidCallTarget => "E0103",
        SyntaxErrorKind::InvalidParameter => "E0104",
        SyntaxErrorKind::InvalidNumber => "E0105",
        SyntaxErrorKind::ExpectedExpression => "E0106",
    }
}
