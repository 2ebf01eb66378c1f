// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Terminal rendering for diagnostics.
//!
//! The plain form is three lines:
//!
//! ```text
//! Unexpected token 'var', expecting 'fun'
//! 1| extern var
//!          ^
//! ```
//!
//! The colored form adds a `severity[code]` header, a file location, and the
//! hint as a footer.

use colored::Colorize;

use eva_ast::Position;

use crate::{Diagnostic, Severity};

/// Render the plain caret diagnostic.
///
/// The caret line holds `col + digits(line)` spaces, so it lines up with the
/// `"<line>| "` prefix of the source line above it. No trailing newline.
pub fn render_caret(message: &str, source_line: &str, position: Position) -> String {
    let line_str = position.line.to_string();
    let pad = position.col + line_str.len();
    format!("{}\n{}| {}\n{}^", message, line_str, source_line, " ".repeat(pad))
}

/// Formats diagnostics for terminal output.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticFormatter<'a> {
    file_name: Option<&'a str>,
}

impl<'a> DiagnosticFormatter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file_name(mut self, name: &'a str) -> Self {
        self.file_name = Some(name);
        self
    }

    pub fn format(&self, diagnostic: &Diagnostic) -> String {
        let mut out = String::new();

        self.format_header(&mut out, diagnostic);

        if let Some(file) = self.file_name {
            out.push_str(&format!(
                "  {} {}:{}\n",
                "-->".blue(),
                file,
                diagnostic.position
            ));
        }

        // Same geometry as `render_caret`, with the gutter colored.
        let line_str = diagnostic.position.line.to_string();
        out.push_str(&format!(
            "{}{} {}\n",
            line_str.blue().bold(),
            "|".blue(),
            diagnostic.source_line
        ));
        let pad = diagnostic.position.col + line_str.len();
        out.push_str(&format!("{}{}\n", " ".repeat(pad), "^".red().bold()));

        self.format_footer(&mut out, diagnostic);
        out
    }

    fn format_header(&self, out: &mut String, diagnostic: &Diagnostic) {
        let severity_str = match diagnostic.severity {
            Severity::Error => "error".red().bold(),
        };

        if let Some(ref code) = diagnostic.code {
            out.push_str(&format!(
                "{}[{}]: {}\n",
                severity_str,
                code.0.clone().red().bold(),
                diagnostic.message.bold()
            ));
        } else {
            out.push_str(&format!("{}: {}\n", severity_str, diagnostic.message.bold()));
        }
    }

    fn format_footer(&self, out: &mut String, diagnostic: &Diagnostic) {
        if let Some(ref hint) = diagnostic.hint {
            out.push_str(&format!("  {} {}: {}\n", "=".cyan(), "help".cyan().bold(), hint));
        }
    }
}
