// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! JSON diagnostic output for machine consumption.
//!
//! Use `--format json` with any eva command to get this output.

use serde::Serialize;

use crate::{codes::ErrorCodeRegistry, Diagnostic, Severity};

/// A complete JSON diagnostic report for one run.
#[derive(Debug, Serialize)]
pub struct DiagnosticReport {
    /// Schema version for forward compatibility.
    pub version: u32,
    /// The file that was processed.
    pub file: String,
    /// Whether the run succeeded (no errors).
    pub success: bool,
    /// The phase that produced these diagnostics.
    pub phase: String,
    pub diagnostics: Vec<JsonDiagnostic>,
    pub error_count: usize,
}

/// A single diagnostic in JSON form.
#[derive(Debug, Serialize)]
pub struct JsonDiagnostic {
    /// Severity: "error".
    pub severity: String,
    /// Error code (e.g., "E0100").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Error category (e.g., "Syntax").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// "lex" or "syntax".
    pub kind: String,
    pub message: String,
    pub location: SourceLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// The plain three-line caret rendering.
    pub rendered: String,
}

/// A source location with line/column (1-based).
#[derive(Debug, Serialize)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
    /// The source line text for context.
    pub source_line: String,
}

/// Convert diagnostics to a structured JSON report.
pub fn to_json_report(diagnostics: &[Diagnostic], file: &str, phase: &str) -> DiagnosticReport {
    let registry = ErrorCodeRegistry::default();
    let mut error_count = 0;

    let json_diags: Vec<JsonDiagnostic> = diagnostics
        .iter()
        .map(|d| {
            match d.severity {
                Severity::Error => error_count += 1,
            }
            to_json_diagnostic(d, &registry)
        })
        .collect();

    DiagnosticReport {
        version: 1,
        file: file.to_string(),
        success: error_count == 0,
        phase: phase.to_string(),
        diagnostics: json_diags,
        error_count,
    }
}

fn to_json_diagnostic(diag: &Diagnostic, registry: &ErrorCodeRegistry) -> JsonDiagnostic {
    let severity = match diag.severity {
        Severity::Error => "error",
    };
    let kind = match diag.kind {
        crate::DiagnosticKind::Lex => "lex",
        crate::DiagnosticKind::Syntax => "syntax",
    };

    let code = diag.code.as_ref().map(|c| c.0.clone());
    let category = code
        .as_ref()
        .and_then(|c| registry.get(c))
        .map(|info| info.category.to_string());

    JsonDiagnostic {
        severity: severity.to_string(),
        code,
        category,
        kind: kind.to_string(),
        message: diag.message.clone(),
        location: SourceLocation {
            line: diag.position.line,
            column: diag.position.col,
            source_line: diag.source_line.clone(),
        },
        hint: diag.hint.clone(),
        rendered: diag.render(),
    }
}

/// Serialize a diagnostic report to pretty JSON.
pub fn to_json_string(report: &DiagnosticReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToDiagnostic;

    #[test]
    fn failed_parse_report() {
        let err = eva_parser::parse("1(2)").unwrap_err();
        let report = to_json_report(&[err.to_diagnostic()], "call.eva", "parse");
        let value: serde_json::Value = serde_json::from_str(&to_json_string(&report)).unwrap();

        assert_eq!(value["version"], 1);
        assert_eq!(value["file"], "call.eva");
        assert_eq!(value["success"], false);
        assert_eq!(value["phase"], "parse");
        assert_eq!(value["error_count"], 1);

        let diag = &value["diagnostics"][0];
        assert_eq!(diag["severity"], "error");
        assert_eq!(diag["code"], "E0103");
        assert_eq!(diag["category"], "Syntax");
        assert_eq!(diag["kind"], "syntax");
        assert_eq!(diag["message"], "Invalid call target");
        assert_eq!(diag["location"]["line"], 1);
        assert_eq!(diag["location"]["column"], 3);
        assert_eq!(diag["location"]["source_line"], "1(2)");
    }

    #[test]
    fn empty_report_succeeds() {
        let report = to_json_report(&[], "ok.eva", "parse");
        assert!(report.success);
        assert_eq!(report.error_count, 0);
        let json = to_json_string(&report);
        assert!(json.contains("\"diagnostics\": []"));
    }
}
