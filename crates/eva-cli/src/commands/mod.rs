// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! CLI command implementations.

pub mod phase;

use std::fs;

use eva_diagnostics::json::{to_json_report, to_json_string};
use eva_diagnostics::{Diagnostic, DiagnosticFormatter};

use crate::config::{CliConfig, OutputFormat};
use crate::error::CliError;
use crate::output;

fn read_source(config: &CliConfig) -> Result<String, CliError> {
    fs::read_to_string(&config.input).map_err(|source| CliError::Read {
        path: config.input_name(),
        source,
    })
}

/// Write command output to `-o` or stdout.
fn emit(config: &CliConfig, text: &str) -> Result<(), CliError> {
    match config.output {
        Some(ref path) => fs::write(path, text).map_err(|source| CliError::Write {
            path: path.display().to_string(),
            source,
        }),
        None => {
            print!("{}", text);
            Ok(())
        }
    }
}

/// Print a failed run to the right stream in the requested format.
pub fn report(config: &CliConfig, error: &CliError) {
    match error {
        CliError::Rejected(diag) => show_diagnostic(config, diag),
        CliError::Read { path, source } => {
            eprintln!("{}: reading {}: {}", output::error_label(), output::file_path(path), source);
        }
        CliError::Write { path, source } => {
            eprintln!("{}: writing {}: {}", output::error_label(), output::file_path(path), source);
        }
        other => eprintln!("{}: {}", output::error_label(), other),
    }
}

fn show_diagnostic(config: &CliConfig, diag: &Diagnostic) {
    let phase = diag.kind.phase();
    match config.format {
        OutputFormat::Json => {
            let report = to_json_report(std::slice::from_ref(diag), &config.input_name(), phase);
            println!("{}", to_json_string(&report));
        }
        OutputFormat::Human if config.verbose => {
            let file = config.input_name();
            let formatter = DiagnosticFormatter::new().with_file_name(&file);
            eprint!("{}", formatter.format(diag));
            let title = if phase == "lex" { "Lex" } else { "Parse" };
            eprintln!("\n{}", output::banner_fail(title, 1));
        }
        OutputFormat::Human => eprintln!("{}", diag.render()),
    }
}
