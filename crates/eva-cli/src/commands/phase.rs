// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Front-end phase commands: lex, parse.

use eva_diagnostics::ToDiagnostic;
use eva_lexer::Lexer;

use super::{emit, read_source};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::output;

pub fn cmd_lex(config: &CliConfig) -> Result<(), CliError> {
    let source = read_source(config)?;

    let tokens = Lexer::new(&source)
        .tokenize()
        .map_err(|e| CliError::from(e.to_diagnostic()))?;

    let mut out = String::new();
    for tok in &tokens {
        out.push_str(&format!("{}:{} {:?} '{}'\n", tok.start, tok.end, tok.kind, tok.lexeme));
    }
    emit(config, &out)?;

    if config.verbose {
        eprintln!("{}", output::banner_count("Lexed", tokens.len(), "tokens"));
    }
    Ok(())
}

pub fn cmd_parse(config: &CliConfig) -> Result<(), CliError> {
    let source = read_source(config)?;

    let root = eva_parser::parse(&source).map_err(|e| CliError::from(e.to_diagnostic()))?;

    if config.verbose {
        eprintln!("{}", output::banner_ok("Parse"));
    }

    // Code generation lives downstream of the front end.
    if config.assembly {
        return Err(CliError::AssemblyUnsupported);
    }

    emit(config, &root.to_string())
}
