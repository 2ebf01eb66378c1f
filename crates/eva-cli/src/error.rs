// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Errors that end a CLI run.

use std::io;

use eva_diagnostics::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Bad or missing arguments.
    #[error("{0}")]
    Usage(String),

    #[error("reading {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("writing {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The source failed to lex or parse.
    #[error("{}", .0.message)]
    Rejected(Box<Diagnostic>),

    #[error("assembly output is not supported")]
    AssemblyUnsupported,
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::AssemblyUnsupported => 2,
            _ => 1,
        }
    }
}

impl From<Diagnostic> for CliError {
    fn from(diag: Diagnostic) -> Self {
        CliError::Rejected(Box::new(diag))
    }
}
