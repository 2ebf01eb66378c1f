// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Help text for CLI commands.

use crate::output;

pub fn print_usage() {
    println!(
        "{} {} - front end for the EVA language",
        output::title("eva"),
        output::version(env!("CARGO_PKG_VERSION"))
    );
    println!();
    println!(
        "{}: {} {} {} {}",
        output::section_header("Usage"),
        output::command("eva"),
        output::arg("[command]"),
        output::arg("<input>"),
        output::arg("[options]")
    );
    println!();
    println!("{}", output::section_header("Commands:"));
    println!("  {} {}    Parse a file and print the AST (default)", output::command("parse"), output::arg("<input>"));
    println!("  {} {}      Tokenize a file and print tokens", output::command("lex"), output::arg("<input>"));
    println!("  {}             Show this help", output::command("help"));
    println!("  {}          Show version", output::command("version"));

    println!();
    println!("{}", output::section_header("Options:"));
    println!("  {} {}            Write output to a file instead of stdout", output::arg("-o"), output::arg("<output>"));
    println!("  {}                     Output EVA assembly (not supported yet)", output::arg("-S"));
    println!("  {} {} Diagnostic format: human or json", output::arg("--format"), output::arg("<fmt>"));
    println!("  {}                     Show progress and detailed diagnostics", output::arg("-v"));
}
