// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! CLI output formatting with colors and styling.
//!
//! Respects NO_COLOR and FORCE_COLOR environment variables.
//! Colors are automatically disabled when output is piped.

use colored::{ColoredString, Colorize};

use crate::config::ColorMode;

/// Apply the color choice. Call once at startup.
pub fn init(mode: ColorMode) {
    match mode {
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Always => colored::control::set_override(true),
        // colored checks the terminal itself
        ColorMode::Auto => {}
    }
}

// === Error Output ===

pub fn error_label() -> ColoredString {
    "error".red().bold()
}

// === Progress Output ===

pub fn banner_ok(phase: &str) -> String {
    format!(
        "{} {} {}",
        "===".dimmed(),
        format!("{} OK", phase).green().bold(),
        "===".dimmed()
    )
}

pub fn banner_count(verb: &str, count: usize, noun: &str) -> String {
    format!(
        "{} {} {}",
        "===".dimmed(),
        format!("{} {} {}", verb, count, noun).green().bold(),
        "===".dimmed()
    )
}

pub fn banner_fail(phase: &str, count: usize) -> String {
    let msg = if count == 1 {
        format!("{} FAILED: 1 error", phase)
    } else {
        format!("{} FAILED: {} errors", phase, count)
    };
    format!("{} {} {}", "===".dimmed(), msg.red().bold(), "===".dimmed())
}

// === Help Output ===

pub fn title(name: &str) -> ColoredString {
    name.bold()
}

pub fn version(v: &str) -> ColoredString {
    v.dimmed()
}

pub fn section_header(header: &str) -> ColoredString {
    header.yellow().bold()
}

pub fn command(name: &str) -> ColoredString {
    name.green()
}

pub fn arg(name: &str) -> ColoredString {
    name.cyan()
}

// === Decorations ===

pub fn file_path(path: &str) -> ColoredString {
    path.underline()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_banners() {
        colored::control::set_override(false);
        assert_eq!(banner_ok("Parse"), "=== Parse OK ===");
        assert_eq!(banner_count("Lexed", 3, "tokens"), "=== Lexed 3 tokens ===");
        assert_eq!(banner_fail("Parse", 1), "=== Parse FAILED: 1 error ===");
        assert_eq!(banner_fail("Lex", 2), "=== Lex FAILED: 2 errors ===");
    }
}
