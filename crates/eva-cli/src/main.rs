// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! EVA CLI - lexer and parser front end.

mod commands;
mod config;
mod error;
mod help;
mod output;

use std::env;
use std::process;

use config::{CliConfig, ColorMode, Command};

fn main() {
    let config = match CliConfig::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            output::init(ColorMode::from_env());
            eprintln!("{}: {}", output::error_label(), e);
            eprintln!();
            help::print_usage();
            process::exit(e.exit_code());
        }
    };
    output::init(config.color);

    let result = match config.command {
        Command::Help => {
            help::print_usage();
            Ok(())
        }
        Command::Version => {
            println!("eva {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Lex => commands::phase::cmd_lex(&config),
        Command::Parse => commands::phase::cmd_parse(&config),
    };

    if let Err(e) = result {
        commands::report(&config, &e);
        process::exit(e.exit_code());
    }
}
