// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Command-line configuration.
//!
//! Built once from the argument list and the color environment variables.

use std::path::PathBuf;

use crate::error::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Lex,
    Parse,
    Help,
    Version,
}

/// How diagnostics are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

impl OutputFormat {
    fn from_name(name: &str) -> Result<Self, CliError> {
        match name {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::Usage(format!(
                "unknown format '{}', expected 'human' or 'json'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Let `colored` decide from the terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// NO_COLOR wins over FORCE_COLOR.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var_os("NO_COLOR").is_some(),
            std::env::var_os("FORCE_COLOR").is_some(),
        )
    }

    fn from_vars(no_color: bool, force_color: bool) -> Self {
        if no_color {
            ColorMode::Never
        } else if force_color {
            ColorMode::Always
        } else {
            ColorMode::Auto
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub command: Command,
    pub input: PathBuf,
    /// Write results here instead of stdout.
    pub output: Option<PathBuf>,
    /// `-S`: assembly output requested.
    pub assembly: bool,
    pub format: OutputFormat,
    /// `-v`: progress banners and rich diagnostics on stderr.
    pub verbose: bool,
    pub color: ColorMode,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            command: Command::Parse,
            input: PathBuf::new(),
            output: None,
            assembly: false,
            format: OutputFormat::default(),
            verbose: false,
            color: ColorMode::default(),
        }
    }
}

impl CliConfig {
    /// Parse the arguments after the program name.
    pub fn from_args<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = CliConfig {
            color: ColorMode::from_env(),
            ..CliConfig::default()
        };
        let mut input: Option<String> = None;
        let mut command_seen = false;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "help" | "--help" | "-h" if input.is_none() => {
                    config.command = Command::Help;
                    return Ok(config);
                }
                "version" | "--version" | "-V" if input.is_none() => {
                    config.command = Command::Version;
                    return Ok(config);
                }
                "lex" if !command_seen && input.is_none() => {
                    config.command = Command::Lex;
                    command_seen = true;
                }
                "parse" if !command_seen && input.is_none() => {
                    config.command = Command::Parse;
                    command_seen = true;
                }
                "-o" => {
                    let path = args
                        .next()
                        .ok_or_else(|| CliError::Usage("-o requires an output path".into()))?;
                    config.output = Some(PathBuf::from(path));
                }
                "-S" => config.assembly = true,
                "-v" | "--verbose" => config.verbose = true,
                "--json" => config.format = OutputFormat::Json,
                "--format" => {
                    let name = args
                        .next()
                        .ok_or_else(|| CliError::Usage("--format requires a value".into()))?;
                    config.format = OutputFormat::from_name(&name)?;
                }
                flag if flag.starts_with("--format=") => {
                    config.format = OutputFormat::from_name(&flag["--format=".len()..])?;
                }
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(CliError::Usage(format!("unknown option '{}'", flag)));
                }
                _ => {
                    if input.is_some() {
                        return Err(CliError::Usage(format!("unexpected argument '{}'", arg)));
                    }
                    input = Some(arg);
                }
            }
        }

        let input = input.ok_or_else(|| CliError::Usage("missing input file".into()))?;
        config.input = PathBuf::from(input);
        Ok(config)
    }

    /// Input path as shown in messages and reports.
    pub fn input_name(&self) -> String {
        self.input.display().to_string()
    }
}
