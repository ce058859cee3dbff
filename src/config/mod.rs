#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::{OutputFormat, Strategy};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::utils::{
    error::Result,
    validation::{validate_exclusive, validate_path, Validate},
};
#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "palindromic")]
#[command(about = "Find the longest palindromic substring, earliest occurrence first")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the longest palindromic substring of each input
    Find(FindArgs),
    /// Run the built-in scenarios through every strategy
    Check,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Args)]
pub struct FindArgs {
    /// Inputs to search; read from --file or stdin when omitted
    pub texts: Vec<String>,

    /// Read one input per line from this file
    #[arg(short, long)]
    pub file: Option<String>,

    #[arg(short, long, value_enum)]
    pub strategy: Option<Strategy>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(long, overrides_with = "no_pretty")]
    pub pretty: bool,

    /// Emit compact JSON Lines even if the config file asks for pretty output
    #[arg(long, overrides_with = "pretty")]
    pub no_pretty: bool,
}

#[cfg(feature = "cli")]
impl FindArgs {
    /// `None` when neither flag is given, so the config file decides.
    pub fn pretty_override(&self) -> Option<bool> {
        match (self.pretty, self.no_pretty) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        if let Command::Find(args) = &self.command {
            args.validate()?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
impl Validate for FindArgs {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.file {
            validate_path("file", path)?;
        }
        validate_exclusive("TEXTS", !self.texts.is_empty(), "--file", self.file.is_some())
    }
}

/// Effective search settings: command-line flags over config file over defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FindSettings {
    pub strategy: Strategy,
    pub format: OutputFormat,
    pub pretty: bool,
}

impl FindSettings {
    pub fn resolve(
        file: Option<&TomlConfig>,
        strategy: Option<Strategy>,
        format: Option<OutputFormat>,
        pretty: Option<bool>,
    ) -> Self {
        Self {
            strategy: strategy
                .or_else(|| file.and_then(TomlConfig::strategy))
                .unwrap_or_default(),
            format: format
                .or_else(|| file.and_then(TomlConfig::format))
                .unwrap_or_default(),
            pretty: pretty
                .or_else(|| file.and_then(TomlConfig::pretty))
                .unwrap_or(false),
        }
    }
}
