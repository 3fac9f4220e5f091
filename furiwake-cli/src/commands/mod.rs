//! CLI command implementations

use crate::input::InputFormat;
use crate::output::OutputFormat;
use anyhow::Result;
use clap::{Subcommand, ValueEnum};

pub mod annotate;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split dictionary entries into furigana segments
    Annotate(annotate::AnnotateArgs),

    /// Check entries and their furigana data for problems
    Validate(validate::ValidateArgs),

    /// Write a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List available input formats
    InputFormats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Annotate(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                for name in subcommand.names() {
                    println!("{name}");
                }
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Names of the listed components
    pub fn names(&self) -> Vec<&'static str> {
        match self {
            ListCommands::Formats => OutputFormat::value_variants()
                .iter()
                .map(OutputFormat::as_str)
                .collect(),
            ListCommands::InputFormats => InputFormat::value_variants()
                .iter()
                .map(InputFormat::as_str)
                .collect(),
        }
    }
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` takes precedence over the verbosity flags.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A second initialization (e.g. from tests) is harmless
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_names() {
        assert_eq!(ListCommands::Formats.names(), vec!["text", "json", "markdown"]);
        assert_eq!(ListCommands::InputFormats.names(), vec!["auto", "tsv", "jsonl"]);
    }

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Formats,
        };
        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Formats"));
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging(2, false);
        init_logging(0, false);
        init_logging(0, true);
    }
}
