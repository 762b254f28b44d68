//! CLI definitions for actionreel.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// actionreel CLI.
#[derive(Parser)]
#[command(name = "actionreel")]
#[command(about = "Browser interaction recorder and replay code generator")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Export a recorded action sequence
    Export {
        /// JSON file holding the action array
        actions: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Script)]
        format: ExportFormat,

        /// Fail on the first invalid action instead of skipping it
        #[arg(long)]
        strict: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a numbered description with locator hints
    Describe {
        /// JSON file holding the action array
        actions: PathBuf,
    },

    /// Check every action against the editor rules
    Validate {
        /// JSON file holding the action array
        actions: PathBuf,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ExportFormat {
    /// `browser_action` tool-call list (JSON)
    Commands,
    /// Standalone Playwright for Python script
    Script,
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Load and validate the configuration file
    Check,

    /// Print the effective configuration as TOML
    Show,
}
