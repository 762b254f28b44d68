//! actionreel - browser interaction recorder and replay code generator.

mod cli;
mod cmd_config;
mod cmd_export;
mod cmd_inspect;

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::debug;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use actionreel_config::{Config, ConfigLoader};
use actionreel_protocols::Action;

use cli::{Cli, Commands};

/// Get the actionreel data directory (~/.actionreel).
fn actionreel_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".actionreel")
}

/// Initialize tracing with console and file output.
///
/// Logs go to stderr so exported artifacts on stdout stay clean, and to a
/// daily rotated file under `~/.actionreel/debug/`.
fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = actionreel_dir().join("debug");
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("actionreel")
        .filename_suffix("log")
        .max_log_files(30)
        .build(&log_dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Keep the worker alive for the program duration.
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(true)
                .with_writer(std::io::stderr),
        )
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .init();

    Ok(())
}

/// Read a JSON action array from disk.
pub(crate) fn load_actions(path: &Path) -> Result<Vec<Action>, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    let actions: Vec<Action> = serde_json::from_str(&content)
        .map_err(|e| format!("Invalid action file {}: {}", path.display(), e))?;
    debug!("Loaded {} actions from {}", actions.len(), path.display());
    Ok(actions)
}

fn load_config(path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    let config = ConfigLoader::load_or_default(path)?;
    debug!("Configuration loaded from {}", path.display());
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            actions,
            format,
            strict,
            output,
        } => {
            let config = load_config(&cli.config)?;
            cmd_export::handle_export(&config, &actions, format, strict, output.as_deref())
        }
        Commands::Describe { actions } => cmd_inspect::handle_describe(&actions),
        Commands::Validate { actions } => cmd_inspect::handle_validate(&actions),
        Commands::Config { action } => cmd_config::handle_config_command(action, &cli.config),
    }
}
