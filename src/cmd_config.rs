//! Config subcommand handlers.

use std::path::Path;

use tracing::warn;

use actionreel_config::{Config, ConfigLoader, ConfigValidator, ValidationResult};

use crate::cli::ConfigAction;

/// Handle config subcommands.
pub(crate) fn handle_config_command(
    action: ConfigAction,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Check => config_check(path),
        ConfigAction::Show => config_show(path),
    }
}

/// Load the file strictly and report validation findings.
fn config_check(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigLoader::load(path)?;
    let result = ConfigValidator::validate(&config)?;

    for line in report(&result) {
        println!("{}", line);
    }
    for warning in &result.warnings {
        warn!("{}: {}", warning.path, warning.message);
    }

    if result.is_valid() {
        println!("{} is valid.", path.display());
        Ok(())
    } else {
        Err(format!(
            "{} has {} configuration error(s)",
            path.display(),
            result.errors.len()
        )
        .into())
    }
}

/// Print the effective configuration, defaults included.
fn config_show(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config: Config = ConfigLoader::load_or_default(path)?;
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

fn report(result: &ValidationResult) -> Vec<String> {
    let errors = result
        .errors
        .iter()
        .map(|e| format!("error: {}: {}", e.path, e.message));
    let warnings = result
        .warnings
        .iter()
        .map(|w| format!("warning: {}: {}", w.path, w.message));
    errors.chain(warnings).collect()
}
