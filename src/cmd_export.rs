//! Export subcommand handler.

use std::path::Path;

use tracing::{info, warn};

use actionreel_codegen::{ScriptGenerator, ScriptOptions, Strictness, commands_json};
use actionreel_config::Config;
use actionreel_protocols::Action;

use crate::cli::ExportFormat;
use crate::load_actions;

/// Handle `actionreel export`.
pub(crate) fn handle_export(
    config: &Config,
    actions_path: &Path,
    format: ExportFormat,
    strict: bool,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let actions = load_actions(actions_path)?;
    let rendered = render(config, &actions, format, strict)?;

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            info!("Exported {} actions to {}", actions.len(), path.display());
            println!("Wrote {}", path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

/// Render `actions` in the requested format.
fn render(
    config: &Config,
    actions: &[Action],
    format: ExportFormat,
    strict: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    match format {
        ExportFormat::Commands => {
            let mut json = commands_json(actions)?;
            json.push('\n');
            Ok(json)
        }
        ExportFormat::Script => {
            let mut options = ScriptOptions::from_config(&config.codegen)?;
            if strict {
                options = options.with_strictness(Strictness::FailFast);
            }
            let script = ScriptGenerator::new(options).generate(actions)?;
            for warning in &script.warnings {
                warn!("{}", warning);
            }
            Ok(script.source)
        }
    }
}
