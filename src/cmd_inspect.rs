//! Describe and validate subcommand handlers.

use std::path::Path;

use tracing::info;

use actionreel_codegen::describe_actions;
use actionreel_protocols::{Action, validate_action};

use crate::load_actions;

/// Handle `actionreel describe`.
pub(crate) fn handle_describe(actions_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let actions = load_actions(actions_path)?;
    println!("{}", describe_actions(&actions));
    Ok(())
}

/// Handle `actionreel validate`.
pub(crate) fn handle_validate(actions_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let actions = load_actions(actions_path)?;
    let problems = find_problems(&actions);

    if problems.is_empty() {
        info!("All {} actions passed validation", actions.len());
        println!("{} actions, all valid.", actions.len());
        return Ok(());
    }

    for problem in &problems {
        println!("{}", problem);
    }
    Err(format!("{} of {} actions are invalid", problems.len(), actions.len()).into())
}

/// One line per invalid action, numbered from 1.
fn find_problems(actions: &[Action]) -> Vec<String> {
    actions
        .iter()
        .enumerate()
        .filter_map(|(i, action)| {
            validate_action(action)
                .err()
                .map(|e| format!("{}. {}: {}", i + 1, action.action_type, e))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actionreel_protocols::ActionType;

    #[test]
    fn test_find_problems_numbers_from_one() {
        let actions = vec![
            Action::navigate("https://example.com"),
            Action::new(ActionType::Click),
            Action::new(ActionType::Press).with_value("Enter"),
            Action::new(ActionType::ExecuteJs),
        ];
        let problems = find_problems(&actions);
        assert_eq!(problems.len(), 2);
        assert!(problems[0].starts_with("2. click: "));
        assert!(problems[1].starts_with("4. execute_js: "));
    }

    #[test]
    fn test_validate_rejects_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rec.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = handle_validate(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid action file"));
    }
}
