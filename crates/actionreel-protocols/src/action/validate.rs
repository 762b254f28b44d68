//! Replayability rules per action type.

use super::kind::ActionType;
use super::model::Action;
use crate::error::EditError;

/// Check the fields `action`'s type depends on.
pub fn validate_action(action: &Action) -> Result<(), EditError> {
    let filled = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
    let kind = action.action_type;

    // A click can replay at its recorded point.
    let has_point = kind == ActionType::Click && action.coordinates.is_some();
    if kind.requires_target() && action.target().is_none() && !has_point {
        return Err(EditError::validation(
            "selector",
            format!("{} needs a selector or xpath", kind),
        ));
    }
    match kind {
        ActionType::Navigate | ActionType::Press if !filled(&action.value) => Err(
            EditError::validation("value", format!("{} needs a value", kind)),
        ),
        ActionType::ExtractAttribute if !filled(&action.attribute_name) => Err(
            EditError::validation("attribute_name", "extract_attribute needs an attribute name"),
        ),
        ActionType::ExecuteJs if !filled(&action.js_code) => Err(EditError::validation(
            "js_code",
            "execute_js needs JavaScript code",
        )),
        ActionType::AiExtract | ActionType::AiFill if !filled(&action.prompt) => Err(
            EditError::validation("prompt", format!("{} needs a prompt", kind)),
        ),
        _ => Ok(()),
    }
}
