//! Agent command list.
//!
//! One `browser_action` tool call per action, in order. Every field the
//! action carries is passed through, so the list can be turned back into
//! the same sequence.

use actionreel_protocols::{Action, CodegenError, Coordinates, ExtractType};
use serde::{Deserialize, Serialize};

const TOOL_NAME: &str = "browser_action";

/// One tool call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowserCommand {
    pub tool: String,
    pub args: CommandArgs,
}

/// Arguments of a `browser_action` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandArgs {
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xpath: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extract_type: Option<ExtractType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub js_code: Option<String>,
}

impl From<&Action> for BrowserCommand {
    fn from(action: &Action) -> Self {
        Self {
            tool: TOOL_NAME.to_string(),
            args: CommandArgs {
                action: action.action_type.as_str().to_string(),
                selector: action.selector.clone(),
                xpath: action.xpath.clone(),
                value: action.value.clone(),
                coordinates: action.coordinates,
                prompt: action.prompt.clone(),
                output_key: action.output_key.clone(),
                variable_name: action.variable_name.clone(),
                extract_type: action.extract_type,
                attribute_name: action.attribute_name.clone(),
                js_code: action.js_code.clone(),
            },
        }
    }
}

pub fn to_commands(actions: &[Action]) -> Vec<BrowserCommand> {
    actions.iter().map(BrowserCommand::from).collect()
}

/// Pretty-printed JSON array of [`to_commands`].
pub fn commands_json(actions: &[Action]) -> Result<String, CodegenError> {
    Ok(serde_json::to_string_pretty(&to_commands(actions))?)
}
