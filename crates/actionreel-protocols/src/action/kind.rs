//! Closed action vocabulary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Every kind of step a recording can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Navigate,
    Click,
    Fill,
    Press,
    Select,
    Check,
    Uncheck,
    Scroll,
    Hover,
    /// Generic text extraction authored in the editor.
    Extract,
    ExtractText,
    ExtractHtml,
    ExtractAttribute,
    /// Code produced by the AI bridge.
    ExecuteJs,
    /// Editor-only: extract with an external AI helper at replay time.
    AiExtract,
    /// Editor-only: fill a field with AI-generated content at replay time.
    AiFill,
}

impl ActionType {
    /// All action types in vocabulary order.
    pub const ALL: [ActionType; 16] = [
        ActionType::Navigate,
        ActionType::Click,
        ActionType::Fill,
        ActionType::Press,
        ActionType::Select,
        ActionType::Check,
        ActionType::Uncheck,
        ActionType::Scroll,
        ActionType::Hover,
        ActionType::Extract,
        ActionType::ExtractText,
        ActionType::ExtractHtml,
        ActionType::ExtractAttribute,
        ActionType::ExecuteJs,
        ActionType::AiExtract,
        ActionType::AiFill,
    ];

    /// Wire name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Navigate => "navigate",
            ActionType::Click => "click",
            ActionType::Fill => "fill",
            ActionType::Press => "press",
            ActionType::Select => "select",
            ActionType::Check => "check",
            ActionType::Uncheck => "uncheck",
            ActionType::Scroll => "scroll",
            ActionType::Hover => "hover",
            ActionType::Extract => "extract",
            ActionType::ExtractText => "extract_text",
            ActionType::ExtractHtml => "extract_html",
            ActionType::ExtractAttribute => "extract_attribute",
            ActionType::ExecuteJs => "execute_js",
            ActionType::AiExtract => "ai_extract",
            ActionType::AiFill => "ai_fill",
        }
    }

    /// Whether the step needs a selector or xpath to be replayable.
    pub fn requires_target(&self) -> bool {
        !matches!(
            self,
            ActionType::Navigate
                | ActionType::Scroll
                | ActionType::Press
                | ActionType::ExecuteJs
                | ActionType::AiExtract
        )
    }

    /// Whether the step stores a value under a variable name.
    pub fn is_extraction(&self) -> bool {
        matches!(
            self,
            ActionType::Extract
                | ActionType::ExtractText
                | ActionType::ExtractHtml
                | ActionType::ExtractAttribute
                | ActionType::ExecuteJs
                | ActionType::AiExtract
        )
    }

    /// Whether the step only exists as an editor draft before compilation.
    pub fn is_synthetic(&self) -> bool {
        matches!(
            self,
            ActionType::Extract | ActionType::AiExtract | ActionType::AiFill
        )
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown action type: {}", s))
    }
}

/// What an extract step reads from its element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractType {
    #[default]
    Text,
    Html,
    Attribute,
}

impl ExtractType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractType::Text => "text",
            ExtractType::Html => "html",
            ExtractType::Attribute => "attribute",
        }
    }

    /// The concrete action type recorded for this extraction.
    pub fn action_type(&self) -> ActionType {
        match self {
            ExtractType::Text => ActionType::ExtractText,
            ExtractType::Html => ActionType::ExtractHtml,
            ExtractType::Attribute => ActionType::ExtractAttribute,
        }
    }
}

impl FromStr for ExtractType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ExtractType::Text),
            "html" => Ok(ExtractType::Html),
            "attribute" => Ok(ExtractType::Attribute),
            other => Err(format!("unknown extract type: {}", other)),
        }
    }
}
