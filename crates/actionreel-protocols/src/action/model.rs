//! The `Action` value.

use serde::{Deserialize, Serialize};

use super::kind::{ActionType, ExtractType};
use super::metadata::{Accessibility, ActionContext, Coordinates, Evidence, Intent};

/// One recorded or authored interaction step.
///
/// Actions are immutable values once stored; edits go through
/// [`ActionPatch`](super::ActionPatch) and produce a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub action_type: ActionType,

    /// CSS selector of the target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,

    /// XPath of the target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xpath: Option<String>,

    /// URL, typed text, key, option value, attribute snapshot or scroll offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub js_code: Option<String>,

    /// Instruction for the AI helper of synthetic steps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extract_type: Option<ExtractType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_name: Option<String>,

    /// Inner text snapshot of the target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Capture time in epoch milliseconds.
    #[serde(default)]
    pub timestamp: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<Accessibility>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<ActionContext>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<Evidence>,
}

impl Action {
    /// Create a bare action of the given type.
    pub fn new(action_type: ActionType) -> Self {
        Self {
            action_type,
            selector: None,
            xpath: None,
            value: None,
            attribute_name: None,
            variable_name: None,
            output_key: None,
            js_code: None,
            prompt: None,
            extract_type: None,
            coordinates: None,
            tag_name: None,
            text: None,
            timestamp: 0,
            intent: None,
            accessibility: None,
            context: None,
            evidence: None,
        }
    }

    /// A `navigate` step to `url`.
    pub fn navigate(url: impl Into<String>) -> Self {
        Self::new(ActionType::Navigate).with_value(url)
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    pub fn with_xpath(mut self, xpath: impl Into<String>) -> Self {
        self.xpath = Some(xpath.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_attribute_name(mut self, name: impl Into<String>) -> Self {
        self.attribute_name = Some(name.into());
        self
    }

    pub fn with_variable_name(mut self, name: impl Into<String>) -> Self {
        self.variable_name = Some(name.into());
        self
    }

    pub fn with_output_key(mut self, key: impl Into<String>) -> Self {
        self.output_key = Some(key.into());
        self
    }

    pub fn with_js_code(mut self, code: impl Into<String>) -> Self {
        self.js_code = Some(code.into());
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn with_extract_type(mut self, extract_type: ExtractType) -> Self {
        self.extract_type = Some(extract_type);
        self
    }

    pub fn with_coordinates(mut self, x: f64, y: f64) -> Self {
        self.coordinates = Some(Coordinates { x, y });
        self
    }

    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Primary locator: the CSS selector, else the XPath.
    pub fn target(&self) -> Option<&str> {
        non_empty(self.selector.as_deref()).or_else(|| non_empty(self.xpath.as_deref()))
    }

    /// Name the step stores its result under, if any.
    pub fn output_name(&self) -> Option<&str> {
        non_empty(self.variable_name.as_deref()).or_else(|| non_empty(self.output_key.as_deref()))
    }

    /// Recorded confidence, zero when absent.
    pub fn confidence(&self) -> f64 {
        self.evidence.map(|e| e.confidence).unwrap_or(0.0)
    }

    /// Parse a recorded sequence from JSON.
    pub fn list_from_json(json: &str) -> Result<Vec<Action>, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
