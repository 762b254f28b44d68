//! Copy-on-write edits to an action.

use super::kind::{ActionType, ExtractType};
use super::model::Action;

/// A partial edit. Unset fields are left alone; string fields set to an
/// empty value are cleared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionPatch {
    pub action_type: Option<ActionType>,
    pub selector: Option<String>,
    pub xpath: Option<String>,
    pub value: Option<String>,
    pub attribute_name: Option<String>,
    pub variable_name: Option<String>,
    pub output_key: Option<String>,
    pub js_code: Option<String>,
    pub prompt: Option<String>,
    pub extract_type: Option<ExtractType>,
}

impl ActionPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn action_type(mut self, action_type: ActionType) -> Self {
        self.action_type = Some(action_type);
        self
    }

    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    pub fn xpath(mut self, xpath: impl Into<String>) -> Self {
        self.xpath = Some(xpath.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn attribute_name(mut self, name: impl Into<String>) -> Self {
        self.attribute_name = Some(name.into());
        self
    }

    pub fn variable_name(mut self, name: impl Into<String>) -> Self {
        self.variable_name = Some(name.into());
        self
    }

    pub fn output_key(mut self, key: impl Into<String>) -> Self {
        self.output_key = Some(key.into());
        self
    }

    pub fn js_code(mut self, code: impl Into<String>) -> Self {
        self.js_code = Some(code.into());
        self
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn extract_type(mut self, extract_type: ExtractType) -> Self {
        self.extract_type = Some(extract_type);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Action {
    /// Return a copy of this action with `patch` applied.
    pub fn patched(&self, patch: &ActionPatch) -> Action {
        let mut next = self.clone();
        if let Some(action_type) = patch.action_type {
            next.action_type = action_type;
        }
        apply(&mut next.selector, &patch.selector);
        apply(&mut next.xpath, &patch.xpath);
        apply(&mut next.value, &patch.value);
        apply(&mut next.attribute_name, &patch.attribute_name);
        apply(&mut next.variable_name, &patch.variable_name);
        apply(&mut next.output_key, &patch.output_key);
        apply(&mut next.js_code, &patch.js_code);
        apply(&mut next.prompt, &patch.prompt);
        if patch.extract_type.is_some() {
            next.extract_type = patch.extract_type;
        }
        next
    }
}

fn apply(field: &mut Option<String>, edit: &Option<String>) {
    if let Some(v) = edit {
        *field = if v.is_empty() { None } else { Some(v.clone()) };
    }
}
