//! Semantic metadata blocks attached to captured actions.

use serde::{Deserialize, Serialize};

/// Short description of what the user did and to what.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Intent {
    pub verb: String,
    pub object: String,
}

/// Accessible role/name/value of the target at capture time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Accessibility {
    pub role: String,
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// Bounded structural context used for disambiguation and AI repair.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActionContext {
    /// Text of sibling elements (at most 5 snippets).
    #[serde(default)]
    pub nearby_text: Vec<String>,
    /// Tag names from the target up to the document root.
    #[serde(default)]
    pub ancestor_tags: Vec<String>,
    /// Classification of the enclosing form, empty without one.
    #[serde(default)]
    pub form_hint: String,
}

/// Expected stability of the recorded selector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Evidence {
    /// Score in `[0, 1]`.
    pub confidence: f64,
}

/// Pointer position in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}
