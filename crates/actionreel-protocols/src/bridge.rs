//! AI bridge wire contract.
//!
//! The recorder sends a sanitized HTML fragment plus an instruction to an
//! external code generator and expects JavaScript back.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::BridgeError;

/// Kind of code requested from the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiRequestKind {
    /// Produce code that extracts structured data.
    Extract,
    /// Produce code that fills a form.
    #[serde(rename = "formfill")]
    FormFill,
}

impl AiRequestKind {
    /// Default instruction sent with each kind.
    pub fn description(&self) -> &'static str {
        match self {
            AiRequestKind::Extract => "Extract structured data from this HTML.",
            AiRequestKind::FormFill => "Generate JavaScript to fill this form.",
        }
    }

    /// Prefix of the variable name given to the resulting action.
    pub fn variable_prefix(&self) -> &'static str {
        match self {
            AiRequestKind::Extract => "ai_data",
            AiRequestKind::FormFill => "ai_formfill",
        }
    }
}

/// Request placed in the bridge's request slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiRequest {
    #[serde(rename = "type")]
    pub kind: AiRequestKind,
    pub html: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_prompt: Option<String>,
}

impl AiRequest {
    pub fn new(kind: AiRequestKind, html: impl Into<String>) -> Self {
        Self {
            kind,
            html: html.into(),
            description: kind.description().to_string(),
            user_prompt: None,
        }
    }

    pub fn with_user_prompt(mut self, prompt: impl Into<String>) -> Self {
        let prompt = prompt.into();
        self.user_prompt = if prompt.is_empty() { None } else { Some(prompt) };
        self
    }
}

/// Response written to the bridge's response slot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AiResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub javascript: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_model: Option<String>,
}

impl AiResponse {
    pub fn success(javascript: impl Into<String>, used_model: impl Into<String>) -> Self {
        Self {
            success: true,
            javascript: Some(javascript.into()),
            error: None,
            used_model: Some(used_model.into()),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            javascript: None,
            error: Some(error.into()),
            used_model: None,
        }
    }

    /// Generated code when the response counts as a success.
    ///
    /// A response is successful only with `success` set and non-empty
    /// `javascript`.
    pub fn into_code(self) -> Result<(String, Option<String>), BridgeError> {
        if !self.success {
            return Err(BridgeError::Failed(
                self.error.unwrap_or_else(|| "unknown error".to_string()),
            ));
        }
        match self.javascript {
            Some(js) if !js.trim().is_empty() => Ok((js, self.used_model)),
            _ => Err(BridgeError::MissingCode),
        }
    }
}

/// External code generator answering bridge requests.
#[async_trait]
pub trait AiGenerator: Send + Sync {
    /// Generator identifier used in logs.
    fn id(&self) -> &str;

    /// Produce a response for `request`.
    async fn generate(&self, request: &AiRequest) -> Result<AiResponse, BridgeError>;
}
