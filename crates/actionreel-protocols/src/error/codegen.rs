//! Code generation errors.

use thiserror::Error;

use crate::action::ActionType;

#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("Invalid action {index} ({action_type}): {reason}")]
    InvalidAction {
        /// 1-based step number.
        index: usize,
        action_type: ActionType,
        reason: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
