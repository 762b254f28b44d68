//! AI bridge errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BridgeError {
    #[error("AI request timed out after {0} ms")]
    Timeout(u64),

    #[error("AI generation failed: {0}")]
    Failed(String),

    #[error("AI response contained no code")]
    MissingCode,

    #[error("An AI request is already pending")]
    Busy,

    #[error("AI bridge closed before a response arrived")]
    Closed,
}
