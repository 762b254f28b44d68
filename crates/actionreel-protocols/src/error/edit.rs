//! Action editor errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    #[error("Index {index} out of range for {len} actions")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },
}

impl EditError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        EditError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}
