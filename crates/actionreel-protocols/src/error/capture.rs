//! Event capture errors. Capture never fails the page; these only
//! explain why an event was skipped.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CaptureError {
    #[error("Event has no target element")]
    MissingTarget,

    #[error("Event targets the recorder overlay")]
    RecorderElement,

    #[error("Unsupported target for {event}: <{tag}>")]
    UnsupportedTarget { event: String, tag: String },
}
