//! # actionreel Recorder
//!
//! Turns raw page interaction into an editable sequence of [`Action`]s.
//!
//! ## Components
//!
//! - [`locator`] - durable CSS/XPath locators with a confidence score
//! - [`semantic`] - intent, accessibility and context metadata
//! - [`store`] - ordered action sequence backed by a durable cache
//! - [`bridge`] - request/response hand-off to an external code generator
//! - [`session`] - event capture and mode control
//! - [`editor`] - list editing model used by the host UI
//!
//! [`Action`]: actionreel_protocols::Action

pub mod bridge;
pub mod dom;
pub mod editor;
pub mod locator;
pub mod semantic;
pub mod session;
pub mod store;

pub use bridge::{AiBridge, AiJob, AiOutcome, AiResponder};
pub use dom::{MemoryDom, MemoryElement};
pub use editor::{ActionEditor, EditForm, SyntheticKind};
pub use locator::{Locator, LocatorSynthesizer};
pub use semantic::SemanticEnricher;
pub use session::{
    Cursor, Disposition, DomEvent, EventKind, InjectionGuard, InstallOutcome, Mode, Overlay,
    PageHost, RecorderSession,
};
pub use store::{ActionStore, FileCache, MemoryCache, StoreSnapshot, cache_from_config};
