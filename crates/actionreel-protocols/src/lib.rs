//! # actionreel Protocols
//!
//! Shared data model and capability traits for the actionreel recorder.
//! Contains only definitions - the recorder and code generator live in
//! their own crates.
//!
//! ## Core Types
//!
//! - [`Action`] - One recorded or authored interaction step
//! - [`ActionPatch`] - Copy-on-write edit applied to an [`Action`]
//!
//! ## Core Traits
//!
//! - [`Element`] - Capability view over a DOM element
//! - [`DurableCache`] - Session-scoped key/value persistence
//! - [`AiGenerator`] - External code generator behind the AI bridge

pub mod action;
pub mod bridge;
pub mod cache;
pub mod element;
pub mod error;

pub use action::{
    Accessibility, Action, ActionContext, ActionPatch, ActionType, Coordinates, Evidence,
    ExtractType, Intent, validate_action,
};
pub use bridge::{AiGenerator, AiRequest, AiRequestKind, AiResponse};
pub use cache::DurableCache;
pub use element::Element;
pub use error::{BridgeError, CacheError, CaptureError, CodegenError, EditError};
