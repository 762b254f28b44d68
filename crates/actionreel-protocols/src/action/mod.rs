//! Recorded action model.

mod kind;
mod metadata;
mod model;
mod patch;
mod validate;

pub use kind::{ActionType, ExtractType};
pub use metadata::{Accessibility, ActionContext, Coordinates, Evidence, Intent};
pub use model::Action;
pub use patch::ActionPatch;
pub use validate::validate_action;

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
