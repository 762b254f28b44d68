//! # actionreel Codegen
//!
//! Turns a recorded action sequence into replayable artifacts. Every
//! generator is a pure function of its input.
//!
//! ## Outputs
//!
//! - [`to_commands`] - tool-call list for an agent runtime
//! - [`ScriptGenerator`] - standalone Playwright for Python script
//! - [`describe_actions`] - numbered description with locator hints

mod commands;
mod describe;
mod escape;
mod script;

pub use commands::{BrowserCommand, CommandArgs, commands_json, to_commands};
pub use describe::{describe_action, describe_actions};
pub use escape::{flatten_comment, py_str, sanitize_identifier};
pub use script::{GeneratedScript, ParseStrictnessError, ScriptGenerator, ScriptOptions, Strictness};
