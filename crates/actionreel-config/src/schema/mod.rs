//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

mod schema_output;
mod schema_recorder;

pub use schema_output::*;
pub use schema_recorder::*;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub recorder: RecorderConfig,

    #[serde(default)]
    pub bridge: BridgeConfig,

    #[serde(default)]
    pub codegen: CodegenConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
