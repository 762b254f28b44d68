//! Export-side configuration (code generation, storage).

use serde::{Deserialize, Serialize};

/// Code generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodegenConfig {
    /// `skip` or `fail_fast`.
    #[serde(default = "default_strictness")]
    pub strictness: String,

    /// Launch the replay browser headless.
    #[serde(default)]
    pub headless: bool,

    /// Characters of page content returned by the script.
    #[serde(default = "default_content_chars")]
    pub content_chars: usize,

    /// Characters of page content handed to the AI extract helper.
    #[serde(default = "default_ai_content_chars")]
    pub ai_content_chars: usize,

    /// Python module providing `ai_extract` and `ai_generate`.
    #[serde(default = "default_helper_module")]
    pub helper_module: String,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            strictness: default_strictness(),
            headless: false,
            content_chars: default_content_chars(),
            ai_content_chars: default_ai_content_chars(),
            helper_module: default_helper_module(),
        }
    }
}

fn default_strictness() -> String {
    "skip".to_string()
}

fn default_content_chars() -> usize {
    5000
}

fn default_ai_content_chars() -> usize {
    10_000
}

fn default_helper_module() -> String {
    "ai_helpers".to_string()
}

/// Durable cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// `file` or `memory`.
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Directory of the file backend.
    #[serde(default = "default_cache_dir")]
    pub cache_dir: String,

    /// Byte quota of the memory backend, unlimited when absent.
    #[serde(default)]
    pub quota_bytes: Option<usize>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            cache_dir: default_cache_dir(),
            quota_bytes: None,
        }
    }
}

fn default_backend() -> String {
    "file".to_string()
}

fn default_cache_dir() -> String {
    "~/.actionreel/cache".to_string()
}
