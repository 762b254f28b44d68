//! Capture-side configuration (recorder session, AI bridge).

use serde::{Deserialize, Serialize};

/// Recorder session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecorderConfig {
    /// Quiet period before a burst of input events becomes one `fill`.
    #[serde(default = "default_fill_debounce_ms")]
    pub fill_debounce_ms: u64,

    /// Delay between the first scroll event and the recorded `scroll`.
    #[serde(default = "default_scroll_debounce_ms")]
    pub scroll_debounce_ms: u64,

    /// Id prefix shared by every overlay element.
    #[serde(default = "default_overlay_prefix")]
    pub overlay_prefix: String,

    /// Durable cache key holding the action sequence.
    #[serde(default = "default_cache_key")]
    pub cache_key: String,

    /// Injection version marker.
    #[serde(default = "default_version_marker")]
    pub version_marker: String,

    /// Maximum number of nearby text snippets.
    #[serde(default = "default_nearby_text_limit")]
    pub nearby_text_limit: usize,

    /// Maximum characters per text snippet.
    #[serde(default = "default_snippet_chars")]
    pub snippet_chars: usize,

    /// Ancestor levels searched when promoting a click target.
    #[serde(default = "default_promote_depth")]
    pub promote_depth: usize,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            fill_debounce_ms: default_fill_debounce_ms(),
            scroll_debounce_ms: default_scroll_debounce_ms(),
            overlay_prefix: default_overlay_prefix(),
            cache_key: default_cache_key(),
            version_marker: default_version_marker(),
            nearby_text_limit: default_nearby_text_limit(),
            snippet_chars: default_snippet_chars(),
            promote_depth: default_promote_depth(),
        }
    }
}

fn default_fill_debounce_ms() -> u64 {
    600
}

fn default_scroll_debounce_ms() -> u64 {
    500
}

fn default_overlay_prefix() -> String {
    "__actionreel_".to_string()
}

fn default_cache_key() -> String {
    "__actionreel_actions__".to_string()
}

fn default_version_marker() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_nearby_text_limit() -> usize {
    5
}

fn default_snippet_chars() -> usize {
    50
}

fn default_promote_depth() -> usize {
    6
}

/// AI bridge configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// How long to wait for the generator before giving up.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Upper bound on the sanitized HTML sent with a request.
    #[serde(default = "default_max_html_chars")]
    pub max_html_chars: usize,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            max_html_chars: default_max_html_chars(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    60_000
}

fn default_max_html_chars() -> usize {
    15_000
}
