//! Injection guard.
//!
//! The recorder script can be injected into the same page more than once
//! (navigation races, manual re-injection). The page keeps a version marker;
//! the same version is a no-op, a different one replaces the old install.

use actionreel_config::RecorderConfig;
use tracing::{debug, info};

/// Page-side state the guard reads and writes.
pub trait PageHost {
    /// Version marker left by a previous injection.
    fn injected_version(&self) -> Option<String>;

    fn mark_injected(&mut self, version: &str);

    /// Whether `document.body` exists yet.
    fn body_ready(&self) -> bool;
}

/// Result of [`InjectionGuard::install`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed,
    /// An older recorder was replaced.
    Replaced { previous: String },
    /// This version is already running; nothing was done.
    AlreadyInstalled,
}

impl InstallOutcome {
    /// Whether listeners and overlay must be (re)installed.
    pub fn needs_setup(&self) -> bool {
        !matches!(self, InstallOutcome::AlreadyInstalled)
    }
}

#[derive(Debug, Clone)]
pub struct InjectionGuard {
    version: String,
    overlay_pending: bool,
    overlay_built: bool,
}

impl InjectionGuard {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            overlay_pending: false,
            overlay_built: false,
        }
    }

    pub fn from_config(config: &RecorderConfig) -> Self {
        Self::new(config.version_marker.clone())
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Claim `host` for this version. Builds the overlay right away when the
    /// body exists, otherwise defers it to DOMContentLoaded.
    pub fn install<H: PageHost>(&mut self, host: &mut H) -> InstallOutcome {
        let outcome = match host.injected_version() {
            Some(previous) if previous == self.version => {
                debug!(version = %self.version, "Recorder already injected");
                return InstallOutcome::AlreadyInstalled;
            }
            Some(previous) => InstallOutcome::Replaced { previous },
            None => InstallOutcome::Installed,
        };
        host.mark_injected(&self.version);

        if host.body_ready() {
            self.overlay_built = true;
        } else {
            self.overlay_pending = true;
            debug!("Body not ready, overlay deferred to DOMContentLoaded");
        }
        info!(version = %self.version, ?outcome, "Recorder installed");
        outcome
    }

    /// Build the deferred overlay. Returns true when it was built now.
    pub fn dom_content_loaded<H: PageHost>(&mut self, host: &H) -> bool {
        if !self.overlay_pending || !host.body_ready() {
            return false;
        }
        self.overlay_pending = false;
        self.overlay_built = true;
        true
    }

    pub fn overlay_ready(&self) -> bool {
        self.overlay_built
    }
}
