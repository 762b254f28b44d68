//! Core session struct, recording and mode switching.

use actionreel_config::RecorderConfig;
use actionreel_protocols::{Action, DurableCache, Element, ExtractType};
use tokio::sync::watch;
use tracing::{debug, info};

use super::mode::{Cursor, Mode, Overlay};
use super::timers::{FillTimer, ScrollTimer};
use crate::bridge::AiBridge;
use crate::locator::LocatorSynthesizer;
use crate::semantic::SemanticEnricher;
use crate::store::{ActionStore, StoreSnapshot};

/// One recording session on one page.
pub struct RecorderSession<E: Element> {
    pub(super) config: RecorderConfig,
    pub(super) enricher: SemanticEnricher,
    pub(super) store: ActionStore,
    pub(super) bridge: AiBridge,
    pub(super) mode: Mode,
    pub(super) extract_type: ExtractType,
    pub(super) overlay: Overlay<E>,
    /// Element picked in a selection mode, awaiting the host's form.
    pub(super) selection: Option<(Mode, E)>,
    /// Element whose trailing click belongs to an intercepted gesture.
    pub(super) swallow_click: Option<E>,
    pub(super) fill_timers: Vec<FillTimer<E>>,
    pub(super) scroll_timer: Option<ScrollTimer>,
    pub(super) timer_seq: u64,
    pub(super) stop_requested: bool,
}

impl<E: Element> RecorderSession<E> {
    /// Start a session, restoring any actions cached under the configured key.
    pub fn new(config: &RecorderConfig, bridge: AiBridge, cache: Box<dyn DurableCache>) -> Self {
        let store = ActionStore::open(cache, config.cache_key.clone());
        info!(
            restored = store.count(),
            version = %config.version_marker,
            "Recorder session started"
        );
        Self {
            config: config.clone(),
            enricher: SemanticEnricher::from_config(config),
            store,
            bridge,
            mode: Mode::Record,
            extract_type: ExtractType::Text,
            overlay: Overlay::default(),
            selection: None,
            swallow_click: None,
            fill_timers: Vec::new(),
            scroll_timer: None,
            timer_seq: 0,
            stop_requested: false,
        }
    }

    pub fn actions(&self) -> &[Action] {
        self.store.actions()
    }

    pub fn store(&self) -> &ActionStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ActionStore {
        &mut self.store
    }

    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.store.subscribe()
    }

    pub fn bridge(&self) -> &AiBridge {
        &self.bridge
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn overlay(&self) -> &Overlay<E> {
        &self.overlay
    }

    pub fn stop_requested(&self) -> bool {
        self.stop_requested
    }

    /// Enter `mode`, or return to plain recording when it is already active.
    pub fn toggle_mode(&mut self, mode: Mode) -> Mode {
        let next = if self.mode == mode { Mode::Record } else { mode };
        self.mode = next;
        self.selection = None;
        self.swallow_click = None;
        self.overlay.highlight = None;
        if next.is_selection() {
            self.overlay.cursor = Cursor::Crosshair;
            self.set_status(format!("{} mode: click an element to select it.", next.label()));
        } else {
            self.overlay.cursor = Cursor::Default;
            self.overlay.status = None;
        }
        info!(mode = ?next, "Recorder mode changed");
        next
    }

    /// Flag that the user pressed stop. Pending debounced input is recorded
    /// first.
    pub fn request_stop(&mut self, now_ms: i64) {
        self.flush_timers(now_ms);
        self.stop_requested = true;
        self.set_status("Recording stopped.");
        info!(actions = self.store.count(), "Recorder stop requested");
    }

    /// Page is unloading: record pending input and persist.
    pub fn unload(&mut self, now_ms: i64) {
        self.flush_timers(now_ms);
        self.store.persist();
    }

    pub(super) fn set_status(&mut self, status: impl Into<String>) {
        let status = status.into();
        debug!(%status, "Overlay status");
        self.overlay.status = Some(status);
    }

    /// Whether `el` belongs to the recorder's own overlay.
    pub fn is_recorder_element(&self, el: &E) -> bool {
        let prefix = self.config.overlay_prefix.as_str();
        let owned = |e: &E| e.id().is_some_and(|id| id.starts_with(prefix));
        owned(el) || crate::dom::ancestors(el).iter().any(owned)
    }

    /// Fill in locators, timestamp and semantics from `el`, then append.
    pub(super) fn record_on(&mut self, mut action: Action, el: &E, now_ms: i64) -> &Action {
        let locator = LocatorSynthesizer::synthesize(el);
        if action.selector.is_none() {
            action.selector = Some(locator.css);
        }
        if action.xpath.is_none() {
            action.xpath = Some(locator.xpath);
        }
        if action.timestamp == 0 {
            action.timestamp = now_ms;
        }
        let action = self.enricher.enrich(action, el);
        self.store.append(action)
    }
}
