//! Events fed into the session and what the host must do with them.

use actionreel_protocols::Coordinates;

use super::mode::Mode;

/// Kind of page event, with the payload the recorder needs.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    PointerDown,
    MouseDown,
    TouchStart,
    Click,
    Input,
    Change,
    KeyDown { key: String },
    /// Page scroll with the current vertical offset.
    Scroll { offset: f64 },
    MouseOver,
    MouseOut,
}

impl EventKind {
    /// Primary selection point of a gesture.
    pub fn is_pointer_start(&self) -> bool {
        matches!(
            self,
            EventKind::PointerDown | EventKind::MouseDown | EventKind::TouchStart
        )
    }

    /// DOM event name.
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::PointerDown => "pointerdown",
            EventKind::MouseDown => "mousedown",
            EventKind::TouchStart => "touchstart",
            EventKind::Click => "click",
            EventKind::Input => "input",
            EventKind::Change => "change",
            EventKind::KeyDown { .. } => "keydown",
            EventKind::Scroll { .. } => "scroll",
            EventKind::MouseOver => "mouseover",
            EventKind::MouseOut => "mouseout",
        }
    }
}

/// One page event.
///
/// The host passes the same value from every listener it installed for
/// the event (window and document). Once the recorder handled it, later
/// deliveries are no-ops.
#[derive(Debug, Clone)]
pub struct DomEvent<E> {
    pub kind: EventKind,
    /// Event target, already resolved from text nodes and shadow roots.
    pub target: Option<E>,
    /// Event time in epoch milliseconds.
    pub time_ms: i64,
    pub coordinates: Option<Coordinates>,
    handled: bool,
}

impl<E> DomEvent<E> {
    pub fn new(kind: EventKind, target: Option<E>, time_ms: i64) -> Self {
        Self {
            kind,
            target,
            time_ms,
            coordinates: None,
            handled: false,
        }
    }

    pub fn with_coordinates(mut self, x: f64, y: f64) -> Self {
        self.coordinates = Some(Coordinates { x, y });
        self
    }

    /// Whether a previous listener already handled this event.
    pub fn is_handled(&self) -> bool {
        self.handled
    }

    pub(crate) fn mark_handled(&mut self) {
        self.handled = true;
    }
}

/// Outcome of feeding an event to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Not relevant to the recording.
    Ignored,
    /// An action was appended.
    Recorded,
    /// A debounce timer was armed or refreshed.
    Deferred,
    /// Selection for the given mode. The host must call `preventDefault`,
    /// `stopPropagation` and `stopImmediatePropagation`.
    Intercepted(Mode),
    /// Trailing click of an intercepted gesture. Block it like
    /// [`Disposition::Intercepted`]; nothing is recorded.
    Swallowed,
    /// The selection highlight moved.
    Highlighted,
}

impl Disposition {
    /// Whether the host must block the page's default handling.
    pub fn blocks_page(&self) -> bool {
        matches!(self, Disposition::Intercepted(_) | Disposition::Swallowed)
    }
}
