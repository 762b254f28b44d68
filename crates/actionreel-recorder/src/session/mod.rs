//! Recording session: event capture and mode control.
//!
//! The host forwards page events to a [`RecorderSession`] and acts on the
//! returned [`Disposition`]. Debounce timers are deadlines fired by
//! [`RecorderSession::advance`] and before any later event.

mod ai;
mod capture;
mod core;
mod event;
mod extract;
mod guard;
mod mode;
mod timers;

pub use self::core::RecorderSession;
pub use event::{Disposition, DomEvent, EventKind};
pub use guard::{InjectionGuard, InstallOutcome, PageHost};
pub use mode::{Cursor, Mode, Overlay};
