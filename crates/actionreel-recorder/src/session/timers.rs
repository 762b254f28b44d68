//! Debounce timers as deadline records.
//!
//! Nothing here sleeps. The host calls [`RecorderSession::advance`] with
//! the current time, and every incoming event fires whatever is due first.

use actionreel_protocols::{Action, ActionType, Element, Intent};
use tracing::debug;

use super::core::RecorderSession;
use crate::locator::LocatorSynthesizer;

/// Pending `fill` for one input, keyed by its synthesized selector.
pub(crate) struct FillTimer<E> {
    pub(crate) key: String,
    pub(crate) element: E,
    pub(crate) value: String,
    pub(crate) deadline: i64,
    pub(crate) seq: u64,
}

/// Pending `scroll`, armed by the first scroll event.
pub(crate) struct ScrollTimer {
    pub(crate) offset: f64,
    pub(crate) deadline: i64,
    pub(crate) seq: u64,
}

enum Due<E> {
    Fill(FillTimer<E>),
    Scroll(ScrollTimer),
}

impl<E> Due<E> {
    fn order(&self) -> (i64, u64) {
        match self {
            Due::Fill(t) => (t.deadline, t.seq),
            Due::Scroll(t) => (t.deadline, t.seq),
        }
    }
}

impl<E: Element> RecorderSession<E> {
    /// Fire every timer due at `now_ms`. Returns the number of actions
    /// recorded.
    pub fn advance(&mut self, now_ms: i64) -> usize {
        self.fire_due(now_ms)
    }

    /// Number of armed debounce timers.
    pub fn pending_timers(&self) -> usize {
        self.fill_timers.len() + usize::from(self.scroll_timer.is_some())
    }

    /// Earliest armed deadline, for hosts that schedule a wake-up.
    pub fn next_deadline(&self) -> Option<i64> {
        let fills = self.fill_timers.iter().map(|t| t.deadline);
        let scroll = self.scroll_timer.as_ref().map(|t| t.deadline);
        fills.chain(scroll).min()
    }

    pub(super) fn fire_due(&mut self, now_ms: i64) -> usize {
        let mut due = Vec::new();
        let (ready, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.fill_timers)
            .into_iter()
            .partition(|t| t.deadline <= now_ms);
        self.fill_timers = waiting;
        due.extend(ready.into_iter().map(Due::Fill));
        if self.scroll_timer.as_ref().is_some_and(|t| t.deadline <= now_ms) {
            if let Some(timer) = self.scroll_timer.take() {
                due.push(Due::Scroll(timer));
            }
        }
        due.sort_by_key(Due::order);

        let fired = due.len();
        for timer in due {
            match timer {
                Due::Fill(t) => {
                    let deadline = t.deadline;
                    self.record_fill(t, deadline);
                }
                Due::Scroll(t) => self.record_scroll(t),
            }
        }
        if fired > 0 {
            debug!(fired, now_ms, "Debounce timers fired");
        }
        fired
    }

    /// Record pending fills immediately so they precede a discrete action.
    pub(super) fn flush_fills(&mut self, now_ms: i64) {
        let mut timers = std::mem::take(&mut self.fill_timers);
        timers.sort_by_key(|t| t.seq);
        for timer in timers {
            self.record_fill(timer, now_ms);
        }
    }

    pub(super) fn flush_timers(&mut self, now_ms: i64) {
        self.fill_timers.iter_mut().for_each(|t| t.deadline = t.deadline.min(now_ms));
        if let Some(t) = self.scroll_timer.as_mut() {
            t.deadline = t.deadline.min(now_ms);
        }
        self.fire_due(now_ms);
    }

    /// Arm or refresh the fill timer for `element`.
    pub(super) fn arm_fill(&mut self, element: E, value: String, now_ms: i64) {
        let key = LocatorSynthesizer::css_selector(&element);
        let deadline = now_ms + self.config.fill_debounce_ms as i64;
        let seq = self.next_seq();
        match self.fill_timers.iter_mut().find(|t| t.key == key) {
            Some(timer) => {
                timer.element = element;
                timer.value = value;
                timer.deadline = deadline;
                timer.seq = seq;
            }
            None => self.fill_timers.push(FillTimer {
                key,
                element,
                value,
                deadline,
                seq,
            }),
        }
    }

    pub(super) fn on_scroll(&mut self, now_ms: i64, offset: f64) -> super::Disposition {
        match self.scroll_timer.as_mut() {
            Some(timer) => timer.offset = offset,
            None => {
                let seq = self.next_seq();
                self.scroll_timer = Some(ScrollTimer {
                    offset,
                    deadline: now_ms + self.config.scroll_debounce_ms as i64,
                    seq,
                });
            }
        }
        super::Disposition::Deferred
    }

    fn next_seq(&mut self) -> u64 {
        self.timer_seq += 1;
        self.timer_seq
    }

    fn record_fill(&mut self, timer: FillTimer<E>, at_ms: i64) {
        let action = Action::new(ActionType::Fill)
            .with_selector(timer.key)
            .with_value(timer.value)
            .with_timestamp(at_ms);
        self.record_on(action, &timer.element, at_ms);
    }

    fn record_scroll(&mut self, timer: ScrollTimer) {
        let mut action = Action::new(ActionType::Scroll)
            .with_value(format_offset(timer.offset))
            .with_timestamp(timer.deadline);
        action.intent = Some(Intent {
            verb: "scroll".to_string(),
            object: "page".to_string(),
        });
        self.store.append(action);
    }
}

/// Whole offsets print without a fractional part.
fn format_offset(offset: f64) -> String {
    if offset.fract() == 0.0 && offset.abs() < 1e15 {
        format!("{}", offset as i64)
    } else {
        offset.to_string()
    }
}
