//! Event dispatch.

use actionreel_protocols::{Action, ActionType, CaptureError, Element};
use tracing::debug;

use super::core::RecorderSession;
use super::event::{Disposition, DomEvent, EventKind};
use crate::dom::{collapse_whitespace, truncate_chars};

const CLICKABLE_TAGS: &[&str] = &["a", "button", "summary", "input", "select", "textarea"];
const CLICKABLE_ROLES: &[&str] = &["button", "link", "menuitem", "menuitemradio", "option"];

impl<E: Element> RecorderSession<E> {
    /// Feed one page event to the session.
    pub fn handle_event(&mut self, event: &mut DomEvent<E>) -> Disposition {
        self.fire_due(event.time_ms);

        if event.is_handled() {
            return if event.kind == EventKind::Click && self.mode.is_selection() {
                Disposition::Swallowed
            } else {
                Disposition::Ignored
            };
        }

        let disposition = match event.kind.clone() {
            EventKind::PointerDown | EventKind::MouseDown | EventKind::TouchStart => {
                self.on_pointer_start(event)
            }
            EventKind::Click => self.on_click(event),
            EventKind::Input => self.on_input(event),
            EventKind::Change => self.on_change(event),
            EventKind::KeyDown { key } => self.on_key_down(event, &key),
            EventKind::Scroll { offset } => self.on_scroll(event.time_ms, offset),
            EventKind::MouseOver => self.on_mouse_over(event),
            EventKind::MouseOut => self.on_mouse_out(),
        };
        debug!(event = event.kind.name(), ?disposition, "Event handled");
        disposition
    }

    fn capture_target(&self, event: &DomEvent<E>) -> Result<E, CaptureError> {
        let target = event.target.clone().ok_or(CaptureError::MissingTarget)?;
        if self.is_recorder_element(&target) {
            return Err(CaptureError::RecorderElement);
        }
        Ok(target)
    }

    fn skip(&self, event: &DomEvent<E>, err: CaptureError) -> Disposition {
        debug!(event = event.kind.name(), "Skipping event: {}", err);
        Disposition::Ignored
    }

    fn on_pointer_start(&mut self, event: &mut DomEvent<E>) -> Disposition {
        self.swallow_click = None;
        if !self.mode.is_selection() {
            return Disposition::Ignored;
        }
        self.select(event)
    }

    /// Route the event target to the active selection mode.
    fn select(&mut self, event: &mut DomEvent<E>) -> Disposition {
        let target = match self.capture_target(event) {
            Ok(target) => target,
            Err(e) => return self.skip(event, e),
        };
        event.mark_handled();
        if event.kind.is_pointer_start() {
            self.swallow_click = Some(target.clone());
        }
        let mode = self.mode;
        self.selection = Some((mode, target));
        self.set_status(format!("Captured element for {}.", mode.label()));
        Disposition::Intercepted(mode)
    }

    fn on_click(&mut self, event: &mut DomEvent<E>) -> Disposition {
        if let Some(selected) = self.swallow_click.take() {
            if self.mode.is_selection() && event.target.as_ref() == Some(&selected) {
                event.mark_handled();
                return Disposition::Swallowed;
            }
        }
        if self.mode.is_selection() {
            return self.select(event);
        }

        let target = match self.capture_target(event) {
            Ok(target) => self.promote_to_clickable(target),
            Err(e) => return self.skip(event, e),
        };
        if self.is_recorder_element(&target) {
            return self.skip(event, CaptureError::RecorderElement);
        }

        self.flush_fills(event.time_ms);
        let mut action = Action::new(ActionType::Click).with_value(truncate_chars(
            &collapse_whitespace(&target.inner_text()),
            self.config.snippet_chars,
        ));
        action.coordinates = event.coordinates;
        self.record_on(action, &target, event.time_ms);
        Disposition::Recorded
    }

    /// Nearest interactive element among `el` and its ancestors.
    fn promote_to_clickable(&self, el: E) -> E {
        let mut current = Some(el.clone());
        for _ in 0..self.config.promote_depth {
            let Some(node) = current else {
                break;
            };
            let tag = node.tag_name();
            let role = node.attribute("role").unwrap_or_default();
            if CLICKABLE_TAGS.contains(&tag.as_str()) || CLICKABLE_ROLES.contains(&role.as_str()) {
                return node;
            }
            current = node.parent();
        }
        el
    }

    fn on_input(&mut self, event: &mut DomEvent<E>) -> Disposition {
        let target = match self.capture_target(event) {
            Ok(target) => target,
            Err(e) => return self.skip(event, e),
        };
        let tag = target.tag_name();
        let editable = target.is_content_editable();
        if tag != "input" && tag != "textarea" && !editable {
            return self.skip(
                event,
                CaptureError::UnsupportedTarget {
                    event: event.kind.name().to_string(),
                    tag,
                },
            );
        }
        let value = if editable {
            target.inner_text()
        } else {
            target.value().unwrap_or_default()
        };
        self.arm_fill(target, value, event.time_ms);
        Disposition::Deferred
    }

    fn on_change(&mut self, event: &mut DomEvent<E>) -> Disposition {
        let target = match self.capture_target(event) {
            Ok(target) => target,
            Err(e) => return self.skip(event, e),
        };
        let action = match target.tag_name().as_str() {
            "select" => {
                Action::new(ActionType::Select).with_value(target.value().unwrap_or_default())
            }
            "input" => {
                let input_type = target.attribute("type").unwrap_or_default().to_lowercase();
                if input_type != "checkbox" && input_type != "radio" {
                    return Disposition::Ignored;
                }
                if target.is_checked() {
                    Action::new(ActionType::Check)
                } else {
                    Action::new(ActionType::Uncheck)
                }
            }
            _ => return Disposition::Ignored,
        };
        self.flush_fills(event.time_ms);
        self.record_on(action, &target, event.time_ms);
        Disposition::Recorded
    }

    fn on_key_down(&mut self, event: &mut DomEvent<E>, key: &str) -> Disposition {
        if key != "Enter" {
            return Disposition::Ignored;
        }
        self.flush_fills(event.time_ms);
        let action = Action::new(ActionType::Press).with_value("Enter");
        match self.capture_target(event) {
            Ok(target) => {
                self.record_on(action, &target, event.time_ms);
            }
            Err(CaptureError::MissingTarget) => {
                self.store.append(action.with_timestamp(event.time_ms));
            }
            Err(e) => return self.skip(event, e),
        }
        Disposition::Recorded
    }

    fn on_mouse_over(&mut self, event: &mut DomEvent<E>) -> Disposition {
        if !self.mode.is_selection() {
            return Disposition::Ignored;
        }
        match self.capture_target(event) {
            Ok(target) => {
                self.overlay.highlight = Some(target);
                Disposition::Highlighted
            }
            Err(_) => Disposition::Ignored,
        }
    }

    fn on_mouse_out(&mut self) -> Disposition {
        if !self.mode.is_selection() {
            return Disposition::Ignored;
        }
        self.overlay.highlight = None;
        Disposition::Highlighted
    }
}
