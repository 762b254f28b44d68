//! Data extract mode.

use actionreel_protocols::{Action, Element, ExtractType};
use tracing::info;

use super::core::RecorderSession;
use super::mode::Mode;
use crate::dom::{outer_html, truncate_chars};
use crate::semantic::TEXT_SNAPSHOT_CHARS;

const DEFAULT_ATTRIBUTE: &str = "href";

impl<E: Element> RecorderSession<E> {
    pub fn extract_type(&self) -> ExtractType {
        self.extract_type
    }

    pub fn set_extract_type(&mut self, extract_type: ExtractType) {
        self.extract_type = extract_type;
    }

    /// Element captured in a selection mode, waiting for completion.
    pub fn pending_selection(&self) -> Option<(Mode, &E)> {
        self.selection.as_ref().map(|(mode, el)| (*mode, el))
    }

    /// Suggested variable name for the next extraction.
    pub fn default_variable_name(&self) -> String {
        format!("data_{}", self.store.count())
    }

    /// Drop the pending selection and stay in the current mode.
    pub fn cancel_selection(&mut self) {
        self.selection = None;
    }

    /// Record the pending extract selection under `variable_name`.
    ///
    /// `attribute_name` is only read for attribute extraction and defaults
    /// to `href`. Empty values cancel with a status message.
    pub fn complete_extract(
        &mut self,
        variable_name: &str,
        attribute_name: Option<&str>,
        now_ms: i64,
    ) -> Option<&Action> {
        self.fire_due(now_ms);
        let el = match self.selection.take() {
            Some((Mode::Extract, el)) => el,
            other => {
                self.selection = other;
                return None;
            }
        };

        let variable_name = variable_name.trim();
        if variable_name.is_empty() {
            self.set_status("Cancelled: variable name required.");
            return None;
        }

        let extract_type = self.extract_type;
        let mut action = Action::new(extract_type.action_type())
            .with_extract_type(extract_type)
            .with_variable_name(variable_name);
        match extract_type {
            ExtractType::Text => {}
            ExtractType::Html => {
                action.text = Some(truncate_chars(&outer_html(&el, &|_| true), TEXT_SNAPSHOT_CHARS));
            }
            ExtractType::Attribute => {
                let attribute = attribute_name.unwrap_or(DEFAULT_ATTRIBUTE).trim();
                if attribute.is_empty() {
                    self.set_status("Cancelled: attribute name required.");
                    return None;
                }
                action.value = Some(el.attribute(attribute).unwrap_or_default());
                action.attribute_name = Some(attribute.to_string());
            }
        }

        info!(variable = variable_name, ?extract_type, "Extraction recorded");
        self.toggle_mode(Mode::Extract);
        self.set_status(format!("Recorded extract: {}", variable_name));
        Some(self.record_on(action, &el, now_ms))
    }
}
