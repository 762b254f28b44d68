//! AI extract and form fill modes.

use actionreel_protocols::{Action, ActionType, AiRequest, AiRequestKind, Element};
use tracing::{info, warn};

use super::core::RecorderSession;
use super::mode::Mode;
use crate::bridge::{AiJob, AiOutcome, sanitize_html};
use crate::dom::closest_tag;

impl<E: Element> RecorderSession<E> {
    /// Turn the pending AI selection into a job for the bridge.
    ///
    /// Form fill sends the closest enclosing form. The job runs without
    /// borrowing the session; hand its outcome to
    /// [`apply_ai_outcome`](Self::apply_ai_outcome).
    pub fn begin_ai_request(&mut self, user_prompt: Option<&str>) -> Option<AiJob> {
        let (mode, el) = self.selection.take()?;
        let Some(kind) = mode.ai_kind() else {
            self.selection = Some((mode, el));
            return None;
        };

        let target = match kind {
            AiRequestKind::Extract => el,
            AiRequestKind::FormFill => closest_tag(&el, "form").unwrap_or(el),
        };
        let html = sanitize_html(&target, self.bridge.max_html_chars());
        let mut request = AiRequest::new(kind, html);
        if let Some(prompt) = user_prompt {
            request = request.with_user_prompt(prompt);
        }

        let template = self.template_for(&target);
        self.overlay.loading = Some(
            match kind {
                AiRequestKind::Extract => "Preparing extraction...",
                AiRequestKind::FormFill => "Preparing form fill...",
            }
            .to_string(),
        );
        info!(?kind, html_chars = request.html.chars().count(), "AI request prepared");
        Some(AiJob::new(self.bridge.clone(), request, template))
    }

    /// Record the generated code, or report the failure on the status line.
    ///
    /// Results that arrive after the mode was left are still recorded.
    pub fn apply_ai_outcome(&mut self, outcome: AiOutcome, now_ms: i64) -> Option<&Action> {
        self.fire_due(now_ms);
        self.overlay.loading = None;
        let mode = Mode::from_ai_kind(outcome.kind);
        let (action_label, failure_label) = match outcome.kind {
            AiRequestKind::Extract => ("AI extraction code added", "AI extract failed"),
            AiRequestKind::FormFill => ("AI form fill code added", "AI form fill failed"),
        };

        let code = match outcome.result {
            Ok(code) => code,
            Err(e) => {
                warn!(kind = ?outcome.kind, "AI outcome discarded: {}", e);
                self.set_status(format!("{}: {}", failure_label, e));
                return None;
            }
        };

        let mut action = outcome.template;
        action.js_code = Some(code.javascript);
        action.variable_name = Some(format!(
            "{}_{}",
            outcome.kind.variable_prefix(),
            self.store.count()
        ));
        if action.timestamp == 0 {
            action.timestamp = now_ms;
        }

        if self.mode == mode {
            self.toggle_mode(mode);
        }
        self.set_status(format!(
            "{} ({}).",
            action_label,
            code.used_model.as_deref().unwrap_or("model")
        ));
        Some(self.store.append(action))
    }

    /// `execute_js` action carrying the locators and metadata of `el`.
    fn template_for(&self, el: &E) -> Action {
        let locator = crate::locator::LocatorSynthesizer::synthesize(el);
        let action = Action::new(ActionType::ExecuteJs)
            .with_selector(locator.css)
            .with_xpath(locator.xpath);
        self.enricher.enrich(action, el)
    }
}
