//! Semantic enrichment of captured actions.
//!
//! Attaches intent, accessibility, structural context and a confidence
//! score so a replayer (or an AI repair step) can re-find the target when
//! the recorded selector no longer matches.

use actionreel_config::RecorderConfig;
use actionreel_protocols::{
    Accessibility, Action, ActionContext, ActionType, Element, Evidence, Intent,
};

use crate::dom::{
    ancestors, closest_tag, collapse_whitespace, descendants, find_by_id, label_text_for,
    truncate_chars,
};
use crate::locator::LocatorSynthesizer;

/// Characters kept in an action's `text` snapshot.
pub const TEXT_SNAPSHOT_CHARS: usize = 200;

/// Adds semantic metadata to actions.
#[derive(Debug, Clone)]
pub struct SemanticEnricher {
    nearby_text_limit: usize,
    snippet_chars: usize,
}

impl SemanticEnricher {
    pub fn new(nearby_text_limit: usize, snippet_chars: usize) -> Self {
        Self {
            nearby_text_limit,
            snippet_chars,
        }
    }

    pub fn from_config(config: &RecorderConfig) -> Self {
        Self::new(config.nearby_text_limit, config.snippet_chars)
    }

    /// Return `action` with intent, accessibility, context, evidence and
    /// element snapshots derived from `el`.
    pub fn enrich<E: Element>(&self, mut action: Action, el: &E) -> Action {
        let name = self.accessible_name(el);

        action.intent = Some(Intent {
            verb: intent_verb(action.action_type).to_string(),
            object: intent_object(el, &name),
        });
        action.accessibility = Some(Accessibility {
            role: role(el),
            name,
            value: self.accessible_value(el),
        });
        action.context = Some(ActionContext {
            nearby_text: self.nearby_text(el),
            ancestor_tags: ancestor_tags(el),
            form_hint: form_hint(el),
        });
        action.evidence = Some(Evidence {
            confidence: LocatorSynthesizer::score_selector(el, action.selector.as_deref()),
        });
        action.tag_name = Some(el.tag_name());
        if action.text.is_none() {
            action.text = Some(snapshot_text(el));
        }
        action
    }

    /// Accessible name: first non-empty source, whitespace-collapsed.
    pub fn accessible_name<E: Element>(&self, el: &E) -> String {
        let candidates = [
            el.attribute("aria-label"),
            labelled_by_text(el),
            label_text_for(el),
            Some(el.inner_text()),
            el.attribute("placeholder"),
            el.attribute("title"),
            el.attribute("alt"),
            matches!(el.tag_name().as_str(), "button" | "input")
                .then(|| el.value())
                .flatten(),
        ];
        candidates
            .into_iter()
            .flatten()
            .map(|s| collapse_whitespace(&s))
            .find(|s| !s.is_empty())
            .map(|s| truncate_chars(&s, self.snippet_chars))
            .unwrap_or_default()
    }

    fn accessible_value<E: Element>(&self, el: &E) -> String {
        if el.attribute("type").as_deref() == Some("password") {
            return String::new();
        }
        el.value()
            .map(|v| truncate_chars(&v, self.snippet_chars))
            .unwrap_or_default()
    }

    /// Text of sibling elements, excluding the target.
    pub fn nearby_text<E: Element>(&self, el: &E) -> Vec<String> {
        let Some(parent) = el.parent() else {
            return Vec::new();
        };
        parent
            .children()
            .into_iter()
            .filter(|sibling| sibling != el)
            .map(|sibling| collapse_whitespace(&sibling.inner_text()))
            .filter(|text| !text.is_empty())
            .map(|text| truncate_chars(&text, self.snippet_chars))
            .take(self.nearby_text_limit)
            .collect()
    }
}

impl Default for SemanticEnricher {
    fn default() -> Self {
        Self::from_config(&RecorderConfig::default())
    }
}

/// Verb describing what an action of this type does.
pub fn intent_verb(action_type: ActionType) -> &'static str {
    match action_type {
        ActionType::Click => "click",
        ActionType::Fill | ActionType::AiFill => "input",
        ActionType::Select => "select",
        ActionType::Extract
        | ActionType::ExtractText
        | ActionType::ExtractHtml
        | ActionType::ExtractAttribute
        | ActionType::AiExtract => "extract",
        ActionType::ExecuteJs => "execute",
        ActionType::Scroll => "scroll",
        ActionType::Press => "press",
        ActionType::Hover => "hover",
        ActionType::Check => "check",
        ActionType::Uncheck => "uncheck",
        ActionType::Navigate => "navigate",
    }
}

fn intent_object<E: Element>(el: &E, accessible_name: &str) -> String {
    if !accessible_name.is_empty() {
        return accessible_name.to_string();
    }
    el.attribute("name")
        .filter(|n| !n.is_empty())
        .or_else(|| el.id())
        .unwrap_or_else(|| el.tag_name())
}

fn labelled_by_text<E: Element>(el: &E) -> Option<String> {
    let ids = el.attribute("aria-labelledby")?;
    let text: Vec<String> = ids
        .split_whitespace()
        .filter_map(|id| find_by_id(el, id))
        .map(|label| collapse_whitespace(&label.inner_text()))
        .filter(|t| !t.is_empty())
        .collect();
    if text.is_empty() {
        None
    } else {
        Some(text.join(" "))
    }
}

/// Explicit `role` attribute, else the implicit ARIA role of the tag.
pub fn role<E: Element>(el: &E) -> String {
    if let Some(role) = el.attribute("role").filter(|r| !r.is_empty()) {
        return role;
    }
    let input_type = el
        .attribute("type")
        .map(|t| t.to_ascii_lowercase())
        .unwrap_or_default();
    let implicit = match el.tag_name().as_str() {
        "button" => "button",
        "a" if el.attribute("href").is_some() => "link",
        "input" => match input_type.as_str() {
            "button" | "submit" | "reset" | "image" => "button",
            "checkbox" => "checkbox",
            "radio" => "radio",
            "search" => "searchbox",
            _ => "textbox",
        },
        "textarea" => "textbox",
        "select" => "combobox",
        "img" => "img",
        "nav" => "navigation",
        "form" => "form",
        "main" => "main",
        "header" => "banner",
        "footer" => "contentinfo",
        _ => "generic",
    };
    implicit.to_string()
}

/// Tag names from `el` up to the document root.
pub fn ancestor_tags<E: Element>(el: &E) -> Vec<String> {
    std::iter::once(el.tag_name())
        .chain(ancestors(el).iter().map(|a| a.tag_name()))
        .collect()
}

/// Coarse classification of the form containing `el`.
pub fn form_hint<E: Element>(el: &E) -> String {
    let Some(form) = closest_tag(el, "form") else {
        return String::new();
    };

    let tokens = [
        form.id().unwrap_or_default(),
        form.attribute("name").unwrap_or_default(),
        form.attribute("class").unwrap_or_default(),
    ]
    .join(" ")
    .to_lowercase();

    let hint = if tokens.contains("login") || tokens.contains("signin") {
        "login"
    } else if tokens.contains("search") {
        "search"
    } else if tokens.contains("checkout") || tokens.contains("payment") {
        "checkout"
    } else if tokens.contains("contact") {
        "contact"
    } else {
        let input_types: Vec<String> = descendants(&form)
            .into_iter()
            .filter(|d| d.tag_name() == "input")
            .map(|d| d.attribute("type").unwrap_or_default().to_lowercase())
            .collect();
        let has_password = input_types.iter().any(|t| t == "password");
        let has_email = input_types.iter().any(|t| t == "email");
        match (has_password, has_email) {
            (true, true) => "login",
            (true, false) => "auth",
            _ => "generic",
        }
    };
    hint.to_string()
}

fn snapshot_text<E: Element>(el: &E) -> String {
    truncate_chars(&collapse_whitespace(&el.inner_text()), TEXT_SNAPSHOT_CHARS)
}

#[cfg(test)]
#[path = "semantic_tests.rs"]
mod tests;
