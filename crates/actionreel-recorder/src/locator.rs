//! Locator synthesis.
//!
//! Produces a CSS selector and an XPath for an element, preferring
//! attributes that survive re-renders, and scores how stable the CSS
//! selector is expected to be.

use actionreel_protocols::Element;

use crate::dom::{ancestors, label_text_for, same_tag_position};

/// Test-hook attributes and the confidence of a selector built on them.
const TEST_ATTRIBUTES: &[(&str, f64)] = &[
    ("data-testid", 0.90),
    ("data-test", 0.88),
    ("data-qa", 0.85),
];

const ID_CONFIDENCE: f64 = 0.95;
const NAME_CONFIDENCE: f64 = 0.85;
const ARIA_LABEL_CONFIDENCE: f64 = 0.80;
const LABEL_CONFIDENCE: f64 = 0.75;
const PLACEHOLDER_CONFIDENCE: f64 = 0.65;
const CLASS_CONFIDENCE: f64 = 0.60;
const NTH_CONFIDENCE: f64 = 0.30;

const MAX_CLASSES: usize = 2;
const MAX_CLASS_LEN: usize = 20;

/// CSS selector, XPath and confidence for one element.
#[derive(Debug, Clone, PartialEq)]
pub struct Locator {
    pub css: String,
    pub xpath: String,
    pub confidence: f64,
}

/// Stateless locator synthesizer.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocatorSynthesizer;

impl LocatorSynthesizer {
    pub fn new() -> Self {
        Self
    }

    /// Build both locators for `el`. Total: every element gets a locator.
    pub fn synthesize<E: Element>(el: &E) -> Locator {
        let css = Self::css_selector(el);
        let xpath = Self::xpath(el);
        let confidence = Self::score_selector(el, Some(&css));
        Locator {
            css,
            xpath,
            confidence,
        }
    }

    /// CSS selector for `el`, first matching strategy wins.
    pub fn css_selector<E: Element>(el: &E) -> String {
        let tag = el.tag_name();

        if let Some(id) = stable_id(el) {
            return format!("#{}", escape_css_ident(&id));
        }

        for (attr, _) in TEST_ATTRIBUTES {
            if let Some(value) = non_empty_attribute(el, attr) {
                return attribute_selector(&tag, attr, &value);
            }
        }

        for attr in ["name", "aria-label", "placeholder"] {
            if let Some(value) = non_empty_attribute(el, attr) {
                return attribute_selector(&tag, attr, &value);
            }
        }

        let mut selector = tag.clone();
        for class in stable_classes(el) {
            selector.push('.');
            selector.push_str(&escape_css_ident(&class));
        }
        let (position, count) = same_tag_position(el);
        if count > 1 {
            selector.push_str(&format!(":nth-of-type({})", position));
        }
        selector
    }

    /// XPath for `el`, anchored at the nearest ancestor with a stable id.
    pub fn xpath<E: Element>(el: &E) -> String {
        if let Some(id) = stable_id(el) {
            return id_anchor(&id);
        }

        let mut segments = vec![xpath_segment(el)];
        let mut anchor = None;
        for ancestor in ancestors(el) {
            if let Some(id) = stable_id(&ancestor) {
                anchor = Some(id_anchor(&id));
                break;
            }
            segments.push(xpath_segment(&ancestor));
        }
        segments.reverse();

        match anchor {
            Some(prefix) => format!("{}/{}", prefix, segments.join("/")),
            None => format!("/{}", segments.join("/")),
        }
    }

    /// Expected stability of `css` as a locator for `el`.
    ///
    /// Scores the selector text itself, so edited selectors are scored
    /// the same way synthesized ones are.
    pub fn score_selector<E: Element>(el: &E, css: Option<&str>) -> f64 {
        let Some(css) = css.filter(|c| !c.is_empty()) else {
            return 0.0;
        };

        if css.starts_with('#') {
            return ID_CONFIDENCE;
        }
        for (attr, confidence) in TEST_ATTRIBUTES {
            if css.contains(&format!("[{}=", attr)) {
                return *confidence;
            }
        }
        if css.contains("[name=") {
            return NAME_CONFIDENCE;
        }
        if css.contains("[aria-label=") {
            return ARIA_LABEL_CONFIDENCE;
        }

        let base = if css.contains("[placeholder=") {
            PLACEHOLDER_CONFIDENCE
        } else if css.contains(":nth-of-type") {
            NTH_CONFIDENCE
        } else {
            CLASS_CONFIDENCE
        };
        if label_text_for(el).is_some() {
            base.max(LABEL_CONFIDENCE)
        } else {
            base
        }
    }
}

/// Non-empty id that does not start with a digit.
pub fn is_stable_id(id: &str) -> bool {
    id.chars().next().is_some_and(|c| !c.is_ascii_digit())
}

fn stable_id<E: Element>(el: &E) -> Option<String> {
    el.id().filter(|id| is_stable_id(id))
}

fn non_empty_attribute<E: Element>(el: &E, name: &str) -> Option<String> {
    el.attribute(name).filter(|v| !v.is_empty())
}

/// Classes that look hand-written rather than generated.
fn stable_classes<E: Element>(el: &E) -> Vec<String> {
    el.attribute("class")
        .unwrap_or_default()
        .split_whitespace()
        .filter(|c| is_stable_class(c))
        .take(MAX_CLASSES)
        .map(str::to_string)
        .collect()
}

fn is_stable_class(class: &str) -> bool {
    if class.chars().count() >= MAX_CLASS_LEN {
        return false;
    }
    let mut upper_run = 0;
    let mut digit_run = 0;
    for c in class.chars() {
        upper_run = if c.is_ascii_uppercase() { upper_run + 1 } else { 0 };
        digit_run = if c.is_ascii_digit() { digit_run + 1 } else { 0 };
        if upper_run >= 2 || digit_run >= 4 {
            return false;
        }
    }
    true
}

fn attribute_selector(tag: &str, attr: &str, value: &str) -> String {
    format!("{}[{}=\"{}\"]", tag, attr, escape_attribute_value(value))
}

fn xpath_segment<E: Element>(el: &E) -> String {
    let tag = el.tag_name();
    let (position, count) = same_tag_position(el);
    if count > 1 {
        format!("{}[{}]", tag, position)
    } else {
        tag
    }
}

fn id_anchor(id: &str) -> String {
    format!("//*[@id={}]", xpath_literal(id))
}

/// Escape a value for use inside a double-quoted CSS attribute selector.
pub fn escape_attribute_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Escape an identifier for use after `#` or `.` in a CSS selector.
pub fn escape_css_ident(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len());
    for (i, c) in ident.chars().enumerate() {
        if i == 0 && c.is_ascii_digit() {
            out.push_str(&format!("\\{:x} ", c as u32));
        } else if c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii() {
            out.push(c);
        } else {
            out.push('\\');
            out.push(c);
        }
    }
    out
}

/// Quote `s` as an XPath string literal.
pub fn xpath_literal(s: &str) -> String {
    if !s.contains('"') {
        format!("\"{}\"", s)
    } else if !s.contains('\'') {
        format!("'{}'", s)
    } else {
        let parts: Vec<String> = s.split('"').map(|p| format!("\"{}\"", p)).collect();
        format!("concat({})", parts.join(", '\"', "))
    }
}

#[cfg(test)]
#[path = "locator_tests.rs"]
mod tests;
