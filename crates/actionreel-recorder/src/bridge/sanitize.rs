//! HTML clean-up before a fragment is sent to the generator.

use actionreel_protocols::Element;

use crate::dom::{outer_html, truncate_chars};

const NOISE_ATTRIBUTES: &[&str] = &["style", "tabindex", "aria-hidden", "draggable"];
const NOISE_PREFIXES: &[&str] = &["on", "data-react", "data-v-", "ng-", "_ngcontent"];

/// Whether an attribute carries styling, handlers or framework bookkeeping
/// rather than content.
pub fn is_noise_attribute(name: &str) -> bool {
    NOISE_ATTRIBUTES.contains(&name) || NOISE_PREFIXES.iter().any(|p| name.starts_with(p))
}

/// Serialize `el` without noise attributes, capped at `max_chars`.
pub fn sanitize_html<E: Element>(el: &E, max_chars: usize) -> String {
    let html = outer_html(el, &|name| !is_noise_attribute(name));
    truncate_chars(&html, max_chars)
}
