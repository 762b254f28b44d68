//! Capability view over a DOM element.
//!
//! The recorder never touches a concrete DOM. Hosts (a wasm shim, a CDP
//! bridge, the in-memory test DOM) implement [`Element`] as a cheap handle.

/// A handle to one element of the live page.
///
/// Handles are cheap to clone and compare equal when they refer to the
/// same node.
pub trait Element: Clone + PartialEq {
    /// Lower-case tag name, e.g. `"button"`.
    fn tag_name(&self) -> String;

    /// Attribute value, `None` when the attribute is absent.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Attribute names in document order.
    fn attribute_names(&self) -> Vec<String>;

    /// Parent element, `None` at the document root.
    fn parent(&self) -> Option<Self>;

    /// Child elements in document order.
    fn children(&self) -> Vec<Self>;

    /// Text nodes directly owned by this element, concatenated.
    fn own_text(&self) -> String;

    /// Rendered text of the element and its descendants.
    fn inner_text(&self) -> String {
        let mut text = self.own_text();
        for child in self.children() {
            let child_text = child.inner_text();
            if child_text.is_empty() {
                continue;
            }
            if !text.is_empty() && !text.ends_with(char::is_whitespace) {
                text.push(' ');
            }
            text.push_str(&child_text);
        }
        text
    }

    /// Live form value. Falls back to the `value` attribute.
    fn value(&self) -> Option<String> {
        self.attribute("value")
    }

    /// Live checked state. Falls back to the `checked` attribute.
    fn is_checked(&self) -> bool {
        self.attribute("checked").is_some()
    }

    fn is_content_editable(&self) -> bool {
        matches!(
            self.attribute("contenteditable").as_deref(),
            Some("") | Some("true") | Some("plaintext-only")
        )
    }

    fn id(&self) -> Option<String> {
        self.attribute("id").filter(|id| !id.is_empty())
    }
}
