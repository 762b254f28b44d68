//! Tree walks and text utilities.

use actionreel_protocols::Element;

/// Ancestors of `el`, nearest first, excluding `el`.
pub fn ancestors<E: Element>(el: &E) -> Vec<E> {
    let mut out = Vec::new();
    let mut current = el.parent();
    while let Some(node) = current {
        current = node.parent();
        out.push(node);
    }
    out
}

/// Topmost ancestor of `el` (the document element).
pub fn root<E: Element>(el: &E) -> E {
    ancestors(el).pop().unwrap_or_else(|| el.clone())
}

/// All descendants of `el` in document order, excluding `el`.
pub fn descendants<E: Element>(el: &E) -> Vec<E> {
    let mut out = Vec::new();
    let mut stack: Vec<E> = el.children().into_iter().rev().collect();
    while let Some(node) = stack.pop() {
        stack.extend(node.children().into_iter().rev());
        out.push(node);
    }
    out
}

/// First of `el` and its ancestors matching `pred`.
pub fn closest<E: Element>(el: &E, pred: impl Fn(&E) -> bool) -> Option<E> {
    if pred(el) {
        return Some(el.clone());
    }
    ancestors(el).into_iter().find(|a| pred(a))
}

pub fn closest_tag<E: Element>(el: &E, tag: &str) -> Option<E> {
    closest(el, |e| e.tag_name() == tag)
}

/// Element with the given id in the document containing `el`.
pub fn find_by_id<E: Element>(el: &E, id: &str) -> Option<E> {
    let doc = root(el);
    if doc.id().as_deref() == Some(id) {
        return Some(doc);
    }
    descendants(&doc)
        .into_iter()
        .find(|e| e.id().as_deref() == Some(id))
}

/// Text of the `<label for=...>` associated with `el`, or of the label
/// wrapping it.
pub fn label_text_for<E: Element>(el: &E) -> Option<String> {
    if let Some(id) = el.id() {
        let doc = root(el);
        let label = descendants(&doc).into_iter().find(|e| {
            e.tag_name() == "label" && e.attribute("for").as_deref() == Some(id.as_str())
        });
        if let Some(label) = label {
            let text = collapse_whitespace(&label.inner_text());
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    let wrapping = ancestors(el).into_iter().find(|a| a.tag_name() == "label")?;
    let text = collapse_whitespace(&wrapping.own_text());
    if text.is_empty() { None } else { Some(text) }
}

/// 1-based position of `el` among same-tag siblings, and their count.
pub fn same_tag_position<E: Element>(el: &E) -> (usize, usize) {
    let Some(parent) = el.parent() else {
        return (1, 1);
    };
    let tag = el.tag_name();
    let mut position = 1;
    let mut count = 0;
    for sibling in parent.children() {
        if sibling.tag_name() != tag {
            continue;
        }
        count += 1;
        if sibling == *el {
            position = count;
        }
    }
    (position, count.max(1))
}

/// Collapse whitespace runs to single spaces and trim.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First `max` characters of `s`.
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
