//! HTML serialization.

use actionreel_protocols::Element;

const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Serialize `el` and its subtree, keeping only attributes for which
/// `keep` returns true. An element's own text precedes its children.
pub fn outer_html<E: Element>(el: &E, keep: &dyn Fn(&str) -> bool) -> String {
    let mut out = String::new();
    write_element(el, keep, &mut out);
    out
}

fn write_element<E: Element>(el: &E, keep: &dyn Fn(&str) -> bool, out: &mut String) {
    let tag = el.tag_name();
    out.push('<');
    out.push_str(&tag);
    for name in el.attribute_names() {
        if !keep(&name) {
            continue;
        }
        let value = el.attribute(&name).unwrap_or_default();
        out.push(' ');
        out.push_str(&name);
        if !value.is_empty() {
            out.push_str("=\"");
            out.push_str(&escape(&value, true));
            out.push('"');
        }
    }
    out.push('>');
    if VOID_TAGS.contains(&tag.as_str()) {
        return;
    }
    out.push_str(&escape(&el.own_text(), false));
    for child in el.children() {
        write_element(&child, keep, out);
    }
    out.push_str("</");
    out.push_str(&tag);
    out.push('>');
}

fn escape(s: &str, attribute: bool) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDom;

    #[test]
    fn test_outer_html_keeps_structure() {
        let dom = MemoryDom::new();
        let div = dom.body().append("div").attr("class", "card").text("Price");
        div.append("span").text("$5 < $6");
        div.append("br");

        let html = outer_html(&div, &|_| true);
        assert_eq!(
            html,
            r#"<div class="card">Price<span>$5 &lt; $6</span><br></div>"#
        );
    }

    #[test]
    fn test_outer_html_filters_attributes() {
        let dom = MemoryDom::new();
        let a = dom
            .body()
            .append("a")
            .attr("href", "/x?a=1&b=\"2\"")
            .attr("style", "color: red")
            .attr("hidden", "");

        let html = outer_html(&a, &|name| name != "style");
        assert_eq!(html, r#"<a href="/x?a=1&amp;b=&quot;2&quot;" hidden></a>"#);
    }
}
