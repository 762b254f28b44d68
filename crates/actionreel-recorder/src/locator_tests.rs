use super::*;
use crate::dom::MemoryDom;

#[test]
fn test_unique_id_wins() {
    let dom = MemoryDom::new();
    let button = dom
        .body()
        .append("button")
        .attr("id", "submit")
        .attr("name", "go")
        .text("Submit");

    let locator = LocatorSynthesizer::synthesize(&button);
    assert_eq!(locator.css, "#submit");
    assert_eq!(locator.xpath, "//*[@id=\"submit\"]");
    assert!(locator.confidence >= 0.9);
}

#[test]
fn test_digit_prefixed_id_is_skipped() {
    let dom = MemoryDom::new();
    let input = dom
        .body()
        .append("input")
        .attr("id", "123abc")
        .attr("name", "email");

    let locator = LocatorSynthesizer::synthesize(&input);
    assert_eq!(locator.css, "input[name=\"email\"]");
    assert!((locator.confidence - 0.85).abs() < 1e-9);
    assert!(!locator.xpath.contains("123abc"));
}

#[test]
fn test_test_attributes_in_order() {
    let dom = MemoryDom::new();
    let body = dom.body();
    let a = body
        .append("div")
        .attr("data-qa", "qa")
        .attr("data-testid", "card");
    let b = body.append("div").attr("data-test", "row");
    let c = body.append("div").attr("data-qa", "footer");

    assert_eq!(LocatorSynthesizer::css_selector(&a), "div[data-testid=\"card\"]");
    assert!((LocatorSynthesizer::synthesize(&a).confidence - 0.90).abs() < 1e-9);
    assert_eq!(LocatorSynthesizer::css_selector(&b), "div[data-test=\"row\"]");
    assert!((LocatorSynthesizer::synthesize(&b).confidence - 0.88).abs() < 1e-9);
    assert_eq!(LocatorSynthesizer::css_selector(&c), "div[data-qa=\"footer\"]");
    assert!((LocatorSynthesizer::synthesize(&c).confidence - 0.85).abs() < 1e-9);
}

#[test]
fn test_aria_label_and_placeholder() {
    let dom = MemoryDom::new();
    let body = dom.body();
    let close = body.append("button").attr("aria-label", "Close dialog");
    let search = body.append("input").attr("placeholder", "Search...");

    let locator = LocatorSynthesizer::synthesize(&close);
    assert_eq!(locator.css, "button[aria-label=\"Close dialog\"]");
    assert!((locator.confidence - 0.80).abs() < 1e-9);

    let locator = LocatorSynthesizer::synthesize(&search);
    assert_eq!(locator.css, "input[placeholder=\"Search...\"]");
    assert!((locator.confidence - 0.65).abs() < 1e-9);
}

#[test]
fn test_attribute_values_are_escaped() {
    let dom = MemoryDom::new();
    let input = dom.body().append("input").attr("name", r#"a"b\c"#);
    assert_eq!(
        LocatorSynthesizer::css_selector(&input),
        r#"input[name="a\"b\\c"]"#
    );
}

#[test]
fn test_id_is_css_escaped() {
    let dom = MemoryDom::new();
    let el = dom.body().append("div").attr("id", "main.content:top");
    assert_eq!(LocatorSynthesizer::css_selector(&el), r"#main\.content\:top");
}

#[test]
fn test_nth_of_type_fallback_is_low_confidence() {
    let dom = MemoryDom::new();
    let list = dom.body().append("ul");
    list.append("li").text("one");
    let second = list.append("li").text("two");

    let locator = LocatorSynthesizer::synthesize(&second);
    assert_eq!(locator.css, "li:nth-of-type(2)");
    assert!(locator.confidence <= 0.35);
    assert_eq!(locator.xpath, "/html/body/ul/li[2]");
}

#[test]
fn test_classes_filtered_and_capped() {
    let dom = MemoryDom::new();
    let el = dom
        .body()
        .append("div")
        .attr("class", "card css-XYZ abc12345 primary a-very-long-generated-name wide");

    let locator = LocatorSynthesizer::synthesize(&el);
    assert_eq!(locator.css, "div.card.primary");
    assert!((locator.confidence - 0.60).abs() < 1e-9);
}

#[test]
fn test_label_raises_weak_selector() {
    let dom = MemoryDom::new();
    let body = dom.body();
    body.append("label").attr("for", "9zip").text("ZIP code");
    body.append("input");
    let zip = body.append("input").attr("id", "9zip");

    let locator = LocatorSynthesizer::synthesize(&zip);
    assert_eq!(locator.css, "input:nth-of-type(2)");
    assert!((locator.confidence - 0.75).abs() < 1e-9);
}

#[test]
fn test_xpath_anchors_at_stable_ancestor() {
    let dom = MemoryDom::new();
    let form = dom.body().append("form").attr("id", "login");
    form.append("div");
    let row = form.append("div");
    let input = row.append("input");

    assert_eq!(
        LocatorSynthesizer::xpath(&input),
        "//*[@id=\"login\"]/div[2]/input"
    );
}

#[test]
fn test_xpath_without_siblings_has_no_index() {
    let dom = MemoryDom::new();
    let span = dom.body().append("main").append("span");
    assert_eq!(LocatorSynthesizer::xpath(&span), "/html/body/main/span");
    assert_eq!(LocatorSynthesizer::xpath(&dom.document()), "/html");
}

#[test]
fn test_score_selector_for_edited_selectors() {
    let dom = MemoryDom::new();
    let el = dom.body().append("a");
    assert!((LocatorSynthesizer::score_selector(&el, Some("#x")) - 0.95).abs() < 1e-9);
    assert!(
        (LocatorSynthesizer::score_selector(&el, Some("a[name=\"n\"]")) - 0.85).abs() < 1e-9
    );
    assert!((LocatorSynthesizer::score_selector(&el, Some("a.link")) - 0.60).abs() < 1e-9);
    assert_eq!(LocatorSynthesizer::score_selector(&el, None), 0.0);
    assert_eq!(LocatorSynthesizer::score_selector(&el, Some("")), 0.0);
}

#[test]
fn test_id_confidence_beats_nth_of_type() {
    let dom = MemoryDom::new();
    let row = dom.body().append("div");
    row.append("span");
    let plain = row.append("span");
    let named = row.append("span").attr("id", "total");

    let weak = LocatorSynthesizer::synthesize(&plain);
    let strong = LocatorSynthesizer::synthesize(&named);
    assert!(strong.confidence > weak.confidence);
}

#[test]
fn test_helpers() {
    assert!(is_stable_id("main"));
    assert!(!is_stable_id("1main"));
    assert!(!is_stable_id(""));
    assert_eq!(escape_css_ident("1col"), "\\31 col");
    assert_eq!(xpath_literal("it's"), "\"it's\"");
    assert_eq!(xpath_literal("say \"hi\""), "'say \"hi\"'");
    assert_eq!(
        xpath_literal("a\"b'c"),
        "concat(\"a\", '\"', \"b'c\")"
    );
}
