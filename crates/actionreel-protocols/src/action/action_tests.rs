use super::*;

#[test]
fn test_action_type_wire_names() {
    assert_eq!(ActionType::ExtractAttribute.as_str(), "extract_attribute");
    assert_eq!(ActionType::AiFill.to_string(), "ai_fill");
    let json = serde_json::to_string(&ActionType::ExecuteJs).unwrap();
    assert_eq!(json, "\"execute_js\"");
}

#[test]
fn test_action_type_from_str() {
    for t in ActionType::ALL {
        assert_eq!(t.as_str().parse::<ActionType>().unwrap(), t);
    }
    assert!("teleport".parse::<ActionType>().is_err());
}

#[test]
fn test_requires_target() {
    assert!(ActionType::Click.requires_target());
    assert!(ActionType::ExtractText.requires_target());
    assert!(ActionType::AiFill.requires_target());
    assert!(!ActionType::Navigate.requires_target());
    assert!(!ActionType::Scroll.requires_target());
    assert!(!ActionType::Press.requires_target());
    assert!(!ActionType::AiExtract.requires_target());
}

#[test]
fn test_extract_type_maps_to_action_type() {
    assert_eq!(ExtractType::Text.action_type(), ActionType::ExtractText);
    assert_eq!(ExtractType::Html.action_type(), ActionType::ExtractHtml);
    assert_eq!(
        ExtractType::Attribute.action_type(),
        ActionType::ExtractAttribute
    );
    assert_eq!(ExtractType::default(), ExtractType::Text);
}

#[test]
fn test_action_serializes_type_field() {
    let action = Action::new(ActionType::Click).with_selector("#submit");
    let value = serde_json::to_value(&action).unwrap();
    assert_eq!(value["type"], "click");
    assert_eq!(value["selector"], "#submit");
    assert!(value.get("xpath").is_none());
    assert!(value.get("intent").is_none());
}

#[test]
fn test_action_deserializes_minimal_record() {
    let json = r#"[{"type": "navigate", "value": "https://example.com"},
                   {"type": "fill", "selector": "input[name=\"q\"]", "value": "rust",
                    "evidence": {"confidence": 0.85}}]"#;
    let actions = Action::list_from_json(json).unwrap();
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0].action_type, ActionType::Navigate);
    assert_eq!(actions[0].timestamp, 0);
    assert_eq!(actions[1].target(), Some("input[name=\"q\"]"));
    assert!((actions[1].confidence() - 0.85).abs() < f64::EPSILON);
}

#[test]
fn test_target_falls_back_to_xpath() {
    let action = Action::new(ActionType::Click)
        .with_selector("")
        .with_xpath("//*[@id=\"x\"]");
    assert_eq!(action.target(), Some("//*[@id=\"x\"]"));
    assert_eq!(Action::new(ActionType::Scroll).target(), None);
}

#[test]
fn test_output_name_prefers_variable_name() {
    let action = Action::new(ActionType::ExtractText)
        .with_output_key("extracted")
        .with_variable_name("price");
    assert_eq!(action.output_name(), Some("price"));

    let draft = Action::new(ActionType::Extract).with_output_key("extracted");
    assert_eq!(draft.output_name(), Some("extracted"));
}

#[test]
fn test_patch_is_copy_on_write() {
    let original = Action::new(ActionType::Click)
        .with_selector("#a")
        .with_value("Go");
    let patch = ActionPatch::new().selector("#b").value("");
    let edited = original.patched(&patch);

    assert_eq!(original.selector.as_deref(), Some("#a"));
    assert_eq!(original.value.as_deref(), Some("Go"));
    assert_eq!(edited.selector.as_deref(), Some("#b"));
    assert_eq!(edited.value, None);
    assert_eq!(edited.action_type, ActionType::Click);
}

#[test]
fn test_patch_changes_type() {
    let original = Action::new(ActionType::Click).with_selector("#a");
    let edited = original.patched(
        &ActionPatch::new()
            .action_type(ActionType::ExtractAttribute)
            .attribute_name("href"),
    );
    assert_eq!(edited.action_type, ActionType::ExtractAttribute);
    assert_eq!(edited.attribute_name.as_deref(), Some("href"));
}

#[test]
fn test_empty_patch() {
    assert!(ActionPatch::new().is_empty());
    assert!(!ActionPatch::new().prompt("x").is_empty());
    let action = Action::navigate("https://example.com");
    assert_eq!(action.patched(&ActionPatch::new()), action);
}

#[test]
fn test_validate_action_rules() {
    assert!(validate_action(&Action::new(ActionType::Hover)).is_err());
    assert!(validate_action(&Action::new(ActionType::Hover).with_xpath("//div")).is_ok());
    assert!(validate_action(&Action::new(ActionType::Press)).is_err());
    assert!(validate_action(&Action::new(ActionType::Scroll)).is_ok());
    assert!(validate_action(&Action::new(ActionType::Click)).is_err());
    assert!(validate_action(&Action::new(ActionType::Click).with_coordinates(40.0, 12.5)).is_ok());
    assert!(validate_action(&Action::new(ActionType::Fill).with_coordinates(1.0, 1.0)).is_err());
    assert!(validate_action(&Action::new(ActionType::AiExtract)).is_err());
    assert!(validate_action(&Action::new(ActionType::AiExtract).with_prompt("prices")).is_ok());
    assert!(validate_action(
        &Action::new(ActionType::ExtractAttribute)
            .with_selector("a")
            .with_attribute_name("href")
    )
    .is_ok());
}
