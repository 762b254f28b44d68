//! Human-readable step descriptions.
//!
//! Each step carries the recorded locator hints (`css=`, `xpath=`, `role=`,
//! `name=`, ...) so a reader or a language model can rebuild a locator
//! without guessing.

use actionreel_protocols::{Action, ActionType};

const MAX_ANCESTORS: usize = 6;
const MAX_NEARBY: usize = 3;
const NEARBY_CHARS: usize = 90;

/// Numbered description of the whole sequence, one step per line.
pub fn describe_actions(actions: &[Action]) -> String {
    if actions.is_empty() {
        return "No actions recorded.".to_string();
    }
    actions
        .iter()
        .enumerate()
        .map(|(i, action)| describe_action(i + 1, action))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Description of one step numbered `step`.
pub fn describe_action(step: usize, action: &Action) -> String {
    let value = action.value.as_deref().unwrap_or_default();
    let target = action.target().unwrap_or_default();
    let name_or = |default: &str| action.output_name().unwrap_or(default).to_string();

    let text = match action.action_type {
        ActionType::Navigate => format!("Navigate to URL: {}", value),
        ActionType::Click => match action.coordinates {
            Some(c) => format!("Click at ({}, {}), element: {}", c.x, c.y, hints(action)),
            None => format!("Click on element: {}", hints(action)),
        },
        ActionType::Fill => format!("Fill input {} with: \"{}\"", hints(action), value),
        ActionType::Press if target.is_empty() => format!("Press key {}", value),
        ActionType::Press => format!("Press key {} on {}", value, target),
        ActionType::Select => format!("Select option {} in {}", value, hints(action)),
        ActionType::Check => format!("Check checkbox: {}", hints(action)),
        ActionType::Uncheck => format!("Uncheck checkbox: {}", hints(action)),
        ActionType::Hover => format!("Hover over element: {}", hints(action)),
        ActionType::Scroll => format!("Scroll page to offset {}", or_zero(value)),
        ActionType::Extract => {
            format!("Extract data from {} into {}", target, name_or("extracted"))
        }
        ActionType::ExtractText => {
            format!("Extract text from {} into {}", target, name_or("extracted_text"))
        }
        ActionType::ExtractHtml => {
            format!("Extract HTML from {} into {}", target, name_or("extracted_html"))
        }
        ActionType::ExtractAttribute => format!(
            "Extract attribute '{}' from {} into {}",
            action.attribute_name.as_deref().unwrap_or("attribute"),
            target,
            name_or("extracted")
        ),
        ActionType::ExecuteJs => format!(
            "Execute JavaScript and store result in {}",
            name_or("result")
        ),
        ActionType::AiExtract => format!(
            "AI extract \"{}\" into {}",
            action.prompt.as_deref().unwrap_or("AI extraction"),
            action
                .output_key
                .as_deref()
                .or(action.variable_name.as_deref())
                .unwrap_or("ai_extracted")
        ),
        ActionType::AiFill => format!(
            "AI fill {} with \"{}\"",
            target,
            action.prompt.as_deref().unwrap_or("AI fill")
        ),
    };
    format!("{}. {}", step, text)
}

fn or_zero(value: &str) -> &str {
    if value.is_empty() { "0" } else { value }
}

/// Locator hints recorded for the target.
fn hints(action: &Action) -> String {
    let mut parts = Vec::new();
    if let Some(css) = action.selector.as_deref().filter(|s| !s.is_empty()) {
        parts.push(format!("css={}", css));
    }
    if let Some(xpath) = action.xpath.as_deref().filter(|s| !s.is_empty()) {
        parts.push(format!("xpath={}", xpath));
    }
    if let Some(a11y) = &action.accessibility {
        if !a11y.role.is_empty() {
            parts.push(format!("role={}", a11y.role));
        }
        if !a11y.name.is_empty() {
            parts.push(format!("name=\"{}\"", a11y.name));
        }
    }
    if let Some(context) = &action.context {
        if !context.form_hint.is_empty() {
            parts.push(format!("form_hint={}", context.form_hint));
        }
        if !context.ancestor_tags.is_empty() {
            let ancestors: Vec<&str> = context
                .ancestor_tags
                .iter()
                .take(MAX_ANCESTORS)
                .map(String::as_str)
                .collect();
            parts.push(format!("ancestors={}", ancestors.join(">")));
        }
        if !context.nearby_text.is_empty() {
            let nearby: Vec<&str> = context
                .nearby_text
                .iter()
                .take(MAX_NEARBY)
                .map(String::as_str)
                .collect();
            parts.push(format!("nearby=\"{}\"", truncate(&nearby.join(" | "), NEARBY_CHARS)));
        }
    }
    if let Some(evidence) = &action.evidence {
        parts.push(format!("confidence={:.2}", evidence.confidence));
    }
    let text = action
        .text
        .as_deref()
        .or(match action.action_type {
            ActionType::Click => action.value.as_deref(),
            _ => None,
        })
        .map(str::trim)
        .unwrap_or_default();
    if !text.is_empty() {
        parts.push(format!("text=\"{}\"", text));
    }

    if parts.is_empty() {
        "(unknown)".to_string()
    } else {
        parts.join(", ")
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actionreel_protocols::{Accessibility, ActionContext, Evidence};

    fn recorded_click() -> Action {
        let mut action = Action::new(ActionType::Click)
            .with_selector("#submit")
            .with_xpath("//*[@id=\"submit\"]")
            .with_value("Submit");
        action.accessibility = Some(Accessibility {
            role: "button".to_string(),
            name: "Submit".to_string(),
            value: String::new(),
        });
        action.context = Some(ActionContext {
            nearby_text: vec!["Email".to_string(), "Password".to_string()],
            ancestor_tags: vec!["button".into(), "form".into(), "body".into(), "html".into()],
            form_hint: "login".to_string(),
        });
        action.evidence = Some(Evidence { confidence: 0.95 });
        action
    }

    #[test]
    fn test_click_carries_locator_hints() {
        let line = describe_action(2, &recorded_click());
        assert_eq!(
            line,
            "2. Click on element: css=#submit, xpath=//*[@id=\"submit\"], role=button, \
             name=\"Submit\", form_hint=login, ancestors=button>form>body>html, \
             nearby=\"Email | Password\", confidence=0.95, text=\"Submit\""
        );
    }

    #[test]
    fn test_click_with_coordinates() {
        let action = Action::new(ActionType::Click).with_coordinates(10.0, 20.5);
        assert_eq!(
            describe_action(1, &action),
            "1. Click at (10, 20.5), element: (unknown)"
        );
    }

    #[test]
    fn test_sequence_numbering() {
        let actions = vec![
            Action::navigate("https://example.com"),
            Action::new(ActionType::Fill)
                .with_selector("input[name=\"q\"]")
                .with_value("rust"),
            Action::new(ActionType::Press).with_value("Enter"),
            Action::new(ActionType::ExtractAttribute)
                .with_selector("a")
                .with_attribute_name("href")
                .with_variable_name("link"),
            Action::new(ActionType::ExecuteJs).with_js_code("return 1;"),
            Action::new(ActionType::AiExtract).with_prompt("titles"),
            Action::new(ActionType::Scroll),
        ];
        let text = describe_actions(&actions);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "1. Navigate to URL: https://example.com");
        assert_eq!(lines[1], "2. Fill input css=input[name=\"q\"] with: \"rust\"");
        assert_eq!(lines[2], "3. Press key Enter");
        assert_eq!(lines[3], "4. Extract attribute 'href' from a into link");
        assert_eq!(lines[4], "5. Execute JavaScript and store result in result");
        assert_eq!(lines[5], "6. AI extract \"titles\" into ai_extracted");
        assert_eq!(lines[6], "7. Scroll page to offset 0");
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(describe_actions(&[]), "No actions recorded.");
    }

    #[test]
    fn test_nearby_text_truncated() {
        let mut action = Action::new(ActionType::Hover).with_selector("li");
        action.context = Some(ActionContext {
            nearby_text: vec!["x".repeat(80), "y".repeat(80)],
            ..Default::default()
        });
        let line = describe_action(1, &action);
        let nearby = line.split("nearby=\"").nth(1).unwrap();
        assert!(nearby.starts_with(&"x".repeat(80)));
        assert!(nearby.ends_with("...\""));
        assert_eq!(nearby.chars().count(), NEARBY_CHARS + 1);
    }
}
