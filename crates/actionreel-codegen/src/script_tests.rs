use super::*;
use actionreel_protocols::ExtractType;

fn generate(actions: &[Action]) -> GeneratedScript {
    ScriptGenerator::new(ScriptOptions::default())
        .generate(actions)
        .unwrap()
}

fn login_flow() -> Vec<Action> {
    vec![
        Action::navigate("https://example.com/login"),
        Action::new(ActionType::Fill)
            .with_selector(r#"input[name="email"]"#)
            .with_value("ada@example.com"),
        Action::new(ActionType::Click).with_selector("#submit"),
        Action::new(ActionType::ExtractText)
            .with_selector("h1.title")
            .with_variable_name("page title"),
    ]
}

#[test]
fn test_strictness_from_str() {
    assert_eq!("skip".parse::<Strictness>().unwrap(), Strictness::Skip);
    assert_eq!("fail_fast".parse::<Strictness>().unwrap(), Strictness::FailFast);
    let err = "lenient".parse::<Strictness>().unwrap_err();
    assert!(err.to_string().contains("lenient"));
}

#[test]
fn test_options_from_config() {
    let config = CodegenConfig {
        strictness: "fail_fast".to_string(),
        headless: true,
        ..Default::default()
    };
    let options = ScriptOptions::from_config(&config).unwrap();
    assert_eq!(options.strictness, Strictness::FailFast);
    assert!(options.headless);
    assert_eq!(options.content_chars, 5000);
    assert_eq!(ScriptOptions::default().helper_module, "ai_helpers");
}

#[test]
fn test_script_structure() {
    let script = generate(&login_flow());
    let src = &script.source;

    assert!(script.warnings.is_empty());
    assert!(src.starts_with("#!/usr/bin/env python3\n"));
    assert!(src.contains("from playwright.sync_api import sync_playwright\n"));
    assert!(!src.contains("ai_helpers"));
    assert!(src.contains("def run_skill() -> dict[str, Any]:\n"));
    assert!(src.contains("browser = p.chromium.launch(headless=False)"));
    assert!(src.contains("\"content\": page.content()[:5000],"));
    assert!(src.contains("\"extracted\": extracted,"));
    assert!(src.ends_with(
        "    print(json.dumps(run_skill(), ensure_ascii=False, indent=2, default=str))\n"
    ));
}

#[test]
fn test_steps_in_order() {
    let src = generate(&login_flow()).source;

    let goto = src
        .find("            page.goto(\"https://example.com/login\")\n")
        .unwrap();
    let idle = src.find("page.wait_for_load_state(\"networkidle\")").unwrap();
    let fill = src
        .find(r#"page.locator("input[name=\"email\"]").first.fill("ada@example.com")"#)
        .unwrap();
    let click = src.find("page.locator(\"#submit\").first.click()").unwrap();
    let loaded = src
        .find("page.wait_for_load_state(\"domcontentloaded\")")
        .unwrap();
    let extract = src
        .find("page_title = page.locator(\"h1.title\").first.text_content()")
        .unwrap();
    assert!(goto < idle && idle < fill && fill < click && click < loaded && loaded < extract);
    assert!(src.contains("extracted[\"page title\"] = page_title"));
}

#[test]
fn test_generation_is_deterministic() {
    let actions = login_flow();
    let mut generator = ScriptGenerator::new(ScriptOptions::default());
    let first = generator.generate(&actions).unwrap();
    let second = generator.generate(&actions).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, generate(&actions));
}

#[test]
fn test_element_actions() {
    let actions = vec![
        Action::new(ActionType::Press).with_value("Enter"),
        Action::new(ActionType::Select).with_selector("select#country").with_value("de"),
        Action::new(ActionType::Check).with_selector("#terms"),
        Action::new(ActionType::Uncheck).with_xpath("//input[@name=\"news\"]"),
        Action::new(ActionType::Hover).with_selector(".menu"),
        Action::new(ActionType::Scroll).with_value("1200"),
    ];
    let src = generate(&actions).source;
    assert!(src.contains("page.keyboard.press(\"Enter\")"));
    assert!(src.contains("page.locator(\"select#country\").first.select_option(\"de\")"));
    assert!(src.contains("page.locator(\"#terms\").first.check()"));
    assert!(src.contains(r#"page.locator("xpath=//input[@name=\"news\"]").first.uncheck()"#));
    assert!(src.contains("page.locator(\".menu\").first.hover()"));
    assert!(src.contains("page.evaluate(\"window.scrollTo(0, 1200)\")"));
}

#[test]
fn test_extraction_variants() {
    let actions = vec![
        Action::new(ActionType::ExtractHtml)
            .with_selector("#list")
            .with_extract_type(ExtractType::Html),
        Action::new(ActionType::ExtractAttribute)
            .with_selector("a.next")
            .with_attribute_name("href")
            .with_variable_name("next"),
        Action::new(ActionType::ExecuteJs)
            .with_js_code("return [...document.querySelectorAll('li')].map(e => e.textContent);")
            .with_variable_name("ai_data_2"),
        Action::new(ActionType::Extract)
            .with_selector(".price")
            .with_output_key("class"),
    ];
    let src = generate(&actions).source;
    assert!(src.contains("extracted_html = page.locator(\"#list\").first.inner_html()"));
    assert!(src.contains("next = page.locator(\"a.next\").first.get_attribute(\"href\")"));
    assert!(src.contains(
        "ai_data_2 = page.evaluate(\"return [...document.querySelectorAll('li')].map(e => e.textContent);\")"
    ));
    assert!(src.contains("class_ = page.locator(\".price\").first.text_content()"));
    assert!(src.contains("extracted[\"class\"] = class_"));
}

#[test]
fn test_ai_helpers_imported_when_used() {
    let actions = vec![
        Action::new(ActionType::AiExtract)
            .with_prompt("all prices\nin EUR")
            .with_output_key("prices"),
        Action::new(ActionType::AiFill)
            .with_selector("#bio")
            .with_prompt("a short bio"),
    ];
    let src = generate(&actions).source;
    assert!(src.contains("from ai_helpers import ai_extract, ai_generate\n"));
    assert!(src.contains("            # AI extract: all prices in EUR\n"));
    assert!(src.contains("prices = ai_extract(page.content()[:10000], \"all prices\\nin EUR\")"));
    assert!(src.contains("page.locator(\"#bio\").first.fill(ai_generate(\"a short bio\"))"));
}

#[test]
fn test_hostile_values_stay_inside_literals() {
    let actions = vec![Action::new(ActionType::Fill)
        .with_selector("#q\nimport os")
        .with_value("\"); os.system('x') #")];
    let src = generate(&actions).source;
    assert!(src.contains(r#".fill("\"); os.system('x') #")"#));
    assert!(src.contains(r##"page.locator("#q\nimport os")"##));
    assert!(!src.lines().any(|l| l.trim_start().starts_with("import os")));
}

#[test]
fn test_invalid_action_skipped_with_warning() {
    let actions = vec![
        Action::navigate("https://example.com"),
        Action::new(ActionType::Click),
        Action::new(ActionType::Scroll).with_value("far"),
    ];
    let script = generate(&actions);
    assert_eq!(script.warnings.len(), 2);
    assert!(script.warnings[0].starts_with("Skipped action 2 (click):"));
    assert!(script.warnings[1].contains("not a number"));
    assert!(script.source.contains("            # Skipped action 2 (click): Invalid selector"));
    assert!(script.source.contains("page.goto(\"https://example.com\")"));
}

#[test]
fn test_fail_fast_reports_step() {
    let actions = vec![
        Action::navigate("https://example.com"),
        Action::new(ActionType::ExecuteJs),
    ];
    let options = ScriptOptions::default().with_strictness(Strictness::FailFast);
    let err = ScriptGenerator::new(options).generate(&actions).unwrap_err();
    match err {
        CodegenError::InvalidAction {
            index,
            action_type,
            reason,
        } => {
            assert_eq!(index, 2);
            assert_eq!(action_type, ActionType::ExecuteJs);
            assert!(reason.contains("js_code"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_helper_module_path() {
    assert_eq!(helper_module_path("ai_helpers"), "ai_helpers");
    assert_eq!(helper_module_path("pkg.ai-helpers"), "pkg.ai_helpers");
    assert_eq!(helper_module_path(""), "ai_helpers");
}

#[test]
fn test_empty_sequence_still_returns_page_state() {
    let src = generate(&[]).source;
    assert!(src.contains("        try:\n            return {\n"));
}

fn recorded_submit() -> Action {
    let mut action = Action::new(ActionType::Click)
        .with_selector("#submit")
        .with_xpath("//*[@id=\"submit\"]")
        .with_value("Submit")
        .with_coordinates(120.0, 48.5);
    action.accessibility = Some(actionreel_protocols::Accessibility {
        role: "button".to_string(),
        name: "Submit".to_string(),
        value: String::new(),
    });
    action
}

#[test]
fn test_click_resolves_through_locator_chain() {
    let src = generate(&[recorded_submit()]).source;

    assert!(src.contains("def _first_match(candidates: list[Any]) -> Any:\n"));
    let chain = "            target = _first_match([\
                 page.get_by_role(\"button\", name=\"Submit\"), \
                 page.get_by_text(\"Submit\", exact=True), \
                 page.locator(\"#submit\"), \
                 page.locator(\"xpath=//*[@id=\\\"submit\\\"]\")])\n";
    assert!(src.contains(chain), "{src}");
    assert!(src.contains(
        "            if target is None:\n\
         \x20               page.mouse.click(120, 48.5)\n\
         \x20           else:\n\
         \x20               target.click()\n"
    ));
    assert!(src.find("def _first_match").unwrap() < src.find("def run_skill").unwrap());
}

#[test]
fn test_click_with_only_coordinates() {
    let actions = vec![Action::new(ActionType::Click).with_coordinates(10.0, 20.0)];
    let script = generate(&actions);
    assert!(script.warnings.is_empty());
    assert!(script.source.contains("            page.mouse.click(10, 20)\n"));
    assert!(!script.source.contains("_first_match"));
}

#[test]
fn test_fill_chain_raises_when_nothing_matches() {
    let mut action = Action::new(ActionType::Fill)
        .with_selector("input[name=\"email\"]")
        .with_value("ada@example.com");
    action.accessibility = Some(actionreel_protocols::Accessibility {
        role: "textbox".to_string(),
        name: "Email".to_string(),
        value: String::new(),
    });
    let src = generate(&[action]).source;
    assert!(src.contains(
        "target = _first_match([page.get_by_role(\"textbox\", name=\"Email\"), \
         page.locator(\"input[name=\\\"email\\\"]\")])"
    ));
    assert!(src.contains("    raise RuntimeError(\"No locator matched step 1\")"));
    assert!(src.contains("            target.fill(\"ada@example.com\")\n"));
}

#[test]
fn test_non_finite_coordinates_skipped() {
    let actions = vec![Action::new(ActionType::Click).with_coordinates(f64::NAN, 1.0)];
    let script = generate(&actions);
    assert_eq!(script.warnings.len(), 1);
    assert!(script.warnings[0].contains("not finite"));
}

#[test]
fn test_variable_named_after_script_global() {
    let actions = vec![Action::new(ActionType::ExtractText)
        .with_selector("h1")
        .with_variable_name("ai_extract")];
    let src = generate(&actions).source;
    assert!(src.contains("ai_extract_ = page.locator(\"h1\").first.text_content()"));
    assert!(src.contains("extracted[\"ai_extract\"] = ai_extract_"));
}
