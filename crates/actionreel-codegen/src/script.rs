//! Playwright for Python script generation.
//!
//! The script is a single `run_skill()` entry point using the sync API.
//! Every interpolated value goes through [`py_str`]; comments are
//! flattened to one line.
//!
//! An element step with more than one recorded locator resolves its target
//! at replay time: role and accessible name, then visible text (clicks),
//! then CSS, then XPath. A click whose locators all miss falls back to the
//! recorded coordinates.

use std::collections::BTreeSet;
use std::str::FromStr;

use actionreel_config::CodegenConfig;
use actionreel_protocols::{Action, ActionType, CodegenError, validate_action};
use thiserror::Error;
use tracing::{debug, warn};

use crate::escape::{flatten_comment, py_str, sanitize_identifier};

const STEP_INDENT: &str = "            ";
const DEFAULT_HELPER_MODULE: &str = "ai_helpers";
/// Longest click text used as a `get_by_text` candidate.
const MAX_TEXT_CANDIDATE: usize = 80;
const FIRST_MATCH_FN: &str = "_first_match";

/// What to do with an action that cannot be turned into code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Emit a comment in place of the step and record a warning.
    #[default]
    Skip,
    /// Stop with [`CodegenError::InvalidAction`].
    FailFast,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown strictness '{0}', expected 'skip' or 'fail_fast'")]
pub struct ParseStrictnessError(String);

impl FromStr for Strictness {
    type Err = ParseStrictnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skip" => Ok(Strictness::Skip),
            "fail_fast" => Ok(Strictness::FailFast),
            other => Err(ParseStrictnessError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptOptions {
    pub strictness: Strictness,
    pub headless: bool,
    /// Characters of `page.content()` in the result.
    pub content_chars: usize,
    /// Characters of `page.content()` handed to `ai_extract`.
    pub ai_content_chars: usize,
    /// Module providing `ai_extract` and `ai_generate`.
    pub helper_module: String,
}

impl Default for ScriptOptions {
    fn default() -> Self {
        let config = CodegenConfig::default();
        Self {
            strictness: Strictness::default(),
            headless: config.headless,
            content_chars: config.content_chars,
            ai_content_chars: config.ai_content_chars,
            helper_module: config.helper_module,
        }
    }
}

impl ScriptOptions {
    pub fn from_config(config: &CodegenConfig) -> Result<Self, ParseStrictnessError> {
        Ok(Self {
            strictness: config.strictness.parse()?,
            headless: config.headless,
            content_chars: config.content_chars,
            ai_content_chars: config.ai_content_chars,
            helper_module: config.helper_module.clone(),
        })
    }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }
}

/// Script source plus the steps that were skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedScript {
    pub source: String,
    pub warnings: Vec<String>,
}

/// Builds Playwright scripts from action sequences.
pub struct ScriptGenerator {
    options: ScriptOptions,
    buffer: String,
    warnings: Vec<String>,
    helpers: BTreeSet<&'static str>,
    /// Whether a step resolves its target through `_first_match`.
    fallbacks: bool,
}

impl ScriptGenerator {
    pub fn new(options: ScriptOptions) -> Self {
        Self {
            options,
            buffer: String::with_capacity(4096),
            warnings: Vec::new(),
            helpers: BTreeSet::new(),
            fallbacks: false,
        }
    }

    pub fn options(&self) -> &ScriptOptions {
        &self.options
    }

    /// Generate the script for `actions`. The same input always yields the
    /// same output.
    pub fn generate(&mut self, actions: &[Action]) -> Result<GeneratedScript, CodegenError> {
        self.buffer.clear();
        self.warnings.clear();
        self.helpers.clear();
        self.fallbacks = false;

        let mut steps = String::new();
        for (i, action) in actions.iter().enumerate() {
            let step = i + 1;
            match self.step_lines(step, action) {
                Ok(lines) => {
                    for line in lines {
                        push_line(&mut steps, STEP_INDENT, &line);
                    }
                }
                Err(reason) => {
                    if self.options.strictness == Strictness::FailFast {
                        return Err(CodegenError::InvalidAction {
                            index: step,
                            action_type: action.action_type,
                            reason,
                        });
                    }
                    let message =
                        format!("Skipped action {} ({}): {}", step, action.action_type, reason);
                    warn!("{}", message);
                    push_line(&mut steps, STEP_INDENT, &format!("# {}", flatten_comment(&message)));
                    self.warnings.push(message);
                }
            }
        }

        self.write_header();
        self.buffer.push_str(&steps);
        self.write_footer();
        debug!(
            steps = actions.len(),
            skipped = self.warnings.len(),
            "Generated Playwright script"
        );

        Ok(GeneratedScript {
            source: std::mem::take(&mut self.buffer),
            warnings: std::mem::take(&mut self.warnings),
        })
    }

    fn write_header(&mut self) {
        let out = &mut self.buffer;
        push_line(out, "", "#!/usr/bin/env python3");
        push_line(out, "", "\"\"\"Replay a recorded browser session with Playwright.\"\"\"");
        push_line(out, "", "");
        push_line(out, "", "import json");
        push_line(out, "", "from typing import Any");
        push_line(out, "", "");
        push_line(out, "", "from playwright.sync_api import sync_playwright");
        if !self.helpers.is_empty() {
            let names: Vec<&str> = self.helpers.iter().copied().collect();
            push_line(
                out,
                "",
                &format!(
                    "from {} import {}",
                    helper_module_path(&self.options.helper_module),
                    names.join(", ")
                ),
            );
        }
        push_line(out, "", "");
        push_line(out, "", "");
        if self.fallbacks {
            write_first_match(out);
        }
        push_line(out, "", "def run_skill() -> dict[str, Any]:");
        push_line(out, "    ", "extracted: dict[str, Any] = {}");
        push_line(out, "    ", "with sync_playwright() as p:");
        push_line(
            out,
            "        ",
            &format!(
                "browser = p.chromium.launch(headless={})",
                if self.options.headless { "True" } else { "False" }
            ),
        );
        push_line(out, "        ", "page = browser.new_page()");
        push_line(out, "        ", "try:");
    }

    fn write_footer(&mut self) {
        let out = &mut self.buffer;
        push_line(out, STEP_INDENT, "return {");
        push_line(out, STEP_INDENT, "    \"url\": page.url,");
        push_line(out, STEP_INDENT, "    \"title\": page.title(),");
        push_line(
            out,
            STEP_INDENT,
            &format!("    \"content\": page.content()[:{}],", self.options.content_chars),
        );
        push_line(out, STEP_INDENT, "    \"extracted\": extracted,");
        push_line(out, STEP_INDENT, "}");
        push_line(out, "        ", "finally:");
        push_line(out, "            ", "browser.close()");
        push_line(out, "", "");
        push_line(out, "", "");
        push_line(out, "", "if __name__ == \"__main__\":");
        push_line(
            out,
            "    ",
            "print(json.dumps(run_skill(), ensure_ascii=False, indent=2, default=str))",
        );
    }

    /// Python lines for one step, or why the step cannot be generated.
    fn step_lines(&mut self, step: usize, action: &Action) -> Result<Vec<String>, String> {
        validate_action(action).map_err(|e| e.to_string())?;

        let kind = action.action_type;
        let mut lines = vec![format!("# {}", flatten_comment(&step_title(step, action)))];
        let value = py_str(action.value.as_deref().unwrap_or_default());

        match kind {
            ActionType::Navigate => {
                lines.push(format!("page.goto({})", value));
                lines.push("page.wait_for_load_state(\"networkidle\")".to_string());
            }
            ActionType::Click => {
                self.click_lines(step, action, &mut lines)?;
                lines.push("page.wait_for_load_state(\"domcontentloaded\")".to_string());
            }
            ActionType::Press => lines.push(format!("page.keyboard.press({})", value)),
            ActionType::Fill
            | ActionType::Select
            | ActionType::Check
            | ActionType::Uncheck
            | ActionType::Hover => {
                let el = self.resolve_target(step, action, &mut lines);
                let call = match kind {
                    ActionType::Fill => format!("fill({})", value),
                    ActionType::Select => format!("select_option({})", value),
                    ActionType::Check => "check()".to_string(),
                    ActionType::Uncheck => "uncheck()".to_string(),
                    _ => "hover()".to_string(),
                };
                lines.push(format!("{}.{}", el, call));
            }
            ActionType::Scroll => {
                let offset = scroll_offset(action.value.as_deref())?;
                lines.push(format!(
                    "page.evaluate({})",
                    py_str(&format!("window.scrollTo(0, {})", offset))
                ));
            }
            ActionType::Extract | ActionType::ExtractText => {
                let el = self.resolve_target(step, action, &mut lines);
                bind(&mut lines, action, &format!("{}.text_content()", el));
            }
            ActionType::ExtractHtml => {
                let el = self.resolve_target(step, action, &mut lines);
                bind(&mut lines, action, &format!("{}.inner_html()", el));
            }
            ActionType::ExtractAttribute => {
                let attribute = py_str(action.attribute_name.as_deref().unwrap_or_default());
                let el = self.resolve_target(step, action, &mut lines);
                bind(&mut lines, action, &format!("{}.get_attribute({})", el, attribute));
            }
            ActionType::ExecuteJs => {
                let code = py_str(action.js_code.as_deref().unwrap_or_default());
                bind(&mut lines, action, &format!("page.evaluate({})", code));
            }
            ActionType::AiExtract => {
                let prompt = action.prompt.as_deref().unwrap_or_default();
                self.helpers.insert("ai_extract");
                lines.push(format!("# AI extract: {}", flatten_comment(prompt)));
                bind(
                    &mut lines,
                    action,
                    &format!(
                        "ai_extract(page.content()[:{}], {})",
                        self.options.ai_content_chars,
                        py_str(prompt)
                    ),
                );
            }
            ActionType::AiFill => {
                let prompt = action.prompt.as_deref().unwrap_or_default();
                self.helpers.insert("ai_generate");
                lines.push(format!("# AI fill: {}", flatten_comment(prompt)));
                let el = self.resolve_target(step, action, &mut lines);
                lines.push(format!("{}.fill(ai_generate({}))", el, py_str(prompt)));
            }
        }
        Ok(lines)
    }

    /// Expression for the step's element. With several candidates the
    /// target is resolved into a local first, raising when none matches.
    fn resolve_target(&mut self, step: usize, action: &Action, lines: &mut Vec<String>) -> String {
        let candidates = locator_candidates(action);
        match candidates.as_slice() {
            [] => "page".to_string(),
            [only] => format!("{}.first", only),
            _ => {
                self.fallbacks = true;
                lines.push(first_match_call(&candidates));
                lines.push("if target is None:".to_string());
                lines.push(format!(
                    "    raise RuntimeError({})",
                    py_str(&format!("No locator matched step {}", step))
                ));
                "target".to_string()
            }
        }
    }

    /// Click on the resolved element, or at the recorded point when no
    /// locator matches.
    fn click_lines(
        &mut self,
        step: usize,
        action: &Action,
        lines: &mut Vec<String>,
    ) -> Result<(), String> {
        let Some(point) = action.coordinates else {
            let el = self.resolve_target(step, action, lines);
            lines.push(format!("{}.click()", el));
            return Ok(());
        };
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err("click coordinates are not finite".to_string());
        }
        let mouse = format!(
            "page.mouse.click({}, {})",
            format_number(point.x),
            format_number(point.y)
        );
        let candidates = locator_candidates(action);
        if candidates.is_empty() {
            lines.push(mouse);
            return Ok(());
        }
        self.fallbacks = true;
        lines.push(first_match_call(&candidates));
        lines.push("if target is None:".to_string());
        lines.push(format!("    {}", mouse));
        lines.push("else:".to_string());
        lines.push("    target.click()".to_string());
        Ok(())
    }
}

fn push_line(out: &mut String, indent: &str, line: &str) {
    if !line.is_empty() {
        out.push_str(indent);
        out.push_str(line);
    }
    out.push('\n');
}

fn step_title(step: usize, action: &Action) -> String {
    match action.target() {
        Some(target) => format!("{}. {} {}", step, action.action_type, target),
        None => format!("{}. {}", step, action.action_type),
    }
}

/// Locator expressions for the action target, most semantic first:
/// role and accessible name, click text, CSS, XPath.
fn locator_candidates(action: &Action) -> Vec<String> {
    fn non_empty(v: Option<&str>) -> Option<&str> {
        v.map(str::trim).filter(|s| !s.is_empty())
    }
    let mut candidates = Vec::new();

    if let Some(a11y) = &action.accessibility {
        let role = a11y.role.trim();
        let name = a11y.name.trim();
        if !role.is_empty() && role != "generic" && !name.is_empty() {
            candidates.push(format!(
                "page.get_by_role({}, name={})",
                py_str(role),
                py_str(name)
            ));
        }
    }
    if action.action_type == ActionType::Click {
        let text = non_empty(action.text.as_deref()).or(non_empty(action.value.as_deref()));
        if let Some(text) = text.filter(|t| t.chars().count() <= MAX_TEXT_CANDIDATE) {
            candidates.push(format!("page.get_by_text({}, exact=True)", py_str(text)));
        }
    }
    if let Some(css) = non_empty(action.selector.as_deref()) {
        candidates.push(format!("page.locator({})", py_str(css)));
    }
    if let Some(xpath) = non_empty(action.xpath.as_deref()) {
        candidates.push(format!(
            "page.locator({})",
            py_str(&format!("xpath={}", xpath))
        ));
    }
    candidates
}

fn first_match_call(candidates: &[String]) -> String {
    format!("target = {}([{}])", FIRST_MATCH_FN, candidates.join(", "))
}

/// Module-level resolver: a unique match wins, then any match.
fn write_first_match(out: &mut String) {
    push_line(out, "", &format!("def {}(candidates: list[Any]) -> Any:", FIRST_MATCH_FN));
    push_line(out, "    ", "for unique in (True, False):");
    push_line(out, "        ", "for locator in candidates:");
    push_line(out, "            ", "try:");
    push_line(out, "                ", "count = locator.count()");
    push_line(out, "            ", "except Exception:");
    push_line(out, "                ", "continue");
    push_line(out, "            ", "if count == 1 or (count > 1 and not unique):");
    push_line(out, "                ", "return locator.first");
    push_line(out, "    ", "return None");
    push_line(out, "", "");
    push_line(out, "", "");
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Default result key per extraction type.
fn default_output_name(kind: ActionType) -> &'static str {
    match kind {
        ActionType::ExtractText => "extracted_text",
        ActionType::ExtractHtml => "extracted_html",
        ActionType::ExtractAttribute => "extracted_attribute",
        ActionType::ExecuteJs => "result",
        ActionType::AiExtract => "ai_extracted",
        _ => "extracted",
    }
}

/// Assign `expr` to a sanitized local and collect it in `extracted`.
fn bind(lines: &mut Vec<String>, action: &Action, expr: &str) {
    let fallback = default_output_name(action.action_type);
    let key = action
        .output_name()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or(fallback);
    let ident = sanitize_identifier(key, fallback);
    lines.push(format!("{} = {}", ident, expr));
    lines.push(format!("extracted[{}] = {}", py_str(key), ident));
}

fn scroll_offset(value: Option<&str>) -> Result<String, String> {
    let raw = value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or("0");
    let offset: f64 = raw
        .parse()
        .map_err(|_| format!("scroll offset '{}' is not a number", raw))?;
    if !offset.is_finite() {
        return Err(format!("scroll offset '{}' is not finite", raw));
    }
    Ok(format_number(offset))
}

/// Dotted module path with every segment made a valid identifier.
fn helper_module_path(module: &str) -> String {
    let segments: Vec<String> = module
        .split('.')
        .filter(|s| !s.trim().is_empty())
        .map(|s| sanitize_identifier(s, DEFAULT_HELPER_MODULE))
        .collect();
    if segments.is_empty() {
        DEFAULT_HELPER_MODULE.to_string()
    } else {
        segments.join(".")
    }
}

#[cfg(test)]
#[path = "script_tests.rs"]
mod tests;
