// Instruction payload composition for the generation service

pub mod builtin;

use crate::models::{PromptMode, VenueTemplate};
use anyhow::{Context as _, Result};
use tera::Tera;

/// Maximum number of document characters forwarded per request
pub const SNAPSHOT_LIMIT: usize = 2000;

/// Shown in place of the document section when the buffer is empty
pub const EMPTY_DOCUMENT_PLACEHOLDER: &str = "New document";

/// Take the bounded leading snapshot of the live document buffer
///
/// The cut is a hard character count, not word-aware.
pub fn snapshot_of(content: &str) -> String {
    content.chars().take(SNAPSHOT_LIMIT).collect()
}

/// Tera wrapper holding the compiled-in prompt sources
pub struct PromptEngine {
    tera: Tera,
}

impl PromptEngine {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        for (name, source) in builtin::get_builtin_prompts() {
            tera.add_raw_template(&name, &source)
                .with_context(|| format!("Failed to compile prompt source '{}'", name))?;
        }
        Ok(Self { tera })
    }

    pub fn render(&self, name: &str, context: &PromptContext) -> Result<String> {
        self.tera
            .render(name, &context.to_tera())
            .with_context(|| format!("Failed to render prompt '{}'", name))
    }
}

/// Inputs for one rendered instruction payload
pub struct PromptContext<'a> {
    intent: String,
    document: String,
    template: Option<&'a VenueTemplate>,
}

impl<'a> PromptContext<'a> {
    pub fn new(intent_text: &str, document_snapshot: &str) -> Self {
        Self {
            intent: intent_text.to_string(),
            document: document_snapshot.to_string(),
            template: None,
        }
    }

    pub fn with_template(mut self, template: Option<&'a VenueTemplate>) -> Self {
        self.template = template;
        self
    }

    fn to_tera(&self) -> tera::Context {
        let mut context = tera::Context::new();
        context.insert("intent", &self.intent);

        let document = if self.document.trim().is_empty() {
            EMPTY_DOCUMENT_PLACEHOLDER
        } else {
            &self.document
        };
        context.insert("document", document);

        context.insert("has_template", &self.template.is_some());
        if let Some(template) = self.template {
            context.insert("template_name", &template.name);
            context.insert("document_class", &template.document_class);
            context.insert("packages", &template.required_packages);
            context.insert("columns", &template.structure.columns);
            context.insert("max_pages", &template.structure.max_pages);
            context.insert(
                "abstract_required",
                yes_no(template.structure.abstract_required),
            );
            context.insert(
                "keywords_required",
                yes_no(template.structure.keywords_required),
            );
            context.insert("rules", &template.formatting_rules);
            context.insert("sample_code", &template.sample_code);
        }

        context
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Compose the full instruction payload for one generation exchange
///
/// Deterministic: identical inputs always yield an identical string.
pub fn compose(
    mode: PromptMode,
    intent_text: &str,
    document_snapshot: &str,
    template: Option<&VenueTemplate>,
) -> Result<String> {
    let engine = PromptEngine::new()?;

    let prompt_name = match mode {
        PromptMode::Freeform => builtin::FREEFORM,
        PromptMode::Restructure => builtin::RESTRUCTURE,
    };

    let context = PromptContext::new(intent_text, document_snapshot).with_template(template);

    engine.render(prompt_name, &context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates;

    #[test]
    fn test_snapshot_respects_limit() {
        let long = "x".repeat(SNAPSHOT_LIMIT + 500);
        let snapshot = snapshot_of(&long);
        assert_eq!(snapshot.chars().count(), SNAPSHOT_LIMIT);
    }

    #[test]
    fn test_snapshot_is_char_safe() {
        // Multi-byte characters must not be split mid-codepoint
        let doc = "é".repeat(SNAPSHOT_LIMIT + 10);
        let snapshot = snapshot_of(&doc);
        assert_eq!(snapshot.chars().count(), SNAPSHOT_LIMIT);
        assert!(snapshot.chars().all(|c| c == 'é'));
    }

    #[test]
    fn test_snapshot_of_short_document_is_identity() {
        assert_eq!(snapshot_of("\\section{Intro}"), "\\section{Intro}");
    }

    #[test]
    fn test_compose_is_deterministic() {
        let template = templates::get_template("ieee-conference");
        let a = compose(
            PromptMode::Restructure,
            "Format this for the conference",
            "\\section{Intro}\nSome text.",
            template,
        )
        .unwrap();
        let b = compose(
            PromptMode::Restructure,
            "Format this for the conference",
            "\\section{Intro}\nSome text.",
            template,
        )
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_compose_ends_with_intent() {
        let prompt = compose(PromptMode::Freeform, "Write about robots", "", None).unwrap();
        assert!(prompt.ends_with("Write about robots"));
    }

    #[test]
    fn test_empty_document_uses_placeholder() {
        let prompt = compose(PromptMode::Freeform, "Hello", "   \n  ", None).unwrap();
        assert!(prompt.contains(EMPTY_DOCUMENT_PLACEHOLDER));
    }

    #[test]
    fn test_nonempty_document_is_embedded() {
        let prompt = compose(
            PromptMode::Freeform,
            "Hello",
            "\\documentclass{article}",
            None,
        )
        .unwrap();
        assert!(prompt.contains("\\documentclass{article}"));
        assert!(!prompt.contains(EMPTY_DOCUMENT_PLACEHOLDER));
    }

    #[test]
    fn test_template_block_renders_all_parts() {
        let template = templates::get_template("ieee-conference").unwrap();
        let prompt = compose(
            PromptMode::Restructure,
            "Apply the template",
            "\\section{Intro}",
            Some(template),
        )
        .unwrap();

        assert!(prompt.contains("IEEE Conference"));
        assert!(prompt.contains("IEEEtran"));
        // Packages one per line
        assert!(prompt.contains("\ncite\n"));
        assert!(prompt.contains("Columns: 2"));
        assert!(prompt.contains("Maximum pages: 6"));
        assert!(prompt.contains("Abstract required: Yes"));
        // Numbered rules
        assert!(prompt.contains("1. "));
        // Sample verbatim
        assert!(prompt.contains(&template.sample_code));
    }

    #[test]
    fn test_freeform_omits_output_contract() {
        let prompt = compose(PromptMode::Freeform, "Hello", "", None).unwrap();
        assert!(!prompt.contains("single fenced code block"));
    }

    #[test]
    fn test_restructure_carries_output_contract() {
        let prompt = compose(PromptMode::Restructure, "Reformat", "text", None).unwrap();
        assert!(prompt.contains("single fenced code block"));
    }

    #[test]
    fn test_no_template_omits_venue_block() {
        let prompt = compose(PromptMode::Freeform, "Hello", "", None).unwrap();
        assert!(!prompt.contains("Target venue"));
    }
}
