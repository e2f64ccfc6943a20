// Built-in prompt sources

use std::collections::HashMap;

/// Built-in prompt names
pub const FREEFORM: &str = "freeform";
pub const RESTRUCTURE: &str = "restructure";

/// Get all built-in prompt sources
pub fn get_builtin_prompts() -> HashMap<String, String> {
    let mut prompts = HashMap::new();

    prompts.insert(FREEFORM.to_string(), FREEFORM_TEMPLATE.to_string());
    prompts.insert(RESTRUCTURE.to_string(), RESTRUCTURE_TEMPLATE.to_string());

    prompts
}

/// Get a specific built-in prompt source
pub fn get_builtin_prompt(name: &str) -> Option<&'static str> {
    match name {
        FREEFORM => Some(FREEFORM_TEMPLATE),
        RESTRUCTURE => Some(RESTRUCTURE_TEMPLATE),
        _ => None,
    }
}

const FREEFORM_TEMPLATE: &str = r#"You are an expert LaTeX writer working inside a technical document editor. Author complete, usable LaTeX source directly. Write real content, never placeholders or empty scaffolding. For example, when asked to write about surgical robots, produce \section{Surgical Robots} followed by real paragraphs on the topic, not \section{Surgical Robots} followed by a comment telling the user to fill it in.
{% if has_template %}
Target venue: {{ template_name }}
Document class: {{ document_class }}
Required packages:
{% for package in packages %}{{ package }}
{% endfor %}Columns: {{ columns }}
Maximum pages: {{ max_pages }}
Abstract required: {{ abstract_required }}
Keywords required: {{ keywords_required }}
Formatting rules:
{% for rule in rules %}{{ loop.index }}. {{ rule }}
{% endfor %}Sample structure:
{{ sample_code }}
{% endif %}
Current document:
{{ document }}

{{ intent }}"#;

const RESTRUCTURE_TEMPLATE: &str = r#"You are an expert LaTeX editor. Reformat the user's document so it satisfies the structural rules below. Preserve their existing content: keep every piece of body text, reorganize and reformat rather than rewrite or summarize.
{% if has_template %}
Target venue: {{ template_name }}
Document class: {{ document_class }}
Required packages:
{% for package in packages %}{{ package }}
{% endfor %}Columns: {{ columns }}
Maximum pages: {{ max_pages }}
Abstract required: {{ abstract_required }}
Keywords required: {{ keywords_required }}
Formatting rules:
{% for rule in rules %}{{ loop.index }}. {{ rule }}
{% endfor %}Sample structure:
{{ sample_code }}
{% endif %}
Current document:
{{ document }}

Reply with the complete replacement LaTeX source wrapped in a single fenced code block tagged latex. Do not include any prose before or after the block.

{{ intent }}"#;
