// LaTeX output parser - extracts document source from assistant replies

use regex::Regex;
use std::sync::OnceLock;

/// Literal markers that signal a bare LaTeX document inside prose
const DOCUMENT_MARKERS: [&str; 2] = ["\\documentclass", "\\begin{document}"];

fn fence_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"```(?:latex|tex)?[ \t]*\n([\s\S]*?)```").unwrap())
}

/// Extract literal LaTeX source from a free-form reply
///
/// Two-stage policy, evaluated in order: fenced code blocks first, then the
/// bare document-marker heuristic. Returns None for conversational prose
/// with no extractable source. Unterminated fences never match and fall
/// through to the marker check.
pub fn extract_latex(reply: &str) -> Option<String> {
    let blocks = extract_fenced_blocks(reply);
    if !blocks.is_empty() {
        return Some(blocks.join("\n\n"));
    }

    if looks_like_document(reply) {
        return Some(reply.trim().to_string());
    }

    None
}

/// Extract fenced code blocks tagged latex, tex, or untagged
/// Returns all block bodies in order of appearance
pub fn extract_fenced_blocks(content: &str) -> Vec<String> {
    fence_regex()
        .captures_iter(content)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().trim().to_string()))
        .collect()
}

/// Substring heuristic for replies that are a bare document
pub fn looks_like_document(content: &str) -> bool {
    DOCUMENT_MARKERS
        .iter()
        .any(|marker| content.contains(marker))
}
