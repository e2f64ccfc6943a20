// Auto-apply decision for settled generation outcomes

use crate::models::{ChatMessage, GenerationOutcome, PromptMode};
use crate::parsers;

/// Fixed advisory shown when the service reports a quota or rate signal
pub const RATE_LIMIT_ADVISORY: &str = "Rate limit exceeded. Please try again in a moment.";

/// Shown when the caller is not authenticated
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// Shown when the message text is empty or whitespace
pub const INVALID_INPUT_MESSAGE: &str = "Message is required";

/// Decision product of one settled exchange
#[derive(Debug, Clone)]
pub struct AppliedResponse {
    /// Assistant message to append to the conversation
    pub message: ChatMessage,
    /// Wholesale replacement for the document buffer, restructure mode only
    pub replacement: Option<String>,
    /// Extracted source offered for explicit acceptance, freeform mode only
    pub suggestion: Option<String>,
}

/// Fold a generation outcome into an assistant message and an apply decision
///
/// Extraction runs once; the mode decides whether the result replaces the
/// buffer or is merely offered. Every error branch leaves the buffer alone.
pub fn apply_outcome(outcome: &GenerationOutcome, mode: PromptMode) -> AppliedResponse {
    match outcome {
        GenerationOutcome::Success { reply_text } => {
            let extracted = parsers::extract_latex(reply_text);
            let (replacement, suggestion) = match mode {
                PromptMode::Restructure => (extracted, None),
                PromptMode::Freeform => (None, extracted),
            };
            AppliedResponse {
                message: ChatMessage::assistant(reply_text.clone()),
                replacement,
                suggestion,
            }
        }
        GenerationOutcome::RateLimited => error_response(RATE_LIMIT_ADVISORY.to_string()),
        GenerationOutcome::Unauthorized => error_response(UNAUTHORIZED_MESSAGE.to_string()),
        GenerationOutcome::InvalidInput => error_response(INVALID_INPUT_MESSAGE.to_string()),
        GenerationOutcome::Failure { detail } => {
            error_response(format!("Failed to get AI response: {}", detail))
        }
    }
}

fn error_response(content: String) -> AppliedResponse {
    AppliedResponse {
        message: ChatMessage::assistant(content),
        replacement: None,
        suggestion: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MessageRole;

    #[test]
    fn test_restructure_success_sets_replacement() {
        let outcome = GenerationOutcome::Success {
            reply_text: "```latex\n\\documentclass{IEEEtran}\n\\begin{document}\nX\n\\end{document}\n```".to_string(),
        };

        let applied = apply_outcome(&outcome, PromptMode::Restructure);
        assert_eq!(applied.message.role, MessageRole::Assistant);
        assert_eq!(
            applied.replacement.as_deref(),
            Some("\\documentclass{IEEEtran}\n\\begin{document}\nX\n\\end{document}")
        );
        assert!(applied.suggestion.is_none());
    }

    #[test]
    fn test_freeform_success_offers_suggestion() {
        let outcome = GenerationOutcome::Success {
            reply_text: "Here you go:\n```latex\n\\section{Robots}\n```".to_string(),
        };

        let applied = apply_outcome(&outcome, PromptMode::Freeform);
        // Never auto-applied in freeform mode, only offered
        assert!(applied.replacement.is_none());
        assert_eq!(applied.suggestion.as_deref(), Some("\\section{Robots}"));
    }

    #[test]
    fn test_success_message_carries_full_reply() {
        let reply = "\\section{Introduction}\nAutonomous surgical robots...";
        let outcome = GenerationOutcome::Success {
            reply_text: reply.to_string(),
        };

        let applied = apply_outcome(&outcome, PromptMode::Freeform);
        assert_eq!(applied.message.content, reply);
        assert!(applied.replacement.is_none());
    }

    #[test]
    fn test_restructure_without_extractable_source() {
        let outcome = GenerationOutcome::Success {
            reply_text: "I could not produce a document from that request.".to_string(),
        };

        let applied = apply_outcome(&outcome, PromptMode::Restructure);
        assert!(applied.replacement.is_none());
        assert!(applied.suggestion.is_none());
    }

    #[test]
    fn test_rate_limited_uses_fixed_advisory() {
        let applied = apply_outcome(&GenerationOutcome::RateLimited, PromptMode::Freeform);
        assert_eq!(applied.message.content, RATE_LIMIT_ADVISORY);
        assert!(applied.replacement.is_none());
    }

    #[test]
    fn test_unauthorized_and_invalid_input_messages() {
        let applied = apply_outcome(&GenerationOutcome::Unauthorized, PromptMode::Freeform);
        assert_eq!(applied.message.content, UNAUTHORIZED_MESSAGE);

        let applied = apply_outcome(&GenerationOutcome::InvalidInput, PromptMode::Freeform);
        assert_eq!(applied.message.content, INVALID_INPUT_MESSAGE);
    }

    #[test]
    fn test_failure_carries_detail() {
        let outcome = GenerationOutcome::Failure {
            detail: "connection reset".to_string(),
        };

        let applied = apply_outcome(&outcome, PromptMode::Restructure);
        assert_eq!(
            applied.message.content,
            "Failed to get AI response: connection reset"
        );
        assert!(applied.replacement.is_none());
    }
}
