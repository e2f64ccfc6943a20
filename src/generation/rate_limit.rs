// Quota and rate signal detection for generation service errors

use regex::Regex;
use std::sync::OnceLock;

// Static patterns for efficient reuse
static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();

fn get_patterns() -> &'static Vec<Regex> {
    PATTERNS.get_or_init(|| {
        vec![
            Regex::new(r"(?i)quota\s*(exceeded|limit)").unwrap(),
            Regex::new(r"(?i)rate[_\-\s]?limit(ed|ing)?").unwrap(),
            Regex::new(r"(?i)too\s+many\s+requests").unwrap(),
            // Word boundary to prevent false positives from ids containing "429"
            Regex::new(r"(?i)\b429\b").unwrap(),
            Regex::new(r"(?i)resource\s+exhausted").unwrap(),
        ]
    })
}

/// Check whether an error string carries a quota or rate signal
pub fn is_rate_limit_signal(error_text: &str) -> bool {
    get_patterns().iter().any(|re| re.is_match(error_text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_quota_exceeded() {
        assert!(is_rate_limit_signal(
            "google.api_core.exceptions.ResourceExhausted: quota exceeded for model"
        ));
        assert!(is_rate_limit_signal("Quota limit reached"));
    }

    #[test]
    fn test_detects_rate_limit_variants() {
        assert!(is_rate_limit_signal("rate limit"));
        assert!(is_rate_limit_signal("Rate-limited, slow down"));
        assert!(is_rate_limit_signal("rate_limiting in effect"));
    }

    #[test]
    fn test_detects_http_429() {
        assert!(is_rate_limit_signal("service error (429 Too Many Requests)"));
        assert!(is_rate_limit_signal("status: 429"));
    }

    #[test]
    fn test_429_requires_word_boundary() {
        assert!(!is_rate_limit_signal("request id req_4290abc failed"));
    }

    #[test]
    fn test_detects_resource_exhausted() {
        assert!(is_rate_limit_signal("RESOURCE EXHAUSTED"));
    }

    #[test]
    fn test_ignores_unrelated_errors() {
        assert!(!is_rate_limit_signal("connection refused"));
        assert!(!is_rate_limit_signal("invalid request body"));
        assert!(!is_rate_limit_signal(""));
    }
}
