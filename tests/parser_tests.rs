// Integration tests for LaTeX reply interpretation
// These tests exercise the public parser API the way route handlers use it

#[cfg(test)]
mod parser_integration_tests {
    use exoskeleton_lib::parsers::{extract_fenced_blocks, extract_latex, looks_like_document};

    #[test]
    fn test_fenced_reply_integration() {
        let reply = concat!(
            "Here is the restructured document:\n",
            "\n",
            "```latex\n",
            "\\documentclass[conference]{IEEEtran}\n",
            "\\begin{document}\n",
            "\\title{Surgical Robots}\n",
            "\\maketitle\n",
            "\\end{document}\n",
            "```\n",
            "\n",
            "I kept your section order intact.",
        );

        let extracted = extract_latex(reply).expect("fenced source should be extracted");
        assert!(extracted.starts_with("\\documentclass"));
        assert!(extracted.ends_with("\\end{document}"));
        assert!(!extracted.contains("```"));
        assert!(!extracted.contains("section order"));
    }

    #[test]
    fn test_multiple_fences_are_joined_in_order() {
        let reply = "```latex\n\\section{One}\n```\nand then\n```latex\n\\section{Two}\n```";

        let extracted = extract_latex(reply).unwrap();
        assert_eq!(extracted, "\\section{One}\n\n\\section{Two}");
    }

    #[test]
    fn test_bare_document_reply_integration() {
        let reply = "\\documentclass{article}\n\\begin{document}\nHello\n\\end{document}\n";

        assert!(looks_like_document(reply));
        let extracted = extract_latex(reply).unwrap();
        assert_eq!(
            extracted,
            "\\documentclass{article}\n\\begin{document}\nHello\n\\end{document}"
        );
    }

    #[test]
    fn test_marker_inside_prose_returns_whole_reply() {
        let reply = "Start your file with \\documentclass{article} and go from there.";

        let extracted = extract_latex(reply).unwrap();
        assert_eq!(extracted, reply);
    }

    #[test]
    fn test_prose_reply_yields_nothing() {
        let reply = "I can help you structure your paper. What venue are you targeting?";

        assert!(extract_latex(reply).is_none());
        assert!(extract_fenced_blocks(reply).is_empty());
        assert!(!looks_like_document(reply));
    }

    #[test]
    fn test_unterminated_fence_falls_through_to_markers() {
        let reply = "```latex\n\\documentclass{article}\n\\begin{document}\nX";

        // No closing fence, so the marker fallback returns the trimmed whole
        let extracted = extract_latex(reply).unwrap();
        assert!(extracted.starts_with("```latex"));
        assert!(extracted.contains("\\documentclass"));
    }

    #[test]
    fn test_tex_and_untagged_fences_integration() {
        let tex = "```tex\n\\alpha + \\beta\n```";
        assert_eq!(extract_latex(tex).unwrap(), "\\alpha + \\beta");

        let untagged = "```\n\\begin{document}\nbody\n\\end{document}\n```";
        assert_eq!(
            extract_latex(untagged).unwrap(),
            "\\begin{document}\nbody\n\\end{document}"
        );
    }
}
