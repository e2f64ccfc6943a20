// Built-in venue templates

use crate::models::{TemplateStructure, VenueTemplate};
use std::sync::OnceLock;

/// Built-in venue ids
pub const IEEE_CONFERENCE: &str = "ieee-conference";
pub const ACM_SIG: &str = "acm-sig";
pub const SPRINGER_LNCS: &str = "springer-lncs";
pub const ELSEVIER_ARTICLE: &str = "elsevier-article";
pub const ARXIV_PREPRINT: &str = "arxiv-preprint";

static CATALOGUE: OnceLock<Vec<VenueTemplate>> = OnceLock::new();

/// Get the full catalogue in declaration order
pub fn list_templates() -> &'static [VenueTemplate] {
    CATALOGUE.get_or_init(build_catalogue)
}

/// Look up a single template by id
pub fn get_template(id: &str) -> Option<&'static VenueTemplate> {
    list_templates().iter().find(|t| t.id == id)
}

fn build_catalogue() -> Vec<VenueTemplate> {
    vec![
        VenueTemplate {
            id: IEEE_CONFERENCE.to_string(),
            name: "IEEE Conference".to_string(),
            document_class: "IEEEtran".to_string(),
            required_packages: vec![
                "cite".to_string(),
                "amsmath".to_string(),
                "amssymb".to_string(),
                "amsfonts".to_string(),
                "algorithmic".to_string(),
                "graphicx".to_string(),
                "textcomp".to_string(),
                "xcolor".to_string(),
            ],
            structure: TemplateStructure {
                columns: 2,
                max_pages: 6,
                abstract_required: true,
                keywords_required: true,
            },
            formatting_rules: vec![
                "Use the conference option of the IEEEtran class".to_string(),
                "Title in title case, no more than three lines".to_string(),
                "Abstract is a single paragraph of 150-250 words".to_string(),
                "Index terms follow the abstract, alphabetized and comma-separated".to_string(),
                "Section headings use \\section, \\subsection, \\subsubsection only".to_string(),
                "Figures and tables span one column unless marked with the starred form"
                    .to_string(),
                "References use the IEEEtran bibliography style".to_string(),
            ],
            sample_code: IEEE_CONFERENCE_SAMPLE.to_string(),
        },
        VenueTemplate {
            id: ACM_SIG.to_string(),
            name: "ACM SIG Proceedings".to_string(),
            document_class: "acmart".to_string(),
            required_packages: vec!["booktabs".to_string(), "graphicx".to_string()],
            structure: TemplateStructure {
                columns: 2,
                max_pages: 10,
                abstract_required: true,
                keywords_required: true,
            },
            formatting_rules: vec![
                "Load acmart with the sigconf option".to_string(),
                "Declare CCS concepts with \\ccsdesc before \\maketitle".to_string(),
                "Keywords are set with the \\keywords command".to_string(),
                "Abstract appears before \\maketitle".to_string(),
                "Use \\citep-free natbib numeric citations as provided by the class"
                    .to_string(),
                "Tables use booktabs rules, never vertical lines".to_string(),
            ],
            sample_code: ACM_SIG_SAMPLE.to_string(),
        },
        VenueTemplate {
            id: SPRINGER_LNCS.to_string(),
            name: "Springer LNCS".to_string(),
            document_class: "llncs".to_string(),
            required_packages: vec![
                "graphicx".to_string(),
                "amsmath".to_string(),
                "amssymb".to_string(),
            ],
            structure: TemplateStructure {
                columns: 1,
                max_pages: 15,
                abstract_required: true,
                keywords_required: true,
            },
            formatting_rules: vec![
                "Author names use \\author with \\inst markers for affiliations".to_string(),
                "Abstract ends with a \\keywords command inside the abstract environment"
                    .to_string(),
                "Headings are numbered automatically; do not use \\section*".to_string(),
                "Theorem-like environments come from the class, do not redefine them"
                    .to_string(),
                "References use the splncs04 bibliography style".to_string(),
            ],
            sample_code: SPRINGER_LNCS_SAMPLE.to_string(),
        },
        VenueTemplate {
            id: ELSEVIER_ARTICLE.to_string(),
            name: "Elsevier Journal Article".to_string(),
            document_class: "elsarticle".to_string(),
            required_packages: vec![
                "graphicx".to_string(),
                "amsmath".to_string(),
                "amssymb".to_string(),
                "lineno".to_string(),
            ],
            structure: TemplateStructure {
                columns: 1,
                max_pages: 25,
                abstract_required: true,
                keywords_required: true,
            },
            formatting_rules: vec![
                "Use the preprint option of elsarticle for submission".to_string(),
                "Front matter lives inside the frontmatter environment".to_string(),
                "Keywords use the keyword environment with \\sep separators".to_string(),
                "Enable line numbers with \\linenumbers after \\begin{document}".to_string(),
                "Highlights are submitted separately, do not embed them".to_string(),
                "References use the elsarticle-num bibliography style".to_string(),
            ],
            sample_code: ELSEVIER_ARTICLE_SAMPLE.to_string(),
        },
        VenueTemplate {
            id: ARXIV_PREPRINT.to_string(),
            name: "arXiv Preprint".to_string(),
            document_class: "article".to_string(),
            required_packages: vec![
                "geometry".to_string(),
                "amsmath".to_string(),
                "amssymb".to_string(),
                "graphicx".to_string(),
                "hyperref".to_string(),
            ],
            structure: TemplateStructure {
                columns: 1,
                max_pages: 50,
                abstract_required: false,
                keywords_required: false,
            },
            formatting_rules: vec![
                "Use the standard article class at 11pt".to_string(),
                "Set one-inch margins via the geometry package".to_string(),
                "Load hyperref last".to_string(),
                "Number equations only when they are referenced".to_string(),
            ],
            sample_code: ARXIV_PREPRINT_SAMPLE.to_string(),
        },
    ]
}

const IEEE_CONFERENCE_SAMPLE: &str = r"\documentclass[conference]{IEEEtran}
\usepackage{cite}
\usepackage{amsmath,amssymb,amsfonts}
\usepackage{algorithmic}
\usepackage{graphicx}
\usepackage{textcomp}
\usepackage{xcolor}

\begin{document}

\title{Paper Title}

\author{\IEEEauthorblockN{First Author}
\IEEEauthorblockA{\textit{Department} \\
\textit{University}\\
City, Country \\
email@example.org}}

\maketitle

\begin{abstract}
This document describes the contribution in a single paragraph.
\end{abstract}

\begin{IEEEkeywords}
component, formatting, style
\end{IEEEkeywords}

\section{Introduction}
Body text begins here.

\bibliographystyle{IEEEtran}
\bibliography{references}

\end{document}";

const ACM_SIG_SAMPLE: &str = r"\documentclass[sigconf]{acmart}
\usepackage{booktabs}
\usepackage{graphicx}

\begin{document}

\title{Paper Title}

\author{First Author}
\affiliation{%
  \institution{University}
  \city{City}
  \country{Country}}
\email{email@example.org}

\begin{abstract}
This document describes the contribution in a single paragraph.
\end{abstract}

\ccsdesc[500]{Computing methodologies~Natural language processing}

\keywords{component, formatting, style}

\maketitle

\section{Introduction}
Body text begins here.

\bibliographystyle{ACM-Reference-Format}
\bibliography{references}

\end{document}";

const SPRINGER_LNCS_SAMPLE: &str = r"\documentclass{llncs}
\usepackage{graphicx}
\usepackage{amsmath}
\usepackage{amssymb}

\begin{document}

\title{Paper Title}
\author{First Author\inst{1}}
\institute{University, City, Country\\
\email{email@example.org}}

\maketitle

\begin{abstract}
This document describes the contribution in a single paragraph.
\keywords{Component \and Formatting \and Style}
\end{abstract}

\section{Introduction}
Body text begins here.

\bibliographystyle{splncs04}
\bibliography{references}

\end{document}";

const ELSEVIER_ARTICLE_SAMPLE: &str = r"\documentclass[preprint,12pt]{elsarticle}
\usepackage{graphicx}
\usepackage{amsmath}
\usepackage{amssymb}
\usepackage{lineno}

\begin{document}

\begin{frontmatter}

\title{Paper Title}

\author{First Author}
\address{University, City, Country}

\begin{abstract}
This document describes the contribution in a single paragraph.
\end{abstract}

\begin{keyword}
component \sep formatting \sep style
\end{keyword}

\end{frontmatter}

\linenumbers

\section{Introduction}
Body text begins here.

\bibliographystyle{elsarticle-num}
\bibliography{references}

\end{document}";

const ARXIV_PREPRINT_SAMPLE: &str = r"\documentclass[11pt]{article}
\usepackage[margin=1in]{geometry}
\usepackage{amsmath}
\usepackage{amssymb}
\usepackage{graphicx}
\usepackage{hyperref}

\title{Paper Title}
\author{First Author\\University}
\date{\today}

\begin{document}

\maketitle

\begin{abstract}
This document describes the contribution in a single paragraph.
\end{abstract}

\section{Introduction}
Body text begins here.

\bibliographystyle{plain}
\bibliography{references}

\end{document}";
