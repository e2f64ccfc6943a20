// Canned editor shortcuts dispatched through the freeform pipeline

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuickAction {
    InsertEquation,
    CreateTable,
    AddFigure,
    FormatBibliography,
}

impl QuickAction {
    /// Returns all available quick actions
    pub fn all() -> &'static [QuickAction] {
        &[
            QuickAction::InsertEquation,
            QuickAction::CreateTable,
            QuickAction::AddFigure,
            QuickAction::FormatBibliography,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            QuickAction::InsertEquation => "insert_equation",
            QuickAction::CreateTable => "create_table",
            QuickAction::AddFigure => "add_figure",
            QuickAction::FormatBibliography => "format_bibliography",
        }
    }

    /// Button label shown in the editor toolbar
    pub fn label(&self) -> &'static str {
        match self {
            QuickAction::InsertEquation => "Insert equation",
            QuickAction::CreateTable => "Create table",
            QuickAction::AddFigure => "Add figure",
            QuickAction::FormatBibliography => "Format bibliography",
        }
    }

    /// The literal user message sent through the normal freeform pipeline
    pub fn intent(&self) -> &'static str {
        match self {
            QuickAction::InsertEquation => {
                "Insert a numbered equation environment with a representative example equation"
            }
            QuickAction::CreateTable => {
                "Create a table with a caption, a label, and booktabs-style rules"
            }
            QuickAction::AddFigure => {
                "Add a figure environment with includegraphics, a caption, and a label"
            }
            QuickAction::FormatBibliography => {
                "Format a bibliography section with a few example BibTeX entries"
            }
        }
    }
}

impl std::str::FromStr for QuickAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "insert_equation" => Ok(QuickAction::InsertEquation),
            "create_table" => Ok(QuickAction::CreateTable),
            "add_figure" => Ok(QuickAction::AddFigure),
            "format_bibliography" => Ok(QuickAction::FormatBibliography),
            _ => Err(format!("Unknown quick action: '{}'", s)),
        }
    }
}

/// Wire shape for the quick action listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickActionInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub intent: &'static str,
}

pub fn list_quick_actions() -> Vec<QuickActionInfo> {
    QuickAction::all()
        .iter()
        .map(|action| QuickActionInfo {
            id: action.id(),
            label: action.label(),
            intent: action.intent(),
        })
        .collect()
}
