// Data models matching the frontend TypeScript types

pub mod state_machine;

pub use state_machine::{SessionError, SessionPhase};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a chat message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
}

/// A single message in a formatting conversation
///
/// Messages are immutable once created. Conversation order is insertion
/// order, never a timestamp sort.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    pub created_at: String,
}

impl ChatMessage {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            created_at: Utc::now().to_rfc3339(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

/// How the instruction payload frames the request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PromptMode {
    Freeform,
    Restructure,
}

impl PromptMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptMode::Freeform => "freeform",
            PromptMode::Restructure => "restructure",
        }
    }
}

impl std::fmt::Display for PromptMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PromptMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "freeform" => Ok(PromptMode::Freeform),
            "restructure" => Ok(PromptMode::Restructure),
            _ => Err(format!(
                "Unknown prompt mode: '{}'. Expected one of: freeform, restructure",
                s
            )),
        }
    }
}

impl Default for PromptMode {
    fn default() -> Self {
        PromptMode::Freeform
    }
}

/// Structural constraints a venue imposes on submissions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TemplateStructure {
    pub columns: u32,
    pub max_pages: u32,
    pub abstract_required: bool,
    pub keywords_required: bool,
}

/// Formatting profile for a publication venue
///
/// Immutable after construction. Package and rule order is significant and
/// is preserved everywhere the template is rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueTemplate {
    pub id: String,
    pub name: String,
    pub document_class: String,
    pub required_packages: Vec<String>,
    pub structure: TemplateStructure,
    pub formatting_rules: Vec<String>,
    pub sample_code: String,
}

/// Everything needed to dispatch one generation exchange
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub intent_text: String,
    pub document_snapshot: String,
    pub template_id: Option<String>,
    pub mode: PromptMode,
}

/// Classified result of a single generation exchange
///
/// Classification is a value, not an error: every branch is a normal
/// outcome the pipeline knows how to present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Success { reply_text: String },
    RateLimited,
    Unauthorized,
    InvalidInput,
    Failure { detail: String },
}
