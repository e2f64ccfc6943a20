// Conversational document-formatting pipeline

pub mod auto_apply;
pub mod conversation;
pub mod quick_actions;

pub use auto_apply::{apply_outcome, AppliedResponse};
pub use conversation::{Conversation, RequestGuard};
pub use quick_actions::{list_quick_actions, QuickAction};

use crate::generation::GenerationClient;
use crate::models::{ChatMessage, GenerationOutcome, GenerationRequest, SessionError};
use crate::prompt;
use crate::templates;
use std::sync::{Arc, Mutex};

/// Product of one full pipeline run
#[derive(Debug, Clone)]
pub struct ChatExchange {
    pub outcome: GenerationOutcome,
    pub applied: AppliedResponse,
}

/// Run one request through compose, generate, interpret, and apply
///
/// The user message is appended before dispatch and the assistant message
/// after the outcome settles. The in-flight gate is held across the await
/// through the scoped guard, so any exit path returns the session to Idle.
pub async fn run_exchange(
    conversation: Arc<Mutex<Conversation>>,
    client: &GenerationClient,
    request: GenerationRequest,
    authenticated: bool,
) -> Result<ChatExchange, SessionError> {
    let _guard = RequestGuard::begin(conversation.clone())?;

    {
        let mut conv = conversation.lock().unwrap();
        conv.append(ChatMessage::user(request.intent_text.clone()));
    }

    let outcome = settle_outcome(client, &request, authenticated).await;
    let applied = auto_apply::apply_outcome(&outcome, request.mode);

    {
        let mut conv = conversation.lock().unwrap();
        conv.append(applied.message.clone());
    }

    Ok(ChatExchange { outcome, applied })
}

async fn settle_outcome(
    client: &GenerationClient,
    request: &GenerationRequest,
    authenticated: bool,
) -> GenerationOutcome {
    // Both short-circuits settle before any network traffic
    if !authenticated {
        return GenerationOutcome::Unauthorized;
    }
    if request.intent_text.trim().is_empty() {
        return GenerationOutcome::InvalidInput;
    }

    let template = request.template_id.as_deref().and_then(|id| {
        let found = templates::get_template(id);
        if found.is_none() {
            log::warn!("Ignoring unknown template id '{}'", id);
        }
        found
    });

    let snapshot = prompt::snapshot_of(&request.document_snapshot);
    let instruction =
        match prompt::compose(request.mode, &request.intent_text, &snapshot, template) {
            Ok(instruction) => instruction,
            Err(e) => {
                return GenerationOutcome::Failure {
                    detail: format!("Failed to compose instruction: {}", e),
                };
            }
        };

    client.generate(&instruction).await
}
