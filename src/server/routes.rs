// HTTP handlers for the editor API

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use super::ServerAppState;
use crate::chat::{self, list_quick_actions, ChatExchange};
use crate::models::{GenerationOutcome, GenerationRequest, PromptMode, SessionError, VenueTemplate};
use crate::templates;

/// Body of POST /api/ai/chat
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequestBody {
    pub message: String,

    #[serde(default)]
    pub latex_content: Option<String>,

    #[serde(default)]
    pub selected_template: Option<String>,

    #[serde(default)]
    pub mode: Option<String>,

    #[serde(default)]
    pub session_id: Option<String>,
}

/// Success body of POST /api/ai/chat
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponseBody {
    pub response: String,
    pub model: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

/// POST /api/ai/chat
///
/// Runs one full exchange and maps the settled outcome onto a status code.
/// The conversation log is updated for every outcome, including errors.
pub async fn chat_handler(
    State(state): State<ServerAppState>,
    Json(body): Json<ChatRequestBody>,
) -> Response {
    let mode = match body.mode.as_deref() {
        Some(raw) => match raw.parse::<PromptMode>() {
            Ok(mode) => mode,
            Err(e) => return error_response(StatusCode::BAD_REQUEST, e),
        },
        None => PromptMode::default(),
    };

    let request = GenerationRequest {
        intent_text: body.message,
        document_snapshot: body.latex_content.unwrap_or_default(),
        template_id: body.selected_template,
        mode,
    };

    let conversation = state.conversation(body.session_id.as_deref());

    // The auth layer already vetted the caller
    let ChatExchange { outcome, applied } =
        match chat::run_exchange(conversation, &state.client, request, true).await {
            Ok(exchange) => exchange,
            Err(SessionError::AlreadyInFlight) => {
                return error_response(
                    StatusCode::CONFLICT,
                    "A request is already in progress for this session",
                );
            }
            Err(e) => return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

    match outcome {
        GenerationOutcome::Success { .. } => (
            StatusCode::OK,
            Json(ChatResponseBody {
                response: applied.message.content,
                model: state.client.model().to_string(),
                replacement: applied.replacement,
                suggestion: applied.suggestion,
            }),
        )
            .into_response(),
        GenerationOutcome::InvalidInput => {
            error_response(StatusCode::BAD_REQUEST, applied.message.content)
        }
        GenerationOutcome::Unauthorized => {
            error_response(StatusCode::UNAUTHORIZED, applied.message.content)
        }
        GenerationOutcome::RateLimited => {
            error_response(StatusCode::TOO_MANY_REQUESTS, applied.message.content)
        }
        GenerationOutcome::Failure { .. } => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, applied.message.content)
        }
    }
}

/// GET /api/templates
pub async fn list_templates_handler() -> Json<&'static [VenueTemplate]> {
    Json(templates::list_templates())
}

/// GET /api/templates/:id
pub async fn get_template_handler(Path(id): Path<String>) -> Response {
    match templates::require_template(&id) {
        Ok(template) => Json(template).into_response(),
        Err(e) => error_response(StatusCode::NOT_FOUND, e.to_string()),
    }
}

/// GET /api/ai/quick-actions
pub async fn quick_actions_handler() -> Response {
    Json(list_quick_actions()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::auto_apply;
    use crate::generation::GenerationClient;
    use crate::shutdown::ShutdownState;
    use axum::body::to_bytes;
    use serde_json::Value;

    fn offline_state() -> ServerAppState {
        let client = GenerationClient::new("key".to_string())
            .with_endpoint("http://127.0.0.1:1")
            .with_timeout_secs(1);
        ServerAppState::new("token".to_string(), client, ShutdownState::new())
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_empty_message_is_bad_request() {
        let response = chat_handler(
            State(offline_state()),
            Json(ChatRequestBody {
                message: "   ".to_string(),
                latex_content: None,
                selected_template: None,
                mode: None,
                session_id: None,
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], auto_apply::INVALID_INPUT_MESSAGE);
    }

    #[tokio::test]
    async fn test_unknown_mode_is_bad_request() {
        let response = chat_handler(
            State(offline_state()),
            Json(ChatRequestBody {
                message: "Write an abstract".to_string(),
                latex_content: None,
                selected_template: None,
                mode: Some("summarize".to_string()),
                session_id: None,
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_transport_failure_is_internal_error() {
        let response = chat_handler(
            State(offline_state()),
            Json(ChatRequestBody {
                message: "Write an abstract".to_string(),
                latex_content: Some("\\section{X}".to_string()),
                selected_template: None,
                mode: Some("restructure".to_string()),
                session_id: Some("paper-1".to_string()),
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert!(json["error"]
            .as_str()
            .unwrap()
            .starts_with("Failed to get AI response"));
    }

    #[tokio::test]
    async fn test_busy_session_is_conflict() {
        let state = offline_state();
        let conversation = state.conversation(Some("paper-1"));
        let _guard = crate::chat::RequestGuard::begin(conversation).unwrap();

        let response = chat_handler(
            State(state),
            Json(ChatRequestBody {
                message: "Write an abstract".to_string(),
                latex_content: None,
                selected_template: None,
                mode: None,
                session_id: Some("paper-1".to_string()),
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_busy_session_does_not_block_others() {
        let state = offline_state();
        let busy = state.conversation(Some("paper-1"));
        let _guard = crate::chat::RequestGuard::begin(busy).unwrap();

        let response = chat_handler(
            State(state),
            Json(ChatRequestBody {
                message: "   ".to_string(),
                latex_content: None,
                selected_template: None,
                mode: None,
                session_id: Some("paper-2".to_string()),
            }),
        )
        .await;

        // Settles as invalid input instead of conflict
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_templates_returns_catalogue() {
        let Json(listing) = list_templates_handler().await;
        assert_eq!(listing.len(), 5);
        assert_eq!(listing[0].id, "ieee-conference");
    }

    #[tokio::test]
    async fn test_get_template_by_id() {
        let response = get_template_handler(Path("springer-lncs".to_string())).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["documentClass"], "llncs");
    }

    #[tokio::test]
    async fn test_get_unknown_template_is_not_found() {
        let response = get_template_handler(Path("nature".to_string())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_quick_actions_listing() {
        let response = quick_actions_handler().await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 4);
        assert_eq!(json[0]["id"], "insert_equation");
    }
}
