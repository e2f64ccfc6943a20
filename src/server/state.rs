// Server application state shared across handlers

use crate::chat::Conversation;
use crate::generation::GenerationClient;
use crate::shutdown::ShutdownState;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Session id used when the request carries none
pub const DEFAULT_SESSION_ID: &str = "default";

/// Shared state for the server: the generation client, the per-session
/// conversation map, and the auth token for this run.
#[derive(Clone)]
pub struct ServerAppState {
    /// Authentication token for this session
    pub auth_token: String,

    /// Client for the generation service
    pub client: Arc<GenerationClient>,

    /// Conversations keyed by session id
    pub sessions: Arc<Mutex<HashMap<String, Arc<Mutex<Conversation>>>>>,

    /// Shutdown state
    pub shutdown_state: ShutdownState,
}

impl ServerAppState {
    pub fn new(auth_token: String, client: GenerationClient, shutdown_state: ShutdownState) -> Self {
        Self {
            auth_token,
            client: Arc::new(client),
            sessions: Arc::new(Mutex::new(HashMap::new())),
            shutdown_state,
        }
    }

    /// Get the conversation for a session id, creating it on first use
    ///
    /// The returned handle is shared; the map entry lives until the server
    /// exits.
    pub fn conversation(&self, session_id: Option<&str>) -> Arc<Mutex<Conversation>> {
        let key = match session_id {
            Some(id) if !id.trim().is_empty() => id.to_string(),
            _ => DEFAULT_SESSION_ID.to_string(),
        };

        let mut sessions = self.sessions.lock().unwrap();
        sessions
            .entry(key)
            .or_insert_with(|| Arc::new(Mutex::new(Conversation::new())))
            .clone()
    }

    /// Number of live conversations
    pub fn session_count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ServerAppState {
        ServerAppState::new(
            "token".to_string(),
            GenerationClient::new("key".to_string()),
            ShutdownState::new(),
        )
    }

    #[test]
    fn test_missing_session_id_uses_default() {
        let state = state();
        let a = state.conversation(None);
        let b = state.conversation(Some(DEFAULT_SESSION_ID));
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(state.session_count(), 1);
    }

    #[test]
    fn test_blank_session_id_uses_default() {
        let state = state();
        let a = state.conversation(Some("   "));
        let b = state.conversation(None);
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_distinct_ids_get_distinct_conversations() {
        let state = state();
        let a = state.conversation(Some("paper-1"));
        let b = state.conversation(Some("paper-2"));
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(state.session_count(), 2);
    }

    #[test]
    fn test_same_id_returns_same_conversation() {
        let state = state();
        let a = state.conversation(Some("paper-1"));
        a.lock()
            .unwrap()
            .append(crate::models::ChatMessage::user("hello"));

        let b = state.conversation(Some("paper-1"));
        assert_eq!(b.lock().unwrap().len(), 1);
    }
}
