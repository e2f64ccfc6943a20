// Conversation state and the single-request gate

use crate::models::state_machine::{self, SessionPhase};
use crate::models::{ChatMessage, SessionError};
use std::sync::{Arc, Mutex};

/// Ordered, append-only message log plus the session phase
///
/// Messages are never removed, reordered, or deduplicated. The log lives
/// for the duration of the editing session only.
pub struct Conversation {
    messages: Vec<ChatMessage>,
    phase: SessionPhase,
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            phase: SessionPhase::Idle,
        }
    }

    /// Append a message; insertion order is causal order
    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn begin(&mut self) -> Result<(), SessionError> {
        if state_machine::is_busy(self.phase) {
            return Err(SessionError::AlreadyInFlight);
        }
        self.phase = state_machine::transition_phase(self.phase, SessionPhase::Generating)?;
        Ok(())
    }

    fn end(&mut self) {
        // Unconditional: release must succeed on every exit path
        self.phase = SessionPhase::Idle;
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped hold on the single-request gate
///
/// Dropping the guard returns the session to Idle, so early returns and
/// panics release the gate like the success path does.
pub struct RequestGuard {
    conversation: Arc<Mutex<Conversation>>,
}

impl RequestGuard {
    /// Acquire the gate, failing if a request is already outstanding
    pub fn begin(conversation: Arc<Mutex<Conversation>>) -> Result<Self, SessionError> {
        {
            let mut conv = conversation.lock().unwrap();
            conv.begin()?;
        }
        Ok(Self { conversation })
    }
}

impl Drop for RequestGuard {
    fn drop(&mut self) {
        if let Ok(mut conversation) = self.conversation.lock() {
            conversation.end();
        }
    }
}
