// Session phase state machine with validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle phase of a formatting session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Idle,
    Generating,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("A generation request is already in flight for this session")]
    AlreadyInFlight,

    #[error("Invalid phase transition from {from:?} to {to:?}")]
    InvalidTransition {
        from: SessionPhase,
        to: SessionPhase,
    },
}

/// Validates if a session can transition from one phase to another
pub fn can_transition(from: SessionPhase, to: SessionPhase) -> bool {
    match (from, to) {
        // Dispatching a request
        (SessionPhase::Idle, SessionPhase::Generating) => true,

        // Request settled, success or failure alike
        (SessionPhase::Generating, SessionPhase::Idle) => true,

        // A second dispatch while one is outstanding is never valid
        _ => false,
    }
}

/// Validates and performs a phase transition
pub fn transition_phase(
    current: SessionPhase,
    target: SessionPhase,
) -> Result<SessionPhase, SessionError> {
    if !can_transition(current, target) {
        // The double-dispatch case gets its own error so callers can map it
        // to a distinct HTTP status
        if current == SessionPhase::Generating && target == SessionPhase::Generating {
            return Err(SessionError::AlreadyInFlight);
        }
        return Err(SessionError::InvalidTransition {
            from: current,
            to: target,
        });
    }

    Ok(target)
}

/// Check if a phase indicates an outstanding request
pub fn is_busy(phase: SessionPhase) -> bool {
    matches!(phase, SessionPhase::Generating)
}
