//! Session records as the engine consumes them.
//!
//! A session is created when a focus period begins and mutated exactly
//! once at completion (outcome + end time). The engine treats it as
//! read-only input plus that one terminal write.

use crate::actions::Action;
use crate::error::EngineError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionOutcome {
    Success,
    Fail,
    EarlyStop,
}

impl SessionOutcome {
    /// Reward multiplier for this outcome: full rewards on success,
    /// half on fail or early stop.
    pub fn reward_multiplier(&self) -> f64 {
        match self {
            SessionOutcome::Success => crate::constants::SUCCESS_MULTIPLIER,
            SessionOutcome::Fail | SessionOutcome::EarlyStop => crate::constants::FAIL_MULTIPLIER,
        }
    }

    /// Sparks and loot are only awarded for successful sessions.
    pub fn is_success(&self) -> bool {
        matches!(self, SessionOutcome::Success)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub action: Action,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub outcome: Option<SessionOutcome>,
    pub actual_duration_minutes: f64,
    pub disturbed_seconds: u32,
}

impl Session {
    /// Starts a new session. The action is frozen from the planned
    /// duration at start time, stored for auditability.
    pub fn start(action: Action, started_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            action,
            started_at,
            ended_at: None,
            outcome: None,
            actual_duration_minutes: 0.0,
            disturbed_seconds: 0,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.outcome.is_some()
    }

    /// The single terminal write. A second completion attempt is a
    /// conflict, never a silent overwrite.
    pub fn complete(
        &mut self,
        outcome: SessionOutcome,
        ended_at: DateTime<Utc>,
        actual_duration_minutes: f64,
        disturbed_seconds: u32,
    ) -> Result<(), EngineError> {
        if self.is_completed() {
            return Err(EngineError::Conflict(format!(
                "session {} already completed",
                self.id
            )));
        }
        self.outcome = Some(outcome);
        self.ended_at = Some(ended_at);
        self.actual_duration_minutes = actual_duration_minutes.max(0.0);
        self.disturbed_seconds = disturbed_seconds;
        Ok(())
    }
}
