//! Request/response contracts for the session endpoints.
//!
//! Shapes are validated here at the boundary; the engine functions
//! behind them are total and never reject.

use crate::actions::{self, Action};
use crate::error::EngineError;
use crate::loot::types::{ItemKind, LootItem, Rarity};
use crate::session::SessionOutcome;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartSessionRequest {
    pub action: Action,
    pub duration_minutes: u32,
}

impl StartSessionRequest {
    /// Strict duration check: starting a session requires an exact
    /// 5-minute step in [5, 120], unlike the permissive classifier.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !actions::is_valid_duration(self.duration_minutes) {
            return Err(EngineError::Validation(format!(
                "duration_minutes must be a 5-minute step in [5, 120], got {}",
                self.duration_minutes
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartSessionResponse {
    pub session_id: Uuid,
    pub expected_end_time: DateTime<Utc>,
    pub nonce: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompleteSessionRequest {
    pub session_id: Uuid,
    pub actual_duration_minutes: u32,
    pub disturbed_seconds: u32,
    pub outcome: SessionOutcome,
}

impl CompleteSessionRequest {
    pub fn validate(&self) -> Result<(), EngineError> {
        // Unsigned fields already exclude negatives; guard against
        // absurd values that indicate clock skew or tampering
        const MAX_PLAUSIBLE_MINUTES: u32 = 24 * 60;
        if self.actual_duration_minutes > MAX_PLAUSIBLE_MINUTES {
            return Err(EngineError::Validation(format!(
                "actual_duration_minutes {} exceeds a full day",
                self.actual_duration_minutes
            )));
        }
        Ok(())
    }
}

/// Wire form of an awarded loot item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootReward {
    pub sku: String,
    pub name: String,
    pub rarity: Rarity,
    #[serde(rename = "type")]
    pub kind: ItemKind,
}

impl From<&LootItem> for LootReward {
    fn from(item: &LootItem) -> Self {
        Self {
            sku: item.sku.clone(),
            name: item.name.clone(),
            rarity: item.rarity,
            kind: item.kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompleteSessionResponse {
    pub xp_gained: u64,
    pub coins_gained: u64,
    pub sparks_gained: u64,
    pub level_up: bool,
    pub new_level: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streak_updated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_streak: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loot: Option<Vec<LootReward>>,
}
