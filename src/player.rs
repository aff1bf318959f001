//! Player economic state.

use crate::economy::level::level_for_xp;
use serde::{Deserialize, Serialize};

/// Snapshot of a player's balances as read from the record store.
///
/// `level` is always a pure function of `total_xp`; the engine
/// recomputes it whenever XP changes so the two fields can be persisted
/// together and never drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub total_xp: u64,
    pub level: u32,
    pub coins: u64,
    pub sparks: u64,
    /// Subscription flag; sparks are an "inspired" perk.
    pub inspired: bool,
    /// Consecutive-day streak. Stored uncapped; the XP multiplier caps
    /// it at 7.
    pub streak_days: u32,
}

impl PlayerState {
    pub fn new() -> Self {
        Self {
            total_xp: 0,
            level: 1,
            coins: 0,
            sparks: 0,
            inspired: false,
            streak_days: 0,
        }
    }

    /// Applies computed rewards and recomputes the level from total XP.
    /// Returns true if the player levelled up.
    pub fn apply_rewards(&mut self, xp: u64, coins: u64, sparks: u64) -> bool {
        let old_level = level_for_xp(self.total_xp);
        self.total_xp += xp;
        self.coins += coins;
        self.sparks += sparks;
        self.level = level_for_xp(self.total_xp);
        self.level > old_level
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}
