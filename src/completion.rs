//! Session completion: the orchestrator contract boundary.
//!
//! [`complete_session`] takes a consistent snapshot of player state plus
//! the session record, computes rewards, applies them to the snapshot,
//! and returns the response for the caller to persist atomically.
//! Serializing the read-modify-write per player (transaction or
//! optimistic check) is the caller's job; the engine holds no locks.

use crate::economy::rewards::{compute_coins, compute_sparks, compute_xp};
use crate::error::EngineError;
use crate::loot::roller::roll_loot;
use crate::loot::types::LootItem;
use crate::player::PlayerState;
use crate::schema::{CompleteSessionRequest, CompleteSessionResponse, LootReward};
use crate::session::Session;
use chrono::Utc;
use log::debug;
use rand::Rng;

/// Completes a session against a player snapshot.
///
/// Outcome policy: success earns the full computed rewards plus a loot
/// roll; fail/early-stop earns XP and coins at 0.5x with sparks forced
/// to zero and no loot. The player's class (if any) biases loot rarity.
pub fn complete_session(
    player: &mut PlayerState,
    session: &mut Session,
    request: &CompleteSessionRequest,
    player_class: Option<&str>,
    catalog: &[LootItem],
    rng: &mut impl Rng,
) -> Result<CompleteSessionResponse, EngineError> {
    request.validate()?;
    if request.session_id != session.id {
        return Err(EngineError::NotFound(format!(
            "session {} does not match record {}",
            request.session_id, session.id
        )));
    }

    // Terminal write; conflicts if the session was already completed
    session.complete(
        request.outcome,
        Utc::now(),
        request.actual_duration_minutes as f64,
        request.disturbed_seconds,
    )?;

    let minutes = session.actual_duration_minutes;
    let multiplier = request.outcome.reward_multiplier();

    let xp = compute_xp(minutes, session.action, player.streak_days, multiplier, rng);
    let coins = compute_coins(minutes, multiplier, rng);
    let sparks = if request.outcome.is_success() {
        compute_sparks(minutes, player.inspired)
    } else {
        0
    };

    let loot = if request.outcome.is_success() {
        roll_loot(
            &session.id.to_string(),
            minutes,
            player.level,
            player_class,
            catalog,
        )
    } else {
        None
    };

    let level_up = player.apply_rewards(xp, coins, sparks);

    debug!(
        "session {} complete: outcome={:?} xp={xp} coins={coins} sparks={sparks} level={}",
        session.id, request.outcome, player.level
    );

    Ok(CompleteSessionResponse {
        xp_gained: xp,
        coins_gained: coins,
        sparks_gained: sparks,
        level_up,
        new_level: player.level,
        streak_updated: None,
        new_streak: None,
        loot: loot.map(|item| vec![LootReward::from(&item)]),
    })
}
