//! The loot roll itself.

use crate::loot::rarity::{apply_adjustments, normalize, pick_rarity, BASE_RARITY_WEIGHTS};
use crate::loot::rng::DeterministicRng;
use crate::loot::types::LootItem;
use log::trace;

/// Rolls loot for a completed session.
///
/// Deterministic in `session_id`: the generator is seeded from the id,
/// the first draw picks the rarity tier, the second picks an item from
/// the tier. Returns `None` when no catalog item matches the rolled
/// rarity at the player's level; that is a normal "no loot this time"
/// outcome, not an error.
pub fn roll_loot(
    session_id: &str,
    session_minutes: f64,
    player_level: u32,
    player_class: Option<&str>,
    catalog: &[LootItem],
) -> Option<LootItem> {
    let mut rng = DeterministicRng::from_key(session_id);

    let raw = apply_adjustments(BASE_RARITY_WEIGHTS, session_minutes, player_class.is_some());
    let weights = normalize(raw);
    let rarity = pick_rarity(&weights, rng.next_f64());

    // Catalog declaration order keeps the filtered list stable, so the
    // same roll replays to the same item
    let candidates: Vec<&LootItem> = catalog
        .iter()
        .filter(|i| i.rarity == rarity && i.min_level <= player_level)
        .collect();

    if candidates.is_empty() {
        trace!("no {} loot at level {player_level} for {session_id}", rarity.code());
        return None;
    }

    let index = ((rng.next_f64() * candidates.len() as f64) as usize).min(candidates.len() - 1);
    Some(candidates[index].clone())
}
