//! Rarity weight table and adjustment pipeline.
//!
//! Two explicit phases: [`apply_adjustments`] shifts raw weight from
//! Common toward higher tiers (longer sessions, class affinity), then
//! [`normalize`] rescales so the weights sum to 1 again. The raw
//! adjusted weights do not sum to 1 and must never feed the cumulative
//! roll directly.

use crate::constants::{CLASS_AFFINITY_BONUS, RARITY_BONUS_CAP, RARITY_BONUS_PER_25_MIN};
use crate::loot::types::Rarity;

/// Base distribution, indexed in [`Rarity::all`] order:
/// C=55%, U=25%, R=12%, SR=6%, SSR=2%.
pub const BASE_RARITY_WEIGHTS: [f64; 5] = [0.55, 0.25, 0.12, 0.06, 0.02];

/// Phase one: apply duration and class-affinity bonuses to the base
/// weights. Output is a raw table that generally does not sum to 1.
pub fn apply_adjustments(
    base: [f64; 5],
    session_minutes: f64,
    has_class_affinity: bool,
) -> [f64; 5] {
    let mut weights = base;

    // Longer sessions shift up to 25 percentage points out of Common
    let increase = (session_minutes / 25.0 * RARITY_BONUS_PER_25_MIN).min(RARITY_BONUS_CAP);
    weights[1] += increase * 0.3;
    weights[2] += increase * 0.4;
    weights[3] += increase * 0.2;
    weights[4] += increase * 0.1;
    weights[0] -= increase;

    // Class affinity is a flat bias, not scaled by which class
    if has_class_affinity {
        weights[2] += CLASS_AFFINITY_BONUS * 0.3;
        weights[3] += CLASS_AFFINITY_BONUS * 0.4;
        weights[4] += CLASS_AFFINITY_BONUS * 0.3;
        weights[0] -= CLASS_AFFINITY_BONUS;
    }

    weights
}

/// Phase two: rescale so the table sums to exactly 1.
pub fn normalize(raw: [f64; 5]) -> [f64; 5] {
    let total: f64 = raw.iter().sum();
    if total <= 0.0 {
        return BASE_RARITY_WEIGHTS;
    }
    raw.map(|w| w / total)
}

/// Cumulative-walk selection over a normalized table. Walks tiers in
/// table order and returns the first whose running sum reaches `roll`;
/// float residue at the top end falls back to Common.
pub fn pick_rarity(weights: &[f64; 5], roll: f64) -> Rarity {
    let mut cumulative = 0.0;
    for (rarity, weight) in Rarity::all().iter().zip(weights.iter()) {
        cumulative += weight;
        if roll <= cumulative {
            return *rarity;
        }
    }
    Rarity::Common
}
