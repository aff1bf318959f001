//! Static reward tier table.
//!
//! One row per 5-minute threshold from 5 to 120. XP and coins are drawn
//! uniformly from the row's range; sparks are flat per row. Lookup
//! saturates: durations between thresholds fall back to the lower row,
//! durations past 120 use the 120 row.

/// One row of the reward lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardTier {
    pub threshold_minutes: u32,
    pub xp_min: u32,
    pub xp_max: u32,
    pub coins_min: u32,
    pub coins_max: u32,
    pub sparks: u32,
}

const fn tier(
    threshold_minutes: u32,
    xp_min: u32,
    xp_max: u32,
    coins_min: u32,
    coins_max: u32,
    sparks: u32,
) -> RewardTier {
    RewardTier {
        threshold_minutes,
        xp_min,
        xp_max,
        coins_min,
        coins_max,
        sparks,
    }
}

/// Sorted ascending by threshold; covers the full [5, 120] domain.
pub const REWARD_TIERS: [RewardTier; 24] = [
    tier(5, 5, 6, 3, 5, 0),
    tier(10, 11, 13, 6, 10, 0),
    tier(15, 17, 19, 9, 15, 1),
    tier(20, 22, 26, 12, 20, 1),
    tier(25, 28, 32, 15, 25, 1),
    tier(30, 34, 39, 18, 30, 2),
    tier(35, 39, 45, 21, 35, 2),
    tier(40, 45, 52, 24, 40, 2),
    tier(45, 51, 58, 27, 45, 3),
    tier(50, 56, 65, 30, 50, 3),
    tier(55, 62, 71, 33, 55, 3),
    tier(60, 68, 78, 36, 60, 4),
    tier(65, 73, 84, 39, 65, 4),
    tier(70, 79, 91, 42, 70, 4),
    tier(75, 85, 97, 45, 75, 5),
    tier(80, 90, 104, 48, 80, 5),
    tier(85, 96, 110, 51, 85, 5),
    tier(90, 102, 117, 54, 90, 6),
    tier(95, 107, 123, 57, 95, 6),
    tier(100, 113, 130, 60, 100, 6),
    tier(105, 119, 136, 63, 105, 7),
    tier(110, 124, 143, 66, 110, 7),
    tier(115, 130, 149, 69, 115, 7),
    tier(120, 136, 156, 72, 120, 8),
];

/// Selects the tier with the largest threshold <= `minutes`.
///
/// Saturates at both ends: below 5 minutes resolves to the 5-minute row,
/// above 120 resolves to the 120 row. Never errors.
pub fn tier_for_minutes(minutes: f64) -> &'static RewardTier {
    let clamped = minutes.max(REWARD_TIERS[0].threshold_minutes as f64);
    REWARD_TIERS
        .iter()
        .rev()
        .find(|t| (t.threshold_minutes as f64) <= clamped)
        .unwrap_or(&REWARD_TIERS[0])
}
