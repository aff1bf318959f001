//! Reward economy: tier table, XP/coin/spark computation, level math.

pub mod level;
pub mod rewards;
pub mod tiers;

pub use level::{cumulative_xp_at_level, level_for_xp, xp_progress, xp_to_next_level};
pub use rewards::{compute_coins, compute_sparks, compute_xp, streak_multiplier};
pub use tiers::{tier_for_minutes, RewardTier, REWARD_TIERS};
