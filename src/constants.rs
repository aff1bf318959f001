// Session duration domain
pub const MIN_SESSION_MINUTES: u32 = 5;
pub const MAX_SESSION_MINUTES: u32 = 120;
pub const DURATION_STEP_MINUTES: u32 = 5;

// XP curve: cumulative XP to reach level L is L*(L+1)/2 * XP_CURVE_STEP
pub const XP_CURVE_STEP: u64 = 100;

// Streak bonus: +2% XP per consecutive day, capped at 7 days
pub const STREAK_CAP_DAYS: u32 = 7;
pub const STREAK_BONUS_PER_DAY: f64 = 0.02;

// Outcome policy: failed / early-stopped sessions earn half rewards
pub const SUCCESS_MULTIPLIER: f64 = 1.0;
pub const FAIL_MULTIPLIER: f64 = 0.5;

// Loot LCG. Changing any of these breaks replay determinism for
// historical sessions.
pub const LCG_MULTIPLIER: u64 = 9301;
pub const LCG_INCREMENT: u64 = 49297;
pub const LCG_MODULUS: u64 = 233280;

// Loot rarity duration bonus: +5% budget per 25 minutes, capped at +25
// percentage points, redistributed from Common toward higher tiers
pub const RARITY_BONUS_PER_25_MIN: f64 = 0.05;
pub const RARITY_BONUS_CAP: f64 = 0.25;

// Class affinity: flat +10 percentage point budget toward R/SR/SSR
pub const CLASS_AFFINITY_BONUS: f64 = 0.10;
