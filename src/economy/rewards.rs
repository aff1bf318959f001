//! XP, coin, and spark computation.
//!
//! The base XP/coin draw is randomized (rewarding variance, so grinding
//! is never perfectly predictable); the action and streak multipliers on
//! top are deterministic (so players can reason about relative value).
//! Both properties are load-bearing.

use crate::actions::Action;
use crate::constants::{STREAK_BONUS_PER_DAY, STREAK_CAP_DAYS};
use crate::economy::tiers::tier_for_minutes;
use rand::Rng;

/// Streak multiplier: +2% per consecutive day, diminishing past 7 days
/// (the stored streak may exceed 7; the bonus does not).
pub fn streak_multiplier(streak_days: u32) -> f64 {
    1.0 + streak_days.min(STREAK_CAP_DAYS) as f64 * STREAK_BONUS_PER_DAY
}

/// Computes XP for a completed session.
///
/// Draws a uniform integer from the tier's XP range, scales by
/// `success_multiplier` (1.0 for success, 0.5 for fail/early-stop),
/// then applies the action and streak multipliers and rounds.
pub fn compute_xp(
    minutes: f64,
    action: Action,
    streak_days: u32,
    success_multiplier: f64,
    rng: &mut impl Rng,
) -> u64 {
    let t = tier_for_minutes(minutes);
    let base = rng.gen_range(t.xp_min..=t.xp_max) as f64 * success_multiplier;
    let scaled = base * action.xp_multiplier() * streak_multiplier(streak_days);
    scaled.round().max(0.0) as u64
}

/// Computes coins for a completed session: a uniform draw from the
/// tier's coin range scaled by `success_multiplier`. No action or
/// streak multiplier applies to coins.
pub fn compute_coins(minutes: f64, success_multiplier: f64, rng: &mut impl Rng) -> u64 {
    let t = tier_for_minutes(minutes);
    let base = rng.gen_range(t.coins_min..=t.coins_max) as f64 * success_multiplier;
    base.round().max(0.0) as u64
}

/// Computes sparks: the tier's flat value for subscribers ("inspired"
/// players), zero otherwise. No randomization.
pub fn compute_sparks(minutes: f64, inspired: bool) -> u64 {
    if !inspired {
        return 0;
    }
    tier_for_minutes(minutes).sparks as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_streak_multiplier_caps_at_seven() {
        assert_eq!(streak_multiplier(0), 1.0);
        assert!((streak_multiplier(3) - 1.06).abs() < 1e-9);
        assert!((streak_multiplier(7) - 1.14).abs() < 1e-9);
        // Stored streaks past 7 still earn only the capped bonus
        assert_eq!(streak_multiplier(8), streak_multiplier(7));
        assert_eq!(streak_multiplier(365), streak_multiplier(7));
    }

    #[test]
    fn test_xp_stays_in_tier_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        // 5-minute Train with no streak: tier is [5,6], multiplier 1.0
        for _ in 0..200 {
            let xp = compute_xp(5.0, Action::Train, 0, 1.0, &mut rng);
            assert!((5..=6).contains(&xp), "got {xp}");
        }
        // 30-minute Train: tier is [34,39]
        for _ in 0..200 {
            let xp = compute_xp(30.0, Action::Train, 0, 1.0, &mut rng);
            assert!((34..=39).contains(&xp), "got {xp}");
        }
    }

    #[test]
    fn test_xp_applies_action_multiplier() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        // Sleep at 0.25x on the [5,6] tier rounds to 1 or 2
        for _ in 0..200 {
            let xp = compute_xp(5.0, Action::Sleep, 0, 1.0, &mut rng);
            assert!((1..=2).contains(&xp), "got {xp}");
        }
        // Fight at 1.20x on [34,39] gives [41,47] after rounding
        for _ in 0..200 {
            let xp = compute_xp(30.0, Action::Fight, 0, 1.0, &mut rng);
            assert!((41..=47).contains(&xp), "got {xp}");
        }
    }

    #[test]
    fn test_xp_applies_streak_multiplier() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        // Full streak on [5,6]: 5*1.14=5.7 -> 6, 6*1.14=6.84 -> 7
        for _ in 0..200 {
            let xp = compute_xp(5.0, Action::Train, 7, 1.0, &mut rng);
            assert!((6..=7).contains(&xp), "got {xp}");
        }
    }

    #[test]
    fn test_xp_halved_on_failure() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        // Half of [34,39] is [17,19.5] -> [17,20] after rounding
        for _ in 0..200 {
            let xp = compute_xp(30.0, Action::Train, 0, 0.5, &mut rng);
            assert!((17..=20).contains(&xp), "got {xp}");
        }
    }

    #[test]
    fn test_xp_saturates_past_120_minutes() {
        let mut rng = ChaCha8Rng::seed_from_u64(19);
        // 200 minutes uses the 120 tier [136,156]
        for _ in 0..200 {
            let xp = compute_xp(200.0, Action::Train, 0, 1.0, &mut rng);
            assert!((136..=156).contains(&xp), "got {xp}");
        }
    }

    #[test]
    fn test_fight_beats_train_in_expectation() {
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        let trials = 2000;
        let train: u64 = (0..trials)
            .map(|_| compute_xp(60.0, Action::Train, 0, 1.0, &mut rng))
            .sum();
        let fight: u64 = (0..trials)
            .map(|_| compute_xp(60.0, Action::Fight, 0, 1.0, &mut rng))
            .sum();
        assert!(
            fight > train,
            "Fight (1.20x) should out-earn Train (1.00x): {fight} vs {train}"
        );
    }

    #[test]
    fn test_coins_stay_in_tier_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(29);
        for _ in 0..200 {
            let coins = compute_coins(30.0, 1.0, &mut rng);
            assert!((18..=30).contains(&coins), "got {coins}");
        }
    }

    #[test]
    fn test_coins_between_thresholds_use_lower_tier() {
        let mut rng = ChaCha8Rng::seed_from_u64(31);
        // 7 minutes falls back to the 5-minute tier [3,5]
        for _ in 0..200 {
            let coins = compute_coins(7.0, 1.0, &mut rng);
            assert!((3..=5).contains(&coins), "got {coins}");
        }
    }

    #[test]
    fn test_sparks_gated_on_subscription() {
        assert_eq!(compute_sparks(30.0, false), 0);
        assert_eq!(compute_sparks(120.0, false), 0);
        assert_eq!(compute_sparks(15.0, true), 1);
        assert_eq!(compute_sparks(30.0, true), 2);
        assert_eq!(compute_sparks(60.0, true), 4);
        assert_eq!(compute_sparks(120.0, true), 8);
    }

    #[test]
    fn test_sparks_are_deterministic() {
        // Same inputs, same output, every time: sparks never randomize
        for _ in 0..10 {
            assert_eq!(compute_sparks(45.0, true), 3);
        }
    }
}
