//! Level and progress math.
//!
//! The XP curve is triangular: the cumulative XP needed to reach level L
//! (counting from level 1) is L*(L+1)/2 * 100. Level is always a pure
//! function of total XP; callers must recompute it after adding XP and
//! never increment it heuristically.

use crate::constants::XP_CURVE_STEP;

/// Cumulative XP threshold at the top of `level`, i.e. the total XP
/// required to reach `level + 1`.
///
/// This is a cumulative threshold, not a per-level delta; see
/// [`xp_to_next_level`] for the "XP remaining" form.
pub fn cumulative_xp_at_level(level: u32) -> u64 {
    let l = level as u64;
    l * (l + 1) / 2 * XP_CURVE_STEP
}

/// Level for a total XP amount: the largest L >= 1 with
/// `cumulative_xp_at_level(L - 1) <= total_xp`.
///
/// Uses the closed-form triangular inverse, then corrects for float
/// rounding at exact thresholds so boundaries land on the next level.
pub fn level_for_xp(total_xp: u64) -> u32 {
    let x = total_xp as f64 / XP_CURVE_STEP as f64;
    let mut k = ((-1.0 + (1.0 + 8.0 * x).sqrt()) / 2.0).floor() as i64;
    if k < 0 {
        k = 0;
    }
    // k should be the largest integer with T(k) <= total_xp; nudge if
    // sqrt landed a hair off an exact threshold
    while k > 0 && cumulative_xp_at_level(k as u32) > total_xp {
        k -= 1;
    }
    while cumulative_xp_at_level(k as u32 + 1) <= total_xp {
        k += 1;
    }
    k as u32 + 1
}

/// XP still needed to reach the next level from `total_xp`.
pub fn xp_to_next_level(total_xp: u64) -> u64 {
    let level = level_for_xp(total_xp);
    cumulative_xp_at_level(level).saturating_sub(total_xp)
}

/// Fraction of the current level completed, in [0, 1].
pub fn xp_progress(total_xp: u64) -> f64 {
    let level = level_for_xp(total_xp);
    let floor = cumulative_xp_at_level(level - 1);
    let ceiling = cumulative_xp_at_level(level);
    let span = (ceiling - floor) as f64;
    (((total_xp.saturating_sub(floor)) as f64) / span).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cumulative_thresholds() {
        assert_eq!(cumulative_xp_at_level(0), 0);
        assert_eq!(cumulative_xp_at_level(1), 100);
        assert_eq!(cumulative_xp_at_level(2), 300);
        assert_eq!(cumulative_xp_at_level(3), 600);
        assert_eq!(cumulative_xp_at_level(10), 5500);
    }

    #[test]
    fn test_level_fixed_points() {
        assert_eq!(level_for_xp(0), 1);
        assert_eq!(level_for_xp(99), 1);
        assert_eq!(level_for_xp(100), 2);
        assert_eq!(level_for_xp(299), 2);
        assert_eq!(level_for_xp(300), 3);
        assert_eq!(level_for_xp(5500), 11);
    }

    #[test]
    fn test_level_boundary_lands_on_next_level() {
        // Reaching the cumulative threshold for level L is exactly L+1
        for level in 1..=500 {
            assert_eq!(
                level_for_xp(cumulative_xp_at_level(level)),
                level + 1,
                "threshold for level {level}"
            );
            assert_eq!(
                level_for_xp(cumulative_xp_at_level(level) - 1),
                level,
                "one below threshold for level {level}"
            );
        }
    }

    #[test]
    fn test_level_is_monotonic() {
        let mut prev = level_for_xp(0);
        for xp in (0..100_000).step_by(37) {
            let level = level_for_xp(xp);
            assert!(level >= prev, "level dropped at xp={xp}");
            prev = level;
        }
    }

    #[test]
    fn test_xp_to_next_level_delta() {
        // Level 1 spans [0, 100)
        assert_eq!(xp_to_next_level(0), 100);
        assert_eq!(xp_to_next_level(40), 60);
        // Level 2 spans [100, 300)
        assert_eq!(xp_to_next_level(100), 200);
        assert_eq!(xp_to_next_level(299), 1);
    }

    #[test]
    fn test_progress_bounds_and_midpoints() {
        assert_eq!(xp_progress(0), 0.0);
        assert!((xp_progress(50) - 0.5).abs() < 1e-9);
        // At an exact threshold, progress resets to 0 in the new level
        assert_eq!(xp_progress(100), 0.0);
        assert!((xp_progress(200) - 0.5).abs() < 1e-9);
        for xp in (0..50_000).step_by(113) {
            let p = xp_progress(xp);
            assert!((0.0..=1.0).contains(&p), "progress {p} at xp={xp}");
        }
    }

    #[test]
    fn test_level_up_detection_recomputes_from_total() {
        let old_xp = 95u64;
        let gained = 10u64;
        let old_level = level_for_xp(old_xp);
        let new_level = level_for_xp(old_xp + gained);
        assert_eq!(old_level, 1);
        assert_eq!(new_level, 2);
        assert!(new_level > old_level);
    }
}
