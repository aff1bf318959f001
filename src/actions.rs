//! Session action categories.
//!
//! An action is derived purely from the planned session duration and is
//! frozen on the session record at start time. The XP multiplier is the
//! load-bearing part; emoji/label/theme are presentation metadata.

use crate::constants::{DURATION_STEP_MINUTES, MAX_SESSION_MINUTES, MIN_SESSION_MINUTES};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Train,
    Eat,
    Learn,
    Bathe,
    Sleep,
    Maintain,
    Fight,
    Adventure,
}

/// Display metadata for an action. Presentation-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionMeta {
    pub emoji: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub theme: &'static str,
}

impl Action {
    /// XP multiplier applied on top of the tier's base draw.
    pub fn xp_multiplier(&self) -> f64 {
        match self {
            Action::Train => 1.00,
            Action::Eat => 0.50,
            Action::Learn => 1.05,
            Action::Bathe => 0.40,
            Action::Sleep => 0.25,
            Action::Maintain => 0.80,
            Action::Fight => 1.20,
            Action::Adventure => 1.15,
        }
    }

    pub fn meta(&self) -> ActionMeta {
        match self {
            Action::Train => ActionMeta {
                emoji: "💪",
                label: "Train",
                description: "A quick drill to keep your companion sharp",
                theme: "gym",
            },
            Action::Eat => ActionMeta {
                emoji: "🍖",
                label: "Eat",
                description: "A hearty meal shared over a short focus block",
                theme: "kitchen",
            },
            Action::Learn => ActionMeta {
                emoji: "📚",
                label: "Learn",
                description: "Study time at the companion's side",
                theme: "library",
            },
            Action::Bathe => ActionMeta {
                emoji: "🛁",
                label: "Bathe",
                description: "A long soak to wash the day off",
                theme: "bathhouse",
            },
            Action::Sleep => ActionMeta {
                emoji: "😴",
                label: "Sleep",
                description: "Deep rest while you work the afternoon away",
                theme: "bedroom",
            },
            Action::Maintain => ActionMeta {
                emoji: "🧹",
                label: "Maintain",
                description: "Chores and upkeep around the den",
                theme: "workshop",
            },
            Action::Fight => ActionMeta {
                emoji: "⚔️",
                label: "Fight",
                description: "A sparring bout against a worthy rival",
                theme: "arena",
            },
            Action::Adventure => ActionMeta {
                emoji: "🗺️",
                label: "Adventure",
                description: "An expedition into the far wilds",
                theme: "wilds",
            },
        }
    }
}

/// Maps a planned duration to its action category.
///
/// Total: the input is rounded to the nearest minute and clamped into
/// [5, 120] before classification, so this never rejects. Callers that
/// need strict validation use [`is_valid_duration`] instead.
pub fn action_for_minutes(minutes: f64) -> Action {
    let m = minutes
        .round()
        .clamp(MIN_SESSION_MINUTES as f64, MAX_SESSION_MINUTES as f64) as u32;

    match m {
        5..=15 => Action::Train,
        16..=30 => Action::Eat,
        31..=45 => Action::Learn,
        46..=60 => Action::Bathe,
        61..=75 => Action::Sleep,
        76..=90 => Action::Maintain,
        91..=105 => Action::Fight,
        _ => Action::Adventure,
    }
}

/// All legal planned durations: 5-minute steps in [5, 120], 24 values.
pub fn valid_durations() -> Vec<u32> {
    (MIN_SESSION_MINUTES..=MAX_SESSION_MINUTES)
        .step_by(DURATION_STEP_MINUTES as usize)
        .collect()
}

/// Strict check used at the request boundary: in range and on a
/// 5-minute step. Stricter than the clamping of [`action_for_minutes`].
pub fn is_valid_duration(minutes: u32) -> bool {
    (MIN_SESSION_MINUTES..=MAX_SESSION_MINUTES).contains(&minutes)
        && minutes % DURATION_STEP_MINUTES == 0
}
