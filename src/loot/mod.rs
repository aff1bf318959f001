//! Loot: deterministic per-session rarity roll and item selection.

pub mod catalog;
pub mod rarity;
pub mod rng;
pub mod roller;
pub mod types;

pub use catalog::default_catalog;
pub use rarity::{apply_adjustments, normalize, pick_rarity, BASE_RARITY_WEIGHTS};
pub use rng::DeterministicRng;
pub use roller::roll_loot;
pub use types::{ItemKind, LootItem, Rarity};
