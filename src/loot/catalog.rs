//! Default loot catalog.
//!
//! Declaration order is part of the contract: the item roll indexes into
//! the filtered list in this order, so reordering entries changes which
//! item a historical session replays to.

use crate::loot::types::{ItemKind, LootItem, Rarity};

fn item(
    sku: &str,
    name: &str,
    rarity: Rarity,
    kind: ItemKind,
    class_lock: Option<&str>,
    min_level: u32,
) -> LootItem {
    LootItem {
        sku: sku.to_string(),
        name: name.to_string(),
        rarity,
        kind,
        class_lock: class_lock.map(str::to_string),
        min_level,
    }
}

/// Returns the full default catalog.
pub fn default_catalog() -> Vec<LootItem> {
    use ItemKind::{Cosmetic, Pet, Trinket};
    use Rarity::{Common, Rare, SuperRare, UltraRare, Uncommon};

    vec![
        // Common
        item("cos-straw-hat", "Straw Hat", Common, Cosmetic, None, 1),
        item("cos-wool-scarf", "Wool Scarf", Common, Cosmetic, None, 1),
        item("trk-river-pebble", "River Pebble", Common, Trinket, None, 1),
        item("trk-acorn-charm", "Acorn Charm", Common, Trinket, None, 1),
        item("cos-patched-cloak", "Patched Cloak", Common, Cosmetic, None, 3),
        item("trk-tin-whistle", "Tin Whistle", Common, Trinket, None, 3),
        item("cos-clay-mask", "Clay Mask", Common, Cosmetic, None, 5),
        item("pet-dust-mouse", "Dust Mouse", Common, Pet, None, 5),
        // Uncommon
        item("cos-feather-cap", "Feather Cap", Uncommon, Cosmetic, None, 1),
        item("trk-lucky-coin", "Lucky Coin", Uncommon, Trinket, None, 2),
        item("pet-garden-toad", "Garden Toad", Uncommon, Pet, None, 4),
        item("cos-dyed-tunic", "Dyed Tunic", Uncommon, Cosmetic, None, 6),
        item(
            "trk-scholars-quill",
            "Scholar's Quill",
            Uncommon,
            Trinket,
            Some("scholar"),
            6,
        ),
        item("cos-bronze-circlet", "Bronze Circlet", Uncommon, Cosmetic, None, 8),
        // Rare
        item("trk-moonstone", "Moonstone", Rare, Trinket, None, 3),
        item("pet-ember-fox", "Ember Fox", Rare, Pet, None, 7),
        item(
            "cos-duelists-sash",
            "Duelist's Sash",
            Rare,
            Cosmetic,
            Some("warrior"),
            8,
        ),
        item("cos-silver-mantle", "Silver Mantle", Rare, Cosmetic, None, 10),
        item("trk-compass-rose", "Compass Rose", Rare, Trinket, Some("ranger"), 12),
        // Super Rare
        item("pet-cloud-kitten", "Cloud Kitten", SuperRare, Pet, None, 10),
        item("cos-starlit-crown", "Starlit Crown", SuperRare, Cosmetic, None, 14),
        item("trk-astral-locket", "Astral Locket", SuperRare, Trinket, None, 16),
        // Ultra Rare
        item("pet-spark-dragon", "Spark Dragon", UltraRare, Pet, None, 15),
        item("cos-aurora-wings", "Aurora Wings", UltraRare, Cosmetic, None, 20),
    ]
}
