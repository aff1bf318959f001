use serde::{Deserialize, Serialize};

/// Loot rarity tiers, in table order (cheapest first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    #[serde(rename = "C")]
    Common = 0,
    #[serde(rename = "U")]
    Uncommon = 1,
    #[serde(rename = "R")]
    Rare = 2,
    #[serde(rename = "SR")]
    SuperRare = 3,
    #[serde(rename = "SSR")]
    UltraRare = 4,
}

impl Rarity {
    /// Short wire code for this tier.
    pub fn code(&self) -> &'static str {
        match self {
            Rarity::Common => "C",
            Rarity::Uncommon => "U",
            Rarity::Rare => "R",
            Rarity::SuperRare => "SR",
            Rarity::UltraRare => "SSR",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::SuperRare => "Super Rare",
            Rarity::UltraRare => "Ultra Rare",
        }
    }

    /// All tiers in table order. Order matters for the cumulative roll.
    pub fn all() -> [Rarity; 5] {
        [
            Rarity::Common,
            Rarity::Uncommon,
            Rarity::Rare,
            Rarity::SuperRare,
            Rarity::UltraRare,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Cosmetic,
    Pet,
    Trinket,
}

/// One catalog entry. The engine only selects from the catalog; it never
/// mutates it, and the orchestrator decides whether a selected item
/// actually lands in an inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootItem {
    pub sku: String,
    pub name: String,
    pub rarity: Rarity,
    pub kind: ItemKind,
    /// Cosmetic affinity tag; does not gate selection.
    pub class_lock: Option<String>,
    pub min_level: u32,
}
