//! Static catalog of consumable items.
//!
//! Items are acquired through random drops and stored in the inventory.
//! Using one either grants points instantly or activates a timed rate
//! buff through the buff ledger.

use serde::{Deserialize, Serialize};

/// Unique identifier for each item type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemId {
    QuickPoints,
    PpsBoostCoffee,
    MarketFrenzy,
}

/// What happens when an item is consumed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemEffect {
    /// Adds a flat amount of points immediately.
    InstantPoints { value: f64 },
    /// Multiplies PPS for a limited time.
    RateMultiplier { value: f64, duration_seconds: u64 },
}

/// Immutable definition of a consumable item.
#[derive(Debug, Clone)]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: &'static str,
    pub description: &'static str,
    pub effect: ItemEffect,
}

/// All item definitions.
pub const ALL_ITEMS: &[ItemDefinition] = &[
    ItemDefinition {
        id: ItemId::QuickPoints,
        name: "Quick Points Grant",
        description: "A small grant to boost your points instantly.",
        effect: ItemEffect::InstantPoints { value: 150.0 },
    },
    ItemDefinition {
        id: ItemId::PpsBoostCoffee,
        name: "PPS Boost Coffee",
        description: "Boosts all PPS by 20% for 30 seconds.",
        effect: ItemEffect::RateMultiplier {
            value: 1.2,
            duration_seconds: 30,
        },
    },
    ItemDefinition {
        id: ItemId::MarketFrenzy,
        name: "Market Frenzy Elixir",
        description: "Temporarily doubles PPS from all sources for 20 seconds.",
        effect: ItemEffect::RateMultiplier {
            value: 2.0,
            duration_seconds: 20,
        },
    },
];

/// Looks up an item definition by id.
pub fn get_item(id: ItemId) -> Option<&'static ItemDefinition> {
    ALL_ITEMS.iter().find(|def| def.id == id)
}
