//! Outbound notifications produced by state mutations.
//!
//! The engine never talks to a UI directly. Every mutation returns the
//! events it produced and the embedding layer maps them to toasts,
//! cards, or log lines. Delivery is fire-and-forget: no game state
//! depends on an event being observed.

use crate::achievements::AchievementId;
use crate::artifices::ArtificeId;
use crate::items::ItemId;
use crate::prestige::PrestigeUpgradeId;
use crate::upgrades::UpgradeId;

/// A single event produced by a mutation operation.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// An item dropped or was granted and entered the inventory.
    ItemAcquired { item_id: ItemId, quantity: u32 },

    /// A previously-unowned artifice dropped.
    ArtificeAcquired { artifice_id: ArtificeId },

    /// An achievement's predicate held for the first time.
    AchievementUnlocked { achievement_id: AchievementId },

    /// A timed buff was activated or refreshed.
    BuffActivated { item_id: ItemId, expires_at: i64 },

    /// A timed buff ran out during a sweep.
    BuffExpired { item_id: ItemId },

    /// An upgrade purchase went through.
    PurchaseSucceeded {
        upgrade_id: UpgradeId,
        count: u64,
        cost: f64,
    },

    /// A prestige upgrade was bought with legacy tokens.
    PrestigeUpgradePurchased {
        id: PrestigeUpgradeId,
        new_level: u32,
    },

    /// A prestige reset completed.
    PrestigeSucceeded {
        tokens_earned: u64,
        new_requirement: f64,
    },

    /// A saved game was restored, including offline catch-up earnings.
    GameLoaded {
        offline_seconds: i64,
        points_earned: f64,
    },

    /// The session was wiped back to a fresh state.
    GameReset,
}
