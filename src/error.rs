//! Error types for the engine.
//!
//! User-input rejections are ordinary values: the state is unchanged and
//! the caller surfaces the reason. Nothing here aborts a session.

use crate::artifices::ArtificeId;
use crate::items::ItemId;
use crate::prestige::PrestigeUpgradeId;
use crate::upgrades::UpgradeId;

/// Result type alias for mutation operations.
pub type GameResult<T> = std::result::Result<T, Rejection>;

/// A rejected player action. Non-fatal; the state is left untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Rejection {
    /// Not enough points for the requested purchase.
    #[error("insufficient points: need {required:.0}, have {available:.0}")]
    InsufficientPoints { required: f64, available: f64 },

    /// Not enough legacy tokens for a prestige upgrade.
    #[error("insufficient legacy tokens: need {required}, have {available}")]
    InsufficientTokens { required: u64, available: u64 },

    /// The id has no entry in the upgrade catalog.
    #[error("unknown upgrade: {0:?}")]
    UnknownUpgrade(UpgradeId),

    /// The id has no entry in the item catalog.
    #[error("unknown item: {0:?}")]
    UnknownItem(ItemId),

    /// The id has no entry in the artifice catalog.
    #[error("unknown artifice: {0:?}")]
    UnknownArtifice(ArtificeId),

    /// The id has no entry in the prestige upgrade catalog.
    #[error("unknown prestige upgrade: {0:?}")]
    UnknownPrestigeUpgrade(PrestigeUpgradeId),

    /// The item is not present in the inventory.
    #[error("item not in inventory: {0:?}")]
    ItemNotInInventory(ItemId),

    /// The prestige upgrade is already at its maximum level.
    #[error("{id:?} is already at max level {max_level}")]
    MaxLevelReached {
        id: PrestigeUpgradeId,
        max_level: u32,
    },

    /// Points have not reached the current prestige requirement.
    #[error("prestige requires {required:.0} points, have {points:.0}")]
    PrestigeNotReady { required: f64, points: f64 },
}
