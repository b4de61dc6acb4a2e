//! The progression state aggregate.
//!
//! All numeric game state lives here and is mutated exclusively through
//! the operations in [`crate::game_logic`], [`crate::prestige`], and
//! [`crate::achievements`]. External layers read snapshots and derived
//! rates; they never hold mutable references into the aggregate.

use crate::achievements::AchievementId;
use crate::artifices::ArtificeId;
use crate::buffs::BuffLedger;
use crate::constants::{INITIAL_POINTS, PRESTIGE_BASE_REQUIREMENT};
use crate::items::ItemId;
use crate::prestige::PrestigeUpgradeId;
use crate::upgrades::UpgradeId;
use std::collections::HashMap;

/// Current wall-clock time in epoch milliseconds. Hosts pass this into
/// the operations; the engine itself never reads the clock.
pub fn current_timestamp_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Main game state containing all player progress.
#[derive(Debug, Clone)]
pub struct GameState {
    pub points: f64,
    pub legacy_tokens: u64,
    pub total_manual_clicks: u64,
    /// Quantity owned per upgrade type; cleared on prestige.
    pub owned_upgrades: HashMap<UpgradeId, u64>,
    /// Consumable item counts; cleared on prestige.
    pub inventory: HashMap<ItemId, u32>,
    /// Active timed effects. Never persisted; always empty after a load.
    pub active_buffs: BuffLedger,
    /// Artifice id -> acquisition time (epoch millis). Append-only.
    pub acquired_artifices: HashMap<ArtificeId, i64>,
    /// Achievement id -> acquisition time (epoch millis). Append-only.
    pub acquired_achievements: HashMap<AchievementId, i64>,
    /// Prestige upgrade id -> level. Survives prestige resets.
    pub owned_prestige_upgrades: HashMap<PrestigeUpgradeId, u32>,
    pub prestige_count: u32,
    /// Cached `base * factor^prestige_count`; recomputed on every
    /// prestige and on load.
    pub current_prestige_requirement: f64,
    /// Epoch millis of the last successful save.
    pub last_save_time: i64,
}

impl GameState {
    /// Creates a fresh game state with default values.
    pub fn new(now_ms: i64) -> Self {
        Self {
            points: INITIAL_POINTS,
            legacy_tokens: 0,
            total_manual_clicks: 0,
            owned_upgrades: HashMap::new(),
            inventory: HashMap::new(),
            active_buffs: BuffLedger::new(),
            acquired_artifices: HashMap::new(),
            acquired_achievements: HashMap::new(),
            owned_prestige_upgrades: HashMap::new(),
            prestige_count: 0,
            current_prestige_requirement: PRESTIGE_BASE_REQUIREMENT,
            last_save_time: now_ms,
        }
    }

    /// Quantity owned of a given upgrade type (0 if never purchased).
    pub fn upgrade_quantity(&self, id: UpgradeId) -> u64 {
        self.owned_upgrades.get(&id).copied().unwrap_or(0)
    }

    /// Level of a prestige upgrade (0 if never purchased).
    pub fn prestige_upgrade_level(&self, id: PrestigeUpgradeId) -> u32 {
        self.owned_prestige_upgrades.get(&id).copied().unwrap_or(0)
    }

    /// Count of a given item in the inventory.
    pub fn item_quantity(&self, id: ItemId) -> u32 {
        self.inventory.get(&id).copied().unwrap_or(0)
    }

    /// Adds items to the inventory, creating the entry on first acquisition.
    pub fn add_item(&mut self, id: ItemId, quantity: u32) {
        *self.inventory.entry(id).or_insert(0) += quantity;
    }

    pub fn has_artifice(&self, id: ArtificeId) -> bool {
        self.acquired_artifices.contains_key(&id)
    }

    pub fn has_achievement(&self, id: AchievementId) -> bool {
        self.acquired_achievements.contains_key(&id)
    }

    /// Current points per second. Re-evaluates buff expiry at `now_ms`.
    pub fn points_per_second(&self, now_ms: i64) -> f64 {
        crate::modifiers::points_per_second(self, now_ms)
    }

    /// Current points per manual click.
    pub fn points_per_click(&self) -> f64 {
        crate::modifiers::points_per_click(self)
    }
}
