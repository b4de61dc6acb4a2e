//! Achievement catalog and evaluator.
//!
//! Achievements are pure predicates over a state snapshot with a
//! one-time reward. The evaluator runs after every mutation; a reward is
//! applied exactly once, at the moment its predicate first holds.

use crate::events::GameEvent;
use crate::game_state::GameState;
use crate::items::ItemId;
use crate::upgrades::{UpgradeId, ALL_UPGRADES};
use serde::{Deserialize, Serialize};

/// Unique identifier for each achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementId {
    FirstClick,
    ClickEnthusiast,
    PointNovice,
    PointAdept,
    HarvesterOwner,
    ManyHarvesters,
    QuantumLeap,
    ArtificeCollector,
    SeriousInvestor,
}

/// One-time reward granted when an achievement unlocks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AchievementReward {
    Points { value: f64 },
    Item { item_id: ItemId, quantity: u32 },
}

/// Immutable definition of an achievement.
#[derive(Debug, Clone)]
pub struct AchievementDefinition {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    /// Pure predicate over a state snapshot.
    pub condition: fn(&GameState) -> bool,
    pub reward: AchievementReward,
}

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDefinition] = &[
    AchievementDefinition {
        id: AchievementId::FirstClick,
        name: "Baby Steps",
        description: "Make your first click.",
        condition: |state| state.total_manual_clicks >= 1,
        reward: AchievementReward::Points { value: 5.0 },
    },
    AchievementDefinition {
        id: AchievementId::ClickEnthusiast,
        name: "Click Enthusiast",
        description: "Click the button 100 times.",
        condition: |state| state.total_manual_clicks >= 100,
        reward: AchievementReward::Item {
            item_id: ItemId::QuickPoints,
            quantity: 1,
        },
    },
    AchievementDefinition {
        id: AchievementId::PointNovice,
        name: "Point Novice",
        description: "Earn 100 total points.",
        condition: |state| state.points >= 100.0,
        reward: AchievementReward::Points { value: 20.0 },
    },
    AchievementDefinition {
        id: AchievementId::PointAdept,
        name: "Point Adept",
        description: "Earn 10,000 total points.",
        condition: |state| state.points >= 10_000.0,
        reward: AchievementReward::Points { value: 250.0 },
    },
    AchievementDefinition {
        id: AchievementId::HarvesterOwner,
        name: "First Harvester",
        description: "Buy your first Auto Harvester.",
        condition: |state| state.upgrade_quantity(UpgradeId::AutoHarvester) >= 1,
        reward: AchievementReward::Points { value: 50.0 },
    },
    AchievementDefinition {
        id: AchievementId::ManyHarvesters,
        name: "Harvester Fleet",
        description: "Own 10 Auto Harvesters.",
        condition: |state| state.upgrade_quantity(UpgradeId::AutoHarvester) >= 10,
        reward: AchievementReward::Item {
            item_id: ItemId::PpsBoostCoffee,
            quantity: 1,
        },
    },
    AchievementDefinition {
        id: AchievementId::QuantumLeap,
        name: "Quantum Leap",
        description: "Purchase a Quantum Computer.",
        condition: |state| state.upgrade_quantity(UpgradeId::QuantumComputer) >= 1,
        reward: AchievementReward::Points { value: 10_000.0 },
    },
    AchievementDefinition {
        id: AchievementId::ArtificeCollector,
        name: "Artifice Collector",
        description: "Acquire your first Artifice.",
        condition: |state| !state.acquired_artifices.is_empty(),
        reward: AchievementReward::Points { value: 500.0 },
    },
    AchievementDefinition {
        id: AchievementId::SeriousInvestor,
        name: "Serious Investor",
        description: "Own at least one of every type of upgrade.",
        condition: |state| {
            ALL_UPGRADES
                .iter()
                .all(|def| state.upgrade_quantity(def.id) > 0)
        },
        reward: AchievementReward::Points { value: 20_000.0 },
    },
];

/// Looks up an achievement definition by id.
pub fn get_achievement(id: AchievementId) -> Option<&'static AchievementDefinition> {
    ALL_ACHIEVEMENTS.iter().find(|def| def.id == id)
}

/// Grants a single achievement if its predicate holds and it has not
/// been acquired yet. Idempotent.
pub fn grant_achievement_if_unmet(
    state: &mut GameState,
    def: &AchievementDefinition,
    now_ms: i64,
) -> Option<GameEvent> {
    if state.has_achievement(def.id) || !(def.condition)(state) {
        return None;
    }

    state.acquired_achievements.insert(def.id, now_ms);
    match def.reward {
        AchievementReward::Points { value } => state.points += value,
        AchievementReward::Item { item_id, quantity } => state.add_item(item_id, quantity),
    }

    Some(GameEvent::AchievementUnlocked {
        achievement_id: def.id,
    })
}

/// Evaluates every achievement against the current state. Called after
/// each mutation operation.
pub fn check_achievements(state: &mut GameState, now_ms: i64) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for def in ALL_ACHIEVEMENTS {
        if let Some(event) = grant_achievement_if_unmet(state, def, now_ms) {
            events.push(event);
        }
    }
    events
}
