//! Prestige system: permanent upgrades bought with legacy tokens, and
//! the prestige reset transition itself.
//!
//! Prestiging trades all transient progress (points, upgrades,
//! inventory, buffs) for legacy tokens. Artifices, achievements, tokens,
//! and prestige upgrade levels survive the reset, and the requirement
//! for the next prestige doubles each time.

use crate::constants::{
    ARTIFICE_CHANCE_BONUS_PER_LEVEL, HEAD_START_POINTS, INITIAL_POINTS,
    LEGACY_TOKEN_POINTS_DIVISOR, PRESTIGE_BASE_REQUIREMENT, PRESTIGE_REQUIREMENT_FACTOR,
    UPGRADE_COST_REDUCTION_PER_LEVEL,
};
use crate::error::{GameResult, Rejection};
use crate::events::GameEvent;
use crate::game_state::GameState;
use serde::{Deserialize, Serialize};

/// Unique identifier for each prestige upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrestigeUpgradeId {
    LegacyPower,
    AncientClick,
    HeadStart,
    ArtificeAttunement,
    EconomicInsight,
}

/// The permanent effect a prestige upgrade grants per level.
///
/// Every effect goes through this one dispatch; no effect is
/// special-cased by upgrade id anywhere else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrestigeEffect {
    /// Multiplies PPS by `(1 + per_level * level)`.
    GlobalPpsBoost { per_level: f64 },
    /// Multiplies PPC by `(1 + per_level * level)`.
    GlobalPpcBoost { per_level: f64 },
    /// Start with this many points after each prestige. Flag semantics:
    /// any level > 0 applies the full amount once per prestige.
    StartingPoints { amount: f64 },
    /// Multiplies artifice drop chances by `(1 + per_level * level)`.
    ArtificeChanceBoost { per_level: f64 },
    /// Multiplies upgrade base costs by `(1 - per_level * level)`.
    UpgradeCostReduction { per_level: f64 },
}

/// Immutable definition of a prestige upgrade.
#[derive(Debug, Clone)]
pub struct PrestigeUpgradeDefinition {
    pub id: PrestigeUpgradeId,
    pub name: &'static str,
    pub description: &'static str,
    pub token_cost: u64,
    pub effect: PrestigeEffect,
    pub max_level: Option<u32>,
}

/// All prestige upgrade definitions.
pub const ALL_PRESTIGE_UPGRADES: &[PrestigeUpgradeDefinition] = &[
    PrestigeUpgradeDefinition {
        id: PrestigeUpgradeId::LegacyPower,
        name: "Legacy Power I",
        description: "Permanently increases all Points Per Second (PPS) by 10%.",
        token_cost: 5,
        effect: PrestigeEffect::GlobalPpsBoost { per_level: 0.10 },
        max_level: Some(5),
    },
    PrestigeUpgradeDefinition {
        id: PrestigeUpgradeId::AncientClick,
        name: "Ancient Click I",
        description: "Permanently increases all Points Per Click (PPC) by 20%.",
        token_cost: 3,
        effect: PrestigeEffect::GlobalPpcBoost { per_level: 0.20 },
        max_level: Some(5),
    },
    PrestigeUpgradeDefinition {
        id: PrestigeUpgradeId::HeadStart,
        name: "Head Start",
        description: "Start with 1,000 points after prestiging.",
        token_cost: 10,
        effect: PrestigeEffect::StartingPoints {
            amount: HEAD_START_POINTS,
        },
        max_level: None,
    },
    PrestigeUpgradeDefinition {
        id: PrestigeUpgradeId::ArtificeAttunement,
        name: "Artifice Attunement",
        description: "Slightly increases the chance of finding Artifices.",
        token_cost: 15,
        effect: PrestigeEffect::ArtificeChanceBoost {
            per_level: ARTIFICE_CHANCE_BONUS_PER_LEVEL,
        },
        max_level: Some(3),
    },
    PrestigeUpgradeDefinition {
        id: PrestigeUpgradeId::EconomicInsight,
        name: "Economic Insight",
        description: "Reduces the cost of all regular upgrades by 2% per level.",
        token_cost: 20,
        effect: PrestigeEffect::UpgradeCostReduction {
            per_level: UPGRADE_COST_REDUCTION_PER_LEVEL,
        },
        max_level: Some(5),
    },
];

/// Looks up a prestige upgrade definition by id.
pub fn get_prestige_upgrade(id: PrestigeUpgradeId) -> Option<&'static PrestigeUpgradeDefinition> {
    ALL_PRESTIGE_UPGRADES.iter().find(|def| def.id == id)
}

/// The prestige requirement after `prestige_count` completed prestiges.
pub fn prestige_requirement(prestige_count: u32) -> f64 {
    PRESTIGE_BASE_REQUIREMENT * PRESTIGE_REQUIREMENT_FACTOR.powi(prestige_count as i32)
}

/// Checks whether the player can prestige right now.
pub fn can_prestige(state: &GameState) -> bool {
    state.points >= state.current_prestige_requirement
}

/// Legacy tokens awarded for prestiging at `points`, given the current
/// requirement. Zero when ineligible.
pub fn legacy_tokens_for(points: f64, requirement: f64) -> u64 {
    if points < requirement {
        return 0;
    }
    (points / LEGACY_TOKEN_POINTS_DIVISOR).sqrt().floor() as u64
}

/// Performs the prestige reset transition.
///
/// Atomic: either the whole transition applies or the state is
/// untouched. Retains artifices, achievements, tokens, and prestige
/// upgrades; clears upgrades, inventory, and buffs.
pub fn perform_prestige(state: &mut GameState) -> GameResult<Vec<GameEvent>> {
    if !can_prestige(state) {
        return Err(Rejection::PrestigeNotReady {
            required: state.current_prestige_requirement,
            points: state.points,
        });
    }

    let tokens_earned = legacy_tokens_for(state.points, state.current_prestige_requirement);
    state.legacy_tokens += tokens_earned;

    let head_start = ALL_PRESTIGE_UPGRADES.iter().find_map(|def| {
        match def.effect {
            PrestigeEffect::StartingPoints { amount }
                if state.prestige_upgrade_level(def.id) > 0 =>
            {
                Some(amount)
            }
            _ => None,
        }
    });
    state.points = head_start.unwrap_or(INITIAL_POINTS);

    state.owned_upgrades.clear();
    state.inventory.clear();
    state.active_buffs.clear();

    state.prestige_count += 1;
    state.current_prestige_requirement = prestige_requirement(state.prestige_count);

    tracing::debug!(
        tokens_earned,
        prestige_count = state.prestige_count,
        new_requirement = state.current_prestige_requirement,
        "prestige completed"
    );

    Ok(vec![GameEvent::PrestigeSucceeded {
        tokens_earned,
        new_requirement: state.current_prestige_requirement,
    }])
}

/// Buys one level of a prestige upgrade with legacy tokens.
pub fn purchase_prestige_upgrade(
    state: &mut GameState,
    id: PrestigeUpgradeId,
) -> GameResult<Vec<GameEvent>> {
    let def = get_prestige_upgrade(id).ok_or(Rejection::UnknownPrestigeUpgrade(id))?;

    let level = state.prestige_upgrade_level(id);
    if let Some(max_level) = def.max_level {
        if level >= max_level {
            return Err(Rejection::MaxLevelReached { id, max_level });
        }
    }

    if state.legacy_tokens < def.token_cost {
        return Err(Rejection::InsufficientTokens {
            required: def.token_cost,
            available: state.legacy_tokens,
        });
    }

    state.legacy_tokens -= def.token_cost;
    let new_level = level + 1;
    state.owned_prestige_upgrades.insert(id, new_level);

    Ok(vec![GameEvent::PrestigeUpgradePurchased { id, new_level }])
}
