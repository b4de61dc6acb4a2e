//! The modifier pipeline.
//!
//! Folds owned upgrades, unexpired buffs, acquired artifices, and
//! prestige upgrade levels into the two derived scalars the rest of the
//! game reads: points per second and points per click. Also computes
//! effective purchase costs and the artifice drop-rate multiplier.
//!
//! Every step is multiplicative, so the order within a step is
//! irrelevant. Buff expiry is re-checked on every read; nothing here is
//! cached.

use crate::artifices::{get_artifice, ArtificeEffect};
use crate::buffs::BuffKind;
use crate::constants::BASE_POINTS_PER_CLICK;
use crate::game_state::GameState;
use crate::prestige::{get_prestige_upgrade, PrestigeEffect};
use crate::upgrades::{get_upgrade, UpgradeDefinition, UpgradeId};

/// Points accrued per second from all owned upgrades and modifiers.
pub fn points_per_second(state: &GameState, now_ms: i64) -> f64 {
    // 1. Per-upgrade base PPS, with upgrade-scoped artifice effects
    //    applied before multiplying by quantity.
    let mut pps: f64 = state
        .owned_upgrades
        .iter()
        .filter_map(|(&id, &quantity)| {
            let def = get_upgrade(id)?;
            let unit = def.pps_per_unit * upgrade_pps_multiplier(state, id);
            Some(unit * quantity as f64)
        })
        .sum();

    // 2. Timed rate buffs.
    for buff in state.active_buffs.active(now_ms) {
        match buff.kind {
            BuffKind::PpsMultiplier => pps *= buff.multiplier,
        }
    }

    // 3. Globally-scoped artifices.
    for (&artifice_id, _) in &state.acquired_artifices {
        if let Some(def) = get_artifice(artifice_id) {
            if let ArtificeEffect::GlobalPpsMultiplier { value } = def.effect {
                pps *= value;
            }
        }
    }

    // 4. Prestige upgrades. Each qualifying upgrade contributes its own
    //    (1 + per_level * level) factor; factors compound across
    //    different upgrades rather than summing.
    for (&upgrade_id, &level) in &state.owned_prestige_upgrades {
        if let Some(def) = get_prestige_upgrade(upgrade_id) {
            if let PrestigeEffect::GlobalPpsBoost { per_level } = def.effect {
                pps *= 1.0 + per_level * level as f64;
            }
        }
    }

    pps
}

/// Points awarded per manual click.
pub fn points_per_click(state: &GameState) -> f64 {
    let mut ppc = BASE_POINTS_PER_CLICK;

    for (&artifice_id, _) in &state.acquired_artifices {
        if let Some(def) = get_artifice(artifice_id) {
            if let ArtificeEffect::GlobalPpcMultiplier { value } = def.effect {
                ppc *= value;
            }
        }
    }

    for (&upgrade_id, &level) in &state.owned_prestige_upgrades {
        if let Some(def) = get_prestige_upgrade(upgrade_id) {
            if let PrestigeEffect::GlobalPpcBoost { per_level } = def.effect {
                ppc *= 1.0 + per_level * level as f64;
            }
        }
    }

    ppc
}

/// Product of artifice PPS multipliers scoped to one upgrade type.
fn upgrade_pps_multiplier(state: &GameState, upgrade_id: UpgradeId) -> f64 {
    let mut multiplier = 1.0;
    for (&artifice_id, _) in &state.acquired_artifices {
        if let Some(def) = get_artifice(artifice_id) {
            if let ArtificeEffect::UpgradeSpecificPpsMultiplier {
                upgrade_id: target,
                value,
            } = def.effect
            {
                if target == upgrade_id {
                    multiplier *= value;
                }
            }
        }
    }
    multiplier
}

/// Catalog base cost with every applicable permanent cost modifier
/// folded in. This is the `base` the cost algebra operates on.
pub fn effective_base_cost(def: &UpgradeDefinition, state: &GameState) -> f64 {
    let mut cost = def.base_cost;

    for (&artifice_id, _) in &state.acquired_artifices {
        if let Some(artifice) = get_artifice(artifice_id) {
            match artifice.effect {
                ArtificeEffect::AllUpgradesCostMultiplier { value } => cost *= value,
                ArtificeEffect::UpgradeSpecificCostMultiplier { upgrade_id, value }
                    if upgrade_id == def.id =>
                {
                    cost *= value
                }
                _ => {}
            }
        }
    }

    for (&upgrade_id, &level) in &state.owned_prestige_upgrades {
        if let Some(prestige_def) = get_prestige_upgrade(upgrade_id) {
            if let PrestigeEffect::UpgradeCostReduction { per_level } = prestige_def.effect {
                cost *= (1.0 - per_level * level as f64).max(0.0);
            }
        }
    }

    cost
}

/// Multiplier applied to artifice drop chances from prestige upgrades.
pub fn artifice_drop_multiplier(state: &GameState) -> f64 {
    let mut multiplier = 1.0;
    for (&upgrade_id, &level) in &state.owned_prestige_upgrades {
        if let Some(def) = get_prestige_upgrade(upgrade_id) {
            if let PrestigeEffect::ArtificeChanceBoost { per_level } = def.effect {
                multiplier *= 1.0 + per_level * level as f64;
            }
        }
    }
    multiplier
}
