//! Static catalog of artifices — permanent, uniquely-owned modifiers.
//!
//! Artifices drop randomly (at most one copy of each) and apply a
//! permanent effect: a global or upgrade-specific PPS multiplier, a
//! click-power multiplier, or a purchase-cost multiplier.

use crate::upgrades::UpgradeId;
use serde::{Deserialize, Serialize};

/// Unique identifier for each artifice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtificeId {
    EternalGrowthGem,
    ClickPowerCrystal,
    HarvesterEfficiencyCore,
    GoldenContract,
    QuantumDiscountModule,
}

/// The permanent effect an artifice grants once acquired.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArtificeEffect {
    GlobalPpsMultiplier { value: f64 },
    GlobalPpcMultiplier { value: f64 },
    UpgradeSpecificPpsMultiplier { upgrade_id: UpgradeId, value: f64 },
    AllUpgradesCostMultiplier { value: f64 },
    UpgradeSpecificCostMultiplier { upgrade_id: UpgradeId, value: f64 },
}

/// Immutable definition of an artifice.
#[derive(Debug, Clone)]
pub struct ArtificeDefinition {
    pub id: ArtificeId,
    pub name: &'static str,
    pub description: &'static str,
    pub effect_description: &'static str,
    pub effect: ArtificeEffect,
}

/// All artifice definitions.
pub const ALL_ARTIFICES: &[ArtificeDefinition] = &[
    ArtificeDefinition {
        id: ArtificeId::EternalGrowthGem,
        name: "Eternal Growth Gem",
        description: "A pulsating gem that hums with untapped potential.",
        effect_description: "+5% to all Points Per Second (PPS) permanently.",
        effect: ArtificeEffect::GlobalPpsMultiplier { value: 1.05 },
    },
    ArtificeDefinition {
        id: ArtificeId::ClickPowerCrystal,
        name: "Crystal of a Thousand Clicks",
        description: "Empowers each of your manual clicks.",
        effect_description: "+10% to Points Per Click permanently.",
        effect: ArtificeEffect::GlobalPpcMultiplier { value: 1.10 },
    },
    ArtificeDefinition {
        id: ArtificeId::HarvesterEfficiencyCore,
        name: "Efficiency Core (Auto Harvester)",
        description: "Boosts the effectiveness of your Auto Harvesters.",
        effect_description: "+10% PPS from Auto Harvesters permanently.",
        effect: ArtificeEffect::UpgradeSpecificPpsMultiplier {
            upgrade_id: UpgradeId::AutoHarvester,
            value: 1.10,
        },
    },
    ArtificeDefinition {
        id: ArtificeId::GoldenContract,
        name: "Golden Contract",
        description: "Makes acquiring new upgrades slightly more affordable.",
        effect_description: "-5% to base cost for all upgrades permanently.",
        effect: ArtificeEffect::AllUpgradesCostMultiplier { value: 0.95 },
    },
    ArtificeDefinition {
        id: ArtificeId::QuantumDiscountModule,
        name: "Discount Module (Quantum Computer)",
        description: "Reduces the cost of Quantum Computers.",
        effect_description: "-10% to base cost for Quantum Computers permanently.",
        effect: ArtificeEffect::UpgradeSpecificCostMultiplier {
            upgrade_id: UpgradeId::QuantumComputer,
            value: 0.90,
        },
    },
];

/// Looks up an artifice definition by id.
pub fn get_artifice(id: ArtificeId) -> Option<&'static ArtificeDefinition> {
    ALL_ARTIFICES.iter().find(|def| def.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_artifice() {
        let def = get_artifice(ArtificeId::GoldenContract).unwrap();
        assert_eq!(
            def.effect,
            ArtificeEffect::AllUpgradesCostMultiplier { value: 0.95 }
        );
    }

    #[test]
    fn test_cost_multipliers_are_discounts() {
        for def in ALL_ARTIFICES {
            match def.effect {
                ArtificeEffect::AllUpgradesCostMultiplier { value }
                | ArtificeEffect::UpgradeSpecificCostMultiplier { value, .. } => {
                    assert!(value > 0.0 && value < 1.0, "{:?} is not a discount", def.id);
                }
                ArtificeEffect::GlobalPpsMultiplier { value }
                | ArtificeEffect::GlobalPpcMultiplier { value }
                | ArtificeEffect::UpgradeSpecificPpsMultiplier { value, .. } => {
                    assert!(value > 1.0, "{:?} is not a boost", def.id);
                }
            }
        }
    }

    #[test]
    fn test_upgrade_scoped_effects_reference_catalog_entries() {
        for def in ALL_ARTIFICES {
            match def.effect {
                ArtificeEffect::UpgradeSpecificPpsMultiplier { upgrade_id, .. }
                | ArtificeEffect::UpgradeSpecificCostMultiplier { upgrade_id, .. } => {
                    assert!(crate::upgrades::get_upgrade(upgrade_id).is_some());
                }
                _ => {}
            }
        }
    }
}
