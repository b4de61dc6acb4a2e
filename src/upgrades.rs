//! Static catalog of passive point-generating upgrades.
//!
//! Each upgrade produces a fixed PPS per unit owned and has an
//! exponentially-scaling purchase cost (see [`crate::cost`]).

use serde::{Deserialize, Serialize};

/// Unique identifier for each upgrade type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeId {
    BasicClicker,
    AutoHarvester,
    PointSynthesizer,
    NeuralNetwork,
    QuantumComputer,
    RealityBender,
    CosmicForge,
    ChronitonField,
    SingularityEngine,
}

/// Immutable definition of a purchasable upgrade.
#[derive(Debug, Clone)]
pub struct UpgradeDefinition {
    pub id: UpgradeId,
    pub name: &'static str,
    pub description: &'static str,
    pub base_cost: f64,
    pub pps_per_unit: f64,
}

/// All upgrade definitions in ascending cost order.
pub const ALL_UPGRADES: &[UpgradeDefinition] = &[
    UpgradeDefinition {
        id: UpgradeId::BasicClicker,
        name: "Basic Clicker",
        description: "A simple script that clicks for you. Every little bit helps!",
        base_cost: 10.0,
        pps_per_unit: 0.1,
    },
    UpgradeDefinition {
        id: UpgradeId::AutoHarvester,
        name: "Auto Harvester",
        description: "Automatically gathers small amounts of points.",
        base_cost: 100.0,
        pps_per_unit: 1.0,
    },
    UpgradeDefinition {
        id: UpgradeId::PointSynthesizer,
        name: "Point Synthesizer",
        description: "Generates points at a steady rate through advanced technology.",
        base_cost: 1_000.0,
        pps_per_unit: 8.0,
    },
    UpgradeDefinition {
        id: UpgradeId::NeuralNetwork,
        name: "Neural Network",
        description: "A complex AI that optimizes point generation strategies.",
        base_cost: 10_000.0,
        pps_per_unit: 47.0,
    },
    UpgradeDefinition {
        id: UpgradeId::QuantumComputer,
        name: "Quantum Computer",
        description: "Performs calculations at unimaginable speeds to create points.",
        base_cost: 120_000.0,
        pps_per_unit: 260.0,
    },
    UpgradeDefinition {
        id: UpgradeId::RealityBender,
        name: "Reality Bender",
        description: "Manipulates the fabric of spacetime to will points into existence.",
        base_cost: 1_500_000.0,
        pps_per_unit: 1_400.0,
    },
    UpgradeDefinition {
        id: UpgradeId::CosmicForge,
        name: "Cosmic Forge",
        description: "Harnesses stellar energy to materialize vast quantities of points.",
        base_cost: 25_000_000.0,
        pps_per_unit: 7_500.0,
    },
    UpgradeDefinition {
        id: UpgradeId::ChronitonField,
        name: "Chroniton Field",
        description: "Bends time itself to accelerate point accumulation across dimensions.",
        base_cost: 300_000_000.0,
        pps_per_unit: 50_000.0,
    },
    UpgradeDefinition {
        id: UpgradeId::SingularityEngine,
        name: "Singularity Engine",
        description: "Taps into a micro-singularity for near-infinite point generation.",
        base_cost: 5_000_000_000.0,
        pps_per_unit: 300_000.0,
    },
];

/// Looks up an upgrade definition by id.
pub fn get_upgrade(id: UpgradeId) -> Option<&'static UpgradeDefinition> {
    ALL_UPGRADES.iter().find(|def| def.id == id)
}
