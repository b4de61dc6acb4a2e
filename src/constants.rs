// Game timing constants
pub const TICK_INTERVAL_MS: u64 = 1000;
pub const AUTOSAVE_INTERVAL_MS: u64 = 30_000;

// Resource constants
pub const INITIAL_POINTS: f64 = 0.0;
pub const BASE_POINTS_PER_CLICK: f64 = 1.0;

// Exponential purchase cost growth per unit already owned
pub const COST_GROWTH_RATE: f64 = 1.15;

// Drop chances (independent Bernoulli trials)
pub const ITEM_DROP_CHANCE_PER_TICK: f64 = 0.10;
pub const ITEM_DROP_CHANCE_PER_CLICK: f64 = 0.02;
pub const ARTIFICE_DROP_CHANCE_PER_TICK: f64 = 0.02;
pub const ARTIFICE_DROP_CHANCE_PER_CLICK: f64 = 0.005;

// Prestige system constants
pub const PRESTIGE_BASE_REQUIREMENT: f64 = 1_000_000_000_000.0; // 1 trillion points
pub const PRESTIGE_REQUIREMENT_FACTOR: f64 = 2.0;
pub const LEGACY_TOKEN_POINTS_DIVISOR: f64 = 1_000_000_000.0;
pub const HEAD_START_POINTS: f64 = 1_000.0;

// Per-level scaling for the prestige upgrades that sit outside the
// PPS/PPC boost pipeline (drop-rate and cost-reduction effects)
pub const ARTIFICE_CHANCE_BONUS_PER_LEVEL: f64 = 0.10;
pub const UPGRADE_COST_REDUCTION_PER_LEVEL: f64 = 0.02;

// Save system constants
pub const SAVE_GAME_KEY: &str = "clickforge_save";
pub const SAVE_VERSION: u32 = 2;
pub const MAX_OFFLINE_SECONDS: i64 = 2 * 60 * 60; // 2 hours in seconds
