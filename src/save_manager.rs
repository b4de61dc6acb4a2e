//! Save/load of the progression state plus offline catch-up.
//!
//! The state is serialized to a versioned JSON record and handed to an
//! abstract key-value [`SaveStore`]; [`FileStore`] is the on-disk
//! implementation. Loading never fails: a missing, corrupt, or
//! incompatible record falls back to a fresh state with a logged
//! warning. Missing fields in an older record load as fresh-state
//! defaults. Active buffs are deliberately absent from the record — a
//! restored session always starts with an empty ledger.

use crate::achievements::AchievementId;
use crate::artifices::ArtificeId;
use crate::constants::{MAX_OFFLINE_SECONDS, PRESTIGE_BASE_REQUIREMENT, SAVE_GAME_KEY, SAVE_VERSION};
use crate::events::GameEvent;
use crate::game_state::GameState;
use crate::items::ItemId;
use crate::modifiers;
use crate::prestige::{prestige_requirement, PrestigeUpgradeId};
use crate::upgrades::UpgradeId;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Oldest record version that can still be loaded. Bump only on a
/// breaking change to an existing field's meaning; added fields are
/// covered by `#[serde(default)]`.
const MIN_COMPATIBLE_VERSION: u32 = 1;

/// Versioned JSON-serializable snapshot of everything that survives a
/// session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveRecord {
    pub version: u32,
    pub points: f64,
    pub legacy_tokens: u64,
    pub total_manual_clicks: u64,
    pub owned_upgrades: HashMap<UpgradeId, u64>,
    pub inventory: HashMap<ItemId, u32>,
    pub acquired_artifices: HashMap<ArtificeId, i64>,
    pub acquired_achievements: HashMap<AchievementId, i64>,
    pub owned_prestige_upgrades: HashMap<PrestigeUpgradeId, u32>,
    pub prestige_count: u32,
    pub current_prestige_requirement: f64,
    /// Epoch millis of the save that produced this record.
    pub last_save_timestamp: i64,
}

impl Default for SaveRecord {
    fn default() -> Self {
        Self {
            version: SAVE_VERSION,
            points: 0.0,
            legacy_tokens: 0,
            total_manual_clicks: 0,
            owned_upgrades: HashMap::new(),
            inventory: HashMap::new(),
            acquired_artifices: HashMap::new(),
            acquired_achievements: HashMap::new(),
            owned_prestige_upgrades: HashMap::new(),
            prestige_count: 0,
            current_prestige_requirement: PRESTIGE_BASE_REQUIREMENT,
            last_save_timestamp: 0,
        }
    }
}

impl SaveRecord {
    /// Captures the persistent slice of the state. Buffs are excluded.
    pub fn from_state(state: &GameState, now_ms: i64) -> Self {
        Self {
            version: SAVE_VERSION,
            points: state.points,
            legacy_tokens: state.legacy_tokens,
            total_manual_clicks: state.total_manual_clicks,
            owned_upgrades: state.owned_upgrades.clone(),
            inventory: state.inventory.clone(),
            acquired_artifices: state.acquired_artifices.clone(),
            acquired_achievements: state.acquired_achievements.clone(),
            owned_prestige_upgrades: state.owned_prestige_upgrades.clone(),
            prestige_count: state.prestige_count,
            current_prestige_requirement: state.current_prestige_requirement,
            last_save_timestamp: now_ms,
        }
    }

    /// Rebuilds a state from the record. The prestige requirement is
    /// recomputed from the prestige count so the cached value can never
    /// drift from its defining formula.
    pub fn into_state(self) -> GameState {
        let requirement = prestige_requirement(self.prestige_count);
        if (requirement - self.current_prestige_requirement).abs() > 1e-6 {
            tracing::warn!(
                stored = self.current_prestige_requirement,
                recomputed = requirement,
                "prestige requirement in save did not match formula; using recomputed value"
            );
        }

        let mut state = GameState::new(self.last_save_timestamp);
        state.points = self.points.max(0.0);
        state.legacy_tokens = self.legacy_tokens;
        state.total_manual_clicks = self.total_manual_clicks;
        state.owned_upgrades = self.owned_upgrades;
        state.inventory = self.inventory;
        state.acquired_artifices = self.acquired_artifices;
        state.acquired_achievements = self.acquired_achievements;
        state.owned_prestige_upgrades = self.owned_prestige_upgrades;
        state.prestige_count = self.prestige_count;
        state.current_prestige_requirement = requirement;
        state
    }
}

/// Abstract key-value persistence medium.
pub trait SaveStore {
    /// Returns the stored value for `key`, or `None` if absent.
    fn load(&self, key: &str) -> io::Result<Option<String>>;
    fn save(&self, key: &str, value: &str) -> io::Result<()>;
}

/// On-disk store: one JSON file per key under the platform config dir.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "clickforge").ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;
        Ok(Self {
            dir: project_dirs.config_dir().to_path_buf(),
        })
    }

    /// Store rooted at an explicit directory (used by tests).
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SaveStore for FileStore {
    fn load(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn save(&self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)
    }
}

/// Summary of offline catch-up applied during a load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OfflineReport {
    /// Seconds credited (already capped).
    pub elapsed_seconds: i64,
    pub points_earned: f64,
    /// True when the real elapsed time exceeded the cap.
    pub capped: bool,
}

/// Credits passive earnings for time spent away, capped at
/// [`MAX_OFFLINE_SECONDS`]. PPS is computed from the loaded state,
/// which carries no buffs.
pub fn apply_offline_catchup(state: &mut GameState, now_ms: i64) -> OfflineReport {
    let real_elapsed_seconds = ((now_ms - state.last_save_time) / 1000).max(0);
    let elapsed_seconds = real_elapsed_seconds.min(MAX_OFFLINE_SECONDS);

    let pps = modifiers::points_per_second(state, now_ms);
    let points_earned = (elapsed_seconds as f64 * pps).floor();
    state.points += points_earned;

    OfflineReport {
        elapsed_seconds,
        points_earned,
        capped: real_elapsed_seconds > MAX_OFFLINE_SECONDS,
    }
}

/// Serializes/deserializes the progression state through a [`SaveStore`].
pub struct SaveManager<S: SaveStore> {
    store: S,
}

impl SaveManager<FileStore> {
    /// Manager over the default on-disk store.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            store: FileStore::new()?,
        })
    }
}

impl<S: SaveStore> SaveManager<S> {
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Saves the current state. On success the state's save timestamp
    /// is advanced; on failure the caller logs and retries on the next
    /// autosave cycle — in-memory state is unaffected either way.
    pub fn save(&self, state: &mut GameState, now_ms: i64) -> io::Result<()> {
        let record = SaveRecord::from_state(state, now_ms);
        let json = serde_json::to_string(&record)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.store.save(SAVE_GAME_KEY, &json)?;
        state.last_save_time = now_ms;
        Ok(())
    }

    /// Restores the saved state, applying offline catch-up. Falls back
    /// to a fresh state on any failure; never returns an error.
    pub fn load(&self, now_ms: i64) -> (GameState, OfflineReport, Vec<GameEvent>) {
        let record = match self.store.load(SAVE_GAME_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<SaveRecord>(&json) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(error = %e, "save record is corrupt; starting fresh");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "could not read save; starting fresh");
                None
            }
        };

        let record = record.filter(|r| {
            let compatible = (MIN_COMPATIBLE_VERSION..=SAVE_VERSION).contains(&r.version);
            if !compatible {
                tracing::warn!(
                    version = r.version,
                    supported = SAVE_VERSION,
                    "save record version is not supported; starting fresh"
                );
            }
            compatible
        });

        match record {
            Some(record) => {
                let mut state = record.into_state();
                let report = apply_offline_catchup(&mut state, now_ms);
                let events = vec![GameEvent::GameLoaded {
                    offline_seconds: report.elapsed_seconds,
                    points_earned: report.points_earned,
                }];
                (state, report, events)
            }
            None => {
                let state = GameState::new(now_ms);
                let events = vec![GameEvent::GameLoaded {
                    offline_seconds: 0,
                    points_earned: 0.0,
                }];
                (state, OfflineReport::default(), events)
            }
        }
    }
}
