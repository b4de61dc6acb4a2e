//! Buff ledger — the list of currently-active timed effects.
//!
//! At most one buff per effect kind is active at a time. Re-using the
//! same item extends the existing buff's duration; using a different
//! item of the same kind replaces it. Buffs are ephemeral: they are
//! never saved and the ledger always starts empty after a load.

use crate::items::ItemId;

/// The closed set of timed effect kinds a buff can carry.
///
/// The ledger deduplicates by kind, so every timed [`crate::items::ItemEffect`]
/// variant must map to exactly one kind here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuffKind {
    PpsMultiplier,
}

/// A live timed effect granted by consuming an item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveBuff {
    pub item_id: ItemId,
    pub kind: BuffKind,
    pub multiplier: f64,
    /// Absolute expiry time in epoch milliseconds.
    pub expires_at: i64,
}

impl ActiveBuff {
    /// A buff is active strictly before its expiry instant.
    pub fn is_active(&self, now_ms: i64) -> bool {
        now_ms < self.expires_at
    }
}

/// Unordered collection of active buffs with stacking/refresh policy.
#[derive(Debug, Clone, Default)]
pub struct BuffLedger {
    buffs: Vec<ActiveBuff>,
}

impl BuffLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a timed effect from an item.
    ///
    /// If an unexpired buff from the same item and kind exists, its
    /// duration is extended from the later of now/current expiry and its
    /// value replaced (duration stacks, magnitude does not). Otherwise
    /// any unexpired buff of the same kind from a different item is
    /// evicted and a fresh buff inserted.
    ///
    /// Returns the expiry timestamp of the resulting buff.
    pub fn apply_timed_effect(
        &mut self,
        item_id: ItemId,
        kind: BuffKind,
        multiplier: f64,
        duration_seconds: u64,
        now_ms: i64,
    ) -> i64 {
        let duration_ms = duration_seconds as i64 * 1000;

        if let Some(existing) = self
            .buffs
            .iter_mut()
            .find(|b| b.item_id == item_id && b.kind == kind && b.is_active(now_ms))
        {
            existing.expires_at = existing.expires_at.max(now_ms) + duration_ms;
            existing.multiplier = multiplier;
            return existing.expires_at;
        }

        // Only one buff per kind may be active; evict any rival entry.
        self.buffs
            .retain(|b| !(b.kind == kind && b.is_active(now_ms)));

        let expires_at = now_ms + duration_ms;
        self.buffs.push(ActiveBuff {
            item_id,
            kind,
            multiplier,
            expires_at,
        });
        expires_at
    }

    /// Removes every buff with `expires_at <= now` and returns them so
    /// the caller can emit expiry notifications.
    pub fn sweep_expired(&mut self, now_ms: i64) -> Vec<ActiveBuff> {
        let (expired, live): (Vec<_>, Vec<_>) =
            self.buffs.drain(..).partition(|b| !b.is_active(now_ms));
        self.buffs = live;
        expired
    }

    /// Iterates over the buffs that are active at `now_ms`.
    pub fn active(&self, now_ms: i64) -> impl Iterator<Item = &ActiveBuff> {
        self.buffs.iter().filter(move |b| b.is_active(now_ms))
    }

    pub fn clear(&mut self) {
        self.buffs.clear();
    }

    pub fn len(&self) -> usize {
        self.buffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffs.is_empty()
    }
}
