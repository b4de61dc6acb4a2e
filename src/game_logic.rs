//! Mutation operations on the progression state.
//!
//! Every player action and timer trigger funnels through one of these
//! functions. Each runs to completion against the aggregate, returns
//! the [`GameEvent`]s it produced (or a [`Rejection`] with the state
//! untouched), and finishes with an achievement pass. Side effects like
//! notifications and saving happen at the boundary, never in here.

use crate::achievements::check_achievements;
use crate::artifices::{ArtificeId, ALL_ARTIFICES};
use crate::buffs::BuffKind;
use crate::constants::{
    ARTIFICE_DROP_CHANCE_PER_CLICK, ARTIFICE_DROP_CHANCE_PER_TICK, ITEM_DROP_CHANCE_PER_CLICK,
    ITEM_DROP_CHANCE_PER_TICK,
};
use crate::cost::{bulk_cost, max_affordable, unit_cost, BulkPurchase};
use crate::error::{GameResult, Rejection};
use crate::events::GameEvent;
use crate::game_state::GameState;
use crate::items::{get_item, ItemEffect, ItemId, ALL_ITEMS};
use crate::modifiers;
use crate::upgrades::{get_upgrade, UpgradeId};
use rand::seq::SliceRandom;
use rand::Rng;

/// How many units a purchase asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseRequest {
    /// Buy exactly this many units (all or nothing).
    Count(u64),
    /// Buy as many units as the current points allow.
    MaxAffordable,
}

/// Handles a manual click: award PPC, count the click, roll drops.
pub fn click_action(state: &mut GameState, rng: &mut impl Rng, now_ms: i64) -> Vec<GameEvent> {
    state.points += modifiers::points_per_click(state);
    state.total_manual_clicks += 1;

    let mut events = Vec::new();
    if let Some(event) = try_drop_item(state, rng, ITEM_DROP_CHANCE_PER_CLICK) {
        events.push(event);
    }
    if let Some(event) = try_drop_artifice(state, rng, ARTIFICE_DROP_CHANCE_PER_CLICK, now_ms) {
        events.push(event);
    }
    events.extend(check_achievements(state, now_ms));
    events
}

/// Processes one fixed-interval tick: drop rolls, buff expiry sweep,
/// then passive accrual of one second's PPS.
pub fn game_tick(state: &mut GameState, rng: &mut impl Rng, now_ms: i64) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if let Some(event) = try_drop_item(state, rng, ITEM_DROP_CHANCE_PER_TICK) {
        events.push(event);
    }
    if let Some(event) = try_drop_artifice(state, rng, ARTIFICE_DROP_CHANCE_PER_TICK, now_ms) {
        events.push(event);
    }

    for expired in state.active_buffs.sweep_expired(now_ms) {
        events.push(GameEvent::BuffExpired {
            item_id: expired.item_id,
        });
    }

    state.points += modifiers::points_per_second(state, now_ms);

    events.extend(check_achievements(state, now_ms));
    events
}

/// Buys units of an upgrade, debiting points.
///
/// The effective base cost folds in every permanent cost modifier
/// before the exponential cost algebra runs.
pub fn purchase_upgrade(
    state: &mut GameState,
    id: UpgradeId,
    request: PurchaseRequest,
    now_ms: i64,
) -> GameResult<Vec<GameEvent>> {
    let def = get_upgrade(id).ok_or(Rejection::UnknownUpgrade(id))?;
    let owned = state.upgrade_quantity(id);
    let base = modifiers::effective_base_cost(def, state);

    let purchase = match request {
        PurchaseRequest::Count(count) => BulkPurchase {
            count,
            cost: bulk_cost(base, owned, count),
        },
        PurchaseRequest::MaxAffordable => max_affordable(base, owned, state.points),
    };

    if purchase.count == 0 || purchase.cost > state.points {
        let required = if purchase.count == 0 {
            unit_cost(base, owned)
        } else {
            purchase.cost
        };
        return Err(Rejection::InsufficientPoints {
            required,
            available: state.points,
        });
    }

    state.points -= purchase.cost;
    *state.owned_upgrades.entry(id).or_insert(0) += purchase.count;

    let mut events = vec![GameEvent::PurchaseSucceeded {
        upgrade_id: id,
        count: purchase.count,
        cost: purchase.cost,
    }];
    events.extend(check_achievements(state, now_ms));
    Ok(events)
}

/// Consumes one item from the inventory and applies its effect.
pub fn use_item(state: &mut GameState, id: ItemId, now_ms: i64) -> GameResult<Vec<GameEvent>> {
    let def = get_item(id).ok_or(Rejection::UnknownItem(id))?;

    match state.item_quantity(id) {
        0 => return Err(Rejection::ItemNotInInventory(id)),
        1 => {
            state.inventory.remove(&id);
        }
        quantity => {
            state.inventory.insert(id, quantity - 1);
        }
    }

    let mut events = Vec::new();
    match def.effect {
        ItemEffect::InstantPoints { value } => {
            state.points += value;
        }
        ItemEffect::RateMultiplier {
            value,
            duration_seconds,
        } => {
            let expires_at = state.active_buffs.apply_timed_effect(
                id,
                BuffKind::PpsMultiplier,
                value,
                duration_seconds,
                now_ms,
            );
            events.push(GameEvent::BuffActivated {
                item_id: id,
                expires_at,
            });
        }
    }

    events.extend(check_achievements(state, now_ms));
    Ok(events)
}

/// Adds an artifice to the collection. Idempotent: acquiring an owned
/// artifice is a no-op.
pub fn acquire_artifice(state: &mut GameState, id: ArtificeId, now_ms: i64) -> Vec<GameEvent> {
    if state.has_artifice(id) {
        return Vec::new();
    }
    state.acquired_artifices.insert(id, now_ms);

    let mut events = vec![GameEvent::ArtificeAcquired { artifice_id: id }];
    events.extend(check_achievements(state, now_ms));
    events
}

/// Wipes the session back to a fresh state. The caller must stop the
/// scheduler for the old state before installing the new one.
pub fn reset_game(now_ms: i64) -> (GameState, Vec<GameEvent>) {
    (GameState::new(now_ms), vec![GameEvent::GameReset])
}

/// Bernoulli item drop: on success a random catalog item enters the
/// inventory.
fn try_drop_item(state: &mut GameState, rng: &mut impl Rng, chance: f64) -> Option<GameEvent> {
    if rng.gen::<f64>() >= chance {
        return None;
    }

    let def = ALL_ITEMS.choose(rng)?;
    state.add_item(def.id, 1);
    Some(GameEvent::ItemAcquired {
        item_id: def.id,
        quantity: 1,
    })
}

/// Bernoulli artifice drop among artifices not yet owned. A no-op once
/// the collection is complete.
fn try_drop_artifice(
    state: &mut GameState,
    rng: &mut impl Rng,
    chance: f64,
    now_ms: i64,
) -> Option<GameEvent> {
    let boosted = (chance * modifiers::artifice_drop_multiplier(state)).min(1.0);
    if rng.gen::<f64>() >= boosted {
        return None;
    }

    let unowned: Vec<ArtificeId> = ALL_ARTIFICES
        .iter()
        .map(|def| def.id)
        .filter(|&id| !state.has_artifice(id))
        .collect();
    let &id = unowned.choose(rng)?;

    state.acquired_artifices.insert(id, now_ms);
    Some(GameEvent::ArtificeAcquired { artifice_id: id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::AchievementId;
    use crate::constants::PRESTIGE_BASE_REQUIREMENT;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_click_awards_ppc_and_counts() {
        let mut state = GameState::new(0);
        let mut rng = rng();

        click_action(&mut state, &mut rng, 0);
        assert_eq!(state.total_manual_clicks, 1);

        // 1 PPC plus the Baby Steps reward; a lucky artifice drop can
        // also unlock Artifice Collector on the same click.
        let mut expected = 1.0 + 5.0;
        if state.has_achievement(AchievementId::ArtificeCollector) {
            expected += 500.0;
        }
        assert_eq!(state.points, expected);
    }

    #[test]
    fn test_tick_accrues_pps() {
        let mut state = GameState::new(0);
        state.owned_upgrades.insert(UpgradeId::AutoHarvester, 5);
        let mut rng = rng();

        let points_before = state.points;
        game_tick(&mut state, &mut rng, 0);
        assert!(state.points >= points_before + 5.0);
    }

    #[test]
    fn test_tick_sweeps_expired_buffs() {
        let mut state = GameState::new(0);
        state.add_item(ItemId::MarketFrenzy, 1);
        use_item(&mut state, ItemId::MarketFrenzy, 0).unwrap();
        assert_eq!(state.active_buffs.len(), 1);

        let mut rng = rng();
        let events = game_tick(&mut state, &mut rng, 21_000);
        assert!(events.contains(&GameEvent::BuffExpired {
            item_id: ItemId::MarketFrenzy,
        }));
        assert!(state.active_buffs.is_empty());
    }

    #[test]
    fn test_purchase_fixed_count() {
        let mut state = GameState::new(0);
        state.points = 500.0;

        let events =
            purchase_upgrade(&mut state, UpgradeId::BasicClicker, PurchaseRequest::Count(2), 0)
                .unwrap();

        // 500 - (10 + 11.5), plus Point Novice unlocking at >= 100.
        assert!((state.points - 498.5).abs() < 1e-9);
        assert_eq!(state.upgrade_quantity(UpgradeId::BasicClicker), 2);
        assert!(matches!(
            events[0],
            GameEvent::PurchaseSucceeded {
                upgrade_id: UpgradeId::BasicClicker,
                count: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_purchase_max_affordable() {
        let mut state = GameState::new(0);
        state.points = 500.0;

        purchase_upgrade(
            &mut state,
            UpgradeId::AutoHarvester,
            PurchaseRequest::MaxAffordable,
            0,
        )
        .unwrap();

        // Budget 500 at base 100 affords 4 units (~499.34); First
        // Harvester then pays out 50.
        assert_eq!(state.upgrade_quantity(UpgradeId::AutoHarvester), 4);
        assert!((state.points - 50.6625).abs() < 1e-6);
    }

    #[test]
    fn test_purchase_insufficient_funds_is_a_no_op() {
        let mut state = GameState::new(0);
        state.points = 5.0;

        let err = purchase_upgrade(
            &mut state,
            UpgradeId::BasicClicker,
            PurchaseRequest::Count(1),
            0,
        )
        .unwrap_err();
        assert!(matches!(err, Rejection::InsufficientPoints { .. }));
        assert_eq!(state.points, 5.0);
        assert_eq!(state.upgrade_quantity(UpgradeId::BasicClicker), 0);
    }

    #[test]
    fn test_purchase_rejects_absurd_count() {
        let mut state = GameState::new(0);
        state.points = 5.0;

        // A count past i32 range costs infinity and must bounce off the
        // budget check rather than minting points.
        let err = purchase_upgrade(
            &mut state,
            UpgradeId::BasicClicker,
            PurchaseRequest::Count(1 << 31),
            0,
        )
        .unwrap_err();
        assert!(matches!(err, Rejection::InsufficientPoints { .. }));
        assert_eq!(state.points, 5.0);
        assert_eq!(state.upgrade_quantity(UpgradeId::BasicClicker), 0);
    }

    #[test]
    fn test_purchase_applies_cost_discounts() {
        let mut state = GameState::new(0);
        state.points = 100.0;
        state
            .acquired_artifices
            .insert(crate::artifices::ArtificeId::GoldenContract, 0);
        // Pre-grant the artifice achievement so the reward does not
        // obscure the cost arithmetic under test.
        state
            .acquired_achievements
            .insert(AchievementId::ArtificeCollector, 0);

        // 10 * 0.95 = 9.5 per unit.
        purchase_upgrade(&mut state, UpgradeId::BasicClicker, PurchaseRequest::Count(1), 0)
            .unwrap();
        assert!((state.points - 90.5).abs() < 1e-9);
    }

    #[test]
    fn test_use_item_instant_points() {
        let mut state = GameState::new(0);
        state.add_item(ItemId::QuickPoints, 2);

        use_item(&mut state, ItemId::QuickPoints, 0).unwrap();
        // 150 instant, plus Point Novice (+20) triggered by crossing 100.
        assert_eq!(state.points, 170.0);
        assert_eq!(state.item_quantity(ItemId::QuickPoints), 1);
    }

    #[test]
    fn test_use_item_removes_entry_at_zero() {
        let mut state = GameState::new(0);
        state.add_item(ItemId::QuickPoints, 1);

        use_item(&mut state, ItemId::QuickPoints, 0).unwrap();
        assert!(!state.inventory.contains_key(&ItemId::QuickPoints));

        let err = use_item(&mut state, ItemId::QuickPoints, 0).unwrap_err();
        assert_eq!(err, Rejection::ItemNotInInventory(ItemId::QuickPoints));
    }

    #[test]
    fn test_use_item_activates_buff() {
        let mut state = GameState::new(0);
        state.add_item(ItemId::PpsBoostCoffee, 1);

        let events = use_item(&mut state, ItemId::PpsBoostCoffee, 1_000).unwrap();
        assert!(events.contains(&GameEvent::BuffActivated {
            item_id: ItemId::PpsBoostCoffee,
            expires_at: 31_000,
        }));
        assert_eq!(state.active_buffs.len(), 1);
    }

    #[test]
    fn test_acquire_artifice_is_idempotent() {
        let mut state = GameState::new(0);

        let events = acquire_artifice(&mut state, ArtificeId::EternalGrowthGem, 10);
        assert!(events.contains(&GameEvent::ArtificeAcquired {
            artifice_id: ArtificeId::EternalGrowthGem,
        }));
        assert_eq!(state.acquired_artifices.len(), 1);

        let repeat = acquire_artifice(&mut state, ArtificeId::EternalGrowthGem, 20);
        assert!(repeat.is_empty());
        assert_eq!(
            state.acquired_artifices.get(&ArtificeId::EternalGrowthGem),
            Some(&10)
        );
    }

    #[test]
    fn test_artifice_drops_stop_when_collection_complete() {
        let mut state = GameState::new(0);
        for def in ALL_ARTIFICES {
            state.acquired_artifices.insert(def.id, 0);
        }
        let mut rng = rng();

        for _ in 0..1_000 {
            assert!(try_drop_artifice(&mut state, &mut rng, 1.0, 0).is_none());
        }
        assert_eq!(state.acquired_artifices.len(), ALL_ARTIFICES.len());
    }

    #[test]
    fn test_artifice_drops_only_yield_unowned() {
        let mut state = GameState::new(0);
        let mut rng = rng();

        // Drop at 100% chance until the collection completes; no
        // duplicates can appear because entries are keyed by id.
        let mut drops = 0;
        while state.acquired_artifices.len() < ALL_ARTIFICES.len() {
            if try_drop_artifice(&mut state, &mut rng, 1.0, 0).is_some() {
                drops += 1;
            }
        }
        assert_eq!(drops, ALL_ARTIFICES.len());
    }

    #[test]
    fn test_item_drop_rate_roughly_matches_chance() {
        let mut state = GameState::new(0);
        let mut rng = rng();

        let mut drops = 0;
        for _ in 0..10_000 {
            if try_drop_item(&mut state, &mut rng, 0.10).is_some() {
                drops += 1;
            }
        }
        // 10% of 10,000 trials; allow generous variance.
        assert!((700..=1_300).contains(&drops), "got {} drops", drops);
    }

    #[test]
    fn test_click_achievements_unlock_through_play() {
        let mut state = GameState::new(0);
        let mut rng = rng();

        for tick in 0..100 {
            click_action(&mut state, &mut rng, tick);
        }
        assert!(state.has_achievement(AchievementId::FirstClick));
        assert!(state.has_achievement(AchievementId::ClickEnthusiast));
        assert!(state.has_achievement(AchievementId::PointNovice));
    }

    #[test]
    fn test_reset_game_returns_fresh_state() {
        let mut state = GameState::new(0);
        state.points = PRESTIGE_BASE_REQUIREMENT;
        state.legacy_tokens = 99;

        let (fresh, events) = reset_game(777);
        assert_eq!(fresh.points, 0.0);
        assert_eq!(fresh.legacy_tokens, 0);
        assert_eq!(fresh.last_save_time, 777);
        assert_eq!(events, vec![GameEvent::GameReset]);
    }
}
