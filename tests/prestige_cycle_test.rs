//! Integration test: Complete prestige cycle
//!
//! Tests the full flow: fresh state → accumulate points → prestige →
//! verify reset → spend legacy tokens → prestige again with bonuses.

use clickforge::constants::{HEAD_START_POINTS, PRESTIGE_BASE_REQUIREMENT};
use clickforge::error::Rejection;
use clickforge::events::GameEvent;
use clickforge::game_logic::{purchase_upgrade, PurchaseRequest};
use clickforge::prestige::{
    can_prestige, perform_prestige, prestige_requirement, purchase_prestige_upgrade,
    PrestigeUpgradeId,
};
use clickforge::upgrades::UpgradeId;
use clickforge::GameState;

#[test]
fn test_complete_prestige_cycle_first_prestige() {
    let mut state = GameState::new(0);

    // Verify initial state
    assert_eq!(state.prestige_count, 0);
    assert_eq!(state.legacy_tokens, 0);
    assert_eq!(state.current_prestige_requirement, PRESTIGE_BASE_REQUIREMENT);
    assert!(!can_prestige(&state));

    // Below the requirement the reset is rejected and nothing changes.
    state.points = PRESTIGE_BASE_REQUIREMENT - 1.0;
    let err = perform_prestige(&mut state).unwrap_err();
    assert!(matches!(err, Rejection::PrestigeNotReady { .. }));
    assert_eq!(state.prestige_count, 0);
    assert_eq!(state.points, PRESTIGE_BASE_REQUIREMENT - 1.0);

    // Build up a mid-run footprint so the reset has something to clear.
    state.points = 1e12;
    purchase_upgrade(
        &mut state,
        UpgradeId::AutoHarvester,
        PurchaseRequest::Count(25),
        0,
    )
    .unwrap();
    state.points = 1e12;
    assert!(can_prestige(&state));

    let events = perform_prestige(&mut state).unwrap();

    // floor(sqrt(1e12 / 1e9)) = floor(31.62...) = 31 tokens.
    assert!(events.contains(&GameEvent::PrestigeSucceeded {
        tokens_earned: 31,
        new_requirement: prestige_requirement(1),
    }));
    assert_eq!(state.legacy_tokens, 31);
    assert_eq!(state.prestige_count, 1);
    assert_eq!(
        state.current_prestige_requirement,
        2.0 * PRESTIGE_BASE_REQUIREMENT
    );

    // Run-scoped progress is wiped.
    assert_eq!(state.points, 0.0);
    assert!(state.owned_upgrades.is_empty());
    assert!(state.inventory.is_empty());
    assert!(state.active_buffs.is_empty());
}

#[test]
fn test_tokens_buy_upgrades_that_shape_the_next_run() {
    let mut state = GameState::new(0);
    state.points = 1e12;
    perform_prestige(&mut state).unwrap();
    assert_eq!(state.legacy_tokens, 31);

    // Two levels of Legacy Power at 5 tokens each.
    purchase_prestige_upgrade(&mut state, PrestigeUpgradeId::LegacyPower).unwrap();
    let events = purchase_prestige_upgrade(&mut state, PrestigeUpgradeId::LegacyPower).unwrap();
    assert!(events.contains(&GameEvent::PrestigeUpgradePurchased {
        id: PrestigeUpgradeId::LegacyPower,
        new_level: 2,
    }));
    assert_eq!(state.legacy_tokens, 21);

    // Head Start at 10 tokens.
    purchase_prestige_upgrade(&mut state, PrestigeUpgradeId::HeadStart).unwrap();
    assert_eq!(state.legacy_tokens, 11);

    // The PPS boost applies immediately to a rebuilt run.
    state.owned_upgrades.insert(UpgradeId::AutoHarvester, 10);
    let boosted = state.points_per_second(0);
    assert!((boosted - 10.0 * 1.2).abs() < 1e-9);

    // The next prestige grants starting points instead of zero, keeps
    // prestige upgrades, and doubles the requirement again.
    state.points = state.current_prestige_requirement;
    perform_prestige(&mut state).unwrap();
    assert_eq!(state.points, HEAD_START_POINTS);
    assert_eq!(state.prestige_count, 2);
    assert_eq!(state.current_prestige_requirement, prestige_requirement(2));
    assert_eq!(
        state.prestige_upgrade_level(PrestigeUpgradeId::LegacyPower),
        2
    );
}

#[test]
fn test_prestige_upgrade_purchases_enforce_tokens_and_caps() {
    let mut state = GameState::new(0);

    // No tokens: rejected without touching the level.
    let err = purchase_prestige_upgrade(&mut state, PrestigeUpgradeId::LegacyPower).unwrap_err();
    assert!(matches!(err, Rejection::InsufficientTokens { .. }));
    assert_eq!(state.prestige_upgrade_level(PrestigeUpgradeId::LegacyPower), 0);

    // Artifice Attunement caps at level 3.
    state.legacy_tokens = 1_000;
    for _ in 0..3 {
        purchase_prestige_upgrade(&mut state, PrestigeUpgradeId::ArtificeAttunement).unwrap();
    }
    let err =
        purchase_prestige_upgrade(&mut state, PrestigeUpgradeId::ArtificeAttunement).unwrap_err();
    assert!(matches!(err, Rejection::MaxLevelReached { .. }));
    assert_eq!(
        state.prestige_upgrade_level(PrestigeUpgradeId::ArtificeAttunement),
        3
    );
}
