//! End-to-end progression scenarios against the public engine API.

use clicker_progression::progression::{GameConfig, ProgressionEngine, ProgressionError};

fn engine_with(total: f64) -> ProgressionEngine {
    let config = GameConfig {
        starting_total: total,
        ..GameConfig::default()
    };
    ProgressionEngine::new(&config).unwrap()
}

#[test]
fn ten_actions_reach_ten_and_unlock_first_only() {
    let mut e = engine_with(0.0);
    let mut unlocked = Vec::new();
    for _ in 0..10 {
        let report = e.perform_action();
        unlocked.extend(report.unlocked.into_iter().map(|a| a.id));
    }

    assert_eq!(e.ledger().total(), 10.0);
    assert_eq!(unlocked, vec!["first".to_string()]);

    let snap = e.snapshot();
    assert!(snap.achievement("first").unwrap().unlocked);
    assert!(!snap.achievement("hundred").unwrap().unlocked);
    assert!((snap.achievement("hundred").unwrap().progress_ratio - 0.1).abs() < 1e-9);
}

#[test]
fn cursor_price_rises_after_purchase() {
    let mut e = engine_with(10.0);
    assert_eq!(e.price_of("cursor").unwrap(), 10.0);

    let report = e.attempt_purchase("cursor").unwrap();
    assert_eq!(report.purchase.price_paid, 10.0);
    assert_eq!(report.purchase.yield_per_action, 2.0);
    assert_eq!(e.ledger().total(), 0.0);
    assert_eq!(e.price_of("cursor").unwrap(), 11.0);
}

#[test]
fn insufficient_funds_leaves_everything_untouched() {
    let mut e = engine_with(5.0);
    let before = e.snapshot();

    let err = e.attempt_purchase("cursor").unwrap_err();
    assert_eq!(err, ProgressionError::InsufficientFunds { price: 10.0, shortfall: 5.0 });
    assert!(err.is_player_facing());
    assert_eq!(e.ledger().total(), 5.0);
    assert_eq!(e.snapshot(), before);
}

#[test]
fn master_unlocks_once_after_five_mixed_purchases() {
    let mut e = engine_with(5_000.0);
    let order = ["hand", "cursor", "robot", "cursor", "factory", "hand", "cursor"];
    let mut master_unlocks = 0;
    let mut unlocked_at = None;

    for (n, id) in order.iter().enumerate() {
        let report = e.attempt_purchase(id).unwrap();
        let hits = report.unlocked.iter().filter(|a| a.id == "master").count();
        if hits > 0 {
            unlocked_at = Some(n + 1);
        }
        master_unlocks += hits;
    }

    assert_eq!(master_unlocks, 1);
    assert_eq!(unlocked_at, Some(5));
    assert_eq!(e.snapshot().total_upgrades_owned, 7);
}

#[test]
fn spending_below_a_threshold_does_not_relock() {
    let mut e = engine_with(100.0);
    let report = e.perform_action();
    let ids: Vec<&str> = report.unlocked.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["first", "hundred"]);

    e.attempt_purchase("hand").unwrap();
    assert!(e.ledger().total() < 100.0);
    assert!(e.snapshot().achievement("hundred").unwrap().unlocked);
}

#[test]
fn custom_config_from_json_drives_the_engine() {
    let json = r#"{
        "startingTotal": 3,
        "upgrades": [
            {"id": "pick", "displayName": "Pick", "description": "", "baseCost": 4, "yieldDelta": 3}
        ],
        "achievements": [
            {"id": "rich", "displayName": "Rich", "description": "", "threshold": 5, "kind": "TOTAL_CURRENCY"}
        ]
    }"#;
    let config = GameConfig::from_json(json).unwrap();
    let mut e = ProgressionEngine::new(&config).unwrap();

    let report = e.perform_action();
    assert_eq!(report.total, 4.0);
    assert!(report.unlocked.is_empty());

    e.attempt_purchase("pick").unwrap();
    let report = e.perform_action();
    assert_eq!(report.delta, 4.0);
    assert!(report.unlocked.is_empty());
    let report = e.perform_action();
    assert_eq!(report.total, 8.0);
    assert_eq!(report.unlocked.len(), 1);
}
