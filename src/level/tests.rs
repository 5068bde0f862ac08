//! Level domain: tests for the procedural layout.

use bevy::prelude::Vec2;

use super::{CoinTier, TileKind, build_level, stepped};
use crate::content::LevelDef;

// -----------------------------------------------------------------------------
// stepped tests
// -----------------------------------------------------------------------------

#[test]
fn test_stepped_excludes_end() {
    let values: Vec<f32> = stepped(0.0, 256.0, 64.0).collect();
    assert_eq!(values, vec![0.0, 64.0, 128.0, 192.0]);
}

#[test]
fn test_stepped_partial_last_step() {
    let values: Vec<f32> = stepped(256.0, 1250.0, 256.0).collect();
    assert_eq!(values, vec![256.0, 512.0, 768.0, 1024.0]);
}

#[test]
fn test_stepped_empty_when_start_past_end() {
    assert_eq!(stepped(500.0, 100.0, 64.0).count(), 0);
}

#[test]
fn test_stepped_non_positive_step_yields_nothing() {
    assert_eq!(stepped(0.0, 100.0, 0.0).count(), 0);
    assert_eq!(stepped(0.0, 100.0, -8.0).count(), 0);
}

// -----------------------------------------------------------------------------
// build_level tests
// -----------------------------------------------------------------------------

#[test]
fn test_default_layout_counts() {
    let layout = build_level(&LevelDef::default());

    // 31 stone blocks per side between 32 and 2000
    assert_eq!(layout.tile_count(TileKind::Stone), 62);
    // 0..1250 in 64 px steps
    assert_eq!(layout.tile_count(TileKind::Grass), 20);
    assert_eq!(layout.tile_count(TileKind::Crate), 4);

    assert_eq!(layout.coin_count(CoinTier::Bronze), 4);
    assert_eq!(layout.coin_count(CoinTier::Silver), 4);
    assert_eq!(layout.coin_count(CoinTier::Gold), 4);
    assert_eq!(layout.total_coin_value(), 32);
}

#[test]
fn test_side_walls_bracket_the_level() {
    let level = LevelDef::default();
    let layout = build_level(&level);

    let stone_xs: Vec<f32> = layout
        .tiles
        .iter()
        .filter(|t| t.kind == TileKind::Stone)
        .map(|t| t.position.x)
        .collect();

    assert!(stone_xs.iter().all(|x| *x == -64.0 || *x == 1282.0));
    let lowest = layout
        .tiles
        .iter()
        .filter(|t| t.kind == TileKind::Stone)
        .map(|t| t.position.y)
        .fold(f32::MAX, f32::min);
    assert_eq!(lowest, 32.0);
}

#[test]
fn test_first_coins_sit_between_first_crates() {
    let layout = build_level(&LevelDef::default());

    let first_of = |tier: CoinTier| {
        layout
            .coins
            .iter()
            .find(|c| c.tier == tier)
            .map(|c| c.position)
    };

    assert_eq!(first_of(CoinTier::Gold), Some(Vec2::new(320.0, 96.0)));
    assert_eq!(first_of(CoinTier::Silver), Some(Vec2::new(384.0, 96.0)));
    assert_eq!(first_of(CoinTier::Bronze), Some(Vec2::new(448.0, 96.0)));

    // No coin shares a column with a crate
    for coin in &layout.coins {
        assert!(
            !layout
                .tiles
                .iter()
                .any(|t| t.kind == TileKind::Crate && t.position == coin.position)
        );
    }
}

#[test]
fn test_no_coin_rows_means_no_coins() {
    let level = LevelDef {
        coin_rows: Vec::new(),
        ..LevelDef::default()
    };
    let layout = build_level(&level);
    assert!(layout.coins.is_empty());
    assert_eq!(layout.total_coin_value(), 0);
}

#[test]
fn test_tier_values() {
    assert_eq!(CoinTier::Bronze.value(), 1);
    assert_eq!(CoinTier::Silver.value(), 2);
    assert_eq!(CoinTier::Gold.value(), 5);
}

#[test]
fn test_only_stone_is_wall() {
    assert!(TileKind::Stone.is_wall());
    assert!(!TileKind::Grass.is_wall());
    assert!(!TileKind::Crate.is_wall());
}
