//! Level domain: spawning the layout into the world.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::PlatformerConfig;
use crate::core::BoundingBox;
use crate::level::components::{Coin, Tile};
use crate::level::layout::{CoinTier, LevelLayout, TileKind, TilePlacement, build_level};
use crate::movement::{GameLayer, Ground, Wall};

pub(crate) fn spawn_level(mut commands: Commands, config: Res<PlatformerConfig>) {
    let layout = build_level(&config.level);
    let tile_size = Vec2::splat(config.level.tile_size);
    let coin_size = Vec2::new(config.coins.size.0, config.coins.size.1);

    for placement in &layout.tiles {
        spawn_tile(&mut commands, placement, tile_size);
    }

    for placement in &layout.coins {
        commands.spawn((
            Coin {
                tier: placement.tier,
            },
            BoundingBox::from_size(coin_size),
            Sprite {
                color: placement.tier.color(),
                custom_size: Some(coin_size),
                ..default()
            },
            Transform::from_translation(placement.position.extend(1.0)),
        ));
    }

    log_layout(&layout);
}

fn spawn_tile(commands: &mut Commands, placement: &TilePlacement, size: Vec2) {
    let mut tile = commands.spawn((
        Tile {
            kind: placement.kind,
        },
        Sprite {
            color: placement.kind.color(),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(placement.position.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
    ));

    if placement.kind.is_wall() {
        tile.insert((
            Wall,
            CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]),
        ));
    } else {
        tile.insert((
            Ground,
            CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
        ));
    }
}

fn log_layout(layout: &LevelLayout) {
    info!(
        "Level built: {} tiles ({} crates), {} coins ({} bronze, {} silver, {} gold) worth {} points",
        layout.tiles.len(),
        layout.tile_count(TileKind::Crate),
        layout.coins.len(),
        layout.coin_count(CoinTier::Bronze),
        layout.coin_count(CoinTier::Silver),
        layout.coin_count(CoinTier::Gold),
        layout.total_coin_value()
    );
}
