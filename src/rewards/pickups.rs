//! Rewards domain: overlap detection between the player and coins.

use bevy::ecs::message::MessageWriter;
use bevy::math::bounding::{Aabb2d, IntersectsVolume};
use bevy::prelude::*;

use crate::core::BoundingBox;
use crate::level::Coin;
use crate::movement::Player;
use crate::rewards::economy::CoinCollectedEvent;

/// Keys of every box that overlaps `player`, in input order.
pub(crate) fn overlapping<K>(
    player: &Aabb2d,
    boxes: impl IntoIterator<Item = (K, Aabb2d)>,
) -> Vec<K> {
    boxes
        .into_iter()
        .filter(|(_, aabb)| player.intersects(aabb))
        .map(|(key, _)| key)
        .collect()
}

/// Despawn every coin touching the player and report it.
pub(crate) fn collect_coins(
    mut commands: Commands,
    mut collected: MessageWriter<CoinCollectedEvent>,
    player_query: Query<(&Transform, &BoundingBox), With<Player>>,
    coin_query: Query<(Entity, &Transform, &BoundingBox, &Coin)>,
) {
    let Ok((player_transform, player_bounds)) = player_query.single() else {
        return;
    };
    let player_box = player_bounds.at(player_transform.translation.truncate());

    let hits = overlapping(
        &player_box,
        coin_query.iter().map(|(entity, transform, bounds, coin)| {
            let center = transform.translation.truncate();
            ((entity, *coin, center), bounds.at(center))
        }),
    );

    for (entity, coin, position) in hits {
        commands.entity(entity).despawn();
        collected.write(CoinCollectedEvent {
            tier: coin.tier,
            position,
        });
    }
}
