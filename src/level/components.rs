//! Level domain: components attached to spawned level entities.

use bevy::prelude::*;

use crate::level::{CoinTier, TileKind};

/// A static tile of level geometry.
#[derive(Component, Debug, Clone, Copy)]
pub struct Tile {
    pub kind: TileKind,
}

/// An uncollected coin. The entity is despawned when collected.
#[derive(Component, Debug, Clone, Copy)]
pub struct Coin {
    pub tier: CoinTier,
}
