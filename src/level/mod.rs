//! Level domain: static geometry and coin placement.

mod components;
mod layout;
mod spawn;

#[cfg(test)]
mod tests;

pub use components::{Coin, Tile};
pub use layout::{CoinTier, TileKind, build_level, stepped};

use bevy::prelude::*;

use crate::level::spawn::spawn_level;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_level);
    }
}
