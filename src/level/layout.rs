//! Level domain: procedural layout of tiles and coins.
//!
//! Everything here is plain data so the layout can be inspected and tested
//! without spawning anything.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::content::LevelDef;

/// Coin tiers in increasing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum CoinTier {
    Bronze,
    Silver,
    Gold,
}

impl CoinTier {
    pub fn value(self) -> u32 {
        match self {
            CoinTier::Bronze => 1,
            CoinTier::Silver => 2,
            CoinTier::Gold => 5,
        }
    }

    pub fn color(self) -> Color {
        match self {
            CoinTier::Bronze => Color::srgb(0.8, 0.5, 0.2),
            CoinTier::Silver => Color::srgb(0.75, 0.75, 0.8),
            CoinTier::Gold => Color::srgb(0.95, 0.8, 0.2),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    /// Side walls bounding the level
    Stone,
    /// Ground row
    Grass,
    /// Obstacles on the ground that must be jumped over
    Crate,
}

impl TileKind {
    pub fn color(self) -> Color {
        match self {
            TileKind::Stone => Color::srgb(0.45, 0.45, 0.5),
            TileKind::Grass => Color::srgb(0.35, 0.6, 0.3),
            TileKind::Crate => Color::srgb(0.6, 0.45, 0.25),
        }
    }

    /// Walls are vertical boundaries; everything else can be stood on.
    pub fn is_wall(self) -> bool {
        matches!(self, TileKind::Stone)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePlacement {
    pub kind: TileKind,
    pub position: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoinPlacement {
    pub tier: CoinTier,
    pub position: Vec2,
}

#[derive(Debug, Clone, Default)]
pub struct LevelLayout {
    pub tiles: Vec<TilePlacement>,
    pub coins: Vec<CoinPlacement>,
}

impl LevelLayout {
    pub fn tile_count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|t| t.kind == kind).count()
    }

    pub fn coin_count(&self, tier: CoinTier) -> usize {
        self.coins.iter().filter(|c| c.tier == tier).count()
    }

    /// Score for collecting every coin in the level.
    pub fn total_coin_value(&self) -> u32 {
        self.coins.iter().map(|c| c.tier.value()).sum()
    }
}

/// Values from `start` up to (excluding) `end` in increments of `step`.
/// Yields nothing for a non-positive step.
pub fn stepped(start: f32, end: f32, step: f32) -> impl Iterator<Item = f32> {
    let valid = step > 0.0;
    (0u32..)
        .map(move |i| start + i as f32 * step)
        .take_while(move |x| valid && *x < end)
}

/// Build the full level from its numeric description.
pub fn build_level(level: &LevelDef) -> LevelLayout {
    let mut layout = LevelLayout::default();
    let tile = level.tile_size;

    // Side walls, one column on each end
    let left_wall_x = level.start_x - tile;
    let right_wall_x = level.end_x + tile * 0.5;
    for y in stepped(tile * 0.5, level.wall_height, tile) {
        layout.tiles.push(TilePlacement {
            kind: TileKind::Stone,
            position: Vec2::new(left_wall_x, y),
        });
        layout.tiles.push(TilePlacement {
            kind: TileKind::Stone,
            position: Vec2::new(right_wall_x, y),
        });
    }

    // Ground
    for x in stepped(level.start_x, level.end_x, tile) {
        layout.tiles.push(TilePlacement {
            kind: TileKind::Grass,
            position: Vec2::new(x, level.ground_y),
        });
    }

    // Crates
    for x in stepped(level.crate_start_x, level.end_x, level.crate_spacing) {
        layout.tiles.push(TilePlacement {
            kind: TileKind::Crate,
            position: Vec2::new(x, level.item_row_y),
        });
    }

    // Coins, one row per tier
    for row in &level.coin_rows {
        for x in stepped(row.start_x, level.end_x, level.coin_spacing) {
            layout.coins.push(CoinPlacement {
                tier: row.tier,
                position: Vec2::new(x, level.item_row_y),
            });
        }
    }

    layout
}
