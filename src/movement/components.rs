//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Surfaces that can be stood on (ground row, crates)
    Ground,
    /// Level side walls
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub on_ground: bool,
    pub facing: Facing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// Facing after moving with horizontal velocity `velocity_x`.
    /// Standing still keeps the current facing.
    pub fn after_moving(self, velocity_x: f32) -> Facing {
        if velocity_x < 0.0 {
            Facing::Left
        } else if velocity_x > 0.0 {
            Facing::Right
        } else {
            self
        }
    }
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;
