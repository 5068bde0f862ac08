//! Movement domain: player spawn and physics setup from configuration.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::PlatformerConfig;
use crate::core::BoundingBox;
use crate::movement::{GameLayer, MovementState, MovementTuning, Player};

/// Copy movement values out of the configuration and point gravity down.
pub(crate) fn configure_movement(
    config: Res<PlatformerConfig>,
    mut tuning: ResMut<MovementTuning>,
    mut gravity: ResMut<Gravity>,
) {
    *tuning = MovementTuning::from(&config.movement);
    gravity.0 = Vec2::NEG_Y * tuning.gravity;

    info!(
        "Movement: speed={}, jump={}, gravity={}, jump_height={:.0}",
        tuning.move_speed,
        tuning.jump_speed,
        tuning.gravity,
        tuning.jump_height()
    );
}

pub(crate) fn spawn_player(mut commands: Commands, config: Res<PlatformerConfig>) {
    let size = Vec2::new(config.player.size.0, config.player.size.1);
    let (spawn_x, spawn_y) = config.player.spawn;

    commands.spawn((
        // Identity & Movement
        (
            Player,
            MovementState::default(),
            BoundingBox::from_size(size),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(spawn_x, spawn_y, 2.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(size.x, size.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));

    debug!("Spawned player at ({}, {})", spawn_x, spawn_y);
}
