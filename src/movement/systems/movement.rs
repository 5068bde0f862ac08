//! Movement domain: intents to velocity, ahead of the physics step.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::audio::SoundCue;
use crate::movement::{Facing, IntentFlags, MovementState, MovementTuning, Player};

/// Velocity changes for one physics step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MotionCommand {
    pub velocity_x: f32,
    /// Set when a jump starts this step
    pub jump_velocity: Option<f32>,
}

/// Turn intents into a motion command. Consumes the jump intent when a
/// jump actually happens, so a held key jumps once per press.
pub(crate) fn plan_motion(
    intents: &mut IntentFlags,
    grounded: bool,
    tuning: &MovementTuning,
) -> MotionCommand {
    let jump_velocity = if intents.jump && grounded {
        intents.jump = false;
        Some(tuning.jump_speed)
    } else {
        None
    };

    MotionCommand {
        velocity_x: intents.horizontal() * tuning.move_speed,
        jump_velocity,
    }
}

pub(crate) fn apply_intents(
    mut intents: ResMut<IntentFlags>,
    tuning: Res<MovementTuning>,
    mut cues: MessageWriter<SoundCue>,
    mut query: Query<(&MovementState, &mut LinearVelocity), With<Player>>,
) {
    for (state, mut velocity) in &mut query {
        let command = plan_motion(&mut intents, state.on_ground, &tuning);

        velocity.x = command.velocity_x;
        if let Some(jump_velocity) = command.jump_velocity {
            velocity.y = jump_velocity;
            cues.write(SoundCue::Jump);
            debug!("Jump: vy={}", jump_velocity);
        }
    }
}

pub(crate) fn update_facing(
    mut query: Query<(&LinearVelocity, &mut MovementState, &mut Sprite), With<Player>>,
) {
    for (velocity, mut state, mut sprite) in &mut query {
        let facing = state.facing.after_moving(velocity.x);
        if facing != state.facing {
            state.facing = facing;
            sprite.flip_x = facing == Facing::Left;
        }
    }
}
