//! Movement domain: player input, ground detection and velocity control.
//!
//! Key events are folded into [`IntentFlags`] every frame. The flags are
//! turned into velocity in `FixedUpdate`, just before avian steps the
//! simulation, which integrates gravity and resolves contacts with the
//! level geometry.

mod bootstrap;
mod components;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{Facing, GameLayer, Ground, MovementState, Player, Wall};
pub use resources::{IntentFlags, MovementTuning};

use bevy::prelude::*;

use crate::core::FrameSet;
use crate::movement::bootstrap::{configure_movement, spawn_player};
use crate::movement::systems::{apply_intents, detect_ground, track_key_events, update_facing};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<IntentFlags>()
            .add_systems(Startup, (configure_movement, spawn_player).chain())
            .add_systems(Update, track_key_events.in_set(FrameSet::Input))
            .add_systems(
                FixedUpdate,
                (detect_ground, apply_intents, update_facing).chain(),
            );
    }
}
