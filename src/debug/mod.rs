//! Debug/dev-tools overlay for inspecting the frame pipeline.
//!
//! F1 (or backtick) toggles a panel with the player's body state, the
//! current viewport rectangle, the level geometry and the remaining coins.

mod state;
mod systems;


pub use state::DebugState;

use bevy::prelude::*;

use crate::core::FrameSet;
use crate::debug::systems::{toggle_debug_info, update_debug_info_overlay};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (toggle_debug_info, update_debug_info_overlay)
                .chain()
                .in_set(FrameSet::Presentation),
        );
    }
}
