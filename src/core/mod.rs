//! Core domain: frame ordering and shared components.

mod components;
mod sets;

pub use components::BoundingBox;
pub use sets::FrameSet;

use bevy::prelude::*;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                FrameSet::Input,
                FrameSet::Pickups,
                FrameSet::Scroll,
                FrameSet::Presentation,
            )
                .chain(),
        );
    }
}
