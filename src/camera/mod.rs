//! Camera domain: viewport scrolling that keeps the player on screen.

mod systems;
mod viewport;


pub use viewport::{Viewport, ViewportBounds, ViewportMargins};

use bevy::prelude::*;

use crate::camera::systems::{scroll_viewport, setup_camera};
use crate::core::FrameSet;

/// Marker for the camera that renders the level
#[derive(Component, Debug)]
pub struct MainCamera;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Viewport>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, scroll_viewport.in_set(FrameSet::Scroll));
    }
}
