//! Debug domain: state for developer tooling.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether to show the info overlay (position, viewport, score)
    pub show_info: bool,
}
