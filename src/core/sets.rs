//! Core domain: system sets that order the per-frame pipeline.

use bevy::prelude::*;

/// Per-frame stages in `Update`, run in declaration order.
///
/// Player motion itself is applied in `FixedUpdate`, ahead of the physics
/// step, so by the time `Pickups` runs the bodies are already in their new
/// positions.
#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone, Copy)]
pub enum FrameSet {
    /// Key events become intent flags
    Input,
    /// Coins overlapping the player are collected and scored
    Pickups,
    /// The camera follows the player out of the dead zone
    Scroll,
    /// Text and sound reflect the new state
    Presentation,
}
