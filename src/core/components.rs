//! Core domain: components shared across gameplay domains.

use bevy::math::bounding::Aabb2d;
use bevy::prelude::*;

/// Axis-aligned extent of a body around its transform translation.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub half_size: Vec2,
}

impl BoundingBox {
    pub fn from_size(size: Vec2) -> Self {
        Self {
            half_size: size * 0.5,
        }
    }

    /// World-space box for a body centred at `center`.
    pub fn at(&self, center: Vec2) -> Aabb2d {
        Aabb2d::new(center, self.half_size)
    }
}
