//! Camera domain: the scrolling viewport rectangle.
//!
//! The viewport is the world-space rectangle mapped onto the screen. It
//! only ever moves to keep the player inside a dead zone inset from each
//! screen edge by its margin, and always lands on whole pixels.

use bevy::math::bounding::Aabb2d;
use bevy::prelude::*;

use crate::content::{ViewportDef, WindowDef};

/// Insets from each screen edge that bound the dead zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMargins {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl From<&ViewportDef> for ViewportMargins {
    fn from(def: &ViewportDef) -> Self {
        Self {
            left: def.left_margin,
            right: def.right_margin,
            bottom: def.bottom_margin,
            top: def.top_margin,
        }
    }
}

/// World-space edges handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportBounds {
    pub left: i32,
    pub right: i32,
    pub bottom: i32,
    pub top: i32,
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Viewport {
    pub left: i32,
    pub bottom: i32,
    pub width: u32,
    pub height: u32,
    pub margins: ViewportMargins,
}

impl Viewport {
    pub fn new(width: u32, height: u32, margins: ViewportMargins) -> Self {
        Self {
            left: 0,
            bottom: 0,
            width,
            height,
            margins,
        }
    }

    /// Shift the viewport just far enough that `player` sits inside the dead
    /// zone again. Returns true if the viewport moved.
    ///
    /// Edges are checked left, right, top, bottom; each check sees the
    /// shifts made before it. The final offsets are truncated toward zero.
    pub fn scroll_to_contain(&mut self, player: &Aabb2d) -> bool {
        let width = self.width as f32;
        let height = self.height as f32;
        let mut left = self.left as f32;
        let mut bottom = self.bottom as f32;
        let mut changed = false;

        let left_boundary = left + self.margins.left;
        if player.min.x < left_boundary {
            left -= left_boundary - player.min.x;
            changed = true;
        }

        let right_boundary = left + width - self.margins.right;
        if player.max.x > right_boundary {
            left += player.max.x - right_boundary;
            changed = true;
        }

        let top_boundary = bottom + height - self.margins.top;
        if player.max.y > top_boundary {
            bottom += player.max.y - top_boundary;
            changed = true;
        }

        let bottom_boundary = bottom + self.margins.bottom;
        if player.min.y < bottom_boundary {
            bottom -= bottom_boundary - player.min.y;
            changed = true;
        }

        if changed {
            // `as` truncates toward zero
            self.left = left as i32;
            self.bottom = bottom as i32;
        }
        changed
    }

    pub fn bounds(&self) -> ViewportBounds {
        ViewportBounds {
            left: self.left,
            right: self.left + self.width as i32,
            bottom: self.bottom,
            top: self.bottom + self.height as i32,
        }
    }

    /// World position of the screen centre, where a 2D camera sits.
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.left as f32 + self.width as f32 * 0.5,
            self.bottom as f32 + self.height as f32 * 0.5,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        let window = WindowDef::default();
        Self::new(
            window.width,
            window.height,
            ViewportMargins::from(&ViewportDef::default()),
        )
    }
}
