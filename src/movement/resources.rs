//! Movement domain: tuning and input resources.

use bevy::prelude::*;

use crate::content::MovementDef;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub move_speed: f32,
    pub jump_speed: f32,
    pub gravity: f32,
    pub ground_probe: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self::from(&MovementDef::default())
    }
}

impl From<&MovementDef> for MovementTuning {
    fn from(def: &MovementDef) -> Self {
        Self {
            move_speed: def.move_speed,
            jump_speed: def.jump_speed,
            gravity: def.gravity,
            ground_probe: def.ground_probe,
        }
    }
}

impl MovementTuning {
    /// Apex height of a jump from standing: h = v² / (2g)
    pub fn jump_height(&self) -> f32 {
        self.jump_speed * self.jump_speed / (2.0 * self.gravity)
    }
}

/// Held-down movement intents, written by key events and read by the
/// physics step.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct IntentFlags {
    pub left: bool,
    pub right: bool,
    /// Armed by a jump press, cleared by the press's release or by jumping
    pub jump: bool,
}

impl IntentFlags {
    /// Record a key press or release. Returns false for unbound keys,
    /// which leave the flags untouched.
    pub fn apply_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::ArrowUp | KeyCode::KeyW => self.jump = pressed,
            KeyCode::ArrowLeft | KeyCode::KeyA => self.left = pressed,
            KeyCode::ArrowRight | KeyCode::KeyD => self.right = pressed,
            _ => return false,
        }
        true
    }

    /// -1, 0 or 1. Opposing keys cancel out.
    pub fn horizontal(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}
