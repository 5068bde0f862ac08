//! UI domain: timed rotation through the HUD messages.

use bevy::prelude::*;

use crate::content::HudDef;

/// Index into a fixed message list that advances on a timer.
#[derive(Resource, Debug, Clone)]
pub struct MessageRotation {
    pub messages: Vec<String>,
    pub index: usize,
    /// Seconds between rotations
    pub interval: f32,
    /// Seconds accumulated since the last rotation
    pub elapsed: f32,
}

impl MessageRotation {
    pub fn new(messages: Vec<String>, interval: f32) -> Self {
        Self {
            messages,
            index: 0,
            interval,
            elapsed: 0.0,
        }
    }

    pub fn current(&self) -> &str {
        self.messages
            .get(self.index)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Add `delta_secs` to the clock. Once the interval is exceeded, move to
    /// the next message and restart the clock. Returns true if the index moved.
    pub fn advance(&mut self, delta_secs: f32) -> bool {
        if self.messages.is_empty() || !(self.interval > 0.0) {
            return false;
        }

        self.elapsed += delta_secs;
        if self.elapsed <= self.interval {
            return false;
        }

        self.elapsed = 0.0;
        self.index = (self.index + 1) % self.messages.len();
        true
    }
}

impl From<&HudDef> for MessageRotation {
    fn from(def: &HudDef) -> Self {
        Self::new(def.messages.clone(), def.rotation_interval)
    }
}

impl Default for MessageRotation {
    fn default() -> Self {
        Self::from(&HudDef::default())
    }
}

pub(crate) fn rotate_messages(time: Res<Time>, mut rotation: ResMut<MessageRotation>) {
    // Ticking the clock alone is not a change worth redrawing for
    if rotation.bypass_change_detection().advance(time.delta_secs()) {
        rotation.set_changed();
        debug!("Message {} of {}", rotation.index + 1, rotation.messages.len());
    }
}
