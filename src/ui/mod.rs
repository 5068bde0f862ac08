//! UI domain: in-game HUD text.

mod hud;
mod messages;


pub use hud::{RotatingMessageText, ScoreText};
pub use messages::MessageRotation;

use bevy::prelude::*;

use crate::core::FrameSet;
use crate::ui::hud::{configure_messages, spawn_hud, update_message_text, update_score_text};
use crate::ui::messages::rotate_messages;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MessageRotation>()
            .add_systems(Startup, (configure_messages, spawn_hud).chain())
            .add_systems(
                Update,
                (rotate_messages, update_message_text, update_score_text)
                    .chain()
                    .in_set(FrameSet::Presentation),
            );
    }
}
