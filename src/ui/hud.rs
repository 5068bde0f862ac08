//! UI domain: score and message text pinned to the screen.

use bevy::prelude::*;

use crate::content::PlatformerConfig;
use crate::rewards::Score;
use crate::ui::messages::MessageRotation;

/// Marker for the score text
#[derive(Component)]
pub struct ScoreText;

/// Marker for the rotating message text
#[derive(Component)]
pub struct RotatingMessageText;

pub(crate) fn score_label(score: &Score) -> String {
    format!("Score: {}", score.points)
}

pub(crate) fn configure_messages(
    config: Res<PlatformerConfig>,
    mut rotation: ResMut<MessageRotation>,
) {
    *rotation = MessageRotation::from(&config.hud);
}

pub(crate) fn spawn_hud(
    mut commands: Commands,
    config: Res<PlatformerConfig>,
    score: Res<Score>,
    rotation: Res<MessageRotation>,
) {
    let hud = &config.hud;

    commands.spawn((
        ScoreText,
        Text::new(score_label(&score)),
        TextFont {
            font_size: hud.score_font_size,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(hud.score_offset.0),
            bottom: Val::Px(hud.score_offset.1),
            ..default()
        },
    ));

    commands.spawn((
        RotatingMessageText,
        Text::new(rotation.current()),
        TextFont {
            font_size: hud.message_font_size,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(hud.message_offset.0),
            bottom: Val::Px(hud.message_offset.1),
            ..default()
        },
    ));
}

pub(crate) fn update_score_text(
    score: Res<Score>,
    mut query: Query<&mut Text, With<ScoreText>>,
) {
    if score.is_changed() {
        for mut text in &mut query {
            **text = score_label(&score);
        }
    }
}

pub(crate) fn update_message_text(
    rotation: Res<MessageRotation>,
    mut query: Query<&mut Text, With<RotatingMessageText>>,
) {
    if rotation.is_changed() {
        for mut text in &mut query {
            **text = rotation.current().to_string();
        }
    }
}
