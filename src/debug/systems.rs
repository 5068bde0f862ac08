//! Debug domain: info overlay systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::camera::Viewport;
use crate::debug::state::DebugState;
use crate::level::{Coin, Tile};
use crate::movement::{Ground, MovementState, Player, Wall};
use crate::rewards::Score;

/// Marker for debug info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

/// Toggle the info overlay with F1 or backtick key
pub(crate) fn toggle_debug_info(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    let toggle = keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote);

    if toggle {
        debug_state.show_info = !debug_state.show_info;
        info!("Debug info overlay: {}", debug_state.show_info);
    }
}

pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    viewport: Res<Viewport>,
    score: Res<Score>,
    player_query: Query<(&Transform, &LinearVelocity, &MovementState), With<Player>>,
    level_query: Query<(Has<Coin>, Has<Ground>, Has<Wall>), Or<(With<Coin>, With<Tile>)>>,
    mut overlay_query: Query<(Entity, &mut Text), With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        // Cleanup overlay if it exists
        for (entity, _) in &overlay_query {
            commands.entity(entity).despawn();
        }
        return;
    }

    // Ensure overlay exists
    let Ok((_, mut text)) = overlay_query.single_mut() else {
        spawn_debug_info_overlay(&mut commands);
        return;
    };

    let Ok((transform, velocity, state)) = player_query.single() else {
        return;
    };

    let (coins, ground, wall) = level_query.iter().fold(
        (0, 0, 0),
        |(coins, ground, wall), (is_coin, is_ground, is_wall)| {
            (
                coins + usize::from(is_coin),
                ground + usize::from(is_ground),
                wall + usize::from(is_wall),
            )
        },
    );

    let pos = transform.translation;
    let view = viewport.bounds();
    **text = format!(
        "Pos: ({:.1}, {:.1})\nVel: ({:.0}, {:.0})\nGrounded: {}\nFacing: {:?}\nView: [{}, {}] x [{}, {}]\nTiles: {} ground, {} wall\nCoins left: {}\nScore: {}",
        pos.x,
        pos.y,
        velocity.x,
        velocity.y,
        state.on_ground,
        state.facing,
        view.left,
        view.right,
        view.bottom,
        view.top,
        ground,
        wall,
        coins,
        score.points
    );
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            top: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
