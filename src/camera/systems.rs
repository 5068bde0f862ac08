//! Camera domain: camera spawn and scrolling systems.

use bevy::prelude::*;

use crate::camera::{MainCamera, Viewport, ViewportMargins};
use crate::content::PlatformerConfig;
use crate::core::BoundingBox;
use crate::movement::Player;

pub(crate) fn setup_camera(
    mut commands: Commands,
    config: Res<PlatformerConfig>,
    mut viewport: ResMut<Viewport>,
) {
    *viewport = Viewport::new(
        config.window.width,
        config.window.height,
        ViewportMargins::from(&config.viewport),
    );

    commands.spawn((
        MainCamera,
        Camera2d,
        Transform::from_translation(viewport.center().extend(0.0)),
    ));
}

pub(crate) fn scroll_viewport(
    mut viewport: ResMut<Viewport>,
    player_query: Query<(&Transform, &BoundingBox), (With<Player>, Without<MainCamera>)>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok((player_transform, bounds)) = player_query.single() else {
        return;
    };
    let player_box = bounds.at(player_transform.translation.truncate());

    // Only touch the resource when it moves so change detection stays quiet
    if !viewport.bypass_change_detection().scroll_to_contain(&player_box) {
        return;
    }
    viewport.set_changed();

    let view = viewport.bounds();
    debug!(
        "Viewport -> left={} right={} bottom={} top={}",
        view.left, view.right, view.bottom, view.top
    );

    let center = viewport.center();
    for mut transform in &mut camera_query {
        transform.translation.x = center.x;
        transform.translation.y = center.y;
    }
}
