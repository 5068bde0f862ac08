//! Movement domain: ground detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::BoundingBox;
use crate::movement::{GameLayer, MovementState, MovementTuning, Player};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &BoundingBox, &mut MovementState), With<Player>>,
) {
    // Anything solid counts, but never the player itself
    let ground_filter = SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Wall]);

    for (transform, bounds, mut state) in &mut query {
        let was_on_ground = state.on_ground;

        // Probe under both corners and the middle so standing on a ledge counts
        let feet = transform.translation.truncate() - Vec2::new(0.0, bounds.half_size.y);
        let inset = (bounds.half_size.x - 1.0).max(0.0);

        state.on_ground = [-inset, 0.0, inset].iter().any(|dx| {
            spatial_query
                .cast_ray(
                    feet + Vec2::new(*dx, 0.0),
                    Dir2::NEG_Y,
                    tuning.ground_probe,
                    true,
                    &ground_filter,
                )
                .is_some()
        });

        if state.on_ground && !was_on_ground {
            debug!("Landed at ({:.1}, {:.1})", feet.x, feet.y);
        } else if !state.on_ground && was_on_ground {
            debug!("Left ground at ({:.1}, {:.1})", feet.x, feet.y);
        }
    }
}
