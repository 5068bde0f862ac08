//! Movement domain: tests for intent tracking, the velocity plan and the
//! systems that apply them.

use avian2d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::ecs::system::RunSystemOnce;
use bevy::input::ButtonState;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;

use super::systems::movement::plan_motion;
use super::systems::{apply_intents, track_key_events, update_facing};
use super::{Facing, IntentFlags, MovementState, MovementTuning, Player};
use crate::audio::SoundCue;

fn tuning() -> MovementTuning {
    MovementTuning {
        move_speed: 8.0,
        jump_speed: 80.0,
        gravity: 5.0,
        ground_probe: 2.0,
    }
}

// -----------------------------------------------------------------------------
// IntentFlags tests
// -----------------------------------------------------------------------------

#[test]
fn test_press_and_release_set_flags() {
    let mut intents = IntentFlags::default();

    assert!(intents.apply_key(KeyCode::ArrowLeft, true));
    assert!(intents.apply_key(KeyCode::KeyD, true));
    assert!(intents.apply_key(KeyCode::KeyW, true));
    assert!(intents.left && intents.right && intents.jump);

    intents.apply_key(KeyCode::KeyA, false);
    intents.apply_key(KeyCode::ArrowRight, false);
    intents.apply_key(KeyCode::ArrowUp, false);
    assert_eq!(intents, IntentFlags::default());
}

#[test]
fn test_unbound_keys_are_ignored() {
    let mut intents = IntentFlags {
        left: true,
        right: false,
        jump: false,
    };
    let before = intents.clone();

    assert!(!intents.apply_key(KeyCode::Space, true));
    assert!(!intents.apply_key(KeyCode::KeyS, false));
    assert_eq!(intents, before);
}

#[test]
fn test_last_write_wins() {
    let mut intents = IntentFlags::default();
    intents.apply_key(KeyCode::KeyA, true);
    intents.apply_key(KeyCode::KeyA, true);
    intents.apply_key(KeyCode::ArrowLeft, false);
    assert!(!intents.left);
}

// -----------------------------------------------------------------------------
// plan_motion tests
// -----------------------------------------------------------------------------

#[test]
fn test_opposing_or_no_keys_stop_horizontal_motion() {
    for (left, right) in [(false, false), (true, true)] {
        for grounded in [false, true] {
            let mut intents = IntentFlags {
                left,
                right,
                jump: false,
            };
            let command = plan_motion(&mut intents, grounded, &tuning());
            assert_eq!(command.velocity_x, 0.0);
        }
    }
}

#[test]
fn test_single_direction_moves_at_fixed_speed() {
    let mut intents = IntentFlags {
        left: true,
        right: false,
        jump: false,
    };
    assert_eq!(plan_motion(&mut intents, true, &tuning()).velocity_x, -8.0);

    intents.left = false;
    intents.right = true;
    assert_eq!(plan_motion(&mut intents, false, &tuning()).velocity_x, 8.0);
}

#[test]
fn test_jump_requires_request_and_ground() {
    for requested in [false, true] {
        for grounded in [false, true] {
            let mut intents = IntentFlags {
                left: false,
                right: false,
                jump: requested,
            };
            let command = plan_motion(&mut intents, grounded, &tuning());

            if requested && grounded {
                assert_eq!(command.jump_velocity, Some(80.0));
                assert!(!intents.jump, "jump intent must be consumed");
            } else {
                assert_eq!(command.jump_velocity, None);
                assert_eq!(intents.jump, requested);
            }
        }
    }
}

#[test]
fn test_held_jump_fires_once() {
    let mut intents = IntentFlags::default();
    intents.apply_key(KeyCode::ArrowUp, true);

    let first = plan_motion(&mut intents, true, &tuning());
    let second = plan_motion(&mut intents, true, &tuning());

    assert!(first.jump_velocity.is_some());
    assert!(second.jump_velocity.is_none());

    // A fresh press re-arms it
    intents.apply_key(KeyCode::ArrowUp, false);
    intents.apply_key(KeyCode::ArrowUp, true);
    assert!(plan_motion(&mut intents, true, &tuning()).jump_velocity.is_some());
}

#[test]
fn test_airborne_jump_request_waits_for_landing() {
    let mut intents = IntentFlags::default();
    intents.apply_key(KeyCode::KeyW, true);

    assert!(plan_motion(&mut intents, false, &tuning()).jump_velocity.is_none());
    assert!(plan_motion(&mut intents, true, &tuning()).jump_velocity.is_some());
}

// -----------------------------------------------------------------------------
// Facing and tuning tests
// -----------------------------------------------------------------------------

#[test]
fn test_facing_follows_velocity_sign() {
    assert_eq!(Facing::Right.after_moving(-1.0), Facing::Left);
    assert_eq!(Facing::Left.after_moving(3.0), Facing::Right);
    assert_eq!(Facing::Left.after_moving(0.0), Facing::Left);
    assert_eq!(Facing::Right.after_moving(0.0), Facing::Right);
}

#[test]
fn test_jump_height() {
    let tuning = MovementTuning {
        jump_speed: 900.0,
        gravity: 2400.0,
        ..MovementTuning::default()
    };
    assert!((tuning.jump_height() - 168.75).abs() < 1e-3);
}

// -----------------------------------------------------------------------------
// System tests
// -----------------------------------------------------------------------------

fn key_event(
    key_code: KeyCode,
    logical_key: Key,
    pressed: bool,
    repeat: bool,
) -> KeyboardInput {
    KeyboardInput {
        key_code,
        logical_key,
        state: if pressed {
            ButtonState::Pressed
        } else {
            ButtonState::Released
        },
        text: None,
        repeat,
        window: Entity::PLACEHOLDER,
    }
}

fn input_world(events: impl IntoIterator<Item = KeyboardInput>) -> World {
    let mut world = World::new();
    world.init_resource::<IntentFlags>();
    world.init_resource::<Messages<KeyboardInput>>();
    {
        let mut messages = world.resource_mut::<Messages<KeyboardInput>>();
        for event in events {
            messages.write(event);
        }
    }
    world
}

fn motion_world(intents: IntentFlags, on_ground: bool) -> (World, Entity) {
    let mut world = World::new();
    world.insert_resource(intents);
    world.insert_resource(tuning());
    world.init_resource::<Messages<SoundCue>>();
    let player = world
        .spawn((
            Player,
            MovementState {
                on_ground,
                ..default()
            },
            LinearVelocity(Vec2::new(0.0, -3.0)),
        ))
        .id();
    (world, player)
}

fn velocity_of(world: &World, entity: Entity) -> Option<Vec2> {
    world.get::<LinearVelocity>(entity).map(|v| v.0)
}

#[test]
fn test_key_events_update_intents() {
    let mut world = input_world([
        key_event(KeyCode::ArrowLeft, Key::ArrowLeft, true, false),
        key_event(KeyCode::KeyW, Key::Character("w".into()), true, false),
        key_event(KeyCode::ArrowLeft, Key::ArrowLeft, false, false),
        key_event(KeyCode::KeyD, Key::Character("d".into()), true, false),
    ]);

    world.run_system_once(track_key_events).expect("input runs");

    assert_eq!(
        *world.resource::<IntentFlags>(),
        IntentFlags {
            left: false,
            right: true,
            jump: true,
        }
    );
}

#[test]
fn test_auto_repeat_events_are_ignored() {
    let mut world = input_world([
        key_event(KeyCode::ArrowRight, Key::ArrowRight, true, true),
        key_event(KeyCode::ArrowUp, Key::ArrowUp, true, true),
    ]);

    world.run_system_once(track_key_events).expect("input runs");

    assert_eq!(*world.resource::<IntentFlags>(), IntentFlags::default());
}

#[test]
fn test_grounded_jump_sets_velocity_and_cue() {
    let intents = IntentFlags {
        left: false,
        right: true,
        jump: true,
    };
    let (mut world, player) = motion_world(intents, true);

    world.run_system_once(apply_intents).expect("motion runs");

    assert_eq!(velocity_of(&world, player), Some(Vec2::new(8.0, 80.0)));
    assert_eq!(world.resource::<Messages<SoundCue>>().len(), 1);
    assert!(!world.resource::<IntentFlags>().jump);
}

#[test]
fn test_airborne_jump_keeps_falling_silently() {
    let intents = IntentFlags {
        left: true,
        right: false,
        jump: true,
    };
    let (mut world, player) = motion_world(intents, false);

    world.run_system_once(apply_intents).expect("motion runs");

    // Vertical speed belongs to the physics step until the jump fires
    assert_eq!(velocity_of(&world, player), Some(Vec2::new(-8.0, -3.0)));
    assert_eq!(world.resource::<Messages<SoundCue>>().len(), 0);
    assert!(world.resource::<IntentFlags>().jump);
}

#[test]
fn test_sprite_flips_with_movement_direction() {
    let mut world = World::new();
    let player = world
        .spawn((
            Player,
            MovementState::default(),
            LinearVelocity(Vec2::new(-5.0, 0.0)),
            Sprite::default(),
        ))
        .id();

    let flipped = |world: &World| world.get::<Sprite>(player).map(|s| s.flip_x);

    world.run_system_once(update_facing).expect("facing runs");
    assert_eq!(flipped(&world), Some(true));
    assert_eq!(
        world.get::<MovementState>(player).map(|s| s.facing),
        Some(Facing::Left)
    );

    // Stopping keeps the last facing
    if let Some(mut velocity) = world.get_mut::<LinearVelocity>(player) {
        velocity.x = 0.0;
    }
    world.run_system_once(update_facing).expect("facing runs");
    assert_eq!(flipped(&world), Some(true));

    if let Some(mut velocity) = world.get_mut::<LinearVelocity>(player) {
        velocity.x = 4.0;
    }
    world.run_system_once(update_facing).expect("facing runs");
    assert_eq!(flipped(&world), Some(false));
}
