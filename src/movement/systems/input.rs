//! Movement domain: key events to intent flags.

use bevy::ecs::message::MessageReader;
use bevy::input::keyboard::KeyboardInput;
use bevy::prelude::*;

use crate::movement::IntentFlags;

pub(crate) fn track_key_events(
    mut events: MessageReader<KeyboardInput>,
    mut intents: ResMut<IntentFlags>,
) {
    for event in events.read() {
        // OS auto-repeat is not a fresh press
        if event.repeat {
            continue;
        }

        let pressed = event.state.is_pressed();
        if intents.apply_key(event.key_code, pressed) {
            trace!("{:?} pressed={} -> {:?}", event.key_code, pressed, *intents);
        }
    }
}
