//! Audio domain: one-shot sound cues raised by gameplay systems.


use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;
use std::path::Path;

use crate::content::PlatformerConfig;
use crate::core::FrameSet;

/// Asset root the sound paths in the configuration are relative to.
const ASSET_ROOT: &str = "assets";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Jump,
    CoinCollected,
}

impl Message for SoundCue {}

/// Loaded handles per cue. A cue whose file is missing stays `None`.
#[derive(Resource, Debug, Default)]
pub struct SoundLibrary {
    pub jump: Option<Handle<AudioSource>>,
    pub coin: Option<Handle<AudioSource>>,
}

impl SoundLibrary {
    pub fn get(&self, cue: SoundCue) -> Option<&Handle<AudioSource>> {
        match cue {
            SoundCue::Jump => self.jump.as_ref(),
            SoundCue::CoinCollected => self.coin.as_ref(),
        }
    }
}

pub struct AudioCuePlugin;

impl Plugin for AudioCuePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SoundLibrary>()
            .add_message::<SoundCue>()
            .add_systems(Startup, load_sound_library)
            .add_systems(Update, play_sound_cues.in_set(FrameSet::Presentation));
    }
}

fn load_sound_library(
    config: Res<PlatformerConfig>,
    asset_server: Res<AssetServer>,
    mut library: ResMut<SoundLibrary>,
) {
    library.jump = load_sound(&asset_server, &config.audio.jump);
    library.coin = load_sound(&asset_server, &config.audio.coin);
}

fn load_sound(asset_server: &AssetServer, path: &str) -> Option<Handle<AudioSource>> {
    if !Path::new(ASSET_ROOT).join(path).exists() {
        warn!("Sound {:?} not found under {}, cue disabled", path, ASSET_ROOT);
        return None;
    }
    Some(asset_server.load(path.to_string()))
}

fn play_sound_cues(
    mut commands: Commands,
    mut cues: MessageReader<SoundCue>,
    library: Res<SoundLibrary>,
) {
    for cue in cues.read() {
        if let Some(handle) = library.get(*cue) {
            commands.spawn((AudioPlayer::new(handle.clone()), PlaybackSettings::DESPAWN));
        }
    }
}
