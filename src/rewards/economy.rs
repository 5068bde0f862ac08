//! Rewards domain: score tracking and coin events.

use bevy::ecs::message::{Message, MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::audio::SoundCue;
use crate::level::CoinTier;

/// Points earned from coins this session
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub points: u32,
}

impl Score {
    pub fn add(&mut self, amount: u32) {
        self.points = self.points.saturating_add(amount);
    }
}

/// Event fired when the player picks up a coin
#[derive(Debug, Clone, Copy)]
pub struct CoinCollectedEvent {
    pub tier: CoinTier,
    pub position: Vec2,
}

impl Message for CoinCollectedEvent {}

/// Process coin collected events: score them and queue the pickup sound
pub(crate) fn award_coins(
    mut collected: MessageReader<CoinCollectedEvent>,
    mut score: ResMut<Score>,
    mut cues: MessageWriter<SoundCue>,
) {
    for event in collected.read() {
        score.add(event.tier.value());
        cues.write(SoundCue::CoinCollected);
        info!(
            "Collected {:?} coin at ({}, {}) worth {}. Score: {}",
            event.tier,
            event.position.x,
            event.position.y,
            event.tier.value(),
            score.points
        );
    }
}
