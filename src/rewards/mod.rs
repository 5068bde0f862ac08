//! Rewards domain: coin pickup and score.

mod economy;
mod pickups;


pub use economy::{CoinCollectedEvent, Score};

use bevy::prelude::*;

use crate::core::FrameSet;
use crate::rewards::economy::award_coins;
use crate::rewards::pickups::collect_coins;

pub struct RewardsPlugin;

impl Plugin for RewardsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Score>()
            .add_message::<CoinCollectedEvent>()
            .add_systems(
                Update,
                (collect_coins, award_coins).chain().in_set(FrameSet::Pickups),
            );
    }
}
