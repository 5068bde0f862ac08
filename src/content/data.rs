//! Data definitions for the RON configuration file.
//!
//! These structs mirror assets/data/platformer.ron. Every section has a
//! `Default` that matches the shipped file, so the game also runs with no
//! file present.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::level::CoinTier;

// ============================================================================
// Root
// ============================================================================

#[derive(Resource, Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PlatformerConfig {
    pub window: WindowDef,
    pub movement: MovementDef,
    pub viewport: ViewportDef,
    pub level: LevelDef,
    pub player: PlayerDef,
    pub coins: CoinDef,
    pub hud: HudDef,
    pub audio: AudioDef,
}

// ============================================================================
// Window
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WindowDef {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Clear colour as sRGB components in 0..=1
    pub background: (f32, f32, f32),
}

impl Default for WindowDef {
    fn default() -> Self {
        Self {
            title: "Platformer".to_string(),
            width: 1000,
            height: 650,
            // CSS cornflower blue
            background: (0.392, 0.584, 0.929),
        }
    }
}

// ============================================================================
// Movement
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementDef {
    /// Horizontal speed in pixels per second
    pub move_speed: f32,
    /// Vertical velocity applied on jump, pixels per second
    pub jump_speed: f32,
    /// Downward acceleration, pixels per second squared
    pub gravity: f32,
    /// How far below the feet a surface still counts as ground
    pub ground_probe: f32,
}

impl Default for MovementDef {
    fn default() -> Self {
        Self {
            move_speed: 480.0,
            jump_speed: 900.0,
            gravity: 2400.0,
            ground_probe: 2.0,
        }
    }
}

// ============================================================================
// Viewport
// ============================================================================

/// Minimum distance kept between the player and each screen edge.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ViewportDef {
    pub left_margin: f32,
    pub right_margin: f32,
    pub bottom_margin: f32,
    pub top_margin: f32,
}

impl Default for ViewportDef {
    fn default() -> Self {
        Self {
            left_margin: 150.0,
            right_margin: 150.0,
            bottom_margin: 50.0,
            top_margin: 100.0,
        }
    }
}

// ============================================================================
// Level
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LevelDef {
    pub start_x: f32,
    pub end_x: f32,
    pub tile_size: f32,
    /// Side walls are stacked up to (but not including) this height
    pub wall_height: f32,
    /// Centre height of the ground row
    pub ground_y: f32,
    pub crate_start_x: f32,
    pub crate_spacing: f32,
    /// Centre height shared by crates and coins
    pub item_row_y: f32,
    pub coin_rows: Vec<CoinRowDef>,
    pub coin_spacing: f32,
}

impl Default for LevelDef {
    fn default() -> Self {
        Self {
            start_x: 0.0,
            end_x: 1250.0,
            tile_size: 64.0,
            wall_height: 2000.0,
            ground_y: 32.0,
            crate_start_x: 256.0,
            crate_spacing: 256.0,
            item_row_y: 96.0,
            coin_rows: vec![
                CoinRowDef {
                    tier: CoinTier::Bronze,
                    start_x: 448.0,
                },
                CoinRowDef {
                    tier: CoinTier::Silver,
                    start_x: 384.0,
                },
                CoinRowDef {
                    tier: CoinTier::Gold,
                    start_x: 320.0,
                },
            ],
            coin_spacing: 256.0,
        }
    }
}

/// One repeating row of coins of a single tier.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CoinRowDef {
    pub tier: CoinTier,
    pub start_x: f32,
}

// ============================================================================
// Bodies
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerDef {
    pub spawn: (f32, f32),
    pub size: (f32, f32),
}

impl Default for PlayerDef {
    fn default() -> Self {
        Self {
            spawn: (150.0, 107.0),
            size: (56.0, 86.0),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CoinDef {
    pub size: (f32, f32),
}

impl Default for CoinDef {
    fn default() -> Self {
        Self { size: (40.0, 40.0) }
    }
}

// ============================================================================
// HUD
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HudDef {
    pub messages: Vec<String>,
    /// Seconds a message stays up before the next one is shown
    pub rotation_interval: f32,
    pub score_font_size: f32,
    pub message_font_size: f32,
    /// Distance of the score text from the bottom-left corner
    pub score_offset: (f32, f32),
    /// Distance of the message text from the bottom-left corner
    pub message_offset: (f32, f32),
}

impl Default for HudDef {
    fn default() -> Self {
        Self {
            messages: vec![
                "message one".to_string(),
                "here is message two".to_string(),
                "oh hey, it's message three".to_string(),
            ],
            rotation_interval: 3.0,
            score_font_size: 18.0,
            message_font_size: 64.0,
            score_offset: (10.0, 10.0),
            message_offset: (10.0, 300.0),
        }
    }
}

// ============================================================================
// Audio
// ============================================================================

/// Sound paths, relative to the assets/ directory.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AudioDef {
    pub jump: String,
    pub coin: String,
}

impl Default for AudioDef {
    fn default() -> Self {
        Self {
            jump: "sounds/jump1.wav".to_string(),
            coin: "sounds/coin1.wav".to_string(),
        }
    }
}
