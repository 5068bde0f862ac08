//! Validation for numeric constraints the level builder and HUD rely on.

use super::data::PlatformerConfig;

/// A single problem found in the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Push an issue when a value is not strictly positive.
macro_rules! check_positive {
    ($issues:expr, $field:expr, $value:expr) => {
        if !($value > 0.0) {
            $issues.push(ConfigIssue {
                field: $field,
                message: format!("must be positive, got {}", $value),
            });
        }
    };
}

/// Validate the whole configuration.
/// Returns a list of issues, empty if the configuration is usable.
pub fn validate_config(config: &PlatformerConfig) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();

    // Window
    if config.window.width == 0 || config.window.height == 0 {
        issues.push(ConfigIssue {
            field: "window",
            message: format!(
                "size must be non-zero, got {}x{}",
                config.window.width, config.window.height
            ),
        });
    }

    // Level: zero steps would never terminate the row loops
    let level = &config.level;
    check_positive!(issues, "level.tile_size", level.tile_size);
    check_positive!(issues, "level.crate_spacing", level.crate_spacing);
    check_positive!(issues, "level.coin_spacing", level.coin_spacing);
    if level.end_x <= level.start_x {
        issues.push(ConfigIssue {
            field: "level.end_x",
            message: format!(
                "must be greater than start_x ({}), got {}",
                level.start_x, level.end_x
            ),
        });
    }

    // Bodies
    check_positive!(issues, "player.size.0", config.player.size.0);
    check_positive!(issues, "player.size.1", config.player.size.1);
    check_positive!(issues, "coins.size.0", config.coins.size.0);
    check_positive!(issues, "coins.size.1", config.coins.size.1);

    // Viewport: margins must leave a dead zone
    let viewport = &config.viewport;
    let width = config.window.width as f32;
    let height = config.window.height as f32;
    if viewport.left_margin + viewport.right_margin >= width {
        issues.push(ConfigIssue {
            field: "viewport",
            message: format!(
                "horizontal margins ({} + {}) leave no room in a {} wide screen",
                viewport.left_margin, viewport.right_margin, width
            ),
        });
    }
    if viewport.bottom_margin + viewport.top_margin >= height {
        issues.push(ConfigIssue {
            field: "viewport",
            message: format!(
                "vertical margins ({} + {}) leave no room in a {} tall screen",
                viewport.bottom_margin, viewport.top_margin, height
            ),
        });
    }

    // HUD
    if config.hud.messages.is_empty() {
        issues.push(ConfigIssue {
            field: "hud.messages",
            message: "at least one message is required".to_string(),
        });
    }
    check_positive!(issues, "hud.rotation_interval", config.hud.rotation_interval);

    issues
}
