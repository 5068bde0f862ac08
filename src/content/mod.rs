//! Content domain: the RON configuration file and its loading.

mod data;
mod loader;
mod validation;


pub use data::{HudDef, LevelDef, MovementDef, PlatformerConfig, ViewportDef, WindowDef};
pub use loader::{load_config, parse_config};
pub use validation::{ConfigIssue, validate_config};

use bevy::prelude::*;
use std::path::Path;

/// Location of the configuration file, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/data/platformer.ron";

/// Where the active configuration came from, kept so the outcome can be
/// logged once the log plugin is running.
#[derive(Resource, Debug, Clone, Default)]
pub struct ConfigSource {
    pub path: String,
    pub errors: Vec<String>,
}

impl ConfigSource {
    pub fn used_defaults(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Load the configuration, falling back to the compiled-in defaults on any error.
pub fn load_or_default(path: &Path) -> (PlatformerConfig, ConfigSource) {
    let mut source = ConfigSource {
        path: path.display().to_string(),
        errors: Vec::new(),
    };

    match load_config(path) {
        Ok(config) => (config, source),
        Err(errors) => {
            source.errors = errors.iter().map(ToString::to_string).collect();
            (PlatformerConfig::default(), source)
        }
    }
}

pub struct ContentPlugin {
    config: PlatformerConfig,
    source: ConfigSource,
}

impl ContentPlugin {
    pub fn new(config: PlatformerConfig, source: ConfigSource) -> Self {
        Self { config, source }
    }
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .insert_resource(self.source.clone())
            .add_systems(Startup, report_config_source);
    }
}

fn report_config_source(source: Res<ConfigSource>) {
    if source.used_defaults() {
        for error in &source.errors {
            warn!("{}", error);
        }
        warn!(
            "Configuration at {} unusable, running with built-in defaults",
            source.path
        );
    } else {
        info!("Loaded configuration from {}", source.path);
    }
}
