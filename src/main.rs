mod audio;
mod camera;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod level;
mod movement;
mod rewards;
mod ui;

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::window::WindowResolution;
use std::path::Path;

fn main() {
    let (config, source) = content::load_or_default(Path::new(content::CONFIG_PATH));

    let (r, g, b) = config.window.background;
    let primary_window = Window {
        title: config.window.title.clone(),
        resolution: WindowResolution::new(config.window.width, config.window.height),
        resizable: false,
        ..default()
    };

    let mut app = App::new();
    app.insert_resource(ClearColor(Color::srgb(r, g, b)))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(primary_window),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((
            core::CorePlugin,
            content::ContentPlugin::new(config, source),
            audio::AudioCuePlugin,
            level::LevelPlugin,
            movement::MovementPlugin,
            rewards::RewardsPlugin,
            camera::CameraPlugin,
            ui::UiPlugin,
        ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
