use alien_blaster::config;
use alien_blaster::constants::CLEAR_COLOR_RGB;
use alien_blaster::game::GameScenePlugin;
use alien_blaster::graphics;
use alien_blaster::menu::MenuPlugin;
use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_rapier2d::prelude::*;

/// Configure Rapier physics: aliens fall at a fixed velocity, never by gravity.
fn setup_physics_config(mut config: Query<&mut RapierConfiguration>) {
    for mut cfg in config.iter_mut() {
        cfg.gravity = Vec2::ZERO;
    }
}

fn main() {
    let [r, g, b] = CLEAR_COLOR_RGB;
    let game_config = config::load_game_config();
    let window_size = game_config.window_size();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Alien Blaster".into(),
                resolution: WindowResolution::new(window_size.x, window_size.y),
                // Playfield units map 1:1 onto logical pixels only at this size.
                resizable: false,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::srgb_u8(r, g, b)))
        .insert_resource(game_config)
        // pixels_per_meter(1.0): one Rapier unit per playfield unit, so
        // velocities read as playfield units per second.
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(1.0))
        // MenuPlugin registers GameState; it must come before GameScenePlugin.
        .add_plugins((MenuPlugin, GameScenePlugin))
        .add_systems(
            Startup,
            (graphics::setup_camera, setup_physics_config),
        )
        .run();
}
