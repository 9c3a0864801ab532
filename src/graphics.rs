//! Camera, asset handles and sound playback shared by both scenes.

use bevy::prelude::*;

/// Images used by the menu scene.
#[derive(Resource, Default, Clone)]
pub struct MenuAssets {
    pub background: Handle<Image>,
    pub start_button: Handle<Image>,
}

/// Images and sound clips used by the game scene.
///
/// Created by [`load_game_assets`] the first time the game scene starts; later
/// restarts reuse the cached handles.
#[derive(Resource, Default, Clone)]
pub struct GameAssets {
    pub background: Handle<Image>,
    pub ship: Handle<Image>,
    pub missile: Handle<Image>,
    pub alien: Handle<Image>,
    pub explosion: Handle<Image>,
    pub laser_sound: Handle<AudioSource>,
    pub explosion_sound: Handle<AudioSource>,
    pub bomb_sound: Handle<AudioSource>,
}

/// Setup camera for 2D rendering.
///
/// With the window sized to the playfield, the default `Camera2d` projection
/// maps one world unit to one logical pixel.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
    info!("[SETUP] Camera spawned");
}

/// Queue the menu images for loading.
pub fn load_menu_assets(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(MenuAssets {
        background: asset_server.load("images/menu_background.png"),
        start_button: asset_server.load("images/start.png"),
    });
}

/// Queue the game images and sounds for loading.
pub fn load_game_assets(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(GameAssets {
        background: asset_server.load("images/star_background.png"),
        ship: asset_server.load("images/space_ship.png"),
        missile: asset_server.load("images/missile.png"),
        alien: asset_server.load("images/alien.png"),
        explosion: asset_server.load("images/explosion.png"),
        laser_sound: asset_server.load("sounds/laser.ogg"),
        explosion_sound: asset_server.load("sounds/barrel_exploding.ogg"),
        bomb_sound: asset_server.load("sounds/bomb.ogg"),
    });
}

/// Fire-and-forget sound effect; the player entity despawns when playback ends.
pub fn play_sound(commands: &mut Commands, clip: &Handle<AudioSource>) {
    commands.spawn((AudioPlayer::new(clip.clone()), PlaybackSettings::DESPAWN));
}
