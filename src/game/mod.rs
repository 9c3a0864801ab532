//! Game scene: ship, aliens, missiles, score and power-up mode.
//!
//! ## Sub-module layout
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`state`] | ECS components (`Ship`, `Alien`, `Missile`, …) and resources (`Session`, `ShipIntent`) |
//! | [`control`] | Keyboard → intent, ship movement with edge wrap, missile firing and flight |
//! | [`alien`] | Alien spawn policy (random x, random signed drift, fixed fall speed) |
//! | [`power_up`] | Score-15 power-up mode: banner, faster missiles, alien recycling |
//! | [`combat`] | Missile/alien hits and the ship/alien collision that ends the game |
//! | [`hud`] | Score text and power-up banner |
//!
//! ## Lifecycle
//!
//! `OnEnter(Playing)` runs, in order: [`reset_session`] (enter),
//! `load_game_assets` (assets needed; first visit only), [`start_game_scene`]
//! (start) and [`resume_physics`].  The frame systems form one chained `Update`
//! set gated by `in_state(Playing)` and [`session_live`].  Teardown happens on
//! `OnExit(GameOver)`, registered by [`crate::menu::MenuPlugin`].

pub mod alien;
pub mod combat;
pub mod control;
pub mod hud;
pub mod power_up;
pub mod state;

pub use alien::{roll_spawn_x, spawn_alien, spawn_random_aliens, AlienLaunch};
pub use combat::{missile_alien_hit_system, ship_alien_collision_system};
pub use control::{
    keyboard_to_intent_system, missile_advance_system, missile_fire_system, ship_movement_system,
    spawn_missile, steer,
};
pub use hud::{score_label, spawn_power_up_banner, spawn_score_text};
pub use power_up::power_up_system;
pub use state::{
    session_live, Alien, Explosion, Missile, PowerUpBanner, ScoreText, Session, Ship, ShipIntent,
};

use crate::config::GameConfig;
use crate::constants::{SHIP_HALF_HEIGHT, SHIP_HALF_WIDTH};
use crate::graphics::{load_game_assets, GameAssets};
use crate::menu::GameState;
use crate::scene::{despawn_after_system, GameSceneEntity};
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

/// Registers the game scene's resources, lifecycle and frame systems.
pub struct GameScenePlugin;

impl Plugin for GameScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameConfig>()
            .init_resource::<Session>()
            .init_resource::<ShipIntent>()
            .add_message::<CollisionEvent>()
            .add_systems(
                OnEnter(GameState::Playing),
                (
                    reset_session,
                    load_game_assets.run_if(not(resource_exists::<GameAssets>)),
                    start_game_scene,
                    resume_physics,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    keyboard_to_intent_system,
                    ship_movement_system,
                    missile_fire_system,
                    missile_advance_system,
                    missile_alien_hit_system,
                    // Sees this frame's score, so the banner tracks it without lag.
                    power_up_system,
                    ship_alien_collision_system,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing))
                    .run_if(session_live),
            )
            // Explosion and banner timers keep running behind the game-over prompt.
            .add_systems(Update, despawn_after_system);
    }
}

/// Collision types for this game: every body is kinematic, so
/// kinematic/kinematic pairs must be reported on top of the defaults.
pub(crate) fn kinematic_collision_types() -> ActiveCollisionTypes {
    ActiveCollisionTypes::default() | ActiveCollisionTypes::KINEMATIC_KINEMATIC
}

/// Score 0, game not over, fire lock released, banner not yet shown.
pub fn reset_session(mut session: ResMut<Session>, mut intent: ResMut<ShipIntent>) {
    session.reset();
    *intent = ShipIntent::default();
    info!("Game Scene");
}

/// Spawn the background, score text, ship and the first alien.
pub fn start_game_scene(
    mut commands: Commands,
    assets: Res<GameAssets>,
    config: Res<GameConfig>,
    session: Res<Session>,
) {
    let playfield = config.playfield();

    commands.spawn((
        Sprite {
            image: assets.background.clone(),
            custom_size: Some(Vec2::new(playfield.width, playfield.height)),
            ..default()
        },
        Transform::from_translation(playfield.to_world(playfield.center()).extend(-10.0)),
        GameSceneEntity,
    ));

    spawn_score_text(&mut commands, &config, session.score);

    let ship_pos = playfield.to_world(Vec2::new(config.ship_start_x, config.ship_start_y));
    commands.spawn((
        Ship,
        GameSceneEntity,
        Sprite::from_image(assets.ship.clone()),
        Transform::from_translation(ship_pos.extend(3.0)),
        RigidBody::KinematicPositionBased,
        Collider::cuboid(SHIP_HALF_WIDTH, SHIP_HALF_HEIGHT),
        Sensor,
        kinematic_collision_types(),
        ActiveEvents::COLLISION_EVENTS,
    ));

    spawn_random_aliens(&mut commands, &assets, &config, 1);
}

/// Re-enable the Rapier pipeline paused by the previous game's collision.
pub fn resume_physics(mut config: Query<&mut RapierConfiguration>) {
    for mut cfg in config.iter_mut() {
        cfg.physics_pipeline_active = true;
    }
}
