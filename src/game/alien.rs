//! Alien spawn policy.
//!
//! Every alien appears just above the top edge at a random x, falls at a fixed
//! speed and drifts sideways at a random speed whose sign is a coin flip.  The
//! falling itself is Rapier's job (`KinematicVelocityBased`); the power-up
//! recycling lives in [`super::power_up`].

use super::state::Alien;
use super::kinematic_collision_types;
use crate::config::GameConfig;
use crate::constants::ALIEN_COLLIDER_RADIUS;
use crate::graphics::GameAssets;
use crate::scene::GameSceneEntity;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::Rng;

/// Randomised starting parameters of one alien.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlienLaunch {
    /// Playfield x of the spawn point.
    pub x: f32,
    /// Horizontal speed; negative drifts left.
    pub drift: f32,
}

impl AlienLaunch {
    /// Draw x and drift according to the configured ranges.
    pub fn roll(rng: &mut impl Rng, config: &GameConfig) -> Self {
        let x = roll_spawn_x(rng, config);
        let magnitude = rng.gen_range(config.alien_drift_min..=config.alien_drift_max) as f32;
        let drift = if rng.gen_bool(0.5) {
            magnitude
        } else {
            -magnitude
        };
        Self { x, drift }
    }

    /// Spawn point in playfield coordinates.
    pub fn position(&self, config: &GameConfig) -> Vec2 {
        Vec2::new(self.x, config.alien_spawn_y)
    }

    /// Velocity in playfield coordinates (y down).
    pub fn velocity(&self, config: &GameConfig) -> Vec2 {
        Vec2::new(self.drift, config.alien_fall_speed)
    }
}

/// Random spawn x; shared by fresh spawns and power-up recycling.
pub fn roll_spawn_x(rng: &mut impl Rng, config: &GameConfig) -> f32 {
    rng.gen_range(config.alien_spawn_x_min..=config.alien_spawn_x_max) as f32
}

/// Spawn one alien with the given launch parameters.
pub fn spawn_alien(
    commands: &mut Commands,
    assets: &GameAssets,
    config: &GameConfig,
    launch: AlienLaunch,
) -> Entity {
    let playfield = config.playfield();
    let position = playfield.to_world(launch.position(config));
    let velocity = playfield.velocity_to_world(launch.velocity(config));

    commands
        .spawn((
            Alien,
            GameSceneEntity,
            Sprite::from_image(assets.alien.clone()),
            Transform::from_translation(position.extend(1.0)),
            RigidBody::KinematicVelocityBased,
            Velocity::linear(velocity),
            Collider::ball(ALIEN_COLLIDER_RADIUS),
            kinematic_collision_types(),
            ActiveEvents::COLLISION_EVENTS,
        ))
        .id()
}

/// Spawn `count` aliens with freshly rolled launch parameters.
pub fn spawn_random_aliens(
    commands: &mut Commands,
    assets: &GameAssets,
    config: &GameConfig,
    count: u32,
) {
    let mut rng = rand::thread_rng();
    for _ in 0..count {
        spawn_alien(commands, assets, config, AlienLaunch::roll(&mut rng, config));
    }
}
