//! Power-up mode: active while the score equals `power_up_score` exactly.
//!
//! While active:
//! - the "Power Up!" banner is shown once and removes itself after
//!   `power_up_banner_secs`;
//! - missiles fly at the multiplied step (see
//!   [`super::control::missile_advance_system`]);
//! - aliens that fall past the bottom edge are moved back above the top edge at
//!   a new random x instead of falling away.
//!
//! As soon as the score moves past the power-up score the banner is removed,
//! whether or not its timer has run out.

use super::alien::roll_spawn_x;
use super::hud::spawn_power_up_banner;
use super::state::{Alien, PowerUpBanner, Session};
use crate::config::GameConfig;
use bevy::prelude::*;

pub fn power_up_system(
    mut commands: Commands,
    mut session: ResMut<Session>,
    config: Res<GameConfig>,
    banners: Query<Entity, With<PowerUpBanner>>,
    mut aliens: Query<&mut Transform, With<Alien>>,
) {
    if !session.is_powered_up(&config) {
        for entity in banners.iter() {
            commands.entity(entity).despawn();
        }
        return;
    }

    if !session.power_banner_shown {
        session.power_banner_shown = true;
        spawn_power_up_banner(&mut commands, &config);
        info!("Power-up active at score {}", session.score);
    }

    let playfield = config.playfield();
    let mut rng = rand::thread_rng();
    for mut transform in aliens.iter_mut() {
        let pos = playfield.to_playfield(transform.translation.truncate());
        if playfield.is_below(pos) {
            let respawn = Vec2::new(roll_spawn_x(&mut rng, &config), config.alien_spawn_y);
            let world = playfield.to_world(respawn);
            transform.translation.x = world.x;
            transform.translation.y = world.y;
        }
    }
}
