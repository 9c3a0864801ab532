//! Collision outcomes, driven by Rapier `CollisionEvent` messages.
//!
//! | Pair            | Outcome                                                        |
//! |-----------------|----------------------------------------------------------------|
//! | missile + alien | both despawn, explosion, score + 1, two replacement aliens     |
//! | ship + alien    | both despawn, physics paused, session over → `GameOver` state  |
//!
//! Each system keeps its own message cursor, so both see every event.  The hit
//! system runs first; an alien it already removed is gone by the time the ship
//! system looks, so one alien never counts twice.

use super::alien::spawn_random_aliens;
use super::hud::refresh_score_text;
use super::state::{Alien, Explosion, Missile, ScoreText, Session, Ship};
use crate::config::GameConfig;
use crate::graphics::{play_sound, GameAssets};
use crate::menu::GameState;
use crate::scene::{DespawnAfter, GameSceneEntity};
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use std::collections::HashSet;

/// Order an event's entity pair as `(a, b)` where `a` matches `is_a` and `b`
/// matches `is_b`, or `None` if the pair is anything else.
fn match_pair(
    event: &CollisionEvent,
    is_a: impl Fn(Entity) -> bool,
    is_b: impl Fn(Entity) -> bool,
) -> Option<(Entity, Entity)> {
    let (e1, e2) = match event {
        CollisionEvent::Started(e1, e2, _) => (*e1, *e2),
        CollisionEvent::Stopped(..) => return None,
    };
    if is_a(e1) && is_b(e2) {
        Some((e1, e2))
    } else if is_a(e2) && is_b(e1) {
        Some((e2, e1))
    } else {
        None
    }
}

/// Missile/alien overlap: explosion, score, two new aliens.
#[allow(clippy::too_many_arguments)]
pub fn missile_alien_hit_system(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionEvent>,
    q_missiles: Query<(), With<Missile>>,
    q_aliens: Query<&Transform, With<Alien>>,
    mut score_text: Query<&mut Text, With<ScoreText>>,
    mut session: ResMut<Session>,
    assets: Res<GameAssets>,
    config: Res<GameConfig>,
) {
    let mut spent_missiles: HashSet<Entity> = HashSet::new();
    let mut downed_aliens: HashSet<Entity> = HashSet::new();

    for event in collision_events.read() {
        let Some((missile, alien)) = match_pair(
            event,
            |e| q_missiles.contains(e),
            |e| q_aliens.contains(e),
        ) else {
            continue;
        };
        if spent_missiles.contains(&missile) || downed_aliens.contains(&alien) {
            continue;
        }
        let Ok(alien_transform) = q_aliens.get(alien) else {
            continue;
        };
        spent_missiles.insert(missile);
        downed_aliens.insert(alien);

        commands.spawn((
            Explosion,
            GameSceneEntity,
            Sprite::from_image(assets.explosion.clone()),
            Transform::from_translation(alien_transform.translation)
                .with_scale(Vec3::splat(config.explosion_scale)),
            DespawnAfter::secs(config.explosion_secs),
        ));
        play_sound(&mut commands, &assets.explosion_sound);

        commands.entity(alien).despawn();
        commands.entity(missile).despawn();

        session.record_kill();
        spawn_random_aliens(&mut commands, &assets, &config, config.aliens_per_kill);
    }

    if !downed_aliens.is_empty() {
        refresh_score_text(&mut score_text, session.score);
    }
}

/// Ship/alien collision: end the game.
#[allow(clippy::too_many_arguments)]
pub fn ship_alien_collision_system(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionEvent>,
    q_ship: Query<(), With<Ship>>,
    q_aliens: Query<(), With<Alien>>,
    mut session: ResMut<Session>,
    mut next_state: ResMut<NextState<GameState>>,
    mut rapier_config: Query<&mut RapierConfiguration>,
    assets: Res<GameAssets>,
) {
    let hit = collision_events
        .read()
        .find_map(|event| match_pair(event, |e| q_ship.contains(e), |e| q_aliens.contains(e)));
    let Some((ship, alien)) = hit else {
        return;
    };
    // The rest of this frame's events belong to a world that is about to freeze.
    collision_events.clear();

    play_sound(&mut commands, &assets.bomb_sound);
    for mut cfg in rapier_config.iter_mut() {
        cfg.physics_pipeline_active = false;
    }
    commands.entity(alien).despawn();
    commands.entity(ship).despawn();

    session.game_over = true;
    next_state.set(GameState::GameOver);
    info!("Ship destroyed; final score {}", session.score);
}
