//! Ship input, movement, missile firing and missile flight.
//!
//! ## Pipeline (runs in order every `Update` frame while playing)
//!
//! 1. [`keyboard_to_intent_system`]: arrow keys + Space → [`ShipIntent`].
//! 2. [`ship_movement_system`]: moves the ship one step per held direction, wrapping at the edges.
//! 3. [`missile_fire_system`]: one missile per fire-key press edge.
//! 4. [`missile_advance_system`]: moves every missile up; drops the ones past the top edge.

use super::kinematic_collision_types;
use super::state::{Missile, Session, Ship, ShipIntent};
use crate::config::GameConfig;
use crate::constants::MISSILE_COLLIDER_RADIUS;
use crate::graphics::{play_sound, GameAssets};
use crate::playfield::Playfield;
use crate::scene::GameSceneEntity;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

// ── Step 1: Keyboard → Intent ─────────────────────────────────────────────────

/// Translate the arrow keys and Space into [`ShipIntent`].
pub fn keyboard_to_intent_system(keys: Res<ButtonInput<KeyCode>>, mut intent: ResMut<ShipIntent>) {
    *intent = ShipIntent {
        up: keys.pressed(KeyCode::ArrowUp),
        down: keys.pressed(KeyCode::ArrowDown),
        left: keys.pressed(KeyCode::ArrowLeft),
        right: keys.pressed(KeyCode::ArrowRight),
        fire: keys.pressed(KeyCode::Space),
    };
}

// ── Step 2: Ship movement ─────────────────────────────────────────────────────

/// Move a playfield position one `step` per held direction.
///
/// Directions apply in the order up, down, left, right, each followed by its
/// own wrap check, so the result always lies inside the playfield.
pub fn steer(pos: Vec2, intent: &ShipIntent, step: f32, playfield: &Playfield) -> Vec2 {
    let mut p = pos;
    if intent.up {
        p.y = playfield.wrap_y(p.y - step);
    }
    if intent.down {
        p.y = playfield.wrap_y(p.y + step);
    }
    if intent.left {
        p.x = playfield.wrap_x(p.x - step);
    }
    if intent.right {
        p.x = playfield.wrap_x(p.x + step);
    }
    p
}

/// Apply [`ShipIntent`] to the ship's transform.
pub fn ship_movement_system(
    mut q: Query<&mut Transform, With<Ship>>,
    intent: Res<ShipIntent>,
    config: Res<GameConfig>,
) {
    let Ok(mut transform) = q.single_mut() else {
        return;
    };
    let playfield = config.playfield();
    let pos = playfield.to_playfield(transform.translation.truncate());
    let moved = steer(pos, &intent, config.ship_step, &playfield);
    if moved != pos {
        let world = playfield.to_world(moved);
        transform.translation.x = world.x;
        transform.translation.y = world.y;
    }
}

// ── Step 3: Firing ────────────────────────────────────────────────────────────

/// Fire one missile per press of the fire key.
///
/// The fire lock is set when a missile leaves and cleared only once the key is
/// released, so holding Space never fires a second missile.
pub fn missile_fire_system(
    mut commands: Commands,
    q_ship: Query<&Transform, With<Ship>>,
    intent: Res<ShipIntent>,
    mut session: ResMut<Session>,
    assets: Res<GameAssets>,
) {
    if !intent.fire {
        if session.fire_lock {
            session.fire_lock = false;
        }
        return;
    }
    if session.fire_lock {
        return;
    }
    let Ok(ship) = q_ship.single() else {
        return;
    };

    session.fire_lock = true;
    spawn_missile(&mut commands, &assets, ship.translation.truncate());
    play_sound(&mut commands, &assets.laser_sound);
}

/// Spawn a missile at a world-space position.
pub fn spawn_missile(commands: &mut Commands, assets: &GameAssets, world_pos: Vec2) -> Entity {
    commands
        .spawn((
            Missile,
            GameSceneEntity,
            Sprite::from_image(assets.missile.clone()),
            Transform::from_translation(world_pos.extend(2.0)),
            RigidBody::KinematicPositionBased,
            Collider::ball(MISSILE_COLLIDER_RADIUS),
            // Sensor: reports the overlap without pushing the alien around.
            Sensor,
            kinematic_collision_types(),
            ActiveEvents::COLLISION_EVENTS,
        ))
        .id()
}

// ── Step 4: Missile flight ────────────────────────────────────────────────────

/// Move every missile up by the frame's missile step; despawn any that end up
/// above the top edge.  The step doubles while power-up mode is active.
pub fn missile_advance_system(
    mut commands: Commands,
    mut q: Query<(Entity, &mut Transform), With<Missile>>,
    session: Res<Session>,
    config: Res<GameConfig>,
) {
    let playfield = config.playfield();
    let step = config.missile_step_for(session.is_powered_up(&config));

    for (entity, mut transform) in q.iter_mut() {
        let mut pos = playfield.to_playfield(transform.translation.truncate());
        pos.y -= step;
        if playfield.is_above(pos) {
            commands.entity(entity).despawn();
        } else {
            transform.translation.y = playfield.to_world(pos).y;
        }
    }
}
