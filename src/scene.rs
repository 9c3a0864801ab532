//! Scene lifecycle plumbing shared by the menu and game scenes.
//!
//! A scene is a Bevy [`Plugin`] bound to one [`crate::menu::GameState`] variant:
//!
//! | Lifecycle step   | Bevy schedule                                  |
//! |------------------|------------------------------------------------|
//! | enter            | first system of the `OnEnter(state)` chain      |
//! | assets needed    | asset-loading system in the same chain          |
//! | start            | entity-spawning systems at the end of the chain |
//! | frame            | `Update` set gated by `in_state(state)`         |
//! | teardown         | [`despawn_scene`] on `OnExit`                   |
//!
//! Every entity a scene creates carries that scene's marker component so
//! teardown can find it.  Delayed cleanups (explosions, the power-up banner) are
//! [`DespawnAfter`] components rather than engine timers, so tearing the scene
//! down cancels them for free.

use bevy::prelude::*;
use std::time::Duration;

/// Tags everything spawned by the menu scene.
#[derive(Component, Debug, Default)]
pub struct MenuSceneEntity;

/// Tags everything spawned by the game scene, including the game-over overlay.
#[derive(Component, Debug, Default)]
pub struct GameSceneEntity;

/// Despawn every entity carrying scene marker `T`.
pub fn despawn_scene<T: Component>(mut commands: Commands, query: Query<Entity, With<T>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Despawns its entity once the timer runs out.
#[derive(Component, Debug)]
pub struct DespawnAfter(pub Timer);

impl DespawnAfter {
    pub fn secs(secs: f32) -> Self {
        Self(Timer::from_seconds(secs, TimerMode::Once))
    }

    /// Time left before the entity is removed.
    pub fn remaining(&self) -> Duration {
        self.0.remaining()
    }
}

/// Tick every [`DespawnAfter`] and remove the entities whose timer finished.
pub fn despawn_after_system(
    mut commands: Commands,
    mut query: Query<(Entity, &mut DespawnAfter)>,
    time: Res<Time>,
) {
    for (entity, mut after) in query.iter_mut() {
        after.0.tick(time.delta());
        if after.0.just_finished() {
            commands.entity(entity).despawn();
        }
    }
}
