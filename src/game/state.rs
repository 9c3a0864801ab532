//! Game-scene components and resources.
//!
//! Systems that mutate this state live in the sibling modules:
//! - [`super::control`]: input, ship movement, missile firing and flight
//! - [`super::alien`]: alien spawn policy
//! - [`super::power_up`]: score-15 power-up mode
//! - [`super::combat`]: missile/alien and ship/alien collisions
//! - [`super::hud`]: score text and power-up banner

use crate::config::GameConfig;
use bevy::prelude::*;

// ── Components ─────────────────────────────────────────────────────────────────

/// Marker component for the player ship.
#[derive(Component)]
pub struct Ship;

/// Marker component for every falling alien.
#[derive(Component)]
pub struct Alien;

/// Marker component for a missile in flight.
#[derive(Component)]
pub struct Missile;

/// Marker component for the short-lived explosion sprite.
#[derive(Component)]
pub struct Explosion;

/// The "Score: N" text.
#[derive(Component)]
pub struct ScoreText;

/// Root of the "Power Up!" banner.
#[derive(Component)]
pub struct PowerUpBanner;

// ── Resources ──────────────────────────────────────────────────────────────────

/// Per-game session state; reset every time the game scene is entered.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    /// Aliens shot down this game.  Only ever increases.
    pub score: u32,
    /// Set by a ship/alien collision; every frame system is skipped while set.
    pub game_over: bool,
    /// Held between a fire-key press and its release so one press fires once.
    pub fire_lock: bool,
    /// The power-up banner has been shown this game.
    pub power_banner_shown: bool,
}

impl Session {
    /// Back to the state of a freshly entered scene.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Power-up mode is tied to one exact score, not a threshold.
    pub fn is_powered_up(&self, config: &GameConfig) -> bool {
        self.score == config.power_up_score
    }

    /// Count one shot-down alien and return the new score.
    pub fn record_kill(&mut self) -> u32 {
        self.score += 1;
        self.score
    }
}

/// Ship input for the current frame, derived from the keyboard.
///
/// [`super::control::keyboard_to_intent_system`] rewrites it every frame;
/// movement and firing systems only read it.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// The fire key is currently held.
    pub fire: bool,
}

/// Run condition: the current game has not ended yet.
pub fn session_live(session: Res<Session>) -> bool {
    !session.game_over
}
