//! Runtime gameplay configuration loaded from `assets/game.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`].  Before the app starts, [`load_game_config`] reads
//! `assets/game.toml` and replaces the defaults with the file's values.  Missing
//! keys fall back to the compile-time defaults, so a minimal TOML can override
//! just the values you care about.
//!
//! ## Usage in systems
//!
//! Add `config: Res<GameConfig>` to a system's parameter list and read values
//! with `config.ship_step`, `config.playfield()`, etc.

use crate::constants::*;
use crate::error::{require_ordered, require_positive, require_within, GameError, GameResult};
use crate::playfield::Playfield;
use bevy::prelude::*;
use serde::Deserialize;
use std::path::Path;

/// Default location of the optional configuration file.
pub const CONFIG_PATH: &str = "assets/game.toml";

/// Runtime-tunable gameplay configuration.
///
/// All fields default to the corresponding constant in `src/constants.rs`.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Playfield ─────────────────────────────────────────────────────────────
    pub playfield_width: f32,
    pub playfield_height: f32,

    // ── Ship ──────────────────────────────────────────────────────────────────
    pub ship_step: f32,
    pub ship_start_x: f32,
    pub ship_start_y: f32,

    // ── Missiles ──────────────────────────────────────────────────────────────
    pub missile_step: f32,
    pub power_up_missile_multiplier: f32,

    // ── Aliens ────────────────────────────────────────────────────────────────
    pub alien_fall_speed: f32,
    pub alien_spawn_y: f32,
    pub alien_spawn_x_min: i32,
    pub alien_spawn_x_max: i32,
    pub alien_drift_min: i32,
    pub alien_drift_max: i32,
    pub aliens_per_kill: u32,

    // ── Power-up ──────────────────────────────────────────────────────────────
    pub power_up_score: u32,
    pub power_up_banner_secs: f32,

    // ── Explosions ────────────────────────────────────────────────────────────
    pub explosion_secs: f32,
    pub explosion_scale: f32,

    // ── Text ──────────────────────────────────────────────────────────────────
    pub score_font_size: f32,
    pub power_up_font_size: f32,
    pub game_over_font_size: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            ship_step: SHIP_STEP,
            ship_start_x: SHIP_START_X,
            ship_start_y: SHIP_START_Y,
            missile_step: MISSILE_STEP,
            power_up_missile_multiplier: POWER_UP_MISSILE_MULTIPLIER,
            alien_fall_speed: ALIEN_FALL_SPEED,
            alien_spawn_y: ALIEN_SPAWN_Y,
            alien_spawn_x_min: ALIEN_SPAWN_X_MIN,
            alien_spawn_x_max: ALIEN_SPAWN_X_MAX,
            alien_drift_min: ALIEN_DRIFT_MIN,
            alien_drift_max: ALIEN_DRIFT_MAX,
            aliens_per_kill: ALIENS_PER_KILL,
            power_up_score: POWER_UP_SCORE,
            power_up_banner_secs: POWER_UP_BANNER_SECS,
            explosion_secs: EXPLOSION_SECS,
            explosion_scale: EXPLOSION_SCALE,
            score_font_size: SCORE_FONT_SIZE,
            power_up_font_size: POWER_UP_FONT_SIZE,
            game_over_font_size: GAME_OVER_FONT_SIZE,
        }
    }
}

impl GameConfig {
    /// Playfield bounds used for coordinate conversion and wrapping.
    pub fn playfield(&self) -> Playfield {
        Playfield::new(self.playfield_width, self.playfield_height)
    }

    /// Window size in logical pixels.
    ///
    /// The window is exactly one playfield, so one playfield unit is one UI
    /// pixel and the HUD offsets in [`crate::constants`] line up with it.
    pub fn window_size(&self) -> UVec2 {
        UVec2::new(
            self.playfield_width.round() as u32,
            self.playfield_height.round() as u32,
        )
    }

    /// Missile step for the current frame.
    pub fn missile_step_for(&self, powered_up: bool) -> f32 {
        if powered_up {
            self.missile_step * self.power_up_missile_multiplier
        } else {
            self.missile_step
        }
    }

    /// Parse a TOML document and validate the result.
    ///
    /// `origin` is only used to label errors.
    pub fn from_toml_str(contents: &str, origin: &str) -> GameResult<Self> {
        let config: GameConfig =
            toml::from_str(contents).map_err(|e| GameError::ConfigParse {
                path: origin.to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a configuration file.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> GameResult<Option<Self>> {
        let path = path.as_ref();
        let label = path.display().to_string();
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents, &label).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(GameError::ConfigRead {
                path: label,
                source,
            }),
        }
    }

    /// Reject values the game rules cannot work with.
    pub fn validate(&self) -> GameResult<()> {
        require_positive("playfield_width", self.playfield_width)?;
        require_positive("playfield_height", self.playfield_height)?;
        require_positive("ship_step", self.ship_step)?;
        require_within("ship_start_x", self.ship_start_x, self.playfield_width)?;
        require_within("ship_start_y", self.ship_start_y, self.playfield_height)?;
        require_positive("missile_step", self.missile_step)?;
        require_positive(
            "power_up_missile_multiplier",
            self.power_up_missile_multiplier,
        )?;
        require_positive("alien_fall_speed", self.alien_fall_speed)?;
        require_positive("power_up_banner_secs", self.power_up_banner_secs)?;
        require_positive("explosion_secs", self.explosion_secs)?;
        require_ordered(
            "alien_spawn_x_min",
            self.alien_spawn_x_min,
            self.alien_spawn_x_max,
        )?;
        require_ordered("alien_drift_min", self.alien_drift_min, self.alien_drift_max)?;
        Ok(())
    }
}

/// Load `assets/game.toml` over the compiled defaults.
///
/// Called from `main` before the app is built, so the menu scene's
/// `OnEnter` systems already see the final values.  That is before Bevy's log
/// subscriber exists, hence plain stderr output.  A missing file keeps the
/// defaults; read, parse and validation errors are reported and also keep them.
pub fn load_game_config() -> GameConfig {
    match GameConfig::load(CONFIG_PATH) {
        Ok(Some(loaded)) => {
            eprintln!("✓ Loaded game config from {CONFIG_PATH}");
            loaded
        }
        Ok(None) => {
            eprintln!("ℹ No {CONFIG_PATH} found; using compiled defaults");
            GameConfig::default()
        }
        Err(e) => {
            eprintln!("⚠ {e}; using compiled defaults");
            GameConfig::default()
        }
    }
}
