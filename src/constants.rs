//! Centralised gameplay constants.
//!
//! Every tuneable value lives here and is mirrored by a field of
//! [`crate::config::GameConfig`], which can override it from `assets/game.toml`.
//! Distances are playfield units (one unit per logical pixel of the 1920×1080
//! window); durations are seconds.

// ── Playfield ─────────────────────────────────────────────────────────────────

/// Width of the playfield. The ship wraps between x = 0 and x = PLAYFIELD_WIDTH.
pub const PLAYFIELD_WIDTH: f32 = 1920.0;

/// Height of the playfield. The ship wraps between y = 0 and y = PLAYFIELD_HEIGHT.
pub const PLAYFIELD_HEIGHT: f32 = 1080.0;

/// Clear colour shown behind both scenes (#AEA04B).
pub const CLEAR_COLOR_RGB: [u8; 3] = [0xAE, 0xA0, 0x4B];

// ── Ship ──────────────────────────────────────────────────────────────────────

/// Distance the ship travels per frame for each held direction key.
pub const SHIP_STEP: f32 = 15.0;

/// Ship spawn position (playfield coordinates, y down).
pub const SHIP_START_X: f32 = PLAYFIELD_WIDTH / 2.0;
pub const SHIP_START_Y: f32 = PLAYFIELD_HEIGHT - 100.0;

/// Half-extents of the ship's sensor collider.
pub const SHIP_HALF_WIDTH: f32 = 40.0;
pub const SHIP_HALF_HEIGHT: f32 = 40.0;

// ── Missiles ──────────────────────────────────────────────────────────────────

/// Distance a missile travels upward per frame outside power-up mode.
pub const MISSILE_STEP: f32 = 15.0;

/// Missile step multiplier applied while power-up mode is active.
pub const POWER_UP_MISSILE_MULTIPLIER: f32 = 2.0;

/// Radius of the missile's sensor collider.
pub const MISSILE_COLLIDER_RADIUS: f32 = 8.0;

// ── Aliens ────────────────────────────────────────────────────────────────────

/// Downward speed of every alien (units per second).
pub const ALIEN_FALL_SPEED: f32 = 200.0;

/// Vertical spawn position: just above the top edge.
pub const ALIEN_SPAWN_Y: f32 = -99.0;

/// Inclusive x range for freshly spawned or recycled aliens.
pub const ALIEN_SPAWN_X_MIN: i32 = 2;
pub const ALIEN_SPAWN_X_MAX: i32 = 1921;

/// Inclusive range of the horizontal drift magnitude; the sign is a coin flip.
pub const ALIEN_DRIFT_MIN: i32 = 2;
pub const ALIEN_DRIFT_MAX: i32 = 51;

/// Radius of the alien collider.
pub const ALIEN_COLLIDER_RADIUS: f32 = 40.0;

/// Replacement aliens spawned for every alien shot down.
pub const ALIENS_PER_KILL: u32 = 2;

// ── Power-up ──────────────────────────────────────────────────────────────────

/// Score at which power-up mode is active. Equality, not a lower bound.
pub const POWER_UP_SCORE: u32 = 15;

/// Lifetime of the "Power Up!" banner.
pub const POWER_UP_BANNER_SECS: f32 = 7.0;

/// Banner vertical position (playfield y of its centre line).
pub const POWER_UP_BANNER_Y: f32 = 100.0;

// ── Explosions ────────────────────────────────────────────────────────────────

/// Lifetime of the explosion sprite left behind by a shot-down alien.
pub const EXPLOSION_SECS: f32 = 0.5;

/// Uniform scale applied to the explosion sprite.
pub const EXPLOSION_SCALE: f32 = 0.3;

// ── Text ──────────────────────────────────────────────────────────────────────

pub const SCORE_FONT_SIZE: f32 = 65.0;
pub const POWER_UP_FONT_SIZE: f32 = 40.0;
pub const GAME_OVER_FONT_SIZE: f32 = 65.0;

/// Offset of the score text from the top-left corner.
pub const SCORE_TEXT_MARGIN: f32 = 10.0;

/// Vertical offset of the menu start control below the playfield centre.
pub const START_BUTTON_OFFSET_Y: f32 = 100.0;
