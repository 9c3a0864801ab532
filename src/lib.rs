//! Alien Blaster: a two-scene arcade shooter on Bevy and Rapier.
//!
//! The menu scene waits for a click on its start control; the game scene has
//! the player steer a wrapping ship, shoot falling aliens one press at a time,
//! and enter a power-up mode at exactly 15 points.  Colliding with an alien ends
//! the game behind a "click to play again" prompt.

pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod graphics;
pub mod menu;
pub mod playfield;
pub mod scene;
