//! Playfield geometry: coordinate conversion and edge wrapping.
//!
//! Game rules use playfield coordinates: origin at the top-left corner, x to the
//! right, y **down**.  Bevy world space is y-up with the origin at the window
//! centre.  Entities keep their world-space `Transform` (the engine's source of
//! truth, synced to Rapier); rule systems convert through [`Playfield`].

use bevy::prelude::*;

/// Fixed-size logical coordinate space in which every entity moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Playfield point → Bevy world point.
    pub fn to_world(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x - self.width / 2.0, self.height / 2.0 - p.y)
    }

    /// Bevy world point → playfield point.
    pub fn to_playfield(&self, w: Vec2) -> Vec2 {
        Vec2::new(w.x + self.width / 2.0, self.height / 2.0 - w.y)
    }

    /// Playfield-space velocity (y down) → world-space velocity (y up).
    pub fn velocity_to_world(&self, v: Vec2) -> Vec2 {
        Vec2::new(v.x, -v.y)
    }

    /// Playfield centre.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Wrap the x coordinate to the opposite edge once it leaves `[0, width]`.
    pub fn wrap_x(&self, x: f32) -> f32 {
        wrap_axis(x, self.width)
    }

    /// Wrap the y coordinate to the opposite edge once it leaves `[0, height]`.
    pub fn wrap_y(&self, y: f32) -> f32 {
        wrap_axis(y, self.height)
    }

    /// True once a point has passed the bottom edge.
    pub fn is_below(&self, p: Vec2) -> bool {
        p.y > self.height
    }

    /// True once a point has passed the top edge.
    pub fn is_above(&self, p: Vec2) -> bool {
        p.y < 0.0
    }
}

/// `v < 0` jumps to `max`, `v > max` jumps to `0`; anything else is unchanged.
///
/// Both edges are inclusive, so `0` and `max` themselves are valid positions.
pub fn wrap_axis(v: f32, max: f32) -> f32 {
    if v < 0.0 {
        max
    } else if v > max {
        0.0
    } else {
        v
    }
}
