//! Rectangular arena bounds and wall reflection

use glam::Vec2;

use crate::consts::{X_BORDER, Y_BORDER};

/// Playfield spanning `[0, width] x [0, height]`, y growing downward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: X_BORDER,
            height: Y_BORDER,
        }
    }
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Mirror a circle back inside the arena.
    ///
    /// Each edge is checked independently, in the order right, bottom, left,
    /// top. Touching an edge counts as crossing it. The overshoot is folded
    /// back by twice its depth and the matching velocity component flips, so
    /// a ball in a corner can bounce off two walls in one tick.
    pub fn reflect(&self, pos: &mut Vec2, vel: &mut Vec2, radius: f32) {
        if pos.x + radius >= self.width {
            pos.x -= 2.0 * (pos.x + radius - self.width);
            vel.x = -vel.x;
        }
        if pos.y + radius >= self.height {
            pos.y -= 2.0 * (pos.y + radius - self.height);
            vel.y = -vel.y;
        }
        if pos.x - radius <= 0.0 {
            pos.x += 2.0 * (radius - pos.x);
            vel.x = -vel.x;
        }
        if pos.y - radius <= 0.0 {
            pos.y += 2.0 * (radius - pos.y);
            vel.y = -vel.y;
        }
    }

    /// Whether the whole circle lies within the arena (edges included)
    pub fn contains_circle(&self, pos: Vec2, radius: f32) -> bool {
        pos.x - radius >= 0.0
            && pos.x + radius <= self.width
            && pos.y - radius >= 0.0
            && pos.y + radius <= self.height
    }
}
