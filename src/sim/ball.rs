//! Bouncing ball entity

use glam::Vec2;
use rand::Rng;

use super::arena::Arena;
use crate::consts::*;

/// A bouncing face the player tries to save
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    /// Whole units per tick on each axis
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Spawn with uniformly random whole-unit position, velocity and radius
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let x = rng.random_range(BALL_SPAWN_X.0..=BALL_SPAWN_X.1);
        let y = rng.random_range(BALL_SPAWN_Y.0..=BALL_SPAWN_Y.1);
        let vx = rng.random_range(-BALL_MAX_SPEED..=BALL_MAX_SPEED);
        let vy = rng.random_range(-BALL_MAX_SPEED..=BALL_MAX_SPEED);
        let r = rng.random_range(BALL_MIN_RADIUS..=BALL_MAX_RADIUS);
        Self {
            pos: Vec2::new(x as f32, y as f32),
            vel: Vec2::new(vx as f32, vy as f32),
            radius: r as f32,
        }
    }

    /// Move by one tick of velocity (no clamping)
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Fold the ball back inside the arena after moving
    pub fn reflect_within(&mut self, arena: &Arena) {
        arena.reflect(&mut self.pos, &mut self.vel, self.radius);
    }

    /// Strict containment: a point exactly on the rim is a miss
    pub fn contains_point(&self, p: Vec2) -> bool {
        self.pos.distance_squared(p) < self.radius * self.radius
    }
}
