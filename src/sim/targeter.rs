//! Orbiting targeter ("squid") entity
//!
//! A targeter circles the ball in the same slot on a shrinking orbit. It does
//! not hold a reference to that ball; every query that needs the ball takes it
//! as an argument.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::PI;

use super::ball::Ball;
use crate::assets::{AssetKey, Rect};
use crate::consts::TARGETER_ORBIT_GAP;

/// Which of the two squid visuals a targeter uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargeterVariant {
    A,
    B,
}

impl TargeterVariant {
    pub fn asset(&self) -> AssetKey {
        match self {
            TargeterVariant::A => AssetKey::TargeterA,
            TargeterVariant::B => AssetKey::TargeterB,
        }
    }

    /// Half-width and half-height of the clickable box
    pub fn half_extents(&self) -> Vec2 {
        self.asset().targeter_size() / 2.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Targeter {
    /// Radians; x uses sin and y uses cos
    pub angle: f32,
    /// Radians per tick
    pub angular_speed: f32,
    /// Distance from the ball's center
    pub orbit: f32,
    /// Orbit lost per tick
    pub shrink_speed: f32,
    pub variant: TargeterVariant,
}

impl Targeter {
    /// Spawn around `ball`; bigger balls get faster spin and faster shrink
    pub fn random<R: Rng>(rng: &mut R, ball: &Ball) -> Self {
        let r = ball.radius;
        let spin = 0.2 * r / 500.0;
        let gap = rng.random_range(TARGETER_ORBIT_GAP.0..=TARGETER_ORBIT_GAP.1);
        let shrink_min = 0.1 * r * r / 1000.0;
        let shrink_max = r * r / 1000.0;
        let variant = if rng.random_bool(0.5) {
            TargeterVariant::A
        } else {
            TargeterVariant::B
        };
        Self {
            angle: rng.random_range(-PI..=PI),
            angular_speed: rng.random_range(-spin..=spin),
            orbit: r + gap as f32,
            shrink_speed: rng.random_range(shrink_min..=shrink_max),
            variant,
        }
    }

    /// Rotate and tighten the orbit by one tick
    pub fn advance(&mut self) {
        self.angle += self.angular_speed;
        self.orbit -= self.shrink_speed;
    }

    /// Where the squid is drawn relative to its ball
    pub fn visual_center(&self, ball: &Ball) -> Vec2 {
        ball.pos + Vec2::new(self.orbit * self.angle.sin(), self.orbit * self.angle.cos())
    }

    pub fn hitbox(&self, ball: &Ball) -> Rect {
        Rect::from_center(self.visual_center(ball), self.variant.half_extents() * 2.0)
    }

    /// Box test around the visual center, edges included
    pub fn contains_point(&self, p: Vec2, ball: &Ball) -> bool {
        self.hitbox(ball).contains(p)
    }

    /// The orbit has closed in past the ball's rim
    pub fn is_depleted(&self, ball: &Ball) -> bool {
        self.orbit < ball.radius
    }
}
