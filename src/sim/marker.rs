//! Short-lived feedback left behind by a click or a destroyed ball

use glam::Vec2;

use super::ball::Ball;
use crate::assets::AssetKey;
use crate::consts::MARKER_LIFETIME;

/// What happened to the ball the marker was copied from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Clicked,
    Destroyed,
}

impl MarkerKind {
    pub fn asset(&self) -> AssetKey {
        match self {
            MarkerKind::Clicked => AssetKey::BallFaceClicked,
            MarkerKind::Destroyed => AssetKey::BallFaceDestroyed,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FadingMarker {
    pub kind: MarkerKind,
    pub pos: Vec2,
    pub radius: f32,
    /// Ticks left before the marker disappears
    pub ttl: i32,
}

impl FadingMarker {
    /// Snapshot the ball's position and size
    pub fn new(kind: MarkerKind, ball: &Ball) -> Self {
        Self {
            kind,
            pos: ball.pos,
            radius: ball.radius,
            ttl: MARKER_LIFETIME,
        }
    }

    /// Spend one tick of lifetime. Returns false once the timer has run out,
    /// without counting below zero.
    pub fn tick(&mut self) -> bool {
        if self.ttl > 0 {
            self.ttl -= 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_copies_ball() {
        let ball = Ball::new(Vec2::new(12.0, 34.0), Vec2::new(1.0, 1.0), 56.0);
        let marker = FadingMarker::new(MarkerKind::Destroyed, &ball);
        assert_eq!(marker.pos, ball.pos);
        assert_eq!(marker.radius, 56.0);
        assert_eq!(marker.ttl, 10);
        assert_eq!(marker.kind.asset(), AssetKey::BallFaceDestroyed);
    }

    #[test]
    fn test_marker_alive_for_exactly_lifetime_ticks() {
        let ball = Ball::new(Vec2::ZERO, Vec2::ZERO, 20.0);
        let mut marker = FadingMarker::new(MarkerKind::Clicked, &ball);
        let alive = (0..10).filter(|_| marker.tick()).count();
        assert_eq!(alive, 10);
        assert!(!marker.tick());
        assert!(!marker.tick());
        assert_eq!(marker.ttl, 0);
    }
}
