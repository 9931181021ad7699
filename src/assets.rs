//! Static asset table
//!
//! Every visual the core asks for is identified by an [`AssetKey`]. The table
//! below owns the reference sizes that drive sprite geometry and targeter
//! hitboxes, so hit-testing never depends on what the renderer last drew.

use glam::Vec2;

use crate::consts::{X_BORDER, Y_BORDER};

/// Fixed set of visuals the core can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKey {
    BallFace,
    BallFaceClicked,
    BallFaceDestroyed,
    TargeterA,
    TargeterB,
    Background,
}

impl AssetKey {
    pub const ALL: [AssetKey; 6] = [
        AssetKey::BallFace,
        AssetKey::BallFaceClicked,
        AssetKey::BallFaceDestroyed,
        AssetKey::TargeterA,
        AssetKey::TargeterB,
        AssetKey::Background,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKey::BallFace => "face",
            AssetKey::BallFaceClicked => "face_clicked",
            AssetKey::BallFaceDestroyed => "face_destroyed",
            AssetKey::TargeterA => "squid1",
            AssetKey::TargeterB => "squid2",
            AssetKey::Background => "background",
        }
    }

    /// Reference (native) size in pixels, width x height
    pub fn native_size(&self) -> Vec2 {
        match self {
            AssetKey::BallFace | AssetKey::BallFaceClicked => Vec2::new(504.0, 594.0),
            AssetKey::BallFaceDestroyed => Vec2::new(512.0, 512.0),
            AssetKey::TargeterA => Vec2::new(200.0, 260.0),
            AssetKey::TargeterB => Vec2::new(240.0, 220.0),
            AssetKey::Background => Vec2::new(X_BORDER, Y_BORDER),
        }
    }

    pub fn is_targeter(&self) -> bool {
        matches!(self, AssetKey::TargeterA | AssetKey::TargeterB)
    }

    /// On-screen size of a targeter sprite (half the native size, whole pixels)
    pub fn targeter_size(&self) -> Vec2 {
        (self.native_size() / 2.0).floor()
    }
}

/// Axis-aligned rectangle in arena coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size / 2.0,
            size,
        }
    }

    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Inclusive containment on all four edges
    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.min.x && p.x <= max.x && p.y >= self.min.y && p.y <= max.y
    }
}

/// Where a sprite for `asset` lands when anchored at `center` with `radius`.
///
/// Faces are `2r` wide and keep the asset's aspect ratio; the image is shifted
/// up so the face sits over the ball. Targeters ignore the radius and are
/// centered at their half-size. The background covers the arena.
pub fn sprite_rect(asset: AssetKey, center: Vec2, radius: f32) -> Rect {
    match asset {
        AssetKey::BallFace | AssetKey::BallFaceClicked | AssetKey::BallFaceDestroyed => {
            let native = asset.native_size();
            let width = radius * 2.0;
            let height = (width * native.y / native.x).floor();
            Rect::new(
                Vec2::new(center.x - radius, center.y - radius / 2.0 - height / 4.0),
                Vec2::new(width, height),
            )
        }
        AssetKey::TargeterA | AssetKey::TargeterB => {
            Rect::from_center(center, asset.targeter_size())
        }
        AssetKey::Background => Rect::new(Vec2::ZERO, asset.native_size()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_rect_keeps_reference_aspect() {
        let rect = sprite_rect(AssetKey::BallFace, Vec2::new(300.0, 200.0), 50.0);
        assert_eq!(rect.size.x, 100.0);
        // 100 * 594 / 504 = 117.86 -> 117
        assert_eq!(rect.size.y, 117.0);
        assert_eq!(rect.min.x, 250.0);
        assert!((rect.min.y - (200.0 - 25.0 - 117.0 / 4.0)).abs() < 1e-4);
    }

    #[test]
    fn test_destroyed_face_uses_native_aspect() {
        let rect = sprite_rect(AssetKey::BallFaceDestroyed, Vec2::new(0.0, 0.0), 40.0);
        assert_eq!(rect.size, Vec2::new(80.0, 80.0));
    }

    #[test]
    fn test_targeter_rect_centered_at_half_size() {
        let rect = sprite_rect(AssetKey::TargeterA, Vec2::new(500.0, 500.0), 99.0);
        assert_eq!(rect.size, Vec2::new(100.0, 130.0));
        assert_eq!(rect.center(), Vec2::new(500.0, 500.0));
    }

    #[test]
    fn test_rect_contains_is_inclusive() {
        let rect = Rect::new(Vec2::new(10.0, 10.0), Vec2::new(10.0, 5.0));
        assert!(rect.contains(Vec2::new(10.0, 10.0)));
        assert!(rect.contains(Vec2::new(20.0, 15.0)));
        assert!(!rect.contains(Vec2::new(20.1, 15.0)));
        assert!(!rect.contains(Vec2::new(9.9, 12.0)));
    }
}
