//! Procedural sprites
//!
//! Every asset key is drawn as a handful of vector shapes filling the
//! asset's sprite rect, so the game ships without image files.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::assets::{AssetKey, Rect, sprite_rect};

/// Vertices for `asset` anchored at an entity's center and radius
pub fn sprite(asset: AssetKey, center: Vec2, radius: f32) -> Vec<Vertex> {
    let rect = sprite_rect(asset, center, radius);
    match asset {
        AssetKey::BallFace => face(rect),
        AssetKey::BallFaceClicked => {
            let mut v = face(rect);
            v.extend(shapes::ellipse(
                rect.center(),
                rect.size / 2.0,
                colors::RESCUED,
                shapes::segments_for(radius),
            ));
            v
        }
        AssetKey::BallFaceDestroyed => destroyed_face(rect),
        AssetKey::TargeterA => squid(rect, colors::SQUID_A, 5),
        AssetKey::TargeterB => squid(rect, colors::SQUID_B, 4),
        AssetKey::Background => background(rect),
    }
}

fn face(rect: Rect) -> Vec<Vertex> {
    let c = rect.center();
    let half = rect.size / 2.0;
    let segments = shapes::segments_for(half.x);
    let mut v = Vec::new();

    // Hair behind the upper half of the head
    v.extend(shapes::ellipse(
        c - Vec2::new(0.0, half.y * 0.15),
        Vec2::new(half.x, half.y * 0.85),
        colors::HAIR,
        segments,
    ));
    v.extend(shapes::ellipse(
        c + Vec2::new(0.0, half.y * 0.1),
        half * Vec2::new(0.9, 0.85),
        colors::SKIN,
        segments,
    ));

    let eye_r = (half.x * 0.1).max(1.5);
    for side in [-1.0, 1.0] {
        let eye = c + Vec2::new(side * half.x * 0.35, -half.y * 0.05);
        v.extend(shapes::circle(eye, eye_r, colors::INK, 12));
    }
    v.extend(shapes::ellipse(
        c + Vec2::new(0.0, half.y * 0.45),
        Vec2::new(half.x * 0.3, half.y * 0.08),
        colors::MOUTH,
        16,
    ));
    v
}

fn destroyed_face(rect: Rect) -> Vec<Vertex> {
    let c = rect.center();
    let half = rect.size / 2.0;
    let mut v = shapes::ellipse(c, half * 0.9, colors::DESTROYED_SKIN, shapes::segments_for(half.x));

    let arm = half * 0.6;
    let width = (half.x * 0.15).max(2.0);
    v.extend(shapes::line(c - arm, c + arm, width, colors::DESTROYED_MARK));
    v.extend(shapes::line(
        c + Vec2::new(-arm.x, arm.y),
        c + Vec2::new(arm.x, -arm.y),
        width,
        colors::DESTROYED_MARK,
    ));
    v
}

fn squid(rect: Rect, color: [f32; 4], tentacles: u32) -> Vec<Vertex> {
    let size = rect.size;
    let top = rect.min;
    let mut v = Vec::new();

    // Pointed mantle over an oval body
    let body_center = top + Vec2::new(size.x * 0.5, size.y * 0.45);
    v.extend(shapes::triangle(
        top + Vec2::new(size.x * 0.5, 0.0),
        top + Vec2::new(size.x * 0.1, size.y * 0.35),
        top + Vec2::new(size.x * 0.9, size.y * 0.35),
        color,
    ));
    v.extend(shapes::ellipse(
        body_center,
        Vec2::new(size.x * 0.4, size.y * 0.22),
        color,
        24,
    ));

    // Tentacles hang from the body to the bottom edge
    let width = (size.x * 0.06).max(2.0);
    for i in 0..tentacles {
        let t = (i as f32 + 0.5) / tentacles as f32;
        let root = top + Vec2::new(size.x * (0.2 + 0.6 * t), size.y * 0.6);
        let tip = top + Vec2::new(size.x * (0.1 + 0.8 * t), size.y);
        v.extend(shapes::line(root, tip, width, color));
    }

    let eye_r = (size.x * 0.07).max(1.5);
    for side in [-1.0, 1.0] {
        let eye = body_center + Vec2::new(side * size.x * 0.15, 0.0);
        v.extend(shapes::circle(eye, eye_r, colors::WHITE, 12));
        v.extend(shapes::circle(eye, eye_r * 0.5, colors::INK, 8));
    }
    v
}

fn background(rect: Rect) -> Vec<Vertex> {
    let sand_height = rect.size.y * 0.12;
    let sky = Rect::new(rect.min, rect.size - Vec2::new(0.0, sand_height));
    let sand = Rect::new(
        Vec2::new(rect.min.x, rect.max().y - sand_height),
        Vec2::new(rect.size.x, sand_height),
    );
    let mut v = shapes::gradient_rect(sky, colors::SKY_TOP, colors::SKY_BOTTOM);
    v.extend(shapes::rect(sand, colors::SAND));
    v
}
