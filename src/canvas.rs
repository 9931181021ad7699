//! Draw contract between the simulation and the renderer
//!
//! The core never touches the GPU. Each frame it issues calls on a [`Canvas`];
//! the usual implementation is [`DrawList`], which records the calls in order
//! so the renderer (or a test) can consume them afterwards.

use glam::Vec2;

use crate::assets::{AssetKey, Rect};

/// Horizontal anchoring of a text position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Position is the top-left corner of the text
    Left,
    /// Position is the top-center of the text
    Center,
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Background,
    Sprite {
        asset: AssetKey,
        center: Vec2,
        radius: f32,
    },
    HitboxCircle {
        center: Vec2,
        radius: f32,
    },
    HitboxRect {
        rect: Rect,
    },
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        anchor: Anchor,
    },
}

/// Render collaborator used by the simulation and the menu screens
pub trait Canvas {
    /// Full-screen background image
    fn background(&mut self);
    /// Asset anchored at an entity's center and radius
    fn sprite(&mut self, asset: AssetKey, center: Vec2, radius: f32);
    fn hitbox_circle(&mut self, center: Vec2, radius: f32);
    fn hitbox_rect(&mut self, rect: Rect);
    fn text(&mut self, text: &str, pos: Vec2, size: f32, anchor: Anchor);
}

/// Ordered record of one frame's draw calls
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous frame, keeping the allocation
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All text strings drawn this frame, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Number of sprites drawn with the given asset
    pub fn count_sprites(&self, asset: AssetKey) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { asset: a, .. } if *a == asset))
            .count()
    }
}

impl Canvas for DrawList {
    fn background(&mut self) {
        self.commands.push(DrawCommand::Background);
    }

    fn sprite(&mut self, asset: AssetKey, center: Vec2, radius: f32) {
        self.commands.push(DrawCommand::Sprite {
            asset,
            center,
            radius,
        });
    }

    fn hitbox_circle(&mut self, center: Vec2, radius: f32) {
        self.commands
            .push(DrawCommand::HitboxCircle { center, radius });
    }

    fn hitbox_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::HitboxRect { rect });
    }

    fn text(&mut self, text: &str, pos: Vec2, size: f32, anchor: Anchor) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            size,
            anchor,
        });
    }
}
