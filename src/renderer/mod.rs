//! wgpu rendering module
//!
//! The core records a frame as a [`DrawList`](crate::canvas::DrawList);
//! [`tessellate`] turns it into one flat triangle list that the
//! [`RenderState`] uploads and draws in a single pass.

pub mod pipeline;
pub mod shapes;
pub mod sprites;
pub mod text;
pub mod vertex;

pub use pipeline::RenderState;
pub use text::TextRenderer;
pub use vertex::Vertex;

use crate::assets::AssetKey;
use crate::canvas::DrawCommand;
use vertex::colors;

/// Hitbox outline width in logical pixels
const HITBOX_LINE: f32 = 1.0;

/// Convert recorded draw calls into triangles, preserving draw order
pub fn tessellate(commands: &[DrawCommand], text: &mut TextRenderer) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for command in commands {
        match command {
            DrawCommand::Background => {
                vertices.extend(sprites::sprite(AssetKey::Background, glam::Vec2::ZERO, 0.0));
            }
            DrawCommand::Sprite {
                asset,
                center,
                radius,
            } => vertices.extend(sprites::sprite(*asset, *center, *radius)),
            DrawCommand::HitboxCircle { center, radius } => vertices.extend(shapes::ring(
                *center,
                (radius - HITBOX_LINE).max(0.0),
                *radius,
                colors::HITBOX,
                shapes::segments_for(*radius),
            )),
            DrawCommand::HitboxRect { rect } => {
                vertices.extend(shapes::rect_outline(*rect, HITBOX_LINE, colors::HITBOX));
            }
            DrawCommand::Text {
                text: s,
                pos,
                size,
                anchor,
            } => vertices.extend(text.layout(s, *pos, *size, *anchor, colors::WHITE)),
        }
    }
    vertices
}
