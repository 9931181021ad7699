//! Vertex types for 2D rendering
//!
//! Positions are in logical arena pixels until `RenderState` maps them to clip space.

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Palette for procedural sprites and overlays
pub mod colors {
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const INK: [f32; 4] = [0.08, 0.06, 0.06, 1.0];
    pub const HITBOX: [f32; 4] = [1.0, 0.15, 0.15, 1.0];

    pub const SKIN: [f32; 4] = [0.96, 0.80, 0.66, 1.0];
    pub const HAIR: [f32; 4] = [0.12, 0.10, 0.09, 1.0];
    pub const MOUTH: [f32; 4] = [0.70, 0.25, 0.25, 1.0];
    /// Flash over a face that was just clicked
    pub const RESCUED: [f32; 4] = [0.35, 0.95, 0.45, 0.55];
    pub const DESTROYED_SKIN: [f32; 4] = [0.55, 0.55, 0.58, 1.0];
    pub const DESTROYED_MARK: [f32; 4] = [0.85, 0.10, 0.10, 1.0];

    pub const SQUID_A: [f32; 4] = [0.93, 0.35, 0.55, 1.0];
    pub const SQUID_B: [f32; 4] = [0.55, 0.40, 0.90, 1.0];

    pub const SKY_TOP: [f32; 4] = [0.05, 0.20, 0.35, 1.0];
    pub const SKY_BOTTOM: [f32; 4] = [0.02, 0.08, 0.16, 1.0];
    pub const SAND: [f32; 4] = [0.62, 0.52, 0.34, 1.0];
}
