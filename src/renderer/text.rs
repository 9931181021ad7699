//! Glyph rasterization for HUD and menu text
//!
//! Glyphs are rasterized once per (char, size) with `ab_glyph` and stored as
//! horizontal coverage spans. Each span becomes one quad, so text goes
//! through the same untextured vertex pipeline as everything else.

use ab_glyph::{Font, FontVec, PxScale, ScaleFont, point};
use anyhow::Context;
use glam::Vec2;
use std::collections::HashMap;
use std::path::Path;

use super::vertex::Vertex;
use crate::assets::Rect;
use crate::canvas::Anchor;

/// Coverage is snapped to this many alpha steps before spans are merged
const ALPHA_LEVELS: f32 = 4.0;

/// Run of equal coverage in one pixel row of a glyph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub x: u32,
    pub y: u32,
    pub len: u32,
    pub alpha: f32,
}

#[derive(Debug, Clone, Default)]
struct RasterGlyph {
    /// Top-left of the bitmap relative to the pen position on the baseline
    offset: Vec2,
    spans: Vec<Span>,
}

/// Collapse a row-major coverage bitmap into spans of quantized alpha
pub fn coverage_spans(coverage: &[f32], width: usize) -> Vec<Span> {
    let mut spans = Vec::new();
    if width == 0 {
        return spans;
    }
    for (y, row) in coverage.chunks(width).enumerate() {
        let mut x = 0;
        while x < row.len() {
            let level = (row[x].clamp(0.0, 1.0) * ALPHA_LEVELS).round();
            let start = x;
            while x < row.len() && (row[x].clamp(0.0, 1.0) * ALPHA_LEVELS).round() == level {
                x += 1;
            }
            if level > 0.0 {
                spans.push(Span {
                    x: start as u32,
                    y: y as u32,
                    len: (x - start) as u32,
                    alpha: level / ALPHA_LEVELS,
                });
            }
        }
    }
    spans
}

/// Font plus a cache of rasterized glyphs
pub struct TextRenderer {
    font: FontVec,
    glyphs: HashMap<(char, u32), RasterGlyph>,
}

impl TextRenderer {
    pub fn from_bytes(bytes: Vec<u8>) -> anyhow::Result<Self> {
        let font =
            FontVec::try_from_vec(bytes).map_err(|e| anyhow::anyhow!("decode font: {e}"))?;
        Ok(Self {
            font,
            glyphs: HashMap::new(),
        })
    }

    /// Read and parse a TTF/OTF file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let bytes =
            std::fs::read(path).with_context(|| format!("read font {}", path.display()))?;
        let renderer =
            Self::from_bytes(bytes).with_context(|| format!("parse font {}", path.display()))?;
        log::info!("Loaded font {}", path.display());
        Ok(renderer)
    }

    /// Advance width of `text` at pixel size `size`
    pub fn measure(&self, text: &str, size: f32) -> f32 {
        let scaled = self.font.as_scaled(PxScale::from(size));
        let mut width = 0.0;
        let mut prev = None;
        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = prev {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            prev = Some(id);
        }
        width
    }

    /// Quads for `text` with its top edge at `pos.y`
    pub fn layout(
        &mut self,
        text: &str,
        pos: Vec2,
        size: f32,
        anchor: Anchor,
        color: [f32; 4],
    ) -> Vec<Vertex> {
        let left = match anchor {
            Anchor::Left => pos.x,
            Anchor::Center => pos.x - self.measure(text, size) / 2.0,
        };
        let (ascent, pens) = {
            let scaled = self.font.as_scaled(PxScale::from(size));
            let mut pens = Vec::with_capacity(text.len());
            let mut x = left;
            let mut prev = None;
            for c in text.chars() {
                let id = scaled.glyph_id(c);
                if let Some(prev) = prev {
                    x += scaled.kern(prev, id);
                }
                pens.push((c, x));
                x += scaled.h_advance(id);
                prev = Some(id);
            }
            (scaled.ascent(), pens)
        };
        let baseline = (pos.y + ascent).round();

        let mut vertices = Vec::new();
        for (c, x) in pens {
            let glyph = self.rasterize(c, size);
            let origin = Vec2::new(x.round(), baseline) + glyph.offset;
            for span in &glyph.spans {
                let mut span_color = color;
                span_color[3] *= span.alpha;
                let rect = Rect::new(
                    origin + Vec2::new(span.x as f32, span.y as f32),
                    Vec2::new(span.len as f32, 1.0),
                );
                vertices.extend(super::shapes::rect(rect, span_color));
            }
        }
        vertices
    }

    fn rasterize(&mut self, c: char, size: f32) -> &RasterGlyph {
        let font = &self.font;
        self.glyphs.entry((c, size.to_bits())).or_insert_with(|| {
            let glyph = font
                .glyph_id(c)
                .with_scale_and_position(PxScale::from(size), point(0.0, 0.0));
            let Some(outlined) = font.outline_glyph(glyph) else {
                // Whitespace and missing glyphs have no outline
                return RasterGlyph::default();
            };
            let bounds = outlined.px_bounds();
            let width = bounds.width() as usize;
            let height = bounds.height() as usize;
            let mut coverage = vec![0.0; width * height];
            outlined.draw(|x, y, c| {
                let i = y as usize * width + x as usize;
                if let Some(px) = coverage.get_mut(i) {
                    *px = c;
                }
            });
            RasterGlyph {
                offset: Vec2::new(bounds.min.x, bounds.min.y),
                spans: coverage_spans(&coverage, width),
            }
        })
    }
}
