//! Render surface abstraction
//!
//! The simulation only computes geometry. A [`Canvas`] receives that geometry
//! and owns actual pixel output; [`VertexBatch`] is the stock implementation
//! that turns draw calls into an upload-ready vertex list.

use glam::Vec2;

use super::shapes;
use super::vertex::Vertex;

/// Width of outline strokes in pixels
pub const LINE_WIDTH: f32 = 2.0;
/// Segments used when tessellating circles
pub const CIRCLE_SEGMENTS: u32 = 12;

/// Draw-call sink for one frame
pub trait Canvas {
    /// Start a new frame filled with `color`
    fn clear(&mut self, color: [f32; 4]);
    /// Outline through `points`; `closed` joins the last point back to the first
    fn polyline(&mut self, points: &[Vec2], closed: bool, color: [f32; 4]);
    /// Filled circle
    fn circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]);
    /// Text anchored at its top-left corner
    fn label(&mut self, text: &str, pos: Vec2, color: [f32; 4]);
}

/// Text queued for an external font renderer
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub pos: Vec2,
    pub color: [f32; 4],
}

/// Triangle-list batch for one frame
#[derive(Debug, Clone, Default)]
pub struct VertexBatch {
    pub clear_color: [f32; 4],
    pub vertices: Vec<Vertex>,
    pub labels: Vec<Label>,
}

impl VertexBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw vertex bytes for a GPU buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

impl Canvas for VertexBatch {
    fn clear(&mut self, color: [f32; 4]) {
        self.clear_color = color;
        self.vertices.clear();
        self.labels.clear();
    }

    fn polyline(&mut self, points: &[Vec2], closed: bool, color: [f32; 4]) {
        self.vertices
            .extend(shapes::polyline(points, closed, LINE_WIDTH, color));
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        self.vertices
            .extend(shapes::circle(center, radius, color, CIRCLE_SEGMENTS));
    }

    fn label(&mut self, text: &str, pos: Vec2, color: [f32; 4]) {
        self.labels.push(Label {
            text: text.to_string(),
            pos,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_collects_and_clears() {
        let mut batch = VertexBatch::new();
        batch.circle(Vec2::ZERO, 3.0, [1.0; 4]);
        batch.label("hi", Vec2::ZERO, [1.0; 4]);
        assert_eq!(batch.triangle_count(), CIRCLE_SEGMENTS as usize);
        assert_eq!(
            batch.as_bytes().len(),
            batch.vertices.len() * std::mem::size_of::<Vertex>()
        );

        batch.clear([0.0, 0.0, 0.0, 1.0]);
        assert!(batch.vertices.is_empty());
        assert!(batch.labels.is_empty());
        assert_eq!(batch.clear_color, [0.0, 0.0, 0.0, 1.0]);
    }
}
