//! Shape generation for 2D primitives
//!
//! Everything is emitted as a triangle list.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a thick line segment (one quad)
pub fn segment(p1: Vec2, p2: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (p2 - p1).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let v1a = p1 + perp;
    let v1b = p1 - perp;
    let v2a = p2 + perp;
    let v2b = p2 - perp;

    // Two triangles
    vec![
        Vertex::new(v1a.x, v1a.y, color),
        Vertex::new(v1b.x, v1b.y, color),
        Vertex::new(v2a.x, v2a.y, color),
        Vertex::new(v2a.x, v2a.y, color),
        Vertex::new(v1b.x, v1b.y, color),
        Vertex::new(v2b.x, v2b.y, color),
    ]
}

/// Generate vertices for a connected polyline
///
/// With `closed` set, the last point is joined back to the first.
pub fn polyline(points: &[Vec2], closed: bool, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity(points.len() * 6);
    for pair in points.windows(2) {
        vertices.extend(segment(pair[0], pair[1], width, color));
    }
    if closed {
        if let (Some(&last), Some(&first)) = (points.last(), points.first()) {
            vertices.extend(segment(last, first, width, color));
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_circle_vertex_count() {
        assert_eq!(circle(Vec2::ZERO, 5.0, WHITE, 12).len(), 36);
    }

    #[test]
    fn test_segment_width() {
        let quad = segment(Vec2::ZERO, Vec2::new(10.0, 0.0), 2.0, WHITE);
        assert_eq!(quad.len(), 6);
        assert_eq!(quad[0].position, [0.0, 1.0]);
        assert_eq!(quad[1].position, [0.0, -1.0]);
    }

    #[test]
    fn test_degenerate_segment_is_empty() {
        assert!(segment(Vec2::ONE, Vec2::ONE, 2.0, WHITE).is_empty());
    }

    #[test]
    fn test_polyline_closing_edge() {
        let tri = [Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0)];
        assert_eq!(polyline(&tri, false, 2.0, WHITE).len(), 12);
        assert_eq!(polyline(&tri, true, 2.0, WHITE).len(), 18);
        assert!(polyline(&tri[..1], true, 2.0, WHITE).is_empty());
    }
}
