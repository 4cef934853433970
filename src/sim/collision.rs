//! Collision tests for the ship's triangular hull
//!
//! Asteroids and shots are plain circles (see [`super::shape::Body`]). The
//! ship is a triangle, so it needs a triangle-versus-circle test built from
//! point-to-segment distances.

use glam::Vec2;

/// Closest point on segment `a`-`b` to `p`
///
/// The projection is clamped to the segment, so endpoints are returned for
/// points beyond either end. A degenerate segment returns `None`.
pub fn closest_point_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Option<Vec2> {
    let line_vec = b - a;
    let line_len = line_vec.length();

    if line_len < 0.0001 {
        return None; // Degenerate segment
    }

    let line_unit = line_vec / line_len;
    let projection = (p - a).dot(line_unit).clamp(0.0, line_len);
    Some(a + line_unit * projection)
}

/// Check whether a triangle hull with the given center touches a circle
///
/// Hits when the circle contains the hull's center, or when any edge passes
/// within the circle's radius. Both checks are inclusive.
pub fn triangle_circle_collision(
    hull: &[Vec2; 3],
    hull_center: Vec2,
    circle_pos: Vec2,
    circle_radius: f32,
) -> bool {
    // Cheap inclusion test first
    if circle_pos.distance(hull_center) <= circle_radius {
        return true;
    }

    (0..3).any(|i| {
        let a = hull[i];
        let b = hull[(i + 1) % 3];
        closest_point_on_segment(circle_pos, a, b)
            .is_some_and(|closest| closest.distance(circle_pos) <= circle_radius)
    })
}
