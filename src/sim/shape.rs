//! Circular body shared by every physical entity
//!
//! Position, radius and velocity plus the two primitives everything else
//! builds on: toroidal wrap-around and circle-circle overlap.

use glam::Vec2;

/// A circle moving through the wrapped screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Body {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
        }
    }

    /// Integrate position by velocity
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Teleport to the opposite edge once fully outside the screen
    ///
    /// The screen is extended by `radius` on every side, so a body only jumps
    /// after it has completely left view. Bodies already inside are untouched.
    pub fn wrap_position(&mut self, screen: Vec2) {
        let r = self.radius;

        if self.pos.x < -r {
            self.pos.x = screen.x + r;
        } else if self.pos.x > screen.x + r {
            self.pos.x = -r;
        }

        if self.pos.y < -r {
            self.pos.y = screen.y + r;
        } else if self.pos.y > screen.y + r {
            self.pos.y = -r;
        }
    }

    /// Strict circle overlap: touching circles do not collide
    #[inline]
    pub fn collides_with(&self, other: &Body) -> bool {
        self.pos.distance(other.pos) < self.radius + other.radius
    }

    /// Whether the body lies inside the radius-extended screen rectangle
    pub fn in_wrap_bounds(&self, screen: Vec2) -> bool {
        let r = self.radius;
        self.pos.x >= -r && self.pos.x <= screen.x + r && self.pos.y >= -r && self.pos.y <= screen.y + r
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SCREEN: Vec2 = Vec2::new(1280.0, 720.0);

    #[test]
    fn test_wrap_left_to_right() {
        let mut b = Body::new(Vec2::new(-11.0, 100.0), 10.0);
        b.wrap_position(SCREEN);
        assert_eq!(b.pos, Vec2::new(1290.0, 100.0));
    }

    #[test]
    fn test_wrap_bottom_to_top() {
        let mut b = Body::new(Vec2::new(50.0, 731.0), 10.0);
        b.wrap_position(SCREEN);
        assert_eq!(b.pos, Vec2::new(50.0, -10.0));
    }

    #[test]
    fn test_wrap_inside_margin_is_noop() {
        let mut b = Body::new(Vec2::new(-9.0, 725.0), 10.0);
        b.wrap_position(SCREEN);
        assert_eq!(b.pos, Vec2::new(-9.0, 725.0));
    }

    #[test]
    fn test_touching_is_not_collision() {
        let a = Body::new(Vec2::new(0.0, 0.0), 5.0);
        let b = Body::new(Vec2::new(10.0, 0.0), 5.0);
        assert!(!a.collides_with(&b));

        let c = Body::new(Vec2::new(9.9, 0.0), 5.0);
        assert!(a.collides_with(&c));
    }

    proptest! {
        #[test]
        fn prop_wrap_lands_in_bounds(
            x in -1.0e4f32..1.0e4,
            y in -1.0e4f32..1.0e4,
            r in 1.0f32..80.0,
        ) {
            let mut b = Body::new(Vec2::new(x, y), r);
            b.wrap_position(SCREEN);
            prop_assert!(b.in_wrap_bounds(SCREEN));
        }

        #[test]
        fn prop_wrap_is_idempotent(
            x in -1.0e4f32..1.0e4,
            y in -1.0e4f32..1.0e4,
            r in 1.0f32..80.0,
        ) {
            let mut b = Body::new(Vec2::new(x, y), r);
            b.wrap_position(SCREEN);
            let once = b.pos;
            b.wrap_position(SCREEN);
            prop_assert_eq!(once, b.pos);
        }

        #[test]
        fn prop_circle_collision_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0, ar in 1.0f32..60.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0, br in 1.0f32..60.0,
        ) {
            let a = Body::new(Vec2::new(ax, ay), ar);
            let b = Body::new(Vec2::new(bx, by), br);
            prop_assert_eq!(a.collides_with(&b), b.collides_with(&a));
        }
    }
}
