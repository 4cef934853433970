//! Projectiles fired by the ship

use glam::Vec2;

use super::shape::Body;

#[derive(Debug, Clone)]
pub struct Shot {
    pub body: Body,
    /// Seconds until the shot fizzles out
    pub ttl: f32,
}

impl Shot {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, lifetime: f32) -> Self {
        let mut body = Body::new(pos, radius);
        body.vel = vel;
        Self { body, ttl: lifetime }
    }

    /// Move, wrap and age the shot. Returns false once it has expired.
    pub fn update(&mut self, dt: f32, screen: Vec2) -> bool {
        self.body.advance(dt);
        self.body.wrap_position(screen);
        self.ttl -= dt;
        self.ttl > 0.0
    }
}
