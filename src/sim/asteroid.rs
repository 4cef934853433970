//! Asteroids and their fragmentation
//!
//! Asteroids are drawn as a lumpy polygon but always collide as a circle.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::explosion::Explosion;
use super::shape::Body;
use crate::Tuning;
use crate::rotate_deg;

/// Split children fly this much faster than their parent
pub const SPLIT_SPEED_FACTOR: f32 = 1.2;
/// Range of the split angle in degrees
pub const SPLIT_ANGLE_MIN: f32 = 20.0;
pub const SPLIT_ANGLE_MAX: f32 = 50.0;

/// Size tier, derived from radius
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsteroidTier {
    Large,
    Medium,
    Small,
}

/// A drifting rock
#[derive(Debug, Clone)]
pub struct Asteroid {
    pub body: Body,
    /// Outline offsets from `body.pos`, evenly spaced in angle
    pub vertices: Vec<Vec2>,
}

/// What hitting an asteroid produces
///
/// The parent is always consumed. `children` is `None` when the asteroid
/// was already at the minimum size.
#[derive(Debug, Clone)]
pub struct Split {
    pub explosion: Explosion,
    pub children: Option<[Asteroid; 2]>,
    /// Degrees the first child's heading was turned by (the second uses the negation)
    pub angle: f32,
}

impl Asteroid {
    /// Create an asteroid with a freshly jittered outline
    pub fn new(pos: Vec2, radius: f32, rng: &mut impl Rng) -> Self {
        let count = rng.random_range(8..=12);
        let vertices = (0..count)
            .map(|i| {
                let angle = (i as f32 / count as f32) * TAU;
                let dist = radius * rng.random_range(0.8f32..=1.2);
                Vec2::new(angle.cos(), angle.sin()) * dist
            })
            .collect();

        Self {
            body: Body::new(pos, radius),
            vertices,
        }
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.body.vel = vel;
        self
    }

    pub fn tier(&self, tuning: &Tuning) -> AsteroidTier {
        let min = tuning.asteroid_min_radius;
        if self.body.radius >= min * 3.0 {
            AsteroidTier::Large
        } else if self.body.radius >= min * 2.0 {
            AsteroidTier::Medium
        } else {
            AsteroidTier::Small
        }
    }

    /// Points awarded for shooting this asteroid (smaller is worth more)
    pub fn score_value(&self, tuning: &Tuning) -> u32 {
        match self.tier(tuning) {
            AsteroidTier::Large => tuning.score_large,
            AsteroidTier::Medium => tuning.score_medium,
            AsteroidTier::Small => tuning.score_small,
        }
    }

    pub fn update(&mut self, dt: f32, screen: Vec2) {
        self.body.advance(dt);
        self.body.wrap_position(screen);
    }

    /// Break the asteroid apart
    ///
    /// Always yields an explosion at the current position. Above the minimum
    /// radius two children of `radius - min_radius` are produced at the same
    /// spot, heading along the parent's velocity turned by `+angle` and
    /// `-angle` and sped up by [`SPLIT_SPEED_FACTOR`].
    pub fn split(&self, tuning: &Tuning, rng: &mut impl Rng) -> Split {
        let explosion = Explosion::new(self.body.pos, tuning, rng);

        if self.body.radius <= tuning.asteroid_min_radius {
            return Split {
                explosion,
                children: None,
                angle: 0.0,
            };
        }

        let new_radius = self.body.radius - tuning.asteroid_min_radius;
        let angle = rng.random_range(SPLIT_ANGLE_MIN..=SPLIT_ANGLE_MAX);

        let vel_a = rotate_deg(self.body.vel, angle) * SPLIT_SPEED_FACTOR;
        let vel_b = rotate_deg(self.body.vel, -angle) * SPLIT_SPEED_FACTOR;

        let children = [
            Asteroid::new(self.body.pos, new_radius, rng).with_velocity(vel_a),
            Asteroid::new(self.body.pos, new_radius, rng).with_velocity(vel_b),
        ];

        Split {
            explosion,
            children: Some(children),
            angle,
        }
    }

    /// Outline in world space, closed back onto the first vertex
    pub fn outline(&self) -> Vec<Vec2> {
        let mut points: Vec<Vec2> = self.vertices.iter().map(|v| self.body.pos + *v).collect();
        if let Some(&first) = points.first() {
            points.push(first);
        }
        points
    }
}
