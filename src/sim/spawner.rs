//! Timed asteroid spawning along the screen perimeter

use glam::Vec2;
use rand::Rng;

use super::asteroid::Asteroid;
use crate::Tuning;

/// Screen edge an asteroid enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// Random point on this edge
    fn point(self, screen: Vec2, rng: &mut impl Rng) -> Vec2 {
        match self {
            Edge::Top => Vec2::new(rng.random_range(0.0..=screen.x), 0.0),
            Edge::Right => Vec2::new(screen.x, rng.random_range(0.0..=screen.y)),
            Edge::Bottom => Vec2::new(rng.random_range(0.0..=screen.x), screen.y),
            Edge::Left => Vec2::new(0.0, rng.random_range(0.0..=screen.y)),
        }
    }
}

/// Drops a new asteroid onto the field every `asteroid_spawn_delay` seconds
#[derive(Debug, Clone, Default)]
pub struct Spawner {
    /// Seconds accumulated since the last spawn
    pub timer: f32,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate time and emit an asteroid once the delay is reached
    ///
    /// The accumulator restarts from zero after each spawn, so at most one
    /// asteroid comes out per call.
    pub fn update(&mut self, dt: f32, tuning: &Tuning, rng: &mut impl Rng) -> Option<Asteroid> {
        self.timer += dt;
        if self.timer < tuning.asteroid_spawn_delay {
            return None;
        }
        self.timer = 0.0;
        Some(Self::spawn_asteroid(tuning, rng))
    }

    fn spawn_asteroid(tuning: &Tuning, rng: &mut impl Rng) -> Asteroid {
        let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];
        let pos = edge.point(tuning.screen(), rng);
        let radius = rng.random_range(tuning.asteroid_min_radius..=tuning.asteroid_max_radius);
        let max_speed = tuning.asteroid_max_speed;
        let vel = Vec2::new(
            rng.random_range(-max_speed..=max_speed),
            rng.random_range(-max_speed..=max_speed),
        );
        Asteroid::new(pos, radius, rng).with_velocity(vel)
    }
}
