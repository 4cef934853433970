//! Explosion particle bursts
//!
//! Purely visual: explosions never collide with anything.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use crate::Tuning;

/// Per-frame velocity multiplier for explosion particles
pub const PARTICLE_DAMPING: f32 = 0.95;

/// A single explosion particle
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

#[derive(Debug, Clone)]
pub struct Explosion {
    pub pos: Vec2,
    pub particles: Vec<Particle>,
    /// Seconds remaining
    pub timer: f32,
    /// Seconds the explosion lasts in total
    pub duration: f32,
}

impl Explosion {
    pub fn new(pos: Vec2, tuning: &Tuning, rng: &mut impl Rng) -> Self {
        let speed_max = tuning.explosion_speed;
        let particles = (0..tuning.explosion_particles)
            .map(|_| {
                let angle = rng.random_range(0.0..TAU);
                let speed = rng.random_range(speed_max * 0.5..=speed_max);
                Particle {
                    pos,
                    vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                    size: rng.random_range(1.0f32..=3.0),
                }
            })
            .collect();

        Self {
            pos,
            particles,
            timer: tuning.explosion_duration,
            duration: tuning.explosion_duration,
        }
    }

    /// Advance the burst. Returns false once the explosion has burnt out.
    pub fn update(&mut self, dt: f32) -> bool {
        self.timer -= dt;
        if self.timer <= 0.0 {
            return false;
        }

        for particle in &mut self.particles {
            particle.pos += particle.vel * dt;
            particle.vel *= PARTICLE_DAMPING;
        }
        true
    }

    /// Fade shared by every particle, from `max_alpha` down to zero
    pub fn alpha(&self, max_alpha: f32) -> f32 {
        (self.timer / self.duration).clamp(0.0, 1.0) * max_alpha
    }
}
