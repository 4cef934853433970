//! The player's ship
//!
//! Forward thrust is momentum based: it accelerates the ship and friction
//! bleeds speed off every frame. Reversing ignores momentum and nudges the
//! position directly.

use glam::Vec2;
use rand::Rng;

use super::collision::triangle_circle_collision;
use super::shape::Body;
use super::shot::Shot;
use super::tick::TickInput;
use crate::Tuning;
use crate::rotate_deg;

/// Seconds a thrust particle lives at most (also its fade reference)
pub const THRUST_PARTICLE_MAX_LIFE: f32 = 0.3;
const THRUST_PARTICLE_MIN_LIFE: f32 = 0.1;
/// Chance per thrusting frame of emitting a particle
const THRUST_PARTICLE_CHANCE: f64 = 0.5;
/// Half-angle of the exhaust cone in degrees
const THRUST_SPREAD: f32 = 20.0;
const THRUST_PARTICLE_SPEED_MIN: f32 = 100.0;
const THRUST_PARTICLE_SPEED_MAX: f32 = 200.0;

/// Exhaust particle trailing the ship
#[derive(Debug, Clone)]
pub struct ThrustParticle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Seconds remaining
    pub life: f32,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    /// Heading in degrees; 0 faces +Y
    pub rotation: f32,
    pub lives: i32,
    pub is_vulnerable: bool,
    /// Seconds of invulnerability remaining
    pub respawn_timer: f32,
    /// Seconds until the next shot is allowed
    pub shoot_timer: f32,
    /// Whether thrust was applied this frame
    pub thrusting: bool,
    pub thrust_particles: Vec<ThrustParticle>,
    spawn_point: Vec2,
}

impl Player {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            body: Body::new(pos, tuning.player_radius),
            rotation: 0.0,
            lives: tuning.starting_lives,
            is_vulnerable: true,
            respawn_timer: 0.0,
            shoot_timer: 0.0,
            thrusting: false,
            thrust_particles: Vec::new(),
            spawn_point: pos,
        }
    }

    /// Unit vector the nose points along
    #[inline]
    pub fn facing(&self) -> Vec2 {
        rotate_deg(Vec2::Y, self.rotation)
    }

    /// Hull corners: nose, then the two rear corners
    pub fn triangle(&self) -> [Vec2; 3] {
        let r = self.body.radius;
        let forward = self.facing();
        let right = rotate_deg(Vec2::Y, self.rotation + 90.0) * r / 1.5;
        let pos = self.body.pos;
        [
            pos + forward * r,
            pos - forward * r - right,
            pos - forward * r + right,
        ]
    }

    /// Triangle-versus-circle hit test against another body
    pub fn collides_with(&self, other: &Body) -> bool {
        triangle_circle_collision(&self.triangle(), self.body.pos, other.pos, other.radius)
    }

    /// Advance the ship one frame. Returns a shot when one was fired.
    pub fn update(
        &mut self,
        input: &TickInput,
        dt: f32,
        tuning: &Tuning,
        rng: &mut impl Rng,
    ) -> Option<Shot> {
        if !self.is_vulnerable {
            self.respawn_timer -= dt;
            if self.respawn_timer <= 0.0 {
                self.is_vulnerable = true;
            }
        }

        if self.shoot_timer > 0.0 {
            self.shoot_timer -= dt;
        }

        self.thrusting = false;

        if input.rotate_left {
            self.rotate(-dt, tuning);
        }
        if input.rotate_right {
            self.rotate(dt, tuning);
        }
        if input.thrust {
            self.thrust(dt, tuning, rng);
            self.thrusting = true;
        }
        if input.reverse {
            self.move_by(-dt, tuning);
        }

        self.body.vel *= tuning.player_friction;
        self.body.advance(dt);

        self.thrust_particles.retain_mut(|p| {
            p.life -= dt;
            if p.life <= 0.0 {
                return false;
            }
            p.pos += p.vel * dt;
            true
        });

        let shot = if input.fire && self.shoot_timer <= 0.0 {
            Some(self.shoot(tuning))
        } else {
            None
        };

        self.body.wrap_position(tuning.screen());
        shot
    }

    fn rotate(&mut self, dt: f32, tuning: &Tuning) {
        self.rotation += tuning.player_turn_speed * dt;
    }

    /// Direct position offset along the heading, no momentum
    fn move_by(&mut self, dt: f32, tuning: &Tuning) {
        self.body.pos += self.facing() * tuning.player_speed * dt;
    }

    fn thrust(&mut self, dt: f32, tuning: &Tuning, rng: &mut impl Rng) {
        let direction = self.facing();
        self.body.vel += direction * tuning.player_acceleration * dt;

        if rng.random_bool(THRUST_PARTICLE_CHANCE) {
            let back = self.body.pos - direction * self.body.radius;
            let angle = self.rotation + 180.0 + rng.random_range(-THRUST_SPREAD..=THRUST_SPREAD);
            let speed = rng.random_range(THRUST_PARTICLE_SPEED_MIN..=THRUST_PARTICLE_SPEED_MAX);
            self.thrust_particles.push(ThrustParticle {
                pos: back,
                vel: rotate_deg(Vec2::Y, angle) * speed,
                life: rng.random_range(THRUST_PARTICLE_MIN_LIFE..=THRUST_PARTICLE_MAX_LIFE),
            });
        }
    }

    /// Fire a shot along the heading and restart the cooldown
    pub fn shoot(&mut self, tuning: &Tuning) -> Shot {
        self.shoot_timer = tuning.player_shoot_cooldown;
        Shot::new(
            self.body.pos,
            self.facing() * tuning.player_shoot_speed,
            tuning.shot_radius,
            tuning.shot_lifetime,
        )
    }

    /// Spend a life and, if any remain, reset to the spawn point
    ///
    /// Once `lives` goes negative nothing else changes; ending the session is
    /// up to the caller.
    pub fn respawn(&mut self, tuning: &Tuning) {
        self.lives -= 1;
        if self.lives >= 0 {
            self.body.pos = self.spawn_point;
            self.body.vel = Vec2::ZERO;
            self.rotation = 0.0;
            self.respawn_timer = tuning.respawn_time;
            self.is_vulnerable = false;
        }
    }

    pub fn is_out_of_lives(&self) -> bool {
        self.lives < 0
    }
}
