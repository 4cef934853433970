//! Bootsteroids - A wrap-around asteroid shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state)
//! - `renderer`: Geometry tessellation for the render surface
//! - `platform`: Input and frame clock collaborators
//! - `tuning`: Data-driven game balance
//! - `app`: Outer loop tying input, simulation and drawing together

pub mod app;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;

    /// Asteroids
    pub const ASTEROID_MIN_RADIUS: f32 = 20.0;
    pub const ASTEROID_KINDS: u32 = 3;
    pub const ASTEROID_MAX_RADIUS: f32 = ASTEROID_MIN_RADIUS * ASTEROID_KINDS as f32;
    /// Seconds between asteroid spawns
    pub const ASTEROID_SPAWN_DELAY: f32 = 1.0;
    pub const ASTEROID_MAX_SPEED: f32 = 100.0;

    /// Shots
    pub const SHOT_RADIUS: f32 = 5.0;
    /// Seconds a shot survives before it is removed
    pub const SHOT_LIFETIME: f32 = 1.2;

    /// Player ship
    pub const PLAYER_RADIUS: f32 = 20.0;
    /// Degrees per second
    pub const PLAYER_TURN_SPEED: f32 = 300.0;
    /// Reverse speed, pixels per second
    pub const PLAYER_SPEED: f32 = 200.0;
    /// Pixels per second squared
    pub const PLAYER_ACCELERATION: f32 = 400.0;
    /// Velocity multiplier per frame (< 1 for drag)
    pub const PLAYER_FRICTION: f32 = 0.98;
    pub const PLAYER_SHOOT_SPEED: f32 = 500.0;
    /// Seconds between shots
    pub const PLAYER_SHOOT_COOLDOWN: f32 = 0.3;
    pub const STARTING_LIVES: i32 = 3;
    /// Seconds of invulnerability after respawning
    pub const RESPAWN_TIME: f32 = 3.0;

    /// Explosions
    pub const EXPLOSION_DURATION: f32 = 0.5;
    pub const EXPLOSION_PARTICLES: usize = 12;
    pub const EXPLOSION_SPEED: f32 = 150.0;

    /// Points per asteroid tier (larger asteroids are worth less)
    pub const SCORE_LARGE: u32 = 20;
    pub const SCORE_MEDIUM: u32 = 50;
    pub const SCORE_SMALL: u32 = 100;
}

/// Rotate a vector by an angle in degrees
///
/// Positive angles turn +X toward +Y. With a y-down screen that reads as
/// clockwise.
#[inline]
pub fn rotate_deg(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}

/// Signed angle in degrees from `from` to `to`, in (-180, 180]
#[inline]
pub fn angle_between_deg(from: Vec2, to: Vec2) -> f32 {
    from.angle_to(to).to_degrees()
}
