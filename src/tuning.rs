//! Data-driven game balance
//!
//! [`Tuning`] mirrors every constant in [`crate::consts`]. A JSON file can
//! override any subset of values; missing keys keep the compile-time
//! defaults. Values are read once at startup and stay fixed for the
//! lifetime of a session.

use std::fmt;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised while loading a tuning override
#[derive(Debug)]
pub enum TuningError {
    /// The override file could not be read
    Io(std::io::Error),
    /// The override file is not valid tuning JSON
    Parse(serde_json::Error),
    /// A value is outside the range the simulation can work with
    Invalid {
        name: &'static str,
        value: f32,
        reason: &'static str,
    },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Io(e) => write!(f, "failed to read tuning file: {}", e),
            TuningError::Parse(e) => write!(f, "failed to parse tuning file: {}", e),
            TuningError::Invalid {
                name,
                value,
                reason,
            } => write!(f, "invalid tuning value {} = {}: {}", name, value, reason),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Io(e) => Some(e),
            TuningError::Parse(e) => Some(e),
            TuningError::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for TuningError {
    fn from(e: std::io::Error) -> Self {
        TuningError::Io(e)
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

/// Load-time game balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Asteroids ===
    pub asteroid_min_radius: f32,
    pub asteroid_max_radius: f32,
    pub asteroid_spawn_delay: f32,
    pub asteroid_max_speed: f32,

    // === Shots ===
    pub shot_radius: f32,
    pub shot_lifetime: f32,

    // === Player ===
    pub player_radius: f32,
    pub player_turn_speed: f32,
    pub player_speed: f32,
    pub player_acceleration: f32,
    pub player_friction: f32,
    pub player_shoot_speed: f32,
    pub player_shoot_cooldown: f32,
    pub starting_lives: i32,
    pub respawn_time: f32,

    // === Explosions ===
    pub explosion_duration: f32,
    pub explosion_particles: usize,
    pub explosion_speed: f32,

    // === Scoring ===
    pub score_large: u32,
    pub score_medium: u32,
    pub score_small: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            asteroid_min_radius: ASTEROID_MIN_RADIUS,
            asteroid_max_radius: ASTEROID_MAX_RADIUS,
            asteroid_spawn_delay: ASTEROID_SPAWN_DELAY,
            asteroid_max_speed: ASTEROID_MAX_SPEED,

            shot_radius: SHOT_RADIUS,
            shot_lifetime: SHOT_LIFETIME,

            player_radius: PLAYER_RADIUS,
            player_turn_speed: PLAYER_TURN_SPEED,
            player_speed: PLAYER_SPEED,
            player_acceleration: PLAYER_ACCELERATION,
            player_friction: PLAYER_FRICTION,
            player_shoot_speed: PLAYER_SHOOT_SPEED,
            player_shoot_cooldown: PLAYER_SHOOT_COOLDOWN,
            starting_lives: STARTING_LIVES,
            respawn_time: RESPAWN_TIME,

            explosion_duration: EXPLOSION_DURATION,
            explosion_particles: EXPLOSION_PARTICLES,
            explosion_speed: EXPLOSION_SPEED,

            score_large: SCORE_LARGE,
            score_medium: SCORE_MEDIUM,
            score_small: SCORE_SMALL,
        }
    }
}

impl Tuning {
    /// Screen size as a vector (width, height)
    #[inline]
    pub fn screen(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    /// Where the player starts and respawns
    #[inline]
    pub fn spawn_point(&self) -> Vec2 {
        self.screen() / 2.0
    }

    /// Parse a JSON override and validate it
    pub fn from_json_str(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read a JSON override from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json_str(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("asteroid_min_radius", self.asteroid_min_radius),
            ("asteroid_max_radius", self.asteroid_max_radius),
            ("asteroid_spawn_delay", self.asteroid_spawn_delay),
            ("shot_radius", self.shot_radius),
            ("shot_lifetime", self.shot_lifetime),
            ("player_radius", self.player_radius),
            ("player_turn_speed", self.player_turn_speed),
            ("player_speed", self.player_speed),
            ("player_acceleration", self.player_acceleration),
            ("player_shoot_speed", self.player_shoot_speed),
            ("respawn_time", self.respawn_time),
            ("explosion_duration", self.explosion_duration),
            ("explosion_speed", self.explosion_speed),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(TuningError::Invalid {
                    name,
                    value,
                    reason: "must be greater than zero",
                });
            }
        }

        if self.asteroid_max_speed < 0.0 {
            return Err(TuningError::Invalid {
                name: "asteroid_max_speed",
                value: self.asteroid_max_speed,
                reason: "must not be negative",
            });
        }
        if self.asteroid_min_radius > self.asteroid_max_radius {
            return Err(TuningError::Invalid {
                name: "asteroid_min_radius",
                value: self.asteroid_min_radius,
                reason: "must not exceed asteroid_max_radius",
            });
        }
        if !(self.player_friction > 0.0 && self.player_friction <= 1.0) {
            return Err(TuningError::Invalid {
                name: "player_friction",
                value: self.player_friction,
                reason: "must be in (0, 1]",
            });
        }
        if self.starting_lives < 0 {
            return Err(TuningError::Invalid {
                name: "starting_lives",
                value: self.starting_lives as f32,
                reason: "must not be negative",
            });
        }

        Ok(())
    }
}
