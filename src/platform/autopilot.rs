//! Idle/demo input - the computer flies the ship
//!
//! Tracks the nearest asteroid with a little lead, keeps a comfortable
//! distance and fires when roughly lined up. Once the session is over it
//! asks for a restart while it has some left, then quits.

use glam::Vec2;

use super::input::{InputFrame, InputSource, Key, KeySet, SessionCommand};
use crate::angle_between_deg;
use crate::sim::GameState;

/// Degrees off target within which the autopilot stops turning
const AIM_DEADZONE: f32 = 4.0;
/// Degrees off target within which it opens fire
const FIRE_CONE: f32 = 12.0;
/// Thrust toward targets farther than this
const CHASE_DISTANCE: f32 = 320.0;
/// Back away from targets closer than this (plus their radius)
const RETREAT_DISTANCE: f32 = 90.0;

#[derive(Debug, Clone)]
pub struct Autopilot {
    restarts_left: u32,
}

impl Autopilot {
    pub fn new(restarts: u32) -> Self {
        Self {
            restarts_left: restarts,
        }
    }

    fn steer(state: &GameState) -> KeySet {
        let mut keys = KeySet::default();
        let Some(player) = state.player() else {
            return keys;
        };
        let pos = player.body.pos;
        let shot_speed = state.tuning.player_shoot_speed;

        let target = state
            .registry
            .asteroids()
            .map(|(_, a)| a)
            .min_by(|a, b| {
                a.body
                    .pos
                    .distance_squared(pos)
                    .partial_cmp(&b.body.pos.distance_squared(pos))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

        let Some(target) = target else {
            return keys;
        };

        // Lead the target by the shot's travel time
        let dist = target.body.pos.distance(pos);
        let aim_point: Vec2 = target.body.pos + target.body.vel * (dist / shot_speed);
        let error = angle_between_deg(player.facing(), aim_point - pos);

        if error > AIM_DEADZONE {
            keys.press(Key::RotateRight);
        } else if error < -AIM_DEADZONE {
            keys.press(Key::RotateLeft);
        }

        if error.abs() < FIRE_CONE {
            keys.press(Key::Fire);
        }

        if dist > CHASE_DISTANCE {
            keys.press(Key::Thrust);
        } else if dist < RETREAT_DISTANCE + target.body.radius {
            keys.press(Key::Reverse);
        }

        keys
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, state: &GameState) -> InputFrame {
        if state.is_over() {
            let command = if self.restarts_left > 0 {
                self.restarts_left -= 1;
                SessionCommand::Restart
            } else {
                SessionCommand::Quit
            };
            return InputFrame {
                keys: KeySet::default(),
                commands: vec![command],
            };
        }

        InputFrame {
            keys: Self::steer(state),
            commands: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Asteroid, GamePhase};

    #[test]
    fn test_idle_without_targets() {
        let state = GameState::new(1);
        let frame = Autopilot::new(0).poll(&state);
        assert_eq!(frame.keys, KeySet::default());
        assert!(frame.commands.is_empty());
    }

    #[test]
    fn test_fires_at_target_dead_ahead() {
        let mut state = GameState::new(1);
        let ahead = state.tuning.spawn_point() + Vec2::new(0.0, 200.0);
        let rock = Asteroid::new(ahead, 30.0, state.rng_mut());
        state.spawn_asteroid(rock);

        let frame = Autopilot::new(0).poll(&state);
        assert!(frame.keys.is_down(Key::Fire));
        assert!(!frame.keys.is_down(Key::RotateLeft));
        assert!(!frame.keys.is_down(Key::RotateRight));
    }

    #[test]
    fn test_turns_toward_target() {
        let mut state = GameState::new(1);
        // Facing +Y; a target at -X needs the heading angle to grow
        let beside = state.tuning.spawn_point() + Vec2::new(-200.0, 0.0);
        let rock = Asteroid::new(beside, 30.0, state.rng_mut());
        state.spawn_asteroid(rock);

        let frame = Autopilot::new(0).poll(&state);
        assert!(frame.keys.is_down(Key::RotateRight));
        assert!(!frame.keys.is_down(Key::Fire));
    }

    #[test]
    fn test_restarts_then_quits() {
        let mut state = GameState::new(1);
        state.phase = GamePhase::GameOver;
        let mut pilot = Autopilot::new(1);

        assert_eq!(pilot.poll(&state).commands, vec![SessionCommand::Restart]);
        assert_eq!(pilot.poll(&state).commands, vec![SessionCommand::Quit]);
    }
}
