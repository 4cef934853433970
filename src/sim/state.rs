//! Game session state
//!
//! A `GameState` is one play session: it owns every entity, the spawner,
//! score and RNG. Restarting builds a new one rather than resetting fields.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::asteroid::Asteroid;
use super::player::Player;
use super::registry::{Entity, EntityId, Registry};
use super::spawner::Spawner;
use crate::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Lives exhausted; the session is frozen awaiting restart or quit
    GameOver,
}

/// Something that happened during a tick, for audio/HUD collaborators
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    ShotFired { pos: Vec2 },
    AsteroidSpawned { id: EntityId, radius: f32 },
    /// An asteroid broke into `children` fragments
    AsteroidSplit { pos: Vec2, radius: f32, children: usize },
    /// The smallest size was hit and nothing is left of it
    AsteroidDestroyed { pos: Vec2, radius: f32 },
    ScoreGained { points: u32, total: u64 },
    PlayerHit { lives_left: i32 },
    GameOver { score: u64 },
}

/// Complete session state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    /// Balance values, fixed for the session
    pub tuning: Tuning,
    /// Every live entity
    pub registry: Registry,
    pub spawner: Spawner,
    pub player_id: EntityId,
    pub score: u64,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Simulated seconds since the session started
    pub time_secs: f32,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut registry = Registry::new();
        let player_id = registry.spawn(Player::new(tuning.spawn_point(), &tuning));

        log::info!("New session (seed {}, {} lives)", seed, tuning.starting_lives);

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            registry,
            spawner: Spawner::new(),
            player_id,
            score: 0,
            phase: GamePhase::Playing,
            time_ticks: 0,
            time_secs: 0.0,
            events: Vec::new(),
        }
    }

    pub fn player(&self) -> Option<&Player> {
        self.registry.player(self.player_id)
    }

    pub fn player_mut(&mut self) -> Option<&mut Player> {
        self.registry.player_mut(self.player_id)
    }

    /// Lives left, or -1 once the player is gone
    pub fn lives(&self) -> i32 {
        self.player().map(|p| p.lives).unwrap_or(-1)
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Session RNG, for building entities outside the tick
    pub fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Register an asteroid and announce it
    pub fn spawn_asteroid(&mut self, asteroid: Asteroid) -> EntityId {
        let radius = asteroid.body.radius;
        let id = self.registry.spawn(asteroid);
        log::debug!("Asteroid {} spawned (r={:.1})", id.raw(), radius);
        self.events.push(GameEvent::AsteroidSpawned { id, radius });
        id
    }

    /// Break an asteroid apart
    ///
    /// The parent leaves every group, an explosion takes its place and any
    /// fragments are registered. Raises `AsteroidSplit`, or `AsteroidDestroyed`
    /// when there were no fragments. Returns the new fragment ids, or `None`
    /// if `id` is not a live asteroid.
    pub fn split_asteroid(&mut self, id: EntityId) -> Option<Vec<EntityId>> {
        let split = self.registry.asteroid(id)?.split(&self.tuning, &mut self.rng);
        let Some(Entity::Asteroid(parent)) = self.registry.kill(id) else {
            return None;
        };

        self.registry.spawn(split.explosion);

        let children: Vec<EntityId> = split
            .children
            .into_iter()
            .flatten()
            .map(|child| self.registry.spawn(child))
            .collect();

        let (pos, radius) = (parent.body.pos, parent.body.radius);
        self.events.push(if children.is_empty() {
            GameEvent::AsteroidDestroyed { pos, radius }
        } else {
            GameEvent::AsteroidSplit {
                pos,
                radius,
                children: children.len(),
            }
        });

        Some(children)
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::registry::Group;

    #[test]
    fn test_new_session() {
        let state = GameState::new(42);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives(), 3);
        assert_eq!(state.registry.len(), 1);
        let player = state.player().expect("player spawned");
        assert_eq!(player.body.pos, state.tuning.spawn_point());
    }

    #[test]
    fn test_split_large_asteroid() {
        let mut state = GameState::new(1);
        let rock = Asteroid::new(Vec2::new(100.0, 100.0), 60.0, state.rng_mut());
        let id = state.spawn_asteroid(rock);

        let children = state.split_asteroid(id).expect("live asteroid");

        assert_eq!(children.len(), 2);
        assert!(!state.registry.contains(id));
        for group in Group::ALL {
            assert!(!state.registry.is_member(id, group));
        }
        for child in &children {
            let a = state.registry.asteroid(*child).expect("child registered");
            assert_eq!(a.body.radius, 40.0);
        }
        assert_eq!(state.registry.explosions().count(), 1);
        assert!(
            state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::AsteroidSplit { children: 2, .. }))
        );
    }

    #[test]
    fn test_split_smallest_asteroid() {
        let mut state = GameState::new(1);
        let rock = Asteroid::new(Vec2::new(100.0, 100.0), 20.0, state.rng_mut());
        let id = state.spawn_asteroid(rock);
        state.drain_events();

        let children = state.split_asteroid(id).expect("live asteroid");

        assert!(children.is_empty());
        assert_eq!(state.registry.asteroids().count(), 0);
        assert_eq!(state.registry.explosions().count(), 1);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::AsteroidDestroyed {
                pos: Vec2::new(100.0, 100.0),
                radius: 20.0,
            }]
        );
    }

    #[test]
    fn test_split_chain_from_large() {
        let mut state = GameState::new(77);
        let min = state.tuning.asteroid_min_radius;
        let rock = Asteroid::new(Vec2::new(300.0, 300.0), min * 3.0, state.rng_mut())
            .with_velocity(Vec2::new(30.0, 10.0));
        let id = state.spawn_asteroid(rock);

        let medium = state.split_asteroid(id).expect("large splits");
        assert_eq!(medium.len(), 2);
        let medium_radius = state.registry.asteroid(medium[0]).map(|a| a.body.radius);
        assert_eq!(medium_radius, Some(min * 2.0));

        let small = state.split_asteroid(medium[0]).expect("medium splits");
        assert_eq!(small.len(), 2);
        let small_radius = state.registry.asteroid(small[0]).map(|a| a.body.radius);
        assert_eq!(small_radius, Some(min));

        let dust = state.split_asteroid(small[0]).expect("small is destroyed");
        assert!(dust.is_empty());

        assert_eq!(state.registry.explosions().count(), 3);
        // One medium and one small remain
        assert_eq!(state.registry.asteroids().count(), 2);
    }

    #[test]
    fn test_split_non_asteroid_is_noop() {
        let mut state = GameState::new(1);
        let player_id = state.player_id;
        assert!(state.split_asteroid(player_id).is_none());
        assert!(state.registry.contains(player_id));
    }

    #[test]
    fn test_drain_events() {
        let mut state = GameState::new(1);
        let rock = Asteroid::new(Vec2::ZERO, 30.0, state.rng_mut());
        state.spawn_asteroid(rock);
        let events = state.drain_events();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], GameEvent::AsteroidSpawned { .. }));
        assert!(state.drain_events().is_empty());
    }
}
