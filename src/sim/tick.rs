//! Fixed timestep simulation tick
//!
//! Core game loop that advances the session deterministically: update every
//! entity, run the spawner, then resolve collisions.

use super::registry::{Entity, EntityId, Group};
use super::shape::Body;
use super::state::{GameEvent, GamePhase, GameState};

/// Held controls for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    /// Forward thrust (momentum based)
    pub thrust: bool,
    /// Backward movement (direct offset)
    pub reverse: bool,
    pub fire: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Frozen once lives run out; the outer loop decides what happens next
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;
    state.time_secs += dt;

    update_entities(state, input, dt);

    if let Some(asteroid) = state.spawner.update(dt, &state.tuning, &mut state.rng) {
        state.spawn_asteroid(asteroid);
    }

    resolve_collisions(state);
}

/// Run every updatable entity once, in id order
///
/// Shots fired this tick join the registry immediately but are not updated
/// until the next tick. Burnt-out entities are removed after the pass.
fn update_entities(state: &mut GameState, input: &TickInput, dt: f32) {
    let screen = state.tuning.screen();
    let mut expired: Vec<EntityId> = Vec::new();

    for id in state.registry.ids(Group::Updatable) {
        let Some(entity) = state.registry.get_mut(id) else {
            continue;
        };

        match entity {
            Entity::Player(player) => {
                if let Some(shot) = player.update(input, dt, &state.tuning, &mut state.rng) {
                    state.events.push(GameEvent::ShotFired { pos: shot.body.pos });
                    state.registry.spawn(shot);
                }
            }
            Entity::Asteroid(asteroid) => asteroid.update(dt, screen),
            Entity::Shot(shot) => {
                if !shot.update(dt, screen) {
                    expired.push(id);
                }
            }
            Entity::Explosion(explosion) => {
                if !explosion.update(dt) {
                    expired.push(id);
                }
            }
        }
    }

    for id in expired {
        if let Some(entity) = state.registry.kill(id) {
            log::trace!("{} {} expired", entity.kind_name(), id.raw());
        }
    }
}

/// Player-versus-asteroid first, then shot-versus-asteroid
///
/// A vulnerable player touching an asteroid respawns and that asteroid is
/// skipped for shots. Each asteroid is hit by at most one shot per tick;
/// the shot is consumed, the asteroid scores and splits.
fn resolve_collisions(state: &mut GameState) {
    for asteroid_id in state.registry.ids(Group::Asteroids) {
        let Some(asteroid) = state.registry.asteroid(asteroid_id) else {
            continue;
        };
        let rock = asteroid.body;
        let points = asteroid.score_value(&state.tuning);

        if player_hit(state, &rock) {
            if state.phase == GamePhase::GameOver {
                return;
            }
            continue;
        }

        let hit_shot = state
            .registry
            .ids(Group::Shots)
            .into_iter()
            .find(|sid| state.registry.shot(*sid).is_some_and(|s| rock.collides_with(&s.body)));

        if let Some(shot_id) = hit_shot {
            state.registry.kill(shot_id);
            state.score += points as u64;
            state.events.push(GameEvent::ScoreGained {
                points,
                total: state.score,
            });
            state.split_asteroid(asteroid_id);
        }
    }
}

/// Check the player against one asteroid and apply the hit
///
/// Returns true when the player was hit.
fn player_hit(state: &mut GameState, rock: &Body) -> bool {
    let tuning = &state.tuning;
    let Some(player) = state.registry.player_mut(state.player_id) else {
        return false;
    };
    if !player.is_vulnerable || !player.collides_with(rock) {
        return false;
    }

    player.respawn(tuning);
    let lives_left = player.lives;
    let out = player.is_out_of_lives();

    log::info!("Player hit, {} lives left", lives_left.max(0));
    state.events.push(GameEvent::PlayerHit { lives_left });

    if out {
        state.phase = GamePhase::GameOver;
        log::info!("Game over - final score {}", state.score);
        state.events.push(GameEvent::GameOver { score: state.score });
    }
    true
}
