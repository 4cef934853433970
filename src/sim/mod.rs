//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod asteroid;
pub mod collision;
pub mod explosion;
pub mod player;
pub mod registry;
pub mod shape;
pub mod shot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use asteroid::{Asteroid, AsteroidTier, Split};
pub use collision::{closest_point_on_segment, triangle_circle_collision};
pub use explosion::Explosion;
pub use player::{Player, ThrustParticle};
pub use registry::{Entity, EntityId, Group, Groups, Registry};
pub use shape::Body;
pub use shot::Shot;
pub use spawner::Spawner;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
