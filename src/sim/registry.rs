//! Entity registry with overlapping groups
//!
//! Every live entity has one slot keyed by a stable [`EntityId`]. Group
//! membership is a bitmask fixed by the entity's kind when it is spawned, so
//! "asteroids" and "drawable" are views over the same storage. [`Registry::kill`]
//! is the only way out and drops the entity from every group at once.
//!
//! Iteration is in id order. Passes that mutate the registry take a
//! snapshot with [`Registry::ids`] first.

use std::collections::BTreeMap;

use super::asteroid::Asteroid;
use super::explosion::Explosion;
use super::player::Player;
use super::shape::Body;
use super::shot::Shot;

/// Stable handle to a registered entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(u32);

impl EntityId {
    pub fn raw(self) -> u32 {
        self.0
    }
}

/// Logical collections used to scope update, draw and collision passes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    Updatable,
    Drawable,
    Asteroids,
    Shots,
}

impl Group {
    pub const ALL: [Group; 4] = [Group::Updatable, Group::Drawable, Group::Asteroids, Group::Shots];

    const fn bit(self) -> u8 {
        match self {
            Group::Updatable => 1 << 0,
            Group::Drawable => 1 << 1,
            Group::Asteroids => 1 << 2,
            Group::Shots => 1 << 3,
        }
    }
}

/// Set of groups an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Groups(u8);

impl Groups {
    pub const NONE: Groups = Groups(0);

    pub const fn with(self, group: Group) -> Groups {
        Groups(self.0 | group.bit())
    }

    pub const fn contains(self, group: Group) -> bool {
        self.0 & group.bit() != 0
    }

    pub fn iter(self) -> impl Iterator<Item = Group> {
        Group::ALL.into_iter().filter(move |g| self.contains(*g))
    }
}

/// Anything the simulation tracks
#[derive(Debug, Clone)]
pub enum Entity {
    Player(Player),
    Asteroid(Asteroid),
    Shot(Shot),
    Explosion(Explosion),
}

impl Entity {
    /// Groups an entity of this kind joins on spawn
    pub fn groups(&self) -> Groups {
        let base = Groups::NONE.with(Group::Updatable).with(Group::Drawable);
        match self {
            Entity::Player(_) | Entity::Explosion(_) => base,
            Entity::Asteroid(_) => base.with(Group::Asteroids),
            Entity::Shot(_) => base.with(Group::Shots),
        }
    }

    /// Collision body, for the kinds that have one
    pub fn body(&self) -> Option<&Body> {
        match self {
            Entity::Player(p) => Some(&p.body),
            Entity::Asteroid(a) => Some(&a.body),
            Entity::Shot(s) => Some(&s.body),
            Entity::Explosion(_) => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Entity::Player(_) => "player",
            Entity::Asteroid(_) => "asteroid",
            Entity::Shot(_) => "shot",
            Entity::Explosion(_) => "explosion",
        }
    }
}

impl From<Player> for Entity {
    fn from(p: Player) -> Self {
        Entity::Player(p)
    }
}

impl From<Asteroid> for Entity {
    fn from(a: Asteroid) -> Self {
        Entity::Asteroid(a)
    }
}

impl From<Shot> for Entity {
    fn from(s: Shot) -> Self {
        Entity::Shot(s)
    }
}

impl From<Explosion> for Entity {
    fn from(e: Explosion) -> Self {
        Entity::Explosion(e)
    }
}

#[derive(Debug, Clone)]
struct Slot {
    entity: Entity,
    groups: Groups,
}

/// Owner of every live entity in a session
#[derive(Debug, Clone)]
pub struct Registry {
    slots: BTreeMap<EntityId, Slot>,
    next_id: u32,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Register an entity in the groups its kind belongs to
    pub fn spawn(&mut self, entity: impl Into<Entity>) -> EntityId {
        let entity = entity.into();
        let id = EntityId(self.next_id);
        self.next_id += 1;
        let groups = entity.groups();
        self.slots.insert(id, Slot { entity, groups });
        id
    }

    /// Remove an entity from every group it belongs to
    ///
    /// Returns the entity, or `None` if it was already gone.
    pub fn kill(&mut self, id: EntityId) -> Option<Entity> {
        self.slots.remove(&id).map(|slot| slot.entity)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.slots.contains_key(&id)
    }

    pub fn groups_of(&self, id: EntityId) -> Groups {
        self.slots.get(&id).map(|s| s.groups).unwrap_or(Groups::NONE)
    }

    pub fn is_member(&self, id: EntityId, group: Group) -> bool {
        self.groups_of(id).contains(group)
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.slots.get(&id).map(|s| &s.entity)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.slots.get_mut(&id).map(|s| &mut s.entity)
    }

    /// Snapshot of a group's ids, safe to hold while spawning or killing
    pub fn ids(&self, group: Group) -> Vec<EntityId> {
        self.iter(group).map(|(id, _)| id).collect()
    }

    /// Members of a group in id order
    pub fn iter(&self, group: Group) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.slots
            .iter()
            .filter(move |(_, slot)| slot.groups.contains(group))
            .map(|(id, slot)| (*id, &slot.entity))
    }

    pub fn count(&self, group: Group) -> usize {
        self.iter(group).count()
    }

    /// Total number of live entities
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn player(&self, id: EntityId) -> Option<&Player> {
        match self.get(id) {
            Some(Entity::Player(p)) => Some(p),
            _ => None,
        }
    }

    pub fn player_mut(&mut self, id: EntityId) -> Option<&mut Player> {
        match self.get_mut(id) {
            Some(Entity::Player(p)) => Some(p),
            _ => None,
        }
    }

    pub fn asteroid(&self, id: EntityId) -> Option<&Asteroid> {
        match self.get(id) {
            Some(Entity::Asteroid(a)) => Some(a),
            _ => None,
        }
    }

    pub fn shot(&self, id: EntityId) -> Option<&Shot> {
        match self.get(id) {
            Some(Entity::Shot(s)) => Some(s),
            _ => None,
        }
    }

    /// Iterate asteroids in id order
    pub fn asteroids(&self) -> impl Iterator<Item = (EntityId, &Asteroid)> {
        self.iter(Group::Asteroids).filter_map(|(id, e)| match e {
            Entity::Asteroid(a) => Some((id, a)),
            _ => None,
        })
    }

    /// Iterate explosions in id order
    pub fn explosions(&self) -> impl Iterator<Item = (EntityId, &Explosion)> {
        self.iter(Group::Drawable).filter_map(|(id, e)| match e {
            Entity::Explosion(x) => Some((id, x)),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn populated() -> (Registry, EntityId, EntityId, EntityId) {
        let t = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut reg = Registry::new();
        let player = reg.spawn(Player::new(t.spawn_point(), &t));
        let rock = reg.spawn(Asteroid::new(Vec2::ZERO, 40.0, &mut rng));
        let shot = reg.spawn(Shot::new(Vec2::ZERO, Vec2::X, 5.0, 1.0));
        (reg, player, rock, shot)
    }

    #[test]
    fn test_membership_by_kind() {
        let (reg, player, rock, shot) = populated();

        assert!(reg.is_member(player, Group::Updatable));
        assert!(reg.is_member(player, Group::Drawable));
        assert!(!reg.is_member(player, Group::Asteroids));

        assert!(reg.is_member(rock, Group::Asteroids));
        assert!(!reg.is_member(rock, Group::Shots));

        assert!(reg.is_member(shot, Group::Shots));
        assert_eq!(reg.count(Group::Updatable), 3);
        assert_eq!(reg.count(Group::Asteroids), 1);
    }

    #[test]
    fn test_groups_of_lists_memberships() {
        let (reg, player, rock, _) = populated();
        let rock_groups: Vec<Group> = reg.groups_of(rock).iter().collect();
        assert_eq!(rock_groups, vec![Group::Updatable, Group::Drawable, Group::Asteroids]);
        assert_eq!(reg.groups_of(player).iter().count(), 2);

        let radius = reg.get(rock).and_then(Entity::body).map(|b| b.radius);
        assert_eq!(radius, Some(40.0));
    }

    #[test]
    fn test_kill_removes_from_all_groups() {
        let (mut reg, _, rock, _) = populated();

        let killed = reg.kill(rock).expect("asteroid was alive");
        assert_eq!(killed.kind_name(), "asteroid");
        for group in Group::ALL {
            assert!(!reg.is_member(rock, group));
            assert!(reg.iter(group).all(|(id, _)| id != rock));
        }
        assert!(reg.kill(rock).is_none());
    }

    #[test]
    fn test_snapshot_survives_mutation() {
        let (mut reg, _, _, _) = populated();
        let snapshot = reg.ids(Group::Updatable);

        for id in &snapshot {
            reg.kill(*id);
            reg.spawn(Shot::new(Vec2::ZERO, Vec2::Y, 5.0, 1.0));
        }

        assert_eq!(reg.len(), snapshot.len());
        assert!(snapshot.iter().all(|id| !reg.contains(*id)));
    }

    #[test]
    fn test_ids_are_unique_and_ordered() {
        let (reg, player, rock, shot) = populated();
        assert!(player < rock && rock < shot);
        assert_eq!(reg.ids(Group::Drawable), vec![player, rock, shot]);
    }

    #[test]
    fn test_typed_accessors() {
        let (reg, player, rock, shot) = populated();
        assert!(reg.player(player).is_some());
        assert!(reg.player(rock).is_none());
        assert!(reg.asteroid(rock).is_some());
        assert!(reg.shot(shot).is_some());
        assert_eq!(reg.asteroids().count(), 1);
    }
}
