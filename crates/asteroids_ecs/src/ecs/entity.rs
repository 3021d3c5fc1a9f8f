//! Entity implementation and registry

use std::collections::BTreeSet;
use std::fmt;

/// Entity identifier
///
/// Carries no data of its own; it is only a join key into the component store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Entity {
    id: u32,
}

impl Entity {
    /// Create an entity handle with the given ID
    ///
    /// Only the registry hands out live ids. Handles built here are useful for
    /// tests and for ids received from outside the world.
    pub const fn from_raw(id: u32) -> Self {
        Self { id }
    }

    /// Get the entity ID
    pub const fn id(&self) -> u32 {
        self.id
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.id)
    }
}

/// Allocates entity ids and tracks which ones are alive
///
/// Ids start at 1 and increase monotonically. They are never reused for the
/// lifetime of the registry, so a stale id can never alias a newer entity.
#[derive(Debug)]
pub struct EntityRegistry {
    next_entity_id: u32,
    alive: BTreeSet<Entity>,
}

impl EntityRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            next_entity_id: 1,
            alive: BTreeSet::new(),
        }
    }

    /// Allocate a fresh entity
    pub fn create(&mut self) -> Entity {
        let entity = Entity::from_raw(self.next_entity_id);
        self.next_entity_id += 1;
        self.alive.insert(entity);
        entity
    }

    /// Mark an entity as destroyed
    ///
    /// Returns `false` if the entity was already dead; destroying twice is a no-op.
    pub fn destroy(&mut self, entity: Entity) -> bool {
        self.alive.remove(&entity)
    }

    /// Whether the entity has been created and not yet destroyed
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.alive.contains(&entity)
    }

    /// Number of live entities
    pub fn len(&self) -> usize {
        self.alive.len()
    }

    /// Whether no entity is alive
    pub fn is_empty(&self) -> bool {
        self.alive.is_empty()
    }

    /// Iterate live entities in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.alive.iter().copied()
    }
}

impl Default for EntityRegistry {
    fn default() -> Self {
        Self::new()
    }
}
