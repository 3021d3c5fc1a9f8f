//! ECS World implementation
//!
//! The world is the single aggregate of simulation state: the entity
//! registry, the component store, typed singleton resources (screen bounds,
//! device state, random number generator...) and the ordered schedule of
//! systems. There are no process-wide singletons.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;

use super::{Component, ComponentStore, EcsError, Entity, EntityRegistry, Schedule, System};
use crate::foundation::time::SimClock;

/// ECS World containing all entities, components, resources and systems
#[derive(Default)]
pub struct World {
    entities: EntityRegistry,
    components: ComponentStore,
    resources: HashMap<TypeId, Box<dyn Any>>,
    schedule: Schedule,
    clock: SimClock,
}

impl World {
    /// Create a new world
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new entity with no components
    pub fn spawn(&mut self) -> Entity {
        let entity = self.entities.create();
        log::trace!("World: spawned entity {entity}");
        entity
    }

    /// Destroy an entity and every component attached to it
    ///
    /// Destroying an entity that is already dead is a no-op. The entity's
    /// components are gone by the time this returns, so later systems never
    /// see a partially destroyed entity.
    pub fn despawn(&mut self, entity: Entity) -> bool {
        if !self.entities.destroy(entity) {
            return false;
        }
        self.components.destroy_entity(entity);
        log::trace!("World: despawned entity {entity}");
        true
    }

    /// Whether the entity is alive
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.entities.is_alive(entity)
    }

    /// Number of live entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Iterate live entities in ascending id order
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.iter()
    }

    /// Add or overwrite a component on an entity
    ///
    /// Writes to dead entities are dropped with a warning.
    pub fn insert<T: Component>(&mut self, entity: Entity, component: T) {
        if !self.entities.is_alive(entity) {
            log::warn!("World: ignoring {} insert on dead entity {entity}", type_name::<T>());
            return;
        }
        self.components.set(entity, component);
    }

    /// Get a component from an entity
    pub fn get<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.components.get(entity)
    }

    /// Get a mutable component from an entity
    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        self.components.get_mut(entity)
    }

    /// Look up a component, reporting why it could not be found
    pub fn try_get<T: Component>(&self, entity: Entity) -> Result<&T, EcsError> {
        if !self.entities.is_alive(entity) {
            return Err(EcsError::StaleEntity(entity));
        }
        self.components.get(entity).ok_or(EcsError::MissingComponent {
            entity,
            component: type_name::<T>(),
        })
    }

    /// Remove a component from an entity, returning it
    pub fn remove<T: Component>(&mut self, entity: Entity) -> Option<T> {
        self.components.remove(entity)
    }

    /// Whether the entity carries a component of kind `T`
    pub fn has<T: Component>(&self, entity: Entity) -> bool {
        self.components.contains::<T>(entity)
    }

    /// Iterate every entity with a component of kind `T`
    ///
    /// Order is unspecified; use [`World::entities_with`] when the loop body
    /// needs to mutate the world.
    pub fn query<T: Component>(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.components.all_of::<T>()
    }

    /// Snapshot of the entities carrying kind `T`, sorted by id
    pub fn entities_with<T: Component>(&self) -> Vec<Entity> {
        self.components.entities_with::<T>()
    }

    /// Number of entities carrying kind `T`
    pub fn count<T: Component>(&self) -> usize {
        self.components.count::<T>()
    }

    /// Read-only access to the component store
    pub fn components(&self) -> &ComponentStore {
        &self.components
    }

    /// Insert or replace a singleton resource
    pub fn insert_resource<R: 'static>(&mut self, resource: R) {
        self.resources.insert(TypeId::of::<R>(), Box::new(resource));
    }

    /// Get a singleton resource
    pub fn resource<R: 'static>(&self) -> Option<&R> {
        self.resources
            .get(&TypeId::of::<R>())
            .and_then(|resource| resource.downcast_ref::<R>())
    }

    /// Get a mutable singleton resource
    pub fn resource_mut<R: 'static>(&mut self) -> Option<&mut R> {
        self.resources
            .get_mut(&TypeId::of::<R>())
            .and_then(|resource| resource.downcast_mut::<R>())
    }

    /// Remove a singleton resource, returning it
    pub fn remove_resource<R: 'static>(&mut self) -> Option<R> {
        self.resources
            .remove(&TypeId::of::<R>())
            .and_then(|resource| resource.downcast::<R>().ok())
            .map(|resource| *resource)
    }

    /// Append a system to the end of the schedule
    pub fn add_system(&mut self, system: Box<dyn System>) {
        self.schedule.add_system(system);
    }

    /// Names of the scheduled systems in execution order
    pub fn system_names(&self) -> Vec<&'static str> {
        self.schedule.system_names()
    }

    /// Advance the simulation by one tick
    ///
    /// Advances the clock, then runs every system in order. Systems added
    /// while the tick is running start on the next tick.
    pub fn update(&mut self, delta_time: f32) {
        self.clock.advance(delta_time);

        let mut schedule = std::mem::take(&mut self.schedule);
        schedule.run(self, delta_time);
        schedule.append(&mut self.schedule);
        self.schedule = schedule;
    }

    /// Simulated seconds since the world was created
    pub fn elapsed(&self) -> f32 {
        self.clock.total_time()
    }

    /// Number of completed or in-progress ticks
    pub fn tick(&self) -> u64 {
        self.clock.frame_count()
    }
}
