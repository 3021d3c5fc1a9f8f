//! Component Storage
//!
//! Components are grouped by kind. Each kind gets its own
//! `HashMap<Entity, T>`, keyed in the store by the component's `TypeId`, so a
//! lookup is resolved at compile time and never needs a runtime cast that can
//! fail. Storage for a kind is created the first time a value of that kind is
//! set.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;

use crate::ecs::{Component, Entity};

/// Type-erased view of one kind's storage, used for whole-entity operations
trait AnyStorage {
    fn remove_entity(&mut self, entity: Entity);
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Storage for a single component kind
struct ComponentStorage<T: Component> {
    components: HashMap<Entity, T>,
}

impl<T: Component> ComponentStorage<T> {
    fn new() -> Self {
        Self {
            components: HashMap::new(),
        }
    }
}

impl<T: Component> AnyStorage for ComponentStorage<T> {
    fn remove_entity(&mut self, entity: Entity) {
        self.components.remove(&entity);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Typed key-value storage keyed by entity, grouped by component kind
#[derive(Default)]
pub struct ComponentStore {
    storages: HashMap<TypeId, Box<dyn AnyStorage>>,
}

impl ComponentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn storage<T: Component>(&self) -> Option<&ComponentStorage<T>> {
        self.storages
            .get(&TypeId::of::<T>())
            .and_then(|storage| storage.as_any().downcast_ref::<ComponentStorage<T>>())
    }

    fn storage_mut<T: Component>(&mut self) -> Option<&mut ComponentStorage<T>> {
        self.storages
            .get_mut(&TypeId::of::<T>())
            .and_then(|storage| storage.as_any_mut().downcast_mut::<ComponentStorage<T>>())
    }

    /// Insert or overwrite the value of kind `T` for `entity`
    pub fn set<T: Component>(&mut self, entity: Entity, component: T) {
        let storage = self
            .storages
            .entry(TypeId::of::<T>())
            .or_insert_with(|| -> Box<dyn AnyStorage> {
                log::trace!("ComponentStore: creating storage for {}", type_name::<T>());
                Box::new(ComponentStorage::<T>::new())
            });

        if let Some(storage) = storage.as_any_mut().downcast_mut::<ComponentStorage<T>>() {
            storage.components.insert(entity, component);
        }
    }

    /// Get the value of kind `T` for `entity`, if present
    pub fn get<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.storage::<T>()?.components.get(&entity)
    }

    /// Get a mutable reference to the value of kind `T` for `entity`, if present
    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        self.storage_mut::<T>()?.components.get_mut(&entity)
    }

    /// Remove the value of kind `T` for `entity`, returning it
    pub fn remove<T: Component>(&mut self, entity: Entity) -> Option<T> {
        self.storage_mut::<T>()?.components.remove(&entity)
    }

    /// Whether `entity` has a value of kind `T`
    pub fn contains<T: Component>(&self, entity: Entity) -> bool {
        self.storage::<T>()
            .is_some_and(|storage| storage.components.contains_key(&entity))
    }

    /// Iterate every `(entity, value)` of kind `T`
    ///
    /// Iteration order is unspecified.
    pub fn all_of<T: Component>(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.storage::<T>()
            .into_iter()
            .flat_map(|storage| storage.components.iter().map(|(entity, c)| (*entity, c)))
    }

    /// Entities carrying kind `T`, sorted by id
    pub fn entities_with<T: Component>(&self) -> Vec<Entity> {
        let mut entities: Vec<Entity> = self.all_of::<T>().map(|(entity, _)| entity).collect();
        entities.sort_unstable();
        entities
    }

    /// Number of entities carrying kind `T`
    pub fn count<T: Component>(&self) -> usize {
        self.storage::<T>().map_or(0, |storage| storage.components.len())
    }

    /// Remove `entity` from every kind's storage
    pub fn destroy_entity(&mut self, entity: Entity) {
        for storage in self.storages.values_mut() {
            storage.remove_entity(entity);
        }
    }

    /// Number of component kinds seen so far
    #[cfg(test)]
    fn kind_count(&self) -> usize {
        self.storages.len()
    }
}
