//! Per-kind component storage.
//!
//! Each component kind gets its own sparse map from entity to component
//! instance, keyed by the kind's `TypeId` and hidden behind a type-erased
//! box. Kinds auto-register the first time a component of that kind is
//! inserted; looking up a kind that was never inserted simply finds nothing.
//!
//! Every typed map also keeps an insertion-order list of entities so that
//! iteration (and therefore multi-kind query results) is deterministic.

use std::any::{Any, TypeId};

use rustc_hash::FxHashMap;

use crate::ecs::entity::Entity;

/// Marker trait for component kinds. Components are plain data (or, for
/// scripts, boxed behavior) attached to exactly one entity each.
pub trait Component: 'static {}

/// Typed sparse map for one component kind.
struct ComponentMap<T: Component> {
    entries: FxHashMap<Entity, T>,
    order: Vec<Entity>,
}

impl<T: Component> ComponentMap<T> {
    fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
            order: Vec::new(),
        }
    }

    fn insert(&mut self, entity: Entity, component: T) {
        if self.entries.insert(entity, component).is_none() {
            self.order.push(entity);
        }
    }

    fn remove(&mut self, entity: Entity) -> Option<T> {
        let removed = self.entries.remove(&entity);
        if removed.is_some() {
            self.order.retain(|&e| e != entity);
        }
        removed
    }

    fn iter(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.order
            .iter()
            .filter_map(|&e| self.entries.get(&e).map(|c| (e, c)))
    }
}

/// Object-safe view over a typed map, for operations that do not care about
/// the component type.
trait ErasedMap {
    fn remove_entity(&mut self, entity: Entity);
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn clear(&mut self);
}

impl<T: Component> ErasedMap for ComponentMap<T> {
    fn remove_entity(&mut self, entity: Entity) {
        self.remove(entity);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

/// All component maps, keyed by kind.
#[derive(Default)]
pub struct ComponentStore {
    maps: FxHashMap<TypeId, Box<dyn ErasedMap>>,
}

impl ComponentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn map<T: Component>(&self) -> Option<&ComponentMap<T>> {
        self.maps
            .get(&TypeId::of::<T>())
            .and_then(|m| m.as_any().downcast_ref::<ComponentMap<T>>())
    }

    fn map_mut<T: Component>(&mut self) -> Option<&mut ComponentMap<T>> {
        self.maps
            .get_mut(&TypeId::of::<T>())
            .and_then(|m| m.as_any_mut().downcast_mut::<ComponentMap<T>>())
    }

    /// Attach a component to an entity, replacing any previous instance of
    /// the same kind. At most one instance of each kind per entity.
    pub fn insert<T: Component>(&mut self, entity: Entity, component: T) {
        let map = self
            .maps
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(ComponentMap::<T>::new()));
        if let Some(map) = map.as_any_mut().downcast_mut::<ComponentMap<T>>() {
            map.insert(entity, component);
        }
    }

    pub fn remove<T: Component>(&mut self, entity: Entity) -> Option<T> {
        self.map_mut::<T>()?.remove(entity)
    }

    pub fn get<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.map::<T>()?.entries.get(&entity)
    }

    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        self.map_mut::<T>()?.entries.get_mut(&entity)
    }

    pub fn contains<T: Component>(&self, entity: Entity) -> bool {
        self.map::<T>()
            .is_some_and(|m| m.entries.contains_key(&entity))
    }

    /// Iterate all components of one kind, in insertion order.
    pub fn iter<T: Component>(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.map::<T>().into_iter().flat_map(|m| m.iter())
    }

    /// Entities currently holding a component of kind `T`, in insertion
    /// order.
    pub fn entities_with<T: Component>(&self) -> impl Iterator<Item = Entity> + '_ {
        self.map::<T>()
            .into_iter()
            .flat_map(|m| m.order.iter().copied())
    }

    pub fn count<T: Component>(&self) -> usize {
        self.map::<T>().map_or(0, |m| m.entries.len())
    }

    /// Strip every component owned by `entity`, across all kinds.
    pub fn remove_all(&mut self, entity: Entity) {
        for map in self.maps.values_mut() {
            map.remove_entity(entity);
        }
    }

    pub fn clear(&mut self) {
        for map in self.maps.values_mut() {
            map.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Health(u32);
    struct Label(&'static str);
    impl Component for Health {}
    impl Component for Label {}

    fn e(id: u32) -> Entity {
        Entity::new(id)
    }

    #[test]
    fn test_contains_after_insert_and_remove() {
        let mut store = ComponentStore::new();
        store.insert(e(0), Health(10));
        assert!(store.contains::<Health>(e(0)));
        store.remove::<Health>(e(0));
        assert!(!store.contains::<Health>(e(0)));
    }

    #[test]
    fn test_at_most_one_instance_per_kind() {
        let mut store = ComponentStore::new();
        store.insert(e(0), Health(10));
        store.insert(e(0), Health(99));
        assert_eq!(store.count::<Health>(), 1);
        assert_eq!(store.get::<Health>(e(0)).map(|h| h.0), Some(99));
    }

    #[test]
    fn test_unknown_kind_finds_nothing() {
        let store = ComponentStore::new();
        assert!(store.get::<Health>(e(0)).is_none());
        assert!(!store.contains::<Health>(e(0)));
        assert_eq!(store.iter::<Health>().count(), 0);
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let mut store = ComponentStore::new();
        store.insert(e(3), Label("c"));
        store.insert(e(1), Label("a"));
        store.insert(e(2), Label("b"));
        let order: Vec<u32> = store.iter::<Label>().map(|(e, _)| e.id()).collect();
        assert_eq!(order, vec![3, 1, 2]);

        store.remove::<Label>(e(1));
        let order: Vec<u32> = store.iter::<Label>().map(|(e, _)| e.id()).collect();
        assert_eq!(order, vec![3, 2]);
    }

    #[test]
    fn test_remove_all_strips_every_kind() {
        let mut store = ComponentStore::new();
        store.insert(e(0), Health(10));
        store.insert(e(0), Label("a"));
        store.insert(e(1), Health(20));
        store.remove_all(e(0));
        assert!(!store.contains::<Health>(e(0)));
        assert!(!store.contains::<Label>(e(0)));
        assert!(store.contains::<Health>(e(1)));
    }

    #[test]
    fn test_get_mut_mutates_in_place() {
        let mut store = ComponentStore::new();
        store.insert(e(0), Health(10));
        if let Some(h) = store.get_mut::<Health>(e(0)) {
            h.0 = 42;
        }
        assert_eq!(store.get::<Health>(e(0)).map(|h| h.0), Some(42));
    }
}
