//! The world: entities, components, resources, and staged systems.

use std::any::{Any, TypeId};

use log::warn;
use rustc_hash::FxHashMap;

use crate::components::tag::Tag;
use crate::ecs::entity::{Entity, EntityAllocator};
use crate::ecs::query::{ComponentQuery, QueryIter};
use crate::ecs::store::{Component, ComponentStore};
use crate::ecs::system::{System, SystemStage};
use crate::error::EngineError;

/// Central container for all ECS data.
///
/// Owns the entity allocator, the component store, a map of shared
/// resources (input state, asset store, event queue, configuration), and
/// the staged system list. `update` drives one frame.
#[derive(Default)]
pub struct World {
    entities: EntityAllocator,
    components: ComponentStore,
    resources: FxHashMap<TypeId, Box<dyn Any>>,
    systems: Vec<(SystemStage, Box<dyn System>)>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    // --- entities ---

    pub fn create_entity(&mut self) -> Entity {
        self.entities.create()
    }

    /// Remove all of the entity's components, then free its id. Destroying
    /// a non-live entity warns and no-ops.
    pub fn destroy_entity(&mut self, entity: Entity) {
        if self.entities.destroy(entity) {
            self.components.remove_all(entity);
        }
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.entities.is_active(entity)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.count()
    }

    // --- components ---

    pub fn add_component<T: Component>(&mut self, entity: Entity, component: T) {
        if !self.entities.is_active(entity) {
            warn!("adding component to non-existent entity: {entity}");
            return;
        }
        self.components.insert(entity, component);
    }

    pub fn remove_component<T: Component>(&mut self, entity: Entity) -> Option<T> {
        self.components.remove::<T>(entity)
    }

    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.components.get::<T>(entity)
    }

    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        self.components.get_mut::<T>(entity)
    }

    pub fn has_component<T: Component>(&self, entity: Entity) -> bool {
        self.components.contains::<T>(entity)
    }

    /// All components of one kind, with their owners, in discovery order.
    pub fn components_of_kind<T: Component>(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.components.iter::<T>()
    }

    /// Lazy multi-kind query: single-pass iterator of entities holding
    /// every kind in `Q`, in the first kind's discovery order.
    pub fn query<Q: ComponentQuery>(&self) -> QueryIter<'_, Q> {
        QueryIter::new(&self.components)
    }

    /// Eager multi-kind query, materialized for repeated or random access.
    pub fn component_groups<Q: ComponentQuery>(&self) -> Vec<(Entity, Q::Refs<'_>)> {
        self.query::<Q>().collect()
    }

    pub(crate) fn store(&self) -> &ComponentStore {
        &self.components
    }

    /// Find the first entity whose [`Tag`] equals `name`. Linear scan;
    /// entity counts are small enough that this is fine.
    pub fn get_entity_by_tag(&self, name: &str) -> Option<Entity> {
        self.components
            .iter::<Tag>()
            .find(|(_, tag)| tag.0 == name)
            .map(|(entity, _)| entity)
    }

    // --- resources ---

    pub fn insert_resource<R: 'static>(&mut self, resource: R) {
        self.resources.insert(TypeId::of::<R>(), Box::new(resource));
    }

    pub fn resource<R: 'static>(&self) -> Option<&R> {
        self.resources
            .get(&TypeId::of::<R>())
            .and_then(|r| r.downcast_ref::<R>())
    }

    pub fn resource_mut<R: 'static>(&mut self) -> Option<&mut R> {
        self.resources
            .get_mut(&TypeId::of::<R>())
            .and_then(|r| r.downcast_mut::<R>())
    }

    pub fn remove_resource<R: 'static>(&mut self) -> Option<R> {
        self.resources
            .remove(&TypeId::of::<R>())
            .and_then(|r| r.downcast::<R>().ok())
            .map(|r| *r)
    }

    // --- systems ---

    /// Register a system under a stage. Stages run in [`SystemStage`]
    /// declaration order regardless of registration order; systems within a
    /// stage run in registration order.
    pub fn add_system(&mut self, stage: SystemStage, system: Box<dyn System>) {
        self.systems.push((stage, system));
        self.systems.sort_by_key(|(stage, _)| *stage);
    }

    /// Advance the world by one frame. Systems run to completion in stage
    /// order; the first error aborts the rest of the frame and is returned.
    /// Systems registered during the frame (through a `&mut World` handed to
    /// a running system) join the list and run from the next frame on.
    pub fn update(&mut self, dt: f32) -> Result<(), EngineError> {
        // Systems receive the world mutably, so take the list out for the
        // duration of the frame. Mid-frame registrations land in
        // self.systems and get merged back in below.
        let mut systems = std::mem::take(&mut self.systems);
        let mut result = Ok(());
        for (_, system) in systems.iter_mut() {
            if let Err(err) = system.update(self, dt) {
                result = Err(err);
                break;
            }
        }
        systems.append(&mut self.systems);
        systems.sort_by_key(|(stage, _)| *stage);
        self.systems = systems;
        result
    }

    /// Drop all entities, components, resources, and systems.
    pub fn clear(&mut self) {
        self.systems.clear();
        self.resources.clear();
        self.components.clear();
        self.entities.clear();
    }
}
