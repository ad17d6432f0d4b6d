//! Entity identifiers and their allocator.
//!
//! Entities are opaque integer ids with no intrinsic data; all state hangs
//! off them through the component store. Destroyed ids go onto a free list
//! and are reused in stack-pop order.

use log::warn;
use rustc_hash::FxHashSet;

/// Opaque entity identifier. Identity only; never aliased while live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Entity(u32);

impl Entity {
    pub(crate) fn new(id: u32) -> Self {
        Self(id)
    }

    /// Raw numeric id, for diagnostics.
    pub fn id(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Allocates and recycles entity ids.
#[derive(Debug, Default)]
pub struct EntityAllocator {
    next_id: u32,
    freed: Vec<Entity>,
    active: FxHashSet<Entity>,
}

impl EntityAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop a freed id if one exists, otherwise allocate the next sequential
    /// id. O(1).
    pub fn create(&mut self) -> Entity {
        let entity = match self.freed.pop() {
            Some(entity) => entity,
            None => {
                let entity = Entity::new(self.next_id);
                self.next_id += 1;
                entity
            }
        };
        self.active.insert(entity);
        entity
    }

    /// Release an id back to the free list. Destroying a non-live entity is
    /// a no-op with a warning; it is common during iterative content
    /// authoring and must not take the game down.
    pub fn destroy(&mut self, entity: Entity) -> bool {
        if !self.active.remove(&entity) {
            warn!("attempting to destroy non-existent entity: {entity}");
            return false;
        }
        self.freed.push(entity);
        true
    }

    pub fn is_active(&self, entity: Entity) -> bool {
        self.active.contains(&entity)
    }

    pub fn count(&self) -> usize {
        self.active.len()
    }

    pub fn clear(&mut self) {
        self.active.clear();
        self.freed.clear();
        self.next_id = 0;
    }
}
