//! Multi-kind component queries.
//!
//! A query names an ordered list of component kinds and yields every entity
//! holding *all* of them, paired with shared references to the matching
//! components. Results come in the discovery order of the first kind's map.
//!
//! Two forms exist on [`World`](crate::ecs::world::World):
//! `query` (lazy, single-pass, not restartable) and `component_groups`
//! (eager `Vec` for repeated or random access). Mutation goes through
//! `get_component_mut` per entity; systems that need to write while scanning
//! collect what they need first.

use smallvec::SmallVec;

use crate::ecs::entity::Entity;
use crate::ecs::store::{Component, ComponentStore};

/// Candidate entity list seeded from the first kind's map. Most queries
/// touch a handful of entities, so keep small results inline.
pub type QuerySeed = SmallVec<[Entity; 32]>;

/// An ordered tuple of component kinds that can be fetched together.
pub trait ComponentQuery {
    /// Shared references to the matching components.
    type Refs<'w>;

    /// Entities holding the first kind, in discovery order.
    fn seed(store: &ComponentStore) -> QuerySeed;

    /// Fetch all kinds for one entity; `None` if any kind is missing.
    fn fetch(store: &ComponentStore, entity: Entity) -> Option<Self::Refs<'_>>;
}

// The empty query matches nothing, by contract.
impl ComponentQuery for () {
    type Refs<'w> = ();

    fn seed(_store: &ComponentStore) -> QuerySeed {
        QuerySeed::new()
    }

    fn fetch(_store: &ComponentStore, _entity: Entity) -> Option<()> {
        None
    }
}

macro_rules! impl_component_query {
    ($($kind:ident),+) => {
        impl<$($kind: Component),+> ComponentQuery for ($($kind,)+) {
            type Refs<'w> = ($(&'w $kind,)+);

            fn seed(store: &ComponentStore) -> QuerySeed {
                impl_component_query!(@first store, $($kind),+)
            }

            fn fetch(store: &ComponentStore, entity: Entity) -> Option<Self::Refs<'_>> {
                Some(($(store.get::<$kind>(entity)?,)+))
            }
        }
    };
    (@first $store:ident, $head:ident $(, $rest:ident)*) => {
        $store.entities_with::<$head>().collect()
    };
}

impl_component_query!(A);
impl_component_query!(A, B);
impl_component_query!(A, B, C);
impl_component_query!(A, B, C, D);

/// Lazy query iterator. Finite, single-pass, not restartable; collect it
/// (or use `component_groups`) when random access is needed.
pub struct QueryIter<'w, Q: ComponentQuery> {
    store: &'w ComponentStore,
    seed: smallvec::IntoIter<[Entity; 32]>,
    _marker: std::marker::PhantomData<Q>,
}

impl<'w, Q: ComponentQuery> QueryIter<'w, Q> {
    pub(crate) fn new(store: &'w ComponentStore) -> Self {
        Self {
            store,
            seed: Q::seed(store).into_iter(),
            _marker: std::marker::PhantomData,
        }
    }
}

impl<'w, Q: ComponentQuery> Iterator for QueryIter<'w, Q> {
    type Item = (Entity, Q::Refs<'w>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entity = self.seed.next()?;
            if let Some(refs) = Q::fetch(self.store, entity) {
                return Some((entity, refs));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pos(f32);
    struct Vel(f32);
    struct Frozen;
    impl Component for Pos {}
    impl Component for Vel {}
    impl Component for Frozen {}

    fn e(id: u32) -> Entity {
        Entity::new(id)
    }

    fn store_with_three() -> ComponentStore {
        let mut store = ComponentStore::new();
        store.insert(e(0), Pos(0.0));
        store.insert(e(1), Pos(1.0));
        store.insert(e(2), Pos(2.0));
        store.insert(e(0), Vel(10.0));
        store.insert(e(2), Vel(20.0));
        store.insert(e(1), Frozen);
        store
    }

    #[test]
    fn test_query_intersects_kinds() {
        let store = store_with_three();
        let hits: Vec<u32> = QueryIter::<(Pos, Vel)>::new(&store)
            .map(|(e, _)| e.id())
            .collect();
        assert_eq!(hits, vec![0, 2]);
    }

    #[test]
    fn test_query_order_follows_first_kind() {
        let mut store = ComponentStore::new();
        store.insert(e(5), Pos(0.0));
        store.insert(e(3), Pos(0.0));
        store.insert(e(3), Vel(0.0));
        store.insert(e(5), Vel(0.0));
        let hits: Vec<u32> = QueryIter::<(Pos, Vel)>::new(&store)
            .map(|(e, _)| e.id())
            .collect();
        // Pos was discovered 5 then 3, so the query follows that order.
        assert_eq!(hits, vec![5, 3]);
    }

    #[test]
    fn test_query_with_zero_matches_is_empty() {
        let mut store = ComponentStore::new();
        store.insert(e(0), Pos(0.0));
        assert_eq!(QueryIter::<(Pos, Vel)>::new(&store).count(), 0);
    }

    #[test]
    fn test_empty_kind_list_yields_nothing() {
        let store = store_with_three();
        assert_eq!(QueryIter::<()>::new(&store).count(), 0);
    }

    #[test]
    fn test_fetched_refs_carry_component_data() {
        let store = store_with_three();
        let sum: f32 = QueryIter::<(Pos, Vel)>::new(&store)
            .map(|(_, (p, v))| p.0 + v.0)
            .sum();
        assert_eq!(sum, 0.0 + 10.0 + 2.0 + 20.0);
    }
}
