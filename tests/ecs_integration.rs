//! ECS integration tests: id reuse, component lifecycle, and query
//! correctness against a reference implementation.

use rustc_hash::FxHashSet;

use emberengine::components::tag::Tag;
use emberengine::ecs::{Component, Entity, World};

struct Position(f32, f32);
impl Component for Position {}

struct Health(i32);
impl Component for Health {}

struct Marker;
impl Component for Marker {}

#[test]
fn test_no_two_live_entities_share_an_id() {
    let mut world = World::new();
    let mut live: FxHashSet<Entity> = FxHashSet::default();
    fastrand::seed(7);

    for _ in 0..2000 {
        if live.is_empty() || fastrand::bool() {
            let entity = world.create_entity();
            assert!(live.insert(entity), "id {entity:?} aliased a live entity");
        } else {
            let victim = *live.iter().nth(fastrand::usize(..live.len())).unwrap();
            live.remove(&victim);
            world.destroy_entity(victim);
        }
    }
    assert_eq!(world.entity_count(), live.len());
}

#[test]
fn test_destroyed_id_is_reused_stack_order() {
    let mut world = World::new();
    let a = world.create_entity();
    let b = world.create_entity();
    world.destroy_entity(a);
    world.destroy_entity(b);
    // Most recently freed comes back first.
    assert_eq!(world.create_entity(), b);
    assert_eq!(world.create_entity(), a);
}

#[test]
fn test_has_component_tracks_add_and_remove() {
    let mut world = World::new();
    let entity = world.create_entity();
    assert!(!world.has_component::<Health>(entity));
    world.add_component(entity, Health(10));
    assert!(world.has_component::<Health>(entity));
    assert_eq!(world.remove_component::<Health>(entity).map(|h| h.0), Some(10));
    assert!(!world.has_component::<Health>(entity));
}

/// Random attach/detach sequences, checked against a reference
/// set-intersection model.
#[test]
fn test_multi_kind_query_matches_reference_intersection() {
    let mut world = World::new();
    fastrand::seed(42);

    let entities: Vec<Entity> = (0..64).map(|_| world.create_entity()).collect();
    let mut with_position: FxHashSet<Entity> = FxHashSet::default();
    let mut with_health: FxHashSet<Entity> = FxHashSet::default();

    for _ in 0..500 {
        let entity = entities[fastrand::usize(..entities.len())];
        match fastrand::u32(..4) {
            0 => {
                world.add_component(entity, Position(0.0, 0.0));
                with_position.insert(entity);
            }
            1 => {
                world.add_component(entity, Health(1));
                with_health.insert(entity);
            }
            2 => {
                world.remove_component::<Position>(entity);
                with_position.remove(&entity);
            }
            _ => {
                world.remove_component::<Health>(entity);
                with_health.remove(&entity);
            }
        }

        let expected: FxHashSet<Entity> =
            with_position.intersection(&with_health).copied().collect();
        let queried: FxHashSet<Entity> = world
            .query::<(Position, Health)>()
            .map(|(entity, _)| entity)
            .collect();
        assert_eq!(queried, expected);
    }
}

#[test]
fn test_query_preserves_first_kind_discovery_order() {
    let mut world = World::new();
    let a = world.create_entity();
    let b = world.create_entity();
    let c = world.create_entity();
    // Attach Position in c, a, b order; all three get Health.
    world.add_component(c, Position(3.0, 0.0));
    world.add_component(a, Position(1.0, 0.0));
    world.add_component(b, Position(2.0, 0.0));
    for entity in [a, b, c] {
        world.add_component(entity, Health(1));
    }

    let order: Vec<Entity> = world
        .query::<(Position, Health)>()
        .map(|(entity, _)| entity)
        .collect();
    assert_eq!(order, vec![c, a, b]);
}

#[test]
fn test_query_with_no_matches_is_empty() {
    let mut world = World::new();
    let entity = world.create_entity();
    world.add_component(entity, Position(0.0, 0.0));
    assert_eq!(world.query::<(Position, Health)>().count(), 0);
    assert_eq!(world.query::<(Marker,)>().count(), 0);
}

#[test]
fn test_component_groups_allow_repeated_access() {
    let mut world = World::new();
    for i in 0..4 {
        let entity = world.create_entity();
        world.add_component(entity, Position(i as f32, 0.0));
    }
    let groups = world.component_groups::<(Position,)>();
    assert_eq!(groups.len(), 4);
    // Indexable, iterable twice.
    let first_pass: Vec<f32> = groups.iter().map(|(_, (p,))| p.0).collect();
    let second_pass: Vec<f32> = groups.iter().map(|(_, (p,))| p.0).collect();
    assert_eq!(first_pass, second_pass);
    assert_eq!(groups[0].1.0.0, 0.0);
}

#[test]
fn test_get_entity_by_tag_none_and_unique() {
    let mut world = World::new();
    assert!(world.get_entity_by_tag("Camera").is_none());

    let camera = world.create_entity();
    world.add_component(camera, Tag::new("Camera"));
    let player = world.create_entity();
    world.add_component(player, Tag::new("Player"));

    assert_eq!(world.get_entity_by_tag("Camera"), Some(camera));
    world.destroy_entity(camera);
    assert!(world.get_entity_by_tag("Camera").is_none());
}
