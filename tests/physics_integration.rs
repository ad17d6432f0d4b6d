//! Physics integration tests: free fall against explicit forward-Euler
//! integration, and settling onto static geometry.

use approx::assert_relative_eq;

use emberengine::components::level::Level;
use emberengine::components::physicsbody::{Collider, PhysicsBody};
use emberengine::components::transform::Transform;
use emberengine::ecs::{Entity, System, SystemStage, World};
use emberengine::math::{Rect, vec2};
use emberengine::systems::PhysicsSystem;
use emberengine::systems::physics::is_on_ground;

const EPSILON: f32 = 1e-3;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn spawn_faller(world: &mut World, x: f32, y: f32, size: f32) -> Entity {
    let entity = world.create_entity();
    world.add_component(entity, Transform::new(x, y).with_scale(size, size));
    world.add_component(entity, PhysicsBody::new(Collider::new(size, size)));
    entity
}

#[test]
fn test_free_fall_matches_explicit_euler() {
    let mut world = World::new();
    let entity = spawn_faller(&mut world, 0.0, 0.0, 10.0);
    let mut physics = PhysicsSystem::new();

    let dt = 0.1;
    let mut velocity = 0.0_f32;
    let mut position = 0.0_f32;
    for _ in 0..10 {
        physics.update(&mut world, dt).unwrap();
        velocity += 800.0 * dt;
        position += velocity * dt;
    }

    let body = world.get_component::<PhysicsBody>(entity).unwrap();
    let transform = world.get_component::<Transform>(entity).unwrap();
    assert_relative_eq!(body.velocity.y, 800.0, epsilon = EPSILON);
    assert_relative_eq!(transform.position.y, position, epsilon = EPSILON);
    assert_eq!(transform.position.x, 0.0);
}

#[test]
fn test_faller_settles_on_floor_without_penetration() {
    let mut world = World::new();
    let level_entity = world.create_entity();
    world.add_component(
        level_entity,
        Level {
            layers: vec![],
            collision_rects: vec![Rect::new(0.0, 50.0, 100.0, 10.0)],
        },
    );
    let entity = spawn_faller(&mut world, 40.0, 0.0, 10.0);
    let mut physics = PhysicsSystem::new();

    for _ in 0..120 {
        physics.update(&mut world, 1.0 / 60.0).unwrap();
        // Never strictly inside the floor, on any intermediate frame.
        let transform = world.get_component::<Transform>(entity).unwrap();
        assert!(transform.position.y + 10.0 <= 50.0 + EPSILON);
    }

    let body = world.get_component::<PhysicsBody>(entity).unwrap();
    let transform = world.get_component::<Transform>(entity).unwrap();
    assert!(approx_eq(transform.position.y + 10.0, 50.0));
    assert_eq!(body.velocity.y, 0.0);
    assert!(is_on_ground(&world, entity));
}

#[test]
fn test_collider_offset_keeps_transform_anchor() {
    let mut world = World::new();
    let level_entity = world.create_entity();
    world.add_component(
        level_entity,
        Level {
            layers: vec![],
            collision_rects: vec![Rect::new(0.0, 50.0, 100.0, 10.0)],
        },
    );
    // Visual anchor sits 2 units above the collider.
    let entity = world.create_entity();
    world.add_component(entity, Transform::new(40.0, 0.0).with_scale(10.0, 12.0));
    world.add_component(
        entity,
        PhysicsBody::new(Collider::new(10.0, 10.0).with_offset(0.0, 2.0)),
    );

    let mut physics = PhysicsSystem::new();
    for _ in 0..120 {
        physics.update(&mut world, 1.0 / 60.0).unwrap();
    }

    // Collider bottom rests at 50; the transform sits offset above it.
    let transform = world.get_component::<Transform>(entity).unwrap();
    assert!(approx_eq(transform.position.y + 2.0 + 10.0, 50.0));
}

#[test]
fn test_physics_runs_inside_world_update() {
    let mut world = World::new();
    let entity = spawn_faller(&mut world, 0.0, 0.0, 10.0);
    world.add_system(SystemStage::Physics, Box::new(PhysicsSystem::new()));

    world.update(0.1).unwrap();
    let transform = world.get_component::<Transform>(entity).unwrap();
    assert!(approx_eq(transform.position.y, 8.0));

    let body = world.get_component::<PhysicsBody>(entity).unwrap();
    assert!(approx_eq(body.velocity.y, 80.0));
    assert_eq!(body.acceleration, vec2(0.0, 0.0));
}
