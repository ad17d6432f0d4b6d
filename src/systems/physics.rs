//! Gravity integration and swept AABB collision resolution.
//!
//! Each dynamic body runs Integrate -> Sweep -> Resolve once per frame.
//! Integration applies gravity to the one-shot acceleration accumulator and
//! folds it into velocity. The sweep divides the frame's displacement into
//! sub-steps of at most one world unit so a fast body cannot tunnel through
//! thin geometry. Each sub-step tentatively advances the body's collider
//! rectangle and tests it against every other non-trigger body (in entity
//! discovery order, excluding the body itself) and then the level's static
//! collision rectangles; the first overlap wins. A hit is classified as
//! horizontal when the pre-step rectangle was entirely left or right of the
//! obstacle, vertical otherwise; the colliding axis is clamped to the
//! obstacle's near edge, its velocity zeroed, and the same sub-step retried
//! so the other axis can still advance. Resolved positions are visible to
//! bodies processed later in the same frame.

use crate::components::level::Level;
use crate::components::physicsbody::PhysicsBody;
use crate::components::transform::Transform;
use crate::ecs::entity::Entity;
use crate::ecs::system::System;
use crate::ecs::world::World;
use crate::error::EngineError;
use crate::math::{Rect, Vec2, vec2};
use crate::resources::engineconfig::EngineConfig;

fn default_gravity() -> Vec2 {
    vec2(0.0, 800.0)
}

/// Per-body snapshot the resolver works on. Rectangles are updated in
/// place as bodies resolve, so later bodies collide against resolved
/// positions, not stale ones.
#[derive(Debug, Clone, Copy)]
struct BodyRect {
    entity: Entity,
    rect: Rect,
    is_solid: bool,
    is_trigger: bool,
}

#[derive(Default)]
pub struct PhysicsSystem;

impl PhysicsSystem {
    pub fn new() -> Self {
        Self
    }
}

impl System for PhysicsSystem {
    fn name(&self) -> &'static str {
        "physics"
    }

    fn update(&mut self, world: &mut World, dt: f32) -> Result<(), EngineError> {
        let gravity = world
            .resource::<EngineConfig>()
            .map_or_else(default_gravity, |config| config.gravity);

        let mut bodies: Vec<BodyRect> = world
            .query::<(PhysicsBody, Transform)>()
            .map(|(entity, (body, transform))| BodyRect {
                entity,
                rect: body.collider.rect_at(transform.position),
                is_solid: body.is_solid,
                is_trigger: body.collider.is_trigger,
            })
            .collect();

        let level_rects: Vec<Rect> = world
            .components_of_kind::<Level>()
            .flat_map(|(_, level)| level.collision_rects.iter().copied())
            .collect();

        for index in 0..bodies.len() {
            let entity = bodies[index].entity;
            if bodies[index].is_solid {
                // Solids are obstacles only; they never integrate.
                continue;
            }

            let Some(body) = world.get_component_mut::<PhysicsBody>(entity) else {
                continue;
            };
            body.acceleration += gravity;
            body.velocity += body.acceleration * dt;
            body.acceleration = Vec2::zeros();
            let mut velocity = body.velocity;
            let offset = body.collider.offset;
            let is_trigger = body.collider.is_trigger;

            if velocity.x == 0.0 && velocity.y == 0.0 {
                continue;
            }

            let displacement = velocity * dt;
            let mut current = bodies[index].rect;

            if is_trigger {
                // Triggers move but are never resolved against anything.
                current = current.translated(displacement);
            } else {
                let n_steps = displacement.norm().ceil().max(1.0) as u32;
                let mut step = displacement / n_steps as f32;

                let mut steps_taken = 0;
                while steps_taken < n_steps && (step.x != 0.0 || step.y != 0.0) {
                    let tentative = current.translated(step);
                    let obstacle = first_overlap(&tentative, index, &bodies, &level_rects);

                    let Some(obstacle) = obstacle else {
                        current = tentative;
                        steps_taken += 1;
                        continue;
                    };

                    if current.is_left_of(&obstacle) {
                        current.x = obstacle.left() - current.w;
                        step.x = 0.0;
                        velocity.x = 0.0;
                    } else if current.is_right_of(&obstacle) {
                        current.x = obstacle.right();
                        step.x = 0.0;
                        velocity.x = 0.0;
                    } else if step.y > 0.0 {
                        current.y = obstacle.top() - current.h;
                        step.y = 0.0;
                        velocity.y = 0.0;
                    } else {
                        current.y = obstacle.bottom();
                        step.y = 0.0;
                        velocity.y = 0.0;
                    }
                    // Retry the same sub-step with the clamped axis so the
                    // other axis can still advance.
                }
            }

            bodies[index].rect = current;
            if let Some(body) = world.get_component_mut::<PhysicsBody>(entity) {
                body.velocity = velocity;
            }
            if let Some(transform) = world.get_component_mut::<Transform>(entity) {
                transform.position = current.origin() - offset;
            }
        }

        Ok(())
    }
}

/// First obstacle the tentative rectangle overlaps: other non-trigger
/// bodies in discovery order first, then static level geometry. `exclude`
/// keeps the body under resolution out of its own broad phase.
fn first_overlap(
    tentative: &Rect,
    exclude: usize,
    bodies: &[BodyRect],
    level_rects: &[Rect],
) -> Option<Rect> {
    for (index, other) in bodies.iter().enumerate() {
        if index == exclude || other.is_trigger {
            continue;
        }
        if tentative.overlaps(&other.rect) {
            return Some(other.rect);
        }
    }
    level_rects
        .iter()
        .find(|rect| tentative.overlaps(rect))
        .copied()
}

/// Whether the entity's collider, shifted down one unit, touches static
/// level geometry. Checks level rectangles only; resting on another dynamic
/// body does not count as grounded.
pub fn is_on_ground(world: &World, entity: Entity) -> bool {
    let Some(body) = world.get_component::<PhysicsBody>(entity) else {
        return false;
    };
    let Some(transform) = world.get_component::<Transform>(entity) else {
        return false;
    };
    let probe = body
        .collider
        .rect_at(transform.position)
        .translated(vec2(0.0, 1.0));
    world
        .components_of_kind::<Level>()
        .flat_map(|(_, level)| level.collision_rects.iter())
        .any(|rect| probe.overlaps(rect))
}
