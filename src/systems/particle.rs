//! Emitter pool advancement.
//!
//! Two independent phases per emitter per frame. Emission: an active
//! emitter accumulates `dt` into its timer, then emits one particle per
//! whole emission interval contained in it, so a large `dt` or a small
//! interval produces several particles in one frame. Simulation: every
//! live particle integrates its velocity, interpolates color and size over
//! its spent life fraction, and dies when its remaining life runs out.

use crate::components::particleemitter::{Particle, ParticleEmitter};
use crate::components::transform::Transform;
use crate::ecs::entity::Entity;
use crate::ecs::system::System;
use crate::ecs::world::World;
use crate::error::EngineError;
use crate::math::{Vec2, vec2};

#[derive(Default)]
pub struct ParticleSystem;

impl ParticleSystem {
    pub fn new() -> Self {
        Self
    }
}

impl System for ParticleSystem {
    fn name(&self) -> &'static str {
        "particle"
    }

    fn update(&mut self, world: &mut World, dt: f32) -> Result<(), EngineError> {
        let emitters: Vec<(Entity, Vec2)> = world
            .query::<(ParticleEmitter, Transform)>()
            .map(|(entity, (_, transform))| (entity, transform.position))
            .collect();

        for (entity, origin) in emitters {
            let Some(emitter) = world.get_component_mut::<ParticleEmitter>(entity) else {
                continue;
            };

            if emitter.active && emitter.params.emission_time > 0.0 {
                emitter.internal_time += dt;
                let interval = emitter.params.emission_time;
                // Count by division, not repeated subtraction; subtraction
                // rounding drops the last emission when dt is an exact
                // multiple of the interval.
                let emissions = (emitter.internal_time / interval).floor();
                if emissions > 0.0 {
                    for _ in 0..emissions as u32 {
                        emit(emitter, origin);
                    }
                    emitter.internal_time =
                        (emitter.internal_time - emissions * interval).max(0.0);
                }
            }

            let params = emitter.params;
            for particle in emitter.particles_mut() {
                if !particle.active {
                    continue;
                }
                if particle.life_remaining <= 0.0 {
                    particle.active = false;
                    continue;
                }

                let life_fraction = 1.0 - particle.life_remaining / params.lifetime;
                particle.color = params.initial_color.lerp(&params.final_color, life_fraction);
                particle.size = params.initial_size.lerp(&params.final_size, life_fraction);
                particle.position += particle.velocity * dt;
                particle.life_remaining -= dt;
            }
        }

        Ok(())
    }
}

fn emit(emitter: &mut ParticleEmitter, origin: Vec2) {
    let params = emitter.params;
    let particle = emitter.claim_slot();
    *particle = Particle {
        active: true,
        position: origin,
        velocity: params.initial_velocity + spread(params.velocity_variation),
        color: params.initial_color,
        size: params.initial_size,
        life_remaining: params.lifetime,
    };
}

/// Per-axis `uniform(-0.5, 0.5) * variation`.
fn spread(variation: Vec2) -> Vec2 {
    vec2(
        (fastrand::f32() - 0.5) * variation.x,
        (fastrand::f32() - 0.5) * variation.y,
    )
}
