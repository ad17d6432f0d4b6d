//! Fixed-pool particle emitter component.
//!
//! Every emitter owns a fixed-capacity particle pool used as a ring buffer:
//! when the pool is full, emission overwrites the oldest slot. The pool
//! never grows, so the particle step is allocation-free.

use crate::ecs::store::Component;
use crate::math::{Color, Vec2};

/// Particles per emitter pool. Construction-time constant; emission wraps
/// around rather than growing.
pub const MAX_PARTICLES: usize = 1000;

/// One slot in the pool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub active: bool,
    pub position: Vec2,
    pub velocity: Vec2,
    pub color: Color,
    pub size: Vec2,
    pub life_remaining: f32,
}

impl Default for Particle {
    fn default() -> Self {
        Self {
            active: false,
            position: Vec2::zeros(),
            velocity: Vec2::zeros(),
            color: Color::WHITE,
            size: Vec2::zeros(),
            life_remaining: 0.0,
        }
    }
}

/// Shared parameters for every particle an emitter produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleParams {
    pub initial_velocity: Vec2,
    /// Per-axis spread: each emitted particle adds
    /// `uniform(-0.5, 0.5) * velocity_variation` to its velocity.
    pub velocity_variation: Vec2,
    /// Seconds a particle lives.
    pub lifetime: f32,
    pub initial_color: Color,
    pub final_color: Color,
    pub initial_size: Vec2,
    pub final_size: Vec2,
    /// Seconds between emissions.
    pub emission_time: f32,
}

/// Particle emitter with a fixed ring-buffer pool.
pub struct ParticleEmitter {
    pub params: ParticleParams,
    particles: Box<[Particle]>,
    /// Ring cursor: index of the slot the next emission claims.
    next_slot: usize,
    /// Emission-time accumulator.
    pub internal_time: f32,
    pub active: bool,
}

impl ParticleEmitter {
    pub fn new(params: ParticleParams) -> Self {
        Self {
            params,
            particles: vec![Particle::default(); MAX_PARTICLES].into_boxed_slice(),
            next_slot: 0,
            internal_time: 0.0,
            active: true,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub(crate) fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Claim the next ring slot, overwriting the oldest particle when the
    /// pool has wrapped.
    pub(crate) fn claim_slot(&mut self) -> &mut Particle {
        let index = self.next_slot;
        self.next_slot = (self.next_slot + 1) % self.particles.len();
        &mut self.particles[index]
    }

    pub fn active_count(&self) -> usize {
        self.particles.iter().filter(|p| p.active).count()
    }
}

impl Component for ParticleEmitter {}
