//! System trait and update staging.

use crate::ecs::world::World;
use crate::error::EngineError;

/// Fixed per-frame update stages, run in declaration order.
///
/// The ordering encodes the frame's write-then-read contract: physics writes
/// transforms before scripts read ground state, scripts mutate components
/// before particle pools advance, and render always observes the frame's
/// final component state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SystemStage {
    Physics,
    Animation,
    Script,
    Particle,
    Audio,
    Render,
}

/// A unit of per-frame behavior operating on the world.
///
/// Systems run to completion, one at a time, in stage order; none may
/// suspend mid-update. Errors abort the remainder of the frame and surface
/// from [`World::update`].
pub trait System {
    /// Name used in diagnostics.
    fn name(&self) -> &'static str;

    fn update(&mut self, world: &mut World, dt: f32) -> Result<(), EngineError>;
}
