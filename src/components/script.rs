//! Per-entity behavior scripts.
//!
//! Scripts are boxed trait objects rather than a class hierarchy. Each one
//! receives a [`ScriptContext`] capability handle scoped to its own entity,
//! through which it reads input, mutates components, queries physics, and
//! publishes audio commands. The script system calls `on_create` once,
//! `on_event` for each event published this frame, then `on_update`.

use crate::ecs::entity::Entity;
use crate::ecs::store::Component;
use crate::ecs::world::World;
use crate::events::{AudioCmd, AudioOutbox, EventQueue, GameEvent};
use crate::resources::input::InputState;

/// Capability handle a script acts through during a callback.
pub struct ScriptContext<'a> {
    pub world: &'a mut World,
    /// The entity this script is attached to.
    pub entity: Entity,
}

impl<'a> ScriptContext<'a> {
    /// A component on the script's own entity.
    pub fn component<T: Component>(&self) -> Option<&T> {
        self.world.get_component::<T>(self.entity)
    }

    pub fn component_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.world.get_component_mut::<T>(self.entity)
    }

    /// The host-maintained input state, if installed.
    pub fn input(&self) -> Option<&InputState> {
        self.world.resource::<InputState>()
    }

    /// Whether this entity's collider is resting on level geometry.
    pub fn is_on_ground(&self) -> bool {
        crate::systems::physics::is_on_ground(self.world, self.entity)
    }

    /// Queue a one-shot sound effect for the audio system to forward.
    pub fn play_sound(&mut self, name: impl Into<String>) {
        if let Some(outbox) = self.world.resource_mut::<AudioOutbox>() {
            outbox.push(AudioCmd::PlayFx { id: name.into() });
        }
    }

    /// Publish a game event for delivery to every script.
    pub fn publish(&mut self, event: GameEvent) {
        if let Some(queue) = self.world.resource_mut::<EventQueue>() {
            queue.publish(event);
        }
    }
}

/// Behavior attached to an entity.
#[allow(unused_variables)]
pub trait Script {
    /// Runs once, before the script's first update.
    fn on_create(&mut self, ctx: &mut ScriptContext) {}

    fn on_update(&mut self, ctx: &mut ScriptContext, dt: f32);

    /// Called for every event published this frame, before `on_update`.
    fn on_event(&mut self, ctx: &mut ScriptContext, event: &GameEvent) {}
}

/// Component wrapping a script instance.
pub struct ScriptComponent {
    pub(crate) script: Option<Box<dyn Script>>,
    pub(crate) started: bool,
}

impl ScriptComponent {
    pub fn new(script: impl Script + 'static) -> Self {
        Self {
            script: Some(Box::new(script)),
            started: false,
        }
    }
}

impl Component for ScriptComponent {}
