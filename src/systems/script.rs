//! Per-entity behavior script dispatch.
//!
//! Each frame the system drains the event queue, then visits every entity
//! with a [`ScriptComponent`]: `on_create` fires once before the first
//! update, `on_event` fires for each event drained this frame, then
//! `on_update` runs. The script is taken out of its component while it
//! runs so it can freely mutate the world, including its own entity; it is
//! put back afterwards unless the entity was destroyed mid-callback.

use crate::components::script::{ScriptComponent, ScriptContext};
use crate::ecs::entity::Entity;
use crate::ecs::system::System;
use crate::ecs::world::World;
use crate::error::EngineError;
use crate::events::{EventQueue, GameEvent};

#[derive(Default)]
pub struct ScriptSystem;

impl ScriptSystem {
    pub fn new() -> Self {
        Self
    }
}

impl System for ScriptSystem {
    fn name(&self) -> &'static str {
        "script"
    }

    fn update(&mut self, world: &mut World, dt: f32) -> Result<(), EngineError> {
        let events: Vec<GameEvent> = world
            .resource_mut::<EventQueue>()
            .map(|queue| queue.drain())
            .unwrap_or_default();

        let entities: Vec<Entity> = world
            .components_of_kind::<ScriptComponent>()
            .map(|(entity, _)| entity)
            .collect();

        for entity in entities {
            let Some(component) = world.get_component_mut::<ScriptComponent>(entity) else {
                continue;
            };
            let started = component.started;
            let Some(mut script) = component.script.take() else {
                continue;
            };

            let mut ctx = ScriptContext {
                world: &mut *world,
                entity,
            };
            if !started {
                script.on_create(&mut ctx);
            }
            for event in &events {
                script.on_event(&mut ctx, event);
            }
            script.on_update(&mut ctx, dt);

            // The script may have destroyed its own entity; only then is
            // the component gone and the script dropped with it.
            if let Some(component) = world.get_component_mut::<ScriptComponent>(entity) {
                component.script = Some(script);
                component.started = true;
            }
        }

        Ok(())
    }
}
