//! Sprite-sheet frame advancement.
//!
//! For every entity with an [`AnimationState`] and a [`Sprite`], the
//! current state's animation accumulates elapsed time and advances frames.
//! Looping animations wrap; one-shot animations hold their last frame and
//! stop. Whenever a frame lands, the entity's sprite is rewritten from the
//! state's sprite with the new source texel, so render always reads
//! up-to-date coordinates.

use crate::components::animation::AnimationState;
use crate::components::sprite::Sprite;
use crate::ecs::entity::Entity;
use crate::ecs::system::System;
use crate::ecs::world::World;
use crate::error::EngineError;

#[derive(Default)]
pub struct AnimationSystem;

impl AnimationSystem {
    pub fn new() -> Self {
        Self
    }
}

impl System for AnimationSystem {
    fn name(&self) -> &'static str {
        "animation"
    }

    fn update(&mut self, world: &mut World, dt: f32) -> Result<(), EngineError> {
        let entities: Vec<Entity> = world
            .query::<(AnimationState, Sprite)>()
            .map(|(entity, _)| entity)
            .collect();

        for entity in entities {
            let Some(state) = world.get_component_mut::<AnimationState>(entity) else {
                continue;
            };
            let Some(entry) = state.current_entry_mut() else {
                continue;
            };
            let animation = &mut entry.animation;
            if !animation.is_playing || animation.frame_count == 0 {
                continue;
            }

            animation.elapsed_time += dt;
            if animation.elapsed_time < animation.frame_duration {
                continue;
            }
            animation.elapsed_time %= animation.frame_duration;

            if animation.looped {
                animation.current_frame = (animation.current_frame + 1) % animation.frame_count;
            } else if animation.current_frame + 1 < animation.frame_count {
                animation.current_frame += 1;
            } else {
                animation.is_playing = false;
            }

            let mut sprite = entry.sprite.clone();
            sprite.tex_coord = animation.frame_tex_coord(entry.sprite.width);
            if let Some(target) = world.get_component_mut::<Sprite>(entity) {
                *target = sprite;
            }
        }

        Ok(())
    }
}
