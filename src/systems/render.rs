//! Draws the frame: level tile layers, sprites, particles, and optional
//! collider outlines, all through the batch renderer.
//!
//! The system owns its [`BatchRenderer`] (and through it the graphics
//! device); textures are resolved by name through the [`AssetStore`]
//! resource. Exactly one entity must carry a main camera; rendering
//! without one aborts the frame with [`EngineError::MissingCamera`]. A
//! missing texture skips that draw only.

use crate::components::activation::ActivationStatus;
use crate::components::camera::{Camera, CameraComponent};
use crate::components::level::Level;
use crate::components::particleemitter::ParticleEmitter;
use crate::components::physicsbody::PhysicsBody;
use crate::components::sprite::Sprite;
use crate::components::transform::Transform;
use crate::ecs::system::System;
use crate::ecs::world::World;
use crate::error::EngineError;
use crate::math::{Color, Rect};
use crate::render::batch::BatchRenderer;
use crate::render::device::GraphicsDevice;
use crate::resources::assetstore::AssetStore;
use crate::resources::engineconfig::EngineConfig;

const COLLIDER_DEBUG_COLOR: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 0.3,
};

pub struct RenderSystem<D: GraphicsDevice> {
    renderer: BatchRenderer<D>,
}

impl<D: GraphicsDevice> RenderSystem<D> {
    pub fn new(renderer: BatchRenderer<D>) -> Self {
        Self { renderer }
    }

    pub fn renderer(&self) -> &BatchRenderer<D> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut BatchRenderer<D> {
        &mut self.renderer
    }

    fn main_camera(world: &World) -> Option<Camera> {
        world
            .components_of_kind::<CameraComponent>()
            .find(|(_, component)| component.is_main_camera)
            .map(|(_, component)| component.camera)
    }

    fn draw_level_layers(&mut self, world: &World) {
        let Some(assets) = world.resource::<AssetStore>() else {
            return;
        };
        for (_, level) in world.components_of_kind::<Level>() {
            for layer in &level.layers {
                let Some(texture) = assets.texture(&layer.tileset) else {
                    continue;
                };
                let texture = *texture;
                for tile in &layer.tiles {
                    let dst = Rect::new(tile.x, tile.y, layer.tile_size, layer.tile_size);
                    self.renderer
                        .draw_sprite(&texture, tile.src, dst, Color::WHITE, false);
                }
            }
        }
    }

    fn draw_sprites(&mut self, world: &World) {
        for (entity, (sprite, transform)) in world.query::<(Sprite, Transform)>() {
            let active = world
                .get_component::<ActivationStatus>(entity)
                .is_none_or(|status| status.is_active);
            if !active {
                continue;
            }

            let dst = Rect::from_origin_size(transform.position, transform.scale);
            match &sprite.texture {
                Some(name) => {
                    let texture = world
                        .resource::<AssetStore>()
                        .and_then(|assets| assets.texture(name))
                        .copied();
                    // A missing texture skips this draw only.
                    if let Some(texture) = texture {
                        let src =
                            Rect::from_origin_size(sprite.tex_coord, crate::math::vec2(sprite.width, sprite.height));
                        self.renderer
                            .draw_sprite(&texture, src, dst, sprite.color, sprite.flipped);
                    }
                }
                None => self.renderer.draw_rect(dst, sprite.color),
            }
        }
    }

    fn draw_particles(&mut self, world: &World) {
        for (_, (emitter, _)) in world.query::<(ParticleEmitter, Transform)>() {
            for particle in emitter.particles().iter().filter(|p| p.active) {
                let dst = Rect::from_origin_size(particle.position, particle.size);
                self.renderer.draw_rect(dst, particle.color);
            }
        }
    }

    fn draw_collider_outlines(&mut self, world: &World) {
        for (_, (body, transform)) in world.query::<(PhysicsBody, Transform)>() {
            let rect = body.collider.rect_at(transform.position);
            self.renderer.draw_rect(rect, COLLIDER_DEBUG_COLOR);
        }
    }
}

impl<D: GraphicsDevice + 'static> System for RenderSystem<D> {
    fn name(&self) -> &'static str {
        "render"
    }

    fn update(&mut self, world: &mut World, _dt: f32) -> Result<(), EngineError> {
        let camera = Self::main_camera(world).ok_or(EngineError::MissingCamera)?;
        self.renderer.begin(&camera)?;

        self.draw_level_layers(world);
        self.draw_sprites(world);
        self.draw_particles(world);

        let draw_colliders = world
            .resource::<EngineConfig>()
            .is_some_and(|config| config.draw_colliders);
        if draw_colliders {
            self.draw_collider_outlines(world);
        }

        self.renderer.end();
        Ok(())
    }
}
