//! Whole-frame integration tests: stage ordering, script-driven behavior,
//! audio forwarding, and error propagation through `World::update`.

use std::cell::RefCell;
use std::rc::Rc;

use emberengine::EngineError;
use emberengine::components::camera::{Camera, CameraComponent};
use emberengine::components::particleemitter::{ParticleEmitter, ParticleParams};
use emberengine::components::physicsbody::{Collider, PhysicsBody};
use emberengine::components::script::{Script, ScriptComponent, ScriptContext};
use emberengine::components::sprite::Sprite;
use emberengine::components::tag::Tag;
use emberengine::components::transform::Transform;
use emberengine::ecs::{System, SystemStage, World};
use emberengine::events::{AudioCmd, AudioOutbox, EventQueue, GameEvent};
use emberengine::math::{Color, vec2};
use emberengine::render::{BatchRenderer, NullGraphicsDevice};
use emberengine::resources::assetstore::{AssetStore, SoundHandle};
use emberengine::resources::input::InputState;
use emberengine::systems::{
    AnimationSystem, AudioSystem, ParticleSystem, PhysicsSystem, RenderSystem, ScriptSystem,
};

fn install_camera(world: &mut World) {
    let entity = world.create_entity();
    world.add_component(entity, Tag::new("Camera"));
    world.add_component(
        entity,
        CameraComponent::main(Camera::new(vec2(0.0, 0.0), vec2(320.0, 180.0))),
    );
}

fn full_world() -> (World, crossbeam_channel::Receiver<AudioCmd>) {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut world = World::new();
    world.insert_resource(EventQueue::new());
    world.insert_resource(AudioOutbox::new());
    world.insert_resource(InputState::new());
    world.insert_resource(AssetStore::new());
    install_camera(&mut world);

    let (tx, rx) = crossbeam_channel::unbounded();
    world.add_system(SystemStage::Physics, Box::new(PhysicsSystem::new()));
    world.add_system(SystemStage::Animation, Box::new(AnimationSystem::new()));
    world.add_system(SystemStage::Script, Box::new(ScriptSystem::new()));
    world.add_system(SystemStage::Particle, Box::new(ParticleSystem::new()));
    world.add_system(SystemStage::Audio, Box::new(AudioSystem::new(tx)));
    world.add_system(
        SystemStage::Render,
        Box::new(RenderSystem::new(BatchRenderer::new(
            NullGraphicsDevice::new(),
        ))),
    );
    (world, rx)
}

/// Records the observed transform height at render time, to pin down
/// physics-before-render ordering within one frame.
struct RenderProbe {
    target: Tag,
    seen: Rc<RefCell<Vec<f32>>>,
}

impl System for RenderProbe {
    fn name(&self) -> &'static str {
        "render-probe"
    }

    fn update(&mut self, world: &mut World, _dt: f32) -> Result<(), EngineError> {
        if let Some(entity) = world.get_entity_by_tag(&self.target.0) {
            if let Some(transform) = world.get_component::<Transform>(entity) {
                self.seen.borrow_mut().push(transform.position.y);
            }
        }
        Ok(())
    }
}

#[test]
fn test_render_stage_sees_this_frames_physics_result() {
    let (mut world, _rx) = full_world();
    let entity = world.create_entity();
    world.add_component(entity, Tag::new("Faller"));
    world.add_component(entity, Transform::new(0.0, 0.0).with_scale(10.0, 10.0));
    world.add_component(entity, PhysicsBody::new(Collider::new(10.0, 10.0)));

    let seen = Rc::new(RefCell::new(Vec::new()));
    world.add_system(
        SystemStage::Render,
        Box::new(RenderProbe {
            target: Tag::new("Faller"),
            seen: seen.clone(),
        }),
    );

    world.update(0.1).unwrap();
    // One step of gravity: velocity 80, displacement 8. Render observed
    // the already-moved position.
    assert!((seen.borrow()[0] - 8.0).abs() < 1e-3);
}

#[test]
fn test_emitter_produces_ten_particles_in_one_second_tick() {
    let (mut world, _rx) = full_world();
    let entity = world.create_entity();
    world.add_component(entity, Transform::new(0.0, 0.0));
    world.add_component(
        entity,
        ParticleEmitter::new(ParticleParams {
            initial_velocity: vec2(0.0, -10.0),
            velocity_variation: vec2(1.0, 1.0),
            lifetime: 5.0,
            initial_color: Color::WHITE,
            final_color: Color::new(1.0, 1.0, 1.0, 0.0),
            initial_size: vec2(2.0, 2.0),
            final_size: vec2(0.0, 0.0),
            emission_time: 0.1,
        }),
    );

    world.update(1.0).unwrap();
    let emitter = world.get_component::<ParticleEmitter>(entity).unwrap();
    assert_eq!(emitter.active_count(), 10);
}

struct JumpOnStart;

impl Script for JumpOnStart {
    fn on_update(&mut self, _ctx: &mut ScriptContext, _dt: f32) {}

    fn on_event(&mut self, ctx: &mut ScriptContext, event: &GameEvent) {
        let GameEvent::LevelStart { .. } = event;
        ctx.play_sound("jump");
    }
}

#[test]
fn test_script_event_reaches_audio_thread_same_frame() {
    let (mut world, rx) = full_world();
    world
        .resource_mut::<AssetStore>()
        .unwrap()
        .insert_sound("jump", SoundHandle(1));

    let entity = world.create_entity();
    world.add_component(entity, ScriptComponent::new(JumpOnStart));
    world
        .resource_mut::<EventQueue>()
        .unwrap()
        .publish(GameEvent::LevelStart { level_number: 1 });

    world.update(0.016).unwrap();
    // Script stage queued the fx, audio stage (after it) forwarded it.
    match rx.try_recv() {
        Ok(AudioCmd::PlayFx { id }) => assert_eq!(id, "jump"),
        other => panic!("expected jump fx, got {other:?}"),
    }

    // Events are frame-scoped: next tick delivers nothing.
    world.update(0.016).unwrap();
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_missing_camera_aborts_the_frame() {
    let mut world = World::new();
    world.add_system(
        SystemStage::Render,
        Box::new(RenderSystem::new(BatchRenderer::new(
            NullGraphicsDevice::new(),
        ))),
    );
    let err = world.update(0.016).unwrap_err();
    assert!(matches!(err, EngineError::MissingCamera));
    // The world stays usable after a failed frame.
    install_camera(&mut world);
    world.update(0.016).unwrap();
}

#[test]
fn test_sprite_entity_renders_through_full_tick() {
    let (mut world, _rx) = full_world();
    let entity = world.create_entity();
    world.add_component(entity, Transform::new(10.0, 10.0).with_scale(16.0, 16.0));
    world.add_component(entity, Sprite::colored(Color::new(0.2, 0.4, 0.8, 1.0)));
    // Frame runs clean end to end with every stage registered.
    world.update(0.016).unwrap();
    world.update(0.016).unwrap();
}
