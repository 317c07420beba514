//! Headless demo of the lumen renderer

use std::error::Error;

use lumen_core::{
    app::{ControlFlow, DeltaTime, Event},
    config::Config,
    ecs::{self, Coordinator, Entity},
    scene::{self, RigidBody, Transform},
};
use ultraviolet::Vec3;

mod logger;

const APP_NAME: &str = env!("CARGO_CRATE_NAME", "library must be compiled by Cargo");
const APP_VERSION_STR: &str = env!("CARGO_PKG_VERSION", "library must be compiled by Cargo");

const FRAME_LIMIT: u64 = 600;
const GRID_SIZE: u32 = 4;

/// Entry point of `lumen-rs` demo
fn main() -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    let _handle = logger::init()?;
    log::info!("logger initialized successfully");

    let version = APP_VERSION_STR.parse()?;
    let config = Config::new(APP_NAME.to_string(), version).with_frame_limit(FRAME_LIMIT);

    let mut application = lumen_core::init(config)?;
    let cubes = scene::spawn_demo(&mut application, GRID_SIZE)?;

    let mut duration = DeltaTime::ZERO;
    let mut frames = 0;
    let mut spawned = Vec::new();
    let total = application.run(|event, coordinator| {
        match event {
            Event::Created => {
                log::debug!("created with {} cubes", cubes.len());
            }
            Event::Update(delta_time) => {
                duration += delta_time;
                frames += 1;
                if duration.as_secs() > 0 {
                    log::debug!("simulated {} frames in {:?}", frames, duration);
                    duration = DeltaTime::ZERO;
                    frames = 0;

                    // Churn the scene: drop the oldest spawned entity and make a new one.
                    if spawned.len() >= GRID_SIZE as usize {
                        let oldest = spawned.remove(0);
                        if let Err(error) = coordinator.destroy_entity(oldest) {
                            log::error!("failed to destroy {}: {}", oldest, error);
                            return ControlFlow::Exit;
                        }
                    }
                    let speed = 0.1 * (spawned.len() + 1) as f32;
                    match spawn_drifter(coordinator, speed) {
                        Ok(entity) => spawned.push(entity),
                        Err(error) => {
                            log::error!("failed to spawn entity: {}", error);
                            return ControlFlow::Exit;
                        }
                    }
                }
            }
            Event::Draw(frame) => {
                log::trace!(
                    "frame {}: {} draw commands",
                    frame.index,
                    frame.commands.len(),
                );
            }
            Event::Destroyed => {
                log::debug!("destroyed with {} living entities", coordinator.living_count());
            }
        }
        ControlFlow::Continue
    })?;
    log::info!("{} frames were run", total);
    Ok(())
}

/// Creates an entity without renderable which moves along X axis with given speed.
///
/// Such entity is handled by physics only and never produces draw commands.
///
fn spawn_drifter(coordinator: &mut Coordinator, speed: f32) -> ecs::Result<Entity> {
    let entity = coordinator.create_entity()?;
    coordinator.add_component(entity, Transform::default())?;
    coordinator.add_component(entity, RigidBody::new(Vec3::unit_x() * speed, Vec3::zero()))?;
    Ok(entity)
}
