//! Scene components and demo scene of game engine.

use lumen_ecs::Entity;
use palette::Srgba;
use ultraviolet::Vec3;

pub use components::{Renderable, RigidBody, Transform};

use crate::{
    app::Application,
    error::Result,
    graphics::{Camera, Mesh},
};

mod components;

/// Spawns camera and a `size` x `size` grid of spinning cubes.
///
/// Returns entities of spawned cubes.
///
pub fn spawn_demo(app: &mut Application, size: u32) -> Result<Vec<Entity>> {
    let cube = app.meshes_mut().insert(Mesh::cube());
    let coordinator = app.coordinator_mut();

    let camera = coordinator.create_entity()?;
    let extent = size as f32;
    let eye = Vec3::new(extent, extent, extent) * 1.5;
    coordinator.add_component(camera, Camera::looking_at(eye, Vec3::zero()))?;

    let mut cubes = Vec::with_capacity((size * size) as usize);
    let half = (extent - 1.0) / 2.0;
    for x in 0..size {
        for y in 0..size {
            let entity = coordinator.create_entity()?;
            let translation = Vec3::new(x as f32 - half, y as f32 - half, 0.0);
            let transform = Transform::from_translation(translation).with_scale(0.4);
            let spin = 0.5 + (x + y) as f32 * 0.25;
            let body = RigidBody::new(Vec3::zero(), Vec3::new(0.0, 0.0, spin));
            let color = Srgba::new(
                (x + 1) as f32 / extent,
                0.5,
                (y + 1) as f32 / extent,
                1.0,
            );

            coordinator.add_component(entity, transform)?;
            coordinator.add_component(entity, body)?;
            coordinator.add_component(entity, Renderable::new(cube, color))?;
            cubes.push(entity);
        }
    }
    log::info!("demo scene spawned with {} cubes", cubes.len());
    Ok(cubes)
}
