use lumen_ecs::{Coordinator, System};
use ultraviolet::Rotor3;

use crate::{
    app::DeltaTime,
    error::{AppError, Result},
    scene::{RigidBody, Transform},
};

/// Moves and rotates entities according to their rigid bodies.
#[derive(Debug, Default)]
pub struct PhysicsSystem;

impl System for PhysicsSystem {
    type Components = (Transform, RigidBody);
}

impl PhysicsSystem {
    /// Integrates velocities of all rigid bodies over `delta_time`.
    pub fn update(&mut self, coordinator: &mut Coordinator, delta_time: DeltaTime) -> Result<()> {
        let dt = delta_time.as_secs_f32();
        coordinator.for_each_entity::<Self, _, AppError>(|entity, components| {
            let body = *components.get::<RigidBody>(entity)?;
            let transform = components.get_mut::<Transform>(entity)?;

            transform.translation += body.velocity * dt;
            let angles = body.angular_velocity * dt;
            let delta = Rotor3::from_euler_angles(angles.x, angles.y, angles.z);
            transform.rotation = delta * transform.rotation;
            transform.rotation.normalize();
            Ok(())
        })
    }
}
