use lumen_ecs::{Coordinator, System};

use crate::{
    error::Result,
    graphics::{Camera, CameraUBO},
};

/// Picks the active camera of the scene.
///
/// Scene may contain several cameras; the one with the smallest entity identifier is active.
///
#[derive(Debug, Default)]
pub struct CameraSystem;

impl System for CameraSystem {
    type Components = (Camera,);
}

impl CameraSystem {
    /// Returns uniform buffer object of the active camera, if any.
    pub fn update(&mut self, coordinator: &Coordinator) -> Result<Option<CameraUBO>> {
        let entities = coordinator.system_entities::<Self>()?;
        let Some(&active) = entities.iter().next() else {
            return Ok(None);
        };
        let camera = coordinator.get_component::<Camera>(active)?;
        Ok(Some(camera.ubo()))
    }
}

#[cfg(test)]
mod tests {
    use ultraviolet::Vec3;

    use super::*;

    #[test]
    fn test_active_camera() {
        let mut coordinator = Coordinator::new();
        coordinator.register_component::<Camera>().unwrap();
        coordinator
            .register_system_with_components::<CameraSystem>()
            .unwrap();

        let mut system = CameraSystem;
        assert_eq!(system.update(&coordinator).unwrap(), None);

        let first = coordinator.create_entity().unwrap();
        let second = coordinator.create_entity().unwrap();
        let near = Camera::looking_at(Vec3::one(), Vec3::zero());
        let far = Camera::looking_at(Vec3::one() * 10.0, Vec3::zero());
        coordinator.add_component(second, far).unwrap();
        coordinator.add_component(first, near).unwrap();
        assert_eq!(system.update(&coordinator).unwrap(), Some(near.ubo()));

        coordinator.destroy_entity(first).unwrap();
        assert_eq!(system.update(&coordinator).unwrap(), Some(far.ubo()));
    }
}
