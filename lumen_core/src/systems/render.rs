use lumen_ecs::{Coordinator, System};

use crate::{
    error::{AppError, Result},
    graphics::{DrawCommand, MeshRegistry},
    scene::{Renderable, Transform},
};

/// Writes model matrices of renderable entities and collects draw commands for the frame.
#[derive(Debug, Default)]
pub struct RenderSystem {
    commands: Vec<DrawCommand>,
}

impl System for RenderSystem {
    type Components = (Transform, Renderable);
}

impl RenderSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the list of draw commands from current transforms.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnknownMesh`] if a visible entity refers to a removed mesh.
    ///
    pub fn update(&mut self, coordinator: &mut Coordinator, meshes: &MeshRegistry) -> Result<()> {
        let commands = &mut self.commands;
        commands.clear();
        coordinator.for_each_entity::<Self, _, AppError>(|entity, components| {
            let model = components.get::<Transform>(entity)?.model_matrix();
            let renderable = components.get_mut::<Renderable>(entity)?;
            renderable.model = model;
            if !renderable.visible {
                return Ok(());
            }
            if !meshes.contains(renderable.mesh) {
                return Err(AppError::UnknownMesh(entity));
            }
            commands.push(DrawCommand {
                entity,
                mesh: renderable.mesh,
                model,
                color: renderable.color,
            });
            Ok(())
        })
    }

    /// Draw commands collected by the last update, sorted by entity.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

#[cfg(test)]
mod tests {
    use palette::Srgba;
    use ultraviolet::Vec3;

    use crate::graphics::Mesh;

    use super::*;

    fn coordinator() -> Coordinator {
        let mut coordinator = Coordinator::new();
        coordinator.register_component::<Transform>().unwrap();
        coordinator.register_component::<Renderable>().unwrap();
        coordinator
            .register_system_with_components::<RenderSystem>()
            .unwrap();
        coordinator
    }

    #[test]
    fn test_draw_commands() {
        let mut coordinator = coordinator();
        let mut meshes = MeshRegistry::new();
        let cube = meshes.insert(Mesh::cube());
        let color = Srgba::new(1.0, 0.0, 0.0, 1.0);

        let mut entities = Vec::new();
        for index in 0..3 {
            let entity = coordinator.create_entity().unwrap();
            let transform = Transform::from_translation(Vec3::new(index as f32, 0.0, 0.0));
            coordinator.add_component(entity, transform).unwrap();
            coordinator
                .add_component(entity, Renderable::new(cube, color))
                .unwrap();
            entities.push(entity);
        }
        coordinator
            .get_component_mut::<Renderable>(entities[1])
            .unwrap()
            .visible = false;

        let mut render = RenderSystem::new();
        render.update(&mut coordinator, &meshes).unwrap();

        let drawn: Vec<_> = render.commands().iter().map(|command| command.entity).collect();
        assert_eq!(drawn, [entities[0], entities[2]]);
        let expected = Transform::from_translation(Vec3::new(2.0, 0.0, 0.0)).model_matrix();
        assert_eq!(render.commands()[1].model, expected);

        // Hidden entity still gets its model matrix updated.
        let hidden = coordinator.get_component::<Renderable>(entities[1]).unwrap();
        assert_eq!(hidden.model.cols[3].x, 1.0);
    }

    #[test]
    fn test_unknown_mesh() {
        let mut coordinator = coordinator();
        let mut meshes = MeshRegistry::new();
        let cube = meshes.insert(Mesh::cube());

        let entity = coordinator.create_entity().unwrap();
        coordinator
            .add_component(entity, Transform::default())
            .unwrap();
        coordinator
            .add_component(entity, Renderable::new(cube, Srgba::new(1.0, 1.0, 1.0, 1.0)))
            .unwrap();
        meshes.remove(cube);

        let mut render = RenderSystem::new();
        let result = render.update(&mut coordinator, &meshes);
        assert!(matches!(result, Err(AppError::UnknownMesh(e)) if e == entity));
    }
}
