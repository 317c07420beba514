//! Components of the scene handled by engine systems.

use palette::Srgba;
use ultraviolet::{Mat4, Rotor3, Similarity3, Vec3};

use crate::graphics::MeshKey;

/// Position, orientation and uniform scale of the entity in the world.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Rotor3,
    pub scale: f32,
}

impl Transform {
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::default()
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Model 4x4 matrix of this transform.
    pub fn model_matrix(&self) -> Mat4 {
        Similarity3::new(self.translation, self.rotation, self.scale).into_homogeneous_matrix()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::zero(),
            rotation: Rotor3::identity(),
            scale: 1.0,
        }
    }
}

/// Velocities of the entity which are integrated by the physics system.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct RigidBody {
    /// Linear velocity in units per second.
    pub velocity: Vec3,
    /// Angular velocity as roll, pitch and yaw rates in radians per second.
    pub angular_velocity: Vec3,
}

impl RigidBody {
    pub fn new(velocity: Vec3, angular_velocity: Vec3) -> Self {
        Self {
            velocity,
            angular_velocity,
        }
    }
}

/// Mesh and appearance of the entity which should be drawn.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Renderable {
    pub mesh: MeshKey,
    pub color: Srgba,
    pub visible: bool,
    /// Model matrix written by the render system from the entity transform.
    pub model: Mat4,
}

impl Renderable {
    pub fn new(mesh: MeshKey, color: Srgba) -> Self {
        Self {
            mesh,
            color,
            visible: true,
            model: Mat4::identity(),
        }
    }
}
