//! Camera utilities for game engine.

use ultraviolet::{projection::perspective_vk as perspective, Mat4, Vec3};

/// Camera component which describes from where the scene is viewed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Ratio of width to height of the target image.
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// Creates camera looking from `eye` at `target` with Z axis pointing up.
    pub fn looking_at(eye: Vec3, target: Vec3) -> Self {
        Self {
            eye,
            target,
            ..Self::default()
        }
    }

    /// View 4x4 matrix of this camera.
    pub fn view(&self) -> Mat4 {
        Mat4::look_at(self.eye, self.target, self.up)
    }

    /// Projection 4x4 matrix of this camera, suitable for Vulkan clip space.
    pub fn projection(&self) -> Mat4 {
        perspective(self.fov_y, self.aspect_ratio, self.near, self.far)
    }

    /// Uniform buffer object of this camera.
    pub fn ubo(&self) -> CameraUBO {
        CameraUBO::new(self.projection(), self.view())
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(2.0, 2.0, 2.0),
            target: Vec3::zero(),
            up: Vec3::unit_z(),
            fov_y: 45f32.to_radians(),
            aspect_ratio: 16.0 / 9.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Camera uniform buffer object (UBO) that will be passed into uniform buffer.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct CameraUBO {
    /// Projection 4x4 matrix.
    pub projection: Mat4,
    /// View 4x4 matrix.
    pub view: Mat4,
}

impl CameraUBO {
    pub fn new(projection: Mat4, view: Mat4) -> Self {
        Self { projection, view }
    }
}
