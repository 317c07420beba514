//! Description of one rendered frame.

use lumen_ecs::Entity;
use palette::Srgba;
use ultraviolet::Mat4;

use super::{CameraUBO, MeshKey};

/// Request to draw one mesh with given model matrix and color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawCommand {
    /// Entity which is drawn by this command.
    pub entity: Entity,
    pub mesh: MeshKey,
    /// Model 4x4 matrix.
    pub model: Mat4,
    pub color: Srgba,
}

/// Everything the renderer backend needs to draw a frame.
#[derive(Debug, Copy, Clone)]
pub struct Frame<'a> {
    /// Index of the frame, starting from zero.
    pub index: u64,
    /// Active camera, if there is any camera in the scene.
    pub camera: Option<CameraUBO>,
    /// Draw commands sorted by entity.
    pub commands: &'a [DrawCommand],
}
