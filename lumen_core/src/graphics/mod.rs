//! Graphics data produced by game engine for the renderer backend.
//!
//! The engine does not talk to GPU itself: each frame it hands out
//! a [`Frame`] which describes what should be drawn.

pub use camera::{Camera, CameraUBO};
pub use frame::{DrawCommand, Frame};
pub use mesh::{Mesh, MeshKey, MeshRegistry};

mod camera;
mod frame;
mod mesh;
