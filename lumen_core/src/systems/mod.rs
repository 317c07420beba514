//! Systems of game engine which are run every frame.

pub use camera::CameraSystem;
pub use physics::PhysicsSystem;
pub use render::RenderSystem;

mod camera;
mod physics;
mod render;
