//! API for simple game engine built around an Entity Component System.
//!
//! GPU and window handling are left to the renderer backend, which consumes
//! [`Frame`](graphics::Frame)s produced by the [`Application`](app::Application).

pub use app::init;
pub use lumen_ecs as ecs;

pub mod app;
pub mod config;
pub mod error;
pub mod graphics;
pub mod scene;
pub mod systems;
