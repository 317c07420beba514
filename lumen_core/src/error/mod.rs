//! Utilities for game engine error handling.

use lumen_ecs::{EcsError, Entity};
use thiserror::Error;

/// Result of any operation of game engine which can return an error.
pub type Result<T> = std::result::Result<T, AppError>;

/// General error type of game engine.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("cannot create more than one application instance")]
    Initialized,

    #[error("ECS failure: {0}")]
    Ecs(#[from] EcsError),

    #[error("entity {0} refers to mesh which does not exist")]
    UnknownMesh(Entity),
}
