//! Entity Component System (ECS) utilities for game engine.
//!
//! Entities are plain identifiers, components of each type are kept
//! in a packed [`ComponentStorage`], and each registered [`System`]
//! tracks the set of entities whose [`Signature`] contains the signature of the system.
//! All of that is accessed through the [`Coordinator`].
//!
//! ```
//! use lumen_ecs::{Coordinator, System};
//!
//! struct Position(f32, f32);
//! struct Velocity(f32, f32);
//!
//! struct Movement;
//!
//! impl System for Movement {
//!     type Components = (Position, Velocity);
//! }
//!
//! # fn main() -> lumen_ecs::Result<()> {
//! let mut coordinator = Coordinator::new();
//! coordinator.register_component::<Position>()?;
//! coordinator.register_component::<Velocity>()?;
//! coordinator.register_system_with_components::<Movement>()?;
//!
//! let entity = coordinator.create_entity()?;
//! coordinator.add_component(entity, Position(0.0, 0.0))?;
//! coordinator.add_component(entity, Velocity(1.0, 0.0))?;
//! assert!(coordinator.system_entities::<Movement>()?.contains(&entity));
//! # Ok(())
//! # }
//! ```

pub use component::{
    AnyStorage, Component, ComponentRegistry, ComponentStorage, ComponentType, MAX_COMPONENTS,
};
pub use coordinator::{Components, Coordinator};
pub use entity::{Entity, EntityAllocator, MAX_ENTITIES};
pub use error::{EcsError, Result};
pub use system::{ComponentSet, Signature, System, SystemHandle, SystemRegistry};

pub mod error;

mod component;
mod coordinator;
mod entity;
mod system;
