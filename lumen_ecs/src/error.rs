//! Error types of ECS.

use thiserror::Error;

use crate::{Entity, MAX_COMPONENTS, MAX_ENTITIES};

/// Result of any ECS operation which can fail.
pub type Result<T> = std::result::Result<T, EcsError>;

/// Contract violations detected by the ECS.
///
/// Each of them denotes a logic error of the caller; the ECS state is left
/// untouched when an error is returned.
///
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EcsError {
    #[error("component type `{0}` was already registered")]
    DuplicateComponentRegistration(&'static str),

    #[error("system type `{0}` was already registered")]
    DuplicateSystemRegistration(&'static str),

    #[error("component type `{0}` was not registered")]
    UnregisteredComponent(&'static str),

    #[error("system type `{0}` was not registered")]
    UnregisteredSystem(&'static str),

    #[error("component `{component}` was already attached to entity {entity}")]
    DuplicateComponent {
        entity: Entity,
        component: &'static str,
    },

    #[error("there is no component `{component}` attached to entity {entity}")]
    MissingComponent {
        entity: Entity,
        component: &'static str,
    },

    #[error("entity {0} is out of range (max {max})", max = MAX_ENTITIES)]
    EntityOutOfRange(Entity),

    #[error("entity {0} is not alive")]
    EntityNotAlive(Entity),

    #[error("cannot create more than {max} living entities", max = MAX_ENTITIES)]
    CapacityExceeded,

    #[error("cannot register more than {max} component types", max = MAX_COMPONENTS)]
    TooManyComponentTypes,
}
