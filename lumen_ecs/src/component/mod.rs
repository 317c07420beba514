//! Utilities for *components* in ECS.

use std::any::Any;
use std::fmt;

pub use registry::*;
pub use storage::*;

mod registry;
mod storage;
mod tests;

/// Maximum count of component types which can be registered.
pub const MAX_COMPONENTS: usize = 32;

/// Objects of this trait represent *component* of ECS.
///
/// Components should be just POD (plain old data).
///
pub trait Component: Any + Send + Sync {}

impl<T> Component for T where T: Any + Send + Sync {}

/// Numeric identifier of the registered component type.
///
/// Identifiers are assigned sequentially starting from zero in order of registration.
///
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ComponentType(u8);

impl ComponentType {
    pub(crate) const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw value of this identifier, always less than [`MAX_COMPONENTS`].
    pub const fn id(self) -> u8 {
        self.0
    }

    /// Index of this type in per-type arrays.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
