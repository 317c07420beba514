//! Utilities for *systems* in ECS.

use std::fmt;
use std::marker::PhantomData;

pub use registry::SystemRegistry;
pub use signature::{ComponentSet, Signature};

mod registry;
mod signature;

/// Objects of this trait represent *system* of ECS.
///
/// Registered system keeps the set of entities which have all of its required components.
///
pub trait System: 'static {
    /// Component types which will be handled by this system.
    type Components: ComponentSet;
}

/// Typed handle of the system registered in [`SystemRegistry`].
pub struct SystemHandle<S>
where
    S: System,
{
    index: usize,
    _marker: PhantomData<fn() -> S>,
}

impl<S> SystemHandle<S>
where
    S: System,
{
    pub(crate) const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: PhantomData,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self.index
    }
}

impl<S> Clone for SystemHandle<S>
where
    S: System,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for SystemHandle<S> where S: System {}

impl<S> PartialEq for SystemHandle<S>
where
    S: System,
{
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<S> Eq for SystemHandle<S> where S: System {}

impl<S> fmt::Debug for SystemHandle<S>
where
    S: System,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SystemHandle")
            .field("system", &std::any::type_name::<S>())
            .field("index", &self.index)
            .finish()
    }
}
