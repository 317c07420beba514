//! Utilities for signatures of entities and *systems* in ECS.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

use crate::component::{Component, ComponentRegistry, ComponentType, MAX_COMPONENTS};
use crate::error::Result;

// Every component type must have its own bit in the mask.
const _: () = assert!(MAX_COMPONENTS <= u32::BITS as usize);

/// Set of component types, one bit per registered [`ComponentType`].
///
/// Describes which components the entity has or which components are required by the system.
///
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Signature(u32);

impl Signature {
    /// Signature without any component types.
    pub const EMPTY: Self = Self(0);

    /// Creates signature from raw bit mask.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw bit mask of this signature.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Adds component type to this signature.
    pub fn set(&mut self, component_type: ComponentType) {
        self.0 |= 1 << component_type.id();
    }

    /// Removes component type from this signature.
    pub fn reset(&mut self, component_type: ComponentType) {
        self.0 &= !(1 << component_type.id());
    }

    /// Returns `true` if component type is present in this signature.
    pub const fn contains(self, component_type: ComponentType) -> bool {
        self.0 & (1 << component_type.id()) != 0
    }

    /// Returns `true` if this signature has every component type of `required`.
    pub const fn matches(self, required: Signature) -> bool {
        self.0 & required.0 == required.0
    }

    /// Returns `true` if there are no component types in this signature.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Count of component types in this signature.
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }
}

impl From<ComponentType> for Signature {
    fn from(component_type: ComponentType) -> Self {
        let mut signature = Self::EMPTY;
        signature.set(component_type);
        signature
    }
}

impl BitOr for Signature {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Signature {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Signature {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Signature({:0width$b})", self.0, width = MAX_COMPONENTS)
    }
}

/// Set of statically known component types which can be turned into [`Signature`].
///
/// Implemented for the unit type and for tuples of components up to 8 elements.
///
pub trait ComponentSet {
    /// Builds signature from types of this set using given registry.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the types was not registered.
    ///
    fn signature(registry: &ComponentRegistry) -> Result<Signature>;
}

impl ComponentSet for () {
    fn signature(_: &ComponentRegistry) -> Result<Signature> {
        Ok(Signature::EMPTY)
    }
}

macro_rules! impl_component_set {
    ($($name:ident),+) => {
        impl<$($name),+> ComponentSet for ($($name,)+)
        where
            $($name: Component,)+
        {
            fn signature(registry: &ComponentRegistry) -> Result<Signature> {
                let mut signature = Signature::EMPTY;
                $(signature.set(registry.type_id::<$name>()?);)+
                Ok(signature)
            }
        }
    };
}

impl_component_set!(A);
impl_component_set!(A, B);
impl_component_set!(A, B, C);
impl_component_set!(A, B, C, D);
impl_component_set!(A, B, C, D, E);
impl_component_set!(A, B, C, D, E, F);
impl_component_set!(A, B, C, D, E, F, G);
impl_component_set!(A, B, C, D, E, F, G, H);
