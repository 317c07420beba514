//! Utilities for *entities* in ECS.

use std::collections::VecDeque;
use std::fmt;

use crate::error::{EcsError, Result};
use crate::system::Signature;

/// Maximum count of entities which can be alive at the same time.
pub const MAX_ENTITIES: usize = 5000;

/// Unique identifier of the *entity* of ECS.
///
/// Identifiers are reused after the entity is destroyed, so a handle
/// must not be kept around after [`destroy`](EntityAllocator::destroy) was called on it.
///
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Entity(u32);

impl Entity {
    /// Creates entity handle from raw identifier.
    ///
    /// Handle created this way is not guaranteed to point to a living entity.
    ///
    pub const fn from_raw(id: u32) -> Self {
        Self(id)
    }

    /// Raw identifier of this entity.
    pub const fn id(self) -> u32 {
        self.0
    }

    /// Index of this entity in per-entity arrays.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues and recycles entity identifiers, stores signature of each entity.
pub struct EntityAllocator {
    /// Identifiers which are ready to be issued, oldest released first.
    available: VecDeque<Entity>,
    signatures: Box<[Signature]>,
    alive: Box<[bool]>,
    living_count: usize,
}

impl EntityAllocator {
    /// Creates allocator with all [`MAX_ENTITIES`] identifiers available.
    pub fn new() -> Self {
        let available = (0..MAX_ENTITIES as u32).map(Entity).collect();
        Self {
            available,
            signatures: vec![Signature::EMPTY; MAX_ENTITIES].into_boxed_slice(),
            alive: vec![false; MAX_ENTITIES].into_boxed_slice(),
            living_count: 0,
        }
    }

    /// Issues identifier which was released the longest time ago.
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::CapacityExceeded`] if [`MAX_ENTITIES`] entities are alive.
    ///
    pub fn create(&mut self) -> Result<Entity> {
        let entity = self
            .available
            .pop_front()
            .ok_or(EcsError::CapacityExceeded)?;
        self.alive[entity.index()] = true;
        self.living_count += 1;
        Ok(entity)
    }

    /// Clears signature of the entity and returns its identifier to the back of the free list.
    ///
    /// # Errors
    ///
    /// Returns an error if entity is out of range or was not alive.
    ///
    pub fn destroy(&mut self, entity: Entity) -> Result<()> {
        self.check_alive(entity)?;
        let index = entity.index();
        self.signatures[index] = Signature::EMPTY;
        self.alive[index] = false;
        self.available.push_back(entity);
        self.living_count -= 1;
        Ok(())
    }

    /// Overwrites signature of the living entity.
    pub fn set_signature(&mut self, entity: Entity, signature: Signature) -> Result<()> {
        self.check_alive(entity)?;
        self.signatures[entity.index()] = signature;
        Ok(())
    }

    /// Signature of the entity. Entities which are not alive have an empty signature.
    pub fn signature(&self, entity: Entity) -> Result<Signature> {
        check_range(entity)?;
        Ok(self.signatures[entity.index()])
    }

    /// Returns `true` if the entity was created and not destroyed yet.
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.alive.get(entity.index()).copied().unwrap_or(false)
    }

    /// Count of entities which are alive now.
    pub fn living_count(&self) -> usize {
        self.living_count
    }

    /// Iterator over all living entities with their signatures, in identifier order.
    pub fn living(&self) -> impl Iterator<Item = (Entity, Signature)> + '_ {
        self.alive
            .iter()
            .zip(self.signatures.iter())
            .enumerate()
            .filter(|(_, (alive, _))| **alive)
            .map(|(index, (_, signature))| (Entity(index as u32), *signature))
    }

    fn check_alive(&self, entity: Entity) -> Result<()> {
        check_range(entity)?;
        if !self.alive[entity.index()] {
            return Err(EcsError::EntityNotAlive(entity));
        }
        Ok(())
    }
}

impl Default for EntityAllocator {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn check_range(entity: Entity) -> Result<()> {
    if entity.index() >= MAX_ENTITIES {
        return Err(EcsError::EntityOutOfRange(entity));
    }
    Ok(())
}
