//! Utilities for tracking entities of registered systems.

use std::any::{type_name, TypeId};
use std::collections::{BTreeSet, HashMap};

use crate::{
    error::{EcsError, Result},
    Entity,
};

use super::{Signature, System, SystemHandle};

struct SystemRecord {
    type_id: TypeId,
    name: &'static str,
    signature: Signature,
    entities: BTreeSet<Entity>,
}

/// Registry of all systems of ECS.
///
/// Maintains the set of matching entities for each system. The set is updated eagerly
/// on every signature change, so it is always in sync with entity signatures.
///
#[derive(Default)]
pub struct SystemRegistry {
    indices: HashMap<TypeId, usize>,
    records: Vec<SystemRecord>,
}

impl SystemRegistry {
    /// Creates new system registry without systems.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers system of type `S` with an empty signature and an empty set of entities.
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::DuplicateSystemRegistration`] if `S` was already registered.
    ///
    pub fn register<S>(&mut self) -> Result<SystemHandle<S>>
    where
        S: System,
    {
        let name = type_name::<S>();
        let typeid = TypeId::of::<S>();
        if self.indices.contains_key(&typeid) {
            return Err(EcsError::DuplicateSystemRegistration(name));
        }
        let index = self.records.len();
        self.records.push(SystemRecord {
            type_id: typeid,
            name,
            signature: Signature::EMPTY,
            entities: BTreeSet::new(),
        });
        self.indices.insert(typeid, index);
        log::debug!("system `{}` registered with index {}", name, index);
        Ok(SystemHandle::new(index))
    }

    /// Returns handle of the registered system of type `S`.
    pub fn handle<S>(&self) -> Result<SystemHandle<S>>
    where
        S: System,
    {
        self.index_of::<S>().map(SystemHandle::new)
    }

    /// Returns `true` if system of type `S` was registered.
    pub fn is_registered<S>(&self) -> bool
    where
        S: System,
    {
        self.indices.contains_key(&TypeId::of::<S>())
    }

    /// Stores required signature of the system of type `S`, replacing previous one.
    ///
    /// Entity set of the system is not re-evaluated here.
    ///
    pub fn set_signature<S>(&mut self, signature: Signature) -> Result<()>
    where
        S: System,
    {
        let index = self.index_of::<S>()?;
        let record = &mut self.records[index];
        record.signature = signature;
        log::debug!("system `{}` now requires {:?}", record.name, signature);
        Ok(())
    }

    /// Required signature of the system of type `S`.
    pub fn signature<S>(&self) -> Result<Signature>
    where
        S: System,
    {
        let index = self.index_of::<S>()?;
        Ok(self.records[index].signature)
    }

    /// Entities which match the signature of the system of type `S`.
    pub fn entities<S>(&self) -> Result<&BTreeSet<Entity>>
    where
        S: System,
    {
        let index = self.index_of::<S>()?;
        Ok(&self.records[index].entities)
    }

    /// Entities which match the signature of the system pointed by the handle.
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::UnregisteredSystem`] if the handle was issued by another registry
    /// and does not point to system `S` in this one.
    ///
    pub fn entities_of<S>(&self, handle: SystemHandle<S>) -> Result<&BTreeSet<Entity>>
    where
        S: System,
    {
        self.records
            .get(handle.index())
            .filter(|record| record.type_id == TypeId::of::<S>())
            .map(|record| &record.entities)
            .ok_or(EcsError::UnregisteredSystem(type_name::<S>()))
    }

    /// Removes the entity from entity sets of all systems.
    pub fn entity_destroyed(&mut self, entity: Entity) {
        for record in &mut self.records {
            record.entities.remove(&entity);
        }
    }

    /// Re-evaluates membership of the entity in every system using its new signature.
    pub fn entity_signature_changed(&mut self, entity: Entity, signature: Signature) {
        for record in &mut self.records {
            if signature.matches(record.signature) {
                if record.entities.insert(entity) {
                    log::trace!("entity {} joined system `{}`", entity, record.name);
                }
            } else if record.entities.remove(&entity) {
                log::trace!("entity {} left system `{}`", entity, record.name);
            }
        }
    }

    /// Count of registered systems.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no systems were registered.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn index_of<S>(&self) -> Result<usize>
    where
        S: System,
    {
        self.indices
            .get(&TypeId::of::<S>())
            .copied()
            .ok_or(EcsError::UnregisteredSystem(type_name::<S>()))
    }
}
