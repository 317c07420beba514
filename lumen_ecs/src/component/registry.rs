//! Utilities for managing component storages.

use std::any::{type_name, TypeId};
use std::collections::HashMap;

use crate::{
    error::{EcsError, Result},
    Entity,
};

use super::{AnyStorage, Component, ComponentStorage, ComponentType, MAX_COMPONENTS};

/// Registry of all component types of ECS.
///
/// Each registered type receives sequential [`ComponentType`]
/// which is then used to look up its storage.
///
#[derive(Default)]
pub struct ComponentRegistry {
    types: HashMap<TypeId, ComponentType>,
    /// Storage of each registered type, indexed by [`ComponentType`].
    storages: Vec<Box<dyn AnyStorage>>,
}

impl ComponentRegistry {
    /// Creates new component registry without registered types.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers component type `T` and creates an empty storage for it.
    ///
    /// Returns identifier assigned to the type.
    ///
    /// # Errors
    ///
    /// Returns an error if `T` was already registered
    /// or [`MAX_COMPONENTS`] types were registered already.
    ///
    pub fn register<T>(&mut self) -> Result<ComponentType>
    where
        T: Component,
    {
        let name = type_name::<T>();
        let typeid = TypeId::of::<T>();
        if self.types.contains_key(&typeid) {
            return Err(EcsError::DuplicateComponentRegistration(name));
        }
        if self.storages.len() >= MAX_COMPONENTS {
            return Err(EcsError::TooManyComponentTypes);
        }
        let component_type = ComponentType::new(self.storages.len() as u8);
        self.storages.push(Box::new(ComponentStorage::<T>::new()));
        self.types.insert(typeid, component_type);
        log::debug!("component `{}` registered as type {}", name, component_type);
        Ok(component_type)
    }

    /// Identifier of the registered component type `T`.
    pub fn type_id<T>(&self) -> Result<ComponentType>
    where
        T: Component,
    {
        self.types
            .get(&TypeId::of::<T>())
            .copied()
            .ok_or(EcsError::UnregisteredComponent(type_name::<T>()))
    }

    /// Returns `true` if component type `T` was registered.
    pub fn is_registered<T>(&self) -> bool
    where
        T: Component,
    {
        self.types.contains_key(&TypeId::of::<T>())
    }

    /// Inserts component of type `T` and attaches it to the entity.
    pub fn add<T>(&mut self, entity: Entity, component: T) -> Result<()>
    where
        T: Component,
    {
        self.storage_mut::<T>()?.insert(entity, component)
    }

    /// Removes component of type `T` and detaches it from the entity.
    ///
    /// Returns component that was attached to the entity.
    ///
    pub fn remove<T>(&mut self, entity: Entity) -> Result<T>
    where
        T: Component,
    {
        self.storage_mut::<T>()?.remove(entity)
    }

    /// Returns `true` if component of type `T` is attached to the entity.
    ///
    /// Unregistered types are never attached.
    ///
    pub fn contains<T>(&self, entity: Entity) -> bool
    where
        T: Component,
    {
        self.storage::<T>()
            .map(|storage| storage.contains(entity))
            .unwrap_or(false)
    }

    /// Retrieves an immutable reference to component of type `T` attached to the entity.
    pub fn get<T>(&self, entity: Entity) -> Result<&T>
    where
        T: Component,
    {
        self.storage::<T>()?.get(entity)
    }

    /// Retrieves a mutable reference to component of type `T` attached to the entity.
    pub fn get_mut<T>(&mut self, entity: Entity) -> Result<&mut T>
    where
        T: Component,
    {
        self.storage_mut::<T>()?.get_mut(entity)
    }

    /// Removes components of the destroyed entity from storages of all types.
    pub fn entity_destroyed(&mut self, entity: Entity) {
        for storage in &mut self.storages {
            storage.entity_destroyed(entity);
        }
    }

    /// Storage of the component type `T`.
    pub fn storage<T>(&self) -> Result<&ComponentStorage<T>>
    where
        T: Component,
    {
        let component_type = self.type_id::<T>()?;
        self.storages[component_type.index()]
            .as_any()
            .downcast_ref()
            .ok_or(EcsError::UnregisteredComponent(type_name::<T>()))
    }

    fn storage_mut<T>(&mut self) -> Result<&mut ComponentStorage<T>>
    where
        T: Component,
    {
        let component_type = self.type_id::<T>()?;
        self.storages[component_type.index()]
            .as_any_mut()
            .downcast_mut()
            .ok_or(EcsError::UnregisteredComponent(type_name::<T>()))
    }

    /// Type-erased storage of the component type with given identifier.
    pub fn erased_storage(&self, component_type: ComponentType) -> Option<&dyn AnyStorage> {
        self.storages
            .get(component_type.index())
            .map(|storage| &**storage)
    }

    /// Count of registered component types.
    pub fn len(&self) -> usize {
        self.storages.len()
    }

    /// Returns `true` if no component types were registered.
    pub fn is_empty(&self) -> bool {
        self.storages.is_empty()
    }
}
