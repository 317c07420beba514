//! Packed storage for **components** of ECS.

use std::any::{type_name, Any};
use std::collections::HashMap;
use std::ops::{Index, IndexMut};

use crate::{
    entity::check_range,
    error::{EcsError, Result},
    Entity,
};

use super::Component;

/// Storage for statically typed components of ECS.
///
/// Components are kept in a contiguous array without holes:
/// removal moves the last component into the freed slot.
/// Because of that, order of iteration is not stable between removals.
///
pub struct ComponentStorage<T>
where
    T: Component,
{
    /// Components are actually stored here.
    components: Vec<T>,
    /// Owner of the component at the same index of `components`.
    index_to_entity: Vec<Entity>,
    entity_to_index: HashMap<Entity, usize>,
}

impl<T> ComponentStorage<T>
where
    T: Component,
{
    /// Creates an empty component storage.
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
            index_to_entity: Vec::new(),
            entity_to_index: HashMap::new(),
        }
    }

    /// Inserts component at the end of the storage and attaches it to the entity.
    ///
    /// # Errors
    ///
    /// Returns an error if component was already attached to the entity
    /// or if the entity is out of range.
    ///
    pub fn insert(&mut self, entity: Entity, component: T) -> Result<()> {
        check_range(entity)?;
        if self.contains(entity) {
            return Err(EcsError::DuplicateComponent {
                entity,
                component: type_name::<T>(),
            });
        }
        let index = self.components.len();
        self.components.push(component);
        self.index_to_entity.push(entity);
        self.entity_to_index.insert(entity, index);
        Ok(())
    }

    /// Removes component and detaches it from the entity.
    ///
    /// The last component of the storage takes place of the removed one.
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::MissingComponent`] if there is no component attached to the entity.
    ///
    pub fn remove(&mut self, entity: Entity) -> Result<T> {
        let index = self
            .entity_to_index
            .remove(&entity)
            .ok_or_else(|| missing::<T>(entity))?;
        let component = self.components.swap_remove(index);
        self.index_to_entity.swap_remove(index);
        if let Some(&moved) = self.index_to_entity.get(index) {
            self.entity_to_index.insert(moved, index);
        }
        Ok(component)
    }

    /// Removes component of the destroyed entity, if any.
    pub fn entity_destroyed(&mut self, entity: Entity) -> Option<T> {
        self.remove(entity).ok()
    }

    /// Returns `true` if component was already attached to the entity.
    pub fn contains(&self, entity: Entity) -> bool {
        self.entity_to_index.contains_key(&entity)
    }

    /// Retrieves an immutable reference to component attached to the entity.
    pub fn get(&self, entity: Entity) -> Result<&T> {
        let index = self.index_of(entity).ok_or_else(|| missing::<T>(entity))?;
        Ok(&self.components[index])
    }

    /// Retrieves a mutable reference to component attached to the entity.
    pub fn get_mut(&mut self, entity: Entity) -> Result<&mut T> {
        let index = self.index_of(entity).ok_or_else(|| missing::<T>(entity))?;
        Ok(&mut self.components[index])
    }

    /// Position of the component of the entity in the packed array.
    pub fn index_of(&self, entity: Entity) -> Option<usize> {
        self.entity_to_index.get(&entity).copied()
    }

    /// Owner of the component at given position of the packed array.
    pub fn entity_at(&self, index: usize) -> Option<Entity> {
        self.index_to_entity.get(index).copied()
    }

    /// Count of stored components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if there are no components in the storage.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns immutable iterator over all components with their entities.
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.index_to_entity
            .iter()
            .copied()
            .zip(self.components.iter())
    }

    /// Returns mutable iterator over all components with their entities.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Entity, &mut T)> {
        self.index_to_entity
            .iter()
            .copied()
            .zip(self.components.iter_mut())
    }

    /// Returns iterator over all entities which have component of this type.
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.index_to_entity.iter().copied()
    }

    /// Packed slice of all components.
    pub fn components(&self) -> &[T] {
        &self.components
    }

    /// Mutable packed slice of all components.
    pub fn components_mut(&mut self) -> &mut [T] {
        &mut self.components
    }
}

impl<T> Default for ComponentStorage<T>
where
    T: Component,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IntoIterator for ComponentStorage<T>
where
    T: Component,
{
    type Item = (Entity, T);
    type IntoIter = std::iter::Zip<std::vec::IntoIter<Entity>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.index_to_entity.into_iter().zip(self.components)
    }
}

impl<T> Index<Entity> for ComponentStorage<T>
where
    T: Component,
{
    type Output = T;

    fn index(&self, entity: Entity) -> &Self::Output {
        match self.get(entity) {
            Ok(component) => component,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T> IndexMut<Entity> for ComponentStorage<T>
where
    T: Component,
{
    fn index_mut(&mut self, entity: Entity) -> &mut Self::Output {
        match self.get_mut(entity) {
            Ok(component) => component,
            Err(error) => panic!("{}", error),
        }
    }
}

/// Component storage with erased type of components.
///
/// Allows to store storages of different component types in one collection.
///
pub trait AnyStorage: Any + Send + Sync {
    /// Removes component of the destroyed entity, if any.
    fn entity_destroyed(&mut self, entity: Entity);

    /// Returns `true` if component was already attached to the entity.
    fn contains(&self, entity: Entity) -> bool;

    /// Count of stored components.
    fn len(&self) -> usize;

    /// Returns `true` if there are no components in the storage.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Name of the type of stored components.
    fn component_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T> AnyStorage for ComponentStorage<T>
where
    T: Component,
{
    fn entity_destroyed(&mut self, entity: Entity) {
        ComponentStorage::entity_destroyed(self, entity);
    }

    fn contains(&self, entity: Entity) -> bool {
        ComponentStorage::contains(self, entity)
    }

    fn len(&self) -> usize {
        ComponentStorage::len(self)
    }

    fn component_name(&self) -> &'static str {
        type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

fn missing<T>(entity: Entity) -> EcsError {
    EcsError::MissingComponent {
        entity,
        component: type_name::<T>(),
    }
}
