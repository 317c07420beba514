//! Facade over entities, components and systems of ECS.

use std::collections::BTreeSet;

use crate::{
    component::{Component, ComponentRegistry, ComponentType},
    entity::{check_range, EntityAllocator},
    error::{EcsError, Result},
    system::{ComponentSet, Signature, System, SystemHandle, SystemRegistry},
    Entity,
};

/// Storage for entities, components and systems of ECS.
///
/// Every mutation goes through this type so that entity signatures,
/// attached components and entity sets of systems never disagree.
///
/// Component types must be registered before they are attached to any entity.
/// Systems should receive their signature before entities are populated,
/// though [`set_system_signature`](Coordinator::set_system_signature)
/// re-evaluates existing entities anyway.
///
#[derive(Default)]
pub struct Coordinator {
    entities: EntityAllocator,
    components: ComponentRegistry,
    systems: SystemRegistry,
}

impl Coordinator {
    /// Creates new coordinator without entities, component types and systems.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates new entity without any components.
    ///
    /// New entity joins only the systems with an empty signature.
    ///
    pub fn create_entity(&mut self) -> Result<Entity> {
        let entity = self.entities.create()?;
        self.systems
            .entity_signature_changed(entity, Signature::EMPTY);
        log::trace!("entity {} created", entity);
        Ok(entity)
    }

    /// Destroys the entity, removing all of its components and its membership in systems.
    ///
    /// Identifier of the entity may be issued again by [`create_entity`](Coordinator::create_entity).
    ///
    pub fn destroy_entity(&mut self, entity: Entity) -> Result<()> {
        self.entities.destroy(entity)?;
        self.components.entity_destroyed(entity);
        self.systems.entity_destroyed(entity);
        log::trace!("entity {} destroyed", entity);
        Ok(())
    }

    /// Returns `true` if the entity was created and not destroyed yet.
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.entities.is_alive(entity)
    }

    /// Count of entities which are alive now.
    pub fn living_count(&self) -> usize {
        self.entities.living_count()
    }

    /// Signature of the entity, i.e. set of types of its components.
    pub fn signature(&self, entity: Entity) -> Result<Signature> {
        self.entities.signature(entity)
    }

    /// Registers component type `T`.
    pub fn register_component<T>(&mut self) -> Result<ComponentType>
    where
        T: Component,
    {
        self.components.register::<T>()
    }

    /// Identifier of the registered component type `T`.
    pub fn component_type<T>(&self) -> Result<ComponentType>
    where
        T: Component,
    {
        self.components.type_id::<T>()
    }

    /// Builds signature from the set of registered component types.
    pub fn signature_of<C>(&self) -> Result<Signature>
    where
        C: ComponentSet,
    {
        C::signature(&self.components)
    }

    /// Attaches component to the living entity and updates entity sets of systems.
    pub fn add_component<T>(&mut self, entity: Entity, component: T) -> Result<()>
    where
        T: Component,
    {
        let component_type = self.components.type_id::<T>()?;
        if !self.entities.is_alive(entity) {
            check_range(entity)?;
            return Err(EcsError::EntityNotAlive(entity));
        }
        self.components.add(entity, component)?;

        let mut signature = self.entities.signature(entity)?;
        signature.set(component_type);
        self.entities.set_signature(entity, signature)?;
        self.systems.entity_signature_changed(entity, signature);
        log::trace!("component {} added to entity {}", component_type, entity);
        Ok(())
    }

    /// Detaches component from the entity and updates entity sets of systems.
    ///
    /// Returns component that was attached to the entity.
    ///
    pub fn remove_component<T>(&mut self, entity: Entity) -> Result<T>
    where
        T: Component,
    {
        let component_type = self.components.type_id::<T>()?;
        check_range(entity)?;
        let component = self.components.remove::<T>(entity)?;

        let mut signature = self.entities.signature(entity)?;
        signature.reset(component_type);
        self.entities.set_signature(entity, signature)?;
        self.systems.entity_signature_changed(entity, signature);
        log::trace!("component {} removed from entity {}", component_type, entity);
        Ok(component)
    }

    /// Returns `true` if component of type `T` is attached to the entity.
    pub fn has_component<T>(&self, entity: Entity) -> bool
    where
        T: Component,
    {
        self.components.contains::<T>(entity)
    }

    /// Retrieves an immutable reference to component of type `T` attached to the entity.
    pub fn get_component<T>(&self, entity: Entity) -> Result<&T>
    where
        T: Component,
    {
        check_range(entity)?;
        self.components.get(entity)
    }

    /// Retrieves a mutable reference to component of type `T` attached to the entity.
    pub fn get_component_mut<T>(&mut self, entity: Entity) -> Result<&mut T>
    where
        T: Component,
    {
        check_range(entity)?;
        self.components.get_mut(entity)
    }

    /// Read-only access to all registered component storages.
    pub fn components(&self) -> &ComponentRegistry {
        &self.components
    }

    /// Registers system of type `S` with an empty signature.
    ///
    /// Every living entity matches the empty signature, so all of them join the new system.
    ///
    pub fn register_system<S>(&mut self) -> Result<SystemHandle<S>>
    where
        S: System,
    {
        let handle = self.systems.register::<S>()?;
        for (entity, signature) in self.entities.living() {
            self.systems.entity_signature_changed(entity, signature);
        }
        Ok(handle)
    }

    /// Registers system of type `S` and requires [`S::Components`](System::Components) from its entities.
    pub fn register_system_with_components<S>(&mut self) -> Result<SystemHandle<S>>
    where
        S: System,
    {
        let signature = <S::Components as ComponentSet>::signature(&self.components)?;
        let handle = self.systems.register::<S>()?;
        self.set_system_signature::<S>(signature)?;
        Ok(handle)
    }

    /// Sets signature required by the system of type `S`
    /// and recomputes its entity set from all living entities.
    pub fn set_system_signature<S>(&mut self, signature: Signature) -> Result<()>
    where
        S: System,
    {
        self.systems.set_signature::<S>(signature)?;
        for (entity, signature) in self.entities.living() {
            self.systems.entity_signature_changed(entity, signature);
        }
        Ok(())
    }

    /// Signature required by the system of type `S`.
    pub fn system_signature<S>(&self) -> Result<Signature>
    where
        S: System,
    {
        self.systems.signature::<S>()
    }

    /// Entities which match the signature of the system of type `S`.
    pub fn system_entities<S>(&self) -> Result<&BTreeSet<Entity>>
    where
        S: System,
    {
        self.systems.entities::<S>()
    }

    /// Entities which match the signature of the system pointed by the handle.
    pub fn system_entities_of<S>(&self, handle: SystemHandle<S>) -> Result<&BTreeSet<Entity>>
    where
        S: System,
    {
        self.systems.entities_of(handle)
    }

    /// Calls `f` for each entity of the system of type `S` in ascending order of identifiers.
    ///
    /// Closure receives a view of components which can only read and modify components,
    /// so entity set of the system cannot change while it is iterated.
    /// Iteration stops at the first error returned by the closure.
    ///
    pub fn for_each_entity<S, F, E>(&mut self, mut f: F) -> std::result::Result<(), E>
    where
        S: System,
        F: FnMut(Entity, &mut Components<'_>) -> std::result::Result<(), E>,
        E: From<EcsError>,
    {
        let entities = self.systems.entities::<S>()?;
        let mut components = Components {
            registry: &mut self.components,
        };
        for &entity in entities {
            f(entity, &mut components)?;
        }
        Ok(())
    }
}

/// View of components which allows to access attached components but not to attach or detach them.
pub struct Components<'a> {
    registry: &'a mut ComponentRegistry,
}

impl Components<'_> {
    /// Returns `true` if component of type `T` is attached to the entity.
    pub fn contains<T>(&self, entity: Entity) -> bool
    where
        T: Component,
    {
        self.registry.contains::<T>(entity)
    }

    /// Retrieves an immutable reference to component of type `T` attached to the entity.
    pub fn get<T>(&self, entity: Entity) -> Result<&T>
    where
        T: Component,
    {
        self.registry.get(entity)
    }

    /// Retrieves a mutable reference to component of type `T` attached to the entity.
    pub fn get_mut<T>(&mut self, entity: Entity) -> Result<&mut T>
    where
        T: Component,
    {
        self.registry.get_mut(entity)
    }
}
