#![cfg(test)]

use crate::{error::EcsError, Entity, MAX_ENTITIES};

use super::*;

fn entity(id: u32) -> Entity {
    Entity::from_raw(id)
}

/// Checks that the packed array has no holes and both mappings agree with it.
fn assert_packed<T>(storage: &ComponentStorage<T>)
where
    T: Component,
{
    for index in 0..storage.len() {
        let owner = storage.entity_at(index).unwrap();
        assert_eq!(storage.index_of(owner), Some(index));
    }
    assert_eq!(storage.entity_at(storage.len()), None);
    assert_eq!(storage.entities().count(), storage.len());
}

#[test]
fn test_insertion() {
    let mut storage = ComponentStorage::new();

    let entity = entity(0);
    let component = "foo";

    storage.insert(entity, component).unwrap();
    assert!(storage.contains(entity));
    assert_eq!(storage[entity], "foo");

    storage.remove(entity).unwrap();
    assert!(!storage.contains(entity));
    assert!(storage.get(entity).is_err());
}

#[test]
fn test_insertion_duplicate() {
    use std::time::Instant;

    let mut storage = ComponentStorage::new();

    let entity1 = entity(1);
    let entity2 = entity(2);

    storage.insert(entity1, Instant::now()).unwrap();
    storage.insert(entity2, Instant::now()).unwrap();
    let result = storage.insert(entity1, Instant::now());
    assert!(matches!(result, Err(EcsError::DuplicateComponent { .. })));
    assert_eq!(storage.len(), 2);
}

#[test]
fn test_insertion_out_of_range() {
    let mut storage = ComponentStorage::new();
    let outside = entity(MAX_ENTITIES as u32);
    assert_eq!(storage.insert(outside, 0), Err(EcsError::EntityOutOfRange(outside)));
    assert!(storage.is_empty());
}

#[test]
fn test_missing() {
    let mut storage = ComponentStorage::<u32>::new();
    let entity = entity(5);
    assert!(matches!(
        storage.remove(entity),
        Err(EcsError::MissingComponent { entity: missing, .. }) if missing == entity,
    ));
    assert!(matches!(
        storage.get_mut(entity),
        Err(EcsError::MissingComponent { .. }),
    ));
    assert_eq!(storage.entity_destroyed(entity), None);
}

#[test]
#[should_panic]
fn test_index() {
    let mut storage = ComponentStorage::new();

    let entity1 = entity(0);
    storage.insert(entity1, 0).unwrap();
    storage[entity1] = 42;
    assert_eq!(storage[entity1], 42);

    let entity2 = entity(1);
    let _component = storage[entity2];
}

#[test]
fn test_remove_from_middle() {
    let mut storage = ComponentStorage::new();
    for id in 0..10 {
        storage.insert(entity(id), id * 100).unwrap();
    }

    assert_eq!(storage.remove(entity(3)), Ok(300));
    assert_eq!(storage.len(), 9);
    // The last component fills the hole.
    assert_eq!(storage.entity_at(3), Some(entity(9)));
    for id in (0..10).filter(|&id| id != 3) {
        assert_eq!(storage.get(entity(id)), Ok(&(id * 100)));
    }
    assert_packed(&storage);
}

#[test]
fn test_remove_last_and_only() {
    let mut storage = ComponentStorage::new();
    storage.insert(entity(0), 'a').unwrap();
    storage.insert(entity(1), 'b').unwrap();

    assert_eq!(storage.remove(entity(1)), Ok('b'));
    assert_eq!(storage.entity_at(0), Some(entity(0)));
    assert_packed(&storage);

    assert_eq!(storage.remove(entity(0)), Ok('a'));
    assert!(storage.is_empty());
    assert_packed(&storage);

    // Removed entity can receive the component again.
    storage.insert(entity(0), 'c').unwrap();
    assert_eq!(storage[entity(0)], 'c');
}

#[test]
fn test_stays_packed() {
    let mut storage = ComponentStorage::new();
    for id in 0..64 {
        storage.insert(entity(id), id).unwrap();
    }
    for id in (0..64).step_by(3) {
        storage.remove(entity(id)).unwrap();
        assert_packed(&storage);
    }
    for id in (0..64).step_by(6) {
        storage.insert(entity(id), id + 1000).unwrap();
        assert_packed(&storage);
    }

    for (entity, component) in storage.iter() {
        let id = entity.id();
        let expected = if id % 6 == 0 { id + 1000 } else { id };
        assert_eq!(*component, expected);
    }
    assert_eq!(storage.len(), 64 - 22 + 11);
}

#[test]
fn test_iterator() {
    let mut storage = ComponentStorage::new();

    for int in 0..100 {
        storage.insert(entity(int as u32), int).unwrap();
    }

    for (_, component) in storage.iter_mut() {
        *component += 10;
    }
    for ((_, component), value) in storage.iter().zip(10..110) {
        assert_eq!(*component, value);
    }
    assert_eq!(storage.components()[0], 10);

    let range: Vec<_> = storage.into_iter().map(|tuple| tuple.1).collect();
    assert_eq!(range, (10..110).collect::<Vec<_>>());
}

#[test]
fn test_erased() {
    let mut storage: Box<dyn AnyStorage> = Box::new(ComponentStorage::<u8>::new());
    storage
        .as_any_mut()
        .downcast_mut::<ComponentStorage<u8>>()
        .unwrap()
        .insert(entity(4), 4)
        .unwrap();
    assert!(storage.contains(entity(4)));
    assert_eq!(storage.component_name(), "u8");

    storage.entity_destroyed(entity(4));
    storage.entity_destroyed(entity(4));
    assert!(storage.is_empty());
}
