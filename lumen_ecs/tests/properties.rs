//! Randomized checks of invariants which must hold after every coordinator call.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lumen_ecs::{Coordinator, Entity, Signature, System, MAX_ENTITIES};

#[derive(Debug, Copy, Clone, PartialEq)]
struct Position(i64);

#[derive(Debug, Copy, Clone, PartialEq)]
struct Velocity(i64);

#[derive(Debug, Copy, Clone, PartialEq)]
struct Health(i64);

struct Movement;

impl System for Movement {
    type Components = (Position, Velocity);
}

struct Damage;

impl System for Damage {
    type Components = (Health,);
}

struct Everything;

impl System for Everything {
    type Components = ();
}

fn coordinator() -> Coordinator {
    let mut coordinator = Coordinator::new();
    coordinator.register_component::<Position>().unwrap();
    coordinator.register_component::<Velocity>().unwrap();
    coordinator.register_component::<Health>().unwrap();
    coordinator
        .register_system_with_components::<Movement>()
        .unwrap();
    coordinator
        .register_system_with_components::<Damage>()
        .unwrap();
    coordinator
        .register_system_with_components::<Everything>()
        .unwrap();
    coordinator
}

fn check_system<S>(coordinator: &Coordinator, living: &BTreeSet<Entity>)
where
    S: System,
{
    let required = coordinator.system_signature::<S>().unwrap();
    let members = coordinator.system_entities::<S>().unwrap();
    for &entity in living {
        let signature = coordinator.signature(entity).unwrap();
        assert_eq!(
            members.contains(&entity),
            signature.matches(required),
            "membership of entity {} with {:?} in system requiring {:?}",
            entity,
            signature,
            required,
        );
    }
    assert!(members.iter().all(|entity| living.contains(entity)));
}

fn check_component<T>(coordinator: &Coordinator, living: &BTreeSet<Entity>)
where
    T: lumen_ecs::Component,
{
    let component_type = coordinator.component_type::<T>().unwrap();
    for &entity in living {
        let signature = coordinator.signature(entity).unwrap();
        assert_eq!(
            signature.contains(component_type),
            coordinator.has_component::<T>(entity),
        );
    }

    let storage = coordinator.components().storage::<T>().unwrap();
    for index in 0..storage.len() {
        let entity = storage.entity_at(index).unwrap();
        assert_eq!(storage.index_of(entity), Some(index));
        assert!(living.contains(&entity));
    }
    assert_eq!(storage.entity_at(storage.len()), None);
}

fn check_all(coordinator: &Coordinator, living: &BTreeSet<Entity>) {
    assert_eq!(coordinator.living_count(), living.len());
    check_component::<Position>(coordinator, living);
    check_component::<Velocity>(coordinator, living);
    check_component::<Health>(coordinator, living);
    check_system::<Movement>(coordinator, living);
    check_system::<Damage>(coordinator, living);
    check_system::<Everything>(coordinator, living);
}

fn toggle<T>(coordinator: &mut Coordinator, entity: Entity, component: T)
where
    T: lumen_ecs::Component,
{
    if coordinator.has_component::<T>(entity) {
        coordinator.remove_component::<T>(entity).unwrap();
    } else {
        coordinator.add_component(entity, component).unwrap();
    }
}

#[test]
fn random_operations_keep_invariants() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut coordinator = coordinator();
    let mut living = BTreeSet::new();

    for step in 0..3000 {
        let alive: Vec<Entity> = living.iter().copied().collect();
        match rng.gen_range(0..10) {
            0..=2 => {
                let entity = coordinator.create_entity().unwrap();
                assert!(entity.index() < MAX_ENTITIES);
                assert!(living.insert(entity), "entity {} issued twice", entity);
                assert_eq!(coordinator.signature(entity), Ok(Signature::EMPTY));
            }
            3 if !alive.is_empty() => {
                let entity = alive[rng.gen_range(0..alive.len())];
                coordinator.destroy_entity(entity).unwrap();
                living.remove(&entity);
            }
            4..=9 if !alive.is_empty() => {
                let entity = alive[rng.gen_range(0..alive.len())];
                let value = step as i64;
                match rng.gen_range(0..3) {
                    0 => toggle(&mut coordinator, entity, Position(value)),
                    1 => toggle(&mut coordinator, entity, Velocity(value)),
                    _ => toggle(&mut coordinator, entity, Health(value)),
                }
            }
            _ => {}
        }
        check_all(&coordinator, &living);
    }
}

#[test]
fn ids_stay_unique_under_churn() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut coordinator = Coordinator::new();
    let mut living = BTreeSet::new();

    for _ in 0..MAX_ENTITIES {
        living.insert(coordinator.create_entity().unwrap());
    }
    assert!(coordinator.create_entity().is_err());

    for _ in 0..2_000 {
        let alive: Vec<Entity> = living.iter().copied().collect();
        let entity = alive[rng.gen_range(0..alive.len())];
        coordinator.destroy_entity(entity).unwrap();
        living.remove(&entity);

        let entity = coordinator.create_entity().unwrap();
        assert!(entity.index() < MAX_ENTITIES);
        assert!(living.insert(entity));
    }
    assert_eq!(coordinator.living_count(), MAX_ENTITIES);
}
