use crate::mesh_error::MeshError;
use crate::topology::store::{EntityStore, InMemoryEntityStore};

fn store_of(values: &[i32]) -> InMemoryEntityStore<i32> {
    let mut store = InMemoryEntityStore::new(1, 0);
    for &v in values {
        let id = store.make(v).unwrap();
        store.add_entity(0, 0, id).unwrap();
    }
    store
}

#[test]
fn entity_set_is_restartable_and_exact() {
    let store = store_of(&[1, 2, 3]);
    let set = store.entities(0, 0);
    assert_eq!(set.len(), 3);
    let first: Vec<_> = set.clone().collect();
    let second: Vec<_> = set.collect();
    assert_eq!(first, second);
    assert_eq!(store.entities(0, 0).collect::<Vec<_>>(), first);
}

#[test]
fn clone_keeps_cursor_position() {
    let store = store_of(&[10, 20, 30]);
    let mut set = store.entities(0, 0);
    set.next();
    let rest: Vec<_> = set.clone().collect();
    assert_eq!(rest.len(), 2);
    assert_eq!(set.as_slice().len(), 2);
    assert_eq!(set.next_back(), rest.last().copied());
}

#[test]
fn select_keeps_creation_order() {
    let mut store = InMemoryEntityStore::new(1, 0);
    let ids: Vec<_> = [5, -1, 7, -3, 9]
        .iter()
        .map(|&v| store.make(v).unwrap())
        .collect();
    for &id in ids.iter().rev() {
        store.add_entity(0, 0, id).unwrap();
    }
    assert_eq!(store.entities(0, 0).next(), ids.last().copied());

    let positive = store
        .entities(0, 0)
        .select(|p| store.entity(p).is_some_and(|&v| v > 0));
    let values: Vec<i32> = positive
        .iter()
        .filter_map(|p| store.entity(p).copied())
        .collect();
    assert_eq!(values, vec![5, 7, 9]);
}

#[test]
fn try_select_stops_at_first_error() {
    let store = store_of(&[1, 2, 3]);
    let bad = store.entities(0, 0).nth(1).unwrap();
    let mut seen = 0;
    let err = store
        .entities(0, 0)
        .try_select(|p| {
            seen += 1;
            if p == bad {
                Err(MeshError::DanglingEntity(p))
            } else {
                Ok(true)
            }
        })
        .unwrap_err();
    assert_eq!(err, MeshError::DanglingEntity(bad));
    assert_eq!(seen, 2);
}

#[test]
fn empty_set_selects_nothing() {
    let store = store_of(&[]);
    assert!(store.entities(0, 0).select(|_| true).is_empty());
    assert!(store.entities(3, 0).try_select(|_| Ok(true)).unwrap().is_empty());
}
