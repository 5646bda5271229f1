use std::collections::HashMap;

use idvec::{Id, IdVec, Result};

fn setup_vec() -> (IdVec<u32>, Vec<Id>) {
    let mut vec = IdVec::new();
    let ids: Vec<Id> = (0..10).map(|v| vec.insert(v)).collect();
    for &id in &ids[2..5] {
        vec.remove(id);
    }
    (vec, ids)
}

#[test]
fn test_iter_matches_get() -> Result<()> {
    let (vec, ids) = setup_vec();

    let mut iterated: Vec<u32> = vec.iter().copied().collect();
    let mut reachable = ids
        .iter()
        .filter(|&&id| vec.valid(id))
        .map(|&id| vec.get(id).copied())
        .collect::<Result<Vec<u32>>>()?;

    iterated.sort_unstable();
    reachable.sort_unstable();
    assert_eq!(iterated, reachable);
    assert_eq!(iterated, vec![0, 1, 5, 6, 7, 8, 9]);

    Ok(())
}

#[test]
fn test_iter_with_ids() -> Result<()> {
    let (vec, _) = setup_vec();

    let pairs: Vec<(Id, u32)> = vec.iter_with_ids().map(|(id, &v)| (id, v)).collect();

    assert_eq!(pairs.len(), vec.len());
    assert_eq!(vec.iter_with_ids().len(), vec.len());
    for (pos, &(id, v)) in pairs.iter().enumerate() {
        assert_eq!(vec.id_at(pos), id);
        assert_eq!(*vec.get(id)?, v);
    }
    assert_eq!(
        vec.iter_with_ids().next_back().map(|(id, _)| id),
        vec.ids().last().copied()
    );

    Ok(())
}

#[test]
fn test_iter_with_ids_mut() -> Result<()> {
    let (mut vec, _) = setup_vec();

    for (id, v) in vec.iter_with_ids_mut() {
        *v = id.get() as u32 * 100;
    }

    for &id in vec.ids() {
        assert_eq!(*vec.get(id)?, id.get() as u32 * 100);
    }

    Ok(())
}

#[test]
fn test_iter_mut_and_slices() {
    let (mut vec, _) = setup_vec();

    for v in vec.iter_mut() {
        *v += 1;
    }
    for v in &mut vec {
        *v *= 2;
    }
    vec.as_mut_slice()[0] = 0;
    *vec.element_at_mut(1) = 1;

    let sum: u32 = (&vec).into_iter().sum();
    let expected: u32 = vec.as_slice()[2..].iter().sum::<u32>() + 1;
    assert_eq!(sum, expected);
    assert_eq!(vec.as_slice()[0], 0);
}

#[test]
fn test_into_iter_owned() {
    let (vec, _) = setup_vec();
    let expected: Vec<u32> = vec.as_slice().to_vec();

    let owned: Vec<u32> = vec.into_iter().collect();

    assert_eq!(owned, expected);
}

#[test]
fn test_ids_match_get_after_relocation() -> Result<()> {
    let mut vec = IdVec::new();
    let mut model = HashMap::new();
    for v in 0..6_u32 {
        model.insert(vec.insert(v), v);
    }
    for raw in [0, 5, 2] {
        let id = Id::new(raw);
        vec.remove(id);
        model.remove(&id);
    }

    let from_iter: HashMap<Id, u32> = vec.iter_with_ids().map(|(id, &v)| (id, v)).collect();
    assert_eq!(from_iter, model);

    Ok(())
}

#[test]
fn test_iter_ids_follows_storage_order() -> Result<()> {
    let (mut vec, ids) = setup_vec();

    let listed: Vec<Id> = vec.iter_ids().collect();
    assert_eq!(listed, vec.ids());
    assert_eq!(vec.iter_ids().len(), vec.len());
    for (pos, id) in vec.iter_ids().enumerate() {
        assert_eq!(vec.position_of(id), pos);
    }

    // Reused id shows up at the end of storage.
    let reused = vec.insert(42);
    assert_eq!(reused, ids[4]);
    assert_eq!(vec.iter_ids().last(), Some(reused));
    assert_eq!(*vec.get(reused)?, 42);

    Ok(())
}
