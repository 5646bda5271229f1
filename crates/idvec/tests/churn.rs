//! Seeded random insert/remove sequences checked against a `HashMap` model.

use std::collections::HashMap;

use idvec::{Id, IdVec, InvalidCause, Result};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn run_churn(seed: u64, steps: usize, remove_ratio: f64) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut vec = IdVec::new();
    let mut model: HashMap<Id, u64> = HashMap::new();
    let mut live: Vec<Id> = Vec::new();
    let mut freed: Vec<Id> = Vec::new();

    for step in 0..steps {
        if !live.is_empty() && rng.random_bool(remove_ratio) {
            let victim = live.swap_remove(rng.random_range(0..live.len()));
            let expected = model.remove(&victim);
            assert_eq!(Some(vec.remove(victim)), expected);

            if vec.is_empty() {
                freed.clear();
            } else {
                freed.push(victim);
            }
        } else {
            let value: u64 = rng.random();
            let id = vec.insert(value);

            // LIFO reuse of the most recently freed id.
            if let Some(reused) = freed.pop() {
                assert_eq!(id, reused);
            }
            assert!(model.insert(id, value).is_none());
            live.push(id);
        }

        if step % 64 == 0 {
            vec.assert_invariants();
        }
    }

    vec.assert_invariants();
    assert_eq!(vec.len(), model.len());
    assert_eq!(vec.free_len(), freed.len());

    for (&id, &value) in &model {
        assert_eq!(*vec.get(id)?, value);
        assert_eq!(vec.id_at(vec.position_of(id)), id);
    }
    for &id in &freed {
        assert_eq!(vec.get(id).unwrap_err().invalid_cause(), InvalidCause::Removed);
    }

    let mut iterated: Vec<u64> = vec.iter().copied().collect();
    let mut expected: Vec<u64> = model.values().copied().collect();
    iterated.sort_unstable();
    expected.sort_unstable();
    assert_eq!(iterated, expected);

    Ok(())
}

#[test]
fn test_churn_insert_heavy() -> Result<()> {
    run_churn(1, 10_000, 0.3)
}

#[test]
fn test_churn_balanced() -> Result<()> {
    run_churn(2, 10_000, 0.5)
}

#[test]
fn test_churn_remove_heavy() -> Result<()> {
    // Drains the store repeatedly, exercising the reset path.
    run_churn(3, 10_000, 0.7)
}
