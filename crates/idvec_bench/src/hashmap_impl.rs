use std::collections::HashMap;

use anyhow::{Context, Result};

use crate::StoreBenchmark;

/// Baseline: keyed map with a monotonically increasing handle counter.
pub struct HashMapBench {
    map: HashMap<i64, u64>,
    next: i64,
}

impl StoreBenchmark for HashMapBench {
    fn name() -> &'static str {
        "hashmap"
    }

    fn create(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
            next: 0,
        }
    }

    fn insert_sequential(&mut self, count: u64) -> Vec<i64> {
        (0..count).map(|v| self.insert(v)).collect()
    }

    fn churn(&mut self, handles: &mut [i64]) -> Result<()> {
        for handle in handles {
            let value = self
                .map
                .remove(&*handle)
                .with_context(|| format!("missing handle {handle}"))?;
            *handle = self.insert(value.wrapping_add(1));
        }
        Ok(())
    }

    fn read_random(&self, handles: &[i64]) -> Result<u64> {
        let mut sum = 0u64;
        for handle in handles {
            let value = self
                .map
                .get(handle)
                .with_context(|| format!("missing handle {handle}"))?;
            sum = sum.wrapping_add(*value);
        }
        Ok(sum)
    }

    fn read_sequential(&self) -> u64 {
        self.map.values().fold(0u64, |sum, &v| sum.wrapping_add(v))
    }

    fn len(&self) -> usize {
        self.map.len()
    }
}

impl HashMapBench {
    fn insert(&mut self, value: u64) -> i64 {
        let handle = self.next;
        self.next += 1;
        self.map.insert(handle, value);
        handle
    }
}
