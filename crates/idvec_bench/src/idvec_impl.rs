use anyhow::Result;
use idvec::{Id, IdVec};

use crate::StoreBenchmark;

pub struct IdVecBench {
    vec: IdVec<u64>,
}

impl StoreBenchmark for IdVecBench {
    fn name() -> &'static str {
        "idvec"
    }

    fn create(capacity: usize) -> Self {
        Self {
            vec: IdVec::with_capacity(capacity),
        }
    }

    fn insert_sequential(&mut self, count: u64) -> Vec<i64> {
        (0..count).map(|v| self.vec.insert(v).get()).collect()
    }

    fn churn(&mut self, handles: &mut [i64]) -> Result<()> {
        for handle in handles {
            let value = self.vec.try_remove(Id::new(*handle))?;
            *handle = self.vec.insert(value.wrapping_add(1)).get();
        }
        Ok(())
    }

    fn read_random(&self, handles: &[i64]) -> Result<u64> {
        let mut sum = 0u64;
        for &handle in handles {
            sum = sum.wrapping_add(*self.vec.get(Id::new(handle))?);
        }
        Ok(sum)
    }

    fn read_sequential(&self) -> u64 {
        self.vec.iter().fold(0u64, |sum, &v| sum.wrapping_add(v))
    }

    fn len(&self) -> usize {
        self.vec.len()
    }
}
