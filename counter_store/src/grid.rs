// grid.rs - the counter grid itself

use crate::error::StoreError;

/// Ordered, fixed-length collection of integer counters. The length is set
/// at construction and never changes; cells are addressed by flat index
/// `0..len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterGrid {
    values: Vec<i64>,
}

impl CounterGrid {
    /// Grid of `len` zeroed counters. `len` must be non-zero so the average
    /// is always defined.
    pub fn zeroed(len: usize) -> Self {
        assert!(len > 0, "counter grid cannot be empty");
        Self { values: vec![0; len] }
    }

    /// Grid seeded with explicit starting values.
    pub fn from_values(values: Vec<i64>) -> Self {
        assert!(!values.is_empty(), "counter grid cannot be empty");
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Result<i64, StoreError> {
        self.check_index(index)?;
        Ok(self.values[index])
    }

    pub fn check_index(&self, index: usize) -> Result<(), StoreError> {
        if index < self.values.len() {
            Ok(())
        } else {
            Err(StoreError::IndexOutOfRange { index, len: self.values.len() })
        }
    }

    /// Caller must have bounds-checked `index`.
    pub(crate) fn add(&mut self, index: usize, by: i64) {
        self.values[index] += by;
    }

    pub(crate) fn set(&mut self, index: usize, value: i64) {
        self.values[index] = value;
    }

    pub(crate) fn add_all(&mut self, by: i64) {
        for v in &mut self.values {
            *v += by;
        }
    }

    pub(crate) fn fill(&mut self, value: i64) {
        self.values.fill(value);
    }

    /// Replace every value. `values` must match the grid length; callers
    /// only hand back vectors captured from this same grid.
    pub(crate) fn restore(&mut self, values: &[i64]) {
        debug_assert_eq!(values.len(), self.values.len());
        self.values.copy_from_slice(values);
    }
}
