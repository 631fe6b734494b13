// store.rs - validated mutations over the counter grid
//
// Every operation either fails before touching anything or completes fully:
// bounds are checked first, the history entry is recorded, then the grid is
// mutated. No partially-applied state is ever observable.

use tracing::{debug, warn};

use crate::error::StoreError;
use crate::grid::CounterGrid;
use crate::history::{History, Reversal};
use crate::render::{Changed, Stats};

/// Owns the counter grid and its undo/redo history. All mutations go through
/// here and report the cells a frontend must repaint.
#[derive(Debug, Clone)]
pub struct CounterStore {
    grid: CounterGrid,
    history: History,
}

impl CounterStore {
    /// Store over `len` zeroed counters with history disabled.
    pub fn new(len: usize) -> Self {
        Self::with_history(CounterGrid::zeroed(len), History::disabled())
    }

    pub fn with_history(grid: CounterGrid, history: History) -> Self {
        Self { grid, history }
    }

    pub fn len(&self) -> usize {
        self.grid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    pub fn values(&self) -> &[i64] {
        self.grid.values()
    }

    pub fn value(&self, index: usize) -> Result<i64, StoreError> {
        self.grid.get(index)
    }

    pub fn stats(&self) -> Stats {
        Stats::of(self.grid.values())
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Add `by` to one counter.
    pub fn increment(&mut self, index: usize, by: i64) -> Result<Changed, StoreError> {
        self.grid.check_index(index).inspect_err(|e| warn!(%e, "increment rejected"))?;
        self.history.record(Reversal::Add { index, by: -by });
        self.grid.add(index, by);
        debug!(index, by, value = self.grid.values()[index], "increment");
        Ok(Changed::Cell(index))
    }

    /// Subtract `by` from one counter.
    pub fn decrement(&mut self, index: usize, by: i64) -> Result<Changed, StoreError> {
        self.increment(index, -by)
    }

    /// Set one counter back to zero. Recorded in history even when the value
    /// was already zero, matching what the user did, not what it changed.
    pub fn reset(&mut self, index: usize) -> Result<Changed, StoreError> {
        let old = self.grid.get(index).inspect_err(|e| warn!(%e, "reset rejected"))?;
        self.history.record(Reversal::SetCell { index, value: old });
        self.grid.set(index, 0);
        debug!(index, old, "reset");
        Ok(Changed::Cell(index))
    }

    /// Add `by` to every counter.
    pub fn increment_all(&mut self, by: i64) -> Changed {
        self.history.record(Reversal::AddAll { by: -by });
        self.grid.add_all(by);
        debug!(by, len = self.grid.len(), "increment_all");
        Changed::All
    }

    /// Zero every counter.
    pub fn reset_all(&mut self) -> Changed {
        self.history
            .record(Reversal::SetAll { values: self.grid.values().to_vec() });
        self.grid.fill(0);
        debug!(len = self.grid.len(), "reset_all");
        Changed::All
    }

    /// Roll back the most recent mutation. The matching redo entry is
    /// captured before the grid moves, so redo lands exactly where undo
    /// started.
    pub fn undo(&mut self) -> Result<Changed, StoreError> {
        let reversal = self.history.pop_past().ok_or(StoreError::NothingToUndo)?;
        let redo = reversal.inverse_against(&self.grid);
        let changed = reversal.apply(&mut self.grid);
        self.history.push_future(redo);
        debug!(?changed, "undo");
        Ok(changed)
    }

    /// Re-apply the most recently undone mutation.
    pub fn redo(&mut self) -> Result<Changed, StoreError> {
        let reversal = self.history.pop_future().ok_or(StoreError::NothingToRedo)?;
        let undo = reversal.inverse_against(&self.grid);
        let changed = reversal.apply(&mut self.grid);
        self.history.push_past_unrecorded(undo);
        debug!(?changed, "redo");
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn seeded() -> CounterStore {
        CounterStore::with_history(
            CounterGrid::from_values(vec![0, 5, 10]),
            History::bounded(100),
        )
    }

    #[test]
    fn increment_then_decrement_restores_the_grid() {
        let mut store = seeded();
        let before = store.values().to_vec();

        store.increment(1, 7).unwrap();
        store.decrement(1, 7).unwrap();

        assert_eq!(store.values(), &before[..]);
    }

    #[test]
    fn increment_reports_the_touched_cell() {
        let mut store = seeded();
        assert_eq!(store.increment(0, 1), Ok(Changed::Cell(0)));
        assert_eq!(store.values(), &[1, 5, 10]);
    }

    #[test]
    fn out_of_range_index_fails_without_side_effects() {
        let mut store = seeded();
        let err = StoreError::IndexOutOfRange { index: 3, len: 3 };

        assert_eq!(store.increment(3, 1), Err(err));
        assert_eq!(store.reset(3), Err(err));
        assert_eq!(store.values(), &[0, 5, 10]);
        // nothing was recorded either
        assert!(!store.can_undo());
    }

    #[test]
    fn reset_all_zeroes_any_grid_and_reports_every_cell() {
        let mut store = CounterStore::new(4);
        store.increment_all(3);

        let changed = store.reset_all();

        assert_eq!(changed, Changed::All);
        assert_eq!(changed.count(store.len()), 4);
        assert_eq!(store.values(), &[0, 0, 0, 0]);
    }

    #[test]
    fn increment_all_shifts_the_sum_by_n_times_by() {
        let mut store = seeded();
        let before = store.stats().sum;

        store.increment_all(10);

        assert_eq!(store.stats().sum, before + 10 * 3);
        assert_eq!(store.values(), &[10, 15, 20]);
    }

    #[test]
    fn average_is_sum_over_len() {
        let store = seeded();
        let stats = store.stats();
        assert_eq!(stats.sum, 15);
        assert_eq!(stats.avg, 5.0);
    }

    #[test]
    fn undo_redo_walks_the_worked_example() {
        let mut store = seeded();

        store.increment(0, 1).unwrap();
        assert_eq!(store.values(), &[1, 5, 10]);

        store.increment_all(10);
        assert_eq!(store.values(), &[11, 15, 20]);

        store.undo().unwrap();
        assert_eq!(store.values(), &[1, 5, 10]);

        store.undo().unwrap();
        assert_eq!(store.values(), &[0, 5, 10]);

        store.redo().unwrap();
        assert_eq!(store.values(), &[1, 5, 10]);
    }

    #[test]
    fn undo_on_empty_past_leaves_state_unchanged() {
        let mut store = seeded();
        assert_eq!(store.undo(), Err(StoreError::NothingToUndo));
        assert_eq!(store.redo(), Err(StoreError::NothingToRedo));
        assert_eq!(store.values(), &[0, 5, 10]);
    }

    #[test]
    fn fresh_mutation_clears_the_redo_stack() {
        let mut store = seeded();
        store.increment(0, 1).unwrap();
        store.undo().unwrap();
        assert!(store.can_redo());

        store.increment(2, 1).unwrap();

        assert!(!store.can_redo());
        assert_eq!(store.redo(), Err(StoreError::NothingToRedo));
    }

    #[test]
    fn reset_of_a_zero_cell_is_still_undoable_history() {
        let mut store = seeded();
        store.reset(0).unwrap(); // already zero
        assert!(store.can_undo());

        store.undo().unwrap();
        assert_eq!(store.values(), &[0, 5, 10]);
    }

    #[test]
    fn undo_of_reset_all_restores_the_exact_values() {
        let mut store = seeded();
        store.increment(2, 5).unwrap();
        store.reset_all();
        assert_eq!(store.values(), &[0, 0, 0]);

        let changed = store.undo().unwrap();

        assert_eq!(changed, Changed::All);
        assert_eq!(store.values(), &[0, 5, 15]);
    }

    #[test]
    fn single_cell_undo_reports_a_single_cell() {
        let mut store = seeded();
        store.increment(1, 10).unwrap();

        assert_eq!(store.undo(), Ok(Changed::Cell(1)));
        assert_eq!(store.redo(), Ok(Changed::Cell(1)));
        assert_eq!(store.values(), &[0, 15, 10]);
    }

    #[test]
    fn redo_keeps_deeper_future_entries() {
        let mut store = seeded();
        store.increment(0, 1).unwrap();
        store.increment(0, 1).unwrap();
        store.undo().unwrap();
        store.undo().unwrap();

        store.redo().unwrap();
        assert!(store.can_redo());
        store.redo().unwrap();
        assert_eq!(store.values(), &[2, 5, 10]);
    }

    #[test]
    fn grid_length_never_changes() {
        let mut store = seeded();
        store.increment_all(2);
        store.reset_all();
        store.undo().unwrap();
        store.undo().unwrap();
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn history_disabled_store_never_offers_undo() {
        let mut store = CounterStore::new(5);
        store.increment(0, 1).unwrap();
        store.increment_all(2);
        assert!(!store.can_undo());
        assert_eq!(store.undo(), Err(StoreError::NothingToUndo));
    }
}
