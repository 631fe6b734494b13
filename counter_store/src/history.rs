// history.rs - bounded undo/redo as a log of inverse operations
//
// Storing the inverse command instead of a full grid snapshot keeps
// single-cell undo/redo O(1) even on the 22,500-cell grid; only operations
// that destroy information grid-wide (reset all) need an O(N) entry.

use std::collections::VecDeque;

use crate::grid::CounterGrid;
use crate::render::Changed;

/// An operation that, applied to the grid, reverses a prior mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reversal {
    /// Undoes an increment/decrement of one cell.
    Add { index: usize, by: i64 },
    /// Undoes a single-cell reset by restoring the overwritten value.
    SetCell { index: usize, value: i64 },
    /// Undoes an increment applied to every cell.
    AddAll { by: i64 },
    /// Undoes a grid-wide overwrite by restoring every value.
    SetAll { values: Vec<i64> },
}

impl Reversal {
    /// Apply to the grid, returning the cells whose display changed.
    pub(crate) fn apply(&self, grid: &mut CounterGrid) -> Changed {
        match self {
            Reversal::Add { index, by } => {
                grid.add(*index, *by);
                Changed::Cell(*index)
            }
            Reversal::SetCell { index, value } => {
                grid.set(*index, *value);
                Changed::Cell(*index)
            }
            Reversal::AddAll { by } => {
                grid.add_all(*by);
                Changed::All
            }
            Reversal::SetAll { values } => {
                grid.restore(values);
                Changed::All
            }
        }
    }

    /// The reversal that undoes `self`, captured against the grid as it is
    /// right now (before `self` is applied).
    pub(crate) fn inverse_against(&self, grid: &CounterGrid) -> Reversal {
        match self {
            Reversal::Add { index, by } => Reversal::Add { index: *index, by: -by },
            Reversal::SetCell { index, .. } => Reversal::SetCell {
                index: *index,
                // bounds were checked when the entry was recorded
                value: grid.values()[*index],
            },
            Reversal::AddAll { by } => Reversal::AddAll { by: -by },
            Reversal::SetAll { .. } => Reversal::SetAll { values: grid.values().to_vec() },
        }
    }
}

/// Two bounded stacks of reversals. `past` holds undoes for applied
/// mutations (most recent last); `future` holds redoes for undone ones
/// (soonest first from the back).
#[derive(Debug, Clone)]
pub struct History {
    past: VecDeque<Reversal>,
    future: Vec<Reversal>,
    limit: usize,
}

impl History {
    /// Keep at most `limit` undoable steps, discarding the oldest beyond
    /// that.
    pub fn bounded(limit: usize) -> Self {
        Self { past: VecDeque::new(), future: Vec::new(), limit }
    }

    /// Record nothing; undo/redo are permanently unavailable.
    pub fn disabled() -> Self {
        Self::bounded(0)
    }

    pub fn is_enabled(&self) -> bool {
        self.limit > 0
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Record the reversal for a fresh mutation. Clears the redo stack: a
    /// new edit forks history and the undone branch is gone.
    pub(crate) fn record(&mut self, reversal: Reversal) {
        if self.limit == 0 {
            return;
        }
        self.future.clear();
        self.past.push_back(reversal);
        while self.past.len() > self.limit {
            self.past.pop_front();
        }
    }

    pub(crate) fn pop_past(&mut self) -> Option<Reversal> {
        self.past.pop_back()
    }

    pub(crate) fn pop_future(&mut self) -> Option<Reversal> {
        self.future.pop()
    }

    pub(crate) fn push_past_unrecorded(&mut self, reversal: Reversal) {
        // Redo path: re-arm undo without clearing the remaining future.
        self.past.push_back(reversal);
    }

    pub(crate) fn push_future(&mut self, reversal: Reversal) {
        self.future.push(reversal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_history_is_empty() {
        let history = History::bounded(100);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn record_enables_undo_and_clears_redo() {
        let mut history = History::bounded(100);
        history.record(Reversal::Add { index: 0, by: -1 });
        assert!(history.can_undo());

        let entry = history.pop_past().unwrap();
        history.push_future(entry);
        assert!(history.can_redo());

        history.record(Reversal::Add { index: 1, by: -1 });
        assert!(!history.can_redo());
    }

    #[test]
    fn bound_discards_oldest_entries() {
        let mut history = History::bounded(2);
        for i in 0..4 {
            history.record(Reversal::Add { index: i, by: -1 });
        }
        assert_eq!(history.pop_past(), Some(Reversal::Add { index: 3, by: -1 }));
        assert_eq!(history.pop_past(), Some(Reversal::Add { index: 2, by: -1 }));
        assert_eq!(history.pop_past(), None);
    }

    #[test]
    fn disabled_history_records_nothing() {
        let mut history = History::disabled();
        history.record(Reversal::AddAll { by: -10 });
        assert!(!history.is_enabled());
        assert!(!history.can_undo());
    }

    #[test]
    fn set_all_reversal_round_trips_the_grid() {
        let mut grid = CounterGrid::from_values(vec![3, 1, 4]);
        let undo = Reversal::SetAll { values: vec![0, 0, 0] };
        let redo = undo.inverse_against(&grid);

        assert_eq!(undo.apply(&mut grid), Changed::All);
        assert_eq!(grid.values(), &[0, 0, 0]);

        redo.apply(&mut grid);
        assert_eq!(grid.values(), &[3, 1, 4]);
    }
}
