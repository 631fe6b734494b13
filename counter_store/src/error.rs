use thiserror::Error;

/// Failures a store operation can report. Every variant leaves the grid and
/// history exactly as they were before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("counter index {index} out of range for grid of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Undo with nothing to undo. UIs disable the control instead of
    /// surfacing this.
    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,
}
