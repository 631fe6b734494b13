// lib.rs - Counter grid state with selective-redraw change reporting
//
// Every mutation on the store returns the set of cell indices whose display
// needs repainting, so a frontend can patch individual cells instead of
// repainting a 22,500-cell grid on every click.

pub mod error;
pub mod grid;
pub mod history;
pub mod render;
pub mod store;

pub use error::StoreError;
pub use grid::CounterGrid;
pub use history::History;
pub use render::{CellSurface, Changed, GridRenderer, Stats, TextSurface};
pub use store::CounterStore;
