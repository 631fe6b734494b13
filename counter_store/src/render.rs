// render.rs - patch changed cells into a display surface
//
// Mirrors the split between "redraw one cell's value" and "always redraw the
// stats line": a mutation hands back a Changed set, and the renderer writes
// exactly those cells plus fresh aggregates into whatever surface the
// frontend keeps (string cache, color cache, ...).

use std::ops::Range;

/// Which cells a mutation touched. Single-cell ops report `Cell`; bulk ops,
/// and reversals of bulk ops, report `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Changed {
    Cell(usize),
    All,
}

impl Changed {
    /// Indices to repaint, for a grid of `len` cells.
    pub fn indices(&self, len: usize) -> Range<usize> {
        match *self {
            Changed::Cell(index) => index..index + 1,
            Changed::All => 0..len,
        }
    }

    pub fn count(&self, len: usize) -> usize {
        match *self {
            Changed::Cell(_) => 1,
            Changed::All => len,
        }
    }
}

/// Aggregates over the whole grid. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub sum: i64,
    pub avg: f64,
}

impl Stats {
    pub fn of(values: &[i64]) -> Self {
        let sum: i64 = values.iter().sum();
        Stats { sum, avg: sum as f64 / values.len() as f64 }
    }

    /// Stats line as shown in the demos, average to one decimal.
    pub fn line(&self) -> String {
        format!("{} (sum) \u{2022} avg {:.1}", self.sum, self.avg)
    }
}

/// Where cell values and the stats line end up. Each frontend keeps its own
/// cache behind this trait; tests use it to observe exactly what got
/// repainted.
pub trait CellSurface {
    fn set_cell(&mut self, index: usize, value: i64);
    fn set_stats(&mut self, stats: Stats);
}

/// Pushes grid state into a `CellSurface`, touching only changed cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridRenderer;

impl GridRenderer {
    /// Full paint: every cell once, then the stats. Used at startup.
    pub fn render_all<S: CellSurface>(&self, values: &[i64], surface: &mut S) {
        self.apply(values, &Changed::All, surface);
    }

    /// Incremental paint: only the cells in `changed`, then the stats. The
    /// stats line is always rewritten since any change moves the aggregates.
    /// Applying the same state twice is a no-op for the surface contents.
    pub fn apply<S: CellSurface>(&self, values: &[i64], changed: &Changed, surface: &mut S) {
        for index in changed.indices(values.len()) {
            surface.set_cell(index, values[index]);
        }
        surface.set_stats(Stats::of(values));
    }
}

/// One formatted string per cell plus the stats line. Backs the small demo
/// and keeps formatting off the per-frame path: strings are rebuilt only for
/// cells that actually changed.
#[derive(Debug, Clone)]
pub struct TextSurface {
    cells: Vec<String>,
    stats_line: String,
}

impl TextSurface {
    pub fn new(len: usize) -> Self {
        Self { cells: vec![String::new(); len], stats_line: String::new() }
    }

    pub fn cell(&self, index: usize) -> &str {
        &self.cells[index]
    }

    pub fn stats_line(&self) -> &str {
        &self.stats_line
    }
}

impl CellSurface for TextSurface {
    fn set_cell(&mut self, index: usize, value: i64) {
        self.cells[index] = value.to_string();
    }

    fn set_stats(&mut self, stats: Stats) {
        self.stats_line = stats.line();
    }
}
