// main.rs - 150x150 counter grid
//
// The large variant: 22,500 counters painted as a color grid. Clicking a
// cell selects it; the selection row applies single-cell operations, the
// bulk row hits every cell. Colors live in a per-cell cache that is only
// recomputed for changed indices, so a single-cell click never touches the
// other 22,499 entries.

use counter_store::{
    CellSurface, Changed, CounterGrid, CounterStore, GridRenderer, History, Stats,
};
use eframe::egui;
use egui::{Color32, Rect, Sense, Stroke, Vec2};
use tracing_subscriber::EnvFilter;

// Grid dimensions; flat index = row * GRID_SIZE + col
const GRID_SIZE: usize = 150;
const TOTAL: usize = GRID_SIZE * GRID_SIZE;
const HISTORY_LIMIT: usize = 100;

const BOX_SIZE: f32 = 4.0;
const SPACING: f32 = 0.5;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([740.0, 860.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Counter Grid 150x150",
        options,
        Box::new(|_cc| Box::new(GridApp::default())),
    )
}

/// Per-cell color cache plus the formatted stats line.
struct ColorSurface {
    colors: Vec<Color32>,
    stats_line: String,
}

impl ColorSurface {
    fn new(len: usize) -> Self {
        Self { colors: vec![Color32::BLACK; len], stats_line: String::new() }
    }

    fn color(&self, index: usize) -> Color32 {
        self.colors[index]
    }
}

impl CellSurface for ColorSurface {
    fn set_cell(&mut self, index: usize, value: i64) {
        self.colors[index] = value_color(value);
    }

    fn set_stats(&mut self, stats: Stats) {
        self.stats_line = stats.line();
    }
}

/// Zero is dark gray, positive values ramp to green, negative to red.
/// Saturates at |50| so +10 steps stay visibly distinct early on.
fn value_color(value: i64) -> Color32 {
    if value == 0 {
        return Color32::from_gray(40);
    }
    let ramp = (value.unsigned_abs().min(50) * 4) as u8;
    if value > 0 {
        Color32::from_rgb(30, 55 + ramp, 30)
    } else {
        Color32::from_rgb(55 + ramp, 30, 30)
    }
}

struct GridApp {
    store: CounterStore,
    renderer: GridRenderer,
    surface: ColorSurface,
    selected: Option<usize>,
}

impl Default for GridApp {
    fn default() -> Self {
        let store = CounterStore::with_history(
            CounterGrid::zeroed(TOTAL),
            History::bounded(HISTORY_LIMIT),
        );
        let renderer = GridRenderer;
        let mut surface = ColorSurface::new(TOTAL);
        renderer.render_all(store.values(), &mut surface);

        Self { store, renderer, surface, selected: None }
    }
}

impl eframe::App for GridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut changed: Option<Changed> = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("150x150 Counter Grid");

            // Bulk controls and history
            ui.horizontal(|ui| {
                if ui.button("+1 all").clicked() {
                    changed = Some(self.store.increment_all(1));
                }
                if ui.button("+10 all").clicked() {
                    changed = Some(self.store.increment_all(10));
                }
                if ui.button("Reset all").clicked() {
                    changed = Some(self.store.reset_all());
                }

                ui.separator();

                if ui.add_enabled(self.store.can_undo(), egui::Button::new("Undo")).clicked() {
                    changed = self.store.undo().ok();
                }
                if ui.add_enabled(self.store.can_redo(), egui::Button::new("Redo")).clicked() {
                    changed = self.store.redo().ok();
                }
            });

            // Selected-cell controls
            ui.horizontal(|ui| {
                match self.selected {
                    Some(index) => {
                        let value = self.store.value(index).unwrap_or(0);
                        ui.label(format!("#{index} = {value}"));

                        if ui.button("+1").clicked() {
                            changed = self.store.increment(index, 1).ok();
                        }
                        if ui.button("-1").clicked() {
                            changed = self.store.decrement(index, 1).ok();
                        }
                        if ui.button("+10").clicked() {
                            changed = self.store.increment(index, 10).ok();
                        }
                        if ui.button("Reset").clicked() {
                            changed = self.store.reset(index).ok();
                        }
                    }
                    None => {
                        ui.label("Click a cell to select it");
                    }
                }
            });

            ui.separator();

            egui::ScrollArea::both().show(ui, |ui| {
                let start_pos = ui.cursor().min;
                let total_size =
                    Vec2::splat((BOX_SIZE + SPACING) * GRID_SIZE as f32 - SPACING);

                let (response, painter) = ui.allocate_painter(total_size, Sense::click());

                painter.rect_filled(
                    Rect::from_min_size(start_pos, total_size),
                    0.0,
                    Color32::from_gray(15),
                );

                for index in 0..TOTAL {
                    let row = index / GRID_SIZE;
                    let col = index % GRID_SIZE;

                    let x = start_pos.x + col as f32 * (BOX_SIZE + SPACING);
                    let y = start_pos.y + row as f32 * (BOX_SIZE + SPACING);

                    let rect =
                        Rect::from_min_size(egui::pos2(x, y), Vec2::splat(BOX_SIZE));

                    painter.rect_filled(rect, 0.0, self.surface.color(index));
                }

                // Outline the selection on top of the cells
                if let Some(index) = self.selected {
                    let row = index / GRID_SIZE;
                    let col = index % GRID_SIZE;
                    let x = start_pos.x + col as f32 * (BOX_SIZE + SPACING);
                    let y = start_pos.y + row as f32 * (BOX_SIZE + SPACING);
                    let rect =
                        Rect::from_min_size(egui::pos2(x, y), Vec2::splat(BOX_SIZE));
                    painter.rect_stroke(rect.expand(1.0), 0.0, Stroke::new(1.0, Color32::WHITE));
                }

                // Map the click straight back to a cell index; checking
                // 22,500 rects with contains() is what this variant avoids.
                if response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        let col = ((pos.x - start_pos.x) / (BOX_SIZE + SPACING)) as isize;
                        let row = ((pos.y - start_pos.y) / (BOX_SIZE + SPACING)) as isize;
                        if (0..GRID_SIZE as isize).contains(&col)
                            && (0..GRID_SIZE as isize).contains(&row)
                        {
                            self.selected =
                                Some(row as usize * GRID_SIZE + col as usize);
                        }
                    }
                }
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Stats:");
                ui.label(egui::RichText::new(&self.surface.stats_line).strong());
            });
        });

        if let Some(changed) = changed {
            self.renderer.apply(self.store.values(), &changed, &mut self.surface);
        }
    }
}
