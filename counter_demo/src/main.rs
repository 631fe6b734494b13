// main.rs - three counters with undo/redo
//
// The small variant: a seeded grid of three counters, per-counter controls,
// bulk controls, and a bounded undo/redo history. Cell text lives in a
// TextSurface cache that only gets rewritten for cells the store reports as
// changed.

use counter_store::{Changed, CounterGrid, CounterStore, GridRenderer, History, TextSurface};
use eframe::egui;
use tracing_subscriber::EnvFilter;

const LABELS: [&str; 3] = ["Counter A", "Counter B", "Counter C"];
const HISTORY_LIMIT: usize = 100;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 460.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Counters",
        options,
        Box::new(|_cc| Box::new(CounterApp::default())),
    )
}

struct CounterApp {
    store: CounterStore,
    renderer: GridRenderer,
    surface: TextSurface,
}

impl Default for CounterApp {
    fn default() -> Self {
        let store = CounterStore::with_history(
            CounterGrid::from_values(vec![0, 5, 10]),
            History::bounded(HISTORY_LIMIT),
        );
        let renderer = GridRenderer;
        let mut surface = TextSurface::new(store.len());
        renderer.render_all(store.values(), &mut surface);

        Self { store, renderer, surface }
    }
}

impl eframe::App for CounterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut changed: Option<Changed> = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Counters");

            for (i, label) in LABELS.iter().enumerate() {
                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(*label);
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                egui::RichText::new(self.surface.cell(i)).size(24.0).strong(),
                            );
                        });
                    });

                    ui.horizontal(|ui| {
                        if ui.button("+1").clicked() {
                            changed = self.store.increment(i, 1).ok();
                        }
                        if ui.button("-1").clicked() {
                            changed = self.store.decrement(i, 1).ok();
                        }
                        if ui.button("+10").clicked() {
                            changed = self.store.increment(i, 10).ok();
                        }
                        if ui.button("Reset").clicked() {
                            changed = self.store.reset(i).ok();
                        }
                    });
                });
            }

            ui.separator();

            ui.group(|ui| {
                ui.horizontal(|ui| {
                    ui.label("Stats");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(egui::RichText::new(self.surface.stats_line()).strong());
                    });
                });

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

                    // Disabled buttons stand in for the empty-history no-op.
                    if ui.add_enabled(self.store.can_undo(), egui::Button::new("Undo")).clicked() {
                        changed = self.store.undo().ok();
                    }
                    if ui.add_enabled(self.store.can_redo(), egui::Button::new("Redo")).clicked() {
                        changed = self.store.redo().ok();
                    }
                });
            });
        });

        if let Some(changed) = changed {
            self.renderer.apply(self.store.values(), &changed, &mut self.surface);
        }
    }
}
