use eframe::egui::{self, ComboBox, CornerRadius, Pos2, Rect};

use sortviz_core::Algorithm;
use sortviz_driver::{AnimationDriver, Pacing, RedrawHost};

use crate::items::{self, BarStyle};

const LEFT_MARGIN: f32 = 10.0;
const BAR_GAP: f32 = 10.0;
const BAR_WIDTH: f32 = 140.0;

/// Redraw seam backed by egui's repaint request.
///
/// `request_repaint` is thread-safe and non-blocking; egui coalesces bursts
/// of requests into the next frame, which is exactly the fire-and-forget
/// semantics the driver expects.
struct RepaintHost(egui::Context);

impl RedrawHost for RepaintHost {
    fn request_redraw(&self) {
        self.0.request_repaint();
    }
}

pub struct VisualizerApp {
    driver: AnimationDriver<BarStyle, RepaintHost>,
    selected: Algorithm,
}

impl VisualizerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let host = RepaintHost(cc.egui_ctx.clone());
        let mut driver = AnimationDriver::new(items::starting_lineup(), host, Pacing::Animated);
        // Initial shuffle, so the first frame already shows a scrambled store.
        driver.reset();
        Self {
            driver,
            selected: Algorithm::Bubble,
        }
    }
}

impl eframe::App for VisualizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ComboBox::from_id_salt("algorithm")
                    .selected_text(self.selected.label())
                    .show_ui(ui, |ui| {
                        for algorithm in Algorithm::ALL {
                            ui.selectable_value(&mut self.selected, algorithm, algorithm.label());
                        }
                    });
                if ui.button("Sort").clicked() {
                    self.driver.sort(self.selected);
                }
                if ui.button("Reset").clicked() {
                    self.driver.reset();
                }
                if self.driver.is_running() {
                    ui.label("sorting…");
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let canvas = ui.available_rect_before_wrap();
            let painter = ui.painter();

            // Items left-to-right with a fixed gap, bottoms aligned to the
            // vertical center of the canvas.
            let baseline = canvas.center().y;
            let mut x = canvas.left() + LEFT_MARGIN;
            for item in self.driver.snapshot() {
                let height = item.key() as f32;
                let bar = Rect::from_min_max(
                    Pos2::new(x, baseline - height),
                    Pos2::new(x + BAR_WIDTH, baseline),
                );
                painter.rect_filled(bar, CornerRadius::ZERO, item.payload().color);
                x += BAR_WIDTH + BAR_GAP;
            }
        });
    }
}
