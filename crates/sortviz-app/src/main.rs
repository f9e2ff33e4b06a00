//! Sorting visualizer GUI shell.
//!
//! Thin presentation host around `sortviz-driver`: a fixed-size canvas that
//! draws the element store left-to-right, an algorithm selector, and
//! Sort/Reset buttons. All animation behavior lives in the driver; this
//! binary only forwards commands and repaints.

mod app;
mod items;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Sorting Visualizer")
            .with_inner_size([1270.0, 610.0]),
        ..Default::default()
    };

    eframe::run_native(
        "sortviz",
        options,
        Box::new(|cc| Ok(Box::new(app::VisualizerApp::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!("event loop failed: {e}"))
}
