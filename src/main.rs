// src/main.rs
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
mod chart;
mod engine;
mod gui;
mod types;
mod visualizer;
use anyhow::anyhow;
use chart::ChartConfig;
use eframe::egui;
// 入口函数
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = ChartConfig::default();
    let mut app = gui::LiveChartApp::new(config)?;
    log::info!(
        "starting live chart: {} channels, window {} (full after {} ticks), {} samples per {:?} tick",
        config.channels,
        config.visible_window,
        config.ticks_to_fill(),
        config.sample_rate,
        config.tick_interval
    );
    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(config.window_size)
        .with_title("Live Chart");
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Live Chart",
        options,
        Box::new(move |cc| {
            app.install(&cc.egui_ctx);
            Box::new(app)
        }),
    )
    .map_err(|e| anyhow!("event loop failed: {e}"))
}
