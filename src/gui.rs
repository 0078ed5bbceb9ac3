// src/gui.rs
use crate::chart::{
    apply_settings, chart_style, render_chart_png, window_palette, ChartConfig, ChartError,
    ChartStyle, ChartView, PlotStyle, WindowPalette,
};
use crate::engine::{Engine, TickReport};
use crate::types::*;
use crate::visualizer::{self, AxisAnimator, SeriesAnimator};
use anyhow::Context as _;
use eframe::egui;
use egui::Color32;
use std::path::PathBuf;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

pub struct LiveChartApp {
    config: ChartConfig,
    engine: Engine,

    // 设置栏当前选中的值，以及图表实际生效的值
    settings: UiSettings,
    views: Vec<ChartView>,
    chart_style: ChartStyle,

    // 动画状态
    series_anim: SeriesAnimator,
    axis_anim: AxisAnimator,

    // 状态栏日志 + 最近一次更新耗时
    log_messages: Vec<String>,
    last_report: TickReport,
}

impl LiveChartApp {
    pub fn new(config: ChartConfig) -> Result<Self, ChartError> {
        let engine = Engine::new(&config)?;
        let settings = UiSettings::default();
        Ok(Self {
            axis_anim: AxisAnimator::new(config.visible_window as f64, config.y_range),
            config,
            engine,
            chart_style: chart_style(settings.theme),
            settings,
            views: vec![ChartView::default()],
            series_anim: SeriesAnimator::default(),
            log_messages: vec!["Live chart ready.".to_owned()],
            last_report: TickReport::default(),
        })
    }

    /// 在窗口创建时调用：同步初始主题和抗锯齿设置
    pub fn install(&mut self, ctx: &egui::Context) {
        set_window_palette(ctx, &window_palette(self.settings.theme), &self.chart_style);
        self.sync_settings(ctx);
    }

    fn log(&mut self, msg: &str) {
        self.log_messages.push(format!("> {}", msg));
        if self.log_messages.len() > 4 {
            self.log_messages.remove(0);
        }
    }

    fn view(&self) -> &ChartView {
        &self.views[0]
    }

    // 对应 "apply all settings"：只改动与当前值不同的部分
    fn sync_settings(&mut self, ctx: &egui::Context) {
        let change = apply_settings(&mut self.views, &self.settings);
        if let Some(palette) = change.palette {
            self.chart_style = chart_style(self.settings.theme);
            set_window_palette(ctx, &palette, &self.chart_style);
        }
        if change.antialiasing {
            let feathering = self.settings.antialiasing;
            ctx.memory_mut(|m| m.options.tessellation_options.feathering = feathering);
        }
        if change.animation && self.settings.animation.animates_axes() {
            self.axis_anim.restart();
        }
    }

    fn reset_view(&mut self) {
        self.engine.reset();
        if self.view().animation.animates_axes() {
            self.axis_anim.restart();
        }
        self.log("View reset");
    }

    fn save_snapshot(&self) -> anyhow::Result<PathBuf> {
        let style = PlotStyle {
            y_range: self.config.y_range,
            show_legend: self.view().legend.visible,
            ..Default::default()
        };
        let png = render_chart_png(self.engine.window(), &self.chart_style, &style)?;
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let path = PathBuf::from(format!("live_chart_{}.png", stamp));
        std::fs::write(&path, png)
            .with_context(|| format!("failed to write snapshot to {}", path.display()))?;
        Ok(path)
    }

    fn settings_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Theme:");
            egui::ComboBox::from_id_source("theme")
                .selected_text(self.settings.theme.label())
                .show_ui(ui, |ui| {
                    for theme in Theme::ALL {
                        ui.selectable_value(&mut self.settings.theme, theme, theme.label());
                    }
                });
            ui.label("Animation:");
            egui::ComboBox::from_id_source("animation")
                .selected_text(self.settings.animation.label())
                .show_ui(ui, |ui| {
                    for mode in AnimationMode::ALL {
                        ui.selectable_value(&mut self.settings.animation, mode, mode.label());
                    }
                });
            ui.label("Legend:");
            egui::ComboBox::from_id_source("legend")
                .selected_text(self.settings.legend.label())
                .show_ui(ui, |ui| {
                    for position in LegendPosition::ALL {
                        ui.selectable_value(&mut self.settings.legend, position, position.label());
                    }
                });
            ui.checkbox(&mut self.settings.antialiasing, "Anti-aliasing");

            ui.separator();
            let pause_txt = if self.engine.is_paused() { "▶ RESUME" } else { "⏸ PAUSE" };
            if ui.button(pause_txt).clicked() {
                let paused = !self.engine.is_paused();
                self.engine.set_paused(paused);
            }
            if ui.button("🔄 RESET").clicked() {
                self.reset_view();
            }
            if ui.button("💾 SAVE PNG").clicked() {
                match self.save_snapshot() {
                    Ok(path) => {
                        log::info!("snapshot written to {}", path.display());
                        self.log(&format!("Saved {}", path.display()));
                    }
                    Err(err) => {
                        log::error!("snapshot export failed: {err:#}");
                        self.log(&format!("Export failed: {err}"));
                    }
                }
            }
        });
    }
}

fn set_window_palette(ctx: &egui::Context, palette: &WindowPalette, style: &ChartStyle) {
    let mut visuals = if palette.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    visuals.panel_fill = palette.window;
    visuals.window_fill = palette.window;
    visuals.override_text_color = Some(palette.window_text);
    // egui_plot 用 extreme_bg_color 作为绘图区背景
    visuals.extreme_bg_color = style.background;
    ctx.set_visuals(visuals);
}

impl eframe::App for LiveChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // 1. 推进数据
        let report = self.engine.pump(Instant::now());
        if report.ticks > 0 {
            self.last_report = report;
        }

        // 2. 设置栏 (先画，这一帧的改动马上生效)
        egui::TopBottomPanel::top("settings").show(ctx, |ui| {
            ui.add_space(4.0);
            self.settings_bar(ui);
            ui.add_space(4.0);
        });
        self.sync_settings(ctx);

        // 3. 动画插值
        let animation = self.view().animation;
        self.series_anim.step(self.engine.window(), animation.animates_series());
        self.axis_anim.step(animation.animates_axes());

        // 4. 状态栏 + 图表
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let window = self.engine.window();
                ui.label(format!(
                    "Tick: {}  Channels: {}  {}",
                    window.counter(),
                    window.channel_count(),
                    if window.is_full() { "scrolling" } else { "filling" }
                ));
                ui.label(format!(
                    "Time used: {:.3} ms",
                    self.last_report.elapsed.as_secs_f64() * 1000.0
                ));
                if self.engine.is_paused() {
                    ui.label(egui::RichText::new("PAUSED").color(Color32::YELLOW).small());
                }
                if let Some(last) = self.log_messages.last() {
                    ui.separator();
                    ui.monospace(last);
                }
            });
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            visualizer::draw_chart(
                ui,
                self.engine.window(),
                self.view(),
                &self.chart_style,
                &self.series_anim,
                &self.axis_anim,
            );
        });

        // 5. 定时刷新
        if !self.series_anim.is_settled() || !self.axis_anim.is_settled() {
            ctx.request_repaint();
        } else if !self.engine.is_paused() {
            ctx.request_repaint_after(self.engine.tick_interval());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn installed_app(ctx: &egui::Context) -> LiveChartApp {
        let mut app = LiveChartApp::new(ChartConfig::default()).unwrap();
        app.install(ctx);
        app
    }

    fn feathering(ctx: &egui::Context) -> bool {
        ctx.memory(|m| m.options.tessellation_options.feathering)
    }

    #[test]
    fn install_applies_initial_settings() {
        let ctx = egui::Context::default();
        let app = installed_app(&ctx);
        assert!(feathering(&ctx));
        assert!(!ctx.style().visuals.dark_mode);
        assert!(!app.view().legend.visible);
        assert!(app.axis_anim.is_settled());
    }

    #[test]
    fn grid_axis_animation_restarts_axes() {
        let ctx = egui::Context::default();
        let mut app = installed_app(&ctx);
        app.settings.animation = AnimationMode::GridAxis;
        app.sync_settings(&ctx);
        assert_eq!(app.view().animation, AnimationMode::GridAxis);
        assert!(!app.axis_anim.is_settled());
    }

    #[test]
    fn unchecking_antialiasing_turns_off_feathering() {
        let ctx = egui::Context::default();
        let mut app = installed_app(&ctx);
        app.settings.antialiasing = false;
        app.sync_settings(&ctx);
        assert!(!feathering(&ctx));
        app.settings.antialiasing = true;
        app.sync_settings(&ctx);
        assert!(feathering(&ctx));
    }

    #[test]
    fn dark_theme_switches_visuals_and_chart_colours() {
        let ctx = egui::Context::default();
        let mut app = installed_app(&ctx);
        app.settings.theme = Theme::Dark;
        app.sync_settings(&ctx);
        let visuals = ctx.style().visuals.clone();
        assert!(visuals.dark_mode);
        assert_eq!(visuals.panel_fill, window_palette(Theme::Dark).window);
        assert_eq!(app.chart_style.background, chart_style(Theme::Dark).background);
        app.settings.theme = Theme::HighContrast;
        app.sync_settings(&ctx);
        assert!(!ctx.style().visuals.dark_mode);
    }

    #[test]
    fn reset_clears_window_and_replays_axis_animation() {
        let ctx = egui::Context::default();
        let mut app = installed_app(&ctx);
        app.settings.animation = AnimationMode::GridAxis;
        app.sync_settings(&ctx);
        for _ in 0..100 {
            app.axis_anim.step(true);
        }
        assert!(app.axis_anim.is_settled());
        app.engine.pump(Instant::now());
        assert!(app.engine.window().counter() > 0);
        app.reset_view();
        assert_eq!(app.engine.window().counter(), 0);
        assert!(!app.axis_anim.is_settled());
        assert_eq!(app.log_messages.last().map(String::as_str), Some("> View reset"));
    }
}
