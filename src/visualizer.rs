// src/visualizer.rs
use crate::chart::{ChartStyle, ChartView, SampleWindow};
use crate::types::LegendAlignment;
use eframe::egui;
use egui_plot::{Corner, Legend, Line, Plot, PlotBounds, PlotPoints};

// 插值速度 (每帧)
const EASE_SPEED: f64 = 0.3;
// 小于这个差值就直接对齐
const SETTLE_EPSILON: f64 = 1e-4;

fn lerp(current: f64, target: f64, speed: f64) -> f64 {
    current + (target - current) * speed
}

/// Displayed y values per channel, eased toward the model when series animation is on.
#[derive(Default)]
pub struct SeriesAnimator {
    displayed: Vec<Vec<f64>>,
    settled: bool,
}

impl SeriesAnimator {
    pub fn step(&mut self, window: &SampleWindow, animate: bool) {
        self.displayed.resize_with(window.channel_count(), Vec::new);
        let mut settled = true;
        for (shown, series) in self.displayed.iter_mut().zip(window.iter()) {
            let target = series.ys();
            if !animate || shown.len() > target.len() {
                shown.clear();
                shown.extend_from_slice(target);
                continue;
            }
            for (value, &goal) in shown.iter_mut().zip(target) {
                let next = lerp(*value, goal, EASE_SPEED);
                *value = if (next - goal).abs() < SETTLE_EPSILON {
                    goal
                } else {
                    settled = false;
                    next
                };
            }
            // 新出现的点直接放到目标位置
            let known = shown.len();
            shown.extend_from_slice(&target[known..]);
        }
        self.settled = settled;
    }

    pub fn displayed(&self, channel: usize) -> &[f64] {
        self.displayed.get(channel).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }
}

/// Axis bounds, eased from a collapsed range toward the full view when grid/axis animation is on.
pub struct AxisAnimator {
    current: [f64; 4],
    target: [f64; 4],
}

impl AxisAnimator {
    pub fn new(x_max: f64, y_range: (f64, f64)) -> Self {
        let target = [0.0, x_max, y_range.0, y_range.1];
        Self { current: target, target }
    }

    /// 从中心附近的小范围重新展开
    pub fn restart(&mut self) {
        let [x0, x1, y0, y1] = self.target;
        let (cx, cy) = ((x0 + x1) / 2.0, (y0 + y1) / 2.0);
        let (hx, hy) = ((x1 - x0) * 0.05, (y1 - y0) * 0.05);
        self.current = [cx - hx, cx + hx, cy - hy, cy + hy];
    }

    pub fn step(&mut self, animate: bool) {
        if !animate {
            self.current = self.target;
            return;
        }
        for (value, goal) in self.current.iter_mut().zip(self.target) {
            let next = lerp(*value, goal, EASE_SPEED);
            *value = if (next - goal).abs() < SETTLE_EPSILON { goal } else { next };
        }
    }

    pub fn bounds(&self) -> PlotBounds {
        let [x0, x1, y0, y1] = self.current;
        PlotBounds::from_min_max([x0, y0], [x1, y1])
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }
}

pub fn legend_corner(alignment: LegendAlignment) -> Corner {
    match alignment {
        LegendAlignment::Top => Corner::RightTop,
        LegendAlignment::Right => Corner::RightBottom,
        LegendAlignment::Bottom => Corner::LeftBottom,
        LegendAlignment::Left => Corner::LeftTop,
    }
}

// 绘制 24 条曲线
pub fn draw_chart(
    ui: &mut egui::Ui,
    window: &SampleWindow,
    view: &ChartView,
    style: &ChartStyle,
    series: &SeriesAnimator,
    axes: &AxisAnimator,
) {
    let mut plot = Plot::new("live_chart")
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_grid(true);
    if view.legend.visible {
        plot = plot.legend(Legend::default().position(legend_corner(view.legend.alignment)));
    }
    plot.show(ui, |plot_ui| {
        plot_ui.set_plot_bounds(axes.bounds());
        for (idx, channel) in window.iter().enumerate() {
            let ys = series.displayed(idx);
            let points: Vec<[f64; 2]> = channel
                .xs()
                .iter()
                .zip(ys)
                .map(|(&x, &y)| [x, y])
                .collect();
            plot_ui.line(
                Line::new(PlotPoints::new(points))
                    .name(format!("Series{idx}"))
                    .color(style.series_color(idx))
                    .width(1.5),
            );
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartConfig;

    fn filled_window(ticks: usize) -> SampleWindow {
        let mut w = SampleWindow::new(&ChartConfig::default()).unwrap();
        for _ in 0..ticks {
            w.advance();
        }
        w
    }

    #[test]
    fn without_animation_display_matches_model() {
        let w = filled_window(170);
        let mut anim = SeriesAnimator::default();
        anim.step(&w, false);
        assert_eq!(anim.displayed(3), w.iter().nth(3).unwrap().ys());
        assert!(anim.is_settled());
    }

    #[test]
    fn series_animation_eases_toward_model() {
        let mut w = filled_window(160);
        let mut anim = SeriesAnimator::default();
        anim.step(&w, true);
        assert_eq!(anim.displayed(0), w.iter().nth(0).unwrap().ys());
        w.advance();
        anim.step(&w, true);
        let target = w.iter().nth(0).unwrap().ys();
        let shown = anim.displayed(0);
        assert_eq!(shown.len(), target.len());
        assert!(!anim.is_settled());
        for _ in 0..100 {
            anim.step(&w, true);
        }
        assert!(anim.is_settled());
        assert_eq!(anim.displayed(0), w.iter().nth(0).unwrap().ys());
    }

    #[test]
    fn axis_animation_expands_to_target() {
        let mut axes = AxisAnimator::new(800.0, (-1.0, 1.0));
        assert!(axes.is_settled());
        axes.restart();
        assert!(!axes.is_settled());
        axes.step(true);
        assert!(!axes.is_settled());
        for _ in 0..200 {
            axes.step(true);
        }
        assert!(axes.is_settled());
        axes.restart();
        axes.step(false);
        assert!(axes.is_settled());
    }

    #[test]
    fn legend_alignment_maps_to_corner() {
        assert!(matches!(legend_corner(LegendAlignment::Top), Corner::RightTop));
        assert!(matches!(legend_corner(LegendAlignment::Right), Corner::RightBottom));
        assert!(matches!(legend_corner(LegendAlignment::Bottom), Corner::LeftBottom));
        assert!(matches!(legend_corner(LegendAlignment::Left), Corner::LeftTop));
    }
}
