use std::io::Cursor;
use eframe::egui::Color32;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use plotters::prelude::LineSeries;
use plotters::prelude::*;
use crate::chart::buffer::SampleWindow;
use crate::chart::error::ChartError;
use crate::chart::palette::ChartStyle;
#[derive(Clone, Debug)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub y_range: (f64, f64),
    /// Axes with labels and grid. Labels and the legend need a system font.
    pub show_labels: bool,
    pub show_legend: bool,
}
impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 900,
            height: 540,
            y_range: (-1.0, 1.0),
            show_labels: true,
            show_legend: false,
        }
    }
}
/// Renders every channel of `window` into a PNG using the theme colours in `colors`.
pub fn render_chart_png(
    window: &SampleWindow,
    colors: &ChartStyle,
    style: &PlotStyle,
) -> Result<Vec<u8>, ChartError> {
    if window.channel_count() == 0 {
        return Err(ChartError::Plot("sample window has no channels".into()));
    }
    let background = rgb(colors.background);
    let grid = rgb(colors.grid);
    let mut buffer = vec![0u8; (style.width * style.height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (style.width, style.height))
            .into_drawing_area();
        root.fill(&background)?;
        let label_area = if style.show_labels { 40 } else { 0 };
        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .set_label_area_size(LabelAreaPosition::Left, label_area)
            .set_label_area_size(LabelAreaPosition::Bottom, label_area)
            .build_cartesian_2d(
                0f64..window.visible_window() as f64,
                style.y_range.0..style.y_range.1,
            )?;
        if style.show_labels {
            chart
                .configure_mesh()
                .light_line_style(&grid.mix(0.5))
                .bold_line_style(&grid)
                .draw()?;
        }
        for (idx, series) in window.iter().enumerate() {
            let color = rgb(colors.series_color(idx));
            let points = series.xs().iter().copied().zip(series.ys().iter().copied());
            let drawn = chart.draw_series(LineSeries::new(points, &color))?;
            if style.show_legend {
                drawn
                    .label(format!("Series{idx}"))
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
            }
        }
        if style.show_legend {
            chart
                .configure_series_labels()
                .border_style(&grid)
                .background_style(&background.mix(0.8))
                .draw()?;
        }
        root.present()?;
    }
    encode_png(&buffer, style.width, style.height)
}
fn rgb(color: Color32) -> RGBColor {
    RGBColor(color.r(), color.g(), color.b())
}
fn encode_png(buffer: &[u8], width: u32, height: u32) -> Result<Vec<u8>, ChartError> {
    let image = ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, buffer.to_vec())
        .ok_or_else(|| ChartError::Plot("failed to allocate image buffer".into()))?;
    let mut output = Vec::new();
    let dynamic = DynamicImage::ImageRgb8(image);
    dynamic.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)?;
    Ok(output)
}
