// src/chart/mod.rs
pub mod buffer;
pub mod config;
pub mod error;
pub mod palette;
pub mod plot;
pub mod settings;
pub use buffer::SampleWindow;
pub use config::ChartConfig;
pub use error::ChartError;
pub use palette::{chart_style, window_palette, ChartStyle, WindowPalette};
pub use plot::{render_chart_png, PlotStyle};
pub use settings::{apply_settings, ChartView};
