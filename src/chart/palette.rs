use eframe::egui::Color32;
use crate::types::Theme;
/// Window-level colours applied alongside a chart theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowPalette {
    pub window: Color32,
    pub window_text: Color32,
}
impl WindowPalette {
    /// Light text on a dark window needs egui's dark visuals.
    pub fn is_dark(&self) -> bool {
        luminance(self.window) < luminance(self.window_text)
    }
}
impl Default for WindowPalette {
    fn default() -> Self {
        Self {
            window: hex(0xf0f0f0),
            window_text: hex(0x404044),
        }
    }
}
const WINDOW_PALETTES: &[(Theme, u32, u32)] = &[
    (Theme::Light, 0xf0f0f0, 0x404044),
    (Theme::Dark, 0x121218, 0xd6d6d6),
    (Theme::BlueCerulean, 0x40434a, 0xd6d6d6),
    (Theme::BrownSand, 0x9e8965, 0x404044),
    (Theme::BlueNcs, 0x018bba, 0x404044),
    (Theme::HighContrast, 0xffab03, 0x181818),
    (Theme::BlueIcy, 0xcee7f0, 0x404044),
];
/// Looks the theme up in the window palette table, falling back to the light palette.
///
/// Every [`Theme`] has a row, so the fallback only applies to a theme added without one.
pub fn window_palette(theme: Theme) -> WindowPalette {
    WINDOW_PALETTES
        .iter()
        .find(|(t, _, _)| *t == theme)
        .map(|&(_, window, text)| WindowPalette {
            window: hex(window),
            window_text: hex(text),
        })
        .unwrap_or_default()
}
/// Plot area colours and the colours cycled through by the series.
#[derive(Clone, Debug)]
pub struct ChartStyle {
    pub background: Color32,
    pub grid: Color32,
    pub series: [Color32; 5],
}
impl ChartStyle {
    pub fn series_color(&self, channel: usize) -> Color32 {
        self.series[channel % self.series.len()]
    }
}
pub fn chart_style(theme: Theme) -> ChartStyle {
    let (background, grid, series) = match theme {
        Theme::Light => (
            0xffffff,
            0xe0e0e0,
            [0x209fdf, 0x99ca53, 0xf6a625, 0x6d5fd5, 0xbf593e],
        ),
        Theme::BlueCerulean => (
            0x056189,
            0x3a7fa0,
            [0xc7e85b, 0x1cb54f, 0x5cbf9b, 0x009fbf, 0xee7392],
        ),
        Theme::Dark => (
            0x2e303a,
            0x4a4c58,
            [0x38ad6b, 0x3c84a7, 0xeb8817, 0x7b7f8c, 0xbf593e],
        ),
        Theme::BrownSand => (
            0xf3ece0,
            0xd8ccb4,
            [0xb39b72, 0xb3b376, 0xc35660, 0x536780, 0x494345],
        ),
        Theme::BlueNcs => (
            0xffffff,
            0xd6e6f0,
            [0x1db0da, 0x1341a6, 0x88d41e, 0xff8e1a, 0x398ca3],
        ),
        Theme::HighContrast => (
            0xffffff,
            0xbebebe,
            [0x202020, 0x596a74, 0xffab03, 0x288243, 0xff5771],
        ),
        Theme::BlueIcy => (
            0xfafdfe,
            0xd4e8f0,
            [0x3daeda, 0x2685bf, 0x0c2673, 0x5f3dba, 0x2fa3b4],
        ),
    };
    ChartStyle {
        background: hex(background),
        grid: hex(grid),
        series: series.map(hex),
    }
}
pub fn hex(rgb: u32) -> Color32 {
    Color32::from_rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}
fn luminance(c: Color32) -> u32 {
    // Rec. 601 weights, integer form.
    (299 * c.r() as u32 + 587 * c.g() as u32 + 114 * c.b() as u32) / 1000
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn every_theme_has_a_window_palette() {
        assert_eq!(WINDOW_PALETTES.len(), Theme::ALL.len());
        for theme in Theme::ALL {
            assert!(WINDOW_PALETTES.iter().any(|(t, _, _)| *t == theme));
        }
    }
    #[test]
    fn palette_matches_table() {
        let dark = window_palette(Theme::Dark);
        assert_eq!(dark.window, Color32::from_rgb(0x12, 0x12, 0x18));
        assert_eq!(dark.window_text, Color32::from_rgb(0xd6, 0xd6, 0xd6));
        assert!(dark.is_dark());
        let contrast = window_palette(Theme::HighContrast);
        assert_eq!(contrast.window, hex(0xffab03));
        assert!(!contrast.is_dark());
        assert_eq!(window_palette(Theme::Light), WindowPalette::default());
    }
    #[test]
    fn series_colors_cycle() {
        let style = chart_style(Theme::BlueIcy);
        assert_eq!(style.series_color(0), style.series_color(5));
        assert_eq!(style.series_color(23), style.series[3]);
    }
}
