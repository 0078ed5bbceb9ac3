use crate::chart::palette::{window_palette, WindowPalette};
use crate::types::{AnimationMode, LegendAlignment, Theme, UiSettings};
/// Legend state as currently applied to a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegendState {
    pub visible: bool,
    pub alignment: LegendAlignment,
}
/// Settings a chart view currently has applied.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartView {
    pub theme: Theme,
    pub animation: AnimationMode,
    pub antialiasing: bool,
    pub legend: LegendState,
}
impl Default for ChartView {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            animation: AnimationMode::None,
            antialiasing: false,
            legend: LegendState {
                visible: true,
                alignment: LegendAlignment::Top,
            },
        }
    }
}
/// What a call to [`apply_settings`] actually changed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SettingsChange {
    /// Set when the theme changed; carries the recomputed window palette.
    pub palette: Option<WindowPalette>,
    pub antialiasing: bool,
    pub animation: bool,
    pub legend: bool,
}
impl SettingsChange {
    pub fn is_empty(&self) -> bool {
        self.palette.is_none() && !self.antialiasing && !self.animation && !self.legend
    }
}
/// Pushes the selected settings onto every view, touching only what differs.
///
/// Theme and animation are compared against the first view; antialiasing and legend per view.
pub fn apply_settings(views: &mut [ChartView], settings: &UiSettings) -> SettingsChange {
    let mut change = SettingsChange::default();
    let Some(first) = views.first() else {
        return change;
    };
    if first.theme != settings.theme {
        for view in views.iter_mut() {
            view.theme = settings.theme;
        }
        change.palette = Some(window_palette(settings.theme));
    }
    let first_animation = views[0].animation;
    for view in views.iter_mut() {
        if view.antialiasing != settings.antialiasing {
            view.antialiasing = settings.antialiasing;
            change.antialiasing = true;
        }
    }
    if first_animation != settings.animation {
        for view in views.iter_mut() {
            view.animation = settings.animation;
        }
        change.animation = true;
    }
    for view in views.iter_mut() {
        let wanted = match settings.legend.alignment() {
            None => LegendState {
                visible: false,
                ..view.legend
            },
            Some(alignment) => LegendState {
                visible: true,
                alignment,
            },
        };
        if view.legend != wanted {
            view.legend = wanted;
            change.legend = true;
        }
    }
    if !change.is_empty() {
        log::debug!("applied chart settings {settings:?}: {change:?}");
    }
    change
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LegendPosition;
    fn settings(theme: Theme, animation: AnimationMode, legend: LegendPosition) -> UiSettings {
        UiSettings {
            theme,
            animation,
            legend,
            antialiasing: true,
        }
    }
    #[test]
    fn second_application_is_a_no_op() {
        let mut views = vec![ChartView::default(), ChartView::default()];
        let s = settings(Theme::Dark, AnimationMode::All, LegendPosition::Left);
        let first = apply_settings(&mut views, &s);
        assert!(!first.is_empty());
        assert_eq!(first.palette, Some(window_palette(Theme::Dark)));
        let snapshot = views.clone();
        let second = apply_settings(&mut views, &s);
        assert!(second.is_empty());
        assert_eq!(views, snapshot);
    }
    #[test]
    fn theme_change_recomputes_palette_only_when_theme_differs() {
        let mut views = vec![ChartView::default()];
        let light = settings(Theme::Light, AnimationMode::None, LegendPosition::Top);
        let change = apply_settings(&mut views, &light);
        assert_eq!(change.palette, None);
        assert!(change.antialiasing);
        let icy = UiSettings {
            theme: Theme::BlueIcy,
            ..light
        };
        let change = apply_settings(&mut views, &icy);
        assert_eq!(change.palette, Some(window_palette(Theme::BlueIcy)));
        assert!(!change.antialiasing);
        assert_eq!(views[0].theme, Theme::BlueIcy);
    }
    #[test]
    fn hidden_legend_then_directional_reshows_it() {
        let mut views = vec![ChartView::default()];
        let hidden = settings(Theme::Light, AnimationMode::None, LegendPosition::Hidden);
        apply_settings(&mut views, &hidden);
        assert!(!views[0].legend.visible);
        let bottom = settings(Theme::Light, AnimationMode::None, LegendPosition::Bottom);
        let change = apply_settings(&mut views, &bottom);
        assert!(change.legend);
        assert_eq!(
            views[0].legend,
            LegendState {
                visible: true,
                alignment: LegendAlignment::Bottom
            }
        );
        let right = settings(Theme::Light, AnimationMode::None, LegendPosition::Right);
        apply_settings(&mut views, &right);
        assert!(views[0].legend.visible);
        assert_eq!(views[0].legend.alignment, LegendAlignment::Right);
    }
    #[test]
    fn animation_applies_to_every_view() {
        let mut views = vec![ChartView::default(); 3];
        let s = settings(Theme::Light, AnimationMode::Series, LegendPosition::Top);
        let change = apply_settings(&mut views, &s);
        assert!(change.animation);
        assert!(views.iter().all(|v| v.animation == AnimationMode::Series));
    }
    #[test]
    fn no_views_means_no_change() {
        let s = settings(Theme::Dark, AnimationMode::All, LegendPosition::Hidden);
        assert!(apply_settings(&mut [], &s).is_empty());
    }
}
