// src/types.rs

// 图表主题
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    BlueCerulean,
    Dark,
    BrownSand,
    BlueNcs,
    HighContrast,
    BlueIcy,
}

impl Theme {
    pub const ALL: [Theme; 7] = [
        Theme::Light,
        Theme::BlueCerulean,
        Theme::Dark,
        Theme::BrownSand,
        Theme::BlueNcs,
        Theme::HighContrast,
        Theme::BlueIcy,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::BlueCerulean => "Blue Cerulean",
            Theme::Dark => "Dark",
            Theme::BrownSand => "Brown Sand",
            Theme::BlueNcs => "Blue NCS",
            Theme::HighContrast => "High Contrast",
            Theme::BlueIcy => "Blue Icy",
        }
    }
}

// 动画模式
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum AnimationMode {
    #[default]
    None,
    GridAxis,
    Series,
    All,
}

impl AnimationMode {
    pub const ALL: [AnimationMode; 4] = [
        AnimationMode::None,
        AnimationMode::GridAxis,
        AnimationMode::Series,
        AnimationMode::All,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AnimationMode::None => "No Animations",
            AnimationMode::GridAxis => "GridAxis Animations",
            AnimationMode::Series => "Series Animations",
            AnimationMode::All => "All Animations",
        }
    }

    pub fn animates_axes(self) -> bool {
        matches!(self, AnimationMode::GridAxis | AnimationMode::All)
    }

    pub fn animates_series(self) -> bool {
        matches!(self, AnimationMode::Series | AnimationMode::All)
    }
}

// 图例停靠方向
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum LegendAlignment {
    Top,
    Bottom,
    Left,
    Right,
}

// 图例下拉框的选项 (Hidden = "No Legend")
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum LegendPosition {
    #[default]
    Hidden,
    Top,
    Bottom,
    Left,
    Right,
}

impl LegendPosition {
    pub const ALL: [LegendPosition; 5] = [
        LegendPosition::Hidden,
        LegendPosition::Top,
        LegendPosition::Bottom,
        LegendPosition::Left,
        LegendPosition::Right,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LegendPosition::Hidden => "No Legend",
            LegendPosition::Top => "Legend Top",
            LegendPosition::Bottom => "Legend Bottom",
            LegendPosition::Left => "Legend Left",
            LegendPosition::Right => "Legend Right",
        }
    }

    pub fn alignment(self) -> Option<LegendAlignment> {
        match self {
            LegendPosition::Hidden => None,
            LegendPosition::Top => Some(LegendAlignment::Top),
            LegendPosition::Bottom => Some(LegendAlignment::Bottom),
            LegendPosition::Left => Some(LegendAlignment::Left),
            LegendPosition::Right => Some(LegendAlignment::Right),
        }
    }
}

// 用户在设置栏里选中的值
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct UiSettings {
    pub theme: Theme,
    pub animation: AnimationMode,
    pub legend: LegendPosition,
    pub antialiasing: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            animation: AnimationMode::default(),
            legend: LegendPosition::default(),
            antialiasing: true,
        }
    }
}
