use std::time::Duration;
use crate::chart::ChartError;
/// Fixed parameters of the live chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartConfig {
    pub channels: usize,
    /// Number of x-axis ticks kept on screen.
    pub visible_window: usize,
    /// New points per channel per tick.
    pub sample_rate: usize,
    /// Phase offset between neighbouring channels, in degrees.
    pub channel_phase_step: usize,
    pub tick_interval: Duration,
    /// Upper bound on ticks run in a single frame after a stall.
    pub max_catch_up_ticks: u32,
    pub y_range: (f64, f64),
    pub window_size: [f32; 2],
}
impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            channels: 24,
            visible_window: 800,
            sample_rate: 5,
            channel_phase_step: 5,
            tick_interval: Duration::from_millis(25),
            max_catch_up_ticks: 8,
            y_range: (-1.0, 1.0),
            window_size: [900.0, 600.0],
        }
    }
}
impl ChartConfig {
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.sample_rate == 0 {
            return Err(ChartError::InvalidSampleRate);
        }
        if self.channels == 0 {
            return Err(ChartError::NoChannels);
        }
        if self.visible_window < self.sample_rate || self.visible_window % self.sample_rate != 0 {
            return Err(ChartError::WindowNotAligned {
                window: self.visible_window,
                sample_rate: self.sample_rate,
            });
        }
        Ok(())
    }
    /// Ticks needed to fill the visible window from an empty chart.
    pub fn ticks_to_fill(&self) -> usize {
        self.visible_window / self.sample_rate.max(1)
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn default_config_is_valid() {
        let config = ChartConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.ticks_to_fill(), 160);
    }
    #[test]
    fn rejects_zero_sample_rate() {
        let config = ChartConfig {
            sample_rate: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ChartError::InvalidSampleRate)));
    }
    #[test]
    fn rejects_empty_channel_list() {
        let config = ChartConfig {
            channels: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ChartError::NoChannels)));
    }
    #[test]
    fn rejects_window_not_multiple_of_rate() {
        let config = ChartConfig {
            visible_window: 802,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ChartError::WindowNotAligned {
                window: 802,
                sample_rate: 5
            })
        ));
        let tiny = ChartConfig {
            visible_window: 3,
            ..Default::default()
        };
        assert!(tiny.validate().is_err());
    }
}
