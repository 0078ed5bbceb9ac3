use std::f64::consts::PI;
use crate::chart::{ChartConfig, ChartError};
/// Sample value for `channel` at logical offset `offset` of the tick starting at `tick`.
pub fn wave(tick: u64, channel: usize, phase_step: usize, offset: usize) -> f64 {
    let degrees = tick as f64 + (channel * phase_step) as f64 + offset as f64;
    (degrees * PI / 180.0).sin()
}
/// Fixed-capacity point sequence for one channel.
#[derive(Clone, Debug, Default)]
pub struct ChannelSeries {
    xs: Vec<f64>,
    ys: Vec<f64>,
}
impl ChannelSeries {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            xs: Vec::with_capacity(capacity),
            ys: Vec::with_capacity(capacity),
        }
    }
    pub fn len(&self) -> usize {
        self.ys.len()
    }
    pub fn is_empty(&self) -> bool {
        self.ys.is_empty()
    }
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }
    fn push(&mut self, x: f64, y: f64) {
        self.xs.push(x);
        self.ys.push(y);
    }
    /// Drops the oldest `count` y values and makes room for `count` new ones at the tail.
    /// x values stay where they are.
    fn shift_left(&mut self, count: usize) {
        let count = count.min(self.ys.len());
        self.ys.copy_within(count.., 0);
    }
    fn clear(&mut self) {
        self.xs.clear();
        self.ys.clear();
    }
}
/// Sliding window over every channel, advanced one tick at a time.
pub struct SampleWindow {
    series: Vec<ChannelSeries>,
    counter: u64,
    visible_window: usize,
    sample_rate: usize,
    phase_step: usize,
}
impl SampleWindow {
    pub fn new(config: &ChartConfig) -> Result<Self, ChartError> {
        config.validate()?;
        let series = (0..config.channels)
            .map(|_| ChannelSeries::with_capacity(config.visible_window))
            .collect();
        Ok(Self {
            series,
            counter: 0,
            visible_window: config.visible_window,
            sample_rate: config.sample_rate,
            phase_step: config.channel_phase_step,
        })
    }
    pub fn counter(&self) -> u64 {
        self.counter
    }
    pub fn channel_count(&self) -> usize {
        self.series.len()
    }
    pub fn visible_window(&self) -> usize {
        self.visible_window
    }
    pub fn is_full(&self) -> bool {
        self.counter >= self.visible_window as u64
    }
    pub fn iter(&self) -> impl Iterator<Item = &ChannelSeries> {
        self.series.iter()
    }
    /// Runs one tick: grow every channel while the window is filling, scroll it afterwards.
    pub fn advance(&mut self) {
        let tick = self.counter;
        let rate = self.sample_rate;
        let filling = !self.is_full();
        for (channel, series) in self.series.iter_mut().enumerate() {
            if filling {
                for i in 0..rate {
                    series.push((tick + i as u64) as f64, wave(tick, channel, self.phase_step, i));
                }
            } else {
                series.shift_left(rate);
                let tail = series.len().saturating_sub(rate);
                for (i, y) in series.ys[tail..].iter_mut().enumerate() {
                    *y = wave(tick, channel, self.phase_step, i);
                }
            }
        }
        self.counter += rate as u64;
    }
    pub fn reset(&mut self) {
        for series in &mut self.series {
            series.clear();
        }
        self.counter = 0;
    }
}
