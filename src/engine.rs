// src/engine.rs
use crate::chart::{ChartConfig, ChartError, SampleWindow};
use std::time::{Duration, Instant};

/// 把墙钟时间换算成应执行的 tick 数 (在 UI 线程上驱动，没有后台线程)
#[derive(Debug)]
pub struct TickClock {
    interval: Duration,
    max_catch_up: u32,
    last: Option<Instant>,
}

impl TickClock {
    pub fn new(interval: Duration, max_catch_up: u32) -> Self {
        Self { interval, max_catch_up: max_catch_up.max(1), last: None }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// 第一次调用立即给出一个 tick；之后按间隔累计，落后太多时丢弃多余的 tick
    pub fn due(&mut self, now: Instant) -> u32 {
        let Some(last) = self.last else {
            self.last = Some(now);
            return 1;
        };
        if self.interval.is_zero() {
            self.last = Some(now);
            return 1;
        }
        let elapsed = now.saturating_duration_since(last);
        let due = (elapsed.as_nanos() / self.interval.as_nanos()) as u64;
        if due == 0 {
            return 0;
        }
        if due > self.max_catch_up as u64 {
            // 卡顿后重新对齐，不追赶
            self.last = Some(now);
            return self.max_catch_up;
        }
        self.last = Some(last + self.interval * due as u32);
        due as u32
    }

    /// 暂停恢复后重新计时
    pub fn reanchor(&mut self) {
        self.last = None;
    }
}

// 一次 pump 的结果
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TickReport {
    pub ticks: u32,
    pub elapsed: Duration,
}

pub struct Engine {
    window: SampleWindow,
    clock: TickClock,
    paused: bool,
}

impl Engine {
    pub fn new(config: &ChartConfig) -> Result<Self, ChartError> {
        Ok(Self {
            window: SampleWindow::new(config)?,
            clock: TickClock::new(config.tick_interval, config.max_catch_up_ticks),
            paused: false,
        })
    }

    pub fn window(&self) -> &SampleWindow {
        &self.window
    }

    pub fn tick_interval(&self) -> Duration {
        self.clock.interval()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.paused == paused {
            return;
        }
        self.paused = paused;
        if !paused {
            self.clock.reanchor();
        }
        log::info!("sample stream {}", if paused { "paused" } else { "resumed" });
    }

    pub fn reset(&mut self) {
        self.window.reset();
        self.clock.reanchor();
        log::info!("sample window reset");
    }

    /// 执行到期的 tick，并记录耗时 (仅用于诊断)
    pub fn pump(&mut self, now: Instant) -> TickReport {
        if self.paused {
            return TickReport::default();
        }
        let ticks = self.clock.due(now);
        if ticks == 0 {
            return TickReport::default();
        }
        let start = Instant::now();
        for _ in 0..ticks {
            self.window.advance();
        }
        let elapsed = start.elapsed();
        log::debug!(
            "Time used: {:.3}s ({} tick(s), counter {})",
            elapsed.as_secs_f64(),
            ticks,
            self.window.counter()
        );
        TickReport { ticks, elapsed }
    }
}
