use std::time::{Duration, Instant};

/// Paces the game at a fixed number of ticks per second.
#[derive(Debug)]
pub struct Clock {
    tick_rate: Duration,
    last_tick: Instant,
}

impl Clock {
    pub fn new(ticks_per_second: u32) -> Self {
        Clock::with_tick_rate(Duration::from_secs(1) / ticks_per_second.max(1))
    }

    pub fn with_tick_rate(tick_rate: Duration) -> Self {
        Clock {
            tick_rate,
            last_tick: Instant::now(),
        }
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// How long input may be waited for before the next tick is late.
    pub fn time_until_tick(&self) -> Duration {
        self.tick_rate.saturating_sub(self.last_tick.elapsed())
    }

    /// Returns true once per elapsed tick period and starts the next one.
    pub fn tick_due(&mut self) -> bool {
        if self.last_tick.elapsed() >= self.tick_rate {
            self.last_tick = Instant::now();
            true
        } else {
            false
        }
    }
}
