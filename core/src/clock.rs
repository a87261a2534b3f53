use std::time::Instant;

/// Wall clock used to decide when the 60Hz timers tick
pub trait TimerClock {
    /// Seconds since the clock was created or last reset
    fn elapsed_seconds(&self) -> f64;

    fn reset(&mut self);
}

/// TimerClock measured with a monotonic `Instant`
pub struct InstantClock {
    started: Instant,
}

impl InstantClock {
    pub fn new() -> Self {
        InstantClock {
            started: Instant::now(),
        }
    }
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerClock for InstantClock {
    fn elapsed_seconds(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    fn reset(&mut self) {
        self.started = Instant::now();
    }
}
