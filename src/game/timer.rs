use std::time::Duration;

/// Fixed-rate tick source driven by the caller's clock (seconds).
///
/// Starting a running timer and stopping a stopped one are no-ops, so the
/// shell may call either at any time without double-arming the tick.
#[derive(Debug, Clone)]
pub struct TickTimer {
    interval: Duration,
    running: bool,
    last_fired: f64,
}

impl TickTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            running: false,
            last_fired: 0.0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns `false` if the timer was already running.
    pub fn start(&mut self, now: f64) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.last_fired = now;
        true
    }

    /// Returns `false` if the timer was already stopped.
    pub fn stop(&mut self) -> bool {
        let was_running = self.running;
        self.running = false;
        was_running
    }

    /// True once per elapsed interval while running. Missed intervals are
    /// dropped rather than replayed in a burst.
    pub fn poll(&mut self, now: f64) -> bool {
        if !self.running || now - self.last_fired < self.interval.as_secs_f64() {
            return false;
        }
        self.last_fired = now;
        true
    }
}
