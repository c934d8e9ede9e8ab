use std::time::{Duration, Instant};

/// Display form of an exhausted clock.
pub const ZERO_TIME: &str = "0.00";

/// Fixed-duration countdown for a sprint. The clock never drives itself;
/// the session samples it with the current time on every tick.
#[derive(Clone, Copy, Debug)]
pub struct CountdownClock {
    duration: Duration,
    deadline: Option<Instant>,
    running: bool,
}

impl CountdownClock {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            deadline: None,
            running: false,
        }
    }

    pub fn start(&mut self, now: Instant) {
        self.deadline = Some(now + self.duration);
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Milliseconds left on the clock at `now`. Negative once the deadline
    /// has passed; the full duration before the first start.
    pub fn remaining_ms(&self, now: Instant) -> i64 {
        match self.deadline {
            Some(deadline) if now >= deadline => -((now - deadline).as_millis() as i64),
            Some(deadline) => (deadline - now).as_millis() as i64,
            None => self.duration.as_millis() as i64,
        }
    }

    /// Expiration is strict: a sample landing exactly on the deadline still
    /// counts as time left.
    pub fn is_expired(&self, now: Instant) -> bool {
        self.remaining_ms(now) < 0
    }
}

/// Render a remaining-time sample as a fixed two-decimal seconds string.
/// Expired samples clamp to "0.00" so the display never shows a negative
/// residual.
pub fn format_seconds(remaining_ms: i64) -> String {
    if remaining_ms < 0 {
        ZERO_TIME.to_string()
    } else {
        format!("{:.2}", remaining_ms as f64 / 1000.0)
    }
}
