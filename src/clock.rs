use std::time::Duration;

// Upper bound on ticks fired for one frame after a stall
const MAX_CATCH_UP: u32 = 3;

/// Host-side periodic driver. It knows nothing about the game; the host
/// feeds it the engine's current interval every frame.
pub struct TickClock {
    interval: Duration,
    elapsed: Duration,
}

impl TickClock {
    pub fn new(interval: Duration) -> Self {
        Self { interval, elapsed: Duration::ZERO }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Re-arms the timer when the period changed. Returns true if it did.
    pub fn reschedule(&mut self, interval: Duration) -> bool {
        if interval == self.interval {
            return false;
        }
        self.interval = interval;
        self.elapsed = Duration::ZERO;
        true
    }

    /// Advances by one frame and returns how many ticks are due.
    pub fn update(&mut self, frame_time: f32) -> u32 {
        if self.interval.is_zero() {
            return 0;
        }
        self.elapsed += Duration::from_secs_f32(frame_time.max(0.0));

        let mut due = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            due += 1;
        }
        if due > MAX_CATCH_UP {
            self.elapsed = Duration::ZERO;
            due = MAX_CATCH_UP;
        }
        due
    }
}
