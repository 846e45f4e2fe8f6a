use std::time::Instant;

/// Frame clock tracking per-frame delta and total elapsed time.
/// Delta drives the marker drift; elapsed drives the camera orbit.
#[derive(Debug)]
pub struct Clock {
    start: Instant,
    last_tick: Instant,
}

impl Clock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
        }
    }

    /// Get delta time since last tick and advance clock.
    /// Returns delta in seconds
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta
    }

    /// Seconds since the clock was created
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn clock_measures_delta() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        let delta = clock.tick();

        // Should be roughly 10ms = 0.01s
        assert!(delta >= 0.009 && delta <= 0.020);
    }

    #[test]
    fn elapsed_outlives_ticks() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(5));
        clock.tick();
        thread::sleep(Duration::from_millis(5));
        clock.tick();

        assert!(clock.elapsed() >= 0.009);
    }
}
