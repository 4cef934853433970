//! Frame pacing
//!
//! Blocks until the next frame boundary and reports how long the frame took.

use std::time::{Duration, Instant};

/// Longest frame delta handed to the simulation, in seconds
pub const MAX_FRAME_DT: f32 = 0.1;

/// Fixed-rate frame clock
#[derive(Debug)]
pub struct FrameClock {
    frame: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs_f64(1.0 / fps.max(1) as f64),
            last: Instant::now(),
        }
    }

    /// Sleep out the rest of the frame and return the elapsed time in seconds
    pub fn tick(&mut self) -> f32 {
        let target = self.last + self.frame;
        let now = Instant::now();
        if target > now {
            std::thread::sleep(target - now);
        }

        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt.min(MAX_FRAME_DT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_waits_for_frame() {
        let mut clock = FrameClock::new(100);
        let dt = clock.tick();
        assert!(dt >= 0.0099, "dt = {}", dt);
        assert!(dt <= MAX_FRAME_DT);
    }
}
