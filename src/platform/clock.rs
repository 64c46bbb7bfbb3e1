//! Fixed-rate frame pacing

use std::thread;
use std::time::{Duration, Instant};

/// Fixed-rate frame governor
#[derive(Debug)]
pub struct FrameClock {
    budget: Duration,
    frame_start: Instant,
    frames: u64,
}

impl FrameClock {
    /// Clock for `hz` frames per second (clamped to at least 1)
    pub fn new(hz: u32) -> Self {
        Self {
            budget: Duration::from_secs_f64(1.0 / f64::from(hz.max(1))),
            frame_start: Instant::now(),
            frames: 0,
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Sleep out whatever is left of the current frame, then start the next.
    /// Returns how long the finished frame took in total.
    pub fn wait(&mut self) -> Duration {
        let elapsed = self.frame_start.elapsed();
        if let Some(remaining) = self.budget.checked_sub(elapsed) {
            thread::sleep(remaining);
        } else {
            log::trace!("Frame overran budget by {:?}", elapsed - self.budget);
        }
        let frame_time = self.frame_start.elapsed();
        self.frame_start = Instant::now();
        self.frames += 1;
        frame_time
    }
}
