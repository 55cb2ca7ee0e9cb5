use std::time::{Duration, Instant};

/// Fixed-rate frame throttle.
///
/// `tick` sleeps out whatever is left of the current frame budget, so the
/// loop runs at most `fps` times per second. There is no catch-up: a slow
/// frame simply makes the game run slower for that frame.
pub struct FrameClock {
    frame_duration: Duration,
    frame_start: Instant,
    /// Measured rate, refreshed once per second
    fps: u32,
    frames_this_second: u32,
    second_start: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        let now = Instant::now();
        Self {
            frame_duration: Self::frame_duration_for(fps),
            frame_start: now,
            fps: 0,
            frames_this_second: 0,
            second_start: now,
        }
    }

    pub fn frame_duration_for(fps: u32) -> Duration {
        Duration::from_secs(1) / fps.max(1)
    }

    /// Time left in the current frame budget
    pub fn remaining(&self) -> Duration {
        self.frame_duration
            .saturating_sub(self.frame_start.elapsed())
    }

    /// Block until the current frame's budget is used up, then start the next frame.
    pub fn tick(&mut self) {
        let remaining = self.remaining();
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }

        let now = Instant::now();
        self.frame_start = now;
        self.frames_this_second += 1;
        if now.duration_since(self.second_start) >= Duration::from_secs(1) {
            self.fps = self.frames_this_second;
            self.frames_this_second = 0;
            self.second_start = now;
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}
