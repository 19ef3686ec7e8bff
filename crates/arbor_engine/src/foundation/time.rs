//! Time management utilities

use std::time::Instant;

/// High-precision timer for frame timing.
///
/// Delta time is clamped to an optional maximum so that a long stall (debugger
/// break, window drag, system sleep) does not flow into the simulation as one
/// enormous step.
pub struct Timer {
    last_frame: Instant,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
    max_delta: Option<f32>,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer with unclamped delta time
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
            max_delta: None,
        }
    }

    /// Create a new timer that clamps delta time to `max_delta` seconds
    pub fn with_max_delta(max_delta: f32) -> Self {
        Self {
            max_delta: Some(max_delta),
            ..Self::new()
        }
    }

    /// Update the timer (should be called once per frame)
    pub fn update(&mut self) {
        let now = Instant::now();
        let mut elapsed = now.duration_since(self.last_frame).as_secs_f32();
        if let Some(max) = self.max_delta {
            if elapsed > max {
                elapsed = max;
            }
        }
        self.delta_time = elapsed;
        self.total_time += elapsed;
        self.last_frame = now;
        self.frame_count += 1;
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total elapsed time accumulated by [`Timer::update`]
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the average FPS since timer creation
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            self.frame_count as f32 / self.total_time
        } else {
            0.0
        }
    }
}
