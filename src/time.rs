//! Frame counting and FPS measurement.
//!
//! ```ignore
//! let mut clock = FrameClock::new();
//!
//! // Once per rendered frame:
//! if let Some(fps) = clock.tick() {
//!     log::debug!("{:.1} fps", fps);
//! }
//! ```

use std::time::{Duration, Instant};

/// How often a fresh FPS value is reported.
pub const DEFAULT_REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// Counts frames and periodically reports the frame rate.
#[derive(Debug)]
pub struct FrameClock {
    /// When the clock was created.
    start: Instant,
    /// Total frames since start.
    frame_count: u64,
    /// Last measured FPS.
    fps: f32,
    /// Frame count at the last measurement.
    report_frame_count: u64,
    /// Time of the last measurement.
    report_time: Instant,
    report_interval: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_REPORT_INTERVAL)
    }

    /// Clock that measures FPS every `report_interval`.
    pub fn with_interval(report_interval: Duration) -> Self {
        let now = Instant::now();
        Self {
            start: now,
            frame_count: 0,
            fps: 0.0,
            report_frame_count: 0,
            report_time: now,
            report_interval,
        }
    }

    /// Count one frame.
    ///
    /// Returns the new FPS when a measurement interval has just completed.
    pub fn tick(&mut self) -> Option<f32> {
        self.frame_count += 1;

        let now = Instant::now();
        let since = now.duration_since(self.report_time);
        if since < self.report_interval {
            return None;
        }

        let frames = self.frame_count - self.report_frame_count;
        self.fps = frames as f32 / since.as_secs_f32();
        self.report_frame_count = self.frame_count;
        self.report_time = now;
        Some(self.fps)
    }

    /// Total frames since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Last measured frames per second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Seconds since the clock was created.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
