use std::{
    thread,
    time::{Duration, Instant},
};

/// Per-frame timing.
#[derive(Debug, Clone, Copy)]
pub struct FrameTime {
    /// Seconds since the previous tick.
    pub dt: f64,
    /// Seconds since the clock started, what the shaders see as `_Time`.
    pub elapsed: f32,
    pub frame_index: u64,
}

/// Monotonic clock started at program start.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
    frame_index: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            frame_index: 0,
        }
    }

    pub fn elapsed_secs(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Frames ticked so far.
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last).as_secs_f64();
        self.last = now;
        self.frame_index += 1;
        FrameTime {
            dt,
            elapsed: now.saturating_duration_since(self.start).as_secs_f32(),
            frame_index: self.frame_index,
        }
    }
}

/// Averaged frame timing over one reporting window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Seconds.
    pub avg_frametime: f64,
    pub fps: f64,
    pub frames: usize,
}

/// Upper bound on the frame times preallocated by [`FrameStats`].
pub const MAX_STATS_CAPACITY: usize = 1000;

/// Collects frame times and summarises them about once per `interval`.
pub struct FrameStats {
    frametime_collector: Vec<f64>,
    last_report: Instant,
    interval: Duration,
}

impl FrameStats {
    /// `capacity` is a hint, usually the FPS cap. It is clamped to
    /// [`MAX_STATS_CAPACITY`].
    pub fn new(capacity: usize) -> Self {
        Self::with_interval(capacity, Duration::from_secs(1))
    }

    pub fn with_interval(capacity: usize, interval: Duration) -> Self {
        Self {
            frametime_collector: Vec::with_capacity(capacity.min(MAX_STATS_CAPACITY)),
            last_report: Instant::now(),
            interval,
        }
    }

    /// Frame times the collector holds without reallocating.
    pub fn capacity(&self) -> usize {
        self.frametime_collector.capacity()
    }

    pub fn push(&mut self, frametime: f64) {
        self.frametime_collector.push(frametime)
    }

    /// Returns a report if `interval` has passed since the last one and any
    /// frames were collected. Collected frames are cleared on report.
    pub fn report(&mut self, now: Instant) -> Option<FrameReport> {
        if now.saturating_duration_since(self.last_report) < self.interval
            || self.frametime_collector.is_empty()
        {
            return None;
        }
        // can't reduce since we're keeping this Vec around
        let total_time: f64 = self.frametime_collector.iter().sum();
        let frames = self.frametime_collector.len();
        let avg_frametime = total_time / frames as f64;

        self.frametime_collector.clear();
        self.last_report = now;

        Some(FrameReport {
            avg_frametime,
            fps: if avg_frametime > 0. {
                1. / avg_frametime
            } else {
                f64::INFINITY
            },
            frames,
        })
    }
}

/// Remaining part of `budget` after `spent`, zero when over budget.
pub fn remaining_budget(budget: Duration, spent: Duration) -> Duration {
    budget.checked_sub(spent).unwrap_or(Duration::ZERO)
}

/// Sleep out the rest of the frame started at `loop_start`.
///
/// Note: this is SOFT, `thread::sleep` may oversleep.
pub fn soft_cap_sleep(budget: Duration, loop_start: Instant) {
    let remaining = remaining_budget(budget, loop_start.elapsed());
    if !remaining.is_zero() {
        thread::sleep(remaining);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_counts_frames() {
        let mut clock = FrameClock::new();
        let a = clock.tick();
        let b = clock.tick();
        assert_eq!(a.frame_index, 1);
        assert_eq!(b.frame_index, 2);
        assert_eq!(clock.frame_index(), 2);
        assert!(b.elapsed >= a.elapsed);
        assert!(b.dt >= 0.0);
    }

    #[test]
    fn no_report_before_interval() {
        let mut stats = FrameStats::with_interval(4, Duration::from_secs(3600));
        stats.push(0.016);
        assert_eq!(stats.report(Instant::now()), None);
    }

    #[test]
    fn report_averages_and_clears() {
        let mut stats = FrameStats::with_interval(4, Duration::ZERO);
        stats.push(0.010);
        stats.push(0.030);
        let report = stats.report(Instant::now()).unwrap();
        assert_eq!(report.frames, 2);
        assert!((report.avg_frametime - 0.020).abs() < 1e-12);
        assert!((report.fps - 50.0).abs() < 1e-9);
        assert_eq!(stats.report(Instant::now()), None);
    }

    #[test]
    fn huge_capacity_hint_is_clamped() {
        let mut stats = FrameStats::new(usize::MAX);
        assert!(stats.capacity() >= MAX_STATS_CAPACITY);
        assert!(stats.capacity() < 2 * MAX_STATS_CAPACITY);
        stats.push(0.001);
        assert_eq!(FrameStats::new(0).capacity(), 0);
    }

    #[test]
    fn budget_saturates() {
        let budget = Duration::from_millis(10);
        assert_eq!(
            remaining_budget(budget, Duration::from_millis(4)),
            Duration::from_millis(6)
        );
        assert_eq!(
            remaining_budget(budget, Duration::from_millis(40)),
            Duration::ZERO
        );
    }
}
