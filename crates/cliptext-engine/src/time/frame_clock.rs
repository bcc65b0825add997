use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Time elapsed since the clock started (or was reset), in seconds.
    pub elapsed: f32,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

#[derive(Debug, Clone)]
enum Source {
    Wall { last: Instant, dt_min: Duration, dt_max: Duration },
    Fixed { step: Duration },
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Wall-clock delta time is clamped to avoid pathological values when the
/// process is paused by a debugger or stalls.
#[derive(Debug, Clone)]
pub struct FrameClock {
    source: Source,
    elapsed: Duration,
    frame_index: u64,
}

impl FrameClock {
    /// Wall clock with default clamps (0.1 ms .. 250 ms).
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Wall clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            source: Source::Wall { last: Instant::now(), dt_min, dt_max },
            elapsed: Duration::ZERO,
            frame_index: 0,
        }
    }

    /// Deterministic clock: every tick advances by exactly `step`.
    pub fn fixed(step: Duration) -> Self {
        Self { source: Source::Fixed { step }, elapsed: Duration::ZERO, frame_index: 0 }
    }

    /// Fixed clock stepping at `fps` frames per second. `fps` of zero is
    /// treated as one.
    pub fn fixed_fps(fps: u32) -> Self {
        Self::fixed(Duration::from_secs_f64(1.0 / f64::from(fps.max(1))))
    }

    /// Resets the baseline and the elapsed time.
    pub fn reset(&mut self) {
        if let Source::Wall { last, .. } = &mut self.source {
            *last = Instant::now();
        }
        self.elapsed = Duration::ZERO;
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let dt = match &mut self.source {
            Source::Wall { last, dt_min, dt_max } => {
                let now = Instant::now();
                let dt = now.saturating_duration_since(*last).clamp(*dt_min, *dt_max);
                *last = now;
                dt
            }
            Source::Fixed { step } => *step,
        };

        self.elapsed += dt;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            elapsed: self.elapsed.as_secs_f32(),
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_steps_evenly() {
        let mut clock = FrameClock::fixed(Duration::from_millis(20));
        let a = clock.tick();
        let b = clock.tick();
        assert_eq!(a.frame_index, 0);
        assert_eq!(b.frame_index, 1);
        assert!((a.dt - 0.02).abs() < 1e-6);
        assert!((b.elapsed - 0.04).abs() < 1e-6);
    }

    #[test]
    fn wall_clock_dt_is_clamped() {
        let min = Duration::from_millis(5);
        let mut clock = FrameClock::with_clamps(min, Duration::from_millis(10));
        let t = clock.tick();
        assert!(t.dt >= min.as_secs_f32() - 1e-6);
        assert!(t.dt <= 0.010 + 1e-6);
    }

    #[test]
    fn reset_clears_elapsed() {
        let mut clock = FrameClock::fixed_fps(50);
        clock.tick();
        clock.reset();
        assert!((clock.tick().elapsed - 0.02).abs() < 1e-6);
    }
}
