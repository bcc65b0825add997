//! Time-based driver for a widget's progress value.
//!
//! The widget never animates itself. A host owns a [`ProgressAnimator`],
//! ticks it once per frame and writes the result with `set_progress`.

use std::f32::consts::PI;
use std::time::Duration;

/// Easing curve applied to the normalized time of one cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Interpolator {
    Linear,
    /// Starts and ends slowly: `cos((t + 1) * PI) / 2 + 0.5`.
    #[default]
    AccelerateDecelerate,
}

impl Interpolator {
    /// Maps `t` in `[0, 1]` to an eased fraction in `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Interpolator::Linear => t,
            Interpolator::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
        }
    }
}

/// How many extra cycles run after the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    /// Run `n` more cycles after the first (`Times(0)` runs once).
    Times(u32),
    Infinite,
}

/// Animates a float from `from` to `to`.
///
/// Each cycle restarts at `from`. The start delay applies once, before the
/// first cycle.
///
/// ```rust,ignore
/// let mut anim = ProgressAnimator::new();
/// loop {
///     let frame = clock.tick();
///     if let Some(p) = anim.tick(Duration::from_secs_f32(frame.dt)) {
///         label.set_progress(p);
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ProgressAnimator {
    from: f32,
    to: f32,
    start_delay: Duration,
    duration: Duration,
    repeat: Repeat,
    interpolator: Interpolator,
    elapsed: Duration,
    running: bool,
}

impl ProgressAnimator {
    /// `0 → 1` over 2 s after a 1 s delay, repeating forever.
    pub fn new() -> Self {
        Self {
            from: 0.0,
            to: 1.0,
            start_delay: Duration::from_millis(1000),
            duration: Duration::from_millis(2000),
            repeat: Repeat::Infinite,
            interpolator: Interpolator::default(),
            elapsed: Duration::ZERO,
            running: true,
        }
    }

    pub fn range(mut self, from: f32, to: f32) -> Self { self.from = from; self.to = to; self }
    pub fn start_delay(mut self, v: Duration) -> Self { self.start_delay = v; self }
    pub fn duration(mut self, v: Duration) -> Self { self.duration = v; self }
    pub fn repeat(mut self, v: Repeat) -> Self { self.repeat = v; self }
    pub fn interpolator(mut self, v: Interpolator) -> Self { self.interpolator = v; self }

    /// Stops the animation. Later ticks return `None`.
    pub fn cancel(&mut self) {
        if self.running {
            log::debug!("progress animator cancelled after {:?}", self.elapsed);
        }
        self.running = false;
    }

    /// Rewinds to the start (delay included) and resumes.
    pub fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
        self.running = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advances by `dt` and returns the value for this frame.
    ///
    /// `None` while the start delay runs and after the animation has
    /// finished or been cancelled. The tick that completes the last cycle
    /// returns `to` exactly.
    pub fn tick(&mut self, dt: Duration) -> Option<f32> {
        if !self.running {
            return None;
        }
        self.elapsed += dt;

        let active = self.elapsed.checked_sub(self.start_delay)?;

        if self.duration.is_zero() {
            self.running = false;
            return Some(self.to);
        }

        let cycle = (active.as_secs_f64() / self.duration.as_secs_f64()).floor();
        let finished = match self.repeat {
            Repeat::Infinite => false,
            Repeat::Times(n) => cycle > f64::from(n),
        };
        if finished {
            self.running = false;
            return Some(self.to);
        }

        let t = (active.as_secs_f64() / self.duration.as_secs_f64() - cycle) as f32;
        let eased = self.interpolator.apply(t);
        Some(self.from + (self.to - self.from) * eased)
    }
}

impl Default for ProgressAnimator {
    fn default() -> Self {
        Self::new()
    }
}
