use std::time::Duration;

/// Nominal per-frame increment (16 ms).
pub const DEFAULT_STEP: Duration = Duration::from_millis(16);

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Fixed increment applied by this tick.
    pub step: Duration,

    /// Accumulated time after this tick.
    pub elapsed: Duration,

    /// Zero-based index of the frame this tick belongs to.
    pub frame_index: u64,
}

impl FrameTime {
    /// Accumulated time in seconds. This is also the rotation angle in radians.
    #[inline]
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }
}

/// Fixed-step clock producing `FrameTime` snapshots.
///
/// Elapsed time is derived from the tick count (`ticks * step`) instead of
/// summing floats, so N ticks always accumulate exactly N×step.
#[derive(Debug, Clone)]
pub struct StepClock {
    step: Duration,
    ticks: u64,
}

impl StepClock {
    /// Creates a clock with the default 16 ms step.
    pub fn new() -> Self {
        Self::with_step(DEFAULT_STEP)
    }

    /// Creates a clock with a custom step.
    pub fn with_step(step: Duration) -> Self {
        debug_assert!(!step.is_zero(), "a zero step never advances the rotation");
        Self { step, ticks: 0 }
    }

    #[inline]
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Number of ticks taken so far.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Accumulated time without advancing.
    pub fn elapsed(&self) -> Duration {
        scaled(self.step, self.ticks)
    }

    /// Advances the clock by one step and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let frame_index = self.ticks;
        self.ticks = self.ticks.saturating_add(1);

        FrameTime {
            step: self.step,
            elapsed: self.elapsed(),
            frame_index,
        }
    }
}

impl Default for StepClock {
    fn default() -> Self {
        Self::new()
    }
}

fn scaled(step: Duration, ticks: u64) -> Duration {
    // `Duration * u32` only; go through nanoseconds for the full u64 range.
    let nanos = step.as_nanos().saturating_mul(u128::from(ticks));
    let secs = (nanos / 1_000_000_000).min(u128::from(u64::MAX)) as u64;
    Duration::new(secs, (nanos % 1_000_000_000) as u32)
}
