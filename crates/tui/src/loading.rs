//! Time-driven view state: the simulated loading delay and the counting
//! number animation. Both take `now` explicitly so ticks are testable.

use std::time::{Duration, Instant};

/// Delay before the gallery's simulated load completes.
pub const SIMULATED_LOAD_DELAY: Duration = Duration::from_secs(2);

/// Flag that starts `true` and drops to `false` once, after a fixed delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingGate {
    loading: bool,
    deadline: Option<Instant>,
}

impl LoadingGate {
    pub fn new(now: Instant, delay: Duration) -> Self {
        Self {
            loading: true,
            deadline: Some(now + delay),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether a transition is still scheduled.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` on the tick that completes the load.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.loading = false;
                true
            }
            _ => false,
        }
    }

    /// Manual override from the "Toggle Loading" button. Cancels the pending
    /// transition so the timer never overrides the user's choice.
    pub fn toggle(&mut self) {
        self.deadline = None;
        self.loading = !self.loading;
    }
}

/// Number that counts up from zero to a target in fixed steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountingNumber {
    target: f64,
    started_at: Instant,
    duration: Duration,
    steps: u32,
}

impl CountingNumber {
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(1000);
    pub const DEFAULT_STEPS: u32 = 60;

    pub fn new(target: f64, started_at: Instant) -> Self {
        Self {
            target,
            started_at,
            duration: Self::DEFAULT_DURATION,
            steps: Self::DEFAULT_STEPS,
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Value shown at `now`: `target / steps` per elapsed step, clamped.
    pub fn value_at(&self, now: Instant) -> f64 {
        if self.steps == 0 || self.duration.is_zero() {
            return self.target;
        }
        let step_len = self.duration.as_secs_f64() / f64::from(self.steps);
        let elapsed = now.saturating_duration_since(self.started_at).as_secs_f64();
        let step = (elapsed / step_len).floor().min(f64::from(self.steps));
        let value = self.target / f64::from(self.steps) * step;
        if self.target >= 0.0 { value.min(self.target) } else { value.max(self.target) }
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }
}
