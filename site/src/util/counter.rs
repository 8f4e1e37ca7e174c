//! Count-up animation for the technology stats.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

pub const DEFAULT_DURATION_MS: f64 = 2000.0;

/// Linear count from zero to `end` over `duration_ms`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Counter {
    pub end: u32,
    pub duration_ms: f64,
}

impl Counter {
    #[must_use]
    pub fn new(end: u32) -> Self {
        Self { end, duration_ms: DEFAULT_DURATION_MS }
    }

    /// Fraction of the animation elapsed, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if !elapsed_ms.is_finite() || elapsed_ms <= 0.0 {
            return 0.0;
        }
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).min(1.0)
    }

    /// Value to display after `elapsed_ms`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn value_at(&self, elapsed_ms: f64) -> u32 {
        let p = self.progress(elapsed_ms);
        if p >= 1.0 {
            return self.end;
        }
        (p * f64::from(self.end)).floor() as u32
    }

    #[must_use]
    pub fn is_done(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }
}
