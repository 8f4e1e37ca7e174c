//! Letter-scramble reveal for short labels.
//!
//! Each step re-rolls every letter past a progress cursor, then advances it
//! by a tenth of a character, so a word of `n` letters settles after `10 * n`
//! steps. Spaces are never scrambled.

#[cfg(test)]
#[path = "scramble_test.rs"]
mod scramble_test;

/// Letters used for the scrambled glyphs.
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Default total animation time.
pub const DEFAULT_DURATION_MS: u32 = 800;

const PROGRESS_STEP: f64 = 0.1;

/// Milliseconds between steps so that `len` letters settle in `duration_ms`.
///
/// Never returns zero, so the interval timer always makes progress.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn step_interval_ms(duration_ms: u32, len: usize) -> u32 {
    let steps = (len.max(1) as u64).saturating_mul(10);
    (u64::from(duration_ms) / steps).clamp(1, u64::from(u32::MAX)) as u32
}

/// Pick a scramble letter from a uniform sample in `[0, 1)`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn letter_from_unit(sample: f64) -> char {
    let last = ALPHABET.len() - 1;
    let idx = if sample.is_finite() { ((sample * ALPHABET.len() as f64) as usize).min(last) } else { 0 };
    char::from(ALPHABET[idx])
}

/// Scramble state for one label.
#[derive(Debug, Clone, PartialEq)]
pub struct Scramble {
    target: Vec<char>,
    display: Vec<char>,
    progress: f64,
    running: bool,
    skip_next_trigger: bool,
}

impl Scramble {
    /// `animate_on_load = false` makes the first [`Self::trigger`] a no-op,
    /// so the label first appears settled and only scrambles on hover.
    #[must_use]
    pub fn new(text: &str, animate_on_load: bool) -> Self {
        let target: Vec<char> = text.chars().collect();
        Self { display: target.clone(), target, progress: 0.0, running: false, skip_next_trigger: !animate_on_load }
    }

    /// (Re)start the animation from the beginning. Returns `true` if it
    /// started.
    pub fn trigger(&mut self) -> bool {
        if std::mem::take(&mut self.skip_next_trigger) {
            return false;
        }
        self.progress = 0.0;
        self.running = true;
        true
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.target.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }

    /// Advance one step, drawing scramble letters from `pick`.
    ///
    /// Letters at or before the progress cursor show their final
    /// value. Returns `true` while the animation is still running.
    #[allow(clippy::cast_precision_loss)]
    pub fn step(&mut self, mut pick: impl FnMut() -> char) -> bool {
        if !self.running {
            return false;
        }
        for (i, (shown, &actual)) in self.display.iter_mut().zip(&self.target).enumerate() {
            *shown = if actual == ' ' || (i as f64) <= self.progress { actual } else { pick() };
        }
        self.progress += PROGRESS_STEP;
        if self.progress >= self.target.len() as f64 {
            self.display.clone_from(&self.target);
            self.running = false;
        }
        self.running
    }

    /// Current glyph for each position.
    #[must_use]
    pub fn display(&self) -> &[char] {
        &self.display
    }

    #[must_use]
    pub fn display_text(&self) -> String {
        self.display.iter().collect()
    }
}
