//! Character-by-character text reveal with a blinking caret.
//!
//! The component owns the timers; this module owns the arithmetic so it can
//! be unit-tested without a browser. One [`Typewriter::advance`] call per
//! timer tick reveals one more character.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

/// Reveal interval for the hero headline.
pub const HEADLINE_DELAY_MS: u32 = 100;
/// Reveal interval for the supporting line under the headline.
pub const SUPPORTING_DELAY_MS: u32 = 20;
/// Reveal interval for scroll-triggered section headings.
pub const HEADING_DELAY_MS: u32 = 150;
/// Caret blink half-period.
pub const CURSOR_BLINK_MS: u32 = 500;
/// Fraction of a scroll-triggered heading that must be on screen to start.
pub const SCROLL_TRIGGER_RATIO: f64 = 0.5;

/// When the caret is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaretPolicy {
    /// Blink forever, including after the text is complete.
    #[default]
    Always,
    /// Blink while typing; hide once complete.
    WhileTyping,
}

/// Revealed text split around a highlighted word.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Segments {
    pub before: String,
    /// Present only once the whole word has been typed.
    pub highlight: Option<String>,
    pub after: String,
}

/// Reveal state for one line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    chars: Vec<char>,
    revealed: usize,
    started: bool,
    caret_on: bool,
    policy: CaretPolicy,
}

impl Typewriter {
    /// A typewriter that starts revealing immediately.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { chars: text.chars().collect(), revealed: 0, started: true, caret_on: true, policy: CaretPolicy::Always }
    }

    /// A typewriter that waits for [`Self::start`], with the caret hidden
    /// once the text is complete.
    #[must_use]
    pub fn deferred(text: &str) -> Self {
        Self { started: false, policy: CaretPolicy::WhileTyping, ..Self::new(text) }
    }

    /// Begin revealing. Returns `true` only the first time.
    pub fn start(&mut self) -> bool {
        !std::mem::replace(&mut self.started, true)
    }

    /// Start when enough of the element is visible. Returns `true` if this
    /// call started it.
    pub fn start_if_visible(&mut self, visible_ratio: f64) -> bool {
        if visible_ratio >= SCROLL_TRIGGER_RATIO { self.start() } else { false }
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Reveal the next character. Returns `true` if one was revealed.
    pub fn advance(&mut self) -> bool {
        if !self.started || self.is_complete() {
            return false;
        }
        self.revealed += 1;
        true
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.revealed >= self.chars.len()
    }

    /// Number of characters revealed so far.
    #[must_use]
    pub fn revealed_len(&self) -> usize {
        self.revealed
    }

    /// The characters revealed so far.
    #[must_use]
    pub fn revealed_text(&self) -> String {
        self.chars[..self.revealed].iter().collect()
    }

    /// Flip the caret's blink phase.
    pub fn blink(&mut self) {
        self.caret_on = !self.caret_on;
    }

    /// Whether the caret should be drawn right now.
    #[must_use]
    pub fn caret_visible(&self) -> bool {
        match self.policy {
            CaretPolicy::Always => self.caret_on,
            CaretPolicy::WhileTyping => self.caret_on && !self.is_complete(),
        }
    }

    /// Split the revealed text around the first occurrence of `highlight`.
    ///
    /// Until the whole word is on screen, everything is in `before`.
    #[must_use]
    pub fn segments(&self, highlight: Option<&str>) -> Segments {
        let text = self.revealed_text();
        match highlight.filter(|word| !word.is_empty()).and_then(|word| {
            text.split_once(word).map(|(before, after)| (before.to_owned(), word.to_owned(), after.to_owned()))
        }) {
            Some((before, word, after)) => Segments { before, highlight: Some(word), after },
            None => Segments { before: text, highlight: None, after: String::new() },
        }
    }
}
