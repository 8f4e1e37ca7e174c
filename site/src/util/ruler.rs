//! Index arithmetic for the ruler carousel.
//!
//! The item list is rendered three times back to back. The active index
//! lives in the middle copy; stepping into an outer copy is followed by an
//! instant jump back to the equivalent middle index, which makes the strip
//! appear endless.

#[cfg(test)]
#[path = "ruler_test.rs"]
mod ruler_test;

/// Number of copies of the item list in the strip.
pub const COPIES: usize = 3;
/// Horizontal distance between item centres.
pub const ITEM_PITCH_PX: f64 = 200.0;
/// Slot the active item is centred on.
pub const CENTER_SLOT: f64 = 2.0;
pub const AUTO_ROTATE_MS: u32 = 3000;
/// Tick marks drawn along each ruler edge.
pub const RULER_TICKS: usize = 100;

/// Which way an arrow key moves the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Map a `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulerCarousel {
    len: usize,
    active: usize,
    resetting: bool,
}

impl RulerCarousel {
    /// Start on the first item of the middle copy.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len, active: len, resetting: false }
    }

    /// Items in one copy.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Slots in the rendered strip.
    #[must_use]
    pub fn strip_len(&self) -> usize {
        self.len * COPIES
    }

    /// Active slot in the rendered strip.
    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    /// Active item in the original list.
    #[must_use]
    pub fn original_index(&self) -> usize {
        if self.len == 0 { 0 } else { self.active % self.len }
    }

    /// One-based page number, `0` when empty.
    #[must_use]
    pub fn current_page(&self) -> usize {
        if self.len == 0 { 0 } else { self.original_index() + 1 }
    }

    /// Whether the next position change should skip its transition.
    #[must_use]
    pub fn is_resetting(&self) -> bool {
        self.resetting
    }

    /// Jump to the copy of `slot`'s item closest to the current position.
    /// Ignored while re-centering. Returns `true` if the active slot changed.
    pub fn select(&mut self, slot: usize) -> bool {
        if self.resetting || self.len == 0 {
            return false;
        }
        let original = slot % self.len;
        let closest = (0..COPIES)
            .map(|copy| original + copy * self.len)
            .min_by_key(|&candidate| candidate.abs_diff(self.active))
            .unwrap_or(self.active);
        let changed = closest != self.active;
        self.active = closest;
        changed
    }

    /// Step by one. User steps are ignored while re-centering.
    pub fn step(&mut self, direction: Direction) -> bool {
        if self.resetting {
            return false;
        }
        self.shift(direction)
    }

    /// Step forward from the auto-rotate timer, even mid re-center.
    pub fn auto_advance(&mut self) -> bool {
        self.shift(Direction::Next)
    }

    fn shift(&mut self, direction: Direction) -> bool {
        if self.len == 0 {
            return false;
        }
        let last = self.strip_len() - 1;
        let next = match direction {
            Direction::Previous => self.active.saturating_sub(1),
            Direction::Next => (self.active + 1).min(last),
        };
        let changed = next != self.active;
        self.active = next;
        changed
    }

    /// Whether the active slot has left the middle copy.
    #[must_use]
    pub fn needs_recenter(&self) -> bool {
        self.len > 0 && (self.active < self.len || self.active >= self.len * 2)
    }

    /// Mark a re-center as pending. Returns `true` if the host should
    /// schedule [`Self::finish_recenter`].
    pub fn begin_recenter(&mut self) -> bool {
        if self.resetting || !self.needs_recenter() {
            return false;
        }
        self.resetting = true;
        true
    }

    /// Move to the equivalent slot in the middle copy.
    pub fn finish_recenter(&mut self) {
        if self.len > 0 {
            self.active = self.len + self.active % self.len;
        }
        self.resetting = false;
    }

    /// Strip translation that centres the active item.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn target_x(&self) -> f64 {
        -ITEM_PITCH_PX + (CENTER_SLOT - self.original_index() as f64) * ITEM_PITCH_PX
    }
}

/// Visual weight of one ruler tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    Minor,
    Major,
    Center,
}

impl TickKind {
    #[must_use]
    pub fn of(index: usize, total: usize) -> Self {
        if index == total / 2 {
            Self::Center
        } else if index % 5 == 0 {
            Self::Major
        } else {
            Self::Minor
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Minor => "ruler-tick",
            Self::Major => "ruler-tick ruler-tick--major",
            Self::Center => "ruler-tick ruler-tick--center",
        }
    }
}

/// Left offset of tick `index`, as a percentage of the ruler width.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn tick_offset_percent(index: usize, total: usize) -> f64 {
    if total < 2 {
        return 0.0;
    }
    index as f64 * 100.0 / (total - 1) as f64
}
