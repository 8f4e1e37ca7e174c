//! Navbar chrome state: compact style after scrolling, mobile menu.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Scroll offset past which the navbar switches to its compact style.
pub const SCROLLED_THRESHOLD_PX: f64 = 24.0;

/// Call-to-action labels shown in the navbar.
pub const CTA_LABELS: [&str; 2] = ["GET QUOTE", "JOIN KWIK"];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    /// Page has scrolled past [`SCROLLED_THRESHOLD_PX`].
    pub scrolled: bool,
    /// Mobile menu is expanded.
    pub menu_open: bool,
}

impl NavState {
    /// Update `scrolled` from the window's vertical scroll offset. Returns
    /// `true` if it flipped.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > SCROLLED_THRESHOLD_PX;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Class list for the `<nav>` element.
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.scrolled { "navbar navbar--scrolled" } else { "navbar" }
    }
}
