//! Scroll-linked progress for sticky horizontal sections.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// How far the story strip travels across a full scroll, in percent of its
/// own width. The strip holds the story list twice, so half its width is
/// one full pass.
pub const STRIP_TRAVEL_PERCENT: f64 = 50.0;

/// Progress through a tall section whose content sticks to the viewport.
///
/// `0.0` when the section's top reaches the viewport top, `1.0` when its
/// bottom reaches the viewport bottom. `top` and `height` come from
/// `getBoundingClientRect`.
#[must_use]
pub fn section_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let scrollable = height - viewport_height;
    if !top.is_finite() || !scrollable.is_finite() || scrollable <= 0.0 {
        return if top.is_finite() && top < 0.0 { 1.0 } else { 0.0 };
    }
    (-top / scrollable).clamp(0.0, 1.0)
}

/// Horizontal translation of the story strip, in percent.
#[must_use]
pub fn strip_translate_percent(progress: f64) -> f64 {
    -STRIP_TRAVEL_PERCENT * progress.clamp(0.0, 1.0)
}

/// Fraction of an element currently inside the viewport, in `[0, 1]`.
#[must_use]
pub fn visible_ratio(top: f64, height: f64, viewport_height: f64) -> f64 {
    if height.is_nan() || height <= 0.0 || !viewport_height.is_finite() {
        return 0.0;
    }
    let visible = (top + height).min(viewport_height) - top.max(0.0);
    (visible / height).clamp(0.0, 1.0)
}
