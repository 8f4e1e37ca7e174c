//! UI components for the landing page.
//!
//! Components keep browser wiring behind `#[cfg(feature = "hydrate")]` and
//! delegate their arithmetic to `crate::util`, so SSR renders a static first
//! frame and hydration brings it to life.

pub mod animated_counter;
pub mod hero_section;
pub mod hyper_text;
pub mod interactive_grid;
pub mod navbar;
pub mod part_viewer;
pub mod ruler_carousel;
pub mod smooth_cursor;
pub mod story_carousel;
pub mod technology_section;
pub mod typewriter_text;
pub mod who_are_you_section;
