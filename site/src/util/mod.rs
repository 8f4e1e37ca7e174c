//! Animation arithmetic backing the landing-page components.
//!
//! Each component keeps its math in one of these modules so it can be unit
//! tested natively; only `browser` touches the DOM.

pub mod browser;
pub mod counter;
pub mod ruler;
pub mod scramble;
pub mod scroll;
pub mod spring;
pub mod typewriter;
