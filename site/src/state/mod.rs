//! Shared client-side state modules.
//!
//! Each model is a plain struct wrapped in an `RwSignal` and provided via
//! context by [`crate::app::App`].

pub mod nav;
