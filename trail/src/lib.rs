//! Pointer-trail engine for the interactive background grid.
//!
//! This crate is compiled to WebAssembly and runs in the browser behind the
//! landing page. It owns the intensity grid that sits under the page content:
//! tiling the viewport into cells, stamping the cell under the pointer to full
//! intensity, decaying every cell once per animation frame, and painting the
//! result. The host Leptos component is responsible only for wiring window
//! events to the engine and keeping the [`frame_loop::FrameLoop`] alive while
//! it is mounted.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::TrailEngine`]: pointer input, ticks, resize |
//! | [`grid`] | Intensity buffer with stamp and decay rules |
//! | [`layout`] | Viewport tiling and pointer-to-cell mapping |
//! | [`geom`] | Points, sizes and rectangles in CSS pixels |
//! | [`config`] | Validated tuning knobs ([`config::TrailConfig`]) |
//! | [`render`] | Per-cell opacity model, independent of any surface |
//! | [`draw`] | Paints a frame onto a `CanvasRenderingContext2d` |
//! | [`frame_loop`] | Per-instance `requestAnimationFrame` loop handle |
//! | [`consts`] | Default tuning values |

pub mod config;
pub mod consts;
pub mod draw;
pub mod engine;
pub mod frame_loop;
pub mod geom;
pub mod grid;
pub mod layout;
pub mod render;

pub use config::{StampMode, TrailConfig, TrailError};
pub use engine::TrailEngine;
pub use geom::{Point, Rect, Size};
pub use layout::{Cell, GridLayout};
