//! # site
//!
//! Leptos frontend for the KWIKCNC landing page.
//!
//! The crate is compiled twice: with `ssr` into the server binary, which
//! renders the first frame, and with `hydrate` into the WASM bundle, which
//! attaches timers, listeners and the `trail` grid engine to that markup.
//!
//! | Module | Contents |
//! |--------|----------|
//! | `app` | HTML shell, root component, routes |
//! | `pages` | Route-level pages |
//! | `components` | Sections and animated widgets |
//! | `state` | Context-provided UI state |
//! | `util` | Browser-free animation arithmetic |
//! | `content` | Static copy |

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
