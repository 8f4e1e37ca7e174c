//! Thin browser accessors shared by the components.
//!
//! Every function has a server-side fallback so components can call them
//! unconditionally; SSR renders the page as if the viewport were empty and
//! the clock stopped.

/// Milliseconds since the epoch, from the JS clock.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Uniform sample in `[0, 1)`.
#[must_use]
pub fn random_unit() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// `window.innerWidth` / `innerHeight`, or zero outside a browser.
#[must_use]
pub fn viewport_size() -> (f64, f64) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return (0.0, 0.0);
        };
        let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
        };
        (read(window.inner_width()), read(window.inner_height()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        (0.0, 0.0)
    }
}

/// Vertical scroll offset of the page.
#[must_use]
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// `window.devicePixelRatio`, `1.0` when unknown.
#[must_use]
pub fn device_pixel_ratio() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().map_or(1.0, |w| w.device_pixel_ratio())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        1.0
    }
}
