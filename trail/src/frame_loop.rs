//! Per-instance `requestAnimationFrame` loop.
//!
//! Each mounted grid owns exactly one [`FrameLoop`]. The loop re-arms itself
//! after every frame for as long as the frame callback returns `true`;
//! returning `false` parks it until [`FrameLoop::resume`]. Dropping the handle
//! cancels whatever frame is pending, so an unmounted component can never be
//! called back.
//!
//! The callback only holds a weak reference to the loop state; the handle is
//! the sole owner. Do not drop the handle from inside its own callback.
//!
//! Nothing here logs. A frame that cannot be re-armed stops the loop and the
//! error is handed to the host by the next [`FrameLoop::resume`].

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::{JsCast, JsValue, closure::Closure};

type FrameCallback = Closure<dyn FnMut(f64)>;

struct LoopState {
    window: web_sys::Window,
    pending: Cell<Option<i32>>,
    running: Cell<bool>,
    callback: RefCell<Option<FrameCallback>>,
    failure: RefCell<Option<JsValue>>,
}

impl LoopState {
    fn schedule(&self) -> Result<(), JsValue> {
        if self.pending.get().is_some() {
            return Ok(());
        }
        let callback = self.callback.borrow();
        let Some(cb) = callback.as_ref() else {
            return Ok(());
        };
        let id = self.window.request_animation_frame(cb.as_ref().unchecked_ref())?;
        self.pending.set(Some(id));
        Ok(())
    }

    fn cancel(&self) -> Result<(), JsValue> {
        if let Some(id) = self.pending.take() {
            self.window.cancel_animation_frame(id)?;
        }
        Ok(())
    }
}

/// Handle to a running animation-frame loop.
pub struct FrameLoop {
    state: Rc<LoopState>,
}

impl FrameLoop {
    /// Start calling `on_frame` with each frame's timestamp (milliseconds).
    /// The loop parks itself when `on_frame` returns `false`.
    ///
    /// # Errors
    ///
    /// Returns `Err` when there is no `window` or the first frame cannot be
    /// requested.
    pub fn start<F>(on_frame: F) -> Result<Self, JsValue>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
        let state = Rc::new(LoopState {
            window,
            pending: Cell::new(None),
            running: Cell::new(true),
            callback: RefCell::new(None),
            failure: RefCell::new(None),
        });
        let callback = frame_callback(Rc::downgrade(&state), on_frame);
        *state.callback.borrow_mut() = Some(callback);
        state.schedule()?;
        Ok(Self { state })
    }

    /// Whether the loop will keep re-arming itself.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    /// Stop after the current frame and cancel any pending one.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the browser rejects the cancellation.
    pub fn pause(&self) -> Result<(), JsValue> {
        self.state.running.set(false);
        self.state.cancel()
    }

    /// Re-arm a paused or parked loop. A no-op while a frame is pending.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the next frame cannot be requested, or, once re-armed,
    /// the error that stopped the loop since the previous call.
    pub fn resume(&self) -> Result<(), JsValue> {
        let stalled = self.state.failure.take();
        self.state.running.set(true);
        self.state.schedule()?;
        stalled.map_or(Ok(()), Err)
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.state.running.set(false);
        // Nothing is left to report a failed cancel to.
        self.state.cancel().unwrap_or_default();
    }
}

fn frame_callback<F>(state: Weak<LoopState>, mut on_frame: F) -> FrameCallback
where
    F: FnMut(f64) -> bool + 'static,
{
    Closure::wrap(Box::new(move |timestamp: f64| {
        let Some(state) = state.upgrade() else {
            return;
        };
        state.pending.set(None);
        if !state.running.get() {
            return;
        }
        if !on_frame(timestamp) {
            state.running.set(false);
            return;
        }
        if state.running.get() {
            if let Err(err) = state.schedule() {
                state.running.set(false);
                state.failure.replace(Some(err));
            }
        }
    }) as Box<dyn FnMut(f64)>)
}
