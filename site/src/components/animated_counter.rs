//! Count-up number driven by its own animation-frame loop.

use leptos::prelude::*;

use crate::util::counter::{Counter, DEFAULT_DURATION_MS};

#[cfg(feature = "hydrate")]
use trail::frame_loop::FrameLoop;

/// Counts from zero to `end` over `duration_ms`, then stops its loop.
#[component]
pub fn AnimatedCounter(end: u32, #[prop(default = DEFAULT_DURATION_MS)] duration_ms: f64) -> impl IntoView {
    let counter = Counter { end, duration_ms };
    let value = RwSignal::new(0_u32);

    #[cfg(feature = "hydrate")]
    {
        let mut started_ms = None::<f64>;
        match FrameLoop::start(move |now_ms| {
            let elapsed = now_ms - *started_ms.get_or_insert(now_ms);
            value.set(counter.value_at(elapsed));
            !counter.is_done(elapsed)
        }) {
            Ok(frame_loop) => {
                let frames = StoredValue::new_local(Some(frame_loop));
                on_cleanup(move || {
                    frames.try_set_value(None);
                });
            }
            Err(err) => {
                log::warn!("animated counter: frame loop unavailable: {err:?}");
                value.set(end);
            }
        }
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = counter;

    view! { <span class="animated-counter">{move || value.get()}</span> }
}
