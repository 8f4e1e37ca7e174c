//! Label that scrambles through random letters before settling.

use leptos::prelude::*;

use crate::util::scramble::{DEFAULT_DURATION_MS, Scramble};

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Interval;

#[cfg(feature = "hydrate")]
use crate::util::browser;
#[cfg(feature = "hydrate")]
use crate::util::scramble::{letter_from_unit, step_interval_ms};

/// Scrambles on mount (unless `animate_on_load` is false) and on hover.
#[component]
pub fn HyperText(
    #[prop(into)] text: String,
    #[prop(default = DEFAULT_DURATION_MS)] duration: u32,
    #[prop(default = true)] animate_on_load: bool,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let scramble = RwSignal::new(Scramble::new(&text, animate_on_load));

    #[cfg(feature = "hydrate")]
    let ticker = StoredValue::new_local(None::<Interval>);

    let start = move || {
        #[cfg(feature = "hydrate")]
        {
            let started = scramble.try_update(Scramble::trigger).unwrap_or(false);
            if started && ticker.with_value(Option::is_none) {
                let every = step_interval_ms(duration, scramble.with_untracked(Scramble::len));
                ticker.set_value(Some(Interval::new(every, move || {
                    scramble.update(|s| {
                        s.step(|| letter_from_unit(browser::random_unit()));
                    });
                })));
            }
        }
    };

    #[cfg(feature = "hydrate")]
    {
        // The interval cannot cancel itself from inside its own callback.
        Effect::new(move || {
            if !scramble.with(Scramble::is_running) {
                ticker.set_value(None);
            }
        });
        Effect::new(start);
        on_cleanup(move || {
            ticker.try_set_value(None);
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = duration;

    view! {
        <span class=format!("hyper-text {class}") on:mouseenter=move |_| start()>
            {move || scramble.with(Scramble::display_text)}
        </span>
    }
}
