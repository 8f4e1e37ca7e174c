//! Endless carousel framed by ruler tick marks.

use leptos::prelude::*;

use crate::util::ruler::{
    AUTO_ROTATE_MS, COPIES, Direction, RULER_TICKS, RulerCarousel as RulerState, TickKind, tick_offset_percent,
};

#[cfg(feature = "hydrate")]
use gloo_timers::callback::{Interval, Timeout};

#[component]
fn RulerLines(#[prop(default = true)] top: bool) -> impl IntoView {
    let edge = if top { "ruler ruler--top" } else { "ruler ruler--bottom" };
    view! {
        <div class=edge aria-hidden="true">
            {(0..RULER_TICKS)
                .map(|i| {
                    let style = format!("left:{:.4}%", tick_offset_percent(i, RULER_TICKS));
                    view! { <div class=TickKind::of(i, RULER_TICKS).class() style=style></div> }
                })
                .collect_view()}
        </div>
    }
}

/// Carousel over `items`, rendered three times so it can wrap forever.
///
/// Arrow keys step it; `auto_rotate` advances it every `interval_ms`.
#[component]
pub fn RulerCarousel(
    items: &'static [&'static str],
    #[prop(optional)] auto_rotate: bool,
    #[prop(default = AUTO_ROTATE_MS)] interval_ms: u32,
) -> impl IntoView {
    let state = RwSignal::new(RulerState::new(items.len()));

    #[cfg(feature = "hydrate")]
    {
        let recenter = StoredValue::new_local(None::<Timeout>);

        // Leaving the middle copy jumps back without a transition.
        Effect::new(move || {
            if state.with(RulerState::needs_recenter) && state.try_update(RulerState::begin_recenter) == Some(true) {
                recenter.set_value(Some(Timeout::new(0, move || state.update(RulerState::finish_recenter))));
            }
        });

        let on_key = window_event_listener(leptos::ev::keydown, move |ev| {
            let Some(direction) = Direction::from_key(&ev.key()) else {
                return;
            };
            ev.prevent_default();
            state.update(|s| {
                s.step(direction);
            });
        });

        let rotate = StoredValue::new_local(auto_rotate.then(|| {
            Interval::new(interval_ms, move || {
                state.update(|s| {
                    s.auto_advance();
                });
            })
        }));

        on_cleanup(move || {
            on_key.remove();
            recenter.try_set_value(None);
            rotate.try_set_value(None);
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = (auto_rotate, interval_ms);

    let strip_style = move || {
        state.with(|s| {
            let transition = if s.is_resetting() { "none" } else { "transform 0.45s cubic-bezier(0.2, 0.9, 0.3, 1.2)" };
            format!("transform:translateX({}px);transition:{transition}", s.target_x())
        })
    };

    view! {
        <div class="ruler-carousel">
            <RulerLines top=true/>
            <div class="ruler-carousel__viewport">
                <div class="ruler-carousel__strip" style=strip_style>
                    {(0..items.len() * COPIES)
                        .map(|slot| {
                            let label = items[slot % items.len()];
                            view! {
                                <button
                                    type="button"
                                    class="ruler-carousel__item"
                                    class:active=move || state.with(|s| s.active() == slot)
                                    on:click=move |_| {
                                        state.update(|s| {
                                            s.select(slot);
                                        });
                                    }
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <RulerLines top=false/>
            <div class="ruler-carousel__controls">
                <button
                    type="button"
                    aria-label="Previous"
                    on:click=move |_| {
                        state.update(|s| {
                            s.step(Direction::Previous);
                        });
                    }
                >
                    "◀◀"
                </button>
                <span class="ruler-carousel__page">
                    {move || state.with(|s| format!("{} / {}", s.current_page(), s.len()))}
                </span>
                <button
                    type="button"
                    aria-label="Next"
                    on:click=move |_| {
                        state.update(|s| {
                            s.step(Direction::Next);
                        });
                    }
                >
                    "▶▶"
                </button>
            </div>
        </div>
    }
}
