//! Typewriter reveal with a blinking caret and optional highlighted word.

use leptos::prelude::*;

use crate::util::typewriter::{HEADLINE_DELAY_MS, Typewriter};

#[cfg(feature = "hydrate")]
use gloo_timers::callback::{Interval, Timeout};

#[cfg(feature = "hydrate")]
use crate::util::{browser, scroll, typewriter::CURSOR_BLINK_MS};

/// Reveals `text` one character every `delay` ms.
///
/// With `scroll_triggered`, typing waits until half the element is on
/// screen and the caret disappears once the text is complete. `on_complete`
/// fires once, after the last character.
#[component]
pub fn TypewriterText(
    #[prop(into)] text: String,
    #[prop(default = HEADLINE_DELAY_MS)] delay: u32,
    #[prop(optional, into)] highlight: Option<String>,
    #[prop(optional)] scroll_triggered: bool,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] on_complete: Option<Callback<()>>,
) -> impl IntoView {
    let state = RwSignal::new(if scroll_triggered { Typewriter::deferred(&text) } else { Typewriter::new(&text) });
    let root = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let pending = StoredValue::new_local(None::<Timeout>);
        let blink = StoredValue::new_local(Some(Interval::new(CURSOR_BLINK_MS, move || state.update(Typewriter::blink))));
        let completed = StoredValue::new(false);

        // Caret blinks must not restart the character timer.
        let progress = Memo::new(move |_| state.with(|t| (t.is_started(), t.is_complete(), t.revealed_len())));

        // One timeout per character; each reveal re-runs this effect.
        Effect::new(move || {
            let (started, complete, _) = progress.get();
            if !started {
                return;
            }
            if complete {
                pending.set_value(None);
                if !completed.get_value() {
                    completed.set_value(true);
                    if let Some(cb) = on_complete {
                        cb.run(());
                    }
                }
                return;
            }
            pending.set_value(Some(Timeout::new(delay, move || {
                state.update(|t| {
                    t.advance();
                });
            })));
        });

        if scroll_triggered {
            let check = move || {
                let Some(el) = root.get_untracked() else {
                    return;
                };
                let rect = el.get_bounding_client_rect();
                let ratio = scroll::visible_ratio(rect.top(), rect.height(), browser::viewport_size().1);
                if state.with_untracked(|t| !t.is_started()) {
                    state.update(|t| {
                        t.start_if_visible(ratio);
                    });
                }
            };
            Effect::new(move || {
                if root.get().is_some() {
                    check();
                }
            });
            let on_scroll = window_event_listener(leptos::ev::scroll, move |_| check());
            on_cleanup(move || on_scroll.remove());
        }

        on_cleanup(move || {
            pending.try_set_value(None);
            blink.try_set_value(None);
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = (delay, on_complete);

    view! {
        <div node_ref=root class=format!("typewriter {class}")>
            <span class="typewriter-text">
                {move || {
                    let segments = state.with(|t| t.segments(highlight.as_deref()));
                    view! {
                        {segments.before}
                        {segments.highlight.map(|word| view! { <span class="typewriter-highlight">{word}</span> })}
                        {segments.after}
                    }
                }}
            </span>
            <Show when=move || state.with(Typewriter::caret_visible)>
                <span class="typewriter-cursor"></span>
            </Show>
        </div>
    }
}
