//! Fixed top navbar with scramble-on-hover call-to-action buttons.

use leptos::prelude::*;

use crate::components::hyper_text::HyperText;
use crate::content::BRAND;
use crate::state::nav::{CTA_LABELS, NavState};

#[cfg(feature = "hydrate")]
use crate::util::browser;

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    #[cfg(feature = "hydrate")]
    {
        let on_scroll = window_event_listener(leptos::ev::scroll, move |_| {
            let y = browser::scroll_y();
            nav.maybe_update(|n| n.on_scroll(y));
        });
        on_cleanup(move || on_scroll.remove());
    }

    view! {
        <nav class=move || nav.with(NavState::class)>
            <div class="navbar__inner">
                <a href="#" class="navbar__brand">{BRAND}</a>
                <div class="navbar__actions">
                    {CTA_LABELS
                        .iter()
                        .map(|label| {
                            view! {
                                <button type="button" class="cta pill-cut-corner">
                                    <HyperText text=*label animate_on_load=false/>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    type="button"
                    class="navbar__toggle"
                    aria-label="Menu"
                    aria-expanded=move || nav.with(|n| n.menu_open.to_string())
                    on:click=move |_| nav.update(NavState::toggle_menu)
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <Show when=move || nav.with(|n| n.menu_open)>
                <div class="navbar__menu">
                    {CTA_LABELS
                        .iter()
                        .map(|label| {
                            view! {
                                <button type="button" class="cta" on:click=move |_| nav.update(NavState::close_menu)>
                                    {*label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
