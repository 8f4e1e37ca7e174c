//! Above-the-fold hero: trail grid background, headline, part illustration.

use leptos::prelude::*;

use crate::components::interactive_grid::InteractiveGrid;
use crate::components::part_viewer::PartViewer;
use crate::components::typewriter_text::TypewriterText;
use crate::content::{HEADLINE, HEADLINE_HIGHLIGHT, SUPPORTING_LINE};
use crate::util::typewriter::{HEADLINE_DELAY_MS, SUPPORTING_DELAY_MS};

#[component]
pub fn HeroSection() -> impl IntoView {
    let show_supporting = RwSignal::new(false);

    view! {
        <section class="hero">
            <div class="hero__grid">
                <InteractiveGrid class="hero__grid-canvas"/>
            </div>
            <div class="hero__content">
                <div class="hero__copy">
                    <TypewriterText
                        text=HEADLINE
                        delay=HEADLINE_DELAY_MS
                        highlight=HEADLINE_HIGHLIGHT
                        class="hero__headline"
                        on_complete=Callback::new(move |()| show_supporting.set(true))
                    />
                    <div class="hero__supporting">
                        <Show when=move || show_supporting.get()>
                            <TypewriterText text=SUPPORTING_LINE delay=SUPPORTING_DELAY_MS class="hero__supporting-text"/>
                        </Show>
                    </div>
                    <button type="button" class="shimmer-button pill-cut-corner-filled">
                        "GET STARTED"
                    </button>
                </div>
                <div class="hero__viewer">
                    <PartViewer/>
                </div>
            </div>
        </section>
    }
}
