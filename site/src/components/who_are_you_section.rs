//! Audience picker under a scroll-triggered typewriter heading.

use leptos::prelude::*;

use crate::components::typewriter_text::TypewriterText;
use crate::content::{AUDIENCES, WHO_ARE_YOU};
use crate::util::typewriter::HEADING_DELAY_MS;

#[component]
pub fn WhoAreYouSection() -> impl IntoView {
    view! {
        <section class="who-are-you">
            <div class="who-are-you__header">
                <TypewriterText text=WHO_ARE_YOU delay=HEADING_DELAY_MS scroll_triggered=true class="who-are-you__title"/>
                <p>"To serve you better, tell us who you are:"</p>
            </div>
            <div class="who-are-you__cards">
                {AUDIENCES
                    .iter()
                    .map(|audience| {
                        view! {
                            <button type="button" class="audience-card" aria-label=audience.title>
                                <span class="audience-card__icon">{audience.icon}</span>
                                <h3>{audience.title}</h3>
                                <span class="audience-card__cta">"Take me there →"</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
