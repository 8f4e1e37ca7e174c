//! Sticky section whose story strip slides sideways as the page scrolls.

use leptos::prelude::*;

use crate::content::{STORIES, Story};
use crate::util::scroll::strip_translate_percent;

#[cfg(feature = "hydrate")]
use crate::util::{browser, scroll::section_progress};

fn story_card(index: usize, story: &'static Story) -> impl IntoView {
    view! {
        <article class="story-card" data-index=index.to_string()>
            <img src=story.image alt=story.title loading="lazy"/>
            <div class="story-card__overlay">
                <span class="story-card__kind">{story.kind}</span>
                <h3>{story.title}</h3>
                <p>{story.description}</p>
            </div>
        </article>
    }
}

#[component]
pub fn StoryCarousel() -> impl IntoView {
    let section = NodeRef::<leptos::html::Section>::new();
    let progress = RwSignal::new(0.0_f64);

    #[cfg(feature = "hydrate")]
    {
        let measure = move || {
            let Some(el) = section.get_untracked() else {
                return;
            };
            let rect = el.get_bounding_client_rect();
            progress.set(section_progress(rect.top(), rect.height(), browser::viewport_size().1));
        };
        Effect::new(move || {
            if section.get().is_some() {
                measure();
            }
        });
        let on_scroll = window_event_listener(leptos::ev::scroll, move |_| measure());
        let on_resize = window_event_listener(leptos::ev::resize, move |_| measure());
        on_cleanup(move || {
            on_scroll.remove();
            on_resize.remove();
        });
    }

    // The list is rendered twice so the strip can travel half its width.
    let cards = STORIES.iter().chain(STORIES.iter()).enumerate().map(|(i, story)| story_card(i, story)).collect_view();

    view! {
        <section node_ref=section class="story-carousel">
            <div class="story-carousel__sticky">
                <div class="story-carousel__fade story-carousel__fade--left"></div>
                <div class="story-carousel__fade story-carousel__fade--right"></div>
                <div
                    class="story-carousel__strip"
                    style=move || format!("transform:translateX({:.3}%)", strip_translate_percent(progress.get()))
                >
                    {cards}
                </div>
                <div class="story-carousel__progress">
                    <div
                        class="story-carousel__progress-bar"
                        style=move || format!("transform:scaleX({:.4})", progress.get())
                    ></div>
                </div>
            </div>
        </section>
    }
}
