//! Spec stats with count-up numbers, a process carousel and machine cards.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::animated_counter::AnimatedCounter;
use crate::components::ruler_carousel::RulerCarousel;
use crate::content::{MACHINES, Machine, PROCESSES, SPECS, Spec, SpecValue};

fn spec_card(spec: &'static Spec) -> impl IntoView {
    let figure = match spec.value {
        SpecValue::Fixed(text) => view! { <span>{text}</span> }.into_any(),
        SpecValue::Counted { end, suffix } => view! {
            <span>
                <AnimatedCounter end=end/>
                {suffix}
            </span>
        }
        .into_any(),
    };
    view! {
        <div class="spec-card">
            <div class="spec-card__icon">{spec.icon}</div>
            <div class="spec-card__value">{figure}</div>
            <div class="spec-card__unit">{spec.unit}</div>
        </div>
    }
}

fn machine_card(machine: &'static Machine) -> impl IntoView {
    view! {
        <div class="machine-card">
            <h3>{machine.title}</h3>
            <p>{machine.description}</p>
            <ul>{machine.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}</ul>
        </div>
    }
}

#[component]
pub fn TechnologySection() -> impl IntoView {
    view! {
        <section class="technology">
            <div class="technology__inner">
                <header class="technology__header">
                    <h2>"CUTTING-EDGE TECHNOLOGY"</h2>
                    <p>"Our state-of-the-art CNC machines deliver unparalleled precision and speed"</p>
                </header>
                <div class="technology__specs">{SPECS.iter().map(spec_card).collect_view()}</div>
                <RulerCarousel items=&PROCESSES auto_rotate=true/>
                <div class="technology__machines">{MACHINES.iter().map(machine_card).collect_view()}</div>
            </div>
        </section>
    }
}
