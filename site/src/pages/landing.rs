//! The single landing page.

use leptos::prelude::*;

use crate::components::hero_section::HeroSection;
use crate::components::navbar::Navbar;
use crate::components::smooth_cursor::SmoothCursor;
use crate::components::story_carousel::StoryCarousel;
use crate::components::technology_section::TechnologySection;
use crate::components::who_are_you_section::WhoAreYouSection;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <SmoothCursor/>
            <Navbar/>
            <main class="landing__main">
                <HeroSection/>
                <StoryCarousel/>
                <WhoAreYouSection/>
                <TechnologySection/>
            </main>
        </div>
    }
}
