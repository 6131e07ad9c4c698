use crate::layout::view_state::PageViewState;
use crate::layout::{Footer, IntroOverlay, Navbar};
use crate::sections::{ClientsSection, CtaSection, HeroSection, PortfolioSection, ShowcaseSection};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the PageViewState store to the whole page via context.
    let view_state = PageViewState::new();
    provide_context(view_state);

    // The page content is always mounted; the intro overlay merely covers it
    // until its completion signal flips `intro_visible`.
    view! {
        <IntroOverlay on_complete=Callback::new(move |_: ()| view_state.dismiss_intro()) />

        <Navbar />

        <main>
            <HeroSection />
            <PortfolioSection />
            <ClientsSection />
            <ShowcaseSection />
            <CtaSection />
        </main>

        <Footer />
    }
}
