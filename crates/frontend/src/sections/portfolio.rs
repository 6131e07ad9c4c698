use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::section_header::SectionHeader;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Large highlight card: icon, category chip, client name, impact line.
#[component]
fn PortfolioCard(
    #[prop(into)] title: String,
    #[prop(into)] category: String,
    #[prop(into)] impact: String,
    #[prop(optional)] delay_ms: u32,
) -> impl IntoView {
    view! {
        <CardAnimated class="portfolio-card" delay_ms=delay_ms>
            <div class="portfolio-card__top">
                <div class="portfolio-card__icon">{icon("instagram")}</div>
                <span class="chip chip--category">{category}</span>
            </div>

            <h3 class="portfolio-card__title">{title}</h3>

            <div class="portfolio-card__bottom">
                <div>
                    <div class="portfolio-card__impact-label">"Core Impact"</div>
                    <div class="portfolio-card__impact">{impact}</div>
                </div>
                <div class="portfolio-card__arrow">{icon("arrow-up-right")}</div>
            </div>
        </CardAnimated>
    }
}

#[component]
pub fn PortfolioSection() -> impl IntoView {
    view! {
        <section class="section section--portfolio">
            <div class="section__inner">
                <SectionHeader lead="Portfolio" accent="Highlights" />

                <div class="portfolio-grid">
                    <PortfolioCard
                        title="Cricstudioinc"
                        category="Sports Content"
                        impact="Community Built"
                    />
                    <PortfolioCard
                        title="Shiva Optics Plus"
                        category="Premium Eyewear"
                        impact="Brand Elevated"
                        delay_ms=80
                    />
                </div>
            </div>
        </section>
    }
}
