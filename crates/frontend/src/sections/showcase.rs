use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn ShowcaseSection() -> impl IntoView {
    view! {
        <section class="section section--showcase">
            <div class="showcase">
                // faint vertical rules behind the content
                <div class="showcase__grid-lines">
                    <div class="showcase__grid-line"></div>
                    <div class="showcase__grid-line"></div>
                    <div class="showcase__grid-line"></div>
                    <div></div>
                </div>

                <div class="showcase__content">
                    <div class="showcase__eyebrow">
                        {icon("sparkles")}
                        <span>"Social Showreel 2024"</span>
                        {icon("sparkles")}
                    </div>

                    <h2 class="showcase__title">
                        "Creativity. " <span class="showcase__title-accent">"Consistency."</span>
                        " Growth."
                    </h2>

                    <p class="showcase__subcopy">
                        "Watch how we've transformed social feeds into revenue-generating engines"
                    </p>

                    <button class="showcase__play" aria-label="Play showreel">
                        {icon("play")}
                    </button>

                    <div class="showcase__chips">
                        <span class="chip">"15+ Campaigns"</span>
                        <span class="chip">"2M+ Reach"</span>
                        <span class="chip">"3 Min Watch"</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
