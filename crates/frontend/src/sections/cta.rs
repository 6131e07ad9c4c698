use crate::shared::components::stat_item::StatItem;
use crate::shared::components::ui::Button;
use leptos::prelude::*;

#[component]
pub fn CtaSection() -> impl IntoView {
    view! {
        <section class="section section--cta">
            <div class="glow-sphere glow-sphere--teal cta__glow"></div>

            <div class="cta__inner">
                <h2 class="cta__title">
                    "Ready to Skyrocket Your" <br/>
                    <span class="cta__title-accent">"Social Presence?"</span>
                </h2>

                <div class="cta__band">
                    <span class="wordmark">
                        "Say It " <span class="wordmark__accent">"Social"</span>
                    </span>
                    <div class="cta__links">
                        <a href="#" class="cta__link cta__link--active">"Social Media"</a>
                        <a href="#" class="cta__link">"Web Design"</a>
                    </div>
                    <Button variant="solid">"Connect With Our Team"</Button>
                </div>

                <div class="stat-strip">
                    <StatItem value="10+" label="Industries" />
                    <StatItem value="2M+" label="Total Reach" accent="yellow" />
                    <StatItem value="5+" label="Lead Velocity" />
                </div>
            </div>
        </section>
    }
}
