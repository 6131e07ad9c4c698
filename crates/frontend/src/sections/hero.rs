use crate::shared::components::stat_item::StatItem;
use crate::shared::components::ui::Button;
use leptos::prelude::*;

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <header class="hero">
            <div class="glow-sphere glow-sphere--teal glow-sphere--pulsing hero__glow-left"></div>
            <div class="glow-sphere glow-sphere--yellow hero__glow-right"></div>

            <div class="hero__inner">
                <h1 class="hero__title">
                    "Social Media That" <br/>
                    <span class="hero__title-accent">"Drives Real"</span> <br/>
                    <span class="hero__title-highlight">"Growth"</span>
                </h1>

                <p class="hero__subcopy">
                    "Strategic campaigns that transform brands into social powerhouses. We turn engagement into revenue."
                </p>

                <div class="hero__actions">
                    <Button variant="gradient">"Connect With Our Team"</Button>
                    <Button variant="outline">"Our Website"</Button>
                </div>

                <div class="stat-strip stat-strip--ruled">
                    <StatItem value="10+" label="Industries" />
                    <div class="stat-strip__divided">
                        <StatItem value="2M+" label="Total Reach" accent="yellow" />
                    </div>
                    <StatItem value="5x" label="Lead Velocity" />
                </div>
            </div>
        </header>
    }
}
