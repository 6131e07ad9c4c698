use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__brand">
                    <div class="wordmark wordmark--large">
                        "Say It " <span class="wordmark__accent">"Social"</span>
                    </div>
                    <p class="footer__blurb">
                        "Strategic campaigns that transform brands into social powerhouses. We turn engagement into revenue."
                    </p>
                </div>

                <div class="footer__contact">
                    <h5 class="footer__heading">"Get In Touch"</h5>
                    <p class="footer__phone">"WhatsApp: +91 84607 32085"</p>
                    <div class="footer__socials">
                        <a href="#" class="footer__social" aria-label="Instagram">
                            {icon("instagram")}
                        </a>
                        <a href="#" class="footer__social" aria-label="Twitter">
                            {icon("twitter")}
                        </a>
                        <a href="#" class="footer__social" aria-label="YouTube">
                            {icon("youtube")}
                        </a>
                        <a href="#" class="footer__social" aria-label="LinkedIn">
                            {icon("linkedin")}
                        </a>
                    </div>
                </div>
            </div>

            <div class="footer__legal">"© 2024 Say It Social. All rights reserved."</div>
        </footer>
    }
}
