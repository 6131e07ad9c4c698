use crate::shared::components::ui::Button;
use leptos::prelude::window_event_listener;
use leptos::prelude::*;

/// Fixed top bar. Transparent over the hero, gains a blurred dark backdrop
/// once the window has scrolled past 50px.
#[component]
pub fn Navbar() -> impl IntoView {
    let scrolled = RwSignal::new(false);

    // Listener is unregistered automatically when the owner is cleaned up.
    let _ = window_event_listener(leptos::ev::scroll, move |_| {
        let y = web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        scrolled.set(y > 50.0);
    });

    view! {
        <nav class="navbar" class:navbar--scrolled=move || scrolled.get()>
            <div class="wordmark">"Say It " <span class="wordmark__accent">"Social"</span></div>

            <div class="navbar__services">
                <button class="navbar__service navbar__service--active">"Social Media"</button>
                <button class="navbar__service">"Web Design"</button>
            </div>

            <Button variant="gradient" size="sm">
                "Connect With Our Team"
            </Button>
        </nav>
    }
}
