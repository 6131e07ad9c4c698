//! Полноэкранная заставка при загрузке страницы.
//!
//! Таймер живёт здесь; семантика "выстрелить ровно один раз" — в
//! `contracts::intro::IntroSequencer`. Отмена при размонтировании идёт через
//! `on_cleanup`, чтобы сигнал завершения не пришёл в разрушенное view.

use crate::layout::view_state::PageViewState;
use contracts::intro::{IntroSequencer, INTRO_DURATION_MS};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const WORDMARK: &str = "Say It Social";
/// Per-letter reveal stagger, ms.
const LETTER_STAGGER_MS: u32 = 50;
/// First accent-coloured letter ("Social" starts at index 7).
const ACCENT_FROM: usize = 7;

#[component]
pub fn IntroOverlay(
    /// Fired exactly once, when the splash has run its full duration.
    #[prop(into)]
    on_complete: Callback<()>,
) -> impl IntoView {
    let view_state =
        use_context::<PageViewState>().expect("PageViewState context not found");

    let sequencer = StoredValue::new(IntroSequencer::new());

    // A torn-down view must never receive the completion signal.
    on_cleanup(move || {
        let _ = sequencer.try_update_value(|seq| seq.cancel());
    });

    spawn_local(async move {
        TimeoutFuture::new(INTRO_DURATION_MS).await;
        let fired = sequencer
            .try_update_value(|seq| seq.poll(INTRO_DURATION_MS))
            .unwrap_or(false);
        if fired {
            leptos::logging::log!("intro complete after {}ms", INTRO_DURATION_MS);
            on_complete.run(());
        }
    });

    let letters = WORDMARK
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            let class = if i >= ACCENT_FROM {
                "intro-overlay__letter intro-overlay__letter--accent"
            } else {
                "intro-overlay__letter"
            };
            let delay = format!("animation-delay: {}ms;", i as u32 * LETTER_STAGGER_MS);
            // non-breaking space keeps the gap visible inside the flex row
            let shown = if ch == ' ' { '\u{a0}' } else { ch };
            view! {
                <span class=class style=delay>
                    {shown.to_string()}
                </span>
            }
        })
        .collect_view();

    // The overlay node stays mounted; `--leaving` plays the slide-up exit
    // and drops pointer events, the content underneath is untouched.
    view! {
        <div
            class="intro-overlay"
            class:intro-overlay--leaving=move || !view_state.intro_visible.get()
        >
            <div class="intro-overlay__wordmark">{letters}</div>
        </div>
    }
}
