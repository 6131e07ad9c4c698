use leptos::prelude::*;

/// Centered section heading: plain lead word(s) + italic accented word.
#[component]
pub fn SectionHeader(
    /// Plain part of the heading
    #[prop(into)]
    lead: String,
    /// Accented, italicised part
    #[prop(into)]
    accent: String,
    /// Accent colour: "teal" (default) or "yellow"
    #[prop(optional, into)]
    accent_color: MaybeProp<String>,
) -> impl IntoView {
    let accent_class = move || match accent_color.get().as_deref() {
        Some("yellow") => "section-header__accent section-header__accent--yellow",
        _ => "section-header__accent section-header__accent--teal",
    };

    view! {
        <div class="section-header">
            <h2 class="section-header__title">
                {lead} " " <span class=accent_class>{accent}</span>
            </h2>
        </div>
    }
}
