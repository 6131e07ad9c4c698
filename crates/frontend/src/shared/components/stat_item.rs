use leptos::prelude::*;

/// Compact stat block: big accented value over a tracked-out label.
/// Values are preformatted display strings ("2M+", "5x"), not numbers.
#[component]
pub fn StatItem(
    /// Display value
    #[prop(into)]
    value: String,
    /// Label displayed under the value
    #[prop(into)]
    label: String,
    /// Accent colour: "teal" (default) or "yellow"
    #[prop(optional, into)]
    accent: MaybeProp<String>,
) -> impl IntoView {
    let value_class = move || match accent.get().as_deref() {
        Some("yellow") => "stat-item__value stat-item__value--yellow",
        _ => "stat-item__value stat-item__value--teal",
    };

    view! {
        <div class="stat-item">
            <div class=value_class>{value}</div>
            <div class="stat-item__label">{label}</div>
        </div>
    }
}
