//! CardAnimated — обёртка над Thaw Card с анимацией появления.
//!
//! Анимация определена в `layout.css` (`@keyframes card-appear`).
//! `delay_ms` задаёт каскадную задержку для stagger-эффекта по сетке.

use leptos::prelude::*;
use thaw::Card;

/// Обёртка над Thaw [`Card`] с анимацией `card-appear` из `layout.css`.
///
/// # Props
/// - `delay_ms` — задержка анимации в мс (по умолчанию `0`).
/// - `class`    — дополнительные классы на поверхности карточки.
/// - `style`    — дополнительные inline-стили после стилей анимации.
/// - `children` — содержимое карточки.
#[component]
pub fn CardAnimated(
    /// Задержка анимации в миллисекундах (для stagger-эффекта).
    #[prop(optional)]
    delay_ms: u32,
    /// Дополнительные CSS-классы.
    #[prop(optional, into)]
    class: String,
    /// Дополнительные inline-стили (добавляются после стилей анимации).
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let full_style = if style.is_empty() {
        format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
    } else {
        format!(
            "animation: card-appear 0.28s ease-out {}ms both; {}",
            delay_ms, style
        )
    };

    view! {
        <Card attr:class=class attr:style=full_style>
            {children()}
        </Card>
    }
}
