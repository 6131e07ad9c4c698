//! Секция "All Clients": ряд category-чипов + фильтруемая сетка карточек.
//!
//! Выбор категории синхронный: чип пишет в `PageViewState`, сетка
//! пересчитывается через реактивный граф. Карточки входят со stagger-анимацией.

use crate::layout::view_state::PageViewState;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::section_header::SectionHeader;
use crate::shared::icons::icon;
use contracts::catalog::{self, ClientRecord};
use leptos::prelude::*;

/// Stagger step between neighbouring cards, ms.
const CARD_STAGGER_MS: u32 = 80;

#[component]
fn ClientCard(client: ClientRecord, #[prop(optional)] delay_ms: u32) -> impl IntoView {
    let ClientRecord {
        name,
        category,
        description,
        ..
    } = client;

    view! {
        <CardAnimated class="client-card" delay_ms=delay_ms>
            <div class="client-card__top">
                <span class="client-card__category">{category}</span>
                {icon("instagram")}
            </div>
            <h4 class="client-card__name">{name}</h4>
            <p class="client-card__description">{description}</p>
        </CardAnimated>
    }
}

#[component]
pub fn ClientsSection() -> impl IntoView {
    let view_state =
        use_context::<PageViewState>().expect("PageViewState context not found");

    view! {
        <section class="section section--clients">
            <div class="section__inner">
                <SectionHeader lead="All" accent="Clients" accent_color="yellow" />

                <div class="category-chips">
                    {catalog::categories()
                        .iter()
                        .map(|category| {
                            let label = *category;
                            view! {
                                <button
                                    class="category-chip"
                                    class:category-chip--active=move || {
                                        view_state.selected_category.with(|sel| sel == label)
                                    }
                                    on:click=move |_| view_state.select_category(label)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="clients-grid">
                    <For
                        each=move || {
                            view_state
                                .filtered_clients()
                                .into_iter()
                                .enumerate()
                                .collect::<Vec<_>>()
                        }
                        key=|(_, client)| client.id
                        children=move |(index, client): (usize, ClientRecord)| {
                            view! {
                                <ClientCard
                                    client=client
                                    delay_ms={index as u32 * CARD_STAGGER_MS}
                                />
                            }
                        }
                    />
                </div>
            </div>
        </section>
    }
}
