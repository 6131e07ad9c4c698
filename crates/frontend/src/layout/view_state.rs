use contracts::catalog::{self, ClientRecord, ALL_CATEGORIES};
use leptos::prelude::*;

/// Transient per-session UI state for the page.
///
/// Constructed once in `App`, provided via context, and read by the intro
/// overlay and the clients grid. Nothing here survives a reload.
#[derive(Clone, Copy)]
pub struct PageViewState {
    /// Whether the splash overlay still covers the page. Starts `true`.
    pub intro_visible: RwSignal<bool>,
    /// Currently selected category chip. Starts at the wildcard.
    pub selected_category: RwSignal<String>,
}

impl PageViewState {
    pub fn new() -> Self {
        Self {
            intro_visible: RwSignal::new(true),
            selected_category: RwSignal::new(ALL_CATEGORIES.to_string()),
        }
    }

    /// Switch the active category. Synchronous: the filtered grid re-renders
    /// through the reactive graph before the next user action.
    ///
    /// Labels outside the enumerated set are a caller bug; they are dropped
    /// with a warning instead of corrupting the selection. Re-selecting the
    /// active label leaves the state untouched.
    pub fn select_category(&self, label: &str) {
        if !catalog::is_known_category(label) {
            log::warn!("select_category: unknown label '{}', ignoring", label);
            return;
        }
        if self.selected_category.with_untracked(|current| current == label) {
            return;
        }
        self.selected_category.set(label.to_string());
    }

    /// Catalog entries matching the current selection, in catalog order.
    pub fn filtered_clients(&self) -> Vec<ClientRecord> {
        self.selected_category
            .with(|label| catalog::filter_clients(label, catalog::clients()))
    }

    /// Remove the splash overlay. Repeat calls are no-ops.
    pub fn dismiss_intro(&self) {
        if self.intro_visible.get_untracked() {
            self.intro_visible.set(false);
        }
    }
}
