//! Home Page Component
//!
//! Fetches the states document and renders the explore grid.

use crate::components::design_system::{EmptyState, ErrorPanel, LoadingSpinner};
use crate::components::state_card::StateCard;
use crate::data::State;
use crate::services::data::{data_url, fetch_states, DataError};
use crate::utils::fade_in::observe_fade_ins;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Grid of states, given already-fetched data. Split out so the markup
/// can be exercised without a network.
#[component]
pub fn StateGrid(states: Vec<State>, #[prop(into)] base_path: String) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
            {states
                .into_iter()
                .map(|state| {
                    view! { <StateCard state=state base_path=base_path.clone() /> }
                })
                .collect_view()}
        </div>
    }
}

/// Home page controller: loading, error, empty, and grid branches.
#[component]
pub fn HomePage(#[prop(into)] base_path: String) -> impl IntoView {
    let states = RwSignal::new(Vec::<State>::new());
    let is_loading = RwSignal::new(true);
    let error = RwSignal::new(Option::<DataError>::None);

    let fetch_base = base_path.clone();
    spawn_local(async move {
        match fetch_states(&fetch_base).await {
            Ok(doc) => {
                log::info!("loaded {} states", doc.states.len());
                states.set(doc.states);
            }
            Err(err) => {
                log::error!("failed to load states: {err}");
                error.set(Some(err));
            }
        }
        is_loading.set(false);
    });

    // Cards render with .fade-in; start observing once they exist.
    Effect::new(move |_| {
        if !is_loading.get() && error.get().is_none() && !states.get().is_empty() {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                observe_fade_ins(&document);
            }
        }
    });

    let error_url = data_url(&base_path, "states.json");
    let grid_base = base_path.clone();

    view! {
        {move || {
            if is_loading.get() {
                view! { <LoadingSpinner size="lg" /> }.into_any()
            } else if let Some(err) = error.get() {
                view! {
                    <ErrorPanel
                        title="Could not load states"
                        message=err.to_string()
                        url=error_url.clone()
                    />
                }
                    .into_any()
            } else if states.get().is_empty() {
                view! { <EmptyState message="No states found." /> }.into_any()
            } else {
                view! { <StateGrid states=states.get() base_path=grid_base.clone() /> }
                    .into_any()
            }
        }}
    }
}
