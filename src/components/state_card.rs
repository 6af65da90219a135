//! State Card Component
//!
//! Home-grid card for one state: hero image, name, vibe tag, and a
//! teaser of its best-known places.

use crate::components::design_system::VibeBadge;
use crate::components::fallback_image::FallbackImage;
use crate::data::State;
use crate::services::images::hero_image_src;
use leptos::prelude::*;
use phosphor_leptos::{Icon, MAP_PIN};

/// Where a state card links to. States with a dedicated directory get a
/// pretty URL; the rest go through the shared state page with a query
/// parameter.
pub fn state_card_href(base_path: &str, state: &State) -> String {
    if state.has_detail_page {
        format!("{base_path}/states/{}/", state.slug)
    } else {
        format!("{base_path}/states/index.html?state={}", state.slug)
    }
}

#[component]
pub fn StateCard(state: State, #[prop(into)] base_path: String) -> impl IntoView {
    let href = state_card_href(&base_path, &state);
    let hero_src = hero_image_src(&base_path, &state.slug);
    let hero_query = state.hero_search_query().to_string();

    let state_name = state.name.clone();
    let places_teaser: Vec<String> = state.places.iter().take(4).cloned().collect();

    view! {
        <a
            href=href
            class="group block bg-white rounded-xl overflow-hidden shadow-md hover:shadow-xl transition-all hover:-translate-y-1 fade-in"
        >
            <div class="aspect-video overflow-hidden">
                <FallbackImage
                    src=hero_src
                    query=hero_query
                    alt=state_name.clone()
                    class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-500"
                />
            </div>
            <div class="p-5 space-y-3">
                <div class="flex items-start justify-between gap-2">
                    <h3 class="text-xl font-bold text-stone-800 group-hover:text-orange-700 transition-colors">
                        {state_name}
                    </h3>
                    <VibeBadge vibe=state.vibe.clone() />
                </div>
                {(!places_teaser.is_empty()).then(|| {
                    view! {
                        <div class="flex items-center gap-1.5 text-sm text-stone-500">
                            <Icon icon=MAP_PIN size="14px" />
                            <span>{places_teaser.join(" · ")}</span>
                        </div>
                    }
                })}
            </div>
        </a>
    }
}
