//! State Page Components
//!
//! One state's landing page: hero image, available route cards, and
//! theme pills. The shell provides the hero `<img>` and two container
//! elements; everything else is rendered here.

use crate::components::design_system::{EmptyState, ErrorPanel, LoadingSpinner};
use crate::components::fallback_image::FallbackImage;
use crate::data::{Itinerary, State};
use crate::services::data::{fetch_itineraries, fetch_states, DataError};
use crate::services::images::{fallback_image_url, hero_image_src, route_image_src};
use crate::utils::fade_in::observe_fade_ins;
use leptos::mount::mount_to;
use leptos::prelude::*;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

/// Detail page URL for an itinerary of a given length.
pub fn route_card_href(base_path: &str, state_slug: &str, duration_days: u32) -> String {
    format!("{base_path}/states/{state_slug}/itinerary-{duration_days}-days.html")
}

#[component]
pub fn RouteCard(itinerary: Itinerary, #[prop(into)] base_path: String) -> impl IntoView {
    let href = route_card_href(&base_path, &itinerary.state, itinerary.duration_days);
    let image_src = route_image_src(&base_path, &itinerary.state, itinerary.duration_days);
    let image_query = format!("{} travel", itinerary.title);

    view! {
        <a
            href=href
            class="group block bg-white rounded-xl overflow-hidden shadow-md hover:shadow-xl transition-all hover:-translate-y-1 fade-in"
        >
            <div class="aspect-video overflow-hidden">
                <FallbackImage
                    src=image_src
                    query=image_query
                    alt=itinerary.title.clone()
                    class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-500"
                />
            </div>
            <div class="p-5 space-y-2">
                <h3 class="text-xl font-bold text-stone-800 group-hover:text-orange-700 transition-colors">
                    {format!("{} Days", itinerary.duration_days)}
                </h3>
                <p class="text-sm text-stone-500 line-clamp-2">{itinerary.summary.clone()}</p>
            </div>
        </a>
    }
}

/// One anchor pill per theme, linking to the matching section id.
#[component]
pub fn ThemePills(themes: Vec<String>) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {themes
                .into_iter()
                .map(|theme| {
                    let anchor = format!("#{}", theme.to_lowercase());
                    view! {
                        <a
                            href=anchor
                            class="px-4 py-1.5 rounded-full text-sm font-medium bg-orange-100 text-orange-800 hover:bg-orange-200 transition-colors"
                        >
                            {theme}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn RouteList(itineraries: Vec<Itinerary>, #[prop(into)] base_path: String) -> impl IntoView {
    if itineraries.is_empty() {
        return view! {
            <EmptyState message="Itineraries coming soon for this state." />
        }
        .into_any();
    }

    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
            {itineraries
                .into_iter()
                .map(|itinerary| {
                    view! { <RouteCard itinerary=itinerary base_path=base_path.clone() /> }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

/// Point the shell's hero `<img>` at the state's hero asset, with a
/// one-shot swap to the seeded placeholder on load error.
fn wire_hero_image(img: &web_sys::HtmlImageElement, base_path: &str, state: &State) {
    let fallback = fallback_image_url(state.hero_search_query(), 1600, 900);
    let swapped = Rc::new(Cell::new(false));

    let target = img.clone();
    let on_error = Closure::wrap(Box::new(move |_: web_sys::Event| {
        if !swapped.get() {
            swapped.set(true);
            target.set_src(&fallback);
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    if img
        .add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())
        .is_ok()
    {
        on_error.forget();
    }

    img.set_alt(&state.name);
    img.set_src(&hero_image_src(base_path, &state.slug));
}

/// State page controller, mounted into the routes container. The theme
/// container and hero image are wired imperatively once data arrives,
/// mirroring how the static shells split the page.
#[component]
pub fn StatePage(
    #[prop(into)] base_path: String,
    #[prop(into)] slug: String,
    themes_host: web_sys::HtmlElement,
    hero_img: Option<web_sys::HtmlImageElement>,
) -> impl IntoView {
    let is_loading = RwSignal::new(true);
    let error = RwSignal::new(Option::<DataError>::None);
    let itineraries = RwSignal::new(Vec::<Itinerary>::new());

    let fetch_base = base_path.clone();
    let fetch_slug = slug.clone();
    spawn_local(async move {
        let result = load_state_page(&fetch_base, &fetch_slug).await;
        match result {
            Ok((state, found)) => {
                log::info!("state '{}': {} itineraries", state.slug, found.len());
                if let Some(ref img) = hero_img {
                    wire_hero_image(img, &fetch_base, &state);
                }
                mount_to(themes_host.clone(), {
                    let themes = state.themes.clone();
                    move || view! { <ThemePills themes=themes /> }
                })
                .forget();
                itineraries.set(found);
            }
            Err(err) => {
                log::error!("state page failed: {err}");
                error.set(Some(err));
            }
        }
        is_loading.set(false);
    });

    Effect::new(move |_| {
        if !is_loading.get() && error.get().is_none() {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                observe_fade_ins(&document);
            }
        }
    });

    let list_base = base_path;

    view! {
        {move || {
            if is_loading.get() {
                view! { <LoadingSpinner size="lg" /> }.into_any()
            } else if let Some(err) = error.get() {
                match err {
                    DataError::NotFound { .. } => {
                        view! { <EmptyState message="State not found." /> }.into_any()
                    }
                    other => {
                        let url = failed_url(&other);
                        match url {
                            Some(u) => view! {
                                <ErrorPanel
                                    title="Could not load this state"
                                    message=other.to_string()
                                    url=u
                                />
                            }
                                .into_any(),
                            None => view! {
                                <ErrorPanel
                                    title="Could not load this state"
                                    message=other.to_string()
                                />
                            }
                                .into_any(),
                        }
                    }
                }
            } else {
                view! {
                    <RouteList itineraries=itineraries.get() base_path=list_base.clone() />
                }
                    .into_any()
            }
        }}
    }
}

/// Two sequential fetches: the state record first, then its itineraries.
async fn load_state_page(
    base_path: &str,
    slug: &str,
) -> Result<(State, Vec<Itinerary>), DataError> {
    let states = fetch_states(base_path).await?;
    let state = states
        .find_state(slug)
        .cloned()
        .ok_or_else(|| DataError::NotFound {
            what: "state",
            key: slug.to_string(),
        })?;
    let itineraries = fetch_itineraries(base_path).await?;
    let found = itineraries
        .itineraries_for_state(slug)
        .into_iter()
        .cloned()
        .collect();
    Ok((state, found))
}

fn failed_url(err: &DataError) -> Option<String> {
    match err {
        DataError::Network { url, .. }
        | DataError::Http { url, .. }
        | DataError::Parse { url, .. } => Some(url.clone()),
        DataError::NotFound { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_card_href_encodes_duration() {
        assert_eq!(
            route_card_href("/desitrails", "kerala", 5),
            "/desitrails/states/kerala/itinerary-5-days.html"
        );
        assert_eq!(
            route_card_href("", "goa", 3),
            "/states/goa/itinerary-3-days.html"
        );
    }
}
