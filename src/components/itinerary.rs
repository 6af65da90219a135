//! Itinerary Page Components
//!
//! Day-by-day plan for one itinerary: a sticky sidebar with the route
//! summary and one section per day, each with activity slots, travel
//! stats, lists, and a small image gallery.

use crate::components::design_system::{ErrorPanel, LoadingSpinner};
use crate::components::fallback_image::FallbackImage;
use crate::data::{Day, Itinerary};
use crate::services::data::{fetch_itineraries, DataError};
use crate::services::images::gallery_image_src;
use crate::utils::fade_in::observe_fade_ins;
use crate::utils::formatting::{capitalize, route_breadcrumb};
use leptos::mount::mount_to;
use leptos::prelude::*;
use phosphor_leptos::{Icon, BED, CALENDAR, CLOCK, FORK_KNIFE};
use wasm_bindgen_futures::spawn_local;

// ============================================================================
// Sidebar
// ============================================================================

#[component]
pub fn SidebarView(itinerary: Itinerary, #[prop(into)] base_path: String) -> impl IntoView {
    let back_href = format!("{base_path}/states/{}/", itinerary.state);
    let back_label = format!("Back to {}", capitalize(&itinerary.state));
    let breadcrumb = route_breadcrumb(&itinerary.route);
    let general_tips = itinerary.general_tips.clone();

    view! {
        <div class="space-y-6">
            <div>
                <h2 class="text-2xl font-bold text-stone-800">{itinerary.title.clone()}</h2>
                <p class="text-sm text-stone-500 mt-1">{breadcrumb}</p>
            </div>

            <div class="grid grid-cols-2 gap-3">
                <div class="bg-orange-50 rounded-lg p-3 text-center">
                    <div class="flex justify-center text-orange-600 mb-1">
                        <Icon icon=CALENDAR size="18px" />
                    </div>
                    <div class="text-lg font-bold text-stone-800">
                        {format!("{} Days", itinerary.duration_days)}
                    </div>
                    <div class="text-xs text-stone-500">"Duration"</div>
                </div>
                <div class="bg-orange-50 rounded-lg p-3 text-center">
                    <div class="flex justify-center text-orange-600 mb-1">
                        <Icon icon=CLOCK size="18px" />
                    </div>
                    <div class="text-lg font-bold text-stone-800">
                        {itinerary.best_time.clone()}
                    </div>
                    <div class="text-xs text-stone-500">"Best Time"</div>
                </div>
            </div>

            {(!general_tips.is_empty()).then(|| {
                view! {
                    <div class="bg-stone-50 rounded-lg p-4">
                        <h3 class="text-sm font-bold text-stone-700 mb-2">"Good to Know"</h3>
                        <ul class="space-y-1.5 text-sm text-stone-600 list-disc list-inside">
                            {general_tips
                                .into_iter()
                                .map(|tip| view! { <li>{tip}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                }
            })}

            <a
                href=back_href
                class="inline-block text-sm font-medium text-orange-700 hover:text-orange-900 transition-colors"
            >
                {back_label}
            </a>
        </div>
    }
}

// ============================================================================
// Day Section
// ============================================================================

/// `Distance: 120 km • Travel: 3 hrs` with whole-number distances kept
/// whole.
pub fn travel_line(distance_km: f64, drive_time: &str) -> String {
    let distance = if distance_km.fract() == 0.0 {
        format!("{}", distance_km as i64)
    } else {
        format!("{distance_km}")
    };
    format!("Distance: {distance} km • Travel: {drive_time}")
}

#[component]
fn ActivitySlot(#[prop(into)] label: String, #[prop(into)] text: String) -> impl IntoView {
    view! {
        <div>
            <div class="text-xs font-bold uppercase tracking-wider text-orange-600 mb-1">
                {label}
            </div>
            <p class="text-stone-700">{text}</p>
        </div>
    }
}

#[component]
fn PlaceList(#[prop(into)] title: String, items: Vec<String>) -> impl IntoView {
    (!items.is_empty()).then(|| {
        view! {
            <div>
                <h4 class="text-sm font-bold text-stone-700 mb-1">{title}</h4>
                <ul class="text-sm text-stone-600 list-disc list-inside space-y-0.5">
                    {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                </ul>
            </div>
        }
    })
}

#[component]
fn InfoCard(
    icon: phosphor_leptos::IconData,
    #[prop(into)] title: String,
    #[prop(into)] text: String,
) -> impl IntoView {
    view! {
        <div class="bg-stone-50 rounded-lg p-3 flex gap-2.5">
            <div class="text-orange-600 mt-0.5">
                <Icon icon=icon size="16px" />
            </div>
            <div>
                <div class="text-xs font-bold text-stone-700">{title}</div>
                <p class="text-sm text-stone-600">{text}</p>
            </div>
        </div>
    }
}

#[component]
pub fn DaySection(
    day: Day,
    /// 1-based position in the itinerary, used for gallery asset paths.
    day_number: usize,
    #[prop(into)] itinerary_id: String,
    #[prop(into)] base_path: String,
) -> impl IntoView {
    let has_travel = day.distance_km > 0.0 || !day.drive_time.is_empty();
    let travel = travel_line(day.distance_km, &day.drive_time);

    let gallery: Vec<_> = day
        .gallery_queries
        .iter()
        .enumerate()
        .map(|(i, query)| {
            let src = gallery_image_src(&base_path, &itinerary_id, day_number, i + 1);
            (src, query.clone())
        })
        .collect();

    view! {
        <section class="bg-white rounded-xl shadow-md p-6 space-y-5 fade-in">
            <div>
                <h2 class="text-2xl font-bold text-stone-800">{day.day.clone()}</h2>
                <p class="text-sm text-orange-700 font-medium mt-0.5">{day.theme.clone()}</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <ActivitySlot label="Morning" text=day.morning.clone() />
                <ActivitySlot label="Afternoon" text=day.afternoon.clone() />
                <ActivitySlot label="Evening" text=day.evening.clone() />
            </div>

            {has_travel.then(|| {
                view! { <p class="text-sm text-stone-500">{travel.clone()}</p> }
            })}

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <PlaceList title="Must See" items=day.must_see.clone() />
                <PlaceList title="If You Have Time" items=day.optional.clone() />
            </div>

            {day.food.clone().map(|food| {
                view! { <InfoCard icon=FORK_KNIFE title="Where to Eat" text=food /> }
            })}
            {day.hotels.clone().map(|hotels| {
                view! { <InfoCard icon=BED title="Where to Stay" text=hotels /> }
            })}

            {(!day.tips.is_empty()).then(|| {
                view! {
                    <div class="bg-orange-50 rounded-lg p-4">
                        <h4 class="text-sm font-bold text-orange-800 mb-1">"Tips"</h4>
                        <ul class="text-sm text-orange-900 list-disc list-inside space-y-0.5">
                            {day.tips
                                .iter()
                                .map(|tip| view! { <li>{tip.clone()}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                }
            })}

            {(!day.interesting_facts.is_empty()).then(|| {
                view! {
                    <details class="group">
                        <summary class="text-sm font-bold text-stone-700 cursor-pointer select-none">
                            "Interesting Facts"
                        </summary>
                        <ul class="mt-2 text-sm text-stone-600 list-disc list-inside space-y-0.5">
                            {day.interesting_facts
                                .iter()
                                .map(|fact| view! { <li>{fact.clone()}</li> })
                                .collect_view()}
                        </ul>
                    </details>
                }
            })}

            {(!gallery.is_empty()).then(|| {
                view! {
                    <div class="grid grid-cols-2 md:grid-cols-3 gap-3">
                        {gallery
                            .into_iter()
                            .map(|(src, query)| {
                                view! {
                                    <figure class="rounded-lg overflow-hidden bg-stone-100">
                                        <FallbackImage
                                            src=src
                                            query=query.clone()
                                            alt=query.clone()
                                            width=400
                                            height=300
                                            class="w-full aspect-[4/3] object-cover"
                                        />
                                        <figcaption class="px-2 py-1 text-xs text-stone-500 capitalize">
                                            {query}
                                        </figcaption>
                                    </figure>
                                }
                            })
                            .collect_view()}
                    </div>
                }
            })}
        </section>
    }
}

// ============================================================================
// Page Controller
// ============================================================================

/// All day sections for one itinerary, in order.
#[component]
pub fn DayList(itinerary: Itinerary, #[prop(into)] base_path: String) -> impl IntoView {
    let itinerary_id = itinerary.id.clone();
    view! {
        <div class="space-y-8">
            {itinerary
                .days
                .into_iter()
                .enumerate()
                .map(|(i, day)| {
                    view! {
                        <DaySection
                            day=day
                            day_number=i + 1
                            itinerary_id=itinerary_id.clone()
                            base_path=base_path.clone()
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Itinerary page controller, mounted into the root container. The
/// sidebar container is filled once the record is found; an unknown id
/// leaves it empty and renders only the not-found notice.
#[component]
pub fn ItineraryPage(
    #[prop(into)] base_path: String,
    #[prop(into)] itinerary_id: String,
    sidebar_host: web_sys::HtmlElement,
) -> impl IntoView {
    let is_loading = RwSignal::new(true);
    let error = RwSignal::new(Option::<DataError>::None);
    let itinerary = RwSignal::new(Option::<Itinerary>::None);

    let fetch_base = base_path.clone();
    let wanted_id = itinerary_id.clone();
    spawn_local(async move {
        match fetch_itineraries(&fetch_base).await {
            Ok(doc) => match doc.find_itinerary(&wanted_id) {
                Some(found) => {
                    log::info!("itinerary '{}': {} days", found.id, found.days.len());
                    set_document_title(&found.title);
                    mount_to(sidebar_host.clone(), {
                        let sidebar = found.clone();
                        let sidebar_base = fetch_base.clone();
                        move || view! { <SidebarView itinerary=sidebar base_path=sidebar_base /> }
                    })
                    .forget();
                    itinerary.set(Some(found.clone()));
                }
                None => {
                    log::warn!("itinerary '{wanted_id}' not in document");
                    error.set(Some(DataError::NotFound {
                        what: "itinerary",
                        key: wanted_id.clone(),
                    }));
                }
            },
            Err(err) => {
                log::error!("failed to load itineraries: {err}");
                error.set(Some(err));
            }
        }
        is_loading.set(false);
    });

    Effect::new(move |_| {
        if !is_loading.get() && itinerary.get().is_some() {
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
                        view! { <p class="text-center py-16 text-stone-500">"Itinerary not found."</p> }
                            .into_any()
                    }
                    other => {
                        let url = match &other {
                            DataError::Network { url, .. }
                            | DataError::Http { url, .. }
                            | DataError::Parse { url, .. } => Some(url.clone()),
                            DataError::NotFound { .. } => None,
                        };
                        match url {
                            Some(u) => view! {
                                <ErrorPanel
                                    title="Could not load this itinerary"
                                    message=other.to_string()
                                    url=u
                                />
                            }
                                .into_any(),
                            None => view! {
                                <ErrorPanel
                                    title="Could not load this itinerary"
                                    message=other.to_string()
                                />
                            }
                                .into_any(),
                        }
                    }
                }
            } else if let Some(found) = itinerary.get() {
                view! { <DayList itinerary=found base_path=list_base.clone() /> }.into_any()
            } else {
                view! { <LoadingSpinner size="lg" /> }.into_any()
            }
        }}
    }
}

fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(&format!("{title} — DesiTrails"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_travel_line_whole_kilometres() {
        assert_eq!(travel_line(120.0, "3 hrs"), "Distance: 120 km • Travel: 3 hrs");
    }

    #[test]
    fn test_travel_line_fractional_kilometres() {
        assert_eq!(
            travel_line(12.5, "45 min"),
            "Distance: 12.5 km • Travel: 45 min"
        );
    }
}
