//! Image element with a one-shot placeholder fallback.

use crate::services::images::fallback_image_url;
use leptos::prelude::*;

/// `<img>` that starts at a local asset URL and swaps to a seeded
/// placeholder the first time the browser reports a load error. The
/// swap happens at most once, so a broken placeholder cannot loop.
#[component]
pub fn FallbackImage(
    /// Local asset URL to try first.
    #[prop(into)]
    src: String,
    /// Search query seeding the placeholder.
    #[prop(into)]
    query: String,
    #[prop(into)] alt: String,
    #[prop(default = 800)] width: u32,
    #[prop(default = 600)] height: u32,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let current_src = RwSignal::new(src);
    let swapped = RwSignal::new(false);
    let fallback = fallback_image_url(&query, width, height);

    let handle_error = move |_: web_sys::ErrorEvent| {
        if !swapped.get_untracked() {
            swapped.set(true);
            current_src.set(fallback.clone());
        }
    };

    view! {
        <img
            src=move || current_src.get()
            alt=alt
            loading="lazy"
            class=class
            on:error=handle_error
        />
    }
}
