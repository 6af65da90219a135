//! Shared building blocks used by every page.

use leptos::prelude::*;

// ============================================================================
// Loading Spinner
// ============================================================================

#[component]
pub fn LoadingSpinner(
    #[prop(into, default = "md".to_string())] size: String,
) -> impl IntoView {
    let size_class = match size.as_str() {
        "sm" => "w-4 h-4",
        "lg" => "w-10 h-10",
        _ => "w-6 h-6",
    };

    view! {
        <div class="flex justify-center py-16">
            <div class=format!(
                "animate-spin rounded-full border-2 border-stone-300 border-t-orange-600 {}",
                size_class,
            )></div>
        </div>
    }
}

// ============================================================================
// Error Panel
// ============================================================================

/// Inline failure notice. Shown in place of the content that failed to
/// load; the attempted URL helps when the site is misconfigured under a
/// sub-path.
#[component]
pub fn ErrorPanel(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into, optional)] url: Option<String>,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-6 text-center fade-in show">
            <h3 class="text-lg font-bold text-red-800 mb-1">{title}</h3>
            <p class="text-sm text-red-700">{message}</p>
            {url.map(|u| {
                view! {
                    <p class="text-xs text-red-500 mt-2 font-mono break-all">{u}</p>
                }
            })}
        </div>
    }
}

// ============================================================================
// Empty State
// ============================================================================

#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="text-center py-16 bg-stone-50 rounded-xl border border-dashed border-stone-300">
            <p class="text-stone-500">{message}</p>
        </div>
    }
}

// ============================================================================
// Vibe Badge
// ============================================================================

/// Small tag describing a state's character, shown on cards.
#[component]
pub fn VibeBadge(#[prop(into)] vibe: String) -> impl IntoView {
    view! {
        <span class="inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-orange-100 text-orange-800">
            {vibe}
        </span>
    }
}
