//! Page detection and boot.
//!
//! The site is multi-document: each HTML shell carries the DOM hooks of
//! exactly one page. `boot` probes the current document for those hooks
//! and mounts the matching controller.

use crate::components::home::HomePage;
use crate::components::itinerary::ItineraryPage;
use crate::components::state_page::StatePage;
use crate::services::resolve_base_path;
use crate::utils::formatting::current_year;
use leptos::mount::mount_to;
use leptos::prelude::*;
use thiserror::Error;
use url::Url;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlBaseElement, HtmlElement, HtmlImageElement};

#[derive(Debug, Error)]
pub enum PageError {
    #[error("required element #{id} is missing")]
    MissingElement { id: &'static str },
}

/// Which page the current shell is, judged by its hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Home,
    State,
    Itinerary,
}

pub fn detect_page(document: &Document) -> Option<PageKind> {
    if document.get_element_by_id("itinerary-root").is_some() {
        Some(PageKind::Itinerary)
    } else if document.get_element_by_id("routes").is_some() {
        Some(PageKind::State)
    } else if document.get_element_by_id("state-grid").is_some() {
        Some(PageKind::Home)
    } else {
        None
    }
}

/// Mount the controller for the detected page. Documents without any
/// known hook are left untouched.
pub fn boot(document: &Document) -> Result<(), PageError> {
    stamp_year(document);

    let Some(kind) = detect_page(document) else {
        log::info!("no page hooks in this document");
        return Ok(());
    };

    let base_path = resolve_from_document(document);
    log::info!("booting {kind:?} page with base path '{base_path}'");

    match kind {
        PageKind::Home => {
            let grid = require_host(document, "state-grid")?;
            mount_to(grid, move || view! { <HomePage base_path=base_path /> }).forget();
        }
        PageKind::State => {
            let routes = require_host(document, "routes")?;
            let themes = require_host(document, "themes")?;
            let hero_img = document
                .get_element_by_id("hero-img")
                .and_then(|el| el.dyn_into::<HtmlImageElement>().ok());
            let slug = selected_state_slug(document);
            mount_to(routes, move || {
                view! {
                    <StatePage
                        base_path=base_path
                        slug=slug
                        themes_host=themes
                        hero_img=hero_img
                    />
                }
            })
            .forget();
        }
        PageKind::Itinerary => {
            let root = require_host(document, "itinerary-root")?;
            let sidebar = require_host(document, "itinerary-sidebar")?;
            let id = selected_itinerary_id(document);
            mount_to(root, move || {
                view! {
                    <ItineraryPage
                        base_path=base_path
                        itinerary_id=id
                        sidebar_host=sidebar
                    />
                }
            })
            .forget();
        }
    }

    Ok(())
}

fn require_host(document: &Document, id: &'static str) -> Result<HtmlElement, PageError> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or(PageError::MissingElement { id })
}

/// Resolve the base path from the live document: `<base href>` first,
/// then the location.
fn resolve_from_document(document: &Document) -> String {
    // The DOM property resolves relative hrefs against the document URL,
    // so the resolver always sees an absolute URL here.
    let base_href = document
        .query_selector("base")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlBaseElement>().ok())
        .map(|base| base.href())
        .filter(|href| !href.is_empty());

    let (path, hostname) = match web_sys::window().map(|w| w.location()) {
        Some(location) => (
            location.pathname().unwrap_or_default(),
            location.hostname().unwrap_or_default(),
        ),
        None => (String::new(), String::new()),
    };

    resolve_base_path(base_href.as_deref(), &path, &hostname)
}

/// State slug precedence: `?state=` query param, then `data-state` on
/// `<body>`, then the flagship state.
fn selected_state_slug(document: &Document) -> String {
    if let Some(value) = query_param("state") {
        return value;
    }
    if let Some(value) = body_data(document, "state") {
        return value;
    }
    "kerala".to_string()
}

/// Itinerary id precedence: `data-itinerary-id` on `<body>`, then `?id=`.
fn selected_itinerary_id(document: &Document) -> String {
    if let Some(value) = body_data(document, "itineraryId") {
        return value;
    }
    query_param("id").unwrap_or_default()
}

fn query_param(name: &str) -> Option<String> {
    let href = web_sys::window()?.location().href().ok()?;
    let parsed = Url::parse(&href).ok()?;
    parsed
        .query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

fn body_data(document: &Document, key: &str) -> Option<String> {
    document
        .body()?
        .dataset()
        .get(key)
        .filter(|value| !value.is_empty())
}

/// Footer year stamp; shells without the hook are fine.
fn stamp_year(document: &Document) {
    if let Some(el) = document.get_element_by_id("year") {
        el.set_text_content(Some(&current_year().to_string()));
    }
}
