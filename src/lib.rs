#![allow(non_snake_case)]

pub mod app;
pub mod components;
pub mod data;
pub mod services;
pub mod utils;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    // Panic messages go to the console instead of "unreachable executed".
    console_error_panic_hook::set_once();

    web_sys::console::log_1(&"Starting DesiTrails".into());

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    // Remove the static loading placeholder now that the module is live.
    if let Some(loader) = document.get_element_by_id("app-loading") {
        loader.remove();
    }

    if let Err(err) = app::boot(&document) {
        log::error!("boot failed: {err}");
    }
}
