//! Scroll-triggered reveal for `.fade-in` elements.
//!
//! An IntersectionObserver adds the `show` class the first time an
//! element enters the viewport and then stops watching it. The reveal
//! is one-shot; scrolling back up never hides content again.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Watch every `.fade-in` element in the document.
///
/// Call after the page content has been mounted; elements added later
/// are not picked up.
pub fn observe_fade_ins(document: &Document) {
    let Ok(elements) = document.query_selector_all(".fade-in") else {
        return;
    };
    if elements.length() == 0 {
        return;
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1("show");
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    // Trigger slightly before elements fully reach the viewport bottom.
    options.set_root_margin("0px 0px -50px 0px");

    let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return;
    };

    for i in 0..elements.length() {
        if let Some(node) = elements.item(i) {
            if let Ok(element) = node.dyn_into::<web_sys::Element>() {
                observer.observe(&element);
            }
        }
    }

    // The observer lives for the page; leak the callback with it.
    callback.forget();
}
