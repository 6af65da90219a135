//! Small display helpers shared across the page components.

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Join route stops into the arrow breadcrumb shown in the sidebar.
pub fn route_breadcrumb(route: &[String]) -> String {
    route.join(" → ")
}

/// Current year from the browser clock, for the footer stamp.
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
