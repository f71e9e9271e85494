use dioxus::prelude::*;

use crate::config::site_config;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollToOptions};

/// Selector for an in-page link target, e.g. `#about`. Bare `#` and
/// anything that is not a fragment link yield `None`.
pub fn anchor_target(href: &str) -> Option<&str> {
    let name = href.strip_prefix('#')?;
    if name.trim().is_empty() {
        return None;
    }
    Some(href)
}

/// Scroll position that puts a target just below the fixed navigation bar.
pub fn scroll_top_for(offset_top: f64, nav_offset: f64) -> f64 {
    offset_top - nav_offset
}

/// Smoothly scroll to the element matching `href`; unknown targets are ignored.
#[cfg(target_arch = "wasm32")]
pub fn scroll_to_anchor(href: &str, nav_offset: f64) -> bool {
    let Some(selector) = anchor_target(href) else {
        return false;
    };
    let Some(win) = window() else {
        return false;
    };
    let Some(target) = win
        .document()
        .and_then(|doc| doc.query_selector(selector).ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return false;
    };

    let options = ScrollToOptions::new();
    options.set_top(scroll_top_for(target.offset_top() as f64, nav_offset));
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
    true
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to_anchor(_href: &str, _nav_offset: f64) -> bool {
    false
}

/// In-page link that scrolls instead of jumping.
#[component]
pub fn NavLink(href: String, class: String, children: Element) -> Element {
    let target = href.clone();
    rsx! {
        a {
            href: "{href}",
            class: "{class}",
            onclick: move |evt: MouseEvent| {
                if anchor_target(&target).is_some() {
                    evt.prevent_default();
                    scroll_to_anchor(&target, site_config().nav_offset_px);
                }
            },
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_links_resolve_to_selectors() {
        assert_eq!(anchor_target("#music"), Some("#music"));
        assert_eq!(anchor_target("#contact-form"), Some("#contact-form"));
    }

    #[test]
    fn bare_hash_and_external_links_are_ignored() {
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("# "), None);
        assert_eq!(anchor_target("/thank-you"), None);
        assert_eq!(anchor_target("https://example.com/#top"), None);
    }

    #[test]
    fn scroll_target_clears_fixed_nav() {
        assert_eq!(scroll_top_for(1200.0, 80.0), 1120.0);
        assert_eq!(scroll_top_for(40.0, 80.0), -40.0);
    }
}
