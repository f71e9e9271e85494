//! Fade sections in the first time they scroll into view.

use crate::config::RevealConfig;

/// Inline style applied to a section once it becomes visible.
#[cfg(target_arch = "wasm32")]
const REVEALED_STYLE: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];

#[cfg(target_arch = "wasm32")]
const SECTION_SELECTOR: &str = "section";

#[cfg(target_arch = "wasm32")]
pub fn observe_sections(config: &RevealConfig) -> usize {
    use dioxus::logger::tracing::{info, warn};
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};
    use web_sys::{
        window, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
        IntersectionObserverInit,
    };

    let Some(document) = window().and_then(|w| w.document()) else {
        return 0;
    };

    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            if let Ok(section) = entry.target().dyn_into::<HtmlElement>() {
                let style = section.style();
                for (property, value) in REVEALED_STYLE {
                    let _ = style.set_property(property, value);
                }
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin);

    let observer = match IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(err) => {
            warn!("section reveal unavailable: {err:?}");
            return 0;
        }
    };
    callback.forget();

    let Ok(sections) = document.query_selector_all(SECTION_SELECTOR) else {
        return 0;
    };
    let mut observed = 0;
    for index in 0..sections.length() {
        if let Some(section) = sections
            .item(index)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        {
            observer.observe(&section);
            observed += 1;
        }
    }
    info!("observing {observed} section(s) for reveal");
    observed
}

#[cfg(not(target_arch = "wasm32"))]
pub fn observe_sections(_config: &RevealConfig) -> usize {
    0
}
