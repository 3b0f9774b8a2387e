//! Mount-time wiring of the scroll listener and reveal observer.

use leptos::prelude::*;
use tracing::warn;
use wasm_bindgen::JsValue;

use crate::dom::{self, PageSubscriptions, RevealObserver, ScrollListener, describe_js_error};
use crate::page::{PageContext, use_page};

/// Keeps the tracker in sync with the viewport while mounted.
#[component]
#[allow(clippy::unused_unit)]
pub fn ScrollTracking() -> impl IntoView {
    let page = use_page();
    let subscriptions = StoredValue::new_local(None::<PageSubscriptions>);

    // Runs after the sections are mounted, so every NodeRef is bound.
    Effect::new(move |_| match subscribe(page) {
        Ok(subs) => subscriptions.set_value(Some(subs)),
        Err(e) => warn!("section tracking disabled: {}", describe_js_error(&e)),
    });

    on_cleanup(move || {
        // Detach before the section nodes are unmounted, not at owner disposal.
        subscriptions.try_update_value(|subs| {
            subs.take();
        });
    });

    view! {}
}

fn subscribe(page: PageContext) -> Result<PageSubscriptions, JsValue> {
    let tracker = page.tracker;
    let anchors = page.anchors;
    let threshold = page.config.with_value(|c| c.reveal_threshold);

    let on_scroll = move |scroll_y: f64| {
        tracker.maybe_update(|t| {
            let was_scrolled = t.scrolled();
            let moved = t.recompute(scroll_y, &anchors);
            moved || was_scrolled != t.scrolled()
        });
    };

    let scroll = ScrollListener::attach(on_scroll)?;
    let reveal = RevealObserver::observe(&anchors, threshold, move |section| {
        tracker.maybe_update(|t| t.mark_revealed(section));
    })?;

    // Sync once without waiting for the first scroll event.
    on_scroll(dom::scroll_y());

    Ok(PageSubscriptions::new(scroll, reveal))
}
