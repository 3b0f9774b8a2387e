//! Browser subscriptions behind the section tracker.
//!
//! Both subscriptions are RAII guards: dropping [`ScrollListener`] removes
//! the window listener and dropping [`RevealObserver`] disconnects the
//! observer, so no callback can outlive the page state it writes to.

use leptos::html;
use leptos::prelude::*;
use portfolio_core::section::{SectionAnchors, SectionBounds, SectionId};
use tracing::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior,
    ScrollIntoViewOptions, Window,
};

/// One `NodeRef` per section, in document order.
#[derive(Clone, Copy)]
pub struct SectionRefs([NodeRef<html::Section>; SectionId::COUNT]);

impl Default for SectionRefs {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionRefs {
    pub fn new() -> Self {
        Self(std::array::from_fn(|_| NodeRef::new()))
    }

    /// Ref to bind on the section element.
    pub fn get(&self, section: SectionId) -> NodeRef<html::Section> {
        self.0[section.index()]
    }

    /// Mounted element, read without subscribing.
    pub fn element(&self, section: SectionId) -> Option<web_sys::HtmlElement> {
        self.0[section.index()].get_untracked()
    }
}

impl SectionAnchors for SectionRefs {
    fn bounds(&self, section: SectionId) -> Option<SectionBounds> {
        self.element(section).map(|el| {
            let rect = el.get_bounding_client_rect();
            SectionBounds::new(rect.top(), rect.bottom())
        })
    }
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

/// Current vertical scroll offset, 0 when unavailable.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or_default()
}

/// Smooth-scroll a section into view. No-op before mount.
pub fn scroll_into_view(refs: &SectionRefs, section: SectionId) {
    if let Some(el) = refs.element(section) {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

/// Window `scroll` listener, removed on drop.
pub struct ScrollListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    /// Call `on_scroll` with the scroll offset on every scroll event.
    pub fn attach(mut on_scroll: impl FnMut(f64) + 'static) -> Result<Self, JsValue> {
        let window = window()?;
        let callback = Closure::<dyn FnMut()>::new(move || on_scroll(scroll_y()));
        window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())?;
        Ok(Self { window, callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
        debug!("scroll listener removed");
    }
}

/// `IntersectionObserver` over every mounted section, disconnected on drop.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl RevealObserver {
    /// Call `on_reveal` whenever at least `threshold` of a section becomes
    /// visible. Entries for unknown element ids are skipped.
    pub fn observe(
        refs: &SectionRefs,
        threshold: f64,
        on_reveal: impl FnMut(SectionId) + 'static,
    ) -> Result<Self, JsValue> {
        let reveal = Self::new(threshold, on_reveal)?;
        for section in SectionId::ALL {
            if let Some(el) = refs.element(section) {
                reveal.watch(&el);
            }
        }
        Ok(reveal)
    }

    fn new(
        threshold: f64,
        mut on_reveal: impl FnMut(SectionId) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if let Some(section) =
                        revealed_section(entry.is_intersecting(), &entry.target().id())
                    {
                        on_reveal(section);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    fn watch(&self, el: &Element) {
        self.observer.observe(el);
    }
}

/// Section an intersection entry reveals, if any.
fn revealed_section(is_intersecting: bool, id: &str) -> Option<SectionId> {
    if !is_intersecting {
        return None;
    }
    match id.parse() {
        Ok(section) => Some(section),
        Err(e) => {
            debug!("ignoring intersection: {e}");
            None
        }
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
        debug!("reveal observer disconnected");
    }
}

/// Both tracker subscriptions, released together.
pub struct PageSubscriptions {
    _scroll: ScrollListener,
    _reveal: RevealObserver,
}

impl PageSubscriptions {
    pub fn new(scroll: ScrollListener, reveal: RevealObserver) -> Self {
        Self {
            _scroll: scroll,
            _reveal: reveal,
        }
    }
}

/// Human-readable text for a thrown JS value.
pub fn describe_js_error(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_leaving_view_is_ignored() {
        assert_eq!(revealed_section(false, "skills"), None);
    }

    #[test]
    fn test_entry_with_unknown_id_is_ignored() {
        assert_eq!(revealed_section(true, "newsletter"), None);
        assert_eq!(revealed_section(true, ""), None);
        assert_eq!(revealed_section(true, "Skills"), None);
    }

    #[test]
    fn test_intersecting_section_is_revealed() {
        assert_eq!(revealed_section(true, "skills"), Some(SectionId::Skills));
        assert_eq!(revealed_section(true, "contact"), Some(SectionId::Contact));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn dispatch_scroll() {
        let event = web_sys::Event::new("scroll").unwrap();
        web_sys::window().unwrap().dispatch_event(&event).unwrap();
    }

    async fn sleep(ms: i32) {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            web_sys::window()
                .unwrap()
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                .unwrap();
        });
        JsFuture::from(promise).await.unwrap();
    }

    /// Visible block at the top of the page carrying a section id.
    fn mounted_block(id: &str) -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let el = document.create_element("div").unwrap();
        el.set_id(id);
        el.set_attribute("style", "height: 200px; width: 200px;").unwrap();
        document.body().unwrap().append_child(&el).unwrap();
        el
    }

    #[wasm_bindgen_test]
    fn test_scroll_listener_stops_after_drop() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let listener = ScrollListener::attach(move |_| counter.set(counter.get() + 1)).unwrap();

        dispatch_scroll();
        assert_eq!(calls.get(), 1);

        drop(listener);
        dispatch_scroll();
        assert_eq!(calls.get(), 1);
    }

    #[wasm_bindgen_test]
    async fn test_reveal_observer_reports_visible_section() {
        let el = mounted_block("skills");
        let seen = Rc::new(Cell::new(None));
        let sink = seen.clone();
        let reveal = RevealObserver::new(0.1, move |section| sink.set(Some(section))).unwrap();
        reveal.watch(&el);

        sleep(300).await;
        assert_eq!(seen.get(), Some(SectionId::Skills));

        drop(reveal);
        el.remove();
    }

    #[wasm_bindgen_test]
    async fn test_reveal_observer_silent_after_drop() {
        let el = mounted_block("projects");
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let reveal = RevealObserver::new(0.1, move |_| counter.set(counter.get() + 1)).unwrap();
        reveal.watch(&el);
        drop(reveal);

        sleep(300).await;
        assert_eq!(calls.get(), 0);
        el.remove();
    }
}
