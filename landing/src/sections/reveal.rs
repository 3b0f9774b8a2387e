use leptos::prelude::*;
use portfolio_core::section::SectionId;

use crate::page::use_page;

const REVEALED: &str = "transition-all duration-1000 opacity-100 translate-y-0";
const HIDDEN: &str = "transition-all duration-1000 opacity-0 translate-y-10";

/// Entrance-animation classes for a section body.
pub fn reveal_class(revealed: bool) -> &'static str {
    if revealed { REVEALED } else { HIDDEN }
}

/// `<section>` bound to the tracker: carries the DOM id the observer
/// reports, registers its `NodeRef`, and fades its body in once revealed.
#[component]
pub fn RevealSection(
    id: SectionId,
    #[prop(into)] class: Signal<String>,
    #[prop(into, optional)] inner_class: String,
    children: Children,
) -> impl IntoView {
    let page = use_page();
    let inner = move || format!("{inner_class} {}", reveal_class(page.is_revealed(id)));

    view! {
        <section id=id.as_str() node_ref=page.anchors.get(id) class=move || class.get()>
            <div class=inner>{children()}</div>
        </section>
    }
}

/// Gradient section heading with a subtitle.
#[component]
pub fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    let page = use_page();
    view! {
        <div class="text-center mb-16">
            <h2 class="text-4xl md:text-5xl font-bold mb-4">
                <span class="bg-gradient-to-r from-blue-500 to-purple-500 bg-clip-text text-transparent">
                    {title}
                </span>
            </h2>
            <p class=move || format!("text-lg {}", page.pick("text-gray-400", "text-gray-600"))>
                {subtitle}
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_class_toggles_opacity() {
        assert!(reveal_class(true).contains("opacity-100"));
        assert!(reveal_class(false).contains("opacity-0"));
        assert!(reveal_class(false).contains("translate-y-10"));
    }
}
