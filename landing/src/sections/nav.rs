use leptos::prelude::*;
use portfolio_core::section::SectionId;
use portfolio_core::theme::Theme;

use crate::content::BRAND;
use crate::page::use_page;

/// Outer nav classes: transparent at the top, solid once scrolled.
pub fn nav_class(scrolled: bool, theme: Theme) -> String {
    let surface = match (scrolled, theme) {
        (false, _) => "",
        (true, Theme::Dark) => "bg-gray-900/90 backdrop-blur-lg shadow-2xl border-b border-gray-800",
        (true, Theme::Light) => "bg-white/90 backdrop-blur-lg shadow-2xl border-b border-gray-200",
    };
    format!("fixed top-0 w-full z-50 transition-all duration-500 {surface}")
}

/// Nav button classes; the active section gets the gradient pill.
pub fn item_class(active: bool, theme: Theme, mobile: bool) -> String {
    let layout = if mobile {
        "w-full px-4 py-3 rounded-lg transition-all duration-300 flex items-center gap-3"
    } else {
        "px-4 py-2 rounded-lg transition-all duration-300 flex items-center gap-2"
    };
    let state = if active {
        "bg-gradient-to-r from-blue-500 to-purple-500 text-white shadow-lg"
    } else if mobile {
        theme.pick("text-gray-300 hover:bg-gray-700", "text-gray-600 hover:bg-gray-100")
    } else {
        theme.pick("text-gray-300 hover:bg-gray-800", "text-gray-600 hover:bg-gray-100")
    };
    format!("{layout} {state}")
}

#[component]
pub fn Nav() -> impl IntoView {
    let page = use_page();
    let scrolled = move || page.tracker.with(|t| t.scrolled());

    view! {
        <nav class=move || nav_class(scrolled(), page.theme.get())>
            <div class="max-w-7xl mx-auto px-6 py-4">
                <div class="flex justify-between items-center">
                    <div
                        class="text-2xl font-bold bg-gradient-to-r from-blue-500 via-purple-500 to-pink-500 bg-clip-text text-transparent animate-gradient cursor-pointer"
                        on:click=move |_| page.scroll_to(SectionId::Summary)
                    >
                        {BRAND}
                    </div>

                    <div class="hidden md:flex items-center space-x-1">
                        {SectionId::ALL
                            .into_iter()
                            .map(|id| view! { <NavItem id=id mobile=false /> })
                            .collect_view()}
                    </div>

                    <div class="flex items-center gap-3">
                        <button
                            class=move || format!(
                                "p-2 rounded-lg transition-all duration-300 {}",
                                page.pick("bg-gray-800 hover:bg-gray-700", "bg-gray-200 hover:bg-gray-300"),
                            )
                            aria-label="Toggle theme"
                            on:click=move |_| page.theme.update(|t| *t = t.toggled())
                        >
                            {move || page.pick("☀", "☾")}
                        </button>
                        <button
                            class=move || format!("md:hidden p-2 rounded-lg {}", page.pick("bg-gray-800", "bg-gray-200"))
                            aria-label="Toggle menu"
                            on:click=move |_| page.menu_open.update(|o| *o = !*o)
                        >
                            {move || if page.menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>

                // Mobile drawer
                <Show when=move || page.menu_open.get()>
                    <div class=move || format!(
                        "md:hidden mt-4 pb-4 space-y-2 animate-slideDown rounded-lg p-4 {}",
                        page.pick("bg-gray-800", "bg-white"),
                    )>
                        {SectionId::ALL
                            .into_iter()
                            .map(|id| view! { <NavItem id=id mobile=true /> })
                            .collect_view()}
                    </div>
                </Show>
            </div>
        </nav>
    }
}

#[component]
fn NavItem(id: SectionId, mobile: bool) -> impl IntoView {
    let page = use_page();
    view! {
        <button
            class=move || item_class(page.is_active(id), page.theme.get(), mobile)
            on:click=move |_| page.scroll_to(id)
        >
            <span class="text-sm font-medium">{id.label()}</span>
        </button>
    }
}
