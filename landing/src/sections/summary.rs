use leptos::prelude::*;
use portfolio_core::rotation::RoleRotation;
use portfolio_core::section::SectionId;
use tracing::warn;

use super::reveal::RevealSection;
use crate::content::{OWNER, RESUME, ROLES, STATS};
use crate::dom::describe_js_error;
use crate::page::use_page;

#[component]
pub fn Summary() -> impl IntoView {
    let page = use_page();
    let rotation = RwSignal::new(RoleRotation::new(ROLES));
    let interval = page.config.with_value(|c| c.role_interval);

    match set_interval_with_handle(move || rotation.update(RoleRotation::advance), interval) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => warn!("role rotation disabled: {}", describe_js_error(&e)),
    }

    view! {
        <RevealSection
            id=SectionId::Summary
            class=Signal::derive(|| {
                "min-h-screen flex items-center justify-center px-6 pt-24 pb-4 relative".to_string()
            })
            inner_class="max-w-5xl mx-auto text-center"
        >
            <h1 class="text-5xl md:text-7xl font-bold mb-6 animate-fadeInUp">
                "Hi, I'm "
                <span class="bg-gradient-to-r from-blue-500 via-purple-500 to-pink-500 bg-clip-text text-transparent animate-gradient">
                    {OWNER}
                </span>
            </h1>

            <div class="text-2xl md:text-3xl mb-6 font-semibold h-8 md:h-10 flex justify-center items-center">
                // Keyed on the role so the fade-in replays on every change
                {move || {
                    let role = rotation.with(|r| r.current());
                    view! {
                        <span class="bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent animate-fadeIn">
                            {role}
                        </span>
                    }
                }}
            </div>

            <p class=move || format!(
                "text-lg md:text-xl mb-8 max-w-3xl mx-auto leading-relaxed {}",
                page.pick("text-gray-300", "text-gray-700"),
            )>
                "Passionate about crafting elegant solutions to complex problems. I specialize in building "
                <span class="font-semibold text-blue-500">"scalable web applications"</span>
                " with "
                <span class="font-semibold text-purple-500">"modern technologies"</span>
                " and "
                <span class="font-semibold text-pink-500">"beautiful user interfaces"</span>
                ". With around 1 year of experience, I turn ideas into reality through clean code and creative design."
            </p>

            <div class="flex flex-wrap justify-center gap-4 mb-8">
                {STATS
                    .iter()
                    .map(|stat| view! {
                        <div class=move || format!(
                            "px-6 py-3 rounded-full shadow-lg {}",
                            page.pick("bg-gray-800", "bg-white"),
                        )>
                            <span class=format!("{} font-bold text-xl", stat.accent)>{stat.value}</span>
                            <span class=move || format!("ml-2 {}", page.pick("text-gray-400", "text-gray-600"))>
                                {stat.label}
                            </span>
                        </div>
                    })
                    .collect_view()}
            </div>

            <div class="flex flex-wrap justify-center gap-4">
                <button
                    class="group bg-gradient-to-r from-blue-500 to-purple-500 text-white px-8 py-4 rounded-lg text-lg font-semibold hover:shadow-2xl transition-all duration-300 inline-flex items-center gap-2 hover:scale-105"
                    on:click=move |_| page.scroll_to(SectionId::Projects)
                >
                    "View Projects →"
                </button>
                <a
                    href=RESUME
                    target="_blank"
                    rel="noopener noreferrer"
                    class=move || format!(
                        "px-8 py-4 rounded-lg text-lg font-semibold transition-all duration-300 inline-flex items-center gap-2 hover:scale-105 border-2 {}",
                        page.pick("bg-gray-800 hover:bg-gray-700 border-gray-700", "bg-white hover:bg-gray-50 border-gray-300"),
                    )
                >
                    "Download CV"
                </a>
            </div>
        </RevealSection>
    }
}
