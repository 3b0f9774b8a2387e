use leptos::prelude::*;

use crate::content::{BRAND, EMAIL, GITHUB, LINKEDIN, OWNER};
use crate::page::use_page;

#[component]
pub fn Footer() -> impl IntoView {
    let page = use_page();
    let link = move || format!("transition-colors hover:text-blue-500 {}", page.pick("text-gray-400", "text-gray-600"));

    view! {
        <footer class=move || format!(
            "py-12 px-6 border-t {}",
            page.pick("border-gray-800 bg-gray-900/50", "border-gray-200 bg-white/50"),
        )>
            <div class="max-w-7xl mx-auto text-center">
                <div class="text-2xl font-bold bg-gradient-to-r from-blue-500 via-purple-500 to-pink-500 bg-clip-text text-transparent mb-2">
                    {BRAND}
                </div>
                <p class=move || page.pick("text-gray-400 mb-6", "text-gray-600 mb-6")>
                    "Building the web, one project at a time"
                </p>
                <div class="flex justify-center gap-6 mb-6">
                    <a href=GITHUB target="_blank" rel="noopener noreferrer" class=link>"GitHub"</a>
                    <a href=LINKEDIN target="_blank" rel="noopener noreferrer" class=link>"LinkedIn"</a>
                    <a href=format!("mailto:{EMAIL}") class=link>"Email"</a>
                </div>
                <p class=move || page.pick("text-sm text-gray-500", "text-sm text-gray-600")>
                    {format!("© 2025 {OWNER}. Built with Rust & Leptos")}
                </p>
            </div>
        </footer>
    }
}
