use leptos::prelude::*;

use crate::page::use_page;

/// Blurred color blobs drifting behind the page.
#[component]
pub fn Backdrop() -> impl IntoView {
    let page = use_page();
    let blob = move |position: &'static str, dark: &'static str, light: &'static str, delay: &'static str| {
        move || {
            format!(
                "absolute {position} w-72 h-72 {} rounded-full mix-blend-multiply filter blur-3xl opacity-20 animate-blob {delay}",
                page.pick(dark, light)
            )
        }
    };

    view! {
        <div class="fixed inset-0 overflow-hidden pointer-events-none">
            <div class=blob("top-20 left-10", "bg-blue-500", "bg-blue-300", "")></div>
            <div class=blob("top-40 right-10", "bg-purple-500", "bg-purple-300", "animation-delay-2000")></div>
            <div class=blob("bottom-20 left-1/2", "bg-pink-500", "bg-pink-300", "animation-delay-4000")></div>
        </div>
    }
}
