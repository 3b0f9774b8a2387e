// Portfolio — Leptos 0.8 Edition
// Atharv Pitrubhakta (c)2025

mod content;
mod dom;
mod logging;
mod page;
mod relay;
mod sections;

use leptos::prelude::*;
use portfolio_core::PortfolioConfig;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let page = page::provide_page(PortfolioConfig::from_build_env());

    view! {
        <div class=move || page.theme.get().pick(
            "min-h-screen transition-colors duration-500 bg-gradient-to-br from-gray-900 via-gray-900 to-gray-800 text-white",
            "min-h-screen transition-colors duration-500 bg-gradient-to-br from-gray-50 via-blue-50 to-purple-50 text-gray-900",
        )>
            <ScrollTracking />
            <Backdrop />
            <Nav />
            <main>
                <Summary />
                <Skills />
                <Experience />
                <Education />
                <Projects />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}
