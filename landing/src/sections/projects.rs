use leptos::prelude::*;
use portfolio_core::section::SectionId;

use super::reveal::{RevealSection, SectionHeading};
use crate::content::{GITHUB, PROJECTS, Project};
use crate::page::use_page;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <RevealSection
            id=SectionId::Projects
            class=Signal::derive(|| "py-24 px-6 relative".to_string())
            inner_class="max-w-7xl mx-auto"
        >
            <SectionHeading title="Featured Projects" subtitle="Some of my recent work and side projects" />
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                {PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(i, project)| view! { <ProjectCard index=i project=project /> })
                    .collect_view()}
            </div>
            <div class="text-center mt-12">
                <a
                    href=GITHUB
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-flex items-center gap-2 px-8 py-4 rounded-lg text-lg font-semibold bg-gradient-to-r from-blue-500 to-purple-500 text-white hover:scale-105 transition-all duration-300"
                >
                    "View More on GitHub"
                </a>
            </div>
        </RevealSection>
    }
}

#[component]
fn ProjectCard(index: usize, project: &'static Project) -> impl IntoView {
    let page = use_page();
    let card_style = move || {
        if page.is_revealed(SectionId::Projects) {
            format!(
                "animation: fadeInUp 0.8s ease-out forwards; animation-delay: {}ms",
                index * 100
            )
        } else {
            "animation: none".to_string()
        }
    };
    let span = if project.featured { "md:col-span-2 lg:col-span-1" } else { "" };

    view! {
        <div
            class=move || format!(
                "group rounded-2xl overflow-hidden shadow-xl hover:shadow-2xl transition-all duration-500 hover:-translate-y-2 {span} {}",
                page.pick("bg-gray-800/50", "bg-white"),
            )
            style=card_style
        >
            <div class="relative overflow-hidden h-48">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                />
                <Show when=move || project.featured>
                    <span class="absolute top-4 right-4 px-3 py-1 rounded-full text-xs font-bold bg-gradient-to-r from-yellow-400 to-orange-500 text-white">
                        "Featured"
                    </span>
                </Show>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-bold mb-2">{project.title}</h3>
                <p class=move || format!("text-sm mb-4 line-clamp-3 {}", page.pick("text-gray-400", "text-gray-600"))>
                    {project.description}
                </p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .tech
                        .iter()
                        .map(|tech| view! {
                            <span class=move || format!(
                                "px-3 py-1 rounded-full text-xs font-medium {}",
                                page.pick("bg-gray-700 text-gray-300", "bg-gray-100 text-gray-700"),
                            )>
                                {*tech}
                            </span>
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-4">
                    <Show when=move || project.has_repo()>
                        <a href=project.github target="_blank" rel="noopener noreferrer" class="text-blue-500 hover:underline text-sm font-medium">
                            "Code"
                        </a>
                    </Show>
                    <Show when=move || project.has_demo()>
                        <a href=project.live target="_blank" rel="noopener noreferrer" class="text-purple-500 hover:underline text-sm font-medium">
                            "Live Demo"
                        </a>
                    </Show>
                </div>
            </div>
        </div>
    }
}
