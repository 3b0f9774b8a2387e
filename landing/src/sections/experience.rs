use leptos::prelude::*;
use portfolio_core::section::SectionId;

use super::reveal::{RevealSection, SectionHeading};
use crate::content::{EXPERIENCE, Job};
use crate::page::use_page;

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <RevealSection
            id=SectionId::Experience
            class=Signal::derive(|| "py-24 px-6 relative".to_string())
            inner_class="max-w-5xl mx-auto"
        >
            <SectionHeading title="Work Experience" subtitle="My professional journey and achievements" />
            <div class="space-y-8">
                {EXPERIENCE.iter().map(|job| view! { <JobCard job=job /> }).collect_view()}
            </div>
        </RevealSection>
    }
}

#[component]
fn JobCard(job: &'static Job) -> impl IntoView {
    let page = use_page();
    let muted = move || page.pick("text-gray-400", "text-gray-600");

    view! {
        <div class=move || format!(
            "rounded-2xl p-8 shadow-xl transition-all duration-500 hover:shadow-2xl {}",
            page.pick("bg-gray-800/50 border border-gray-700", "bg-white border border-gray-200"),
        )>
            <div class="flex flex-col md:flex-row md:justify-between md:items-start gap-4 mb-4">
                <div>
                    <h3 class="text-2xl font-bold mb-1">{job.role}</h3>
                    <p class="text-lg font-semibold text-blue-500">{job.company}</p>
                    <p class=move || format!("text-sm {}", muted())>{job.location}</p>
                </div>
                <span class="px-4 py-2 rounded-full text-sm font-medium bg-gradient-to-r from-blue-500 to-purple-500 text-white">
                    {job.period}
                </span>
            </div>
            <p class=move || format!("mb-4 leading-relaxed {}", page.pick("text-gray-300", "text-gray-700"))>
                {job.description}
            </p>
            <p class="font-semibold mb-2">"Key Achievements:"</p>
            <ul class="space-y-2">
                {job
                    .achievements
                    .iter()
                    .map(|achievement| view! {
                        <li class=move || format!("flex items-start gap-2 {}", muted())>
                            <span class="text-green-500">"▹"</span>
                            <span>{*achievement}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
