use leptos::prelude::*;
use portfolio_core::section::SectionId;

use super::reveal::{RevealSection, SectionHeading};
use crate::content::{CERTIFICATIONS, DEGREE};
use crate::page::use_page;

#[component]
pub fn Education() -> impl IntoView {
    let page = use_page();
    let card = move || {
        format!(
            "rounded-2xl p-8 shadow-xl {}",
            page.pick("bg-gray-900/50 border border-gray-700", "bg-white border border-gray-200"),
        )
    };
    let muted = move || page.pick("text-gray-400", "text-gray-600");

    view! {
        <RevealSection
            id=SectionId::Education
            class=Signal::derive(move || format!("py-24 px-6 relative {}", page.pick("bg-gray-800/30", "bg-white/50")))
            inner_class="max-w-6xl mx-auto"
        >
            <SectionHeading title="Education" subtitle="Academic background and qualifications" />
            <div class="grid md:grid-cols-2 gap-8">
                <div class=card>
                    <h3 class="text-2xl font-bold mb-2">{DEGREE.title}</h3>
                    <p class="text-lg font-semibold text-blue-500 mb-1">{DEGREE.field}</p>
                    <p class=move || format!("mb-6 {}", muted())>{DEGREE.institution}</p>
                    <div class="space-y-3">
                        <div class="flex justify-between items-center">
                            <span class=muted>"Duration:"</span>
                            <span class="font-semibold">{DEGREE.duration}</span>
                        </div>
                        <div class="flex justify-between items-center">
                            <span class=muted>"CGPA:"</span>
                            <span class="font-semibold text-green-500">{DEGREE.grade}</span>
                        </div>
                        <div class=move || format!("pt-3 border-t {}", page.pick("border-gray-700", "border-gray-200"))>
                            <p class=move || format!("text-sm {}", muted())>{DEGREE.focus}</p>
                        </div>
                    </div>
                </div>

                <div class=card>
                    <h3 class="text-2xl font-bold mb-2">"Certifications"</h3>
                    <p class=move || format!("mb-6 {}", muted())>"Professional Development"</p>
                    <ul class="space-y-3">
                        {CERTIFICATIONS
                            .iter()
                            .map(|cert| view! {
                                <li class="flex items-start gap-3">
                                    <span class="text-purple-500">"✦"</span>
                                    <span>{*cert}</span>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </RevealSection>
    }
}
