use leptos::prelude::*;
use portfolio_core::section::SectionId;

use super::reveal::{RevealSection, SectionHeading};
use crate::content::{SKILL_CATEGORIES, SkillCategory};
use crate::page::use_page;

#[component]
pub fn Skills() -> impl IntoView {
    let page = use_page();

    view! {
        <RevealSection
            id=SectionId::Skills
            class=Signal::derive(move || format!("py-24 px-6 relative {}", page.pick("bg-gray-800/30", "bg-white/50")))
            inner_class="max-w-7xl mx-auto"
        >
            <SectionHeading
                title="Skills & Expertise"
                subtitle="Technologies I work with to bring ideas to life"
            />
            <div class="grid lg:grid-cols-3 gap-8">
                {SKILL_CATEGORIES
                    .iter()
                    .enumerate()
                    .map(|(i, category)| view! { <CategoryCard index=i category=category /> })
                    .collect_view()}
            </div>
        </RevealSection>
    }
}

#[component]
fn CategoryCard(index: usize, category: &'static SkillCategory) -> impl IntoView {
    let page = use_page();
    let revealed = move || page.is_revealed(SectionId::Skills);
    let card_style = move || {
        if revealed() {
            format!(
                "animation: fadeInUp 0.8s ease-out forwards; animation-delay: {}ms",
                index * 200
            )
        } else {
            "animation: none".to_string()
        }
    };

    view! {
        <div
            class=move || format!(
                "rounded-2xl overflow-hidden transition-all duration-700 hover:scale-105 shadow-xl hover:shadow-2xl {}",
                page.pick("bg-gray-900/50", "bg-white"),
            )
            style=card_style
        >
            <div class=format!("bg-gradient-to-r {} p-6 text-white", category.gradient)>
                <h3 class="text-2xl font-bold">{category.name}</h3>
            </div>
            <div class="p-6">
                <div class="grid grid-cols-2 gap-3">
                    {category
                        .skills
                        .iter()
                        .map(|skill| view! {
                            <div class=move || format!(
                                "p-4 rounded-lg transition-all duration-300 hover:scale-110 hover:shadow-lg border {}",
                                page.pick("bg-gray-800 border-gray-700", "bg-gray-50 border-gray-200"),
                            )>
                                <span class="text-sm font-medium">{*skill}</span>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
