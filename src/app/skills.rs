use leptos::prelude::*;

use crate::content::{Skill, SKILLS};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-20 bg-white">
            <div class="container-pro">
                <h2 class="text-3xl md:text-4xl font-bold text-text text-center">"Skills"</h2>
                <p class="mt-2 text-gray-600 text-center">
                    "Focused, versatile, and production-ready."
                </p>

                <div class="mt-10 grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {SKILLS.into_iter().map(|skill| view! { <SkillCard skill /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(skill: Skill) -> impl IntoView {
    view! {
        <div class="card p-6">
            <div class="flex items-center justify-between">
                <div class="flex items-center gap-3">
                    <div class="w-10 h-10 rounded-lg bg-blue-50 flex items-center justify-center">
                        <i class=format!("{} text-primary", skill.icon) />
                    </div>
                    <div class="font-semibold">{skill.name}</div>
                </div>
                <div class="text-sm text-gray-500">{format!("{}%", skill.level)}</div>
            </div>
            <div class="mt-4 h-2 bg-gray-100 rounded-full overflow-hidden">
                <div
                    class="h-full bg-gradient-to-r from-primary to-secondary rounded-full transition-all"
                    style=format!("width: {}%", skill.level)
                />
            </div>
        </div>
    }
}
