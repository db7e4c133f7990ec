use leptos::prelude::*;

use crate::content::{Metric, METRICS};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="relative overflow-hidden">
            // background orbs
            <div class="pointer-events-none absolute inset-0 -z-10">
                <div class="absolute -top-10 -left-10 w-60 h-60 rounded-full blur-3xl opacity-30 bg-blue-400 animate-pulse-soft" />
                <div class="absolute -bottom-10 -right-10 w-72 h-72 rounded-full blur-3xl opacity-30 bg-amber-400 animate-pulse-soft" />
            </div>

            <div class="container-pro py-24 md:py-32 text-center">
                <div class="inline-flex items-center gap-2 px-3 py-1.5 rounded-full bg-white border border-blue-100 shadow-soft">
                    <span class="w-2 h-2 rounded-full bg-secondary shadow-neon" />
                    <span class="text-xs font-semibold text-blue-700">"Ocean Professional Theme"</span>
                </div>

                <h1 class="mt-6 text-4xl md:text-6xl font-extrabold tracking-tight text-text">
                    "Graphic Designer with a " <span class="text-primary">"Neon Flair"</span>
                </h1>
                <p class="mt-4 text-base md:text-lg text-gray-600 max-w-2xl mx-auto">
                    "I craft bold, modern visuals with glowing accents and smooth motion. Explore my work, skills, and reach out to collaborate on your next project."
                </p>

                <div class="mt-8 flex items-center justify-center gap-4">
                    <a href="#work" class="btn-primary">
                        <i class="fa-solid fa-eye mr-2" />
                        "View Work"
                    </a>
                    <a href="#contact" class="btn-secondary">
                        <i class="fa-solid fa-message mr-2" />
                        "Let’s Talk"
                    </a>
                </div>

                <div class="mt-14 mx-auto max-w-5xl">
                    <div class="card p-1 animate-float">
                        <div class="rounded-2xl bg-gradient-to-r from-blue-50 to-white p-6 md:p-10">
                            <div class="grid md:grid-cols-3 gap-6 items-center">
                                {METRICS
                                    .into_iter()
                                    .map(|metric| view! { <MetricCard metric /> })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn MetricCard(metric: Metric) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="inline-flex items-center justify-center w-12 h-12 rounded-xl bg-white border border-blue-100 shadow-soft mb-3">
                <i class=format!("fa-solid {} text-primary", metric.icon) />
            </div>
            <div class="text-3xl font-extrabold text-text">{metric.value}</div>
            <div class="text-gray-500 text-sm">{metric.label}</div>
        </div>
    }
}
