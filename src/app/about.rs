use leptos::prelude::*;

use crate::content::ABOUT_POINTS;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20">
            <div class="container-pro grid md:grid-cols-2 gap-8 items-center">
                <div class="order-2 md:order-1">
                    <h2 class="text-3xl md:text-4xl font-bold text-text">"About Me"</h2>
                    <p class="mt-4 text-gray-600">
                        "I’m a graphic designer focused on modern, high-contrast visuals with neon highlights. My workflow blends creativity with precision, delivering designs that stand out and communicate clearly."
                    </p>
                    <ul class="mt-6 space-y-3 text-gray-700">
                        {ABOUT_POINTS
                            .into_iter()
                            .map(|point| {
                                view! {
                                    <li class="flex items-start gap-3">
                                        <i class="fa-solid fa-check text-secondary mt-1" />
                                        <span>{point}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <div class="mt-8">
                        <a href="#contact" class="btn-primary">
                            <i class="fa-solid fa-bolt mr-2" />
                            "Start a Project"
                        </a>
                    </div>
                </div>

                <div class="order-1 md:order-2">
                    <div class="relative">
                        <div class="absolute -inset-1 rounded-2xl bg-amber-400/30 blur-xl"></div>
                        <div class="relative card p-0 overflow-hidden">
                            <div class="aspect-video bg-gradient-to-br from-blue-500/10 to-amber-500/10 flex items-center justify-center">
                                <i class="fa-solid fa-pen-nib text-5xl text-primary"></i>
                            </div>
                        </div>
                    </div>
                    <p class="text-xs text-gray-500 mt-3 text-center">
                        "Clean lines, neon edges, precise execution."
                    </p>
                </div>
            </div>
        </section>
    }
}
