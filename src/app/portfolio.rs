use leptos::prelude::*;

use crate::content::{PortfolioItem, PORTFOLIO_ITEMS};

#[component]
pub fn Portfolio() -> impl IntoView {
    view! {
        <section id="work" class="py-20">
            <div class="container-pro">
                <div class="flex items-end justify-between flex-wrap gap-4">
                    <div>
                        <h2 class="text-3xl md:text-4xl font-bold text-text">"Portfolio"</h2>
                        <p class="mt-2 text-gray-600">"Interactive cards with neon hover effects."</p>
                    </div>
                    <a href="#contact" class="btn-secondary">
                        <i class="fa-solid fa-paper-plane mr-2" />
                        "Get a Quote"
                    </a>
                </div>

                <div class="mt-10 grid sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
                    {PORTFOLIO_ITEMS
                        .into_iter()
                        .map(|item| view! { <PortfolioCard item /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PortfolioCard(item: PortfolioItem) -> impl IntoView {
    view! {
        <article class="group card overflow-hidden p-0">
            <div class=format!("aspect-[4/3] bg-gradient-to-br {} relative", item.cover)>
                <div class="absolute inset-0 opacity-0 group-hover:opacity-100 transition">
                    <div class="absolute inset-0 bg-amber-400/10 blur-2xl"></div>
                </div>
                <div class="absolute top-4 left-4 inline-flex items-center px-3 py-1 rounded-full bg-white/90 text-xs font-semibold border border-blue-100">
                    <i class="fa-solid fa-bolt-lightning text-secondary mr-2"></i>
                    {item.tag}
                </div>
                <div class="absolute inset-0 flex items-center justify-center">
                    <div class="w-16 h-16 rounded-2xl bg-white/90 border border-blue-100 flex items-center justify-center shadow-neon-blue group-hover:scale-110 transition">
                        <i class=format!("fa-solid {} text-primary text-2xl", item.icon) />
                    </div>
                </div>
            </div>
            <div class="p-5">
                <h3 class="text-lg font-bold text-text">{item.title}</h3>
                <p class="mt-1 text-sm text-gray-600">
                    "Hover to see the neon glow. Built with clean, modern aesthetics."
                </p>
                <div class="mt-4 flex items-center justify-between">
                    <a href="#contact" class="text-primary font-semibold hover:underline">
                        "Learn more"
                    </a>
                    <i class="fa-solid fa-arrow-right text-primary"></i>
                </div>
            </div>
        </article>
    }
}
