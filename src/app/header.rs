use leptos::prelude::*;

use crate::content::{BRAND, NAV_LINKS};

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-40 backdrop-blur bg-white/80 border-b border-gray-200">
            <div class="container-pro flex items-center justify-between h-16">
                <a href="#home" class="flex items-center gap-2 group">
                    <span class="w-2 h-2 rounded-full bg-secondary shadow-neon block group-hover:animate-glow" />
                    <span class="text-lg font-bold tracking-tight text-text">
                        {BRAND[0]}
                        <span class="text-primary">{BRAND[1]}</span>
                    </span>
                </a>

                <nav class="hidden md:flex items-center gap-6 text-sm font-medium">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a class="hover:text-primary transition" href=link.href>
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a href="#contact" class="btn-secondary shadow-neon">
                        <i class="fa-solid fa-bolt-lightning mr-2"></i>
                        "Hire Me"
                    </a>
                </nav>

                <a
                    href="#contact"
                    class="md:hidden inline-flex items-center justify-center h-9 px-4 rounded-lg bg-primary text-white"
                >
                    <i class="fa-solid fa-paper-plane text-sm mr-2" />
                    "Contact"
                </a>
            </div>
        </header>
    }
}
