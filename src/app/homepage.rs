use leptos::prelude::*;
use leptos_meta::Title;

use crate::scroll::use_scroll_past;

use super::{
    about::About, contact::Contact, footer::Footer, header::Navbar, hero::Hero,
    portfolio::Portfolio, scroll_top::ScrollTop, skills::Skills,
};

#[component]
pub fn HomePage() -> impl IntoView {
    let show_top = use_scroll_past();

    view! {
        <Title text="Graphic Designer" />
        <div class="min-h-screen bg-ocean-gradient text-text">
            <Navbar />
            <main>
                <Hero />
                <About />
                <Skills />
                <Portfolio />
                <Contact />
            </main>
            <Footer />
            <ScrollTop visible=show_top />
        </div>
    }
}
