use leptos::prelude::*;

/// Floating button that returns to the top of the page.
///
/// Always mounted; `visible` only toggles opacity and pointer events so the layout never shifts.
#[component]
pub fn ScrollTop(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <button
            aria-label="Scroll to top"
            on:click=move |_| window().scroll_to_with_x_and_y(0.0, 0.0)
            class=move || {
                let state = if visible.get() {
                    "opacity-100 pointer-events-auto"
                } else {
                    "opacity-0 pointer-events-none"
                };
                format!(
                    "fixed bottom-6 right-6 z-40 rounded-full bg-primary text-white shadow-neon-blue p-3 transition transform hover:-translate-y-1 {state}"
                )
            }
        >
            <i class="fa-solid fa-arrow-up"></i>
        </button>
    }
}
