use leptos::prelude::*;

use crate::content::{CONTACT_ACK, CONTACT_EMAIL, CONTACT_LOCATION};

const INPUT_CLASS: &str = "w-full rounded-xl border border-gray-200 bg-white px-3 py-2 outline-none focus:ring-2 focus:ring-primary/40 focus:border-primary/50";

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 bg-white">
            <div class="container-pro grid md:grid-cols-2 gap-10">
                <div>
                    <h2 class="text-3xl md:text-4xl font-bold text-text">"Contact"</h2>
                    <p class="mt-2 text-gray-600">
                        "Have a project in mind? Let’s bring your ideas to life with neon precision."
                    </p>
                    <div class="mt-6 space-y-3 text-gray-700">
                        <p>
                            <i class="fa-solid fa-envelope text-secondary mr-2"></i>
                            {CONTACT_EMAIL}
                        </p>
                        <p>
                            <i class="fa-solid fa-location-dot text-secondary mr-2"></i>
                            {CONTACT_LOCATION}
                        </p>
                    </div>
                </div>

                // acknowledges only; nothing entered here leaves the page
                <form
                    class="card p-6"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        if let Err(e) = window().alert_with_message(CONTACT_ACK) {
                            log::warn!("couldn't show contact acknowledgment: {e:?}");
                        }
                    }
                >
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <Field label="Name" id="name" placeholder="Your name" />
                        <Field label="Email" id="email" input_type="email" placeholder="you@email.com" />
                    </div>
                    <Field
                        label="Subject"
                        id="subject"
                        placeholder="Project inquiry"
                        class="mt-4"
                    />
                    <div class="mt-4">
                        <label for="message" class="block text-sm font-semibold text-text mb-1">
                            "Message"
                        </label>
                        <textarea
                            id="message"
                            class=format!("h-32 {INPUT_CLASS}")
                            placeholder="Tell me about your project..."
                        />
                    </div>
                    <button type="submit" class="btn-secondary mt-5 w-full sm:w-auto">
                        <i class="fa-solid fa-paper-plane mr-2" />
                        "Send Message"
                    </button>
                </form>
            </div>
        </section>
    }
}

#[component]
fn Field(
    label: &'static str,
    id: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <div class=class>
            <label for=id class="block text-sm font-semibold text-text mb-1">
                {label}
            </label>
            <input id=id type=input_type placeholder=placeholder class=INPUT_CLASS />
        </div>
    }
}
