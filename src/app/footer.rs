use leptos::prelude::*;

use crate::content::{copyright_line, SOCIAL_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-10 border-t border-gray-200 bg-white">
            <div class="container-pro flex flex-col sm:flex-row items-center justify-between gap-4">
                <p class="text-gray-600 text-sm">{copyright_line()}</p>
                <div class="flex items-center gap-4 text-gray-600">
                    {SOCIAL_LINKS
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a href=link.href aria-label=link.label class="hover:text-primary">
                                    <i class=link.icon></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
