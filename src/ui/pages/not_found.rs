// src/ui/pages/not_found.rs - 404 page

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::ui::router::Route;

#[component]
pub fn NotFound(path: String) -> Element {
    rsx! {
        div {
            class: "text-center py-16",
            div { class: "text-6xl mb-4", "🔍" }
            h1 {
                class: "text-3xl font-bold text-gray-900 mb-2",
                "Page not found"
            }
            p {
                class: "text-gray-600 mb-6",
                "No screen matches \"/{path}\"."
            }
            Link {
                to: Route::Home {},
                class: "inline-flex items-center px-4 py-2 border border-transparent text-sm font-medium rounded-md shadow-sm text-white bg-blue-600 hover:bg-blue-700",
                "Go Home"
            }
        }
    }
}
