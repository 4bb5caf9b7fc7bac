// src/ui/pages/home.rs - Entry screen

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::ui::router::Route;
use crate::ui::services::use_services;

/// Entry screen: scan a code or open the demo inventory.
#[component]
pub fn Home() -> Element {
    let services = use_services();
    let demo_code = services
        .as_ref()
        .map(|s| s.config.lookup.demo_code.clone())
        .unwrap_or_else(|| "DEMO-001".to_string());
    let app_name = services
        .as_ref()
        .map(|s| s.config.app.name.clone())
        .unwrap_or_else(|| "StockLens".to_string());
    let has_camera = services
        .map(|s| s.platform.capabilities().has_camera)
        .unwrap_or(false);

    rsx! {
        div {
            class: "flex flex-col items-center text-center pt-10",
            div { class: "text-7xl mb-4", "📦" }
            h2 {
                class: "text-3xl font-bold text-gray-900 mb-2",
                "{app_name}"
            }
            p {
                class: "text-gray-600 mb-10 max-w-md",
                "Scan a QR code to look up an item, then inspect its stock as a list or as an augmented-reality overlay."
            }

            div {
                class: "w-full max-w-sm space-y-4",
                Link {
                    to: Route::Scanner {},
                    class: "flex items-center justify-center w-full px-6 py-4 text-lg font-semibold rounded-xl shadow text-white bg-blue-600 hover:bg-blue-700",
                    span { class: "mr-3", "📷" }
                    "Scan QR Code"
                }
                Link {
                    to: Route::Detail { code: demo_code },
                    class: "flex items-center justify-center w-full px-6 py-4 text-lg font-semibold rounded-xl shadow text-blue-600 bg-white border border-blue-600 hover:bg-blue-50",
                    span { class: "mr-3", "📋" }
                    "View Demo Inventory"
                }
            }

            if !has_camera {
                p {
                    class: "mt-8 text-sm text-orange-600",
                    "No camera detected on this device; scanning will not be available."
                }
            }
        }
    }
}
