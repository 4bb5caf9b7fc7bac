// src/ui/pages/scanner.rs - QR scanner screen

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;
use futures::StreamExt;

use crate::scanner::ScanEvent;
use crate::ui::router::Route;
use crate::ui::services::use_services;

/// Scanner screen: drives the decode/reactivate protocol of the scanner
/// adapter and offers the two follow-up views for a decoded code.
#[component]
pub fn Scanner() -> Element {
    let services = use_services();
    let mut decoded = use_signal(|| None::<String>);
    let mut error = use_signal(|| None::<String>);
    let mut manual_code = use_signal(String::new);
    let mut torch_on = use_signal(|| false);
    let mut subscribed = use_signal(|| false);

    let Some(services) = services else {
        return rsx! {};
    };

    if !subscribed() {
        subscribed.set(true);
        torch_on.set(services.scanner.torch_on());

        let scanner = services.scanner.clone();
        spawn(async move {
            let mut events = scanner.subscribe();
            while let Some(event) = events.next().await {
                match event {
                    ScanEvent::Decoded(code) => decoded.set(Some(code)),
                    ScanEvent::Failed(reason) => error.set(Some(reason)),
                }
            }
        });
    }

    let scanner_for_cancel = services.scanner.clone();
    let scanner_for_retry = services.scanner.clone();
    let scanner_for_torch = services.scanner.clone();
    let scanner_for_manual = services.scanner.clone();

    rsx! {
        div {
            class: "space-y-6",

            // Viewfinder stand-in; the real camera feed is owned by the
            // external decoder component.
            div {
                class: "relative bg-black rounded-2xl overflow-hidden h-80 flex items-center justify-center",
                div {
                    class: "absolute inset-8 border-2 border-blue-400 rounded-lg",
                }
                div {
                    class: "absolute inset-x-8 h-0.5 bg-blue-400 animate-pulse",
                }
                p {
                    class: "text-gray-400 text-sm z-10",
                    if services.scanner.is_armed() {
                        "Point the camera at a QR code"
                    } else {
                        "Scanner paused"
                    }
                }
                button {
                    r#type: "button",
                    class: "absolute bottom-3 right-3 rounded-full bg-gray-800 text-white px-3 py-2 text-sm",
                    onclick: move |_| {
                        torch_on.set(scanner_for_torch.toggle_torch());
                    },
                    if torch_on() { "🔦 Torch on" } else { "🔦 Torch off" }
                }
            }

            // Manual entry drives the same decode path as the camera.
            div {
                class: "flex space-x-2",
                input {
                    class: "flex-1 rounded-md border border-gray-300 px-3 py-2 text-sm",
                    placeholder: "Enter a code manually",
                    value: "{manual_code}",
                    oninput: move |evt| manual_code.set(evt.value()),
                }
                button {
                    r#type: "button",
                    class: "px-4 py-2 rounded-md bg-blue-600 text-white text-sm font-medium hover:bg-blue-700",
                    onclick: move |_| {
                        let code = manual_code();
                        if !code.trim().is_empty() {
                            scanner_for_manual.on_decode(code.trim());
                            manual_code.set(String::new());
                        }
                    },
                    "Look up"
                }
            }

            if let Some(code) = decoded() {
                div {
                    class: "bg-white shadow rounded-lg p-6",
                    h3 {
                        class: "text-lg font-bold text-gray-900 mb-1",
                        "📱 QR Code Detected"
                    }
                    p { class: "text-sm text-gray-600 mb-4", "Code: {code}" }
                    div {
                        class: "flex flex-col space-y-2",
                        Link {
                            to: Route::Detail { code: code.clone() },
                            class: "w-full text-center px-4 py-2 rounded-md bg-blue-600 text-white text-sm font-medium hover:bg-blue-700",
                            "📋 View Detail"
                        }
                        Link {
                            to: Route::ArView { code: code.clone() },
                            class: "w-full text-center px-4 py-2 rounded-md bg-purple-600 text-white text-sm font-medium hover:bg-purple-700",
                            "🥽 View in AR"
                        }
                        button {
                            r#type: "button",
                            class: "w-full px-4 py-2 rounded-md border border-gray-300 text-sm font-medium text-gray-700 hover:bg-gray-50",
                            onclick: move |_| {
                                scanner_for_cancel.reactivate();
                                decoded.set(None);
                            },
                            "❌ Cancel"
                        }
                    }
                }
            }

            if let Some(reason) = error() {
                div {
                    class: "bg-red-50 border border-red-200 rounded-lg p-6",
                    h3 {
                        class: "text-lg font-bold text-red-800 mb-1",
                        "Camera Error"
                    }
                    p { class: "text-sm text-red-700 mb-4", "{reason}" }
                    div {
                        class: "flex space-x-2",
                        button {
                            r#type: "button",
                            class: "flex-1 px-4 py-2 rounded-md bg-red-600 text-white text-sm font-medium hover:bg-red-700",
                            onclick: move |_| {
                                scanner_for_retry.reactivate();
                                error.set(None);
                            },
                            "Retry"
                        }
                        Link {
                            to: Route::Home {},
                            class: "flex-1 text-center px-4 py-2 rounded-md border border-gray-300 text-sm font-medium text-gray-700 hover:bg-gray-50",
                            "Go Back"
                        }
                    }
                }
            }
        }
    }
}
