// src/ui/pages/ar_view.rs - AR overlay screen

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::ar::{ArSession, TrackingState};
use crate::error::{Error, ErrorKind, LookupOperation};
use crate::inventory::{classify_record, InventoryRecord};
use crate::ui::components::{ArSceneOverlay, StockBadge};
use crate::ui::router::Route;
use crate::ui::services::use_services;
use crate::ui::state::use_selection;

async fn sleep_ms(ms: u64) {
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

fn is_ignorable(error: &Error) -> bool {
    matches!(
        error.kind,
        ErrorKind::Lookup {
            operation: LookupOperation::Superseded | LookupOperation::Cancelled,
            ..
        }
    )
}

/// AR screen: hosts the anchored scene, the tracking status line, and the
/// bottom info panel. Owns the selection binding for the scene.
#[component]
pub fn ArView(code: String) -> Element {
    let services = use_services();
    let mut record = use_signal(|| None::<InventoryRecord>);
    let mut load_error = use_signal(|| None::<Error>);
    let mut session = use_signal(ArSession::new);
    let mut show_instructions = use_signal(|| true);
    let mut started = use_signal(|| false);
    let (selection, select, clear_selection) = use_selection();
    let navigator = use_navigator();

    let lookup_for_drop = services.as_ref().map(|s| s.lookup.clone());
    use_drop(move || {
        if let Some(lookup) = &lookup_for_drop {
            lookup.cancel();
        }
    });

    let Some(services) = services else {
        return rsx! {};
    };

    if !started() {
        started.set(true);

        // Fresh AR entry: the selection resets to none.
        clear_selection(());

        let lookup = services.lookup.clone();
        let fetch_code = code.clone();
        spawn(async move {
            match lookup.fetch(Some(&fetch_code)).await {
                Ok(fetched) => record.set(Some(fetched)),
                Err(e) if is_ignorable(&e) => {}
                Err(e) => load_error.set(Some(e)),
            }
        });

        // The external AR runtime drives these callbacks; with none
        // attached, walk the session through the standard bring-up
        // sequence so the screen behaves as it would on device.
        spawn(async move {
            session.with_mut(|s| s.on_tracking_update(TrackingState::Unavailable));
            sleep_ms(800).await;
            session.with_mut(|s| s.on_tracking_update(TrackingState::Limited));
            sleep_ms(800).await;
            session.with_mut(|s| s.on_tracking_update(TrackingState::Normal));
            sleep_ms(500).await;
            session.with_mut(|s| s.on_anchor_found());
        });

        let timeout_secs = services.config.ar.instructions_timeout_secs;
        spawn(async move {
            sleep_ms(timeout_secs * 1000).await;
            show_instructions.set(false);
        });
    }

    if let Some(error) = load_error() {
        return rsx! {
            div {
                class: "text-center py-16",
                div { class: "text-6xl mb-4", "⚠️" }
                h2 { class: "text-xl font-bold text-gray-900 mb-2", "Could not load inventory" }
                p { class: "text-gray-600 mb-6", "{error.message}" }
                Link {
                    to: Route::Home {},
                    class: "inline-flex items-center px-4 py-2 rounded-md bg-blue-600 text-white text-sm font-medium",
                    "Back to Home"
                }
            }
        };
    }

    let rec = match record() {
        Some(rec) if session().is_ready() => rec,
        current_record => {
            let subtext = if current_record.is_some() {
                session().message().to_string()
            } else {
                "Loading inventory data...".to_string()
            };

            return rsx! {
                div {
                    class: "bg-black rounded-2xl text-center py-16 px-6",
                    div { class: "animate-pulse text-5xl mb-6", "🥽" }
                    h2 { class: "text-2xl font-bold text-white mb-2", "Starting Augmented Reality" }
                    p { class: "text-gray-300 mb-6", "{subtext}" }
                    if let Some(rec) = current_record {
                        div {
                            class: "inline-block rounded-lg border border-blue-500 bg-blue-500/20 px-6 py-3 mb-6",
                            p { class: "text-blue-400 text-sm font-semibold", "Code: {rec.item_code}" }
                            p { class: "text-white font-bold", "{rec.item_name}" }
                        }
                    }
                    div {
                        button {
                            r#type: "button",
                            class: "inline-flex items-center px-5 py-2 rounded-full bg-red-600/80 text-white text-sm font-semibold",
                            onclick: move |_| {
                                navigator.go_back();
                            },
                            "✕ Cancel"
                        }
                    }
                }
            };
        }
    };

    let status = classify_record(&rec);
    let focused = selection.get().map(|tag| tag.label());

    rsx! {
        div {
            class: "space-y-4",

            p {
                class: "text-center text-sm text-gray-500",
                {session().message()}
            }

            ArSceneOverlay {
                record: rec.clone(),
                selection,
                on_select: move |tag| select(tag),
            }

            if show_instructions() {
                div {
                    class: "rounded-lg border border-blue-300 bg-blue-50 p-4 space-y-2",
                    InstructionRow { icon: "🔄", text: "Move the device to detect surfaces" }
                    InstructionRow { icon: "👆", text: "Tap the 3D objects for details" }
                    InstructionRow { icon: "💡", text: "Works best in good lighting" }
                }
            }

            // Bottom info panel
            div {
                class: "bg-gray-900 rounded-2xl border border-blue-500 p-5 text-white space-y-4",
                div {
                    class: "flex items-center justify-between",
                    div {
                        p { class: "font-bold", "{rec.item_name}" }
                        p { class: "text-sm text-gray-400", "Code: {rec.item_code}" }
                    }
                    StockBadge { status }
                }
                div {
                    class: "flex justify-around text-center",
                    QuickStat { value: rec.current_stock.to_string(), label: "Current Stock" }
                    QuickStat {
                        value: rec.metrics.rotation_days.to_string(),
                        label: "Rotation Days"
                    }
                    QuickStat {
                        value: format!("{}%", rec.metrics.accuracy),
                        label: "Accuracy"
                    }
                }
                if let Some(focused) = focused {
                    p {
                        class: "text-center text-sm text-blue-400",
                        "Focused: {focused}"
                    }
                }
                div {
                    class: "flex justify-around",
                    Link {
                        to: Route::Detail { code: rec.item_code.clone() },
                        class: "px-5 py-2 rounded-full border border-white/30 bg-white/10 text-sm font-semibold",
                        "📋 View Detail"
                    }
                    button {
                        r#type: "button",
                        class: "px-5 py-2 rounded-full border border-white/30 bg-white/10 text-sm font-semibold",
                        onclick: move |_| show_instructions.toggle(),
                        "❔ Help"
                    }
                }
            }
        }
    }
}

#[component]
fn InstructionRow(icon: &'static str, text: &'static str) -> Element {
    rsx! {
        div {
            class: "flex items-center",
            span { class: "mr-3", {icon} }
            p { class: "text-sm text-blue-900", {text} }
        }
    }
}

#[component]
fn QuickStat(value: String, label: String) -> Element {
    rsx! {
        div {
            p { class: "text-xl font-bold text-blue-400", "{value}" }
            p { class: "text-xs text-gray-400", "{label}" }
        }
    }
}
