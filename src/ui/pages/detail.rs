// src/ui/pages/detail.rs - Inventory detail screen

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::error::{Error, ErrorKind, LookupOperation};
use crate::inventory::{
    classify_record, InventoryRecord, Movement, MovementKind,
};
use crate::ui::components::{AlertList, MovementList, StockProgress};
use crate::ui::pages::{EmptyState, PageError, PageSkeleton, PageWrapper, StatCard};
use crate::ui::router::Route;
use crate::ui::services::use_services;
use crate::ui::state::{notify, use_notifications};
use crate::ui::NotificationType;

fn is_ignorable(error: &Error) -> bool {
    matches!(
        error.kind,
        ErrorKind::Lookup {
            operation: LookupOperation::Superseded | LookupOperation::Cancelled,
            ..
        }
    )
}

fn is_not_found(error: &Error) -> bool {
    matches!(
        error.kind,
        ErrorKind::Lookup {
            operation: LookupOperation::NotFound,
            ..
        }
    )
}

/// Detail screen: loads the record for a code and shows stock state,
/// history, and the movement actions.
#[component]
pub fn Detail(code: String) -> Element {
    let services = use_services();
    let mut record = use_signal(|| None::<InventoryRecord>);
    let mut load_error = use_signal(|| None::<Error>);
    let mut started = use_signal(|| false);
    let mut quantity = use_signal(|| 10i64);
    let (_, add_notification, _) = use_notifications();

    // A screen leaving focus abandons its in-flight request.
    let lookup_for_drop = services.as_ref().map(|s| s.lookup.clone());
    use_drop(move || {
        if let Some(lookup) = &lookup_for_drop {
            lookup.cancel();
        }
    });

    let Some(services) = services else {
        return rsx! {};
    };

    let fetch = use_callback({
        let lookup = services.lookup.clone();
        let code = code.clone();
        move |_: ()| {
            let lookup = lookup.clone();
            let code = code.clone();
            spawn(async move {
                match lookup.fetch(Some(&code)).await {
                    Ok(fetched) => {
                        record.set(Some(fetched));
                        load_error.set(None);
                    }
                    Err(e) if is_ignorable(&e) => {}
                    Err(e) => load_error.set(Some(e)),
                }
            });
        }
    });

    if !started() {
        started.set(true);
        fetch(());
    }

    let apply = use_callback({
        move |kind: MovementKind| {
            let amount = quantity();
            record.with_mut(|maybe| {
                if let Some(rec) = maybe {
                    let next_id = rec.movements.iter().map(|m| m.id).max().unwrap_or(0) + 1;
                    let signed = match kind {
                        MovementKind::Adjustment => amount,
                        _ => amount.abs(),
                    };
                    rec.apply_movement(Movement {
                        id: next_id,
                        date: chrono::Utc::now().date_naive(),
                        kind,
                        quantity: signed,
                        user: "You".to_string(),
                        reference: format!("LOCAL-{next_id:03}"),
                        notes: None,
                    });
                }
            });
            add_notification(notify(
                "Movement recorded",
                format!("{} of {} units applied", kind.label(), amount.abs()),
                NotificationType::Success,
            ));
        }
    });

    if let Some(error) = load_error() {
        if is_not_found(&error) {
            return rsx! {
                EmptyState {
                    icon: "❓".to_string(),
                    title: "Item unknown".to_string(),
                    description: "There is no inventory record for this code.".to_string()
                }
                div {
                    class: "text-center",
                    Link {
                        to: Route::Scanner {},
                        class: "inline-flex items-center px-4 py-2 rounded-md bg-blue-600 text-white text-sm font-medium hover:bg-blue-700",
                        "Scan another code"
                    }
                }
            };
        }
        return rsx! {
            PageError {
                message: error.message.clone(),
                retry_action: Some(Callback::new(move |_| fetch(())))
            }
        };
    }

    let Some(rec) = record() else {
        return rsx! {
            PageSkeleton { message: "Loading inventory...".to_string() }
        };
    };

    let status = classify_record(&rec);
    let refresh = rsx! {
        button {
            r#type: "button",
            class: "inline-flex items-center px-4 py-2 border border-gray-300 shadow-sm text-sm font-medium rounded-md text-gray-700 bg-white hover:bg-gray-50",
            onclick: move |_| fetch(()),
            "↻ Refresh"
        }
    };

    rsx! {
        PageWrapper {
            actions: Some(refresh),

            // Header card
            div {
                class: "rounded-2xl shadow bg-gradient-to-r from-blue-600 to-cyan-400 text-white p-6",
                h2 { class: "text-2xl font-bold", "{rec.item_name}" }
                p { class: "text-sm opacity-90", "Code: {rec.item_code}" }
                p { class: "text-sm opacity-80 mb-4", "{rec.category}" }
                Link {
                    to: Route::ArView { code: rec.item_code.clone() },
                    class: "inline-flex items-center px-5 py-2 rounded-full bg-white text-blue-600 font-bold text-sm",
                    "🥽 View in AR"
                }
            }

            AlertList { alerts: rec.alerts.clone() }

            // Stock state
            div {
                class: "bg-white shadow rounded-lg p-5 space-y-5",
                h3 { class: "text-lg font-bold text-gray-900", "📦 Stock State" }
                StockProgress {
                    current: rec.current_stock,
                    min: rec.min_stock,
                    max: rec.max_stock
                }
                div {
                    class: "flex justify-around",
                    div {
                        class: "text-center",
                        p {
                            class: "text-3xl font-bold",
                            style: "color: {status.color().hex()}",
                            "{rec.current_stock}"
                        }
                        p { class: "text-sm text-gray-500", "Current" }
                    }
                    div {
                        class: "text-center",
                        p { class: "text-3xl font-bold text-red-500", "{rec.min_stock}" }
                        p { class: "text-sm text-gray-500", "Minimum" }
                    }
                    div {
                        class: "text-center",
                        p { class: "text-3xl font-bold text-green-500", "{rec.max_stock}" }
                        p { class: "text-sm text-gray-500", "Maximum" }
                    }
                }
                div {
                    class: "grid grid-cols-1 sm:grid-cols-2 gap-3 text-sm",
                    DetailField { icon: "📍", label: "Location", value: rec.location.clone() }
                    DetailField { icon: "🏢", label: "Supplier", value: rec.supplier.clone() }
                    DetailField {
                        icon: "💲",
                        label: "Unit Price",
                        value: format!("${:.2}", rec.unit_price)
                    }
                    DetailField {
                        icon: "💰",
                        label: "Total Value",
                        value: format!("${:.2}", rec.total_value)
                    }
                }
                p {
                    class: "text-xs text-gray-400 italic text-center",
                    {format!("Last updated: {}", rec.last_updated.format("%Y-%m-%d %H:%M:%S"))}
                }
            }

            // Analytics
            div {
                class: "grid grid-cols-1 sm:grid-cols-3 gap-4",
                StatCard {
                    title: "Rotation Days".to_string(),
                    value: rec.metrics.rotation_days.to_string(),
                    icon: Some("🔄".to_string())
                }
                StatCard {
                    title: "Avg Movement".to_string(),
                    value: rec.metrics.avg_movement.to_string(),
                    icon: Some("📈".to_string())
                }
                StatCard {
                    title: "Accuracy".to_string(),
                    value: format!("{}%", rec.metrics.accuracy),
                    icon: Some("🎯".to_string())
                }
            }

            // Movement history
            div {
                class: "bg-white shadow rounded-lg p-5",
                h3 { class: "text-lg font-bold text-gray-900 mb-4", "📋 Movement History" }
                MovementList { movements: rec.movements.clone() }
            }

            // Movement actions
            div {
                class: "bg-white shadow rounded-lg p-5",
                h3 { class: "text-lg font-bold text-gray-900 mb-4", "Record a Movement" }
                div {
                    class: "flex items-center space-x-2 mb-4",
                    label { class: "text-sm text-gray-600", "Quantity:" }
                    input {
                        r#type: "number",
                        class: "w-24 rounded-md border border-gray-300 px-3 py-1 text-sm",
                        value: "{quantity}",
                        oninput: move |evt| {
                            if let Ok(parsed) = evt.value().parse::<i64>() {
                                quantity.set(parsed);
                            }
                        },
                    }
                }
                div {
                    class: "grid grid-cols-3 gap-3",
                    MovementButton {
                        kind: MovementKind::Inbound,
                        on_apply: move |kind| apply(kind)
                    }
                    MovementButton {
                        kind: MovementKind::Outbound,
                        on_apply: move |kind| apply(kind)
                    }
                    MovementButton {
                        kind: MovementKind::Adjustment,
                        on_apply: move |kind| apply(kind)
                    }
                }
            }
        }
    }
}

#[component]
fn DetailField(icon: &'static str, label: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "flex items-center",
            span { class: "mr-3", {icon} }
            div {
                p { class: "text-xs text-gray-500", {label} }
                p { class: "font-semibold text-gray-800", "{value}" }
            }
        }
    }
}

#[component]
fn MovementButton(kind: MovementKind, on_apply: EventHandler<MovementKind>) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "flex flex-col items-center py-4 rounded-xl text-white font-bold text-sm shadow",
            style: "background-color: {kind.color().hex()}",
            onclick: move |_| on_apply.call(kind),
            span { class: "text-xl mb-1", {kind.icon()} }
            {kind.label()}
        }
    }
}
