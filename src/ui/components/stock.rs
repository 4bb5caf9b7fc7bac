// src/ui/components/stock.rs - Stock presentation widgets

use dioxus::prelude::*;

use crate::inventory::{
    classify, stock_percentage, Movement, StockAlert, StockStatus,
};
use crate::ui::pages::EmptyState;

/// Status pill, colored by the canonical status mapping.
#[component]
pub fn StockBadge(status: StockStatus) -> Element {
    rsx! {
        span {
            class: "inline-flex items-center px-3 py-1 rounded-full text-xs font-bold text-white",
            style: "background-color: {status.color().hex()}",
            "{status.label()}"
        }
    }
}

/// Stock level progress bar with the clamped fill percentage.
#[component]
pub fn StockProgress(current: u32, min: u32, max: u32) -> Element {
    let percentage = stock_percentage(current, max);
    let color = classify(current, min, max).color();

    rsx! {
        div {
            p { class: "text-sm text-gray-600 mb-2", "Stock Level" }
            div {
                class: "h-2 bg-gray-200 rounded-full overflow-hidden",
                div {
                    class: "h-full rounded-full",
                    style: "width: {percentage}%; background-color: {color.hex()}",
                }
            }
            p {
                class: "text-xs text-gray-500 text-center mt-1",
                {format!("{percentage:.1}% ({current}/{max})")}
            }
        }
    }
}

/// Chronological movement history, newest first.
#[component]
pub fn MovementList(movements: Vec<Movement>) -> Element {
    if movements.is_empty() {
        return rsx! {
            EmptyState {
                icon: "📝".to_string(),
                title: "No movements".to_string(),
                description: "This item has no recorded movements yet.".to_string()
            }
        };
    }

    rsx! {
        div {
            for movement in movements {
                div {
                    key: "{movement.id}",
                    class: "border-l-4 border-gray-200 pl-4 pb-4 mb-4 border-b border-b-gray-100",
                    div {
                        class: "flex justify-between items-center mb-1",
                        span {
                            class: "font-bold text-sm",
                            style: "color: {movement.kind.color().hex()}",
                            {format!("{} {}", movement.kind.icon(), movement.kind.label())}
                        }
                        span { class: "text-sm text-gray-500", "{movement.date}" }
                    }
                    p {
                        class: "text-sm font-semibold text-gray-800",
                        {format!(
                            "Quantity: {}{}",
                            if movement.quantity > 0 { "+" } else { "" },
                            movement.quantity
                        )}
                    }
                    p { class: "text-sm text-gray-600", "User: {movement.user}" }
                    p { class: "text-xs text-gray-400", "Ref: {movement.reference}" }
                    if let Some(notes) = &movement.notes {
                        p { class: "text-xs text-gray-500 italic", "Notes: {notes}" }
                    }
                }
            }
        }
    }
}

/// Advisory alerts from the source.
#[component]
pub fn AlertList(alerts: Vec<StockAlert>) -> Element {
    if alerts.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "bg-white shadow rounded-lg p-5",
            h3 { class: "text-lg font-bold text-gray-900 mb-3", "🚨 Alerts" }
            for (i, alert) in alerts.iter().enumerate() {
                div {
                    key: "{i}",
                    class: "flex items-center rounded-md p-3 mb-2",
                    style: "background-color: {alert.kind.color().hex()}1a",
                    span { class: "mr-3", {alert.kind.icon()} }
                    p { class: "text-sm text-gray-800", "{alert.message}" }
                }
            }
        }
    }
}
