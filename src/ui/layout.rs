// src/ui/layout.rs - App chrome shared by all screens

use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

use crate::ui::router::{nav, Route};
use crate::ui::state::use_notifications;

/// Mobile-style layout: a top app bar, the screen content, and the toast
/// area for notifications.
#[component]
pub fn Layout(children: Element) -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gray-50 flex flex-col",
            TopBar {}
            main {
                class: "flex-1 max-w-3xl w-full mx-auto px-4 py-6",
                {children}
            }
            NotificationArea {}
        }
    }
}

#[component]
fn TopBar() -> Element {
    let route: Route = use_route();
    let navigator = use_navigator();
    let show_back = !matches!(route, Route::Home {});

    rsx! {
        header {
            class: "bg-blue-600 text-white shadow",
            div {
                class: "max-w-3xl mx-auto px-4 py-3 flex items-center",
                if show_back {
                    button {
                        r#type: "button",
                        class: "mr-3 rounded-full p-2 hover:bg-blue-700",
                        onclick: move |_| {
                            navigator.go_back();
                        },
                        "←"
                    }
                }
                span { class: "text-xl mr-2", {nav::route_icon(&route)} }
                h1 {
                    class: "text-lg font-bold",
                    {nav::route_title(&route)}
                }
            }
        }
    }
}

#[component]
fn NotificationArea() -> Element {
    let (notifications, _, remove) = use_notifications();

    if notifications.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "fixed bottom-4 right-4 space-y-2 w-80",
            for notification in notifications {
                div {
                    key: "{notification.id}",
                    class: "bg-white shadow-lg rounded-lg p-4 flex items-start border border-gray-200",
                    span { class: "text-xl mr-3", {notification.notification_type.icon()} }
                    div {
                        class: "flex-1",
                        p { class: "text-sm font-medium text-gray-900", "{notification.title}" }
                        p { class: "text-sm text-gray-500", "{notification.message}" }
                    }
                    button {
                        r#type: "button",
                        class: "ml-2 text-gray-400 hover:text-gray-600",
                        onclick: move |_| remove(notification.id),
                        "✕"
                    }
                }
            }
        }
    }
}
