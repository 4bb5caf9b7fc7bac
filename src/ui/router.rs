// src/ui/router.rs

use crate::ui::{
    layout::Layout,
    pages::{
        ArView as ArViewPage, Detail as DetailPage, Home as HomePage, NotFound as NotFoundPage,
        Scanner as ScannerPage,
    },
    state::{use_permission_gate, PermissionState},
};
use dioxus::prelude::*;
#[allow(unused_imports)]
use dioxus_router::prelude::*;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/scan")]
    Scanner {},
    #[route("/ar/:code")]
    ArView { code: String },
    #[route("/item/:code")]
    Detail { code: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn Home() -> Element {
    rsx! {
        Layout {
            HomePage {}
        }
    }
}

#[component]
pub fn Scanner() -> Element {
    rsx! {
        CameraGatedLayout {
            ScannerPage {}
        }
    }
}

#[component]
pub fn ArView(code: String) -> Element {
    rsx! {
        CameraGatedLayout {
            ArViewPage { code }
        }
    }
}

#[component]
pub fn Detail(code: String) -> Element {
    rsx! {
        Layout {
            DetailPage { code }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Layout {
            NotFoundPage { path }
        }
    }
}

/// Gate for screens that need the camera. Requests permission once; a
/// denial blocks the screen with an explicit message instead of failing
/// silently.
#[component]
pub fn CameraGatedLayout(children: Element) -> Element {
    let permission = use_permission_gate();

    match permission {
        PermissionState::Granted => rsx! {
            Layout {
                {children}
            }
        },
        PermissionState::Unknown => rsx! {
            Layout {
                div {
                    class: "flex flex-col items-center justify-center py-24",
                    div { class: "animate-spin rounded-full h-16 w-16 border-b-2 border-blue-600" }
                    p { class: "mt-4 text-gray-600", "Requesting camera access..." }
                }
            }
        },
        PermissionState::Denied => rsx! {
            Layout {
                PermissionDenied {}
            }
        },
    }
}

#[component]
fn PermissionDenied() -> Element {
    rsx! {
        div {
            class: "text-center py-16",
            div { class: "text-6xl mb-4", "📷" }
            h1 {
                class: "text-2xl font-bold text-gray-900 mb-2",
                "Camera Permission Required"
            }
            p {
                class: "text-gray-600 mb-6",
                "The app needs camera access to scan QR codes. Grant the permission in your system settings and come back."
            }
            Link {
                to: Route::Home {},
                class: "inline-flex items-center px-4 py-2 border border-transparent text-sm font-medium rounded-md shadow-sm text-white bg-blue-600 hover:bg-blue-700",
                "Back to Home"
            }
        }
    }
}

pub mod nav {
    use super::*;

    pub fn is_active_route(current: &Route, target: &Route) -> bool {
        std::mem::discriminant(current) == std::mem::discriminant(target)
    }

    pub fn route_title(route: &Route) -> &'static str {
        match route {
            Route::Home { .. } => "StockLens",
            Route::Scanner { .. } => "Scan QR Code",
            Route::ArView { .. } => "AR View",
            Route::Detail { .. } => "Inventory Detail",
            Route::NotFound { .. } => "Not Found",
        }
    }

    pub fn route_icon(route: &Route) -> &'static str {
        match route {
            Route::Home { .. } => "🏠",
            Route::Scanner { .. } => "📷",
            Route::ArView { .. } => "🥽",
            Route::Detail { .. } => "📦",
            Route::NotFound { .. } => "❓",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_equality() {
        let route1 = Route::Scanner {};
        let route2 = Route::Scanner {};
        assert_eq!(route1, route2);
    }

    #[test]
    fn test_route_title() {
        assert_eq!(nav::route_title(&Route::Scanner {}), "Scan QR Code");
        assert_eq!(
            nav::route_title(&Route::Detail {
                code: "X".to_string()
            }),
            "Inventory Detail"
        );
    }

    #[test]
    fn test_route_discriminant_matching() {
        assert!(nav::is_active_route(
            &Route::Detail {
                code: "A".to_string()
            },
            &Route::Detail {
                code: "B".to_string()
            }
        ));
        assert!(!nav::is_active_route(&Route::Home {}, &Route::Scanner {}));
    }
}
