// src/ui/pages/mod.rs - Page components module

use dioxus::prelude::*;

// Module declarations
mod ar_view;
mod detail;
mod home;
mod not_found;
mod scanner;

// Re-exports
pub use ar_view::ArView;
pub use detail::Detail;
pub use home::Home;
pub use not_found::NotFound;
pub use scanner::Scanner;

/// Common page wrapper component
#[component]
pub fn PageWrapper(
    #[props(default = "".to_string())] title: String,
    #[props(default = None)] subtitle: Option<String>,
    #[props(default = None)] actions: Option<Element>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "space-y-6",

            if !title.is_empty() {
                div {
                    class: "md:flex md:items-center md:justify-between",
                    div {
                        class: "flex-1 min-w-0",
                        h2 {
                            class: "text-2xl font-bold leading-7 text-gray-900 sm:truncate",
                            "{title}"
                        }
                        if let Some(subtitle) = subtitle {
                            p {
                                class: "mt-1 text-sm text-gray-500",
                                "{subtitle}"
                            }
                        }
                    }
                    if let Some(actions) = actions {
                        div {
                            class: "mt-4 flex md:mt-0 md:ml-4",
                            {actions}
                        }
                    }
                }
            }

            {children}
        }
    }
}

/// Loading skeleton component for pages
#[component]
pub fn PageSkeleton(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        div {
            class: "space-y-6 animate-pulse",
            div { class: "h-8 bg-gray-200 rounded w-1/3" }
            div {
                class: "space-y-4",
                div { class: "h-4 bg-gray-200 rounded w-3/4" }
                div { class: "h-4 bg-gray-200 rounded w-1/2" }
                div { class: "h-4 bg-gray-200 rounded w-5/6" }
            }
            p { class: "text-sm text-gray-400 text-center", "{message}" }
        }
    }
}

/// Error state component for pages
#[component]
pub fn PageError(
    #[props(default = "An error occurred".to_string())] message: String,
    #[props(default = None)] retry_action: Option<Callback<()>>,
) -> Element {
    rsx! {
        div {
            class: "text-center py-12",
            div {
                class: "text-6xl text-red-500 mb-4",
                "⚠️"
            }
            h2 {
                class: "text-2xl font-bold text-gray-900 mb-2",
                "Oops! Something went wrong"
            }
            p {
                class: "text-gray-600 mb-6",
                "{message}"
            }
            if let Some(retry) = retry_action {
                button {
                    r#type: "button",
                    class: "inline-flex items-center px-4 py-2 border border-transparent text-sm font-medium rounded-md shadow-sm text-white bg-blue-600 hover:bg-blue-700",
                    onclick: move |_| retry.call(()),
                    "Try Again"
                }
            }
        }
    }
}

/// Empty state component for pages
#[component]
pub fn EmptyState(
    #[props(default = "📭".to_string())] icon: String,
    #[props(default = "No data available".to_string())] title: String,
    #[props(default = "There's nothing to show here yet.".to_string())] description: String,
) -> Element {
    rsx! {
        div {
            class: "text-center py-12",
            div { class: "text-6xl mb-4", "{icon}" }
            h3 { class: "text-lg font-medium text-gray-900 mb-2", "{title}" }
            p { class: "text-gray-500", "{description}" }
        }
    }
}

/// Stat card component for metric rows
#[component]
pub fn StatCard(
    title: String,
    value: String,
    #[props(default = None)] icon: Option<String>,
) -> Element {
    rsx! {
        div {
            class: "bg-white overflow-hidden shadow rounded-lg",
            div {
                class: "p-5 flex items-center",
                if let Some(icon) = icon {
                    span { class: "text-2xl mr-4", "{icon}" }
                }
                dl {
                    class: "flex-1",
                    dt {
                        class: "text-sm font-medium text-gray-500 truncate",
                        "{title}"
                    }
                    dd {
                        class: "text-2xl font-semibold text-gray-900",
                        "{value}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_wrapper_creation() {
        let _wrapper = rsx! {
            PageWrapper {
                title: "Test Page".to_string(),
                div { "Content" }
            }
        };
    }

    #[test]
    fn test_stat_card_creation() {
        let _card = rsx! {
            StatCard {
                title: "Rotation Days".to_string(),
                value: "45".to_string(),
                icon: Some("🔄".to_string())
            }
        };
    }

    #[test]
    fn test_empty_state_creation() {
        let _empty = rsx! {
            EmptyState {
                icon: "📦".to_string(),
                title: "No movements".to_string(),
                description: "This item has no recorded movements".to_string()
            }
        };
    }
}
