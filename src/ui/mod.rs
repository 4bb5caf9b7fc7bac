// src/ui/mod.rs - UI system coordinator

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export main app component
pub use app::App;

// Module declarations
pub mod app;
pub mod components;
pub mod layout;
pub mod pages;
pub mod router;
pub mod services;
pub mod state;

// Re-exports for convenience
pub use pages::{ArView, Detail, Home, NotFound, Scanner};
pub use router::Route;
pub use services::{use_services, AppServices, ServicesProvider};
pub use state::*;

/// Notification shown in the in-app toast area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub read: bool,
}

/// Notification types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationType {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationType {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Info => "ℹ️",
            Self::Success => "✅",
            Self::Warning => "⚠️",
            Self::Error => "❌",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_type_icons() {
        assert_eq!(NotificationType::Success.icon(), "✅");
        assert_eq!(NotificationType::Error.icon(), "❌");
    }
}
