// src/ui/services.rs - Shared service context for screens

//! Services shared by every screen: the merged configuration, the platform
//! manager (camera permission), the scanner adapter, and the lookup client.
//! Built once when the UI mounts and handed down through context.

use std::sync::Arc;

use dioxus::prelude::*;

use crate::config::{AppConfig, ConfigManager};
use crate::error::Result;
use crate::inventory::{LookupClient, MockInventoryLookup};
use crate::platform::PlatformManager;
use crate::scanner::ScannerAdapter;

#[derive(Clone)]
pub struct AppServices {
    pub config: AppConfig,
    pub platform: Arc<PlatformManager>,
    pub scanner: Arc<ScannerAdapter>,
    pub lookup: LookupClient,
}

impl std::fmt::Debug for AppServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppServices")
            .field("app", &self.config.app.name)
            .finish()
    }
}

impl AppServices {
    /// Builds the service set from a merged configuration.
    pub fn from_config(config: AppConfig) -> Result<Self> {
        let platform = Arc::new(PlatformManager::new()?);
        let scanner = Arc::new(ScannerAdapter::new(&config.scanner));
        let lookup = LookupClient::new(
            Arc::new(MockInventoryLookup::new(config.lookup.clone())),
            &config.lookup,
        );

        Ok(Self {
            config,
            platform,
            scanner,
            lookup,
        })
    }

    /// Loads configuration and builds services for a fresh UI session.
    pub fn bootstrap() -> Result<Self> {
        Self::from_config(load_config())
    }
}

fn load_config() -> AppConfig {
    #[cfg(not(target_arch = "wasm32"))]
    let manager = match std::env::var("STOCKLENS_CONFIG") {
        Ok(path) => ConfigManager::with_config_file(path),
        Err(_) => ConfigManager::new(),
    };
    #[cfg(target_arch = "wasm32")]
    let manager = ConfigManager::new();

    match manager.load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("falling back to default configuration: {e}");
            AppConfig::default()
        }
    }
}

/// Provides [`AppServices`] to the component tree. If bootstrap fails the
/// subtree is replaced with a blocking error screen.
#[component]
pub fn ServicesProvider(children: Element) -> Element {
    let services = use_hook(|| match AppServices::bootstrap() {
        Ok(services) => Some(services),
        Err(e) => {
            tracing::error!("service bootstrap failed: {e}");
            None
        }
    });
    use_context_provider(|| services.clone());

    if services.is_some() {
        rsx! {
            {children}
        }
    } else {
        rsx! {
            div {
                class: "min-h-screen flex items-center justify-center bg-gray-900",
                div {
                    class: "text-center",
                    div { class: "text-6xl text-red-500 mb-4", "⚠️" }
                    h1 {
                        class: "text-2xl font-bold text-white mb-2",
                        "Startup failed"
                    }
                    p {
                        class: "text-gray-300",
                        "The application services could not be initialized."
                    }
                }
            }
        }
    }
}

/// Hook to access the shared services. `None` only when bootstrap failed,
/// in which case the provider already blocks the subtree.
pub fn use_services() -> Option<AppServices> {
    use_context::<Option<AppServices>>()
}
