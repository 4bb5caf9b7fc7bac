// src/app.rs

//! Application core and manager orchestration
//!
//! Coordinates the system managers: configuration, logging, platform
//! providers, and the inventory lookup boundary. Managers initialize in
//! dependency order and shut down in reverse. The core also exposes the
//! services screens consume (lookup client, scanner adapter, platform
//! manager) and aggregate health/stats for the CLI.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::{Notify, RwLock};
use uuid::Uuid;

use crate::config::{AppConfig, ConfigManager};
use crate::error::{Result, ResultExt};
use crate::inventory::{LookupClient, MockInventoryLookup};
use crate::logging::LoggingManager;
use crate::manager::{HealthStatus, ManagedState, Manager, ManagerState};
use crate::platform::PlatformManager;
use crate::scanner::ScannerAdapter;

/// Application lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationState {
    Created,
    Initializing,
    Running,
    ShuttingDown,
    Shutdown,
    Error,
}

/// Application health information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationHealth {
    pub status: HealthStatus,
    pub uptime: Duration,
    pub managers: HashMap<String, HealthStatus>,
    pub last_check: DateTime<Utc>,
}

/// Application statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationStats {
    pub version: String,
    pub started_at: DateTime<Utc>,
    pub uptime: Duration,
    pub state: ApplicationState,
    pub manager_count: usize,
    pub initialized_managers: usize,
}

/// Main application core that orchestrates all managers
#[derive(Debug)]
pub struct ApplicationCore {
    state: ManagedState,
    app_state: Arc<RwLock<ApplicationState>>,
    started_at: DateTime<Utc>,

    config_manager: Option<ConfigManager>,
    logging_manager: Option<LoggingManager>,
    platform_manager: Option<Arc<PlatformManager>>,
    scanner: Option<Arc<ScannerAdapter>>,
    lookup: Option<LookupClient>,

    shutdown_signal: Arc<Notify>,
}

impl Default for ApplicationCore {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationCore {
    /// Create a new application core
    pub fn new() -> Self {
        Self {
            state: ManagedState::new(Uuid::new_v4(), "application_core"),
            app_state: Arc::new(RwLock::new(ApplicationState::Created)),
            started_at: Utc::now(),
            config_manager: None,
            logging_manager: None,
            platform_manager: None,
            scanner: None,
            lookup: None,
            shutdown_signal: Arc::new(Notify::new()),
        }
    }

    /// Create application core with configuration file
    pub fn with_config_file(config_path: impl AsRef<Path>) -> Self {
        let mut app = Self::new();
        app.config_manager = Some(ConfigManager::with_config_file(config_path));
        app
    }

    /// Initialize the application and all managers
    pub async fn initialize(&mut self) -> Result<()> {
        *self.app_state.write().await = ApplicationState::Initializing;
        self.state.set_state(ManagerState::Initializing).await;

        tracing::info!("Initializing application core");

        // Initialize core managers in dependency order
        self.init_config_manager().await?;
        let config = self.config().await;
        self.init_logging_manager(&config).await?;
        self.init_platform_manager().await?;
        self.init_services(&config);

        *self.app_state.write().await = ApplicationState::Running;
        self.state.set_state(ManagerState::Running).await;

        tracing::info!("Application core initialized successfully");
        Ok(())
    }

    async fn init_config_manager(&mut self) -> Result<()> {
        if self.config_manager.is_none() {
            self.config_manager = Some(ConfigManager::new());
        }

        if let Some(config_manager) = &mut self.config_manager {
            config_manager
                .initialize()
                .await
                .with_context(|| "Failed to initialize configuration manager".to_string())?;
        }

        Ok(())
    }

    async fn init_logging_manager(&mut self, config: &AppConfig) -> Result<()> {
        let mut logging_manager = LoggingManager::new(config.logging.clone());
        logging_manager
            .initialize()
            .await
            .with_context(|| "Failed to initialize logging manager".to_string())?;

        self.logging_manager = Some(logging_manager);
        Ok(())
    }

    async fn init_platform_manager(&mut self) -> Result<()> {
        let mut platform_manager = PlatformManager::new()
            .with_context(|| "Failed to create platform manager".to_string())?;

        platform_manager
            .initialize()
            .await
            .with_context(|| "Failed to initialize platform manager".to_string())?;

        self.platform_manager = Some(Arc::new(platform_manager));
        Ok(())
    }

    fn init_services(&mut self, config: &AppConfig) {
        self.scanner = Some(Arc::new(ScannerAdapter::new(&config.scanner)));
        self.lookup = Some(LookupClient::new(
            Arc::new(MockInventoryLookup::new(config.lookup.clone())),
            &config.lookup,
        ));
    }

    /// Returns the current merged configuration.
    pub async fn config(&self) -> AppConfig {
        match &self.config_manager {
            Some(manager) => manager.config().await,
            None => AppConfig::default(),
        }
    }

    /// Returns the shared platform manager, once initialized.
    pub fn platform(&self) -> Option<Arc<PlatformManager>> {
        self.platform_manager.clone()
    }

    /// Returns the scanner adapter, once initialized.
    pub fn scanner(&self) -> Option<Arc<ScannerAdapter>> {
        self.scanner.clone()
    }

    /// Returns the lookup client, once initialized.
    pub fn lookup_client(&self) -> Option<LookupClient> {
        self.lookup.clone()
    }

    /// Aggregated manager health.
    pub async fn get_health(&self) -> ApplicationHealth {
        let mut managers = HashMap::new();

        if let Some(manager) = &self.config_manager {
            managers.insert(manager.name().to_string(), manager.health_check().await);
        }
        if let Some(manager) = &self.logging_manager {
            managers.insert(manager.name().to_string(), manager.health_check().await);
        }
        if let Some(manager) = &self.platform_manager {
            managers.insert(manager.name().to_string(), manager.health_check().await);
        }

        let status = if managers.is_empty() {
            HealthStatus::Unknown
        } else if managers.values().any(|h| *h == HealthStatus::Unhealthy) {
            HealthStatus::Unhealthy
        } else if managers.values().any(|h| *h != HealthStatus::Healthy) {
            HealthStatus::Degraded
        } else {
            HealthStatus::Healthy
        };

        ApplicationHealth {
            status,
            uptime: self.uptime(),
            managers,
            last_check: Utc::now(),
        }
    }

    /// Application statistics snapshot.
    pub async fn get_stats(&self) -> ApplicationStats {
        let initialized = [
            self.config_manager.is_some(),
            self.logging_manager.is_some(),
            self.platform_manager.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count();

        ApplicationStats {
            version: crate::VERSION.to_string(),
            started_at: self.started_at,
            uptime: self.uptime(),
            state: *self.app_state.read().await,
            manager_count: 3,
            initialized_managers: initialized,
        }
    }

    fn uptime(&self) -> Duration {
        Utc::now()
            .signed_duration_since(self.started_at)
            .to_std()
            .unwrap_or_default()
    }

    /// Blocks until a shutdown is requested via signal or [`Self::request_shutdown`].
    pub async fn wait_for_shutdown(&self) -> Result<()> {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Received interrupt signal");
            }
            _ = self.shutdown_signal.notified() => {
                tracing::info!("Shutdown requested");
            }
        }

        Ok(())
    }

    /// Requests a graceful shutdown from another task.
    pub fn request_shutdown(&self) {
        self.shutdown_signal.notify_one();
    }

    /// Shut down all managers in reverse initialization order
    pub async fn shutdown(&mut self) -> Result<()> {
        *self.app_state.write().await = ApplicationState::ShuttingDown;
        self.state.set_state(ManagerState::ShuttingDown).await;

        tracing::info!("Shutting down application core");

        self.lookup = None;
        self.scanner = None;

        if let Some(platform_manager) = self.platform_manager.take() {
            // The Arc is shared with screens; only shut down if we hold the
            // last reference, otherwise the UI owns the remaining lifetime.
            match Arc::try_unwrap(platform_manager) {
                Ok(mut manager) => manager.shutdown().await?,
                Err(shared) => {
                    tracing::debug!("platform manager still shared; skipping shutdown");
                    self.platform_manager = Some(shared);
                }
            }
        }

        if let Some(mut logging_manager) = self.logging_manager.take() {
            logging_manager.shutdown().await?;
        }
        if let Some(mut config_manager) = self.config_manager.take() {
            config_manager.shutdown().await?;
        }

        *self.app_state.write().await = ApplicationState::Shutdown;
        self.state.set_state(ManagerState::Shutdown).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_application_lifecycle() {
        let mut app = ApplicationCore::new();
        assert_eq!(*app.app_state.read().await, ApplicationState::Created);

        app.initialize().await.unwrap();
        assert_eq!(*app.app_state.read().await, ApplicationState::Running);
        assert!(app.lookup_client().is_some());
        assert!(app.scanner().is_some());

        let health = app.get_health().await;
        assert_eq!(health.status, HealthStatus::Healthy);

        app.shutdown().await.unwrap();
        assert_eq!(*app.app_state.read().await, ApplicationState::Shutdown);
    }

    #[tokio::test]
    async fn test_stats_snapshot() {
        let mut app = ApplicationCore::new();
        app.initialize().await.unwrap();

        let stats = app.get_stats().await;
        assert_eq!(stats.state, ApplicationState::Running);
        assert_eq!(stats.initialized_managers, stats.manager_count);

        app.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_requested_shutdown_unblocks_wait() {
        let mut app = ApplicationCore::new();
        app.initialize().await.unwrap();

        app.request_shutdown();
        app.wait_for_shutdown().await.unwrap();

        app.shutdown().await.unwrap();
    }
}
