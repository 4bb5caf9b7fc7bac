// src/logging.rs - Structured logging setup

//! Structured logging built on `tracing`
//!
//! Configures a console layer (pretty, compact, or JSON) and an optional
//! non-blocking file layer from [`LoggingConfig`]. The worker guard for the
//! file writer is held for the manager's lifetime so buffered records are
//! flushed on shutdown.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};
use uuid::Uuid;

use crate::config::{LogFormat, LoggingConfig};
use crate::error::{Error, Result};
use crate::manager::{ManagedState, Manager, ManagerState, ManagerStatus};

#[derive(Debug)]
pub struct LoggingManager {
    state: ManagedState,
    config: LoggingConfig,
    // Dropped on shutdown to flush the non-blocking file writer.
    file_guard: Option<WorkerGuard>,
    installed: bool,
}

impl LoggingManager {
    pub fn new(config: LoggingConfig) -> Self {
        Self {
            state: ManagedState::new(Uuid::new_v4(), "logging_manager"),
            config,
            file_guard: None,
            installed: false,
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.config.level.clone()))
    }

    /// Builds and installs the global subscriber. Fails if another
    /// subscriber is already installed (e.g. by the CLI bootstrap); callers
    /// treat that as non-fatal.
    fn install(&mut self) -> Result<()> {
        let filter = self.env_filter();

        let console_layer = if self.config.console.enabled {
            let layer = match self.config.format {
                LogFormat::Json => fmt::layer()
                    .json()
                    .with_ansi(false)
                    .boxed(),
                LogFormat::Pretty => fmt::layer()
                    .with_ansi(self.config.console.colored)
                    .boxed(),
                LogFormat::Compact => fmt::layer()
                    .compact()
                    .with_ansi(self.config.console.colored)
                    .boxed(),
            };
            Some(layer)
        } else {
            None
        };

        let file_layer = match &self.config.file {
            Some(file_config) => {
                let dir = file_config
                    .path
                    .parent()
                    .map(|p| p.to_path_buf())
                    .unwrap_or_else(|| std::path::PathBuf::from("."));
                let file_name = file_config
                    .path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| "stocklens.log".to_string());

                std::fs::create_dir_all(&dir)?;

                let appender = if file_config.rotate_daily {
                    tracing_appender::rolling::daily(&dir, &file_name)
                } else {
                    tracing_appender::rolling::never(&dir, &file_name)
                };
                let (writer, guard) = tracing_appender::non_blocking(appender);
                self.file_guard = Some(guard);

                Some(fmt::layer().with_writer(writer).with_ansi(false).boxed())
            }
            None => None,
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(console_layer)
            .with(file_layer)
            .try_init()
            .map_err(|e| Error::config(format!("Failed to install subscriber: {e}")))?;

        self.installed = true;
        Ok(())
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl Manager for LoggingManager {
    fn name(&self) -> &str {
        "logging_manager"
    }

    fn id(&self) -> Uuid {
        self.state.id()
    }

    async fn initialize(&mut self) -> Result<()> {
        self.state.set_state(ManagerState::Initializing).await;

        if let Err(e) = self.install() {
            // A global subscriber may already exist (tests, CLI bootstrap).
            tracing::debug!("Subscriber not installed: {e}");
        }

        self.state.set_state(ManagerState::Running).await;
        Ok(())
    }

    async fn shutdown(&mut self) -> Result<()> {
        self.state.set_state(ManagerState::ShuttingDown).await;
        self.file_guard.take();
        self.state.set_state(ManagerState::Shutdown).await;
        Ok(())
    }

    async fn status(&self) -> ManagerStatus {
        let mut status = self.state.status().await;
        status.add_metadata("level", serde_json::json!(self.config.level));
        status.add_metadata("installed", serde_json::json!(self.installed));
        status.add_metadata(
            "file_output",
            serde_json::json!(self.config.file.is_some()),
        );
        status
    }

    fn dependencies(&self) -> Vec<String> {
        vec!["config_manager".to_string()]
    }

    fn priority(&self) -> i32 {
        -90
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_logging_manager_lifecycle() {
        let mut manager = LoggingManager::new(LoggingConfig::default());
        manager.initialize().await.unwrap();

        let status = manager.status().await;
        assert_eq!(status.state, ManagerState::Running);
        assert_eq!(status.metadata.get("level").unwrap(), "info");

        manager.shutdown().await.unwrap();
        assert_eq!(manager.state.state().await, ManagerState::Shutdown);
    }

    #[tokio::test]
    async fn test_console_disabled_still_runs() {
        let config = LoggingConfig {
            console: crate::config::ConsoleLogConfig {
                enabled: false,
                colored: false,
            },
            ..Default::default()
        };
        let mut manager = LoggingManager::new(config);
        manager.initialize().await.unwrap();
        manager.shutdown().await.unwrap();
    }
}
