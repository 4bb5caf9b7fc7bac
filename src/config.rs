// src/config.rs - Configuration management

//! Configuration system for the application
//!
//! Supports multiple configuration formats (YAML, JSON, TOML) selected by
//! file extension, environment variable overrides with a `STOCKLENS_` prefix,
//! and type-safe access to the merged configuration.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{Error, Result, ResultExt};
use crate::manager::{ManagedState, Manager, ManagerState, ManagerStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_extension(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub app: AppSettings,
    pub logging: LoggingConfig,
    pub scanner: ScannerConfig,
    pub lookup: LookupConfig,
    pub ar: ArConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub environment: String,
    pub debug: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "StockLens".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
            debug: cfg!(debug_assertions),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub console: ConsoleLogConfig,
    pub file: Option<FileLogConfig>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            console: ConsoleLogConfig::default(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleLogConfig {
    pub enabled: bool,
    pub colored: bool,
}

impl Default for ConsoleLogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            colored: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    pub path: PathBuf,
    pub rotate_daily: bool,
}

impl Default for FileLogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./logs/stocklens.log"),
            rotate_daily: true,
        }
    }
}

/// Scanner behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Arm the decoder as soon as the scanner screen is entered.
    pub arm_on_entry: bool,
    /// Torch/flash state on entry.
    pub torch_default: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            arm_on_entry: true,
            torch_default: false,
        }
    }
}

/// Inventory lookup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Base simulated latency for the mock source, in milliseconds.
    pub latency_ms: u64,
    /// Random additional latency, in milliseconds. Zero disables jitter.
    pub latency_jitter_ms: u64,
    /// Maximum attempts for transient failures (first try included).
    pub retry_max_attempts: u32,
    /// Delay before the first retry; doubles per attempt.
    pub retry_base_delay_ms: u64,
    /// Code used when the demo inventory is opened without a scan.
    pub demo_code: String,
    /// Codes the mock source treats as transiently failing.
    pub transient_codes: Vec<String>,
    /// Codes the mock source treats as unknown.
    pub missing_codes: Vec<String>,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            latency_ms: 1000,
            latency_jitter_ms: 500,
            retry_max_attempts: 3,
            retry_base_delay_ms: 250,
            demo_code: "DEMO-001".to_string(),
            transient_codes: Vec::new(),
            missing_codes: Vec::new(),
        }
    }
}

/// AR view configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArConfig {
    /// Seconds before the on-screen instructions auto-hide.
    pub instructions_timeout_secs: u64,
}

impl Default for ArConfig {
    fn default() -> Self {
        Self {
            instructions_timeout_secs: 5,
        }
    }
}

pub struct ConfigManager {
    state: ManagedState,
    config_path: Option<PathBuf>,
    env_prefix: String,
    config: Arc<RwLock<AppConfig>>,
}

impl fmt::Debug for ConfigManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigManager")
            .field("config_path", &self.config_path)
            .field("env_prefix", &self.env_prefix)
            .finish()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            state: ManagedState::new(Uuid::new_v4(), "config_manager"),
            config_path: None,
            env_prefix: "STOCKLENS".to_string(),
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    pub fn with_config_file<P: AsRef<Path>>(config_path: P) -> Self {
        let mut manager = Self::new();
        manager.config_path = Some(config_path.as_ref().to_path_buf());
        manager
    }

    /// Returns a clone of the current merged configuration.
    pub async fn config(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Loads the configuration file, applies environment overrides, and
    /// validates the result without mutating current state.
    pub fn load(&self) -> Result<AppConfig> {
        let mut value = match &self.config_path {
            Some(path) => Self::read_file(path)?,
            None => serde_json::to_value(AppConfig::default())
                .with_source("config_manager")?,
        };

        Self::apply_env_overrides(&mut value, &self.env_prefix);

        let config: AppConfig = serde_json::from_value(value)
            .map_err(|e| Error::config(format!("Invalid configuration: {e}")))?;
        Self::validate(&config)?;
        Ok(config)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn read_file(path: &Path) -> Result<Value> {
        let format = ConfigFormat::from_extension(path)
            .ok_or_else(|| Error::config("Unsupported configuration file format"))?;

        let raw = std::fs::read_to_string(path)?;

        match format {
            ConfigFormat::Json => serde_json::from_str(&raw)
                .map_err(|e| Error::config(format!("Invalid JSON config: {e}"))),
            ConfigFormat::Yaml => serde_yaml::from_str(&raw)
                .map_err(|e| Error::config(format!("Invalid YAML config: {e}"))),
            ConfigFormat::Toml => {
                let parsed: toml::Value = toml::from_str(&raw)
                    .map_err(|e| Error::config(format!("Invalid TOML config: {e}")))?;
                serde_json::to_value(parsed)
                    .map_err(|e| Error::config(format!("Invalid TOML config: {e}")))
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn read_file(_path: &Path) -> Result<Value> {
        Err(Error::platform(
            "wasm",
            "filesystem",
            "Configuration files are not readable in the browser",
        ))
    }

    /// Applies `PREFIX_SECTION__KEY=value` environment overrides onto the
    /// configuration tree. Nested keys are separated by double underscores.
    fn apply_env_overrides(value: &mut Value, prefix: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            let _ = (value, prefix);
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let prefix = format!("{prefix}_");
            for (key, raw) in std::env::vars() {
                let Some(path) = key.strip_prefix(&prefix) else {
                    continue;
                };
                let segments: Vec<String> = path
                    .split("__")
                    .map(|s| s.to_ascii_lowercase())
                    .collect();
                if segments.iter().any(|s| s.is_empty()) {
                    continue;
                }

                let parsed = serde_json::from_str::<Value>(&raw)
                    .unwrap_or(Value::String(raw.clone()));
                Self::insert_at(value, &segments, parsed);
            }
        }
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    fn insert_at(root: &mut Value, segments: &[String], new_value: Value) {
        let mut cursor = root;
        for segment in &segments[..segments.len() - 1] {
            if !cursor.is_object() {
                *cursor = Value::Object(serde_json::Map::new());
            }
            let Some(map) = cursor.as_object_mut() else {
                return;
            };
            cursor = map
                .entry(segment.clone())
                .or_insert_with(|| Value::Object(serde_json::Map::new()));
        }
        if !cursor.is_object() {
            *cursor = Value::Object(serde_json::Map::new());
        }
        if let Some(map) = cursor.as_object_mut() {
            map.insert(segments[segments.len() - 1].clone(), new_value);
        }
    }

    fn validate(config: &AppConfig) -> Result<()> {
        if config.lookup.retry_max_attempts == 0 {
            return Err(Error::config("lookup.retry_max_attempts must be at least 1"));
        }
        if config.lookup.demo_code.trim().is_empty() {
            return Err(Error::config("lookup.demo_code must not be empty"));
        }
        Ok(())
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl Manager for ConfigManager {
    fn name(&self) -> &str {
        "config_manager"
    }

    fn id(&self) -> Uuid {
        self.state.id()
    }

    async fn initialize(&mut self) -> Result<()> {
        self.state.set_state(ManagerState::Initializing).await;

        let loaded = self.load()?;
        *self.config.write().await = loaded;

        self.state.set_state(ManagerState::Running).await;
        Ok(())
    }

    async fn shutdown(&mut self) -> Result<()> {
        self.state.set_state(ManagerState::ShuttingDown).await;
        self.state.set_state(ManagerState::Shutdown).await;
        Ok(())
    }

    async fn status(&self) -> ManagerStatus {
        let mut status = self.state.status().await;
        status.add_metadata(
            "config_path",
            serde_json::json!(self.config_path.as_ref().map(|p| p.display().to_string())),
        );
        status.add_metadata("env_prefix", serde_json::json!(self.env_prefix));
        status
    }

    async fn get_config(&self) -> Option<serde_json::Value> {
        serde_json::to_value(self.config.read().await.clone()).ok()
    }

    fn is_essential(&self) -> bool {
        true
    }

    fn priority(&self) -> i32 {
        -100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.app.name, "StockLens");
        assert_eq!(config.lookup.demo_code, "DEMO-001");
        assert!(config.scanner.arm_on_entry);
        assert_eq!(config.ar.instructions_timeout_secs, 5);
    }

    #[test]
    fn test_config_format_from_extension() {
        assert_eq!(
            ConfigFormat::from_extension(Path::new("app.yaml")),
            Some(ConfigFormat::Yaml)
        );
        assert_eq!(
            ConfigFormat::from_extension(Path::new("app.toml")),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(ConfigFormat::from_extension(Path::new("app.ini")), None);
    }

    #[test]
    fn test_env_override_insertion() {
        let mut root = serde_json::to_value(AppConfig::default()).unwrap();
        ConfigManager::insert_at(
            &mut root,
            &["lookup".to_string(), "latency_ms".to_string()],
            serde_json::json!(50),
        );
        let config: AppConfig = serde_json::from_value(root).unwrap();
        assert_eq!(config.lookup.latency_ms, 50);
    }

    #[test]
    fn test_validation_rejects_zero_attempts() {
        let mut config = AppConfig::default();
        config.lookup.retry_max_attempts = 0;
        assert!(ConfigManager::validate(&config).is_err());
    }

    #[tokio::test]
    async fn test_manager_initializes_with_defaults() {
        let mut manager = ConfigManager::new();
        manager.initialize().await.unwrap();
        let config = manager.config().await;
        assert_eq!(config.app.name, "StockLens");
        manager.shutdown().await.unwrap();
    }
}
