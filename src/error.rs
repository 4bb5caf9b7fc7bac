// src/error.rs - Error handling with platform and lookup support

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    Configuration {
        key: Option<String>,
        validation_errors: Vec<String>,
    },
    Manager {
        manager_name: String,
        operation: ManagerOperation,
    },
    Lookup {
        item_code: Option<String>,
        operation: LookupOperation,
    },
    Scanner {
        operation: ScannerOperation,
    },
    Permission {
        required_permission: String,
        prompt_shown: bool,
    },
    Tracking {
        state: Option<String>,
    },
    Platform {
        platform: String,
        feature: String,
        fallback_available: bool,
    },
    Validation {
        field: Option<String>,
        rules: Vec<String>,
    },
    Application,
    Io,
    Serialization,
    Timeout,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ManagerOperation {
    Initialize,
    Shutdown,
    Configure,
    Operation(String),
}

/// Phases of an inventory lookup that can fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LookupOperation {
    /// The backing source has no record for the code. Terminal.
    NotFound,
    /// The source failed in a way that may succeed on retry.
    Transient,
    /// The request was cancelled before completion.
    Cancelled,
    /// A newer request replaced this one before it completed.
    Superseded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScannerOperation {
    Arm,
    Decode,
    Reactivate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Error {
    pub id: Uuid,
    pub kind: ErrorKind,
    pub message: String,
    pub severity: ErrorSeverity,
    pub source: String,
    pub correlation_id: Option<Uuid>,
    pub timestamp: DateTime<Utc>,
    pub metadata: crate::types::Metadata,
    pub causes: Vec<String>,
}

impl Error {
    /// Creates a new error with the specified kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
            severity: ErrorSeverity::Medium,
            source: "unknown".to_string(),
            correlation_id: None,
            timestamp: Utc::now(),
            metadata: std::collections::HashMap::new(),
            causes: Vec::new(),
        }
    }

    /// Sets the error severity
    pub fn severity(mut self, severity: ErrorSeverity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the error source
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Sets the correlation ID
    pub fn correlation_id(mut self, correlation_id: Uuid) -> Self {
        self.correlation_id = Some(correlation_id);
        self
    }

    /// Adds metadata to the error
    pub fn metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Adds a cause to the error chain
    pub fn caused_by(mut self, cause: impl fmt::Display) -> Self {
        self.causes.push(cause.to_string());
        self
    }

    /// Checks if the error should be handled automatically
    pub fn should_handle(&self) -> bool {
        matches!(self.severity, ErrorSeverity::Low | ErrorSeverity::Medium)
    }

    /// Checks if the error is critical
    pub fn is_critical(&self) -> bool {
        matches!(self.severity, ErrorSeverity::Critical)
    }

    /// Checks if the error is a transient lookup failure worth retrying
    pub fn is_transient_lookup(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Lookup {
                operation: LookupOperation::Transient,
                ..
            }
        )
    }

    /// Creates a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Configuration {
                key: None,
                validation_errors: Vec::new(),
            },
            message,
        )
        .severity(ErrorSeverity::High)
    }

    /// Creates a manager operation error
    pub fn manager(
        manager_name: impl Into<String>,
        operation: ManagerOperation,
        message: impl Into<String>,
    ) -> Self {
        Self::new(
            ErrorKind::Manager {
                manager_name: manager_name.into(),
                operation,
            },
            message,
        )
        .severity(ErrorSeverity::High)
    }

    /// Creates a lookup error for the given item code and phase
    pub fn lookup(
        item_code: Option<String>,
        operation: LookupOperation,
        message: impl Into<String>,
    ) -> Self {
        Self::new(
            ErrorKind::Lookup {
                item_code,
                operation,
            },
            message,
        )
    }

    /// Creates a scanner error
    pub fn scanner(operation: ScannerOperation, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Scanner { operation }, message)
    }

    /// Creates a permission error
    pub fn permission(required_permission: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Permission {
                required_permission: required_permission.into(),
                prompt_shown: false,
            },
            message,
        )
        .severity(ErrorSeverity::High)
    }

    /// Creates a platform-specific error
    pub fn platform(
        platform: impl Into<String>,
        feature: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(
            ErrorKind::Platform {
                platform: platform.into(),
                feature: feature.into(),
                fallback_available: false,
            },
            message,
        )
        .severity(ErrorSeverity::Medium)
    }

    /// Creates a validation error for a single field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Validation {
                field: Some(field.into()),
                rules: Vec::new(),
            },
            message,
        )
        .severity(ErrorSeverity::High)
    }

    /// Creates a timeout error
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Timeout, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}): {}",
            self.severity, self.source, self.id, self.message
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let msg = err.to_string();

        let mut error = Error::new(ErrorKind::Io, msg);
        error.source = "std::io::Error".to_string();
        error.severity = ErrorSeverity::High;

        error
    }
}

/// Extension trait for Results to add context
pub trait ResultExt<T> {
    /// Adds context to an error
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;

    /// Sets the error source
    fn with_source(self, source: impl Into<String>) -> Result<T>;

    /// Sets the correlation ID
    fn with_correlation(self, correlation_id: Uuid) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| Error::new(ErrorKind::Application, f()).caused_by(e))
    }

    fn with_source(self, source: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            Error::new(ErrorKind::Application, e.to_string())
                .source(source)
                .caused_by(e)
        })
    }

    fn with_correlation(self, correlation_id: Uuid) -> Result<T> {
        self.map_err(|e| {
            Error::new(ErrorKind::Application, e.to_string())
                .correlation_id(correlation_id)
                .caused_by(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = Error::config("Invalid configuration value")
            .source("config_manager")
            .metadata("key", serde_json::Value::String("lookup.latency_ms".to_string()));

        assert_eq!(error.severity, ErrorSeverity::High);
        assert_eq!(error.source, "config_manager");
        assert!(matches!(error.kind, ErrorKind::Configuration { .. }));
        assert!(error.metadata.contains_key("key"));
    }

    #[test]
    fn test_lookup_error_kinds() {
        let not_found = Error::lookup(
            Some("SKU-404".to_string()),
            LookupOperation::NotFound,
            "No record for scanned code",
        );
        assert!(!not_found.is_transient_lookup());

        let transient = Error::lookup(None, LookupOperation::Transient, "Source unavailable");
        assert!(transient.is_transient_lookup());
    }

    #[test]
    fn test_permission_error() {
        let error = Error::permission("camera", "Access denied");
        assert!(matches!(error.kind, ErrorKind::Permission { .. }));
        assert_eq!(error.severity, ErrorSeverity::High);
    }

    #[test]
    fn test_platform_error() {
        let error = Error::platform("wasm", "camera", "Camera API not available");
        assert!(matches!(error.kind, ErrorKind::Platform { .. }));
        assert_eq!(error.severity, ErrorSeverity::Medium);
    }
}
