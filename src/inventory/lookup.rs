// src/inventory/lookup.rs - Inventory lookup boundary

//! Lookup boundary between screens and the inventory source
//!
//! The source behind [`InventoryLookup`] is swappable; the only
//! implementation today synthesizes records with a simulated network delay.
//! [`LookupClient`] layers request semantics on top: every request gets a
//! monotonic id and only the newest request's result is delivered, so a
//! stale lookup that resolves after a newer one can never overwrite it.
//! In-flight requests can be cancelled when a screen goes away, and
//! transient failures are retried with a doubling backoff.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{Duration, Utc};
use parking_lot::Mutex;
use rand::Rng;
use tokio_util::sync::CancellationToken;

use crate::config::LookupConfig;
use crate::error::{Error, LookupOperation, Result};
use crate::inventory::record::{
    AlertKind, InventoryRecord, Movement, MovementKind, StockAlert, StockMetrics,
};
use crate::manager::PlatformSync;

async fn sleep_ms(ms: u64) {
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

/// Resolves a scanned code (or the demo flag, as `None`) to a record.
///
/// Asynchronous, single completion per invocation. Implementations do not
/// retry or deduplicate; that is [`LookupClient`]'s job.
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait InventoryLookup: PlatformSync + fmt::Debug {
    async fn lookup(&self, code: Option<&str>) -> Result<InventoryRecord>;
}

/// Synthetic source: fixed field values with the scanned code substituted
/// into the name and code fields, plus a simulated network delay.
#[derive(Debug, Clone)]
pub struct MockInventoryLookup {
    config: LookupConfig,
}

impl MockInventoryLookup {
    pub fn new(config: LookupConfig) -> Self {
        Self { config }
    }

    fn simulated_latency_ms(&self) -> u64 {
        let base = self.config.latency_ms;
        if self.config.latency_jitter_ms == 0 {
            return base;
        }
        base + rand::thread_rng().gen_range(0..=self.config.latency_jitter_ms)
    }

    fn synthesize(&self, code: &str) -> InventoryRecord {
        let today = Utc::now().date_naive();
        let movement = |id: u32, days_ago: i64, kind: MovementKind, quantity: i64,
                        user: &str, reference: &str, notes: &str| Movement {
            id,
            date: today - Duration::days(days_ago),
            kind,
            quantity,
            user: user.to_string(),
            reference: reference.to_string(),
            notes: Some(notes.to_string()),
        };

        InventoryRecord {
            item_code: code.to_string(),
            item_name: format!("Product {code}"),
            category: "Electronics".to_string(),
            current_stock: 45,
            min_stock: 20,
            max_stock: 100,
            location: "Warehouse A - Shelf 3B".to_string(),
            supplier: "Tech Solutions Inc".to_string(),
            unit_price: 150.0,
            total_value: 6750.0,
            last_updated: Utc::now(),
            movements: vec![
                movement(1, 0, MovementKind::Inbound, 20, "Juan Perez", "PO-2024-001", "Monthly restock"),
                movement(2, 1, MovementKind::Outbound, 15, "Maria Garcia", "SO-2024-045", "Premium customer sale"),
                movement(3, 2, MovementKind::Inbound, 30, "Carlos Lopez", "PO-2024-002", "Special order"),
                movement(4, 3, MovementKind::Adjustment, -5, "Ana Martinez", "ADJ-2024-012", "Inventory correction"),
                movement(5, 4, MovementKind::Outbound, 25, "Pedro Rodriguez", "SO-2024-044", "Regional distribution"),
            ],
            alerts: vec![
                StockAlert {
                    kind: AlertKind::Warning,
                    message: "Stock is approaching the minimum".to_string(),
                },
                StockAlert {
                    kind: AlertKind::Info,
                    message: "Next review scheduled in 7 days".to_string(),
                },
            ],
            metrics: StockMetrics {
                rotation_days: 45,
                avg_movement: 12,
                accuracy: 98,
            },
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl InventoryLookup for MockInventoryLookup {
    async fn lookup(&self, code: Option<&str>) -> Result<InventoryRecord> {
        sleep_ms(self.simulated_latency_ms()).await;

        let code = code.unwrap_or(&self.config.demo_code).to_string();

        if self.config.missing_codes.iter().any(|c| c == &code) {
            return Err(Error::lookup(
                Some(code.clone()),
                LookupOperation::NotFound,
                format!("No inventory record for {code}"),
            ));
        }
        if self.config.transient_codes.iter().any(|c| c == &code) {
            return Err(Error::lookup(
                Some(code.clone()),
                LookupOperation::Transient,
                "Inventory source temporarily unavailable",
            ));
        }

        tracing::debug!(%code, "mock lookup resolved");
        Ok(self.synthesize(&code))
    }
}

/// Retry behavior for transient lookup failures.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay_ms: u64,
}

impl From<&LookupConfig> for RetryPolicy {
    fn from(config: &LookupConfig) -> Self {
        Self {
            max_attempts: config.retry_max_attempts.max(1),
            base_delay_ms: config.retry_base_delay_ms,
        }
    }
}

struct ClientInner {
    next_id: AtomicU64,
    latest: AtomicU64,
    cancel_root: Mutex<CancellationToken>,
    retry: RetryPolicy,
}

/// Request-scoped wrapper over an [`InventoryLookup`] source.
#[derive(Clone)]
pub struct LookupClient {
    source: Arc<dyn InventoryLookup>,
    inner: Arc<ClientInner>,
}

impl fmt::Debug for LookupClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupClient")
            .field("latest", &self.inner.latest.load(Ordering::SeqCst))
            .field("retry", &self.inner.retry)
            .finish()
    }
}

impl LookupClient {
    pub fn new(source: Arc<dyn InventoryLookup>, config: &LookupConfig) -> Self {
        Self {
            source,
            inner: Arc::new(ClientInner {
                next_id: AtomicU64::new(0),
                latest: AtomicU64::new(0),
                cancel_root: Mutex::new(CancellationToken::new()),
                retry: RetryPolicy::from(config),
            }),
        }
    }

    /// Fetches a record, retrying transient failures.
    ///
    /// If a newer `fetch` starts before this one completes, this one's
    /// result is discarded and resolves to a `Superseded` error.
    pub async fn fetch(&self, code: Option<&str>) -> Result<InventoryRecord> {
        let request_id = self.inner.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.latest.store(request_id, Ordering::SeqCst);
        let token = self.inner.cancel_root.lock().child_token();

        let mut attempt = 0u32;
        let mut delay_ms = self.inner.retry.base_delay_ms;
        let outcome = loop {
            attempt += 1;
            let result = tokio::select! {
                _ = token.cancelled() => break Err(Self::cancelled(code)),
                result = self.source.lookup(code) => result,
            };
            match result {
                Err(e) if e.is_transient_lookup() && attempt < self.inner.retry.max_attempts => {
                    tracing::warn!(attempt, delay_ms, "transient lookup failure, retrying");
                    tokio::select! {
                        _ = token.cancelled() => break Err(Self::cancelled(code)),
                        _ = sleep_ms(delay_ms) => {}
                    }
                    delay_ms = delay_ms.saturating_mul(2);
                }
                other => break other,
            }
        };

        if self.inner.latest.load(Ordering::SeqCst) != request_id {
            tracing::debug!(request_id, "discarding superseded lookup result");
            return Err(Error::lookup(
                code.map(str::to_owned),
                LookupOperation::Superseded,
                "A newer lookup replaced this request",
            ));
        }
        outcome
    }

    /// Cancels all in-flight requests. New requests are unaffected.
    pub fn cancel(&self) {
        let mut guard = self.inner.cancel_root.lock();
        guard.cancel();
        *guard = CancellationToken::new();
    }

    fn cancelled(code: Option<&str>) -> Error {
        Error::lookup(
            code.map(str::to_owned),
            LookupOperation::Cancelled,
            "Lookup cancelled before completion",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::sync::atomic::AtomicU32;

    fn fast_config() -> LookupConfig {
        LookupConfig {
            latency_ms: 1,
            latency_jitter_ms: 0,
            retry_base_delay_ms: 1,
            ..Default::default()
        }
    }

    #[derive(Debug)]
    struct SlowSource {
        delay_ms: u64,
    }

    #[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
    #[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
    impl InventoryLookup for SlowSource {
        async fn lookup(&self, code: Option<&str>) -> Result<InventoryRecord> {
            sleep_ms(self.delay_ms).await;
            MockInventoryLookup::new(fast_config()).lookup(code).await
        }
    }

    #[derive(Debug)]
    struct FlakySource {
        remaining_failures: AtomicU32,
    }

    #[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
    #[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
    impl InventoryLookup for FlakySource {
        async fn lookup(&self, code: Option<&str>) -> Result<InventoryRecord> {
            if self.remaining_failures.load(Ordering::SeqCst) > 0 {
                self.remaining_failures.fetch_sub(1, Ordering::SeqCst);
                return Err(Error::lookup(
                    None,
                    LookupOperation::Transient,
                    "Source unavailable",
                ));
            }
            MockInventoryLookup::new(fast_config()).lookup(code).await
        }
    }

    #[tokio::test]
    async fn test_mock_substitutes_code() {
        let source = MockInventoryLookup::new(fast_config());

        let record = source.lookup(Some("QR-123")).await.unwrap();
        assert_eq!(record.item_code, "QR-123");
        assert_eq!(record.item_name, "Product QR-123");
        assert!(record.validate().is_ok());

        let demo = source.lookup(None).await.unwrap();
        assert_eq!(demo.item_code, "DEMO-001");
    }

    #[tokio::test]
    async fn test_mock_not_found() {
        let config = LookupConfig {
            missing_codes: vec!["GONE".to_string()],
            ..fast_config()
        };
        let source = MockInventoryLookup::new(config);

        let err = source.lookup(Some("GONE")).await.unwrap_err();
        assert!(matches!(
            err.kind,
            ErrorKind::Lookup {
                operation: LookupOperation::NotFound,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_stale_result_is_superseded() {
        let client = LookupClient::new(
            Arc::new(SlowSource { delay_ms: 40 }),
            &fast_config(),
        );

        let stale = {
            let client = client.clone();
            tokio::spawn(async move { client.fetch(Some("FIRST")).await })
        };
        sleep_ms(10).await;

        // Second request becomes the newest; it takes longer than the first
        // has left, so the first resolves while stale.
        let fresh = client.fetch(Some("SECOND")).await.unwrap();
        assert_eq!(fresh.item_code, "SECOND");

        let err = stale.await.unwrap().unwrap_err();
        assert!(matches!(
            err.kind,
            ErrorKind::Lookup {
                operation: LookupOperation::Superseded,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_cancel_abandons_in_flight_request() {
        let client = LookupClient::new(
            Arc::new(SlowSource { delay_ms: 200 }),
            &fast_config(),
        );

        let pending = {
            let client = client.clone();
            tokio::spawn(async move { client.fetch(Some("SKU-1")).await })
        };
        sleep_ms(10).await;
        client.cancel();

        let err = pending.await.unwrap().unwrap_err();
        assert!(matches!(
            err.kind,
            ErrorKind::Lookup {
                operation: LookupOperation::Cancelled,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_transient_failures_are_retried() {
        let client = LookupClient::new(
            Arc::new(FlakySource {
                remaining_failures: AtomicU32::new(2),
            }),
            &fast_config(),
        );

        let record = client.fetch(Some("SKU-2")).await.unwrap();
        assert_eq!(record.item_code, "SKU-2");
    }

    #[tokio::test]
    async fn test_retries_are_bounded() {
        let config = LookupConfig {
            retry_max_attempts: 2,
            ..fast_config()
        };
        let client = LookupClient::new(
            Arc::new(FlakySource {
                remaining_failures: AtomicU32::new(5),
            }),
            &config,
        );

        let err = client.fetch(Some("SKU-3")).await.unwrap_err();
        assert!(err.is_transient_lookup());
    }
}
