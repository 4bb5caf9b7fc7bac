// src/scanner.rs - QR scanner adapter

//! Adapter over the external QR decoding component
//!
//! The decoder pushes raw decode and error callbacks; this adapter enforces
//! the arming protocol on top: while armed, the first decode is delivered
//! and the adapter suspends itself. Further decodes are dropped until the
//! consumer explicitly reactivates. Decode failures are forwarded without
//! touching the armed state so the consumer can offer retry-or-exit.

use std::sync::atomic::{AtomicBool, Ordering};

use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use parking_lot::Mutex;

use crate::config::ScannerConfig;

/// Event delivered to the scanner screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// A code was decoded while the adapter was armed.
    Decoded(String),
    /// The camera or decoder failed; recoverable via reactivation.
    Failed(String),
}

#[derive(Debug)]
pub struct ScannerAdapter {
    armed: AtomicBool,
    torch_on: AtomicBool,
    sender: Mutex<Option<UnboundedSender<ScanEvent>>>,
}

impl ScannerAdapter {
    pub fn new(config: &ScannerConfig) -> Self {
        Self {
            armed: AtomicBool::new(config.arm_on_entry),
            torch_on: AtomicBool::new(config.torch_default),
            sender: Mutex::new(None),
        }
    }

    /// Subscribes the consumer. A new subscription replaces any previous
    /// one; there is exactly one consumer screen at a time.
    pub fn subscribe(&self) -> UnboundedReceiver<ScanEvent> {
        let (tx, rx) = unbounded();
        *self.sender.lock() = Some(tx);
        rx
    }

    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::SeqCst)
    }

    /// Re-arms decoding after a consumed decode event.
    pub fn reactivate(&self) {
        self.armed.store(true, Ordering::SeqCst);
        tracing::debug!("scanner reactivated");
    }

    pub fn torch_on(&self) -> bool {
        self.torch_on.load(Ordering::SeqCst)
    }

    pub fn toggle_torch(&self) -> bool {
        !self.torch_on.fetch_xor(true, Ordering::SeqCst)
    }

    /// Decoder callback: a physical code was read. Consumes the armed state;
    /// decodes while suspended are dropped.
    pub fn on_decode(&self, payload: impl Into<String>) {
        let payload = payload.into();
        if self
            .armed
            .compare_exchange(true, false, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            tracing::debug!(%payload, "decode while suspended; dropped");
            return;
        }

        tracing::info!(%payload, "QR code decoded");
        self.emit(ScanEvent::Decoded(payload));
    }

    /// Decoder callback: the camera or decoder failed.
    pub fn on_error(&self, reason: impl Into<String>) {
        let reason = reason.into();
        tracing::warn!(%reason, "scanner error");
        self.emit(ScanEvent::Failed(reason));
    }

    fn emit(&self, event: ScanEvent) {
        let guard = self.sender.lock();
        if let Some(sender) = guard.as_ref() {
            if sender.unbounded_send(event).is_err() {
                tracing::debug!("scan event dropped; subscriber gone");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter() -> ScannerAdapter {
        ScannerAdapter::new(&ScannerConfig::default())
    }

    #[test]
    fn test_decode_delivers_once_and_suspends() {
        let scanner = adapter();
        let mut events = scanner.subscribe();

        scanner.on_decode("QR-1");
        assert!(!scanner.is_armed());
        assert_eq!(
            events.try_next().unwrap(),
            Some(ScanEvent::Decoded("QR-1".to_string()))
        );

        // Suspended: further decodes are dropped.
        scanner.on_decode("QR-2");
        assert!(events.try_next().is_err());
    }

    #[test]
    fn test_reactivate_rearms() {
        let scanner = adapter();
        let mut events = scanner.subscribe();

        scanner.on_decode("QR-1");
        let _ = events.try_next();

        scanner.reactivate();
        assert!(scanner.is_armed());

        scanner.on_decode("QR-2");
        assert_eq!(
            events.try_next().unwrap(),
            Some(ScanEvent::Decoded("QR-2".to_string()))
        );
    }

    #[test]
    fn test_errors_do_not_consume_armed_state() {
        let scanner = adapter();
        let mut events = scanner.subscribe();

        scanner.on_error("camera unavailable");
        assert!(scanner.is_armed());
        assert_eq!(
            events.try_next().unwrap(),
            Some(ScanEvent::Failed("camera unavailable".to_string()))
        );
    }

    #[test]
    fn test_disarmed_on_entry_when_configured() {
        let config = ScannerConfig {
            arm_on_entry: false,
            ..Default::default()
        };
        let scanner = ScannerAdapter::new(&config);
        let mut events = scanner.subscribe();

        scanner.on_decode("QR-1");
        assert!(events.try_next().is_err());
    }

    #[test]
    fn test_torch_toggle() {
        let scanner = adapter();
        assert!(!scanner.torch_on());
        assert!(scanner.toggle_torch());
        assert!(scanner.torch_on());
        assert!(!scanner.toggle_torch());
    }
}
