// src/inventory/mod.rs - Inventory domain

//! Inventory domain: records, stock classification, and the lookup boundary.

pub mod lookup;
pub mod record;
pub mod status;

pub use lookup::{InventoryLookup, LookupClient, MockInventoryLookup};
pub use record::{
    AlertKind, InventoryRecord, Movement, MovementKind, StockAlert, StockMetrics,
};
pub use status::{
    classify, classify_record, stock_percentage, ColorToken, StockStatus, HIGH_THRESHOLD,
};
