// src/inventory/record.rs - Inventory record and movement history

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::inventory::status::ColorToken;

/// One trackable stock-keeping unit.
///
/// Records are synthesized fresh per screen load by the lookup boundary and
/// are never persisted; derived values (status, percentage) are recomputed
/// on every read rather than stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub item_code: String,
    pub item_name: String,
    pub category: String,
    pub current_stock: u32,
    pub min_stock: u32,
    pub max_stock: u32,
    pub location: String,
    pub supplier: String,
    pub unit_price: f64,
    pub total_value: f64,
    pub last_updated: DateTime<Utc>,
    /// Newest first.
    pub movements: Vec<Movement>,
    pub alerts: Vec<StockAlert>,
    pub metrics: StockMetrics,
}

impl InventoryRecord {
    /// Validates the stock-range invariant. Mock data is constructed valid;
    /// records built from untrusted input must pass through here.
    pub fn validate(&self) -> Result<()> {
        if self.min_stock > self.max_stock {
            return Err(Error::validation(
                "min_stock",
                format!(
                    "min_stock {} exceeds max_stock {} for {}",
                    self.min_stock, self.max_stock, self.item_code
                ),
            ));
        }
        Ok(())
    }

    /// Applies a stock movement: adjusts `current_stock` and prepends the
    /// movement to the history. Outbound quantities saturate at zero.
    pub fn apply_movement(&mut self, movement: Movement) {
        match movement.kind {
            MovementKind::Inbound => {
                self.current_stock = self
                    .current_stock
                    .saturating_add(movement.quantity.unsigned_abs() as u32);
            }
            MovementKind::Outbound => {
                self.current_stock = self
                    .current_stock
                    .saturating_sub(movement.quantity.unsigned_abs() as u32);
            }
            MovementKind::Adjustment => {
                let adjusted = i64::from(self.current_stock) + movement.quantity;
                self.current_stock = adjusted.clamp(0, i64::from(u32::MAX)) as u32;
            }
        }
        self.last_updated = Utc::now();
        self.movements.insert(0, movement);
    }
}

/// A recorded change event against an item's stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub id: u32,
    pub date: NaiveDate,
    pub kind: MovementKind,
    /// Signed: adjustments may be negative.
    pub quantity: i64,
    pub user: String,
    pub reference: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    Inbound,
    Outbound,
    Adjustment,
}

impl MovementKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Inbound => "Inbound",
            Self::Outbound => "Outbound",
            Self::Adjustment => "Adjustment",
        }
    }

    pub fn color(self) -> ColorToken {
        match self {
            Self::Inbound => ColorToken::Green,
            Self::Outbound => ColorToken::Red,
            Self::Adjustment => ColorToken::Orange,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Inbound => "⬇️",
            Self::Outbound => "⬆️",
            Self::Adjustment => "🔧",
        }
    }
}

/// Advisory message attached to a record by the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockAlert {
    pub kind: AlertKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Warning,
    Info,
}

impl AlertKind {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Warning => "⚠️",
            Self::Info => "ℹ️",
        }
    }

    pub fn color(self) -> ColorToken {
        match self {
            Self::Warning => ColorToken::Orange,
            Self::Info => ColorToken::Blue,
        }
    }
}

/// Derived analytics attached by the source; opaque to this app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StockMetrics {
    pub rotation_days: u32,
    pub avg_movement: u32,
    pub accuracy: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::status::{classify_record, StockStatus};

    fn sample_record() -> InventoryRecord {
        InventoryRecord {
            item_code: "SKU-100".to_string(),
            item_name: "Product SKU-100".to_string(),
            category: "Electronics".to_string(),
            current_stock: 45,
            min_stock: 20,
            max_stock: 100,
            location: "Warehouse A - Shelf 3B".to_string(),
            supplier: "Tech Solutions Inc".to_string(),
            unit_price: 150.0,
            total_value: 6750.0,
            last_updated: Utc::now(),
            movements: Vec::new(),
            alerts: Vec::new(),
            metrics: StockMetrics::default(),
        }
    }

    fn movement(kind: MovementKind, quantity: i64) -> Movement {
        Movement {
            id: 1,
            date: Utc::now().date_naive(),
            kind,
            quantity,
            user: "Test User".to_string(),
            reference: "REF-1".to_string(),
            notes: None,
        }
    }

    #[test]
    fn test_validation() {
        let mut record = sample_record();
        assert!(record.validate().is_ok());

        record.min_stock = 150;
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_apply_inbound_movement() {
        let mut record = sample_record();
        record.apply_movement(movement(MovementKind::Inbound, 20));

        assert_eq!(record.current_stock, 65);
        assert_eq!(record.movements.len(), 1);
    }

    #[test]
    fn test_apply_outbound_saturates_at_zero() {
        let mut record = sample_record();
        record.apply_movement(movement(MovementKind::Outbound, 500));

        assert_eq!(record.current_stock, 0);
    }

    #[test]
    fn test_movements_prepend_newest_first() {
        let mut record = sample_record();
        let mut first = movement(MovementKind::Inbound, 5);
        first.id = 1;
        let mut second = movement(MovementKind::Outbound, 3);
        second.id = 2;

        record.apply_movement(first);
        record.apply_movement(second);

        assert_eq!(record.movements[0].id, 2);
        assert_eq!(record.movements[1].id, 1);
    }

    #[test]
    fn test_movement_changes_derived_status() {
        let mut record = sample_record();
        assert_eq!(classify_record(&record), StockStatus::Normal);

        record.apply_movement(movement(MovementKind::Outbound, 30));
        assert_eq!(record.current_stock, 15);
        assert_eq!(classify_record(&record), StockStatus::Low);

        record.apply_movement(movement(MovementKind::Inbound, 70));
        assert_eq!(record.current_stock, 85);
        assert_eq!(classify_record(&record), StockStatus::High);
    }

    #[test]
    fn test_negative_adjustment() {
        let mut record = sample_record();
        record.apply_movement(movement(MovementKind::Adjustment, -5));
        assert_eq!(record.current_stock, 40);
    }

    #[test]
    fn test_movement_kind_presentation() {
        assert_eq!(MovementKind::Inbound.color(), ColorToken::Green);
        assert_eq!(MovementKind::Outbound.color(), ColorToken::Red);
        assert_eq!(MovementKind::Adjustment.color(), ColorToken::Orange);
        assert_eq!(MovementKind::Outbound.label(), "Outbound");
    }
}
