// src/inventory/status.rs - Stock level classification

//! Stock status classification and presentation metadata
//!
//! Every screen that shows a stock level goes through this module, so the
//! status, its color token, and its label are consistent across the detail
//! view, the AR overlay, and the scanner result.

use serde::{Deserialize, Serialize};

use crate::inventory::record::InventoryRecord;

/// Fraction of `max_stock` at or above which stock is considered high.
///
/// One canonical constant for every call site. With the default 0.8, a
/// record at exactly `max_stock` always classifies as high.
pub const HIGH_THRESHOLD: f64 = 0.8;

/// Derived stock level. Never stored; recomputed on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    Low,
    Normal,
    High,
}

/// Closed set of presentation colors shared by statuses and movements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorToken {
    Red,
    Green,
    Blue,
    Orange,
}

impl ColorToken {
    pub fn hex(self) -> &'static str {
        match self {
            Self::Red => "#F44336",
            Self::Green => "#4CAF50",
            Self::Blue => "#2196F3",
            Self::Orange => "#FF9800",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Red => "bg-red-500",
            Self::Green => "bg-green-500",
            Self::Blue => "bg-blue-500",
            Self::Orange => "bg-orange-500",
        }
    }
}

impl StockStatus {
    pub fn color(self) -> ColorToken {
        match self {
            Self::Low => ColorToken::Red,
            Self::High => ColorToken::Green,
            Self::Normal => ColorToken::Blue,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Stock",
            Self::High => "High Stock",
            Self::Normal => "Normal Stock",
        }
    }
}

/// Classifies a stock level.
///
/// The rules are evaluated in a fixed order; the first match wins. The order
/// matters because the thresholds can overlap when `min_stock` is close to
/// `max_stock`.
pub fn classify(current_stock: u32, min_stock: u32, max_stock: u32) -> StockStatus {
    if current_stock <= min_stock {
        return StockStatus::Low;
    }
    if f64::from(current_stock) >= f64::from(max_stock) * HIGH_THRESHOLD {
        return StockStatus::High;
    }
    StockStatus::Normal
}

/// Convenience wrapper classifying a full record.
pub fn classify_record(record: &InventoryRecord) -> StockStatus {
    classify(record.current_stock, record.min_stock, record.max_stock)
}

/// Fill percentage for progress displays, clamped to `[0, 100]`.
///
/// Inputs outside the valid range are a data-quality problem, not a crash:
/// they are clamped and logged.
pub fn stock_percentage(current_stock: u32, max_stock: u32) -> f64 {
    if max_stock == 0 {
        tracing::warn!(current_stock, "stock percentage requested with max_stock of zero");
        return 0.0;
    }

    let raw = f64::from(current_stock) / f64::from(max_stock) * 100.0;
    if raw > 100.0 {
        tracing::warn!(
            current_stock,
            max_stock,
            "current stock exceeds maximum; clamping percentage"
        );
        return 100.0;
    }
    raw
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_boundaries() {
        // Inclusive on the low side.
        assert_eq!(classify(20, 20, 100), StockStatus::Low);
        // Inclusive on the high side: max itself always classifies high.
        assert_eq!(classify(100, 20, 100), StockStatus::High);
        // Exactly at the threshold.
        assert_eq!(classify(80, 20, 100), StockStatus::High);
        assert_eq!(classify(79, 20, 100), StockStatus::Normal);
    }

    #[test]
    fn test_low_wins_over_high_when_thresholds_overlap() {
        // min close to max: rule order decides.
        assert_eq!(classify(90, 95, 100), StockStatus::Low);
        assert_eq!(classify(95, 95, 100), StockStatus::Low);
    }

    #[test]
    fn test_reference_scenarios() {
        assert_eq!(classify(45, 20, 100), StockStatus::Normal);
        assert_eq!(classify(15, 20, 100), StockStatus::Low);
        // High under 0.8 and would be under 0.9 as well.
        assert_eq!(classify(95, 20, 100), StockStatus::High);
    }

    #[test]
    fn test_classifier_is_deterministic() {
        for _ in 0..10 {
            let status = classify(45, 20, 100);
            assert_eq!(status, StockStatus::Normal);
            assert_eq!(status.color(), ColorToken::Blue);
        }
    }

    #[test]
    fn test_status_presentation() {
        assert_eq!(StockStatus::Low.color(), ColorToken::Red);
        assert_eq!(StockStatus::High.color(), ColorToken::Green);
        assert_eq!(StockStatus::Normal.color(), ColorToken::Blue);
        assert_eq!(StockStatus::Low.label(), "Low Stock");
        assert_eq!(ColorToken::Blue.hex(), "#2196F3");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(stock_percentage(45, 100), 45.0);
        assert_eq!(stock_percentage(0, 100), 0.0);
        assert_eq!(stock_percentage(100, 100), 100.0);
    }

    #[test]
    fn test_percentage_clamps_out_of_range() {
        assert_eq!(stock_percentage(150, 100), 100.0);
        assert_eq!(stock_percentage(5, 0), 0.0);
    }
}
