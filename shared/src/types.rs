//! Stock status classification
//!
//! The four tiers partition `[0, ∞)`: a quantity of zero is always critical,
//! anything at or below the alert threshold is low, up to 1.5× the threshold
//! is watch, and above that the stock is fine. With a threshold of zero the
//! low and watch bands are empty, so any positive quantity is immediately Ok.

use serde::{Deserialize, Serialize};

/// Status tier derived from quantity vs. alert threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Critique,
    Faible,
    Attention,
    Ok,
}

impl StockStatus {
    /// Classify a quantity against an alert threshold.
    ///
    /// Band boundaries are inclusive on the lower side (`<=`), exclusive
    /// above. The 1.5× boundary is evaluated in integer arithmetic
    /// (`2q <= 3t`) so it is exact.
    pub fn classify(quantity: i64, threshold: i64) -> Self {
        if quantity == 0 {
            StockStatus::Critique
        } else if quantity <= threshold {
            StockStatus::Faible
        } else if 2 * quantity <= 3 * threshold {
            StockStatus::Attention
        } else {
            StockStatus::Ok
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Critique => "critique",
            StockStatus::Faible => "faible",
            StockStatus::Attention => "attention",
            StockStatus::Ok => "ok",
        }
    }

    /// User-facing French label, as shown in the stock table and alerts
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Critique => "Stock épuisé",
            StockStatus::Faible => "Stock faible",
            StockStatus::Attention => "À surveiller",
            StockStatus::Ok => "Stock OK",
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_quantity_is_critical() {
        assert_eq!(StockStatus::classify(0, 0), StockStatus::Critique);
        assert_eq!(StockStatus::classify(0, 5), StockStatus::Critique);
        assert_eq!(StockStatus::classify(0, 100), StockStatus::Critique);
    }

    #[test]
    fn test_band_boundaries() {
        // threshold 10: low up to 10, watch up to 15, ok above
        assert_eq!(StockStatus::classify(1, 10), StockStatus::Faible);
        assert_eq!(StockStatus::classify(10, 10), StockStatus::Faible);
        assert_eq!(StockStatus::classify(11, 10), StockStatus::Attention);
        assert_eq!(StockStatus::classify(15, 10), StockStatus::Attention);
        assert_eq!(StockStatus::classify(16, 10), StockStatus::Ok);
    }

    #[test]
    fn test_odd_threshold_boundary_is_exact() {
        // threshold 5: 1.5 * 5 = 7.5, so 7 is watch and 8 is ok
        assert_eq!(StockStatus::classify(7, 5), StockStatus::Attention);
        assert_eq!(StockStatus::classify(8, 5), StockStatus::Ok);
    }

    #[test]
    fn test_zero_threshold_degenerates() {
        // No low or watch band: any positive quantity is Ok
        assert_eq!(StockStatus::classify(1, 0), StockStatus::Ok);
        assert_eq!(StockStatus::classify(50, 0), StockStatus::Ok);
    }
}
