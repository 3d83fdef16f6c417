//! Low-stock alert aggregation
//!
//! Derived from the full in-memory product list on every load; there is no
//! incremental update path.

use serde::{Deserialize, Serialize};

use crate::models::{Category, Product};
use crate::types::StockStatus;

/// Optional category filters; when both are set they apply as AND conditions
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct AlertFilter {
    pub filter_category: Option<Category>,
    pub exclude_category: Option<Category>,
}

/// Alert counts per tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlertCounts {
    pub critique: usize,
    pub faible: usize,
    pub attention: usize,
    pub total: usize,
}

/// Apply category filters to a product list
pub fn filter_alerts(products: &[Product], filter: &AlertFilter) -> Vec<Product> {
    products
        .iter()
        .filter(|p| match filter.filter_category {
            Some(c) => p.categorie == c,
            None => true,
        })
        .filter(|p| match filter.exclude_category {
            Some(c) => p.categorie != c,
            None => true,
        })
        .cloned()
        .collect()
}

/// Count alerts per classifier tier
pub fn count_alerts(products: &[Product]) -> AlertCounts {
    let mut counts = AlertCounts {
        critique: 0,
        faible: 0,
        attention: 0,
        total: products.len(),
    };

    for product in products {
        match StockStatus::classify(product.quantite, product.seuil_alerte) {
            StockStatus::Critique => counts.critique += 1,
            StockStatus::Faible => counts.faible += 1,
            StockStatus::Attention => counts.attention += 1,
            StockStatus::Ok => {}
        }
    }

    counts
}

/// Products whose stock is exhausted
pub fn critical_products(products: &[Product]) -> Vec<Product> {
    products
        .iter()
        .filter(|p| StockStatus::classify(p.quantite, p.seuil_alerte) == StockStatus::Critique)
        .cloned()
        .collect()
}

/// Products at or below their alert threshold, excluding exhausted ones
pub fn low_products(products: &[Product]) -> Vec<Product> {
    products
        .iter()
        .filter(|p| StockStatus::classify(p.quantite, p.seuil_alerte) == StockStatus::Faible)
        .cloned()
        .collect()
}
