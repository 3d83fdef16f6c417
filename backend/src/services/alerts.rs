//! Low-stock alert service
//!
//! Recomputes the alert view from the store on every call; there is no
//! incremental state.

use serde::Serialize;

use crate::error::AppResult;
use crate::store::DynProductStore;
use shared::models::{
    count_alerts, critical_products, filter_alerts, low_products, AlertCounts, AlertFilter,
    Product,
};

/// Full alert view for a dashboard load
#[derive(Debug, Serialize)]
pub struct AlertReport {
    pub alertes: Vec<Product>,
    pub counts: AlertCounts,
    pub critiques: Vec<Product>,
    pub faibles: Vec<Product>,
}

#[derive(Clone)]
pub struct AlertService {
    store: DynProductStore,
}

impl AlertService {
    pub fn new(store: DynProductStore) -> Self {
        Self { store }
    }

    /// Low-stock products with both category filters applied, plus per-tier
    /// counts and the critical/low convenience lists
    pub async fn report(&self, filter: AlertFilter) -> AppResult<AlertReport> {
        let low_stock = self.store.list_low_stock().await?;
        let alertes = filter_alerts(&low_stock, &filter);

        let counts = count_alerts(&alertes);
        let critiques = critical_products(&alertes);
        let faibles = low_products(&alertes);

        Ok(AlertReport {
            alertes,
            counts,
            critiques,
            faibles,
        })
    }

    /// Counts only, for the compact panel
    pub async fn summary(&self, filter: AlertFilter) -> AppResult<AlertCounts> {
        let report = self.report(filter).await?;
        Ok(report.counts)
    }
}
