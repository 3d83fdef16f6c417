//! Category metrics service (wine dashboard)

use crate::error::AppResult;
use crate::store::DynProductStore;
use shared::models::{category_metrics, Category, CategoryMetrics};

#[derive(Clone)]
pub struct MetricsService {
    store: DynProductStore,
}

impl MetricsService {
    pub fn new(store: DynProductStore) -> Self {
        Self { store }
    }

    /// Metrics over the active products of one category
    pub async fn for_category(&self, categorie: Category) -> AppResult<CategoryMetrics> {
        let products = self.store.list_active().await?;
        Ok(category_metrics(&products, categorie))
    }
}
