//! Bulk catalogue writer
//!
//! Writes imported products one at a time with a pacing delay, and keeps
//! going on individual failures so one bad row cannot abort a batch.

use std::time::Duration;

use serde::Serialize;

use crate::store::DynProductStore;
use shared::models::NewProduct;

/// Outcome of a bulk import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub succes: usize,
    pub erreurs: usize,
    pub total: usize,
}

/// Write a batch of products to the store
pub async fn import_products(
    store: &DynProductStore,
    products: Vec<NewProduct>,
    write_delay_ms: u64,
) -> ImportReport {
    let mut report = ImportReport {
        total: products.len(),
        ..Default::default()
    };

    tracing::info!(total = report.total, "Starting product import");

    for product in products {
        let nom = product.nom.clone();
        match store.create(product).await {
            Ok(created) => {
                tracing::info!(nom = %created.nom, id = %created.id, "Imported product");
                report.succes += 1;
                // Pace the writes to stay under backend rate limits
                tokio::time::sleep(Duration::from_millis(write_delay_ms)).await;
            }
            Err(err) => {
                tracing::error!(nom = %nom, error = %err, "Failed to import product");
                report.erreurs += 1;
            }
        }
    }

    tracing::info!(
        succes = report.succes,
        erreurs = report.erreurs,
        total = report.total,
        "Import finished"
    );

    report
}
