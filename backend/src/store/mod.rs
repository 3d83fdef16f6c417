//! Product store boundary
//!
//! All persistence goes through the [`ProductStore`] trait, resolved once at
//! startup from configuration. The live implementation targets Postgres; the
//! memory implementation backs the development data source and the tests.
//! Soft-deleted rows are filtered out here, at the single store boundary,
//! never at call sites.

mod memory;
mod postgres;

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::AppResult;
use shared::models::{Category, NewProduct, Product, ProductUpdate};

pub use memory::MemoryProductStore;
pub use postgres::PgProductStore;

/// Shared handle to the configured store
pub type DynProductStore = Arc<dyn ProductStore>;

#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All active products, sorted by name ascending
    async fn list_active(&self) -> AppResult<Vec<Product>>;

    /// A single product; not found unless it exists and is active
    async fn get_by_id(&self, id: Uuid) -> AppResult<Product>;

    /// Create a product with `actif = true` and a fresh modification date
    async fn create(&self, fields: NewProduct) -> AppResult<Product>;

    /// Merge the provided fields and refresh the modification date.
    /// Does not check the prior active state.
    async fn update(&self, id: Uuid, fields: ProductUpdate) -> AppResult<()>;

    /// Flip `actif` to false; the row is never physically removed
    async fn soft_delete(&self, id: Uuid) -> AppResult<()>;

    /// Apply a quantity delta, clamped at zero, recording the adjustment.
    /// Returns the updated product.
    async fn adjust_quantity(
        &self,
        id: Uuid,
        delta: i64,
        reason: Option<String>,
    ) -> AppResult<Product>;

    /// Active products of one category, sorted by name ascending
    async fn list_by_category(&self, categorie: Category) -> AppResult<Vec<Product>>;

    /// Active products at or below their alert threshold; no sort guarantee
    async fn list_low_stock(&self) -> AppResult<Vec<Product>>;
}
