//! Product service: validation in front of the store boundary

use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::store::DynProductStore;
use shared::models::{Category, NewProduct, Product, ProductUpdate};
use shared::validation::{validate_new_product, validate_product_update};

/// Service wrapping the configured product store
#[derive(Clone)]
pub struct ProductService {
    store: DynProductStore,
}

impl ProductService {
    pub fn new(store: DynProductStore) -> Self {
        Self { store }
    }

    /// List all active products, sorted by name
    pub async fn list(&self) -> AppResult<Vec<Product>> {
        self.store.list_active().await
    }

    /// Fetch one active product
    pub async fn get(&self, id: Uuid) -> AppResult<Product> {
        self.store.get_by_id(id).await
    }

    /// Validate and create a product
    pub async fn create(&self, mut fields: NewProduct) -> AppResult<Product> {
        validate_new_product(&fields).map_err(|msg| AppError::Validation {
            field: "produit".to_string(),
            message: "Invalid product fields".to_string(),
            message_fr: msg.to_string(),
        })?;

        fields.nom = fields.nom.trim().to_string();
        self.store.create(fields).await
    }

    /// Validate and merge a partial update
    pub async fn update(&self, id: Uuid, mut fields: ProductUpdate) -> AppResult<Product> {
        validate_product_update(&fields).map_err(|msg| AppError::Validation {
            field: "produit".to_string(),
            message: "Invalid product fields".to_string(),
            message_fr: msg.to_string(),
        })?;

        if let Some(nom) = fields.nom.take() {
            fields.nom = Some(nom.trim().to_string());
        }

        self.store.update(id, fields).await?;
        self.store.get_by_id(id).await
    }

    /// Soft-delete a product
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.store.soft_delete(id).await
    }

    /// Quick stock adjustment: apply a signed delta, clamped at zero
    pub async fn adjust(
        &self,
        id: Uuid,
        delta: i64,
        reason: Option<String>,
    ) -> AppResult<Product> {
        if delta == 0 {
            return Err(AppError::Validation {
                field: "delta".to_string(),
                message: "Adjustment delta must be non-zero".to_string(),
                message_fr: "La quantité à ajuster doit être différente de zéro".to_string(),
            });
        }

        let reason = reason.filter(|r| !r.trim().is_empty());
        self.store.adjust_quantity(id, delta, reason).await
    }

    /// Active products of one category, sorted by name
    pub async fn list_by_category(&self, categorie: Category) -> AppResult<Vec<Product>> {
        self.store.list_by_category(categorie).await
    }

    /// Active products at or below their alert threshold
    pub async fn list_low_stock(&self) -> AppResult<Vec<Product>> {
        self.store.list_low_stock().await
    }
}
