//! HTTP handlers for product (boisson) endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::ProductService;
use crate::AppState;
use shared::models::{NewProduct, Product, ProductUpdate};
use shared::validation::validate_category_label;

/// Optional category filter for the list endpoint.
/// A query parameter rather than a path segment: "Café/Thé" contains a slash.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(rename = "catégorie")]
    pub categorie: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AdjustRequest {
    pub delta: i64,
    pub raison: Option<String>,
}

/// List active products, optionally filtered to one category
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let service = ProductService::new(state.store.clone());

    let products = match query.categorie.as_deref() {
        Some(label) => {
            let categorie = validate_category_label(label).map_err(|msg| AppError::Validation {
                field: "catégorie".to_string(),
                message: "Unknown category".to_string(),
                message_fr: msg.to_string(),
            })?;
            service.list_by_category(categorie).await?
        }
        None => service.list().await?,
    };

    Ok(Json(products))
}

/// Create a product
pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<NewProduct>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let service = ProductService::new(state.store.clone());
    let product = service.create(body).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Fetch one product
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
) -> AppResult<Json<Product>> {
    let service = ProductService::new(state.store.clone());
    let product = service.get(product_id).await?;
    Ok(Json(product))
}

/// Update a product (partial merge)
pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
    Json(body): Json<ProductUpdate>,
) -> AppResult<Json<Product>> {
    let service = ProductService::new(state.store.clone());
    let product = service.update(product_id, body).await?;
    Ok(Json(product))
}

/// Soft-delete a product
pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let service = ProductService::new(state.store.clone());
    service.delete(product_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Quick stock adjustment (±delta with an optional reason)
pub async fn adjust_product(
    State(state): State<AppState>,
    Path(product_id): Path<Uuid>,
    Json(body): Json<AdjustRequest>,
) -> AppResult<Json<Product>> {
    let service = ProductService::new(state.store.clone());
    let product = service.adjust(product_id, body.delta, body.raison).await?;
    Ok(Json(product))
}

/// Products at or below their alert threshold
pub async fn list_low_stock(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let service = ProductService::new(state.store.clone());
    let products = service.list_low_stock().await?;
    Ok(Json(products))
}
