//! HTTP handlers for category metrics endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::services::MetricsService;
use crate::AppState;
use shared::models::{Category, CategoryMetrics};
use shared::validation::validate_category_label;

#[derive(Debug, Deserialize)]
pub struct MetricsQuery {
    #[serde(rename = "catégorie")]
    pub categorie: Option<String>,
}

/// Metrics for one category; defaults to Vin when none is given
pub async fn get_metrics(
    State(state): State<AppState>,
    Query(query): Query<MetricsQuery>,
) -> AppResult<Json<CategoryMetrics>> {
    let categorie = match query.categorie.as_deref() {
        Some(label) => validate_category_label(label).map_err(|msg| AppError::Validation {
            field: "catégorie".to_string(),
            message: "Unknown category".to_string(),
            message_fr: msg.to_string(),
        })?,
        None => Category::Vin,
    };

    let service = MetricsService::new(state.store.clone());
    let metrics = service.for_category(categorie).await?;
    Ok(Json(metrics))
}

/// Wine dashboard metrics
pub async fn get_wine_metrics(
    State(state): State<AppState>,
) -> AppResult<Json<CategoryMetrics>> {
    let service = MetricsService::new(state.store.clone());
    let metrics = service.for_category(Category::Vin).await?;
    Ok(Json(metrics))
}
