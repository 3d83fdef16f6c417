//! HTTP handlers for low-stock alert endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::AppResult;
use crate::services::alerts::AlertReport;
use crate::services::AlertService;
use crate::AppState;
use shared::models::{AlertCounts, AlertFilter};

/// Full alert view, with optional category filters
pub async fn get_alerts(
    State(state): State<AppState>,
    Query(filter): Query<AlertFilter>,
) -> AppResult<Json<AlertReport>> {
    let service = AlertService::new(state.store.clone());
    let report = service.report(filter).await?;
    Ok(Json(report))
}

/// Per-tier counts only, for the compact panel
pub async fn get_alert_summary(
    State(state): State<AppState>,
    Query(filter): Query<AlertFilter>,
) -> AppResult<Json<AlertCounts>> {
    let service = AlertService::new(state.store.clone());
    let counts = service.summary(filter).await?;
    Ok(Json(counts))
}
