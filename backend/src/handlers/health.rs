//! Service health endpoint

use axum::{extract::State, Json};
use serde::Serialize;

use crate::config::DataSourceKind;
use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub statut: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub source_de_donnees: &'static str,
    pub base_de_donnees: &'static str,
}

/// Reports liveness, the active product data source and whether Postgres
/// answers. Auth always runs against Postgres, so the database is probed
/// even when the product store is the in-memory one.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database_ok = sqlx::query("SELECT 1").execute(&state.db).await.is_ok();
    Json(health_response(state.config.data_source, database_ok))
}

fn health_response(data_source: DataSourceKind, database_ok: bool) -> HealthResponse {
    HealthResponse {
        statut: "ok",
        service: "Amphore Stock",
        version: env!("CARGO_PKG_VERSION"),
        source_de_donnees: data_source.as_str(),
        base_de_donnees: if database_ok {
            "accessible"
        } else {
            "inaccessible"
        },
    }
}
