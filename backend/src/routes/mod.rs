//! Route definitions for the Amphore Stock backend

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes. The state is taken here so the auth middleware can
/// verify tokens against the configured JWT secret.
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Auth routes (public, except /me)
        .nest("/auth", auth_routes(state.clone()))
        // Protected routes - product management
        .nest("/produits", product_routes(state.clone()))
        // Protected routes - low-stock alerts
        .nest("/alertes", alert_routes(state.clone()))
        // Protected routes - category metrics
        .nest("/metriques", metrics_routes(state))
}

/// Authentication routes
fn auth_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/refresh", post(handlers::refresh))
        .route("/logout", post(handlers::logout))
        .merge(session_routes(state))
}

/// Session routes (protected)
fn session_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/me", get(handlers::me))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Product management routes (protected)
fn product_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route("/stock-faible", get(handlers::list_low_stock))
        .route(
            "/:product_id",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .route("/:product_id/ajustement", post(handlers::adjust_product))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Alert routes (protected)
fn alert_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_alerts))
        .route("/resume", get(handlers::get_alert_summary))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Metrics routes (protected)
fn metrics_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_metrics))
        .route("/vins", get(handlers::get_wine_metrics))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
