//! Business logic services for Amphore Stock

pub mod alerts;
pub mod auth;
pub mod metrics;
pub mod product;

pub use alerts::AlertService;
pub use auth::AuthService;
pub use metrics::MetricsService;
pub use product::ProductService;
