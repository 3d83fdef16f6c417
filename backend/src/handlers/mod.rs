//! HTTP handlers for Amphore Stock

pub mod alerts;
pub mod auth;
pub mod health;
pub mod metrics;
pub mod product;

pub use alerts::*;
pub use auth::*;
pub use health::*;
pub use metrics::*;
pub use product::*;
