//! Shared types and models for Amphore Stock
//!
//! This crate contains the domain types, the stock-status classifier and the
//! pure aggregation logic shared between the backend server and the import
//! tooling. It performs no I/O.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
