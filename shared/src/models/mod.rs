//! Domain models for Amphore Stock

mod alert;
mod metrics;
mod product;

pub use alert::*;
pub use metrics::*;
pub use product::*;
