//! Inventory import pipeline
//!
//! Reconciles supplier stock worksheets into the product catalogue. The
//! worksheets are consumed as CSV exports of the two known layouts: the
//! combined stock sheet (two side-by-side blocks) and the wine cost sheet.

pub mod category;
pub mod parse;
pub mod sheets;
pub mod writer;

pub use category::detect_category;
pub use parse::{clean_name, normalize_name, parse_price, parse_quantity, Cell};
pub use sheets::{
    dedup_products, extract_stock_products, extract_wine_products, rows_from_csv,
    DEFAULT_SUPPLIERS,
};
pub use writer::{import_products, ImportReport};
