//! Cell-level parsing for worksheet exports
//!
//! Values arrive as strings from the CSV export; numeric cells are detected
//! here so the extraction rules can distinguish "0" from "absent".

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

/// One worksheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Number(f64),
    Text(String),
}

impl Cell {
    /// Build a cell from a raw CSV field
    pub fn from_field(field: &str) -> Self {
        let trimmed = field.trim();
        if trimmed.is_empty() {
            return Cell::Empty;
        }
        // French exports write decimals with a comma
        let candidate = trimmed.replace(',', ".");
        if let Ok(value) = candidate.parse::<f64>() {
            return Cell::Number(value);
        }
        Cell::Text(trimmed.to_string())
    }

    /// Whether the cell carries a usable value. A numeric zero does not:
    /// the extraction rules treat it the same as an empty cell.
    pub fn is_present(&self) -> bool {
        match self {
            Cell::Empty => false,
            Cell::Number(n) => *n != 0.0,
            Cell::Text(t) => !t.is_empty(),
        }
    }

    /// Text content, empty for numeric and blank cells
    pub fn text(&self) -> &str {
        match self {
            Cell::Text(t) => t,
            _ => "",
        }
    }
}

/// Parse a price cell into a non-negative amount rounded to two decimals
pub fn parse_price(cell: &Cell) -> Decimal {
    match cell {
        Cell::Number(n) => Decimal::from_f64(*n)
            .unwrap_or(Decimal::ZERO)
            .round_dp(2)
            .max(Decimal::ZERO),
        Cell::Text(t) => {
            let cleaned: String = t
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
                .map(|c| if c == ',' { '.' } else { c })
                .collect();
            match cleaned.parse::<f64>() {
                Ok(parsed) => Decimal::from_f64(parsed)
                    .unwrap_or(Decimal::ZERO)
                    .round_dp(2)
                    .max(Decimal::ZERO),
                Err(_) => Decimal::ZERO,
            }
        }
        Cell::Empty => Decimal::ZERO,
    }
}

/// Parse a quantity cell into a non-negative integer, truncating decimals
pub fn parse_quantity(cell: &Cell) -> i64 {
    match cell {
        Cell::Number(n) => n.floor().max(0.0) as i64,
        Cell::Text(t) => {
            let digits: String = t.chars().filter(|c| c.is_ascii_digit()).collect();
            digits.parse::<i64>().unwrap_or(0)
        }
        Cell::Empty => 0,
    }
}

/// Clean a product name: drop line breaks, collapse whitespace, strip
/// decorative leading and trailing hyphens
pub fn clean_name(cell: &Cell) -> String {
    let raw = cell.text().replace(['\n', '\r'], "");
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.trim_matches('-').trim().to_string()
}

/// Normalized key used for deduplication
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
