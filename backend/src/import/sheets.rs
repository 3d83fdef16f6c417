//! Worksheet extraction rules
//!
//! Both known layouts start their data at row index 2 and mark section
//! headers as a short name with the neighbouring cells empty.

use std::collections::HashSet;
use std::path::Path;

use rand::Rng;
use rust_decimal::Decimal;

use crate::import::category::detect_category;
use crate::import::parse::{clean_name, normalize_name, parse_price, parse_quantity, Cell};
use shared::models::NewProduct;

/// Suppliers assigned round-robin by the import; the worksheets carry none
pub const DEFAULT_SUPPLIERS: [&str; 6] = [
    "Metro",
    "Sysco",
    "Vinatis",
    "Premium Vins",
    "Coffee Shop",
    "Fournisseur local",
];

static EMPTY_CELL: Cell = Cell::Empty;

fn cell(row: &[Cell], index: usize) -> &Cell {
    row.get(index).unwrap_or(&EMPTY_CELL)
}

fn random_supplier<R: Rng>(rng: &mut R) -> String {
    DEFAULT_SUPPLIERS[rng.gen_range(0..DEFAULT_SUPPLIERS.len())].to_string()
}

/// A short name with no quantity or price next to it is a section header
fn is_section_header(name: &str, row: &[Cell]) -> bool {
    !name.is_empty()
        && !cell(row, 1).is_present()
        && !cell(row, 2).is_present()
        && name.chars().count() < 20
}

/// Load a worksheet export into a row array
pub fn rows_from_csv(path: &Path) -> anyhow::Result<Vec<Vec<Cell>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(Cell::from_field).collect());
    }
    Ok(rows)
}

/// Extract products from the combined stock sheet.
///
/// The sheet holds two blocks side by side: wines and spirits on the left
/// (columns 0-2), soft drinks on the right (columns 5-7). Section headers
/// only exist in the left block; the right block is all softs.
pub fn extract_stock_products<R: Rng>(rows: &[Vec<Cell>], rng: &mut R) -> Vec<NewProduct> {
    let mut products = Vec::new();
    let mut current_section = String::new();

    for row in rows.iter().skip(2) {
        if row.is_empty() {
            continue;
        }

        let name = clean_name(cell(row, 0));

        if is_section_header(&name, row) {
            current_section = name;
            continue;
        }

        // Left block
        if !name.is_empty()
            && (cell(row, 1).is_present() || cell(row, 2).is_present())
            && name.chars().count() > 2
        {
            let categorie = detect_category(&name, &current_section);
            products.push(NewProduct {
                nom: name,
                categorie,
                quantite: parse_quantity(cell(row, 1)),
                seuil_alerte: categorie.default_threshold(),
                prix_achat: parse_price(cell(row, 2)),
                fournisseur: random_supplier(rng),
            });
        }

        // Right block
        let right_name = clean_name(cell(row, 5));
        if !right_name.is_empty()
            && (cell(row, 6).is_present() || cell(row, 7).is_present())
            && right_name.chars().count() > 2
        {
            let categorie = detect_category(&right_name, "Softs");
            products.push(NewProduct {
                nom: right_name,
                categorie,
                quantite: parse_quantity(cell(row, 6)),
                seuil_alerte: categorie.default_threshold(),
                prix_achat: parse_price(cell(row, 7)),
                fournisseur: random_supplier(rng),
            });
        }
    }

    products
}

/// Extract products from the wine cost sheet.
///
/// Column 1 carries the by-the-glass purchase price, column 7 the bottle
/// price. The bottle price wins when present; otherwise a bottle is
/// estimated at four glasses. The sheet carries no stock counts, so
/// quantities are placeholder values to be corrected by hand.
pub fn extract_wine_products<R: Rng>(rows: &[Vec<Cell>], rng: &mut R) -> Vec<NewProduct> {
    let mut products = Vec::new();
    let mut current_section = String::new();

    for row in rows.iter().skip(2) {
        if row.is_empty() {
            continue;
        }

        let name = clean_name(cell(row, 0));

        if is_section_header(&name, row) {
            current_section = name;
            continue;
        }

        if name.chars().count() > 5 && (cell(row, 1).is_present() || cell(row, 7).is_present()) {
            let bottle_price = parse_price(cell(row, 7));
            let glass_price = parse_price(cell(row, 1));
            let price = if bottle_price > Decimal::ZERO {
                bottle_price
            } else {
                glass_price * Decimal::from(4)
            };

            if price > Decimal::ZERO {
                let categorie = detect_category(&name, &current_section);
                products.push(NewProduct {
                    nom: name,
                    categorie,
                    quantite: rng.gen_range(1..=10),
                    seuil_alerte: categorie.default_threshold(),
                    prix_achat: price,
                    fournisseur: random_supplier(rng),
                });
            }
        }
    }

    products
}

/// Deduplicate by normalized name; the first occurrence wins
pub fn dedup_products(products: Vec<NewProduct>) -> Vec<NewProduct> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for product in products {
        let key = normalize_name(&product.nom);
        if key.chars().count() > 2 && seen.insert(key) {
            unique.push(product);
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use shared::models::Category;
    use std::str::FromStr;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn text(value: &str) -> Cell {
        Cell::from_field(value)
    }

    fn row(fields: &[&str]) -> Vec<Cell> {
        fields.iter().map(|f| Cell::from_field(f)).collect()
    }

    #[test]
    fn test_stock_sheet_sections_and_blocks() {
        let rows = vec![
            row(&["Stocks juillet", "", "", "", "", "", "", ""]),
            row(&["Nom", "Qté", "Prix", "", "", "Nom", "Qté", "Prix"]),
            row(&["Blancs", "", "", "", "", "", "", ""]),
            row(&["Sancerre 2022", "4", "12.50", "", "", "Coca-Cola 33cl", "24", "0.80"]),
            row(&["Rouges", "", "", "", "", "", "", ""]),
            row(&["Saint-Julien", "2", "28,00", "", "", "Perrier", "12", "0.60"]),
        ];

        let products = extract_stock_products(&rows, &mut rng());
        assert_eq!(products.len(), 4);

        let sancerre = &products[0];
        assert_eq!(sancerre.nom, "Sancerre 2022");
        assert_eq!(sancerre.categorie, Category::Vin);
        assert_eq!(sancerre.quantite, 4);
        assert_eq!(sancerre.prix_achat, Decimal::from_str("12.50").unwrap());
        assert_eq!(sancerre.seuil_alerte, 3);

        let coca = &products[1];
        assert_eq!(coca.nom, "Coca-Cola 33cl");
        assert_eq!(coca.categorie, Category::Soft);
        assert_eq!(coca.seuil_alerte, 10);

        // Section switched to Rouges for the second left-block product
        assert_eq!(products[2].nom, "Saint-Julien");
        assert_eq!(products[2].categorie, Category::Vin);
        assert!(DEFAULT_SUPPLIERS.contains(&products[2].fournisseur.as_str()));
    }

    #[test]
    fn test_stock_sheet_skips_short_names_and_empty_rows() {
        let rows = vec![
            row(&[]),
            row(&[]),
            row(&["ab", "3", "1.00"]),
            row(&["", "3", "1.00"]),
            vec![],
        ];
        assert!(extract_stock_products(&rows, &mut rng()).is_empty());
    }

    #[test]
    fn test_zero_quantity_and_price_row_is_not_a_product() {
        // Zeros count as absent, so the row reads as nothing to import
        let rows = vec![
            row(&[]),
            row(&[]),
            row(&["Vieux fond de cave", "0", "0"]),
        ];
        assert!(extract_stock_products(&rows, &mut rng()).is_empty());
    }

    #[test]
    fn test_long_header_is_not_a_section() {
        let rows = vec![
            row(&[]),
            row(&[]),
            // 20+ characters with empty neighbours: neither header nor product
            row(&["Inventaire de la cave du bas", "", ""]),
            row(&["Sancerre 2022", "4", "12.50"]),
        ];
        let products = extract_stock_products(&rows, &mut rng());
        assert_eq!(products.len(), 1);
        // No section was recorded, so the name keywords decide nothing here
        assert_eq!(products[0].categorie, Category::Autre);
    }

    #[test]
    fn test_wine_sheet_bottle_price_wins() {
        let rows = vec![
            row(&[]),
            row(&[]),
            row(&["Rouges", "", "", "", "", "", "", ""]),
            row(&["Château Margaux 2018", "15.00", "", "", "", "", "", "120.00"]),
            row(&["Côtes du Rhône 2021", "4.50", "", "", "", "", "", ""]),
        ];

        let products = extract_wine_products(&rows, &mut rng());
        assert_eq!(products.len(), 2);

        assert_eq!(
            products[0].prix_achat,
            Decimal::from_str("120.00").unwrap()
        );
        // No bottle price: estimated at four glasses
        assert_eq!(products[1].prix_achat, Decimal::from_str("18.00").unwrap());

        for product in &products {
            assert_eq!(product.categorie, Category::Vin);
            assert_eq!(product.seuil_alerte, 3);
            assert!((1..=10).contains(&product.quantite));
        }
    }

    #[test]
    fn test_wine_sheet_requires_a_price() {
        let rows = vec![
            row(&[]),
            row(&[]),
            row(&["Cuvée mystère offerte", "offert", "", "", "", "", "", ""]),
        ];
        assert!(extract_wine_products(&rows, &mut rng()).is_empty());
    }

    #[test]
    fn test_dedup_first_occurrence_wins() {
        let mut r = rng();
        let rows = vec![
            row(&[]),
            row(&[]),
            row(&["Sancerre 2022", "4", "12.50"]),
        ];
        let mut products = extract_stock_products(&rows, &mut r);
        products.push(NewProduct {
            nom: "SANCERRE   2022".to_string(),
            categorie: Category::Autre,
            quantite: 99,
            seuil_alerte: 5,
            prix_achat: Decimal::ONE,
            fournisseur: "Metro".to_string(),
        });

        let unique = dedup_products(products);
        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].quantite, 4);
        assert_eq!(unique[0].categorie, Category::Vin);
    }

    #[test]
    fn test_dedup_drops_tiny_names() {
        let products = vec![NewProduct {
            nom: "ab".to_string(),
            categorie: Category::Autre,
            quantite: 1,
            seuil_alerte: 5,
            prix_achat: Decimal::ONE,
            fournisseur: "Metro".to_string(),
        }];
        assert!(dedup_products(products).is_empty());
    }

    #[test]
    fn test_header_cell_helper() {
        let r = row(&["Blancs", "", ""]);
        assert!(is_section_header(&clean_name(&text("Blancs")), &r));
        let with_qty = row(&["Blancs", "3", ""]);
        assert!(!is_section_header(&clean_name(&text("Blancs")), &with_qty));
    }
}
