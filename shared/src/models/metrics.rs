//! Category-scoped metrics (wine dashboard)

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Category, Product};

/// Aggregate metrics over the active products of one category
#[derive(Debug, Clone, Serialize)]
pub struct CategoryMetrics {
    pub categorie: Category,
    pub count: usize,
    pub valeur_totale: Decimal,
    pub prix_moyen: Decimal,
    pub stock_total: i64,
    pub plus_chers: Vec<TopProduct>,
}

/// (name, price) pair for the top-expensive ranking
#[derive(Debug, Clone, Serialize)]
pub struct TopProduct {
    pub nom: String,
    pub prix: Decimal,
}

/// Compute metrics for one category from the active product list.
///
/// The average is a simple mean of unit prices, not quantity-weighted.
/// An empty subset yields zeros across the board.
pub fn category_metrics(products: &[Product], categorie: Category) -> CategoryMetrics {
    let subset: Vec<&Product> = products.iter().filter(|p| p.categorie == categorie).collect();

    if subset.is_empty() {
        return CategoryMetrics {
            categorie,
            count: 0,
            valeur_totale: Decimal::ZERO,
            prix_moyen: Decimal::ZERO,
            stock_total: 0,
            plus_chers: Vec::new(),
        };
    }

    let count = subset.len();
    let stock_total: i64 = subset.iter().map(|p| p.quantite).sum();
    let valeur_totale: Decimal = subset
        .iter()
        .map(|p| p.prix_achat * Decimal::from(p.quantite))
        .sum();
    let somme_prix: Decimal = subset.iter().map(|p| p.prix_achat).sum();
    let prix_moyen = somme_prix / Decimal::from(count as u64);

    let mut ranked: Vec<&Product> = subset.clone();
    ranked.sort_by(|a, b| b.prix_achat.cmp(&a.prix_achat));
    let plus_chers = ranked
        .into_iter()
        .take(5)
        .map(|p| TopProduct {
            nom: p.nom.clone(),
            prix: p.prix_achat,
        })
        .collect();

    CategoryMetrics {
        categorie,
        count,
        valeur_totale: valeur_totale.round_dp(2),
        prix_moyen: prix_moyen.round_dp(2),
        stock_total,
        plus_chers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::str::FromStr;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn vin(nom: &str, quantite: i64, prix: &str) -> Product {
        Product {
            id: Uuid::new_v4(),
            nom: nom.to_string(),
            categorie: Category::Vin,
            quantite,
            seuil_alerte: 3,
            prix_achat: dec(prix),
            fournisseur: "Vinatis".to_string(),
            date_derniere_modif: Utc::now(),
            actif: true,
            dernier_ajustement: None,
            raison_ajustement: None,
        }
    }

    #[test]
    fn test_empty_subset_is_all_zeros() {
        let metrics = category_metrics(&[], Category::Vin);
        assert_eq!(metrics.count, 0);
        assert_eq!(metrics.valeur_totale, Decimal::ZERO);
        assert_eq!(metrics.prix_moyen, Decimal::ZERO);
        assert_eq!(metrics.stock_total, 0);
        assert!(metrics.plus_chers.is_empty());
    }

    #[test]
    fn test_other_categories_are_ignored() {
        let mut soft = vin("Coca-Cola", 10, "1.50");
        soft.categorie = Category::Soft;
        let metrics = category_metrics(&[soft], Category::Vin);
        assert_eq!(metrics.count, 0);
    }

    #[test]
    fn test_totals_and_simple_average() {
        let products = vec![
            vin("Bordeaux Rouge 2020", 4, "15.90"),
            vin("Chablis 2022", 2, "22.10"),
        ];
        let metrics = category_metrics(&products, Category::Vin);

        assert_eq!(metrics.count, 2);
        assert_eq!(metrics.stock_total, 6);
        // 15.90 * 4 + 22.10 * 2 = 63.60 + 44.20
        assert_eq!(metrics.valeur_totale, dec("107.80"));
        // Simple mean of unit prices, not weighted by stock
        assert_eq!(metrics.prix_moyen, dec("19.00"));
    }

    #[test]
    fn test_top_expensive_is_capped_at_five() {
        let products: Vec<Product> = (1..=7)
            .map(|i| vin(&format!("Cuvée {}", i), 1, &format!("{}.00", i)))
            .collect();
        let metrics = category_metrics(&products, Category::Vin);

        assert_eq!(metrics.plus_chers.len(), 5);
        assert_eq!(metrics.plus_chers[0].nom, "Cuvée 7");
        assert_eq!(metrics.plus_chers[0].prix, dec("7.00"));
        assert_eq!(metrics.plus_chers[4].nom, "Cuvée 3");
    }
}
