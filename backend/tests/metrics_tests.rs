//! Category metrics tests
//!
//! Property-based tests for the wine dashboard aggregates:
//! - totals match an independent recomputation
//! - the average is a simple mean bounded by the unit prices
//! - the top-expensive ranking is capped at five and sorted

use chrono::Utc;
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use shared::models::{category_metrics, Category, Product, CATEGORIES};

fn category_strategy() -> impl Strategy<Value = Category> {
    prop::sample::select(CATEGORIES.to_vec())
}

fn product_strategy() -> impl Strategy<Value = Product> {
    (
        "[A-Za-z ]{3,20}",
        category_strategy(),
        0i64..500,
        1i64..100_000,
    )
        .prop_map(|(nom, categorie, quantite, prix_cents)| Product {
            id: Uuid::new_v4(),
            nom,
            categorie,
            quantite,
            seuil_alerte: 3,
            prix_achat: Decimal::new(prix_cents, 2),
            fournisseur: "Vinatis".to_string(),
            date_derniere_modif: Utc::now(),
            actif: true,
            dernier_ajustement: None,
            raison_ajustement: None,
        })
}

proptest! {
    #[test]
    fn totals_match_independent_recomputation(
        products in prop::collection::vec(product_strategy(), 0..30),
        categorie in category_strategy(),
    ) {
        let metrics = category_metrics(&products, categorie);
        let subset: Vec<&Product> =
            products.iter().filter(|p| p.categorie == categorie).collect();

        prop_assert_eq!(metrics.count, subset.len());
        prop_assert_eq!(
            metrics.stock_total,
            subset.iter().map(|p| p.quantite).sum::<i64>()
        );

        let expected_value: Decimal = subset
            .iter()
            .map(|p| p.prix_achat * Decimal::from(p.quantite))
            .sum();
        prop_assert_eq!(metrics.valeur_totale, expected_value.round_dp(2));
    }

    #[test]
    fn average_price_is_bounded_by_unit_prices(
        products in prop::collection::vec(product_strategy(), 1..30),
    ) {
        // Force everything into one category so the subset is non-empty
        let products: Vec<Product> = products
            .into_iter()
            .map(|mut p| {
                p.categorie = Category::Vin;
                p
            })
            .collect();

        let metrics = category_metrics(&products, Category::Vin);
        let min = products.iter().map(|p| p.prix_achat).min().unwrap();
        let max = products.iter().map(|p| p.prix_achat).max().unwrap();

        // Allow for the rounding to two decimals
        let tolerance = Decimal::new(1, 2);
        prop_assert!(metrics.prix_moyen >= min - tolerance);
        prop_assert!(metrics.prix_moyen <= max + tolerance);
    }

    #[test]
    fn top_expensive_is_sorted_and_capped(
        products in prop::collection::vec(product_strategy(), 0..30),
        categorie in category_strategy(),
    ) {
        let metrics = category_metrics(&products, categorie);
        let subset_len = products.iter().filter(|p| p.categorie == categorie).count();

        prop_assert_eq!(metrics.plus_chers.len(), subset_len.min(5));
        for pair in metrics.plus_chers.windows(2) {
            prop_assert!(pair[0].prix >= pair[1].prix);
        }
    }

    #[test]
    fn empty_category_reports_zeros(categorie in category_strategy()) {
        let metrics = category_metrics(&[], categorie);
        prop_assert_eq!(metrics.count, 0);
        prop_assert_eq!(metrics.stock_total, 0);
        prop_assert_eq!(metrics.valeur_totale, Decimal::ZERO);
        prop_assert_eq!(metrics.prix_moyen, Decimal::ZERO);
        prop_assert!(metrics.plus_chers.is_empty());
    }
}
