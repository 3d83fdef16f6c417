//! Form-level validation
//!
//! These checks run before any write reaches the store; the persistence
//! layer itself enforces nothing beyond column types.

use rust_decimal::Decimal;

use crate::models::{Category, NewProduct, ProductUpdate};

/// Validate a product name: non-empty after trimming
pub fn validate_product_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Le nom est obligatoire");
    }
    Ok(())
}

/// Validate a quantity field
pub fn validate_quantity(quantity: i64) -> Result<(), &'static str> {
    if quantity < 0 {
        return Err("La quantité ne peut pas être négative");
    }
    Ok(())
}

/// Validate an alert threshold field
pub fn validate_threshold(threshold: i64) -> Result<(), &'static str> {
    if threshold < 0 {
        return Err("Le seuil d'alerte ne peut pas être négatif");
    }
    Ok(())
}

/// Validate a purchase price field
pub fn validate_price(price: Decimal) -> Result<(), &'static str> {
    if price < Decimal::ZERO {
        return Err("Le prix d'achat ne peut pas être négatif");
    }
    Ok(())
}

/// Validate a full creation payload
pub fn validate_new_product(product: &NewProduct) -> Result<(), &'static str> {
    validate_product_name(&product.nom)?;
    validate_quantity(product.quantite)?;
    validate_threshold(product.seuil_alerte)?;
    validate_price(product.prix_achat)?;
    Ok(())
}

/// Validate the provided fields of a partial update
pub fn validate_product_update(update: &ProductUpdate) -> Result<(), &'static str> {
    if let Some(nom) = &update.nom {
        validate_product_name(nom)?;
    }
    if let Some(quantite) = update.quantite {
        validate_quantity(quantite)?;
    }
    if let Some(seuil) = update.seuil_alerte {
        validate_threshold(seuil)?;
    }
    if let Some(prix) = update.prix_achat {
        validate_price(prix)?;
    }
    Ok(())
}

/// Validate a category label coming from a form
pub fn validate_category_label(label: &str) -> Result<Category, &'static str> {
    Category::parse(label).ok_or("Catégorie inconnue")
}

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Adresse email invalide")
    }
}

/// Validate password strength (provider minimum)
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 6 {
        return Err("Le mot de passe doit contenir au moins 6 caractères");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_name_must_be_non_empty_after_trim() {
        assert!(validate_product_name("Coca-Cola").is_ok());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name("").is_err());
    }

    #[test]
    fn test_numeric_fields_reject_negatives() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_threshold(0).is_ok());
        assert!(validate_threshold(-5).is_err());
        assert!(validate_price(Decimal::ZERO).is_ok());
        assert!(validate_price(Decimal::from_str("-0.01").unwrap()).is_err());
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(validate_category_label("Vin"), Ok(Category::Vin));
        assert_eq!(validate_category_label("Café/Thé"), Ok(Category::CafeThe));
        assert!(validate_category_label("Pizza").is_err());
    }

    #[test]
    fn test_email_and_password() {
        assert!(validate_email("bar@amphore.fr").is_ok());
        assert!(validate_email("invalid").is_err());
        assert!(validate_password("secret1").is_ok());
        assert!(validate_password("abc").is_err());
    }

    #[test]
    fn test_update_validates_only_provided_fields() {
        let update = ProductUpdate {
            quantite: Some(3),
            ..Default::default()
        };
        assert!(validate_product_update(&update).is_ok());

        let bad = ProductUpdate {
            nom: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(validate_product_update(&bad).is_err());
    }
}
