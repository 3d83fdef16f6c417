//! Product (boisson) model and categories

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product categories, matching the labels shown in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Soft,
    Alcool,
    Vin,
    #[serde(rename = "Bière")]
    Biere,
    Cocktail,
    #[serde(rename = "Café/Thé")]
    CafeThe,
    Autre,
}

/// All categories, in the order the forms present them
pub const CATEGORIES: [Category; 7] = [
    Category::Soft,
    Category::Alcool,
    Category::Vin,
    Category::Biere,
    Category::Cocktail,
    Category::CafeThe,
    Category::Autre,
];

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Soft => "Soft",
            Category::Alcool => "Alcool",
            Category::Vin => "Vin",
            Category::Biere => "Bière",
            Category::Cocktail => "Cocktail",
            Category::CafeThe => "Café/Thé",
            Category::Autre => "Autre",
        }
    }

    /// Parse a category label as stored or submitted
    pub fn parse(value: &str) -> Option<Self> {
        CATEGORIES.iter().copied().find(|c| c.as_str() == value)
    }

    /// Default alert threshold assigned by the import pipeline
    pub fn default_threshold(&self) -> i64 {
        match self {
            Category::Vin => 3,
            Category::Alcool => 2,
            Category::Soft => 10,
            Category::Biere => 6,
            Category::CafeThe => 5,
            Category::Cocktail | Category::Autre => 5,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tracked inventory item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub nom: String,
    #[serde(rename = "catégorie")]
    pub categorie: Category,
    #[serde(rename = "quantité")]
    pub quantite: i64,
    pub seuil_alerte: i64,
    pub prix_achat: Decimal,
    pub fournisseur: String,
    #[serde(rename = "date_dernière_modif")]
    pub date_derniere_modif: DateTime<Utc>,
    pub actif: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dernier_ajustement: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raison_ajustement: Option<String>,
}

/// Fields for creating a product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub nom: String,
    #[serde(rename = "catégorie")]
    pub categorie: Category,
    #[serde(rename = "quantité")]
    pub quantite: i64,
    pub seuil_alerte: i64,
    pub prix_achat: Decimal,
    pub fournisseur: String,
}

/// Partial update; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductUpdate {
    pub nom: Option<String>,
    #[serde(rename = "catégorie")]
    pub categorie: Option<Category>,
    #[serde(rename = "quantité")]
    pub quantite: Option<i64>,
    pub seuil_alerte: Option<i64>,
    pub prix_achat: Option<Decimal>,
    pub fournisseur: Option<String>,
}

impl ProductUpdate {
    pub fn is_empty(&self) -> bool {
        self.nom.is_none()
            && self.categorie.is_none()
            && self.quantite.is_none()
            && self.seuil_alerte.is_none()
            && self.prix_achat.is_none()
            && self.fournisseur.is_none()
    }
}

/// Case- and accent-insensitive name key used for the sorted listings
pub fn name_sort_key(name: &str) -> String {
    name.chars()
        .flat_map(|c| c.to_lowercase())
        .map(|c| match c {
            'à' | 'â' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'î' | 'ï' => 'i',
            'ô' | 'ö' => 'o',
            'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}
