//! In-memory product store
//!
//! Backs the `memory` data source in development and the test suites. The
//! fixtures live here so they are defined once rather than scattered across
//! call sites.

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::store::ProductStore;
use shared::models::{name_sort_key, Category, NewProduct, Product, ProductUpdate};

#[derive(Default)]
pub struct MemoryProductStore {
    products: RwLock<HashMap<Uuid, Product>>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with the development fixtures
    pub fn with_fixtures() -> Self {
        let fixtures = [
            ("Coca-Cola 33cl", Category::Soft, 2, 10, Decimal::new(150, 2), "Metro"),
            ("Bordeaux Rouge 2020", Category::Vin, 0, 5, Decimal::new(1590, 2), "Vinatis"),
            ("Heineken 50cl", Category::Biere, 8, 15, Decimal::new(220, 2), "Sysco"),
        ];

        let mut products = HashMap::new();
        for (nom, categorie, quantite, seuil, prix, fournisseur) in fixtures {
            let id = Uuid::new_v4();
            products.insert(
                id,
                Product {
                    id,
                    nom: nom.to_string(),
                    categorie,
                    quantite,
                    seuil_alerte: seuil,
                    prix_achat: prix,
                    fournisseur: fournisseur.to_string(),
                    date_derniere_modif: Utc::now(),
                    actif: true,
                    dernier_ajustement: None,
                    raison_ajustement: None,
                },
            );
        }

        Self {
            products: RwLock::new(products),
        }
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn list_active(&self) -> AppResult<Vec<Product>> {
        let products = self.products.read().await;
        let mut active: Vec<Product> = products.values().filter(|p| p.actif).cloned().collect();
        active.sort_by_key(|p| name_sort_key(&p.nom));
        Ok(active)
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Product> {
        let products = self.products.read().await;
        products
            .get(&id)
            .filter(|p| p.actif)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Boisson".to_string()))
    }

    async fn create(&self, fields: NewProduct) -> AppResult<Product> {
        let product = Product {
            id: Uuid::new_v4(),
            nom: fields.nom,
            categorie: fields.categorie,
            quantite: fields.quantite,
            seuil_alerte: fields.seuil_alerte,
            prix_achat: fields.prix_achat,
            fournisseur: fields.fournisseur,
            date_derniere_modif: Utc::now(),
            actif: true,
            dernier_ajustement: None,
            raison_ajustement: None,
        };

        let mut products = self.products.write().await;
        products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(&self, id: Uuid, fields: ProductUpdate) -> AppResult<()> {
        let mut products = self.products.write().await;
        let product = products
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Boisson".to_string()))?;

        if let Some(nom) = fields.nom {
            product.nom = nom;
        }
        if let Some(categorie) = fields.categorie {
            product.categorie = categorie;
        }
        if let Some(quantite) = fields.quantite {
            product.quantite = quantite;
        }
        if let Some(seuil) = fields.seuil_alerte {
            product.seuil_alerte = seuil;
        }
        if let Some(prix) = fields.prix_achat {
            product.prix_achat = prix;
        }
        if let Some(fournisseur) = fields.fournisseur {
            product.fournisseur = fournisseur;
        }
        product.date_derniere_modif = Utc::now();

        Ok(())
    }

    async fn soft_delete(&self, id: Uuid) -> AppResult<()> {
        let mut products = self.products.write().await;
        let product = products
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Boisson".to_string()))?;

        product.actif = false;
        product.date_derniere_modif = Utc::now();
        Ok(())
    }

    async fn adjust_quantity(
        &self,
        id: Uuid,
        delta: i64,
        reason: Option<String>,
    ) -> AppResult<Product> {
        let mut products = self.products.write().await;
        let product = products
            .get_mut(&id)
            .filter(|p| p.actif)
            .ok_or_else(|| AppError::NotFound("Boisson".to_string()))?;

        product.quantite = (product.quantite + delta).max(0);
        product.dernier_ajustement = Some(delta);
        product.raison_ajustement = reason;
        product.date_derniere_modif = Utc::now();

        Ok(product.clone())
    }

    async fn list_by_category(&self, categorie: Category) -> AppResult<Vec<Product>> {
        let mut products = self.list_active().await?;
        products.retain(|p| p.categorie == categorie);
        Ok(products)
    }

    async fn list_low_stock(&self) -> AppResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products
            .values()
            .filter(|p| p.actif && p.quantite <= p.seuil_alerte)
            .cloned()
            .collect())
    }
}
