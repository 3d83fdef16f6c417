//! Postgres-backed product store

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::store::ProductStore;
use shared::models::{name_sort_key, Category, NewProduct, Product, ProductUpdate};

/// Live store over the `boissons` table
#[derive(Clone)]
pub struct PgProductStore {
    db: PgPool,
}

/// Raw row; the category column is free text, the store does not enforce
/// the enumeration (form validation does)
#[derive(Debug, FromRow)]
struct ProductRow {
    id: Uuid,
    nom: String,
    categorie: String,
    quantite: i64,
    seuil_alerte: i64,
    prix_achat: Decimal,
    fournisseur: String,
    date_derniere_modif: DateTime<Utc>,
    actif: bool,
    dernier_ajustement: Option<i64>,
    raison_ajustement: Option<String>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            nom: row.nom,
            // Rows written before the enum was fixed fall back to Autre
            categorie: Category::parse(&row.categorie).unwrap_or(Category::Autre),
            quantite: row.quantite,
            seuil_alerte: row.seuil_alerte,
            prix_achat: row.prix_achat,
            fournisseur: row.fournisseur,
            date_derniere_modif: row.date_derniere_modif,
            actif: row.actif,
            dernier_ajustement: row.dernier_ajustement,
            raison_ajustement: row.raison_ajustement,
        }
    }
}

const PRODUCT_COLUMNS: &str = "id, nom, categorie, quantite, seuil_alerte, prix_achat, \
     fournisseur, date_derniere_modif, actif, dernier_ajustement, raison_ajustement";

impl PgProductStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Full scan of active rows; category and low-stock listings filter the
    /// result in memory, matching the single-scan access pattern of the app
    async fn scan_active(&self) -> AppResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {} FROM boissons WHERE actif = TRUE",
            PRODUCT_COLUMNS
        ))
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list_active(&self) -> AppResult<Vec<Product>> {
        let mut products = self.scan_active().await?;
        products.sort_by_key(|p| name_sort_key(&p.nom));
        Ok(products)
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Product> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            "SELECT {} FROM boissons WHERE id = $1 AND actif = TRUE",
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Boisson".to_string()))?;

        Ok(row.into())
    }

    async fn create(&self, fields: NewProduct) -> AppResult<Product> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            INSERT INTO boissons (nom, categorie, quantite, seuil_alerte, prix_achat,
                                  fournisseur, date_derniere_modif, actif)
            VALUES ($1, $2, $3, $4, $5, $6, NOW(), TRUE)
            RETURNING {}
            "#,
            PRODUCT_COLUMNS
        ))
        .bind(&fields.nom)
        .bind(fields.categorie.as_str())
        .bind(fields.quantite)
        .bind(fields.seuil_alerte)
        .bind(fields.prix_achat)
        .bind(&fields.fournisseur)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: Uuid, fields: ProductUpdate) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE boissons
            SET nom = COALESCE($2, nom),
                categorie = COALESCE($3, categorie),
                quantite = COALESCE($4, quantite),
                seuil_alerte = COALESCE($5, seuil_alerte),
                prix_achat = COALESCE($6, prix_achat),
                fournisseur = COALESCE($7, fournisseur),
                date_derniere_modif = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(fields.nom)
        .bind(fields.categorie.map(|c| c.as_str().to_string()))
        .bind(fields.quantite)
        .bind(fields.seuil_alerte)
        .bind(fields.prix_achat)
        .bind(fields.fournisseur)
        .execute(&self.db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Boisson".to_string()));
        }

        Ok(())
    }

    async fn soft_delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE boissons SET actif = FALSE, date_derniere_modif = NOW() WHERE id = $1",
        )
        .bind(id)
        .execute(&self.db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Boisson".to_string()));
        }

        Ok(())
    }

    async fn adjust_quantity(
        &self,
        id: Uuid,
        delta: i64,
        reason: Option<String>,
    ) -> AppResult<Product> {
        // Server-side atomic increment with a floor at zero; two concurrent
        // adjusters cannot lose an update
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            UPDATE boissons
            SET quantite = GREATEST(0, quantite + $2),
                dernier_ajustement = $2,
                raison_ajustement = $3,
                date_derniere_modif = NOW()
            WHERE id = $1 AND actif = TRUE
            RETURNING {}
            "#,
            PRODUCT_COLUMNS
        ))
        .bind(id)
        .bind(delta)
        .bind(reason)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Boisson".to_string()))?;

        Ok(row.into())
    }

    async fn list_by_category(&self, categorie: Category) -> AppResult<Vec<Product>> {
        let mut products = self.scan_active().await?;
        products.retain(|p| p.categorie == categorie);
        products.sort_by_key(|p| name_sort_key(&p.nom));
        Ok(products)
    }

    async fn list_low_stock(&self) -> AppResult<Vec<Product>> {
        let mut products = self.scan_active().await?;
        products.retain(|p| p.quantite <= p.seuil_alerte);
        Ok(products)
    }
}
