//! Bulk inventory import
//!
//! Reads the two worksheet exports, reconciles them into the catalogue and
//! writes the result through the configured store:
//!
//! ```text
//! amphore-import <stocks.csv> <vins.csv>
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use amphore_stock_backend::import::{
    dedup_products, extract_stock_products, extract_wine_products, import_products, rows_from_csv,
};
use amphore_stock_backend::store::{DynProductStore, MemoryProductStore, PgProductStore};
use amphore_stock_backend::{Config, DataSourceKind};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "amphore_stock_backend=info,amphore_import=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();
    let config = Config::load()?;

    let mut args = std::env::args().skip(1);
    let stocks_path = PathBuf::from(
        args.next()
            .ok_or_else(|| anyhow::anyhow!("usage: amphore-import <stocks.csv> <vins.csv>"))?,
    );
    let wines_path = PathBuf::from(
        args.next()
            .ok_or_else(|| anyhow::anyhow!("usage: amphore-import <stocks.csv> <vins.csv>"))?,
    );

    tracing::info!("Import des données vers Amphore Stock");

    let mut rng = rand::thread_rng();

    tracing::info!(path = %stocks_path.display(), "Processing stock sheet");
    let stock_rows = rows_from_csv(&stocks_path)?;
    let mut products = extract_stock_products(&stock_rows, &mut rng);
    tracing::info!(count = products.len(), "Products extracted from stock sheet");

    tracing::info!(path = %wines_path.display(), "Processing wine sheet");
    let wine_rows = rows_from_csv(&wines_path)?;
    let wine_products = extract_wine_products(&wine_rows, &mut rng);
    tracing::info!(count = wine_products.len(), "Products extracted from wine sheet");
    products.extend(wine_products);

    let before = products.len();
    let unique = dedup_products(products);
    tracing::info!(before, after = unique.len(), "Deduplicated by name");

    for (index, product) in unique.iter().take(10).enumerate() {
        tracing::info!(
            "{}. {} ({}) - {} unités - {}€",
            index + 1,
            product.nom,
            product.categorie,
            product.quantite,
            product.prix_achat
        );
    }
    if unique.len() > 10 {
        tracing::info!("... et {} autres produits", unique.len() - 10);
    }

    let store: DynProductStore = match config.data_source {
        DataSourceKind::Postgres => {
            let db_pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .min_connections(config.database.min_connections)
                .acquire_timeout(Duration::from_secs(30))
                .connect(&config.database.url)
                .await?;
            Arc::new(PgProductStore::new(db_pool))
        }
        DataSourceKind::Memory => {
            tracing::warn!("Memory data source selected; nothing will persist");
            Arc::new(MemoryProductStore::new())
        }
    };

    let report = import_products(&store, unique, config.import.write_delay_ms).await;

    if report.erreurs > 0 {
        tracing::warn!(erreurs = report.erreurs, "Import finished with errors");
    }

    Ok(())
}
