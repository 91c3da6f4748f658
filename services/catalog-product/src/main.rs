//! catalog-product Service - Product Catalog

use std::sync::Arc;

use catalog_bootstrap::{Infrastructure, run_http};
use tracing::info;

use catalog_product::api::router;
use catalog_product::application::ProductCatalog;
use catalog_product::infrastructure::persistence::{PostgresProductRepository, run_migrations};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    run_http("config", |infra: Infrastructure| async move {
        info!("Initializing catalog-product Service...");

        let pool = infra.postgres_pool();
        if infra.config().database.run_migrations {
            run_migrations(&pool).await?;
        }

        let repo = Arc::new(PostgresProductRepository::new(pool));
        info!("Repository initialized");

        let catalog = Arc::new(ProductCatalog::new(repo));
        Ok(router(catalog))
    })
    .await
}
