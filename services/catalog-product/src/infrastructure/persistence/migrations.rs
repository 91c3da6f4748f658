//! 商品表结构迁移

use catalog_adapter_postgres::{Migration, MigrationManager, MigrationResult};
use catalog_errors::AppResult;
use sqlx::PgPool;
use tracing::info;

/// 迁移记录表
const MIGRATION_TABLE: &str = "_product_migrations";

const CREATE_PRODUCTS: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id          UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    title       TEXT NOT NULL,
    price       DOUBLE PRECISION NOT NULL DEFAULT 0 CHECK (price >= 0),
    description TEXT,
    slug        TEXT NOT NULL,
    stock       INTEGER NOT NULL DEFAULT 0 CHECK (stock >= 0),
    sizes       TEXT[] NOT NULL DEFAULT '{}',
    gender      TEXT NOT NULL CHECK (gender IN ('men', 'women', 'unisex')),
    tags        TEXT[] NOT NULL DEFAULT '{}',
    created_seq BIGSERIAL NOT NULL
);

CREATE UNIQUE INDEX IF NOT EXISTS products_title_key ON products (title);
CREATE UNIQUE INDEX IF NOT EXISTS products_slug_key ON products (slug);
CREATE INDEX IF NOT EXISTS products_created_seq_idx ON products (created_seq);
"#;

/// 商品服务的全部迁移
pub fn product_migrations() -> Vec<Migration> {
    vec![Migration::new(1, "create_products", CREATE_PRODUCTS)]
}

/// 执行待处理的迁移
pub async fn run_migrations(pool: &PgPool) -> AppResult<MigrationResult> {
    let result = MigrationManager::new(pool.clone())
        .with_table_name(MIGRATION_TABLE)
        .migrate(&product_migrations())
        .await?;

    info!(
        applied = result.applied_count(),
        skipped = result.skipped.len(),
        "Product migrations finished"
    );
    Ok(result)
}
