//! PostgreSQL 商品仓储实现

use async_trait::async_trait;
use catalog_adapter_postgres::map_sqlx_error;
use catalog_common::Pagination;
use catalog_errors::{AppError, AppResult};
use catalog_ports::{PageableRepository, Repository};
use sqlx::PgPool;

use super::rows::ProductRow;
use crate::domain::entities::{NewProduct, Product};
use crate::domain::repositories::ProductRepository;
use crate::domain::value_objects::ProductId;

const PRODUCT_COLUMNS: &str =
    "id, title, price, description, slug, stock, sizes, gender, tags";

/// PostgreSQL 商品仓储
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Product, ProductId> for PostgresProductRepository {
    async fn find_by_id(&self, id: &ProductId) -> AppResult<Option<Product>> {
        let sql = format!("SELECT {} FROM products WHERE id = $1", PRODUCT_COLUMNS);
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.map(Product::try_from).transpose()
    }

    async fn save(&self, product: &Product) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET title = $2, price = $3, description = $4, slug = $5,
                stock = $6, sizes = $7, gender = $8, tags = $9
            WHERE id = $1
            "#,
        )
        .bind(product.id().0)
        .bind(product.title())
        .bind(product.price())
        .bind(product.description())
        .bind(product.slug())
        .bind(stock_to_db(product.stock())?)
        .bind(product.sizes())
        .bind(product.gender().as_str())
        .bind(product.tags())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "Product with id \"{}\" not found",
                product.id()
            )));
        }

        Ok(())
    }

    async fn delete(&self, id: &ProductId) -> AppResult<()> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}

#[async_trait]
impl PageableRepository<Product, ProductId> for PostgresProductRepository {
    async fn find_all(&self, pagination: &Pagination) -> AppResult<Vec<Product>> {
        // 默认顺序为插入顺序，分页结果稳定
        let sql = format!(
            "SELECT {} FROM products ORDER BY created_seq ASC LIMIT $1 OFFSET $2",
            PRODUCT_COLUMNS
        );
        let rows = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(i64::from(pagination.limit))
            .bind(i64::from(pagination.offset))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.into_iter().map(Product::try_from).collect()
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn insert(&self, product: NewProduct) -> AppResult<Product> {
        let sql = format!(
            r#"
            INSERT INTO products (title, price, description, slug, stock, sizes, gender, tags)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            PRODUCT_COLUMNS
        );
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(&product.title)
            .bind(product.price)
            .bind(&product.description)
            .bind(&product.slug)
            .bind(stock_to_db(product.stock)?)
            .bind(&product.sizes)
            .bind(product.gender.as_str())
            .bind(&product.tags)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Product::try_from(row)
    }

    async fn find_by_slug_or_title(&self, term: &str) -> AppResult<Option<Product>> {
        let sql = format!(
            r#"
            SELECT {}
            FROM products
            WHERE LOWER(slug) = LOWER($1) OR LOWER(title) = LOWER($1)
            ORDER BY created_seq ASC
            LIMIT 1
            "#,
            PRODUCT_COLUMNS
        );
        let row = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(term)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.map(Product::try_from).transpose()
    }
}

fn stock_to_db(stock: u32) -> AppResult<i32> {
    i32::try_from(stock)
        .map_err(|_| AppError::validation(format!("stock must not be greater than {}", i32::MAX)))
}
