//! 数据库行映射结构

use catalog_errors::{AppError, AppResult};
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::entities::{NewProduct, Product};
use crate::domain::enums::Gender;
use crate::domain::value_objects::ProductId;

/// 商品数据库行
#[derive(Debug, FromRow)]
pub struct ProductRow {
    pub id: Uuid,
    pub title: String,
    pub price: f64,
    pub description: Option<String>,
    pub slug: String,
    pub stock: i32,
    pub sizes: Vec<String>,
    pub gender: String,
    pub tags: Vec<String>,
}

impl TryFrom<ProductRow> for Product {
    type Error = AppError;

    fn try_from(row: ProductRow) -> AppResult<Self> {
        let gender: Gender = row
            .gender
            .parse()
            .map_err(|_| AppError::database(format!("Invalid gender in row: {}", row.gender)))?;
        let stock = u32::try_from(row.stock)
            .map_err(|_| AppError::database(format!("Invalid stock in row: {}", row.stock)))?;

        // 行内的 slug 已规范化，直接覆盖构造时派生的值
        let mut new = NewProduct::new(row.title, None, gender)
            .with_price(row.price)
            .with_description(row.description)
            .with_stock(stock)
            .with_sizes(row.sizes)
            .with_tags(row.tags);
        new.slug = row.slug;

        Ok(Product::from_new(ProductId::from_uuid(row.id), new))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> ProductRow {
        ProductRow {
            id: Uuid::nil(),
            title: "Red Shoe".into(),
            price: 12.5,
            description: None,
            slug: "custom_slug".into(),
            stock: 4,
            sizes: vec!["M".into()],
            gender: "men".into(),
            tags: vec![],
        }
    }

    #[test]
    fn test_row_conversion_keeps_stored_slug() {
        let product = Product::try_from(row()).unwrap();
        assert_eq!(product.slug(), "custom_slug");
        assert_eq!(product.stock(), 4);
        assert_eq!(product.gender(), Gender::Men);
    }

    #[test]
    fn test_invalid_row_is_database_error() {
        let mut bad = row();
        bad.stock = -1;
        assert!(matches!(Product::try_from(bad), Err(AppError::Database(_))));

        let mut bad = row();
        bad.gender = "kids".into();
        assert!(matches!(Product::try_from(bad), Err(AppError::Database(_))));
    }
}
