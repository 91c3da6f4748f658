//! 内存商品仓储
//!
//! 用于测试和本地运行，唯一约束语义与数据库一致

use async_trait::async_trait;
use catalog_adapter_postgres::unique_violation;
use catalog_common::{Pagination, new_id};
use catalog_errors::{AppError, AppResult};
use catalog_ports::{PageableRepository, Repository};
use tokio::sync::RwLock;

use crate::domain::entities::{NewProduct, Product};
use crate::domain::repositories::ProductRepository;
use crate::domain::value_objects::ProductId;

/// 内存商品仓储，按插入顺序保存
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

/// 检查 title/slug 唯一性，`skip` 为正在更新的商品
fn check_unique(
    products: &[Product],
    title: &str,
    slug: &str,
    skip: Option<&ProductId>,
) -> AppResult<()> {
    for existing in products.iter().filter(|p| Some(p.id()) != skip) {
        if existing.title() == title {
            let detail = format!("Key (title)=({}) already exists.", title);
            return Err(unique_violation(Some(&detail)));
        }
        if existing.slug() == slug {
            let detail = format!("Key (slug)=({}) already exists.", slug);
            return Err(unique_violation(Some(&detail)));
        }
    }
    Ok(())
}

#[async_trait]
impl Repository<Product, ProductId> for InMemoryProductRepository {
    async fn find_by_id(&self, id: &ProductId) -> AppResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id() == id).cloned())
    }

    async fn save(&self, product: &Product) -> AppResult<()> {
        let mut products = self.products.write().await;
        check_unique(&products, product.title(), product.slug(), Some(product.id()))?;

        let slot = products
            .iter_mut()
            .find(|p| p.id() == product.id())
            .ok_or_else(|| {
                AppError::not_found(format!("Product with id \"{}\" not found", product.id()))
            })?;
        *slot = product.clone();
        Ok(())
    }

    async fn delete(&self, id: &ProductId) -> AppResult<()> {
        let mut products = self.products.write().await;
        products.retain(|p| p.id() != id);
        Ok(())
    }
}

#[async_trait]
impl PageableRepository<Product, ProductId> for InMemoryProductRepository {
    async fn find_all(&self, pagination: &Pagination) -> AppResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products
            .iter()
            .skip(pagination.offset as usize)
            .take(pagination.limit as usize)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, product: NewProduct) -> AppResult<Product> {
        let mut products = self.products.write().await;
        check_unique(&products, &product.title, &product.slug, None)?;

        let product = Product::from_new(ProductId::from_uuid(new_id()), product);
        products.push(product.clone());
        Ok(product)
    }

    async fn find_by_slug_or_title(&self, term: &str) -> AppResult<Option<Product>> {
        let term = term.to_lowercase();
        let products = self.products.read().await;
        Ok(products
            .iter()
            .find(|p| p.slug().to_lowercase() == term || p.title().to_lowercase() == term)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enums::Gender;

    #[tokio::test]
    async fn test_duplicate_slug_reports_key() {
        let repo = InMemoryProductRepository::new();
        repo.insert(NewProduct::new("Red Shoe", None, Gender::Men))
            .await
            .unwrap();

        let err = repo
            .insert(NewProduct::new("Red  Shoe", Some("red_shoe"), Gender::Men))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(ref m) if m == "Key (slug)=(red_shoe) already exists."));
    }

    #[tokio::test]
    async fn test_save_missing_is_not_found() {
        let repo = InMemoryProductRepository::new();
        let ghost = Product::from_new(
            ProductId::from_uuid(new_id()),
            NewProduct::new("Ghost", None, Gender::Women),
        );

        let err = repo.save(&ghost).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_save_allows_own_title() {
        let repo = InMemoryProductRepository::new();
        let mut product = repo
            .insert(NewProduct::new("Red Shoe", None, Gender::Men))
            .await
            .unwrap();
        product.apply(crate::domain::entities::ProductPatch {
            price: Some(5.0),
            ..Default::default()
        });

        repo.save(&product).await.unwrap();
        assert_eq!(repo.find_by_id(product.id()).await.unwrap().unwrap().price(), 5.0);
    }
}
