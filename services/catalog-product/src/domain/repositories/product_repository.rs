//! 商品仓储接口

use async_trait::async_trait;
use catalog_errors::AppResult;
use catalog_ports::PageableRepository;

use crate::domain::entities::{NewProduct, Product};
use crate::domain::value_objects::ProductId;

/// 商品仓储接口
///
/// 唯一约束冲突返回 `AppError::Conflict`，其他存储错误返回 `AppError::Database`
#[async_trait]
pub trait ProductRepository: PageableRepository<Product, ProductId> {
    /// 插入新商品，由存储层生成 ID
    async fn insert(&self, product: NewProduct) -> AppResult<Product>;

    /// 按 slug 或标题查找（不区分大小写），返回第一个匹配
    async fn find_by_slug_or_title(&self, term: &str) -> AppResult<Option<Product>>;
}
