//! Repository trait 定义

use async_trait::async_trait;
use catalog_common::Pagination;
use catalog_errors::AppResult;

/// 基础 Repository trait
#[async_trait]
pub trait Repository<T, ID>: Send + Sync {
    /// 根据 ID 查找
    async fn find_by_id(&self, id: &ID) -> AppResult<Option<T>>;

    /// 保存已存在实体的变更
    ///
    /// 实体不存在时返回 `AppError::NotFound`
    async fn save(&self, entity: &T) -> AppResult<()>;

    /// 删除实体
    async fn delete(&self, id: &ID) -> AppResult<()>;
}

/// 支持分页查询的 Repository
#[async_trait]
pub trait PageableRepository<T, ID>: Repository<T, ID> {
    /// 分页查询所有（存储默认顺序）
    async fn find_all(&self, pagination: &Pagination) -> AppResult<Vec<T>>;
}
