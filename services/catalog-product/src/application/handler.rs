//! 商品目录业务处理

use std::future::Future;
use std::sync::Arc;

use catalog_errors::{AppError, AppResult};
use catalog_telemetry::OperationTimer;
use tracing::{error, info};

use crate::domain::entities::Product;
use crate::domain::repositories::ProductRepository;
use crate::domain::value_objects::{ProductId, ProductLookup};

use super::commands::{CreateProductCommand, UpdateProductCommand};
use super::queries::{FindProductQuery, ListProductsQuery};

/// 对外暴露的存储故障消息，细节只写日志
const STORE_FAILURE_MESSAGE: &str = "Unexpected error, check server logs";

/// 商品目录
///
/// 所有存储错误在操作边界统一转换：唯一约束冲突（Conflict）和记录不存在（NotFound）
/// 原样返回，其余记录日志后转为不透明的 Internal。
pub struct ProductCatalog {
    repo: Arc<dyn ProductRepository>,
}

impl ProductCatalog {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// 创建商品
    pub async fn create(&self, cmd: CreateProductCommand) -> AppResult<Product> {
        observed("create", async {
            info!(title = %cmd.title, "Creating product");

            let new_product = cmd.into_new_product()?;
            let product = self
                .repo
                .insert(new_product)
                .await
                .map_err(|e| handle_store_error(e, "create"))?;

            info!(id = %product.id(), slug = product.slug(), "Product created");
            Ok(product)
        })
        .await
    }

    /// 分页列出商品
    pub async fn list(&self, query: ListProductsQuery) -> AppResult<Vec<Product>> {
        observed("list", async {
            let products = self
                .repo
                .find_all(&query.pagination)
                .await
                .map_err(|e| handle_store_error(e, "list"))?;

            info!(
                limit = query.pagination.limit,
                offset = query.pagination.offset,
                count = products.len(),
                "Products listed"
            );
            Ok(products)
        })
        .await
    }

    /// 按 ID 或 slug/标题查找商品
    pub async fn find_one(&self, query: FindProductQuery) -> AppResult<Product> {
        observed("find_one", self.resolve(&query.term)).await
    }

    /// 部分更新商品
    pub async fn update(&self, cmd: UpdateProductCommand) -> AppResult<Product> {
        observed("update", async {
            let (id, patch) = cmd.into_patch()?;
            info!(%id, "Updating product");

            let mut product = self.load(&id).await?;
            product.apply(patch);

            self.repo
                .save(&product)
                .await
                .map_err(|e| handle_store_error(e, "update"))?;

            info!(%id, slug = product.slug(), "Product updated");
            Ok(product)
        })
        .await
    }

    /// 删除商品
    pub async fn remove(&self, query: FindProductQuery) -> AppResult<()> {
        observed("remove", async {
            let product = self.resolve(&query.term).await?;

            self.repo
                .delete(product.id())
                .await
                .map_err(|e| handle_store_error(e, "remove"))?;

            info!(id = %product.id(), "Product removed");
            Ok(())
        })
        .await
    }

    async fn resolve(&self, term: &str) -> AppResult<Product> {
        let found = match ProductLookup::parse(term) {
            ProductLookup::ById(id) => self.repo.find_by_id(&id).await,
            ProductLookup::BySearchTerm(term) => self.repo.find_by_slug_or_title(&term).await,
        }
        .map_err(|e| handle_store_error(e, "find"))?;

        found.ok_or_else(|| AppError::not_found(format!("Product with \"{}\" not found", term)))
    }

    async fn load(&self, id: &ProductId) -> AppResult<Product> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| handle_store_error(e, "update"))?
            .ok_or_else(|| AppError::not_found(format!("Product with id \"{}\" not found", id)))
    }
}

/// 存储错误转换
///
/// 存储层返回的 Validation（约束检查、列越界）同样视为存储故障
fn handle_store_error(err: AppError, operation: &'static str) -> AppError {
    match err {
        AppError::Conflict(_) | AppError::NotFound(_) => err,
        other => {
            error!(operation, error = %other, "Product store failure");
            AppError::internal(STORE_FAILURE_MESSAGE)
        }
    }
}

/// 记录操作耗时和结果
async fn observed<T>(
    operation: &'static str,
    fut: impl Future<Output = AppResult<T>>,
) -> AppResult<T> {
    let timer = OperationTimer::start(operation);
    let result = fut.await;

    let outcome = match &result {
        Ok(_) => "ok",
        Err(e) if e.is_server_error() => "error",
        Err(_) => "rejected",
    };
    timer.finish(outcome);

    result
}
