//! Product queries

use catalog_common::Pagination;

/// 分页列出商品
#[derive(Debug, Clone, Default)]
pub struct ListProductsQuery {
    pub pagination: Pagination,
}

/// 按 ID 或 slug/标题查找商品
#[derive(Debug, Clone)]
pub struct FindProductQuery {
    pub term: String,
}

impl FindProductQuery {
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into() }
    }
}
