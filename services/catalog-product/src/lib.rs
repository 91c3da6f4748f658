//! catalog-product - 商品目录服务
//!
//! 商品的创建、分页列出、按 ID 或 slug 查找、部分更新和删除

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
