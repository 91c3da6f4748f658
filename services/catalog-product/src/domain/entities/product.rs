//! 商品实体

use serde::Serialize;

use crate::domain::enums::Gender;
use crate::domain::value_objects::{ProductId, normalize_slug};

/// 商品实体
///
/// title 和 slug 全局唯一，由存储层保证；slug 始终满足 `^[a-z0-9_]*$`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: ProductId,
    title: String,
    price: f64,
    description: Option<String>,
    slug: String,
    stock: u32,
    sizes: Vec<String>,
    gender: Gender,
    tags: Vec<String>,
}

/// 尚未持久化的商品（无 ID）
///
/// 通过 [`NewProduct::new`] 构造时 slug 已规范化
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub title: String,
    pub price: f64,
    pub description: Option<String>,
    pub slug: String,
    pub stock: u32,
    pub sizes: Vec<String>,
    pub gender: Gender,
    pub tags: Vec<String>,
}

impl NewProduct {
    /// 创建新商品，未提供 slug 时由标题派生
    pub fn new(title: impl Into<String>, slug: Option<&str>, gender: Gender) -> Self {
        let title = title.into();
        let slug = normalize_slug(slug.unwrap_or(&title));
        Self {
            title,
            price: 0.0,
            description: None,
            slug,
            stock: 0,
            sizes: Vec::new(),
            gender,
            tags: Vec::new(),
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_sizes(mut self, sizes: Vec<String>) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

/// 部分更新，`None` 表示保持原值
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub title: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub slug: Option<String>,
    pub stock: Option<u32>,
    pub sizes: Option<Vec<String>>,
    pub gender: Option<Gender>,
    pub tags: Option<Vec<String>>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Product {
    /// 由存储层分配 ID 后生成实体
    pub fn from_new(id: ProductId, new: NewProduct) -> Self {
        Self {
            id,
            title: new.title,
            price: new.price,
            description: new.description,
            slug: new.slug,
            stock: new.stock,
            sizes: new.sizes,
            gender: new.gender,
            tags: new.tags,
        }
    }

    /// 合并部分更新
    ///
    /// 提供 slug 时规范化；只提供 title 时从新标题重新派生 slug
    pub fn apply(&mut self, patch: ProductPatch) {
        match (&patch.slug, &patch.title) {
            (Some(slug), _) => self.slug = normalize_slug(slug),
            (None, Some(title)) => self.slug = normalize_slug(title),
            (None, None) => {}
        }

        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if let Some(sizes) = patch.sizes {
            self.sizes = sizes;
        }
        if let Some(gender) = patch.gender {
            self.gender = gender;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
    }

    // ========== Getters ==========

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn sizes(&self) -> &[String] {
        &self.sizes
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}
