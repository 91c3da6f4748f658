//! 请求/响应 DTO

use serde::{Deserialize, Serialize};

use crate::application::{CreateProductCommand, UpdateProductCommand};
use crate::domain::entities::Product;
use crate::domain::enums::Gender;
use crate::domain::value_objects::ProductId;

/// POST /api/products
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateProductRequest {
    pub title: String,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub slug: Option<String>,
    pub stock: Option<i64>,
    pub sizes: Option<Vec<String>>,
    pub gender: String,
    pub tags: Option<Vec<String>>,
}

impl From<CreateProductRequest> for CreateProductCommand {
    fn from(req: CreateProductRequest) -> Self {
        Self {
            title: req.title,
            price: req.price,
            description: req.description,
            slug: req.slug,
            stock: req.stock,
            sizes: req.sizes,
            gender: req.gender,
            tags: req.tags,
        }
    }
}

/// PATCH /api/products/{id}
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateProductRequest {
    pub title: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub slug: Option<String>,
    pub stock: Option<i64>,
    pub sizes: Option<Vec<String>>,
    pub gender: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl UpdateProductRequest {
    pub fn into_command(self, id: ProductId) -> UpdateProductCommand {
        UpdateProductCommand {
            id,
            title: self.title,
            price: self.price,
            description: self.description,
            slug: self.slug,
            stock: self.stock,
            sizes: self.sizes,
            gender: self.gender,
            tags: self.tags,
        }
    }
}

/// 商品响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: String,
    pub title: String,
    pub price: f64,
    pub description: Option<String>,
    pub slug: String,
    pub stock: u32,
    pub sizes: Vec<String>,
    pub gender: Gender,
    pub tags: Vec<String>,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id().to_string(),
            title: p.title().to_string(),
            price: p.price(),
            description: p.description().map(str::to_string),
            slug: p.slug().to_string(),
            stock: p.stock(),
            sizes: p.sizes().to_vec(),
            gender: p.gender(),
            tags: p.tags().to_vec(),
        }
    }
}
