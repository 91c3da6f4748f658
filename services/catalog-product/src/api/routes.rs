//! 商品 HTTP 路由

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    routing::get,
};
use catalog_common::Pagination;
use catalog_errors::{AppError, AppResult};

use super::dto::{CreateProductRequest, ProductResponse, UpdateProductRequest};
use crate::application::{FindProductQuery, ListProductsQuery, ProductCatalog};
use crate::domain::value_objects::ProductId;

type Catalog = Arc<ProductCatalog>;

/// 构建商品路由
pub fn router(catalog: Catalog) -> Router {
    Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .route(
            "/api/products/{term}",
            get(find_product).patch(update_product).delete(remove_product),
        )
        .with_state(catalog)
}

/// POST /api/products
async fn create_product(
    State(catalog): State<Catalog>,
    body: Result<Json<CreateProductRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<ProductResponse>)> {
    let Json(req) = body.map_err(json_rejection)?;
    let product = catalog.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(product.into())))
}

/// GET /api/products?limit=&offset=
async fn list_products(
    State(catalog): State<Catalog>,
    query: Result<Query<Pagination>, QueryRejection>,
) -> AppResult<Json<Vec<ProductResponse>>> {
    let Query(pagination) = query.map_err(|e| AppError::validation(e.body_text()))?;
    let products = catalog.list(ListProductsQuery { pagination }).await?;
    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// GET /api/products/{term}
async fn find_product(
    State(catalog): State<Catalog>,
    Path(term): Path<String>,
) -> AppResult<Json<ProductResponse>> {
    let product = catalog.find_one(FindProductQuery::new(term)).await?;
    Ok(Json(product.into()))
}

/// PATCH /api/products/{id}
async fn update_product(
    State(catalog): State<Catalog>,
    Path(id): Path<String>,
    body: Result<Json<UpdateProductRequest>, JsonRejection>,
) -> AppResult<Json<ProductResponse>> {
    let id: ProductId = id
        .parse()
        .map_err(|_| AppError::validation(format!("Validation failed (uuid is expected): {}", id)))?;
    let Json(req) = body.map_err(json_rejection)?;

    let product = catalog.update(req.into_command(id)).await?;
    Ok(Json(product.into()))
}

/// DELETE /api/products/{term}
async fn remove_product(
    State(catalog): State<Catalog>,
    Path(term): Path<String>,
) -> AppResult<StatusCode> {
    catalog.remove(FindProductQuery::new(term)).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    AppError::validation(rejection.body_text())
}
