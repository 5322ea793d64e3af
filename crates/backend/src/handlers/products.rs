use axum::{extract::Path, Json};
use contracts::domain::product::{Product, ProductDto, UpdateProductDto};

use crate::domain::product;
use crate::shared::error::{parse_id, AppError};
use crate::system::auth::extractor::CurrentUser;

/// GET /api/v1/products
pub async fn list() -> Result<Json<Vec<Product>>, AppError> {
    Ok(Json(product::service::list_active().await?))
}

/// GET /api/v1/products/all/:id: a user's products, deleted included
pub async fn list_all_for_user(Path(id): Path<String>) -> Result<Json<Vec<Product>>, AppError> {
    let user_id = parse_id(&id)?;
    Ok(Json(product::service::list_all_for_user(user_id).await?))
}

/// GET /api/v1/products/user/:id: a user's active products
pub async fn list_for_user(Path(id): Path<String>) -> Result<Json<Vec<Product>>, AppError> {
    let user_id = parse_id(&id)?;
    Ok(Json(product::service::list_active_for_user(user_id).await?))
}

/// GET /api/v1/products/supplier/:id: a supplier's active products
pub async fn list_for_supplier(Path(id): Path<String>) -> Result<Json<Vec<Product>>, AppError> {
    let supplier_id = parse_id(&id)?;
    Ok(Json(
        product::service::list_active_for_supplier(supplier_id).await?,
    ))
}

/// GET /api/v1/products/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Product>, AppError> {
    let product_id = parse_id(&id)?;
    Ok(Json(product::service::get_by_id(product_id).await?))
}

/// POST /api/v1/products/:supplierId: create under a supplier
pub async fn create(
    current: CurrentUser,
    Path(supplier_id): Path<String>,
    Json(dto): Json<ProductDto>,
) -> Result<Json<Product>, AppError> {
    let supplier_id = parse_id(&supplier_id)?;
    Ok(Json(
        product::service::create(current.id(), supplier_id, dto).await?,
    ))
}

/// PATCH /api/v1/products/:id
pub async fn update(
    current: CurrentUser,
    Path(id): Path<String>,
    Json(dto): Json<UpdateProductDto>,
) -> Result<Json<Product>, AppError> {
    let product_id = parse_id(&id)?;
    Ok(Json(
        product::service::update(current.id(), product_id, dto).await?,
    ))
}

/// POST /api/v1/products/:id/delete: soft delete
pub async fn soft_delete(
    current: CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<Product>, AppError> {
    let product_id = parse_id(&id)?;
    Ok(Json(
        product::service::soft_delete(current.id(), product_id).await?,
    ))
}

/// DELETE /api/v1/products/:id
pub async fn hard_delete(
    current: CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<Product>, AppError> {
    let product_id = parse_id(&id)?;
    Ok(Json(
        product::service::hard_delete(current.id(), product_id).await?,
    ))
}
