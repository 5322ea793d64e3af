use axum::{extract::Path, Json};
use contracts::domain::supplier::{
    Supplier, SupplierDto, SupplierWithProducts, UpdateSupplierDto,
};

use crate::domain::supplier;
use crate::shared::error::{parse_id, AppError};
use crate::system::auth::extractor::CurrentUser;

/// GET /api/v1/suppliers
pub async fn list() -> Result<Json<Vec<SupplierWithProducts>>, AppError> {
    Ok(Json(supplier::service::list_active().await?))
}

/// GET /api/v1/suppliers/all/:id: a user's suppliers, deleted included
pub async fn list_all_for_user(Path(id): Path<String>) -> Result<Json<Vec<Supplier>>, AppError> {
    let user_id = parse_id(&id)?;
    Ok(Json(supplier::service::list_all_for_user(user_id).await?))
}

/// GET /api/v1/suppliers/user/:id: a user's active suppliers
pub async fn list_for_user(
    Path(id): Path<String>,
) -> Result<Json<Vec<SupplierWithProducts>>, AppError> {
    let user_id = parse_id(&id)?;
    Ok(Json(
        supplier::service::list_active_for_user(user_id).await?,
    ))
}

/// GET /api/v1/suppliers/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<SupplierWithProducts>, AppError> {
    let supplier_id = parse_id(&id)?;
    Ok(Json(supplier::service::get_by_id(supplier_id).await?))
}

/// POST /api/v1/suppliers
pub async fn create(
    current: CurrentUser,
    Json(dto): Json<SupplierDto>,
) -> Result<Json<Supplier>, AppError> {
    Ok(Json(supplier::service::create(current.id(), dto).await?))
}

/// PATCH /api/v1/suppliers/:id
pub async fn update(
    current: CurrentUser,
    Path(id): Path<String>,
    Json(dto): Json<UpdateSupplierDto>,
) -> Result<Json<Supplier>, AppError> {
    let supplier_id = parse_id(&id)?;
    Ok(Json(
        supplier::service::update(current.id(), supplier_id, dto).await?,
    ))
}

/// POST /api/v1/suppliers/:id/delete: soft delete, products cascade
pub async fn soft_delete(
    current: CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<Supplier>, AppError> {
    let supplier_id = parse_id(&id)?;
    Ok(Json(
        supplier::service::soft_delete(current.id(), supplier_id).await?,
    ))
}

/// DELETE /api/v1/suppliers/:id
pub async fn hard_delete(
    current: CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<Supplier>, AppError> {
    let supplier_id = parse_id(&id)?;
    Ok(Json(
        supplier::service::hard_delete(current.id(), supplier_id).await?,
    ))
}
