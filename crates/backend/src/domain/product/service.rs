use contracts::domain::product::{Product, ProductDto, UpdateProductDto};

use super::repository;
use crate::domain::supplier;
use crate::shared::error::AppError;
use crate::system::auth::guard;

pub async fn list_active() -> Result<Vec<Product>, AppError> {
    Ok(repository::list_active()
        .await?
        .into_iter()
        .map(Into::into)
        .collect())
}

pub async fn list_active_for_user(user_id: i32) -> Result<Vec<Product>, AppError> {
    Ok(repository::list_active_for_user(user_id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect())
}

pub async fn list_all_for_user(user_id: i32) -> Result<Vec<Product>, AppError> {
    Ok(repository::list_all_for_user(user_id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect())
}

pub async fn list_active_for_supplier(supplier_id: i32) -> Result<Vec<Product>, AppError> {
    Ok(repository::list_active_for_supplier(supplier_id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect())
}

/// Lookup by id; soft-deleted products are still retrievable here.
pub async fn get_by_id(id: i32) -> Result<Product, AppError> {
    let model = repository::find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("product"))?;
    Ok(model.into())
}

/// Create a product under one of the actor's suppliers.
pub async fn create(actor_id: i32, supplier_id: i32, dto: ProductDto) -> Result<Product, AppError> {
    let supplier = supplier::repository::find_by_id(supplier_id)
        .await?
        .ok_or(AppError::NotFound("supplier"))?;
    guard::ensure_owner(actor_id, supplier.user_id)?;

    let model = repository::insert(actor_id, supplier.id, &dto.name, &dto.unit).await?;
    Ok(model.into())
}

pub async fn update(
    actor_id: i32,
    product_id: i32,
    dto: UpdateProductDto,
) -> Result<Product, AppError> {
    let mut model = repository::find_by_id(product_id)
        .await?
        .ok_or(AppError::NotFound("product"))?;
    guard::ensure_owner(actor_id, model.user_id)?;

    if let Some(name) = dto.name {
        model.name = name;
    }
    if let Some(unit) = dto.unit {
        model.unit = unit;
    }

    Ok(repository::update(model).await?.into())
}

pub async fn soft_delete(actor_id: i32, product_id: i32) -> Result<Product, AppError> {
    let model = repository::find_by_id(product_id)
        .await?
        .ok_or(AppError::NotFound("product"))?;
    guard::ensure_owner(actor_id, model.user_id)?;

    repository::soft_delete(model.id).await?;

    let mut product: Product = model.into();
    product.deleted = true;
    Ok(product)
}

pub async fn hard_delete(actor_id: i32, product_id: i32) -> Result<Product, AppError> {
    let model = repository::find_by_id(product_id)
        .await?
        .ok_or(AppError::NotFound("product"))?;
    guard::ensure_owner(actor_id, model.user_id)?;

    repository::hard_delete(model.id).await?;
    Ok(model.into())
}
