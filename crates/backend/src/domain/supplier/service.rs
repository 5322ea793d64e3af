use contracts::domain::supplier::{
    Supplier, SupplierDto, SupplierWithProducts, UpdateSupplierDto,
};

use super::repository;
use crate::domain::product;
use crate::shared::error::AppError;
use crate::system::auth::guard;

async fn attach_products(models: Vec<repository::Model>) -> Result<Vec<SupplierWithProducts>, AppError> {
    let mut suppliers = Vec::with_capacity(models.len());
    for model in models {
        let products = product::service::list_active_for_supplier(model.id).await?;
        suppliers.push(SupplierWithProducts {
            supplier: model.into(),
            products,
        });
    }
    Ok(suppliers)
}

/// Every active supplier, each with its active products.
pub async fn list_active() -> Result<Vec<SupplierWithProducts>, AppError> {
    attach_products(repository::list_active().await?).await
}

/// A user's active suppliers, each with its active products.
pub async fn list_active_for_user(user_id: i32) -> Result<Vec<SupplierWithProducts>, AppError> {
    attach_products(repository::list_active_for_user(user_id).await?).await
}

/// A user's active suppliers without product expansion (profile shape).
pub async fn list_active_plain_for_user(user_id: i32) -> Result<Vec<Supplier>, AppError> {
    Ok(repository::list_active_for_user(user_id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect())
}

/// Every supplier of the user, soft-deleted ones included.
pub async fn list_all_for_user(user_id: i32) -> Result<Vec<Supplier>, AppError> {
    Ok(repository::list_all_for_user(user_id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect())
}

/// Lookup by id, active products attached. Soft-deleted suppliers are
/// still retrievable here; only listings hide them.
pub async fn get_by_id(id: i32) -> Result<SupplierWithProducts, AppError> {
    let model = repository::find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("supplier"))?;
    let products = product::service::list_active_for_supplier(model.id).await?;
    Ok(SupplierWithProducts {
        supplier: model.into(),
        products,
    })
}

pub async fn create(actor_id: i32, dto: SupplierDto) -> Result<Supplier, AppError> {
    let model = repository::insert(
        actor_id,
        &dto.email,
        &dto.company_name,
        &dto.phone_number,
        &dto.contact_name,
    )
    .await?;
    Ok(model.into())
}

pub async fn update(
    actor_id: i32,
    supplier_id: i32,
    dto: UpdateSupplierDto,
) -> Result<Supplier, AppError> {
    let mut model = repository::find_by_id(supplier_id)
        .await?
        .ok_or(AppError::NotFound("supplier"))?;
    guard::ensure_owner(actor_id, model.user_id)?;

    if let Some(email) = dto.email {
        model.email = email;
    }
    if let Some(company_name) = dto.company_name {
        model.company_name = company_name;
    }
    if let Some(phone_number) = dto.phone_number {
        model.phone_number = phone_number;
    }
    if let Some(contact_name) = dto.contact_name {
        model.contact_name = contact_name;
    }

    Ok(repository::update(model).await?.into())
}

/// Soft delete; the supplier's products are soft-deleted with it so a
/// retired supplier never resurfaces through its catalogue.
pub async fn soft_delete(actor_id: i32, supplier_id: i32) -> Result<Supplier, AppError> {
    let model = repository::find_by_id(supplier_id)
        .await?
        .ok_or(AppError::NotFound("supplier"))?;
    guard::ensure_owner(actor_id, model.user_id)?;

    repository::soft_delete_with_products(model.id).await?;

    let mut supplier: Supplier = model.into();
    supplier.deleted = true;
    Ok(supplier)
}

pub async fn hard_delete(actor_id: i32, supplier_id: i32) -> Result<Supplier, AppError> {
    let model = repository::find_by_id(supplier_id)
        .await?
        .ok_or(AppError::NotFound("supplier"))?;
    guard::ensure_owner(actor_id, model.user_id)?;

    repository::hard_delete(model.id).await?;
    Ok(model.into())
}
