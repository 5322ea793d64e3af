use axum::{extract::Path, Json};
use contracts::domain::order::{
    AddOrderProduct, AddOrderSupplier, Order, OrderDetail, OrderDto, UpdateOrderDto,
};
use contracts::domain::product::OrderedProduct;
use contracts::domain::supplier::OrderSupplierView;
use serde_json::json;

use crate::domain::order;
use crate::shared::error::{parse_id, AppError};
use crate::system::auth::extractor::CurrentUser;

/// GET /api/v1/orders: the authenticated user's orders
pub async fn list(current: CurrentUser) -> Result<Json<Vec<Order>>, AppError> {
    Ok(Json(order::service::list_for_user(current.id()).await?))
}

/// GET /api/v1/orders/favorites/:id
pub async fn list_favourites(Path(id): Path<String>) -> Result<Json<Vec<Order>>, AppError> {
    let user_id = parse_id(&id)?;
    Ok(Json(order::service::list_favourites(user_id).await?))
}

/// GET /api/v1/orders/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<OrderDetail>, AppError> {
    let order_id = parse_id(&id)?;
    Ok(Json(order::service::get_detail(order_id).await?))
}

/// GET /api/v1/orders/:id/products
pub async fn list_products(Path(id): Path<String>) -> Result<Json<Vec<OrderedProduct>>, AppError> {
    let order_id = parse_id(&id)?;
    Ok(Json(order::service::list_products(order_id).await?))
}

/// GET /api/v1/orders/:id/suppliers
pub async fn list_suppliers(
    Path(id): Path<String>,
) -> Result<Json<Vec<OrderSupplierView>>, AppError> {
    let order_id = parse_id(&id)?;
    Ok(Json(order::service::list_suppliers(order_id).await?))
}

/// POST /api/v1/orders
pub async fn create(
    current: CurrentUser,
    Json(dto): Json<OrderDto>,
) -> Result<Json<Order>, AppError> {
    Ok(Json(order::service::create(current.id(), dto).await?))
}

/// PATCH /api/v1/orders/:id
pub async fn update(
    current: CurrentUser,
    Path(id): Path<String>,
    Json(dto): Json<UpdateOrderDto>,
) -> Result<Json<Order>, AppError> {
    let order_id = parse_id(&id)?;
    Ok(Json(
        order::service::update(current.id(), order_id, dto).await?,
    ))
}

/// DELETE /api/v1/orders/:id
pub async fn delete(current: CurrentUser, Path(id): Path<String>) -> Result<Json<bool>, AppError> {
    let order_id = parse_id(&id)?;
    order::service::delete(current.id(), order_id).await?;
    Ok(Json(true))
}

/// POST /api/v1/orders/:id/add/:productId
pub async fn add_product(
    current: CurrentUser,
    Path((id, product_id)): Path<(String, String)>,
    Json(body): Json<AddOrderProduct>,
) -> Result<Json<serde_json::Value>, AppError> {
    let order_id = parse_id(&id)?;
    let product_id = parse_id(&product_id)?;
    order::service::add_product(current.id(), order_id, product_id, body.qty).await?;
    Ok(Json(json!({ "ok": true })))
}

/// POST /api/v1/orders/:id/remove/:productId
pub async fn remove_product(
    current: CurrentUser,
    Path((id, product_id)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>, AppError> {
    let order_id = parse_id(&id)?;
    let product_id = parse_id(&product_id)?;
    order::service::remove_product(current.id(), order_id, product_id).await?;
    Ok(Json(json!({ "ok": true })))
}

/// POST /api/v1/orders/:id/addsup/:supplierId
pub async fn add_supplier(
    current: CurrentUser,
    Path((id, supplier_id)): Path<(String, String)>,
    Json(body): Json<AddOrderSupplier>,
) -> Result<Json<serde_json::Value>, AppError> {
    let order_id = parse_id(&id)?;
    let supplier_id = parse_id(&supplier_id)?;
    let email =
        order::service::add_supplier(current.id(), order_id, supplier_id, body.email).await?;
    Ok(Json(json!({ "ok": true, "emailSent": email })))
}

/// POST /api/v1/orders/:id/removesup/:supplierId
pub async fn remove_supplier(
    current: CurrentUser,
    Path((id, supplier_id)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>, AppError> {
    let order_id = parse_id(&id)?;
    let supplier_id = parse_id(&supplier_id)?;
    order::service::remove_supplier(current.id(), order_id, supplier_id).await?;
    Ok(Json(json!({ "ok": true })))
}

/// POST /api/v1/orders/:id/removeproducts/:supplierId
pub async fn remove_supplier_products(
    current: CurrentUser,
    Path((id, supplier_id)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>, AppError> {
    let order_id = parse_id(&id)?;
    let supplier_id = parse_id(&supplier_id)?;
    let removed =
        order::service::remove_supplier_products(current.id(), order_id, supplier_id).await?;
    Ok(Json(json!({ "ok": true, "removed": removed })))
}
