use std::collections::HashMap;

use contracts::domain::order::{Order, OrderDetail, OrderDto, UpdateOrderDto};
use contracts::domain::product::OrderedProduct;
use contracts::domain::supplier::OrderSupplierView;
use contracts::domain::user::User;

use super::{email, product_link, repository, supplier_link};
use crate::domain::{product, supplier, user};
use crate::shared::error::AppError;
use crate::system::auth::guard;

pub async fn list_for_user(user_id: i32) -> Result<Vec<Order>, AppError> {
    Ok(repository::list_for_user(user_id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect())
}

pub async fn list_favourites(user_id: i32) -> Result<Vec<Order>, AppError> {
    Ok(repository::list_favourites_for_user(user_id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect())
}

pub async fn create(actor_id: i32, dto: OrderDto) -> Result<Order, AppError> {
    let model = repository::insert(actor_id, &dto.date).await?;
    Ok(model.into())
}

/// Partial update: date, confirmed, favourite and its label. Turning the
/// favourite flag off also clears the label.
pub async fn update(actor_id: i32, order_id: i32, dto: UpdateOrderDto) -> Result<Order, AppError> {
    let mut model = repository::find_by_id(order_id)
        .await?
        .ok_or(AppError::NotFound("order"))?;
    guard::ensure_owner(actor_id, model.user_id)?;

    if let Some(date) = dto.date {
        model.date = date;
    }
    if let Some(confirmed) = dto.confirmed {
        model.confirmed = confirmed;
    }
    if let Some(favourite) = dto.favourite {
        model.favourite = favourite;
        if !favourite {
            model.favourite_label = None;
        }
    }
    if let Some(label) = dto.favourite_label {
        model.favourite_label = Some(label);
    }

    Ok(repository::update(model).await?.into())
}

pub async fn delete(actor_id: i32, order_id: i32) -> Result<(), AppError> {
    let model = repository::find_by_id(order_id)
        .await?
        .ok_or(AppError::NotFound("order"))?;
    guard::ensure_owner(actor_id, model.user_id)?;

    repository::delete_with_links(model.id).await?;
    Ok(())
}

/// Put a product on the order, or overwrite its quantity when the line
/// already exists.
pub async fn add_product(
    actor_id: i32,
    order_id: i32,
    product_id: i32,
    qty: i32,
) -> Result<(), AppError> {
    if qty < 1 {
        return Err(AppError::BadRequest(
            "qty must be a positive integer".to_string(),
        ));
    }

    let order = repository::find_by_id(order_id)
        .await?
        .ok_or(AppError::NotFound("order"))?;
    guard::ensure_owner(actor_id, order.user_id)?;
    let product = product::repository::find_by_id(product_id)
        .await?
        .ok_or(AppError::NotFound("product"))?;

    product_link::upsert(order.id, product.id, actor_id, qty).await?;
    Ok(())
}

pub async fn remove_product(actor_id: i32, order_id: i32, product_id: i32) -> Result<(), AppError> {
    let order = repository::find_by_id(order_id)
        .await?
        .ok_or(AppError::NotFound("order"))?;
    guard::ensure_owner(actor_id, order.user_id)?;
    product::repository::find_by_id(product_id)
        .await?
        .ok_or(AppError::NotFound("product"))?;

    if !product_link::delete(order.id, product_id).await? {
        return Err(AppError::NotFound("orderProduct"));
    }
    Ok(())
}

/// Put a supplier on the order, storing the email text for it. When the
/// caller supplies none, the email is composed from the order's current
/// lines for that supplier.
pub async fn add_supplier(
    actor_id: i32,
    order_id: i32,
    supplier_id: i32,
    email_body: Option<String>,
) -> Result<Option<String>, AppError> {
    let order = repository::find_by_id(order_id)
        .await?
        .ok_or(AppError::NotFound("order"))?;
    guard::ensure_owner(actor_id, order.user_id)?;
    let supplier_model = supplier::repository::find_by_id(supplier_id)
        .await?
        .ok_or(AppError::NotFound("supplier"))?;

    let body = match email_body {
        Some(body) => Some(body),
        None => {
            let owner: User = user::repository::find_by_id(order.user_id)
                .await?
                .ok_or(AppError::NotFound("user"))?
                .into();
            let lines = supplier_lines(order.id, supplier_model.id).await?;
            Some(email::compose_supplier_email(
                &owner,
                &supplier_model.clone().into(),
                &lines,
            ))
        }
    };

    let link = supplier_link::upsert(order.id, supplier_model.id, actor_id, body).await?;
    Ok(link.email_sent)
}

/// Take a supplier off the order. Its product lines go with it in the
/// same transaction.
pub async fn remove_supplier(
    actor_id: i32,
    order_id: i32,
    supplier_id: i32,
) -> Result<(), AppError> {
    let order = repository::find_by_id(order_id)
        .await?
        .ok_or(AppError::NotFound("order"))?;
    guard::ensure_owner(actor_id, order.user_id)?;
    supplier::repository::find_by_id(supplier_id)
        .await?
        .ok_or(AppError::NotFound("supplier"))?;
    supplier_link::find(order.id, supplier_id)
        .await?
        .ok_or(AppError::NotFound("orderSupplier"))?;

    let product_ids = product::repository::list_ids_for_supplier(supplier_id).await?;
    supplier_link::delete_with_products(order.id, supplier_id, &product_ids).await?;
    Ok(())
}

/// Drop only the supplier's product lines from the order, keeping the
/// supplier row itself.
pub async fn remove_supplier_products(
    actor_id: i32,
    order_id: i32,
    supplier_id: i32,
) -> Result<u64, AppError> {
    let order = repository::find_by_id(order_id)
        .await?
        .ok_or(AppError::NotFound("order"))?;
    guard::ensure_owner(actor_id, order.user_id)?;
    supplier::repository::find_by_id(supplier_id)
        .await?
        .ok_or(AppError::NotFound("supplier"))?;

    let product_ids = product::repository::list_ids_for_supplier(supplier_id).await?;
    Ok(product_link::delete_for_products(order.id, &product_ids).await?)
}

/// The order's non-deleted products with quantities attached.
pub async fn list_products(order_id: i32) -> Result<Vec<OrderedProduct>, AppError> {
    repository::find_by_id(order_id)
        .await?
        .ok_or(AppError::NotFound("order"))?;
    order_lines(order_id).await
}

/// The order's suppliers, each restricted to the products it contributes
/// to this order and carrying the stored email text.
pub async fn list_suppliers(order_id: i32) -> Result<Vec<OrderSupplierView>, AppError> {
    repository::find_by_id(order_id)
        .await?
        .ok_or(AppError::NotFound("order"))?;

    let links = supplier_link::list_for_order(order_id).await?;
    let lines = order_lines(order_id).await?;

    let mut suppliers = Vec::with_capacity(links.len());
    for link in links {
        let Some(supplier_model) = supplier::repository::find_by_id(link.supplier_id).await? else {
            continue;
        };
        let products: Vec<OrderedProduct> = lines
            .iter()
            .filter(|line| line.product.supplier_id == link.supplier_id)
            .cloned()
            .collect();
        suppliers.push(OrderSupplierView {
            supplier: supplier_model.into(),
            email_sent: link.email_sent,
            products,
        });
    }
    Ok(suppliers)
}

/// The order with both association lists expanded.
pub async fn get_detail(order_id: i32) -> Result<OrderDetail, AppError> {
    let order: Order = repository::find_by_id(order_id)
        .await?
        .ok_or(AppError::NotFound("order"))?
        .into();

    let products = list_products(order.id).await?;
    let suppliers = list_suppliers(order.id).await?;

    Ok(OrderDetail {
        order,
        products,
        suppliers,
    })
}

/// Expand the order's join rows into products with quantities; lines
/// whose product was soft-deleted are skipped.
async fn order_lines(order_id: i32) -> Result<Vec<OrderedProduct>, AppError> {
    let links = product_link::list_for_order(order_id).await?;
    let ids: Vec<i32> = links.iter().map(|l| l.product_id).collect();
    let by_id: HashMap<i32, product::repository::Model> =
        product::repository::list_active_by_ids(&ids)
            .await?
            .into_iter()
            .map(|m| (m.id, m))
            .collect();

    Ok(links
        .into_iter()
        .filter_map(|link| {
            by_id.get(&link.product_id).map(|model| OrderedProduct {
                product: model.clone().into(),
                qty: link.qty,
            })
        })
        .collect())
}

/// The order's lines restricted to one supplier, for email composition.
async fn supplier_lines(order_id: i32, supplier_id: i32) -> Result<Vec<OrderedProduct>, AppError> {
    Ok(order_lines(order_id)
        .await?
        .into_iter()
        .filter(|line| line.product.supplier_id == supplier_id)
        .collect())
}
