use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

/// Join row tying a supplier to an order, carrying the email text that
/// was (or will be) sent to that supplier for this order.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_suppliers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub supplier_id: i32,
    pub user_id: i32,
    pub email_sent: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn find(order_id: i32, supplier_id: i32) -> Result<Option<Model>, DbErr> {
    Entity::find_by_id((order_id, supplier_id)).one(conn()).await
}

pub async fn list_for_order(order_id: i32) -> Result<Vec<Model>, DbErr> {
    Entity::find()
        .filter(Column::OrderId.eq(order_id))
        .all(conn())
        .await
}

/// Create or overwrite the (order, supplier) row with the email text.
pub async fn upsert(
    order_id: i32,
    supplier_id: i32,
    user_id: i32,
    email_sent: Option<String>,
) -> Result<Model, DbErr> {
    match find(order_id, supplier_id).await? {
        Some(existing) => {
            let mut active: ActiveModel = existing.into();
            active.user_id = Set(user_id);
            active.email_sent = Set(email_sent);
            active.update(conn()).await
        }
        None => {
            let active = ActiveModel {
                order_id: Set(order_id),
                supplier_id: Set(supplier_id),
                user_id: Set(user_id),
                email_sent: Set(email_sent),
            };
            active.insert(conn()).await
        }
    }
}

pub async fn delete(order_id: i32, supplier_id: i32) -> Result<bool, DbErr> {
    let result = Entity::delete_by_id((order_id, supplier_id))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

/// Remove the supplier from the order together with the order's rows for
/// that supplier's products, atomically. Partial removal is never visible.
pub async fn delete_with_products(
    order_id: i32,
    supplier_id: i32,
    product_ids: &[i32],
) -> Result<bool, DbErr> {
    use super::product_link;

    let txn = conn().begin().await?;

    let result = Entity::delete_by_id((order_id, supplier_id))
        .exec(&txn)
        .await?;
    if !product_ids.is_empty() {
        product_link::Entity::delete_many()
            .filter(product_link::Column::OrderId.eq(order_id))
            .filter(product_link::Column::ProductId.is_in(product_ids.iter().copied()))
            .exec(&txn)
            .await?;
    }

    txn.commit().await?;
    Ok(result.rows_affected > 0)
}
