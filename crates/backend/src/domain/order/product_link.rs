use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

/// Join row tying a product to an order, carrying the ordered quantity.
/// The user reference is denormalized from the order's owner.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_id: i32,
    pub user_id: i32,
    pub qty: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn find(order_id: i32, product_id: i32) -> Result<Option<Model>, DbErr> {
    Entity::find_by_id((order_id, product_id)).one(conn()).await
}

pub async fn list_for_order(order_id: i32) -> Result<Vec<Model>, DbErr> {
    Entity::find()
        .filter(Column::OrderId.eq(order_id))
        .all(conn())
        .await
}

/// Create or overwrite the (order, product) row with the given quantity.
pub async fn upsert(order_id: i32, product_id: i32, user_id: i32, qty: i32) -> Result<Model, DbErr> {
    match find(order_id, product_id).await? {
        Some(existing) => {
            let mut active: ActiveModel = existing.into();
            active.user_id = Set(user_id);
            active.qty = Set(qty);
            active.update(conn()).await
        }
        None => {
            let active = ActiveModel {
                order_id: Set(order_id),
                product_id: Set(product_id),
                user_id: Set(user_id),
                qty: Set(qty),
            };
            active.insert(conn()).await
        }
    }
}

pub async fn delete(order_id: i32, product_id: i32) -> Result<bool, DbErr> {
    let result = Entity::delete_by_id((order_id, product_id))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

/// Remove the order's rows for the given products (one supplier's
/// catalogue). Returns the number of rows removed.
pub async fn delete_for_products(order_id: i32, product_ids: &[i32]) -> Result<u64, DbErr> {
    if product_ids.is_empty() {
        return Ok(0);
    }
    let result = Entity::delete_many()
        .filter(Column::OrderId.eq(order_id))
        .filter(Column::ProductId.is_in(product_ids.iter().copied()))
        .exec(conn())
        .await?;
    Ok(result.rows_affected)
}
