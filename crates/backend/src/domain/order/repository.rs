use contracts::domain::order::Order;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub date: String,
    pub confirmed: bool,
    pub favourite: bool,
    pub favourite_label: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Order {
    fn from(m: Model) -> Self {
        Order {
            id: m.id,
            user_id: m.user_id,
            date: m.date,
            confirmed: m.confirmed,
            favourite: m.favourite,
            favourite_label: m.favourite_label,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn find_by_id(id: i32) -> Result<Option<Model>, DbErr> {
    Entity::find_by_id(id).one(conn()).await
}

pub async fn list_for_user(user_id: i32) -> Result<Vec<Model>, DbErr> {
    Entity::find()
        .filter(Column::UserId.eq(user_id))
        .all(conn())
        .await
}

pub async fn list_favourites_for_user(user_id: i32) -> Result<Vec<Model>, DbErr> {
    Entity::find()
        .filter(Column::UserId.eq(user_id))
        .filter(Column::Favourite.eq(true))
        .all(conn())
        .await
}

/// A new order starts empty: no lines, no suppliers, not confirmed.
pub async fn insert(user_id: i32, date: &str) -> Result<Model, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        date: Set(date.to_string()),
        confirmed: Set(false),
        favourite: Set(false),
        favourite_label: Set(None),
    };
    active.insert(conn()).await
}

pub async fn update(model: Model) -> Result<Model, DbErr> {
    let active = ActiveModel {
        id: Set(model.id),
        user_id: Set(model.user_id),
        date: Set(model.date),
        confirmed: Set(model.confirmed),
        favourite: Set(model.favourite),
        favourite_label: Set(model.favourite_label),
    };
    active.update(conn()).await
}

/// Hard-delete the order and its join rows in one transaction. The
/// underlying products and suppliers are untouched.
pub async fn delete_with_links(id: i32) -> Result<(), DbErr> {
    use super::{product_link, supplier_link};

    let txn = conn().begin().await?;

    product_link::Entity::delete_many()
        .filter(product_link::Column::OrderId.eq(id))
        .exec(&txn)
        .await?;
    supplier_link::Entity::delete_many()
        .filter(supplier_link::Column::OrderId.eq(id))
        .exec(&txn)
        .await?;
    Entity::delete_by_id(id).exec(&txn).await?;

    txn.commit().await
}
