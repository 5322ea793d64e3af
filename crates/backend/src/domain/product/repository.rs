use contracts::domain::product::Product;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub supplier_id: i32,
    pub name: String,
    pub unit: String,
    pub deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(m: Model) -> Self {
        Product {
            id: m.id,
            user_id: m.user_id,
            supplier_id: m.supplier_id,
            name: m.name,
            unit: m.unit,
            deleted: m.deleted,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn find_by_id(id: i32) -> Result<Option<Model>, DbErr> {
    Entity::find_by_id(id).one(conn()).await
}

pub async fn list_active() -> Result<Vec<Model>, DbErr> {
    Entity::find()
        .filter(Column::Deleted.eq(false))
        .all(conn())
        .await
}

pub async fn list_active_for_user(user_id: i32) -> Result<Vec<Model>, DbErr> {
    Entity::find()
        .filter(Column::Deleted.eq(false))
        .filter(Column::UserId.eq(user_id))
        .all(conn())
        .await
}

/// Every product of the user, soft-deleted ones included.
pub async fn list_all_for_user(user_id: i32) -> Result<Vec<Model>, DbErr> {
    Entity::find()
        .filter(Column::UserId.eq(user_id))
        .all(conn())
        .await
}

pub async fn list_active_for_supplier(supplier_id: i32) -> Result<Vec<Model>, DbErr> {
    Entity::find()
        .filter(Column::Deleted.eq(false))
        .filter(Column::SupplierId.eq(supplier_id))
        .all(conn())
        .await
}

/// Active products by id set, for expanding order lines.
pub async fn list_active_by_ids(ids: &[i32]) -> Result<Vec<Model>, DbErr> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    Entity::find()
        .filter(Column::Deleted.eq(false))
        .filter(Column::Id.is_in(ids.iter().copied()))
        .all(conn())
        .await
}

/// Ids of every product belonging to the supplier (deleted included),
/// used when cascading join-row removal.
pub async fn list_ids_for_supplier(supplier_id: i32) -> Result<Vec<i32>, DbErr> {
    Ok(Entity::find()
        .filter(Column::SupplierId.eq(supplier_id))
        .all(conn())
        .await?
        .into_iter()
        .map(|m| m.id)
        .collect())
}

pub async fn insert(
    user_id: i32,
    supplier_id: i32,
    name: &str,
    unit: &str,
) -> Result<Model, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        supplier_id: Set(supplier_id),
        name: Set(name.to_string()),
        unit: Set(unit.to_string()),
        deleted: Set(false),
    };
    active.insert(conn()).await
}

pub async fn update(model: Model) -> Result<Model, DbErr> {
    let active = ActiveModel {
        id: Set(model.id),
        user_id: Set(model.user_id),
        supplier_id: Set(model.supplier_id),
        name: Set(model.name),
        unit: Set(model.unit),
        deleted: Set(model.deleted),
    };
    active.update(conn()).await
}

pub async fn soft_delete(id: i32) -> Result<bool, DbErr> {
    let result = Entity::update_many()
        .col_expr(Column::Deleted, Expr::value(true))
        .filter(Column::Id.eq(id))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

pub async fn hard_delete(id: i32) -> Result<bool, DbErr> {
    let result = Entity::delete_by_id(id).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
