use contracts::domain::supplier::Supplier;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "suppliers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub email: String,
    pub company_name: String,
    pub phone_number: String,
    pub contact_name: String,
    pub deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Supplier {
    fn from(m: Model) -> Self {
        Supplier {
            id: m.id,
            user_id: m.user_id,
            email: m.email,
            company_name: m.company_name,
            phone_number: m.phone_number,
            contact_name: m.contact_name,
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

/// Every supplier of the user, soft-deleted ones included.
pub async fn list_all_for_user(user_id: i32) -> Result<Vec<Model>, DbErr> {
    Entity::find()
        .filter(Column::UserId.eq(user_id))
        .all(conn())
        .await
}

pub async fn insert(
    user_id: i32,
    email: &str,
    company_name: &str,
    phone_number: &str,
    contact_name: &str,
) -> Result<Model, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        email: Set(email.to_string()),
        company_name: Set(company_name.to_string()),
        phone_number: Set(phone_number.to_string()),
        contact_name: Set(contact_name.to_string()),
        deleted: Set(false),
    };
    active.insert(conn()).await
}

pub async fn update(model: Model) -> Result<Model, DbErr> {
    let active = ActiveModel {
        id: Set(model.id),
        user_id: Set(model.user_id),
        email: Set(model.email),
        company_name: Set(model.company_name),
        phone_number: Set(model.phone_number),
        contact_name: Set(model.contact_name),
        deleted: Set(model.deleted),
    };
    active.update(conn()).await
}

/// Soft-delete the supplier and all of its products in one transaction.
pub async fn soft_delete_with_products(id: i32) -> Result<(), DbErr> {
    use crate::domain::product::repository as products;

    let txn = conn().begin().await?;

    Entity::update_many()
        .col_expr(Column::Deleted, Expr::value(true))
        .filter(Column::Id.eq(id))
        .exec(&txn)
        .await?;
    products::Entity::update_many()
        .col_expr(products::Column::Deleted, Expr::value(true))
        .filter(products::Column::SupplierId.eq(id))
        .exec(&txn)
        .await?;

    txn.commit().await
}

pub async fn hard_delete(id: i32) -> Result<bool, DbErr> {
    let result = Entity::delete_by_id(id).exec(conn()).await?;
    Ok(result.rows_affected > 0)
}
