use contracts::domain::user::User;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait};
use serde::{Deserialize, Serialize};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub contact_name: String,
    pub company_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for User {
    fn from(m: Model) -> Self {
        User {
            id: m.id,
            email: m.email,
            contact_name: m.contact_name,
            company_name: m.company_name,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn find_by_id(id: i32) -> Result<Option<Model>, DbErr> {
    Entity::find_by_id(id).one(conn()).await
}

pub async fn find_by_email(email: &str) -> Result<Option<Model>, DbErr> {
    Entity::find()
        .filter(Column::Email.eq(email))
        .one(conn())
        .await
}

pub async fn insert(
    email: &str,
    password_hash: &str,
    contact_name: &str,
    company_name: &str,
) -> Result<Model, DbErr> {
    let active = ActiveModel {
        id: NotSet,
        email: Set(email.to_string()),
        password_hash: Set(password_hash.to_string()),
        contact_name: Set(contact_name.to_string()),
        company_name: Set(company_name.to_string()),
    };
    active.insert(conn()).await
}

pub async fn update(model: Model) -> Result<Model, DbErr> {
    let active = ActiveModel {
        id: Set(model.id),
        email: Set(model.email),
        password_hash: Set(model.password_hash),
        contact_name: Set(model.contact_name),
        company_name: Set(model.company_name),
    };
    active.update(conn()).await
}

/// Delete the user together with everything they own: products, suppliers,
/// orders and both join tables, in one transaction.
pub async fn delete_with_owned(id: i32) -> Result<(), DbErr> {
    use crate::domain::order::product_link;
    use crate::domain::order::repository as orders;
    use crate::domain::order::supplier_link;
    use crate::domain::product::repository as products;
    use crate::domain::supplier::repository as suppliers;

    let txn = conn().begin().await?;

    product_link::Entity::delete_many()
        .filter(product_link::Column::UserId.eq(id))
        .exec(&txn)
        .await?;
    supplier_link::Entity::delete_many()
        .filter(supplier_link::Column::UserId.eq(id))
        .exec(&txn)
        .await?;
    orders::Entity::delete_many()
        .filter(orders::Column::UserId.eq(id))
        .exec(&txn)
        .await?;
    products::Entity::delete_many()
        .filter(products::Column::UserId.eq(id))
        .exec(&txn)
        .await?;
    suppliers::Entity::delete_many()
        .filter(suppliers::Column::UserId.eq(id))
        .exec(&txn)
        .await?;
    Entity::delete_by_id(id).exec(&txn).await?;

    txn.commit().await
}
