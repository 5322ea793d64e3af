use serde::{Deserialize, Serialize};

use super::order::Order;
use super::product::Product;
use super::supplier::Supplier;

/// Account owner. The password hash never crosses the wire; registration
/// and login carry the plaintext in dedicated request types only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub email: String,
    pub contact_name: String,
    pub company_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserDto {
    pub email: String,
    pub password: String,
    pub contact_name: String,
    pub company_name: String,
}

/// Partial update; absent fields are left untouched. A new password is
/// re-hashed before storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    pub email: Option<String>,
    pub password: Option<String>,
    pub contact_name: Option<String>,
    pub company_name: Option<String>,
}

/// `GET /users/:id` response: the user plus their active suppliers and
/// products and all of their orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOverview {
    pub user: User,
    pub suppliers: Vec<Supplier>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
}

/// `POST /auth/profile` response: the authenticated user with associations
/// inlined, the shape the pages bind to directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(flatten)]
    pub user: User,
    pub products: Vec<Product>,
    pub suppliers: Vec<Supplier>,
    pub orders: Vec<Order>,
}
