use serde::{Deserialize, Serialize};

use super::product::{OrderedProduct, Product};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: i32,
    pub user_id: i32,
    pub email: String,
    pub company_name: String,
    pub phone_number: String,
    pub contact_name: String,
    /// Soft-delete flag; deleted suppliers stay referenced by past orders.
    pub deleted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierDto {
    pub email: String,
    pub company_name: String,
    pub phone_number: String,
    pub contact_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSupplierDto {
    pub email: Option<String>,
    pub company_name: Option<String>,
    pub phone_number: Option<String>,
    pub contact_name: Option<String>,
}

/// Listing shape: a supplier with its active products attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierWithProducts {
    #[serde(flatten)]
    pub supplier: Supplier,
    pub products: Vec<Product>,
}

/// A supplier as it appears inside one order: only the products tied to
/// that order (with quantities) and the email text stored for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSupplierView {
    #[serde(flatten)]
    pub supplier: Supplier,
    pub email_sent: Option<String>,
    pub products: Vec<OrderedProduct>,
}
