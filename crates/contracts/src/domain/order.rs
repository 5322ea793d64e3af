use serde::{Deserialize, Serialize};

use super::product::OrderedProduct;
use super::supplier::OrderSupplierView;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    /// Client-formatted order date, stored verbatim.
    pub date: String,
    pub confirmed: bool,
    pub favourite: bool,
    pub favourite_label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderDto {
    pub date: Option<String>,
    pub confirmed: Option<bool>,
    pub favourite: Option<bool>,
    pub favourite_label: Option<String>,
}

/// `GET /orders/:id` response: the order with both association lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    pub products: Vec<OrderedProduct>,
    pub suppliers: Vec<OrderSupplierView>,
}

/// Body of `POST /orders/:id/add/:productId`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOrderProduct {
    pub qty: i32,
}

/// Body of `POST /orders/:id/addsup/:supplierId`. When `email` is absent
/// the server composes one from the order's current lines.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOrderSupplier {
    pub email: Option<String>,
}
