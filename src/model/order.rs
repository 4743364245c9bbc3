use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::menu_item::MenuItemDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderItemDto {
    pub id: i32,
    pub menuitem: MenuItemDto,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub price: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderDto {
    pub id: i32,
    pub user_id: i32,
    /// Username of the assigned delivery crew member
    pub delivery_crew: Option<String>,
    pub delivery_crew_id: Option<i32>,
    /// `false` while pending, `true` once delivered
    pub status: bool,
    pub total: Decimal,
    /// Formatted as `DD/MM/YYYY - HH:MM:SS` in UTC
    pub date: String,
    pub order_items: Vec<OrderItemDto>,
}

/// Partial update of an order.
///
/// `delivery_crew` distinguishes an absent field (leave as is) from an explicit `null`
/// (unassign).
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateOrderDto {
    pub status: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<i32>)]
    pub delivery_crew: Option<Option<i32>>,
}

fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Raw query string of `GET /api/orders`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrderQueryDto {
    /// `true`, `false`, `1` or `0`
    pub status: Option<String>,
    /// UTC calendar day as `DD-MM-YYYY`
    pub date: Option<String>,
    /// One of `id`, `date`, `total`, `status`, optionally prefixed with `-`
    pub ordering: Option<String>,
    /// Items per page, clamped to 1..=5 (default 3)
    pub perpage: Option<String>,
    /// 1-based page number
    pub page: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedOrdersDto {
    pub results: Vec<OrderDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
