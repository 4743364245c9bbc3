use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::category::CategoryDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuItemDto {
    pub id: i32,
    pub title: String,
    pub price: Decimal,
    pub featured: bool,
    pub category: CategoryDto,
}

/// Payload for creating a menu item. The category is referenced by id only.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateMenuItemDto {
    pub title: String,
    pub price: Decimal,
    #[serde(default)]
    pub featured: bool,
    pub category_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateMenuItemDto {
    pub title: String,
    pub price: Decimal,
    #[serde(default)]
    pub featured: bool,
    pub category_id: i32,
}

/// Raw query string of `GET /api/menu-items`.
///
/// Values are kept as strings so malformed input can be reported with a `{"message"}` body
/// rather than axum's plain-text query rejection.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MenuItemQueryDto {
    /// Case-insensitive substring of the title
    pub title: Option<String>,
    /// Exact price
    pub price: Option<String>,
    /// Lowest price to include
    pub min_price: Option<String>,
    /// Highest price to include
    pub max_price: Option<String>,
    /// `true`, `false`, `1` or `0`
    pub featured: Option<String>,
    /// Case-insensitive substring of the category title
    pub category_title: Option<String>,
    pub category_id: Option<String>,
    /// One of `id`, `title`, `price`, `featured`, `category`, optionally prefixed with `-`
    pub ordering: Option<String>,
    /// Items per page, clamped to 1..=5 (default 3)
    pub perpage: Option<String>,
    /// 1-based page number
    pub page: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedMenuItemsDto {
    pub results: Vec<MenuItemDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
