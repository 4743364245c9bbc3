use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::menu_item::MenuItemDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CartItemDto {
    pub id: i32,
    pub menuitem: MenuItemDto,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub price: Decimal,
}

/// Payload for adding a menu item to the caller's cart. Prices are computed server-side.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddCartItemDto {
    pub menuitem_id: i32,
    pub quantity: i32,
}
