//! Cart domain models and parameters.

use rust_decimal::Decimal;

use crate::{
    model::cart::{AddCartItemDto, CartItemDto},
    server::{model::menu_item::MenuItem, util::money},
};

/// A pending line in a user's cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: i32,
    pub user_id: i32,
    pub menuitem: MenuItem,
    pub quantity: i32,
    /// Menu item price at the time the line was added
    pub unit_price: Decimal,
    /// `unit_price * quantity`
    pub price: Decimal,
}

impl CartItem {
    pub fn into_dto(self) -> CartItemDto {
        CartItemDto {
            id: self.id,
            menuitem: self.menuitem.into_dto(),
            quantity: self.quantity,
            unit_price: self.unit_price,
            price: self.price,
        }
    }

    pub fn from_entity(entity: entity::cart::Model, menuitem: MenuItem) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            menuitem,
            quantity: entity.quantity,
            unit_price: money::normalize(entity.unit_price),
            price: money::normalize(entity.price),
        }
    }
}

/// Request to add a menu item to a user's cart.
#[derive(Debug, Clone)]
pub struct AddCartItemParams {
    pub user_id: i32,
    pub menuitem_id: i32,
    pub quantity: i32,
}

impl AddCartItemParams {
    pub fn from_dto(user_id: i32, dto: AddCartItemDto) -> Self {
        Self {
            user_id,
            menuitem_id: dto.menuitem_id,
            quantity: dto.quantity,
        }
    }
}

/// Priced cart line ready to be inserted.
#[derive(Debug, Clone)]
pub struct CreateCartItemParams {
    pub user_id: i32,
    pub menuitem_id: i32,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub price: Decimal,
}
