use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{cart::CartRepository, menu_item::MenuItemRepository},
    error::AppError,
    model::{
        cart::{AddCartItemParams, CartItem, CreateCartItemParams},
        menu_item::MenuItem,
    },
    util::money,
};

const DUPLICATE_CART_ITEM_MESSAGE: &str = "Menu item is already in the cart";

pub struct CartService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CartService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the caller's cart with each line's menu item.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<CartItem>, AppError> {
        let rows = CartRepository::new(self.db).get_by_user(user_id).await?;

        let menuitem_ids = rows.iter().map(|row| row.menuitem_id).collect();
        let mut menu_items = MenuItemRepository::new(self.db)
            .get_by_ids(menuitem_ids)
            .await?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            let Some((item, category)) = menu_items.remove(&row.menuitem_id) else {
                return Err(DbErr::RecordNotFound(format!(
                    "Menu item {} of cart row {} not found",
                    row.menuitem_id, row.id
                ))
                .into());
            };

            items.push(CartItem::from_entity(row, MenuItem::from_entity(item, category)));
        }

        Ok(items)
    }

    /// Adds a menu item to the caller's cart.
    ///
    /// The unit price is copied from the menu item and the line price is computed from it, so
    /// later menu price changes do not affect the cart.
    ///
    /// # Arguments
    /// - `params` - Owner, menu item ID and quantity
    ///
    /// # Returns
    /// - `Ok(CartItem)` - Created cart line
    /// - `Err(AppError::BadRequest)` - Quantity below one or the item is already in the cart
    /// - `Err(AppError::NotFound)` - Menu item does not exist
    pub async fn add(&self, params: AddCartItemParams) -> Result<CartItem, AppError> {
        if params.quantity < 1 {
            return Err(AppError::BadRequest(
                "Quantity must be at least 1".to_string(),
            ));
        }

        let Some((item, category)) = MenuItemRepository::new(self.db)
            .get_by_id(params.menuitem_id)
            .await?
        else {
            return Err(AppError::NotFound("Menu item not found".to_string()));
        };

        let cart_repo = CartRepository::new(self.db);

        if cart_repo.exists(params.user_id, item.id).await? {
            return Err(AppError::BadRequest(DUPLICATE_CART_ITEM_MESSAGE.to_string()));
        }

        let unit_price = money::normalize(item.price);
        let price = money::normalize(unit_price * Decimal::from(params.quantity));

        let row = cart_repo
            .create(CreateCartItemParams {
                user_id: params.user_id,
                menuitem_id: item.id,
                quantity: params.quantity,
                unit_price,
                price,
            })
            .await
            .map_err(AppError::on_unique_violation(DUPLICATE_CART_ITEM_MESSAGE))?;

        Ok(CartItem::from_entity(row, MenuItem::from_entity(item, category)))
    }

    /// Removes every line from the caller's cart.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of lines removed, zero for an empty cart
    pub async fn clear(&self, user_id: i32) -> Result<u64, AppError> {
        Ok(CartRepository::new(self.db).delete_by_user(user_id).await?)
    }
}
