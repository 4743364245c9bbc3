//! Cart factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Adds a menu item to a user's cart.
///
/// The unit price is copied from the menu item and the line price is computed from the
/// quantity, matching what the application stores on "add to cart".
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Owner of the cart row
/// - `menu_item` - Menu item being added
/// - `quantity` - Number of units
///
/// # Returns
/// - `Ok(entity::cart::Model)` - Created cart row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_cart_item(
    db: &DatabaseConnection,
    user_id: i32,
    menu_item: &entity::menu_item::Model,
    quantity: i32,
) -> Result<entity::cart::Model, DbErr> {
    entity::cart::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        menuitem_id: ActiveValue::Set(menu_item.id),
        quantity: ActiveValue::Set(quantity),
        unit_price: ActiveValue::Set(menu_item.price),
        price: ActiveValue::Set(menu_item.price * rust_decimal::Decimal::from(quantity)),
        ..Default::default()
    }
    .insert(db)
    .await
}
