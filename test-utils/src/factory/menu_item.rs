//! Menu item factory.

use crate::factory::{category::create_category, helpers::next_id};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test menu items.
///
/// When no category is set, a fresh category is created during `build()`.
///
/// # Example
///
/// ```rust,ignore
/// let item = MenuItemFactory::new(&db)
///     .title("Lemon Dessert")
///     .price(Decimal::new(550, 2))
///     .category_id(desserts.id)
///     .build()
///     .await?;
/// ```
pub struct MenuItemFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    price: Decimal,
    featured: bool,
    category_id: Option<i32>,
}

impl<'a> MenuItemFactory<'a> {
    /// Creates a new MenuItemFactory.
    ///
    /// Defaults:
    /// - title: `"Menu Item {id}"`
    /// - price: `10.00`
    /// - featured: `false`
    /// - category: created on build
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            title: format!("Menu Item {}", next_id()),
            price: Decimal::new(1000, 2),
            featured: false,
            category_id: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn category_id(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Builds and inserts the menu item, creating its category if needed.
    ///
    /// # Returns
    /// - `Ok(entity::menu_item::Model)` - Created menu item
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::menu_item::Model, DbErr> {
        let category_id = match self.category_id {
            Some(id) => id,
            None => create_category(self.db).await?.id,
        };

        entity::menu_item::ActiveModel {
            title: ActiveValue::Set(self.title),
            price: ActiveValue::Set(self.price),
            featured: ActiveValue::Set(self.featured),
            category_id: ActiveValue::Set(category_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a menu item priced at 10.00 in a new category.
pub async fn create_menu_item(db: &DatabaseConnection) -> Result<entity::menu_item::Model, DbErr> {
    MenuItemFactory::new(db).build().await
}
