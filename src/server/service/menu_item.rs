use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{category::CategoryRepository, menu_item::MenuItemRepository},
    error::AppError,
    model::{
        menu_item::{CreateMenuItemParams, MenuItem, MenuItemQuery, UpdateMenuItemParams},
        query::Paginated,
    },
    util::money,
};

pub struct MenuItemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenuItemService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of menu items matching the query's filters.
    pub async fn get_paginated(
        &self,
        query: MenuItemQuery,
    ) -> Result<Paginated<MenuItem>, AppError> {
        let (items, total) = MenuItemRepository::new(self.db)
            .get_paginated(&query.filter, query.sort, query.page)
            .await?;

        let items = items
            .into_iter()
            .map(|(item, category)| MenuItem::from_entity(item, category))
            .collect();

        Ok(Paginated::new(items, total, query.page))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<MenuItem, AppError> {
        MenuItemRepository::new(self.db)
            .get_by_id(id)
            .await?
            .map(|(item, category)| MenuItem::from_entity(item, category))
            .ok_or_else(|| AppError::NotFound("Menu item not found".to_string()))
    }

    /// Creates a menu item in an existing category.
    ///
    /// # Returns
    /// - `Ok(MenuItem)` - Created item with its category
    /// - `Err(AppError::BadRequest)` - Blank title or a price that is not positive
    /// - `Err(AppError::NotFound)` - Category does not exist
    pub async fn create(&self, params: CreateMenuItemParams) -> Result<MenuItem, AppError> {
        validate(&params.title, params.price)?;
        self.ensure_category(params.category_id).await?;

        let (item, category) = MenuItemRepository::new(self.db).create(params).await?;

        Ok(MenuItem::from_entity(item, category))
    }

    /// Replaces every field of a menu item.
    ///
    /// # Returns
    /// - `Ok(MenuItem)` - Updated item
    /// - `Err(AppError::BadRequest)` - Blank title or a price that is not positive
    /// - `Err(AppError::NotFound)` - Menu item or category does not exist
    pub async fn update(&self, params: UpdateMenuItemParams) -> Result<MenuItem, AppError> {
        validate(&params.title, params.price)?;
        self.ensure_category(params.category_id).await?;

        MenuItemRepository::new(self.db)
            .update(params)
            .await?
            .map(|(item, category)| MenuItem::from_entity(item, category))
            .ok_or_else(|| AppError::NotFound("Menu item not found".to_string()))
    }

    /// Deletes a menu item along with cart rows and order items referencing it.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !MenuItemRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Menu item not found".to_string()));
        }

        Ok(())
    }

    async fn ensure_category(&self, category_id: i32) -> Result<(), AppError> {
        if CategoryRepository::new(self.db)
            .get_by_id(category_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Category not found".to_string()));
        }

        Ok(())
    }
}

fn validate(title: &str, price: Decimal) -> Result<(), AppError> {
    if title.is_empty() {
        return Err(AppError::BadRequest("Title must not be blank".to_string()));
    }
    if price <= Decimal::ZERO {
        return Err(AppError::BadRequest(
            "Price must be greater than zero".to_string(),
        ));
    }
    if !money::is_whole_cents(price) {
        return Err(AppError::BadRequest(
            "Price must have at most 2 decimal places".to_string(),
        ));
    }

    Ok(())
}
