//! Menu item repository.
//!
//! Menu items are always read together with their category. The repository is generic over
//! the connection so order placement can resolve menu items inside its transaction.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    menu_item::{CreateMenuItemParams, MenuItemFilter, MenuItemSort, UpdateMenuItemParams},
    query::{PageRequest, Sort},
};

/// A menu item row paired with its category row.
pub type MenuItemWithCategory = (entity::menu_item::Model, entity::category::Model);

pub struct MenuItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MenuItemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets one page of menu items matching `filter`.
    ///
    /// Results are ordered by the requested column, then by ID so pages are stable.
    ///
    /// # Arguments
    /// - `filter` - Predicates on the item and its category
    /// - `sort` - Allow-listed ordering column and direction
    /// - `page` - Page number and size
    ///
    /// # Returns
    /// - `Ok((items, total))` - Items on the requested page and the total number of matches
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        filter: &MenuItemFilter,
        sort: Sort<MenuItemSort>,
        page: PageRequest,
    ) -> Result<(Vec<MenuItemWithCategory>, u64), DbErr> {
        let column = match sort.field {
            MenuItemSort::Id => entity::menu_item::Column::Id,
            MenuItemSort::Title => entity::menu_item::Column::Title,
            MenuItemSort::Price => entity::menu_item::Column::Price,
            MenuItemSort::Featured => entity::menu_item::Column::Featured,
            MenuItemSort::Category => entity::menu_item::Column::CategoryId,
        };

        let paginator = entity::prelude::MenuItem::find()
            .find_also_related(entity::prelude::Category)
            .filter(filter_condition(filter))
            .order_by(column, sort.order())
            .order_by_asc(entity::menu_item::Column::Id)
            .paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page.index()).await?;

        let items = rows
            .into_iter()
            .map(|(item, category)| with_category(item, category))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((items, total))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<MenuItemWithCategory>, DbErr> {
        entity::prelude::MenuItem::find_by_id(id)
            .find_also_related(entity::prelude::Category)
            .one(self.db)
            .await?
            .map(|(item, category)| with_category(item, category))
            .transpose()
    }

    /// Resolves several menu items at once, keyed by menu item ID.
    ///
    /// IDs that do not exist are absent from the map.
    pub async fn get_by_ids(
        &self,
        ids: Vec<i32>,
    ) -> Result<HashMap<i32, MenuItemWithCategory>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        entity::prelude::MenuItem::find()
            .filter(entity::menu_item::Column::Id.is_in(ids))
            .find_also_related(entity::prelude::Category)
            .all(self.db)
            .await?
            .into_iter()
            .map(|(item, category)| with_category(item, category).map(|pair| (pair.0.id, pair)))
            .collect()
    }

    /// Inserts a menu item. The category must exist.
    ///
    /// # Returns
    /// - `Ok(MenuItemWithCategory)` - Created item with its category
    /// - `Err(DbErr)` - Database error, including a foreign key violation
    pub async fn create(
        &self,
        params: CreateMenuItemParams,
    ) -> Result<MenuItemWithCategory, DbErr> {
        let item = entity::menu_item::ActiveModel {
            title: ActiveValue::Set(params.title),
            price: ActiveValue::Set(params.price),
            featured: ActiveValue::Set(params.featured),
            category_id: ActiveValue::Set(params.category_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.get_by_id(item.id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Menu item with id {} not found after creation",
            item.id
        )))
    }

    /// Replaces every field of a menu item.
    ///
    /// # Returns
    /// - `Ok(Some(MenuItemWithCategory))` - Updated item
    /// - `Ok(None)` - Menu item does not exist
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        params: UpdateMenuItemParams,
    ) -> Result<Option<MenuItemWithCategory>, DbErr> {
        let Some(existing) = entity::prelude::MenuItem::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::menu_item::ActiveModel = existing.into();
        active.title = ActiveValue::Set(params.title);
        active.price = ActiveValue::Set(params.price);
        active.featured = ActiveValue::Set(params.featured);
        active.category_id = ActiveValue::Set(params.category_id);
        active.update(self.db).await?;

        self.get_by_id(params.id).await
    }

    /// Deletes a menu item along with the cart rows and order items referencing it.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::MenuItem::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

fn filter_condition(filter: &MenuItemFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(title) = &filter.title {
        condition = condition.add(entity::menu_item::Column::Title.contains(title));
    }
    if let Some(price) = filter.price {
        condition = condition.add(entity::menu_item::Column::Price.eq(price));
    }
    if let Some(min_price) = filter.min_price {
        condition = condition.add(entity::menu_item::Column::Price.gte(min_price));
    }
    if let Some(max_price) = filter.max_price {
        condition = condition.add(entity::menu_item::Column::Price.lte(max_price));
    }
    if let Some(featured) = filter.featured {
        condition = condition.add(entity::menu_item::Column::Featured.eq(featured));
    }
    if let Some(category_title) = &filter.category_title {
        condition = condition.add(entity::category::Column::Title.contains(category_title));
    }
    if let Some(category_id) = filter.category_id {
        condition = condition.add(entity::menu_item::Column::CategoryId.eq(category_id));
    }

    condition
}

fn with_category(
    item: entity::menu_item::Model,
    category: Option<entity::category::Model>,
) -> Result<MenuItemWithCategory, DbErr> {
    match category {
        Some(category) => Ok((item, category)),
        None => Err(DbErr::RecordNotFound(format!(
            "Category {} of menu item {} not found",
            item.category_id, item.id
        ))),
    }
}
