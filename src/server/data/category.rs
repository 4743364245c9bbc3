use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::category::{CreateCategoryParams, UpdateCategoryParams};

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all categories ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<entity::category::Model>, DbErr> {
        entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::category::Model>, DbErr> {
        entity::prelude::Category::find_by_id(id).one(self.db).await
    }

    /// Checks whether another category already uses the (slug, title) pair.
    ///
    /// # Arguments
    /// - `slug` - Slug to check
    /// - `title` - Title to check
    /// - `exclude_id` - Category to ignore, used when updating that category
    ///
    /// # Returns
    /// - `Ok(true)` - A different category has the same slug and title
    /// - `Ok(false)` - The pair is free
    /// - `Err(DbErr)` - Database error
    pub async fn exists_by_slug_and_title(
        &self,
        slug: &str,
        title: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Category::find()
            .filter(entity::category::Column::Slug.eq(slug))
            .filter(entity::category::Column::Title.eq(title));

        if let Some(id) = exclude_id {
            query = query.filter(entity::category::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn create(
        &self,
        params: CreateCategoryParams,
    ) -> Result<entity::category::Model, DbErr> {
        entity::category::ActiveModel {
            slug: ActiveValue::Set(params.slug),
            title: ActiveValue::Set(params.title),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Replaces a category's slug and title.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated category
    /// - `Ok(None)` - Category does not exist
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        params: UpdateCategoryParams,
    ) -> Result<Option<entity::category::Model>, DbErr> {
        let Some(existing) = self.get_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut active: entity::category::ActiveModel = existing.into();
        active.slug = ActiveValue::Set(params.slug);
        active.title = ActiveValue::Set(params.title);

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes a category and, through the foreign key, its menu items.
    ///
    /// # Returns
    /// - `Ok(true)` - Category deleted
    /// - `Ok(false)` - Category did not exist
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Category::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
