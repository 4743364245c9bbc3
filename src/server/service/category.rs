use sea_orm::DatabaseConnection;

use crate::server::{
    data::category::CategoryRepository,
    error::AppError,
    model::category::{Category, CreateCategoryParams, UpdateCategoryParams},
};

const DUPLICATE_CATEGORY_MESSAGE: &str = "Category with this slug and title already exists";

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        let categories = CategoryRepository::new(self.db).get_all().await?;

        Ok(categories.into_iter().map(Category::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Category, AppError> {
        CategoryRepository::new(self.db)
            .get_by_id(id)
            .await?
            .map(Category::from_entity)
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))
    }

    /// Creates a category.
    ///
    /// # Returns
    /// - `Ok(Category)` - Created category
    /// - `Err(AppError::BadRequest)` - Blank slug or title, or the pair is already used
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, AppError> {
        validate(&params.slug, &params.title)?;

        let repo = CategoryRepository::new(self.db);

        if repo
            .exists_by_slug_and_title(&params.slug, &params.title, None)
            .await?
        {
            return Err(AppError::BadRequest(DUPLICATE_CATEGORY_MESSAGE.to_string()));
        }

        let category = repo
            .create(params)
            .await
            .map_err(AppError::on_unique_violation(DUPLICATE_CATEGORY_MESSAGE))?;

        Ok(Category::from_entity(category))
    }

    /// Replaces a category's slug and title.
    ///
    /// # Returns
    /// - `Ok(Category)` - Updated category
    /// - `Err(AppError::NotFound)` - Category does not exist
    /// - `Err(AppError::BadRequest)` - Blank fields or another category has the same pair
    pub async fn update(&self, params: UpdateCategoryParams) -> Result<Category, AppError> {
        validate(&params.slug, &params.title)?;

        let repo = CategoryRepository::new(self.db);

        if repo
            .exists_by_slug_and_title(&params.slug, &params.title, Some(params.id))
            .await?
        {
            return Err(AppError::BadRequest(DUPLICATE_CATEGORY_MESSAGE.to_string()));
        }

        repo.update(params)
            .await
            .map_err(AppError::on_unique_violation(DUPLICATE_CATEGORY_MESSAGE))?
            .map(Category::from_entity)
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))
    }

    /// Deletes a category together with its menu items.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CategoryRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Category not found".to_string()));
        }

        Ok(())
    }
}

fn validate(slug: &str, title: &str) -> Result<(), AppError> {
    if slug.is_empty() || title.is_empty() {
        return Err(AppError::BadRequest(
            "Slug and title must not be blank".to_string(),
        ));
    }

    Ok(())
}
