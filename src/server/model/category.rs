//! Menu category domain models and parameters.

use crate::model::category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    /// URL-friendly identifier, unique together with `title`.
    pub slug: String,
    pub title: String,
}

impl Category {
    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            slug: self.slug,
            title: self.title,
        }
    }

    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            slug: entity.slug,
            title: entity.title,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCategoryParams {
    pub slug: String,
    pub title: String,
}

impl CreateCategoryParams {
    pub fn from_dto(dto: CreateCategoryDto) -> Self {
        Self {
            slug: dto.slug.trim().to_string(),
            title: dto.title.trim().to_string(),
        }
    }
}

/// Full replacement of a category's fields.
#[derive(Debug, Clone)]
pub struct UpdateCategoryParams {
    pub id: i32,
    pub slug: String,
    pub title: String,
}

impl UpdateCategoryParams {
    pub fn from_dto(id: i32, dto: UpdateCategoryDto) -> Self {
        Self {
            id,
            slug: dto.slug.trim().to_string(),
            title: dto.title.trim().to_string(),
        }
    }
}
