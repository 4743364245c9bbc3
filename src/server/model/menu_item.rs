//! Menu item domain models, parameters and list filters.

use rust_decimal::Decimal;

use crate::{
    model::menu_item::{
        CreateMenuItemDto, MenuItemDto, MenuItemQueryDto, PaginatedMenuItemsDto,
        UpdateMenuItemDto,
    },
    server::{
        error::AppError,
        model::{
            category::Category,
            query::{PageRequest, Paginated, Sort, SortField},
        },
        util::{
            money,
            parse::{parse_bool, parse_decimal, parse_int, parse_optional},
        },
    },
};

/// Menu item together with the category it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: i32,
    pub title: String,
    pub price: Decimal,
    pub featured: bool,
    pub category: Category,
}

impl MenuItem {
    pub fn into_dto(self) -> MenuItemDto {
        MenuItemDto {
            id: self.id,
            title: self.title,
            price: self.price,
            featured: self.featured,
            category: self.category.into_dto(),
        }
    }

    /// Converts a menu item row and its category row at the repository boundary.
    ///
    /// The stored price is normalized to two decimal places.
    pub fn from_entity(
        entity: entity::menu_item::Model,
        category: entity::category::Model,
    ) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            price: money::normalize(entity.price),
            featured: entity.featured,
            category: Category::from_entity(category),
        }
    }
}

impl Paginated<MenuItem> {
    pub fn into_dto(self) -> PaginatedMenuItemsDto {
        PaginatedMenuItemsDto {
            results: self.items.into_iter().map(MenuItem::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateMenuItemParams {
    pub title: String,
    pub price: Decimal,
    pub featured: bool,
    pub category_id: i32,
}

impl CreateMenuItemParams {
    pub fn from_dto(dto: CreateMenuItemDto) -> Self {
        Self {
            title: dto.title.trim().to_string(),
            price: dto.price,
            featured: dto.featured,
            category_id: dto.category_id,
        }
    }
}

/// Full replacement of a menu item's fields.
#[derive(Debug, Clone)]
pub struct UpdateMenuItemParams {
    pub id: i32,
    pub title: String,
    pub price: Decimal,
    pub featured: bool,
    pub category_id: i32,
}

impl UpdateMenuItemParams {
    pub fn from_dto(id: i32, dto: UpdateMenuItemDto) -> Self {
        Self {
            id,
            title: dto.title.trim().to_string(),
            price: dto.price,
            featured: dto.featured,
            category_id: dto.category_id,
        }
    }
}

/// Columns `GET /api/menu-items` may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuItemSort {
    #[default]
    Id,
    Title,
    Price,
    Featured,
    /// Orders by category ID
    Category,
}

impl SortField for MenuItemSort {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "title" => Some(Self::Title),
            "price" => Some(Self::Price),
            "featured" => Some(Self::Featured),
            "category" => Some(Self::Category),
            _ => None,
        }
    }
}

/// Predicates applied to the menu item listing. Every field is optional and they combine
/// with AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuItemFilter {
    /// Case-insensitive substring of the title
    pub title: Option<String>,
    pub price: Option<Decimal>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub featured: Option<bool>,
    /// Case-insensitive substring of the category title
    pub category_title: Option<String>,
    pub category_id: Option<i32>,
}

/// Everything a menu item listing request asks for.
#[derive(Debug, Clone, Default)]
pub struct MenuItemQuery {
    pub filter: MenuItemFilter,
    pub sort: Sort<MenuItemSort>,
    pub page: PageRequest,
}

impl MenuItemQuery {
    /// Parses the raw query string of the listing endpoint.
    ///
    /// # Returns
    /// - `Ok(MenuItemQuery)` - All present parameters were valid
    /// - `Err(AppError::BadRequest)` - A numeric, boolean or ordering value was malformed
    pub fn from_dto(dto: MenuItemQueryDto) -> Result<Self, AppError> {
        let filter = MenuItemFilter {
            title: non_blank(dto.title),
            price: parse_optional("price", dto.price.as_deref(), parse_decimal)?,
            min_price: parse_optional("min_price", dto.min_price.as_deref(), parse_decimal)?,
            max_price: parse_optional("max_price", dto.max_price.as_deref(), parse_decimal)?,
            featured: parse_optional("featured", dto.featured.as_deref(), parse_bool)?,
            category_title: non_blank(dto.category_title),
            category_id: parse_optional(
                "category_id",
                dto.category_id.as_deref(),
                parse_int::<i32>,
            )?,
        };

        Ok(Self {
            filter,
            sort: Sort::from_query(dto.ordering.as_deref())?,
            page: PageRequest::from_query(dto.page.as_deref(), dto.perpage.as_deref())?,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
