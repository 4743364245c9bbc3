use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        menu_item::{
            CreateMenuItemDto, MenuItemDto, MenuItemQueryDto, PaginatedMenuItemsDto,
            UpdateMenuItemDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::menu_item::{CreateMenuItemParams, MenuItemQuery, UpdateMenuItemParams},
        service::menu_item::MenuItemService,
        state::AppState,
    },
};

/// Tag for grouping menu item endpoints in OpenAPI documentation
pub static MENU_ITEM_TAG: &str = "menu_item";

/// List menu items with filtering, ordering and pagination.
///
/// Filters combine with AND. `ordering` accepts `id`, `title`, `price`, `featured` or
/// `category`, optionally prefixed with `-` for descending order. `perpage` defaults to 3 and
/// is clamped to at most 5.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - One page of menu items
/// - `400 Bad Request` - Malformed filter, paging or ordering value
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/menu-items",
    tag = MENU_ITEM_TAG,
    params(MenuItemQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved menu items", body = PaginatedMenuItemsDto),
        (status = 400, description = "Invalid query parameter", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_menu_items(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<MenuItemQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let query = MenuItemQuery::from_dto(params)?;
    let items = MenuItemService::new(&state.db).get_paginated(query).await?;

    Ok((StatusCode::OK, Json(items.into_dto())))
}

/// Create a menu item.
///
/// # Access Control
/// - `Manager` - Only managers can create menu items
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - User's session for authentication
/// - `payload` - Title, price, featured flag and category ID
///
/// # Returns
/// - `201 Created` - Successfully created menu item
/// - `400 Bad Request` - Blank title or a price that is not positive
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - User is not a manager
/// - `404 Not Found` - Category does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/menu-items",
    tag = MENU_ITEM_TAG,
    request_body = CreateMenuItemDto,
    responses(
        (status = 201, description = "Successfully created menu item", body = MenuItemDto),
        (status = 400, description = "Invalid menu item data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_menu_item(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateMenuItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .denial_message("Only managers can create menu items")
        .require(&[Permission::Manager])
        .await?;

    let item = MenuItemService::new(&state.db)
        .create(CreateMenuItemParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}

/// Get a single menu item with its category.
#[utoipa::path(
    get,
    path = "/api/menu-items/{id}",
    tag = MENU_ITEM_TAG,
    params(
        ("id" = i32, Path, description = "Menu item ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved menu item", body = MenuItemDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Menu item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_menu_item(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let item = MenuItemService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Replace every field of a menu item.
///
/// # Access Control
/// - `Manager` - Only managers can update menu items
#[utoipa::path(
    put,
    path = "/api/menu-items/{id}",
    tag = MENU_ITEM_TAG,
    params(
        ("id" = i32, Path, description = "Menu item ID")
    ),
    request_body = UpdateMenuItemDto,
    responses(
        (status = 200, description = "Successfully updated menu item", body = MenuItemDto),
        (status = 400, description = "Invalid menu item data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 404, description = "Menu item or category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_menu_item(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMenuItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .denial_message("Only managers can update menu items")
        .require(&[Permission::Manager])
        .await?;

    let item = MenuItemService::new(&state.db)
        .update(UpdateMenuItemParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Delete a menu item.
///
/// Cart rows and order items referencing the menu item are deleted with it.
///
/// # Access Control
/// - `Manager` - Only managers can delete menu items
#[utoipa::path(
    delete,
    path = "/api/menu-items/{id}",
    tag = MENU_ITEM_TAG,
    params(
        ("id" = i32, Path, description = "Menu item ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted menu item"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 404, description = "Menu item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_menu_item(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .denial_message("Only managers can delete menu items")
        .require(&[Permission::Manager])
        .await?;

    MenuItemService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
