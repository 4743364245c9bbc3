use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        cart::{AddCartItemDto, CartItemDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::cart::{AddCartItemParams, CartItem},
        service::cart::CartService,
        state::AppState,
    },
};

/// Tag for grouping cart endpoints in OpenAPI documentation
pub static CART_TAG: &str = "cart";

/// Get the caller's cart.
///
/// # Access Control
/// - Any authenticated user; only their own cart is visible
///
/// # Returns
/// - `200 OK` - Cart lines in the order they were added
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cart/menu-items",
    tag = CART_TAG,
    responses(
        (status = 200, description = "Successfully retrieved cart", body = Vec<CartItemDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cart(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let items = CartService::new(&state.db).get_for_user(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(items.into_iter().map(CartItem::into_dto).collect::<Vec<_>>()),
    ))
}

/// Add a menu item to the caller's cart.
///
/// The unit price is taken from the menu item at the time of the request.
///
/// # Returns
/// - `201 Created` - The new cart line
/// - `400 Bad Request` - Quantity below one or the item is already in the cart
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - Menu item does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/cart/menu-items",
    tag = CART_TAG,
    request_body = AddCartItemDto,
    responses(
        (status = 201, description = "Successfully added to cart", body = CartItemDto),
        (status = 400, description = "Invalid quantity or duplicate item", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Menu item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AddCartItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let item = CartService::new(&state.db)
        .add(AddCartItemParams::from_dto(user.id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}

/// Empty the caller's cart.
#[utoipa::path(
    delete,
    path = "/api/cart/menu-items",
    tag = CART_TAG,
    responses(
        (status = 200, description = "Successfully cleared cart", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn clear_cart(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    CartService::new(&state.db).clear(user.id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Cart cleared"))))
}
