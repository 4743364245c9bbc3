use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        order::{OrderDto, OrderQueryDto, PaginatedOrdersDto, UpdateOrderDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::order::{OrderQuery, OrderUpdate, UpdateOrderParams},
        service::order::OrderService,
        state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// List the orders visible to the caller.
///
/// Managers see every order, delivery crew see the orders assigned to them and customers
/// see the orders they placed. `ordering` accepts `id`, `date`, `total` or `status`,
/// optionally prefixed with `-`.
///
/// # Returns
/// - `200 OK` - One page of orders with their items
/// - `400 Bad Request` - Malformed `status`, `date`, paging or ordering value
/// - `401 Unauthorized` - User not authenticated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = ORDER_TAG,
    params(OrderQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved orders", body = PaginatedOrdersDto),
        (status = 400, description = "Invalid query parameter", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_orders(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<OrderQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let query = OrderQuery::from_dto(params)?;
    let orders = OrderService::new(&state.db)
        .get_paginated(&user, query)
        .await?;

    Ok((StatusCode::OK, Json(orders.into_dto())))
}

/// Place an order from the caller's cart.
///
/// Every cart line becomes an order item and the cart is emptied. Nothing changes if any
/// step fails.
///
/// # Returns
/// - `201 Created` - The placed order
/// - `400 Bad Request` - Cart is empty
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Caller is delivery crew
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = ORDER_TAG,
    responses(
        (status = 201, description = "Successfully placed order", body = OrderDto),
        (status = 400, description = "Cart is empty", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Delivery crew cannot place orders", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let order = OrderService::new(&state.db).place(&user).await?;

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}

/// Get a single order.
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved order", body = OrderDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Order is not visible to the user", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let order = OrderService::new(&state.db).get_by_id(&user, id).await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Mark an order delivered or change its delivery crew.
///
/// # Access Control
/// - `DeliveryCrew` - The assigned crew member may set `status` to `true`
/// - `Manager` - May set `delivery_crew` to a crew member's ID or `null`
///
/// A user in both groups acts as a manager here and so cannot change `status`.
///
/// # Returns
/// - `200 OK` - The updated order, or a message if it was already delivered
/// - `400 Bad Request` - Empty update, invalid status transition, or an assignee outside
///   the delivery crew
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Caller may not see the order or make this change
/// - `404 Not Found` - Order or assignee does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    request_body = UpdateOrderDto,
    responses(
        (status = 200, description = "Successfully updated order", body = OrderDto),
        (status = 400, description = "Invalid update", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Update not permitted", body = ErrorDto),
        (status = 404, description = "Order or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_order(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOrderDto>,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let result = OrderService::new(&state.db)
        .update(&user, id, UpdateOrderParams::from_dto(payload))
        .await?;

    Ok(match result {
        OrderUpdate::Updated(order) => (StatusCode::OK, Json(order.into_dto())).into_response(),
        OrderUpdate::AlreadyDelivered => (
            StatusCode::OK,
            Json(MessageDto::new("Order already delivered")),
        )
            .into_response(),
    })
}

/// Delete an order and its items.
///
/// # Access Control
/// - `Manager` - Only managers can delete orders
#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted order"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a manager", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_order(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .denial_message("Only managers can delete orders")
        .require(&[Permission::Manager])
        .await?;

    OrderService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
