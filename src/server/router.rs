use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        cart::{self, CART_TAG},
        category::{self, CATEGORY_TAG},
        group::{self, GROUP_TAG},
        menu_item::{self, MENU_ITEM_TAG},
        order::{self, ORDER_TAG},
        user::{self, USER_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Little Lemon API", description = "Restaurant menu, cart and order API"),
    tags(
        (name = AUTH_TAG, description = "Session login and logout"),
        (name = USER_TAG, description = "Account registration and the current user"),
        (name = CATEGORY_TAG, description = "Menu categories"),
        (name = MENU_ITEM_TAG, description = "Menu items"),
        (name = CART_TAG, description = "The caller's cart"),
        (name = ORDER_TAG, description = "Order placement and delivery"),
        (name = GROUP_TAG, description = "Manager and delivery crew membership")
    )
)]
struct ApiDoc;

/// Builds the API router and serves its OpenAPI document at `/api/openapi.json`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(user::register))
        .routes(routes!(user::get_current_user))
        .routes(routes!(category::get_categories, category::create_category))
        .routes(routes!(
            category::get_category,
            category::update_category,
            category::delete_category
        ))
        .routes(routes!(menu_item::get_menu_items, menu_item::create_menu_item))
        .routes(routes!(
            menu_item::get_menu_item,
            menu_item::update_menu_item,
            menu_item::delete_menu_item
        ))
        .routes(routes!(cart::get_cart, cart::add_to_cart, cart::clear_cart))
        .routes(routes!(order::get_orders, order::create_order))
        .routes(routes!(
            order::get_order,
            order::update_order,
            order::delete_order
        ))
        .routes(routes!(group::get_managers, group::add_manager))
        .routes(routes!(group::remove_manager))
        .routes(routes!(group::get_delivery_crew, group::add_delivery_crew))
        .routes(routes!(group::remove_delivery_crew))
        .split_for_parts();

    router.route(
        "/api/openapi.json",
        get(move || {
            let api = api.clone();
            async move { Json(api) }
        }),
    )
}
