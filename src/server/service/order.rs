//! Order placement and the order state machine.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{cart::CartRepository, order::OrderRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        order::{Order, OrderQuery, OrderScope, OrderUpdate, UpdateOrderParams},
        query::Paginated,
        user::{Role, User},
    },
    util::money,
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Converts the caller's cart into an order.
    ///
    /// Reading the cart, inserting the order and its items, and clearing the cart happen in
    /// one transaction. On any failure the transaction is rolled back and the cart is left as
    /// it was.
    ///
    /// # Arguments
    /// - `user` - Customer placing the order
    ///
    /// # Returns
    /// - `Ok(Order)` - Placed order with one item per former cart line
    /// - `Err(AuthError::AccessDenied)` - Caller is delivery crew
    /// - `Err(AppError::BadRequest)` - Cart is empty
    /// - `Err(AppError::DbErr)` - Database error; nothing was changed
    pub async fn place(&self, user: &User) -> Result<Order, AppError> {
        if user.has_role(Role::DeliveryCrew) && !user.has_role(Role::Manager) {
            return Err(AuthError::AccessDenied(
                user.id,
                "Delivery crew cannot place orders".to_string(),
            )
            .into());
        }

        let txn = self.db.begin().await?;

        let cart_repo = CartRepository::new(&txn);
        let order_repo = OrderRepository::new(&txn);

        let cart = cart_repo.get_by_user(user.id).await?;
        if cart.is_empty() {
            return Err(AppError::BadRequest("Cart is empty".to_string()));
        }

        let total = money::normalize(cart.iter().map(|row| row.price).sum::<Decimal>());
        let order = order_repo.create(user.id, total, Utc::now()).await?;

        for row in &cart {
            order_repo.create_item(order.id, row).await?;
        }

        cart_repo.delete_by_user(user.id).await?;

        let order = load_one(&order_repo, order).await?;

        txn.commit().await?;

        tracing::info!(
            "User {} placed order {} with {} items",
            user.id,
            order.id,
            order.items.len()
        );

        Ok(order)
    }

    /// Gets one page of the orders visible to `user`.
    pub async fn get_paginated(
        &self,
        user: &User,
        query: OrderQuery,
    ) -> Result<Paginated<Order>, AppError> {
        let order_repo = OrderRepository::new(self.db);

        let (orders, total) = order_repo
            .get_paginated(OrderScope::for_user(user), &query.filter, query.sort, query.page)
            .await?;

        let orders = order_repo
            .with_relations(orders)
            .await?
            .into_iter()
            .map(Order::from_with_relations)
            .collect();

        Ok(Paginated::new(orders, total, query.page))
    }

    /// Gets a single order if `user` may see it.
    ///
    /// # Returns
    /// - `Ok(Order)` - Order with its items
    /// - `Err(AppError::NotFound)` - Order does not exist
    /// - `Err(AuthError::AccessDenied)` - Order is outside the caller's scope
    pub async fn get_by_id(&self, user: &User, id: i32) -> Result<Order, AppError> {
        let order_repo = OrderRepository::new(self.db);
        let order = self.find_in_scope(&order_repo, user, id).await?;

        Ok(load_one(&order_repo, order).await?)
    }

    /// Applies a status change or a delivery crew assignment.
    ///
    /// Managers may only change the assignment; delivery crew may only move the status of
    /// their orders from pending to delivered; customers may change neither.
    ///
    /// # Returns
    /// - `Ok(OrderUpdate::Updated)` - Order after the change
    /// - `Ok(OrderUpdate::AlreadyDelivered)` - Delivery requested for a delivered order
    /// - `Err(AuthError::AccessDenied)` - Caller may not see the order or make this change
    /// - `Err(AppError::BadRequest)` - Nothing to change, an invalid status transition, or
    ///   an assignee outside the delivery crew
    /// - `Err(AppError::NotFound)` - Order or assignee does not exist
    pub async fn update(
        &self,
        user: &User,
        id: i32,
        params: UpdateOrderParams,
    ) -> Result<OrderUpdate, AppError> {
        let order_repo = OrderRepository::new(self.db);
        let order = self.find_in_scope(&order_repo, user, id).await?;

        if params.status.is_none() && params.delivery_crew.is_none() {
            return Err(AppError::BadRequest(
                "Provide status or delivery_crew to update".to_string(),
            ));
        }

        let is_manager = user.has_role(Role::Manager);

        if params.delivery_crew.is_some() && !is_manager {
            return Err(AuthError::AccessDenied(
                user.id,
                "Only managers can assign delivery crew".to_string(),
            )
            .into());
        }

        if let Some(status) = params.status {
            if is_manager || !user.has_role(Role::DeliveryCrew) {
                return Err(AuthError::AccessDenied(
                    user.id,
                    "Only delivery crew can update order status".to_string(),
                )
                .into());
            }

            if order.status {
                if status {
                    return Ok(OrderUpdate::AlreadyDelivered);
                }

                return Err(AppError::BadRequest(
                    "Order status can only move from pending to delivered".to_string(),
                ));
            }
        }

        if let Some(Some(crew_id)) = params.delivery_crew {
            let Some(crew) = UserRepository::new(self.db).find_by_id(crew_id).await? else {
                return Err(AppError::NotFound("User not found".to_string()));
            };

            if !crew.has_role(Role::DeliveryCrew) {
                return Err(AppError::BadRequest(
                    "User is not a member of the delivery crew".to_string(),
                ));
            }
        }

        let order = order_repo
            .update(order, params.status, params.delivery_crew)
            .await?;

        tracing::info!("User {} updated order {}", user.id, order.id);

        Ok(OrderUpdate::Updated(load_one(&order_repo, order).await?))
    }

    /// Deletes an order and its items.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !OrderRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Order not found".to_string()));
        }

        Ok(())
    }

    async fn find_in_scope(
        &self,
        order_repo: &OrderRepository<'_, DatabaseConnection>,
        user: &User,
        id: i32,
    ) -> Result<entity::order::Model, AppError> {
        let Some(order) = order_repo.find_by_id(id).await? else {
            return Err(AppError::NotFound("Order not found".to_string()));
        };

        if !OrderScope::for_user(user).includes(&order) {
            return Err(AuthError::AccessDenied(
                user.id,
                "You do not have access to this order".to_string(),
            )
            .into());
        }

        Ok(order)
    }
}

async fn load_one<C: sea_orm::ConnectionTrait>(
    order_repo: &OrderRepository<'_, C>,
    order: entity::order::Model,
) -> Result<Order, DbErr> {
    let id = order.id;

    order_repo
        .with_relations(vec![order])
        .await?
        .pop()
        .map(Order::from_with_relations)
        .ok_or(DbErr::RecordNotFound(format!("Order {} not found", id)))
}
