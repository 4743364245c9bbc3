//! Order factory for creating placed orders without going through the cart.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders.
///
/// # Example
///
/// ```rust,ignore
/// let order = OrderFactory::new(&db, customer.id)
///     .delivery_crew_id(crew.id)
///     .total(Decimal::new(2500, 2))
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    delivery_crew_id: Option<i32>,
    status: bool,
    total: Decimal,
    date: DateTime<Utc>,
}

impl<'a> OrderFactory<'a> {
    /// Creates a pending, unassigned order for `user_id` dated now with a zero total.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            delivery_crew_id: None,
            status: false,
            total: Decimal::ZERO,
            date: Utc::now(),
        }
    }

    pub fn delivery_crew_id(mut self, delivery_crew_id: i32) -> Self {
        self.delivery_crew_id = Some(delivery_crew_id);
        self
    }

    pub fn status(mut self, status: bool) -> Self {
        self.status = status;
        self
    }

    pub fn total(mut self, total: Decimal) -> Self {
        self.total = total;
        self
    }

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Builds and inserts the order.
    ///
    /// # Returns
    /// - `Ok(entity::order::Model)` - Created order
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        entity::order::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            delivery_crew_id: ActiveValue::Set(self.delivery_crew_id),
            status: ActiveValue::Set(self.status),
            total: ActiveValue::Set(self.total),
            date: ActiveValue::Set(self.date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending, unassigned order for the given user.
pub async fn create_order(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, user_id).build().await
}

/// Attaches a line for `menu_item` to an existing order.
pub async fn create_order_item(
    db: &DatabaseConnection,
    order_id: i32,
    menu_item: &entity::menu_item::Model,
    quantity: i32,
) -> Result<entity::order_item::Model, DbErr> {
    entity::order_item::ActiveModel {
        order_id: ActiveValue::Set(order_id),
        menuitem_id: ActiveValue::Set(menu_item.id),
        quantity: ActiveValue::Set(quantity),
        unit_price: ActiveValue::Set(menu_item.price),
        price: ActiveValue::Set(menu_item.price * Decimal::from(quantity)),
        ..Default::default()
    }
    .insert(db)
    .await
}
