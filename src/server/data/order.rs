//! Order repository.
//!
//! Orders are read in two steps: the page of order rows is selected first, then their items,
//! menu items and delivery crew members are fetched in bulk by [`OrderRepository::with_relations`].

use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::menu_item::MenuItemRepository,
    model::{
        order::{OrderFilter, OrderScope, OrderSort, OrderWithRelations},
        query::{PageRequest, Sort},
    },
};

pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a pending order with no delivery crew.
    ///
    /// # Arguments
    /// - `user_id` - Customer placing the order
    /// - `total` - Sum of the line prices
    /// - `date` - Placement time
    ///
    /// # Returns
    /// - `Ok(Model)` - Created order row
    /// - `Err(DbErr)` - Database error
    pub async fn create(
        &self,
        user_id: i32,
        total: Decimal,
        date: DateTime<Utc>,
    ) -> Result<entity::order::Model, DbErr> {
        entity::order::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            delivery_crew_id: ActiveValue::Set(None),
            status: ActiveValue::Set(false),
            total: ActiveValue::Set(total),
            date: ActiveValue::Set(date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Copies a cart row into an item of the given order.
    pub async fn create_item(
        &self,
        order_id: i32,
        cart_item: &entity::cart::Model,
    ) -> Result<entity::order_item::Model, DbErr> {
        entity::order_item::ActiveModel {
            order_id: ActiveValue::Set(order_id),
            menuitem_id: ActiveValue::Set(cart_item.menuitem_id),
            quantity: ActiveValue::Set(cart_item.quantity),
            unit_price: ActiveValue::Set(cart_item.unit_price),
            price: ActiveValue::Set(cart_item.price),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::order::Model>, DbErr> {
        entity::prelude::Order::find_by_id(id).one(self.db).await
    }

    /// Gets one page of the orders visible in `scope` that match `filter`.
    ///
    /// # Returns
    /// - `Ok((orders, total))` - Order rows on the requested page and the total match count
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        scope: OrderScope,
        filter: &OrderFilter,
        sort: Sort<OrderSort>,
        page: PageRequest,
    ) -> Result<(Vec<entity::order::Model>, u64), DbErr> {
        let column = match sort.field {
            OrderSort::Id => entity::order::Column::Id,
            OrderSort::Date => entity::order::Column::Date,
            OrderSort::Total => entity::order::Column::Total,
            OrderSort::Status => entity::order::Column::Status,
        };

        let paginator = entity::prelude::Order::find()
            .filter(scope_condition(scope))
            .filter(filter_condition(filter))
            .order_by(column, sort.order())
            .order_by_asc(entity::order::Column::Id)
            .paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let orders = paginator.fetch_page(page.index()).await?;

        Ok((orders, total))
    }

    /// Loads the items, menu items and delivery crew of each order.
    ///
    /// Issues a fixed number of queries regardless of how many orders are passed. The output
    /// keeps the input order.
    pub async fn with_relations(
        &self,
        orders: Vec<entity::order::Model>,
    ) -> Result<Vec<OrderWithRelations>, DbErr> {
        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let order_ids: Vec<i32> = orders.iter().map(|order| order.id).collect();
        let items = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.is_in(order_ids))
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await?;

        let menuitem_ids: Vec<i32> = items.iter().map(|item| item.menuitem_id).collect();
        let menu_items = MenuItemRepository::new(self.db)
            .get_by_ids(menuitem_ids)
            .await?;

        let crew_ids: Vec<i32> = orders
            .iter()
            .filter_map(|order| order.delivery_crew_id)
            .collect();
        let crews: HashMap<i32, entity::user::Model> = if crew_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::User::find()
                .filter(entity::user::Column::Id.is_in(crew_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|user| (user.id, user))
                .collect()
        };

        let mut items_by_order: HashMap<i32, Vec<_>> = HashMap::new();
        for item in items {
            let (menu_item, category) = menu_items.get(&item.menuitem_id).cloned().ok_or(
                DbErr::RecordNotFound(format!(
                    "Menu item {} of order item {} not found",
                    item.menuitem_id, item.id
                )),
            )?;
            items_by_order
                .entry(item.order_id)
                .or_default()
                .push((item, menu_item, category));
        }

        Ok(orders
            .into_iter()
            .map(|order| OrderWithRelations {
                delivery_crew: order
                    .delivery_crew_id
                    .and_then(|crew_id| crews.get(&crew_id).cloned()),
                items: items_by_order.remove(&order.id).unwrap_or_default(),
                order,
            })
            .collect())
    }

    /// Applies a status change and/or a delivery crew change to an order.
    ///
    /// # Arguments
    /// - `order` - Current order row
    /// - `status` - New status, unchanged when `None`
    /// - `delivery_crew_id` - New assignment (`Some(None)` unassigns), unchanged when `None`
    ///
    /// # Returns
    /// - `Ok(Model)` - Updated order row
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        order: entity::order::Model,
        status: Option<bool>,
        delivery_crew_id: Option<Option<i32>>,
    ) -> Result<entity::order::Model, DbErr> {
        let mut active: entity::order::ActiveModel = order.into();

        if let Some(status) = status {
            active.status = ActiveValue::Set(status);
        }
        if let Some(delivery_crew_id) = delivery_crew_id {
            active.delivery_crew_id = ActiveValue::Set(delivery_crew_id);
        }

        active.update(self.db).await
    }

    /// Deletes an order and, through the foreign key, its items.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Order::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

fn scope_condition(scope: OrderScope) -> Condition {
    match scope {
        OrderScope::All => Condition::all(),
        OrderScope::AssignedTo(crew_id) => {
            Condition::all().add(entity::order::Column::DeliveryCrewId.eq(crew_id))
        }
        OrderScope::PlacedBy(user_id) => {
            Condition::all().add(entity::order::Column::UserId.eq(user_id))
        }
    }
}

fn filter_condition(filter: &OrderFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(status) = filter.status {
        condition = condition.add(entity::order::Column::Status.eq(status));
    }
    if let Some(day) = filter.date {
        let start = day.and_time(NaiveTime::MIN).and_utc();
        let end = start + Duration::days(1);

        condition = condition
            .add(entity::order::Column::Date.gte(start))
            .add(entity::order::Column::Date.lt(end));
    }

    condition
}
