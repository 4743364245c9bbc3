use crate::server::{
    data::order::OrderRepository,
    model::{
        order::{OrderFilter, OrderScope, OrderSort},
        query::{PageRequest, Sort},
    },
};
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, order::OrderFactory},
};

mod delete;
mod update;

fn ids(orders: &[entity::order::Model]) -> Vec<i32> {
    orders.iter().map(|order| order.id).collect()
}
