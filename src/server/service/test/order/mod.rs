use super::*;
use crate::{
    model::order::OrderQueryDto,
    server::{
        data::cart::CartRepository,
        model::{
            order::{self, OrderQuery, OrderUpdate, UpdateOrderParams},
            query::Paginated,
        },
        service::order::OrderService,
    },
};
use entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::factory::{menu_item::MenuItemFactory, order::OrderFactory};

mod delete;
mod get_by_id;
mod place;

fn order_ids(page: &Paginated<order::Order>) -> Vec<i32> {
    page.items.iter().map(|order| order.id).collect()
}
