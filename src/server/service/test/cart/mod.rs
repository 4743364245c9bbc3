use super::*;
use crate::server::{model::cart::AddCartItemParams, service::cart::CartService};
use test_utils::factory::menu_item::MenuItemFactory;

mod clear;
mod get_for_user;
