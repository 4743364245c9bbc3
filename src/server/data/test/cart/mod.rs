use crate::server::{data::cart::CartRepository, model::cart::CreateCartItemParams};
use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_by_user;
