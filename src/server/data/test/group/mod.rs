use crate::server::data::group::GroupRepository;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, group},
};

mod add_member;
mod get_members;
mod remove_member;
