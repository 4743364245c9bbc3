use crate::server::{data::user::UserRepository, model::user::CreateUserParams};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, group, user::UserFactory},
};

mod find_by_username;
