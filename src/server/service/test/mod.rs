use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

mod cart;
mod order;

/// Loads a factory-created user with their groups, as the guard would.
async fn load_user(db: &DatabaseConnection, user_id: i32) -> Result<User, AppError> {
    UserRepository::new(db)
        .find_by_id(user_id)
        .await?
        .ok_or(AppError::NotFound("User not found".to_string()))
}

/// Builds a decimal with two decimal places from hundredths, e.g. `money(1250)` is 12.50.
fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}
