//! Group factory for the authorization groups.
//!
//! Groups are seeded by migrations in production. Test databases are built straight from
//! the entities, so factories create the rows lazily on first use.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

/// Name of the group whose members manage the menu, staff and orders.
pub const MANAGER: &str = "Manager";

/// Name of the group whose members deliver orders.
pub const DELIVERY_CREW: &str = "Delivery crew";

/// Returns the group with the given name, inserting it when missing.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Group name such as [`MANAGER`] or [`DELIVERY_CREW`]
///
/// # Returns
/// - `Ok(entity::group::Model)` - Existing or newly created group
/// - `Err(DbErr)` - Database error during lookup or insert
pub async fn get_or_create_group(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::group::Model, DbErr> {
    let existing = entity::prelude::Group::find()
        .filter(entity::group::Column::Name.eq(name))
        .one(db)
        .await?;

    if let Some(group) = existing {
        return Ok(group);
    }

    entity::group::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Adds a user to the named group, creating the group if needed.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the user to add
/// - `name` - Group name
///
/// # Returns
/// - `Ok(entity::user_group::Model)` - Created membership row
/// - `Err(DbErr)` - Database error during insert
pub async fn add_user_to_group(
    db: &DatabaseConnection,
    user_id: i32,
    name: &str,
) -> Result<entity::user_group::Model, DbErr> {
    let group = get_or_create_group(db, name).await?;

    entity::user_group::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        group_id: ActiveValue::Set(group.id),
        ..Default::default()
    }
    .insert(db)
    .await
}
