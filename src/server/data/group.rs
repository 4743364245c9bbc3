//! Group membership repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::GroupMember;

pub struct GroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::group::Model>, DbErr> {
        entity::prelude::Group::find()
            .filter(entity::group::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Gets a group by name, creating it when the seed row is missing.
    pub async fn find_or_create_by_name(&self, name: &str) -> Result<entity::group::Model, DbErr> {
        if let Some(group) = self.find_by_name(name).await? {
            return Ok(group);
        }

        entity::group::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Lists the members of a group ordered by user ID.
    ///
    /// # Arguments
    /// - `group_id` - ID of the group
    ///
    /// # Returns
    /// - `Ok(Vec<GroupMember>)` - Members, empty when the group has none
    /// - `Err(DbErr)` - Database error
    pub async fn get_members(&self, group_id: i32) -> Result<Vec<GroupMember>, DbErr> {
        let users = entity::prelude::User::find()
            .inner_join(entity::prelude::UserGroup)
            .filter(entity::user_group::Column::GroupId.eq(group_id))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(GroupMember::from_entity).collect())
    }

    pub async fn is_member(&self, user_id: i32, group_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::UserGroup::find()
            .filter(entity::user_group::Column::UserId.eq(user_id))
            .filter(entity::user_group::Column::GroupId.eq(group_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Adds a membership row. Callers check `is_member` first; a duplicate violates the
    /// unique (user, group) index.
    pub async fn add_member(&self, user_id: i32, group_id: i32) -> Result<(), DbErr> {
        entity::user_group::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            group_id: ActiveValue::Set(group_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Removes a membership.
    ///
    /// # Returns
    /// - `Ok(true)` - Membership existed and was removed
    /// - `Ok(false)` - User was not a member
    /// - `Err(DbErr)` - Database error
    pub async fn remove_member(&self, user_id: i32, group_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::UserGroup::delete_many()
            .filter(entity::user_group::Column::UserId.eq(user_id))
            .filter(entity::user_group::Column::GroupId.eq(group_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
