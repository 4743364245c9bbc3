//! Staff group membership management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{group::GroupRepository, user::UserRepository},
    error::AppError,
    model::user::{GroupMember, Role},
};

pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_members(&self, role: Role) -> Result<Vec<GroupMember>, AppError> {
        let group_repo = GroupRepository::new(self.db);
        let group = group_repo.find_or_create_by_name(role.group_name()).await?;

        Ok(group_repo.get_members(group.id).await?)
    }

    /// Adds the user with the given username to the role's group.
    ///
    /// # Returns
    /// - `Ok(true)` - User was added
    /// - `Ok(false)` - User was already a member
    /// - `Err(AppError::NotFound)` - No user has that username
    pub async fn add_member(&self, role: Role, username: &str) -> Result<bool, AppError> {
        let Some(user) = UserRepository::new(self.db)
            .find_by_username(username.trim())
            .await?
        else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        let group_repo = GroupRepository::new(self.db);
        let group = group_repo.find_or_create_by_name(role.group_name()).await?;

        if group_repo.is_member(user.id, group.id).await? {
            return Ok(false);
        }

        group_repo.add_member(user.id, group.id).await?;

        tracing::info!("Added user {} to group '{}'", user.id, group.name);

        Ok(true)
    }

    /// Removes a user from the role's group.
    ///
    /// # Returns
    /// - `Ok(())` - Membership removed
    /// - `Err(AppError::NotFound)` - User does not exist or is not a member
    pub async fn remove_member(&self, role: Role, user_id: i32) -> Result<(), AppError> {
        if UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let group_repo = GroupRepository::new(self.db);
        let group = group_repo.find_or_create_by_name(role.group_name()).await?;

        if !group_repo.remove_member(user_id, group.id).await? {
            return Err(AppError::NotFound(
                "User is not a member of this group".to_string(),
            ));
        }

        tracing::info!("Removed user {} from group '{}'", user_id, group.name);

        Ok(())
    }
}
