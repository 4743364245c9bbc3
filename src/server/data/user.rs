//! User data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParams, User};

/// Repository providing database operations for users and their group names.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user with no group memberships.
    ///
    /// # Arguments
    /// - `params` - Username, email and an already hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on `username`
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            date_joined: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity, Vec::new()))
    }

    /// Finds a user by ID together with their group names.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let groups = self.get_group_names(entity.id).await?;

        Ok(Some(User::from_entity(entity, groups)))
    }

    /// Finds the raw user row by username.
    ///
    /// Returns the entity rather than the domain model because login needs the stored
    /// password hash.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Names of the groups a user belongs to, sorted alphabetically.
    pub async fn get_group_names(&self, user_id: i32) -> Result<Vec<String>, DbErr> {
        let groups = entity::prelude::Group::find()
            .inner_join(entity::prelude::UserGroup)
            .filter(entity::user_group::Column::UserId.eq(user_id))
            .order_by_asc(entity::group::Column::Name)
            .all(self.db)
            .await?;

        Ok(groups.into_iter().map(|group| group.name).collect())
    }
}
