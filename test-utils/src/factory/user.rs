//! User factory for creating test user entities.
//!
//! Passwords are hashed with deliberately weak Argon2 parameters so tests stay fast. The
//! resulting PHC string carries its parameters, so the application's verifier accepts it.

use crate::factory::{
    group::{add_user_to_group, DELIVERY_CREW, MANAGER},
    helpers::next_id,
};
use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Algorithm, Argon2, Params, Version,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Password given to every factory user unless overridden.
pub const DEFAULT_PASSWORD: &str = "lemon-password";

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::{group, user::UserFactory};
///
/// let user = UserFactory::new(&db)
///     .username("adrian")
///     .group(group::DELIVERY_CREW)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    email: String,
    password: String,
    groups: Vec<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user{id}"` where id is auto-incremented
    /// - email: `"user{id}@littlelemon.test"`
    /// - password: [`DEFAULT_PASSWORD`]
    /// - groups: none
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user{}", id),
            email: format!("user{}@littlelemon.test", id),
            password: DEFAULT_PASSWORD.to_string(),
            groups: Vec::new(),
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Adds the user to the named group once inserted.
    pub fn group(mut self, name: impl Into<String>) -> Self {
        self.groups.push(name.into());
        self
    }

    /// Builds and inserts the user entity and its group memberships.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert or a hashing failure
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(hash_password(&self.password)?),
            date_joined: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for group in &self.groups {
            add_user_to_group(self.db, user.id, group).await?;
        }

        Ok(user)
    }
}

/// Hashes a password into an Argon2id PHC string using minimal cost parameters.
pub fn hash_password(password: &str) -> Result<String, DbErr> {
    let params = Params::new(8, 1, 1, None).map_err(|e| DbErr::Custom(e.to_string()))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt =
        SaltString::from_b64("bGl0dGxlbGVtb25zYWx0").map_err(|e| DbErr::Custom(e.to_string()))?;

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| DbErr::Custom(e.to_string()))
}

/// Creates a customer (a user in no group).
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a member of the "Manager" group.
pub async fn create_manager(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).group(MANAGER).build().await
}

/// Creates a member of the "Delivery crew" group.
pub async fn create_delivery_crew(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).group(DELIVERY_CREW).build().await
}
