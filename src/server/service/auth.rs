use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    util::password::verify_password,
};

/// Service for username/password authentication.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies a username and password.
    ///
    /// Unknown usernames and wrong passwords produce the same error so the response does
    /// not reveal which usernames exist.
    ///
    /// # Arguments
    /// - `username` - Username to log in as
    /// - `password` - Plaintext password to check against the stored hash
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AuthError::InvalidCredentials)` - Unknown user or wrong password
    /// - `Err(AppError)` - Database or hashing failure
    pub async fn login(&self, username: &str, password: String) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(entity) = user_repo.find_by_username(username.trim()).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, entity.password_hash.clone()).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let groups = user_repo.get_group_names(entity.id).await?;

        tracing::info!("User {} logged in", entity.id);

        Ok(User::from_entity(entity, groups))
    }
}
