//! User service for account registration.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, RegisterUserParams, User},
    util::password::hash_password,
};

const DUPLICATE_USERNAME_MESSAGE: &str = "A user with that username already exists.";

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new customer account.
    ///
    /// New users belong to no group. The password is stored only as an Argon2 hash.
    ///
    /// # Arguments
    /// - `params` - Username, optional email and plaintext password
    ///
    /// # Returns
    /// - `Ok(User)` - Created user
    /// - `Err(AppError::BadRequest)` - Username or password missing, or username taken
    /// - `Err(AppError)` - Database or hashing failure
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        if params.username.is_empty() {
            return Err(AppError::BadRequest("Username is required".to_string()));
        }
        if params.password.is_empty() {
            return Err(AppError::BadRequest("Password is required".to_string()));
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_username(&params.username).await?.is_some() {
            return Err(AppError::BadRequest(DUPLICATE_USERNAME_MESSAGE.to_string()));
        }

        let password_hash = hash_password(params.password).await?;

        let user = user_repo
            .create(CreateUserParams {
                username: params.username,
                email: params.email,
                password_hash,
            })
            .await
            .map_err(AppError::on_unique_violation(DUPLICATE_USERNAME_MESSAGE))?;

        tracing::info!("Registered user {}", user.id);

        Ok(user)
    }
}
