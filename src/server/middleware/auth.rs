//! Group based authorization guard.
//!
//! Every handler resolves its caller through [`AuthGuard`]. Requiring no permissions checks
//! only that a logged-in user exists; each [`Permission`] adds a group membership check.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::{Role, User},
};

/// Message used when a caller lacks a required group and the endpoint set none.
const DEFAULT_DENIAL_MESSAGE: &str = "You do not have permission to perform this action.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Member of the "Manager" group
    Manager,
    /// Member of the "Delivery crew" group
    DeliveryCrew,
}

impl Permission {
    fn role(&self) -> Role {
        match self {
            Self::Manager => Role::Manager,
            Self::DeliveryCrew => Role::DeliveryCrew,
        }
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
    denial_message: &'a str,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self {
            db,
            session,
            denial_message: DEFAULT_DENIAL_MESSAGE,
        }
    }

    /// Sets the message returned with the 403 when a permission check fails.
    pub fn denial_message(mut self, message: &'a str) -> Self {
        self.denial_message = message;
        self
    }

    /// Resolves the session's user and checks every permission.
    ///
    /// # Arguments
    /// - `permissions` - Group memberships the user must all hold; empty for any user
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user with their groups
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in (401)
    /// - `Err(AuthError::UserNotInDatabase)` - Session references a deleted user (401)
    /// - `Err(AuthError::AccessDenied)` - A permission is missing (403)
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            if !user.has_role(permission.role()) {
                return Err(
                    AuthError::AccessDenied(user_id, self.denial_message.to_string()).into(),
                );
            }
        }

        Ok(user)
    }
}
